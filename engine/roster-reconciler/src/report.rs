use serde::Serialize;
use std::fmt;

/// Per-run counters for the reconciliation pipeline.
///
/// Skips and fetch failures in this pipeline are expected filtering
/// outcomes, not errors; the report makes them visible in one place
/// instead of scattering them across log lines.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// Scraped games fed into the resolver
    pub games_seen: usize,

    /// Games that resolved an official match id
    pub games_matched: usize,

    /// Games with no official match; excluded downstream
    pub games_unmatched: usize,

    /// Game-info documents fetched successfully
    pub infos_fetched: usize,

    /// Game-info fetches that failed; those matches are final for the run
    pub fetch_failures: usize,

    /// Matched games dropped at assembly because their info never arrived
    pub games_missing_info: usize,

    /// Games that made it into the final dataset
    pub games_assembled: usize,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "games: {} seen, {} matched, {} unmatched; game info: {} fetched, {} failed; \
             assembled: {} ({} dropped without info)",
            self.games_seen,
            self.games_matched,
            self.games_unmatched,
            self.infos_fetched,
            self.fetch_failures,
            self.games_assembled,
            self.games_missing_info,
        )
    }
}
