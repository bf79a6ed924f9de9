//! Client for the official league feed.
//!
//! Two immutable JSON documents are served per season: the season match
//! list, and one game-info document per match carrying the published
//! rosters for both teams.

pub mod config;
pub mod fetcher;
pub mod models;

pub use config::FetcherConfig;
pub use fetcher::LeagueFetcher;
pub use models::{GameInfo, MatchFeed, MatchSummary, Roster, RosterEntry, TeamRef};
