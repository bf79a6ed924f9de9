use serde::{Deserialize, Serialize};

/// Which single source carried a player that the other source missed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerOrigin {
    /// Only in the scraped per-game table
    Local,
    /// Only on the officially published roster
    Official,
}

impl PlayerOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerOrigin::Local => "local",
            PlayerOrigin::Official => "official",
        }
    }
}

/// One player in the reconciled union of both sources.
///
/// `source` is present exactly when `present_in_both` is false. `team` is
/// attached by the assembler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciledPlayer {
    pub number: String,
    pub name: String,
    pub position: String,
    #[serde(rename = "time on ice")]
    pub time_on_ice: String,
    pub present_in_both: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PlayerOrigin>,
    #[serde(default)]
    pub team: String,
}

/// One fully reconciled game: home-team union first, then away
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalGame {
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub players: Vec<ReconciledPlayer>,
}
