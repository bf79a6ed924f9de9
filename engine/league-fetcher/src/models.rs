use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The season match list document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchFeed {
    #[serde(default)]
    pub matches: Vec<MatchSummary>,
}

/// One officially scheduled match from the season list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub id: u64,

    /// Start timestamp, "YYYY-MM-DD HH:MM:SS"
    pub start_date: String,

    pub home: TeamRef,

    pub guest: TeamRef,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamRef {
    #[serde(default)]
    pub name: String,
}

/// The per-match game-info document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameInfo {
    #[serde(rename = "gameInfo", default)]
    pub game_info: GameHeader,

    #[serde(default)]
    pub roster: Roster,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameHeader {
    #[serde(rename = "teamInfo", default)]
    pub team_info: TeamInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamInfo {
    #[serde(default)]
    pub home: TeamRef,

    #[serde(default)]
    pub visitor: TeamRef,
}

/// Published rosters for both teams, each keyed by an arbitrary internal key
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub home: HashMap<String, RosterEntry>,

    #[serde(default)]
    pub visitor: HashMap<String, RosterEntry>,
}

/// One player on a published roster
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Shirt number; occasionally absent in the feed
    #[serde(default)]
    pub jersey: Option<u32>,

    /// Given name
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub surname: String,

    #[serde(default)]
    pub position: String,
}

impl RosterEntry {
    /// "given surname", trimmed when either part is empty
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname).trim().to_string()
    }

    /// Stringified jersey number used as the reconciliation key.
    ///
    /// An absent jersey becomes the literal "None" key, so every
    /// no-number entry collapses onto the same key. Known quirk of the
    /// dataset; kept as-is rather than deduplicating by name.
    pub fn jersey_key(&self) -> String {
        match self.jersey {
            Some(jersey) => jersey.to_string(),
            None => "None".to_string(),
        }
    }
}
