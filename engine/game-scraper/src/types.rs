use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Column headers of the player stats table on the game page.
pub const COL_NUMBER: &str = "Shirt number #";
pub const COL_PLAYER: &str = "Player";
pub const COL_POSITION: &str = "Position POS";
pub const COL_TIME_ON_ICE: &str = "Time on ice TOI";

/// Sentinels used when a game page is missing its header elements.
/// Scraping one game must never abort the batch.
pub const UNKNOWN_DATE: &str = "Unknown Date";
pub const UNKNOWN_HOME: &str = "Unknown Home";
pub const UNKNOWN_AWAY: &str = "Unknown Away";
pub const UNKNOWN_TEAM: &str = "Unknown Team";

/// A raw table row: column header text -> cell text.
pub type RawRow = HashMap<String, String>;

/// A game page as parsed straight off the DOM, rows still keyed by the
/// full set of stat column headers.
#[derive(Debug, Clone)]
pub struct ParsedGame {
    pub game_date: String,
    pub home_team: String,
    pub away_team: String,
    /// Team name -> raw stat rows. Tables whose header matches neither
    /// the home nor the away team keep their own literal name.
    pub players: BTreeMap<String, Vec<RawRow>>,
}

/// One player stat line from the scraped table.
///
/// `number` may be empty when the page carried no shirt number. A
/// `time_on_ice` of `"00:00"` means the player did not take the ice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedPlayer {
    pub number: String,
    pub name: String,
    pub position: String,
    #[serde(rename = "time on ice")]
    pub time_on_ice: String,
}

/// A canonical scraped game.
///
/// `match_id` is attached later by the match identity resolver; a game
/// that never resolves one is simply excluded from the downstream stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedGame {
    pub game_date: String,
    pub home_team: String,
    pub away_team: String,
    pub players: BTreeMap<String, Vec<ScrapedPlayer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_id: Option<u64>,
}
