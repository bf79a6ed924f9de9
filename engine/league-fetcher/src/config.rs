use serde::{Deserialize, Serialize};

/// Configuration for the league feed client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Base URL of the published feed bucket
    pub base_url: String,

    /// Season the match list is fetched for (e.g., "2024")
    pub season: String,

    /// Stage/division document within the season (e.g., "1")
    pub stage: String,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: "https://s3-eu-west-1.amazonaws.com/nihl.hokejovyzapis.cz".to_string(),
            season: "2024".to_string(),
            stage: "1".to_string(),
            timeout_secs: 30,
        }
    }
}

impl FetcherConfig {
    /// Load configuration from environment variables, falling back to the
    /// published feed defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("LEAGUE_FEED_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(season) = std::env::var("LEAGUE_FEED_SEASON") {
            config.season = season;
        }
        if let Ok(stage) = std::env::var("LEAGUE_FEED_STAGE") {
            config.stage = stage;
        }

        config
    }

    /// URL of the season match list document
    pub fn match_feed_url(&self) -> String {
        format!("{}/league-matches/{}/{}.json", self.base_url, self.season, self.stage)
    }

    /// URL of the game-info document for one match
    pub fn game_info_url(&self, match_id: u64) -> String {
        format!("{}/matches/{}/game-info.json", self.base_url, match_id)
    }
}
