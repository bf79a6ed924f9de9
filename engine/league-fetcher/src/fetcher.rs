use anyhow::{Context, Result};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{error, info};

use crate::config::FetcherConfig;
use crate::models::{GameInfo, MatchFeed};

/// Official league feed client
pub struct LeagueFetcher {
    config: FetcherConfig,
    client: Client,
}

impl LeagueFetcher {
    /// Create a new fetcher instance
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { config, client })
    }

    /// Fetch the season match list
    pub async fn fetch_match_feed(&self) -> Result<MatchFeed> {
        let url = self.config.match_feed_url();
        info!("Fetching season match list from: {}", url);

        let response =
            self.client.get(&url).send().await.context("Failed to fetch season match list")?;

        if !response.status().is_success() {
            anyhow::bail!("Match list request failed with status: {}", response.status());
        }

        let feed: MatchFeed =
            response.json().await.context("Failed to parse season match list JSON")?;

        info!("Successfully fetched {} matches", feed.matches.len());
        Ok(feed)
    }

    /// Fetch the game-info document for one match
    pub async fn fetch_game_info(&self, match_id: u64) -> Result<GameInfo> {
        let url = self.config.game_info_url(match_id);
        info!("Fetching game info for match id: {}", match_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch game info for match {match_id}"))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Game info request for match {} failed with status: {}",
                match_id,
                response.status()
            );
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse game info JSON for match {match_id}"))
    }

    /// Fetch game info sequentially for a list of match ids.
    ///
    /// A failed fetch is logged and that match is skipped; the returned
    /// map simply lacks its id. No retry is attempted within the run.
    pub async fn fetch_game_infos(&self, match_ids: &[u64]) -> HashMap<u64, GameInfo> {
        let mut infos = HashMap::new();

        for &match_id in match_ids {
            if infos.contains_key(&match_id) {
                continue;
            }
            match self.fetch_game_info(match_id).await {
                Ok(info) => {
                    infos.insert(match_id, info);
                }
                Err(e) => {
                    error!("Error fetching data for match {}: {e:#}", match_id);
                }
            }
        }

        info!("Fetched game info for {} of {} matches", infos.len(), match_ids.len());
        infos
    }
}
