use anyhow::{Context, Result};
use game_scraper::ScrapedGame;
use league_fetcher::{FetcherConfig, LeagueFetcher};
use roster_reconciler::{assemble_all, resolve_all, RunReport};
use std::collections::HashSet;
use std::fs;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let input_path = std::env::args().nth(1).unwrap_or_else(|| "all_games.json".to_string());
    let output_path = std::env::args().nth(2).unwrap_or_else(|| "final_games.json".to_string());

    // The parsed games file is the one input whose absence is fatal.
    let json_content = fs::read_to_string(&input_path)
        .with_context(|| format!("Missing input file: {input_path}"))?;
    let mut games: Vec<ScrapedGame> = serde_json::from_str(&json_content)
        .with_context(|| format!("Invalid games JSON in {input_path}"))?;
    info!("Loaded {} scraped games from {}", games.len(), input_path);

    let fetcher = LeagueFetcher::new(FetcherConfig::from_env())?;
    let feed = fetcher.fetch_match_feed().await.context("Failed to fetch season match list")?;

    let mut report = RunReport::default();
    resolve_all(&mut games, &feed, &mut report);

    // Fetch game info in game order; ids resolved by more than one game
    // are fetched once.
    let match_ids: Vec<u64> = games.iter().filter_map(|game| game.match_id).collect();
    let unique_ids: HashSet<u64> = match_ids.iter().copied().collect();
    let infos = fetcher.fetch_game_infos(&match_ids).await;
    report.infos_fetched = infos.len();
    report.fetch_failures = unique_ids.len() - infos.len();

    let final_games = assemble_all(&games, &infos, &mut report);

    let final_json = serde_json::to_string_pretty(&final_games)?;
    fs::write(&output_path, final_json)
        .with_context(|| format!("Failed to write {output_path}"))?;

    info!("Wrote {} reconciled games to {}", final_games.len(), output_path);
    info!("Run report: {}", report);
    Ok(())
}
