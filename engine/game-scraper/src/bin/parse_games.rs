use anyhow::{Context, Result};
use game_scraper::parse_games_dir;
use std::fs;
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let games_dir = std::env::args().nth(1).unwrap_or_else(|| "games_html".to_string());
    let output_path = std::env::args().nth(2).unwrap_or_else(|| "all_games.json".to_string());

    info!("Parsing saved game pages from {}", games_dir);
    let games = parse_games_dir(&games_dir)?;

    let json_content = serde_json::to_string_pretty(&games)?;
    fs::write(&output_path, json_content)
        .with_context(|| format!("Failed to write {output_path}"))?;

    info!("Parsed {} games. Data written to {}", games.len(), output_path);
    Ok(())
}
