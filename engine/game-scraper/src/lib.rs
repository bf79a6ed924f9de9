//! Game page ingestion for the scouting site.
//!
//! Takes rendered game pages saved by the browser session and turns them
//! into canonical scraped games: date, home/away team names, and per-team
//! player stat lines keyed by team name.

pub mod parser;
pub mod types;

pub use parser::{normalize_game, parse_game_document, parse_game_file, parse_games_dir};
pub use types::{ParsedGame, RawRow, ScrapedGame, ScrapedPlayer};
