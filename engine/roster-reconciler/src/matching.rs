use chrono::{NaiveDate, NaiveDateTime};
use game_scraper::ScrapedGame;
use league_fetcher::models::{MatchFeed, MatchSummary};
use tracing::warn;

use crate::report::RunReport;

/// Scraped game date format, e.g. "13.09.2024"
const GAME_DATE_FORMAT: &str = "%d.%m.%Y";
/// Official feed start timestamp format, e.g. "2024-09-13 19:30:00"
const MATCH_START_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Case- and whitespace-insensitive team pair, sorted so home/away order
/// never affects comparison.
fn normalized_team_pair(first: &str, second: &str) -> [String; 2] {
    let mut pair = [first.trim().to_lowercase(), second.trim().to_lowercase()];
    pair.sort();
    pair
}

/// Find the official match for a scraped game.
///
/// A candidate matches when its calendar date and its normalized team
/// pair both equal the game's. The first match in feed order wins; ties
/// are not detected. Unparseable dates are logged and treated as
/// non-matching, never fatal.
pub fn resolve_match_id(game: &ScrapedGame, matches: &[MatchSummary]) -> Option<u64> {
    let game_date = match NaiveDate::parse_from_str(&game.game_date, GAME_DATE_FORMAT) {
        Ok(date) => date,
        Err(e) => {
            warn!("Error parsing game date '{}': {}", game.game_date, e);
            return None;
        }
    };

    let game_teams = normalized_team_pair(&game.home_team, &game.away_team);

    for candidate in matches {
        let start = match NaiveDateTime::parse_from_str(&candidate.start_date, MATCH_START_FORMAT)
        {
            Ok(start) => start,
            Err(e) => {
                warn!(
                    "Error parsing start_date '{}' for match {}: {}",
                    candidate.start_date, candidate.id, e
                );
                continue;
            }
        };

        if start.date() == game_date
            && normalized_team_pair(&candidate.home.name, &candidate.guest.name) == game_teams
        {
            return Some(candidate.id);
        }
    }

    None
}

/// Attach match ids to a batch of scraped games.
///
/// A game with no official match keeps `match_id == None` and is counted
/// as unmatched; that is an expected outcome, not an error.
pub fn resolve_all(games: &mut [ScrapedGame], feed: &MatchFeed, report: &mut RunReport) {
    report.games_seen = games.len();

    for game in games.iter_mut() {
        match resolve_match_id(game, &feed.matches) {
            Some(match_id) => {
                game.match_id = Some(match_id);
                report.games_matched += 1;
            }
            None => {
                report.games_unmatched += 1;
                warn!(
                    "No official match for {} vs {} on {}; game excluded downstream",
                    game.home_team, game.away_team, game.game_date
                );
            }
        }
    }
}
