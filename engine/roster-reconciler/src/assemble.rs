use game_scraper::ScrapedGame;
use league_fetcher::models::GameInfo;
use std::collections::HashMap;
use tracing::warn;

use crate::report::RunReport;
use crate::types::FinalGame;
use crate::union::union_players;

/// Assemble one final game from a resolved scraped game and its fetched
/// game info.
///
/// The home roster is unioned against the home team's scraped list and
/// the visitor roster against the away team's; each union is tagged with
/// its team name and the home players come first. Returns `None` for a
/// game that never resolved a match id.
pub fn assemble_game(game: &ScrapedGame, info: &GameInfo) -> Option<FinalGame> {
    game.match_id?;

    let empty = Vec::new();
    let local_home = game.players.get(&game.home_team).unwrap_or(&empty);
    let local_away = game.players.get(&game.away_team).unwrap_or(&empty);

    let mut players = union_players(local_home, &info.roster.home);
    for player in &mut players {
        player.team = game.home_team.clone();
    }

    let mut away_players = union_players(local_away, &info.roster.visitor);
    for player in &mut away_players {
        player.team = game.away_team.clone();
    }
    players.extend(away_players);

    Some(FinalGame {
        date: game.game_date.clone(),
        home_team: game.home_team.clone(),
        away_team: game.away_team.clone(),
        players,
    })
}

/// Assemble the final dataset, preserving the input game order.
///
/// A game without a match id, or whose game info was never fetched, is
/// dropped entirely; partial games are worse than absent ones for the
/// downstream consumers.
pub fn assemble_all(
    games: &[ScrapedGame],
    infos: &HashMap<u64, GameInfo>,
    report: &mut RunReport,
) -> Vec<FinalGame> {
    let mut final_games = Vec::new();

    for game in games {
        let match_id = match game.match_id {
            Some(match_id) => match_id,
            None => {
                warn!(
                    "Skipping {} vs {}: no match id",
                    game.home_team, game.away_team
                );
                continue;
            }
        };

        let info = match infos.get(&match_id) {
            Some(info) => info,
            None => {
                report.games_missing_info += 1;
                warn!("Skipping match {}: no game info available", match_id);
                continue;
            }
        };

        if let Some(final_game) = assemble_game(game, info) {
            report.games_assembled += 1;
            final_games.push(final_game);
        }
    }

    final_games
}
