use anyhow::{Context, Result};
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::types::{
    ParsedGame, RawRow, ScrapedGame, ScrapedPlayer, COL_NUMBER, COL_PLAYER, COL_POSITION,
    COL_TIME_ON_ICE, UNKNOWN_AWAY, UNKNOWN_DATE, UNKNOWN_HOME, UNKNOWN_TEAM,
};

/// A stats table with fewer columns than this is not a player table.
const MIN_STAT_COLUMNS: usize = 5;

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("Failed to create selector '{css}': {e}"))
}

/// Collect the text of an element, joining nested text nodes with single
/// spaces and collapsing runs of whitespace.
fn element_text(el: ElementRef) -> String {
    el.text().collect::<Vec<_>>().join(" ").split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse one rendered game page into its raw table form.
///
/// Returns `Ok(None)` when the page has no wide stats block at all; the
/// caller skips the page and the batch continues. Missing date or team
/// header elements degrade to sentinel values instead.
pub fn parse_game_document(html: &str) -> Result<Option<ParsedGame>> {
    let document = Html::parse_document(html);

    let date_selector = selector("div[class*=\"styled__DateWrapper\"]")?;
    let home_selector = selector("span[class*=\"styled__MatchHeaderHome\"] a")?;
    let away_selector = selector("span[class*=\"styled__MatchHeaderAway\"] a")?;
    let wide_block_selector = selector("div[class*=\"OverviewBlocks__WideBlock\"]")?;

    let game_date = document
        .select(&date_selector)
        .next()
        .map(element_text)
        .unwrap_or_else(|| UNKNOWN_DATE.to_string());

    let home_team = document
        .select(&home_selector)
        .next()
        .map(element_text)
        .unwrap_or_else(|| UNKNOWN_HOME.to_string());

    let away_team = document
        .select(&away_selector)
        .next()
        .map(element_text)
        .unwrap_or_else(|| UNKNOWN_AWAY.to_string());

    let wide_block = match document.select(&wide_block_selector).next() {
        Some(block) => block,
        None => {
            warn!("Wide block with player tables not found");
            return Ok(None);
        }
    };

    let mut players: BTreeMap<String, Vec<RawRow>> = BTreeMap::new();
    players.insert(home_team.clone(), Vec::new());
    players.insert(away_team.clone(), Vec::new());

    // Team name headers and tables interleave in document order; each
    // table belongs to the nearest preceding header.
    let header_or_table_selector =
        selector("div[class*=\"styled__TableHeaderName\"], div[role=\"table\"]")?;
    let mut current_team = UNKNOWN_TEAM.to_string();

    for element in wide_block.select(&header_or_table_selector) {
        if element.value().attr("role") != Some("table") {
            current_team = element_text(element);
            continue;
        }

        let rows = match parse_stat_table(element)? {
            Some(rows) => rows,
            None => continue,
        };

        if current_team != home_team && current_team != away_team {
            // Neither home nor away: keep the table under its own literal
            // name so downstream stages still see it.
            warn!(
                "Table team '{}' matches neither '{}' nor '{}'; keeping under its own key",
                current_team, home_team, away_team
            );
        }
        players.entry(current_team.clone()).or_default().extend(rows);
    }

    Ok(Some(ParsedGame { game_date, home_team, away_team, players }))
}

/// Parse one `role="table"` element into raw rows.
///
/// Returns `Ok(None)` when the table is rejected: no header row, fewer
/// than [`MIN_STAT_COLUMNS`] columns, or no separate body rowgroup. Data
/// rows whose cell count differs from the header column count are skipped.
fn parse_stat_table(table: ElementRef) -> Result<Option<Vec<RawRow>>> {
    let header_row_selector = selector("div[role=\"row\"][class*=\"Table__TableHeaderRow\"]")?;
    let column_selector = selector("div[role=\"columnheader\"]")?;
    let rowgroup_selector = selector("div[role=\"rowgroup\"]")?;
    let row_selector = selector("div[role=\"row\"]")?;
    let cell_selector = selector("div[role=\"cell\"]")?;

    let header_row = match table.select(&header_row_selector).next() {
        Some(row) => row,
        None => {
            warn!("No header row found in table; skipping");
            return Ok(None);
        }
    };

    let columns: Vec<String> = header_row.select(&column_selector).map(element_text).collect();
    if columns.len() < MIN_STAT_COLUMNS {
        warn!("Table skipped: only {} columns", columns.len());
        return Ok(None);
    }

    // First rowgroup holds the header, second holds the data rows.
    let rowgroups: Vec<ElementRef> = table.select(&rowgroup_selector).collect();
    if rowgroups.len() < 2 {
        warn!("No separate body rowgroup found; skipping table");
        return Ok(None);
    }
    let body = rowgroups[1];

    let mut rows = Vec::new();
    for (row_index, row) in body.select(&row_selector).enumerate() {
        let cells: Vec<String> = row.select(&cell_selector).map(element_text).collect();
        if cells.len() != columns.len() {
            warn!(
                "Row {}: {} cells does not match {} columns; skipping row",
                row_index + 1,
                cells.len(),
                columns.len()
            );
            continue;
        }
        let raw_row: RawRow = columns.iter().cloned().zip(cells).collect();
        rows.push(raw_row);
    }

    Ok(Some(rows))
}

/// Project a raw game down to the canonical scraped form, keeping only
/// the stat columns the reconciliation pipeline consumes.
pub fn normalize_game(parsed: ParsedGame) -> ScrapedGame {
    let players = parsed
        .players
        .into_iter()
        .map(|(team, rows)| {
            let lines = rows.iter().map(row_to_player).collect();
            (team, lines)
        })
        .collect();

    ScrapedGame {
        game_date: parsed.game_date,
        home_team: parsed.home_team,
        away_team: parsed.away_team,
        players,
        match_id: None,
    }
}

fn row_to_player(row: &RawRow) -> ScrapedPlayer {
    ScrapedPlayer {
        number: row.get(COL_NUMBER).cloned().unwrap_or_default(),
        name: row.get(COL_PLAYER).cloned().unwrap_or_default(),
        position: row.get(COL_POSITION).cloned().unwrap_or_default(),
        time_on_ice: row.get(COL_TIME_ON_ICE).cloned().unwrap_or_default(),
    }
}

/// Parse and normalize one saved game page.
pub fn parse_game_file(path: &Path) -> Result<Option<ScrapedGame>> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("Failed to read game page {}", path.display()))?;
    Ok(parse_game_document(&html)?.map(normalize_game))
}

/// Parse every `.html` file in a directory of saved game pages.
///
/// A page that fails to parse is logged and skipped. A missing directory
/// is the unrecoverable startup condition and is reported by name.
pub fn parse_games_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<ScrapedGame>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Missing games directory: {}", dir.display()))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "html"))
        .collect();
    paths.sort();

    let mut games = Vec::new();
    for path in paths {
        match parse_game_file(&path) {
            Ok(Some(game)) => {
                info!(
                    "Parsed {}: {} vs {} on {}",
                    path.display(),
                    game.home_team,
                    game.away_team,
                    game.game_date
                );
                games.push(game);
            }
            Ok(None) => warn!("No player tables in {}; skipping", path.display()),
            Err(e) => warn!("Failed to parse {}: {e:#}", path.display()),
        }
    }

    Ok(games)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat_table(team: &str, rows: &[&str]) -> String {
        format!(
            r#"<div class="styled__TableHeaderName-sc-g8pcp-3">{team}</div>
            <div role="table">
              <div role="rowgroup">
                <div role="row" class="Table__TableHeaderRow-sc-1abc">
                  <div role="columnheader">Shirt number #</div>
                  <div role="columnheader">Player</div>
                  <div role="columnheader">Position POS</div>
                  <div role="columnheader">Time on ice TOI</div>
                  <div role="columnheader">Goals G</div>
                </div>
              </div>
              <div role="rowgroup">{}</div>
            </div>"#,
            rows.join("")
        )
    }

    fn stat_row(number: &str, name: &str, position: &str, toi: &str) -> String {
        format!(
            r#"<div role="row">
              <div role="cell">{number}</div>
              <div role="cell">{name}</div>
              <div role="cell">{position}</div>
              <div role="cell">{toi}</div>
              <div role="cell">0</div>
            </div>"#
        )
    }

    fn game_page(body: &str) -> String {
        format!(
            r#"<html><body>
            <div class="styled__DateWrapper-sc-17e25jw-0">13.09.2024</div>
            <span class="styled__MatchHeaderHome-sc-17e25jw-6"><a>Telford Tigers</a></span>
            <span class="styled__MatchHeaderAway-sc-17e25jw-7"><a>Swindon Wildcats</a></span>
            <div class="OverviewBlocks__WideBlock-sc-ltm3ri-4">{body}</div>
            </body></html>"#
        )
    }

    #[test]
    fn parses_teams_date_and_rows() {
        let home_rows = [stat_row("9", "A Smith", "F", "12:34")];
        let away_rows = [stat_row("31", "C Keeper", "GK", "60:00")];
        let html = game_page(&format!(
            "{}{}",
            stat_table("Telford Tigers", &home_rows.iter().map(String::as_str).collect::<Vec<_>>()),
            stat_table("Swindon Wildcats", &away_rows.iter().map(String::as_str).collect::<Vec<_>>()),
        ));

        let parsed = parse_game_document(&html).unwrap().unwrap();
        assert_eq!(parsed.game_date, "13.09.2024");
        assert_eq!(parsed.home_team, "Telford Tigers");
        assert_eq!(parsed.away_team, "Swindon Wildcats");
        assert_eq!(parsed.players["Telford Tigers"].len(), 1);
        assert_eq!(parsed.players["Swindon Wildcats"].len(), 1);
        assert_eq!(parsed.players["Telford Tigers"][0][COL_PLAYER], "A Smith");
    }

    #[test]
    fn missing_header_elements_become_sentinels() {
        let html = r#"<html><body>
            <div class="OverviewBlocks__WideBlock-sc-ltm3ri-4"></div>
            </body></html>"#;
        let parsed = parse_game_document(html).unwrap().unwrap();
        assert_eq!(parsed.game_date, UNKNOWN_DATE);
        assert_eq!(parsed.home_team, UNKNOWN_HOME);
        assert_eq!(parsed.away_team, UNKNOWN_AWAY);
    }

    #[test]
    fn missing_wide_block_skips_page() {
        let html = "<html><body><div>nothing here</div></body></html>";
        assert!(parse_game_document(html).unwrap().is_none());
    }

    #[test]
    fn unmatched_table_kept_under_own_name() {
        let rows = [stat_row("7", "B Jones", "D", "05:00")];
        let html = game_page(&stat_table(
            "Some Other Team",
            &rows.iter().map(String::as_str).collect::<Vec<_>>(),
        ));

        let parsed = parse_game_document(&html).unwrap().unwrap();
        assert_eq!(parsed.players["Some Other Team"].len(), 1);
        assert!(parsed.players["Telford Tigers"].is_empty());
        assert!(parsed.players["Swindon Wildcats"].is_empty());
    }

    #[test]
    fn narrow_table_rejected() {
        let html = game_page(
            r#"<div class="styled__TableHeaderName-sc-g8pcp-3">Telford Tigers</div>
            <div role="table">
              <div role="rowgroup">
                <div role="row" class="Table__TableHeaderRow-sc-1abc">
                  <div role="columnheader">Player</div>
                  <div role="columnheader">Goals G</div>
                </div>
              </div>
              <div role="rowgroup">
                <div role="row"><div role="cell">A</div><div role="cell">1</div></div>
              </div>
            </div>"#,
        );
        let parsed = parse_game_document(&html).unwrap().unwrap();
        assert!(parsed.players["Telford Tigers"].is_empty());
    }

    #[test]
    fn row_with_wrong_cell_count_skipped() {
        let good = stat_row("9", "A Smith", "F", "12:34");
        let bad = r#"<div role="row"><div role="cell">10</div><div role="cell">B Short</div></div>"#;
        let rows = [good.as_str(), bad];
        let html = game_page(&stat_table("Telford Tigers", &rows));

        let parsed = parse_game_document(&html).unwrap().unwrap();
        assert_eq!(parsed.players["Telford Tigers"].len(), 1);
        assert_eq!(parsed.players["Telford Tigers"][0][COL_NUMBER], "9");
    }

    #[test]
    fn normalize_projects_stat_columns() {
        let rows = [stat_row("9", "A Smith", "F", "12:34")];
        let html = game_page(&stat_table(
            "Telford Tigers",
            &rows.iter().map(String::as_str).collect::<Vec<_>>(),
        ));
        let game = normalize_game(parse_game_document(&html).unwrap().unwrap());

        let line = &game.players["Telford Tigers"][0];
        assert_eq!(line.number, "9");
        assert_eq!(line.name, "A Smith");
        assert_eq!(line.position, "F");
        assert_eq!(line.time_on_ice, "12:34");
        assert!(game.match_id.is_none());
    }

    #[test]
    fn scraped_game_serializes_wire_field_names() {
        let rows = [stat_row("9", "A Smith", "F", "12:34")];
        let html = game_page(&stat_table(
            "Telford Tigers",
            &rows.iter().map(String::as_str).collect::<Vec<_>>(),
        ));
        let game = normalize_game(parse_game_document(&html).unwrap().unwrap());

        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["game_date"], "13.09.2024");
        let line = &json["players"]["Telford Tigers"][0];
        assert_eq!(line["time on ice"], "12:34");
        // An unresolved game carries no match_id key at all.
        assert!(json.get("match_id").is_none());
    }
}
