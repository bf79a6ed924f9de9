use roster_reconciler::FinalGame;
use serde::Serialize;
use std::collections::HashMap;

/// Position tag used for goaltenders in both sources
pub const GOALTENDER_POSITION: &str = "GK";

/// Time-on-ice value meaning "did not play"
pub const ZERO_TOI: &str = "00:00";

/// Placeholder the official feed uses for unnamed roster slots
const PLACEHOLDER_NAME: &str = "noname noname";

/// Display filters for the zero time-on-ice report
#[derive(Debug, Clone, Default)]
pub struct DashboardFilter {
    /// Exclude goaltenders (GK) from the report
    pub exclude_goaltenders: bool,
}

/// One zero time-on-ice observation
#[derive(Debug, Clone, Serialize)]
pub struct ZeroToiEntry {
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub team: String,
    pub number: String,
    pub name: String,
    pub position: String,
    /// "local", "official", or "N/A" when the player was in both sources
    pub source: String,
    pub present_in_both: bool,
}

/// Zero time-on-ice players per team
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamCount {
    pub team: String,
    pub count: usize,
}

/// How often one player shows up with zero ice time for one team
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub team: String,
    pub name: String,
    pub count: usize,
}

/// All players credited with "00:00" time on ice across the dataset.
///
/// Placeholder "noname noname" roster slots are always dropped; the team
/// column falls back to the game's home team when a player carries no
/// team tag.
pub fn zero_toi_players(games: &[FinalGame], filter: &DashboardFilter) -> Vec<ZeroToiEntry> {
    let mut entries = Vec::new();

    for game in games {
        for player in &game.players {
            if player.time_on_ice != ZERO_TOI {
                continue;
            }
            if filter.exclude_goaltenders && player.position == GOALTENDER_POSITION {
                continue;
            }
            if player.name.to_lowercase() == PLACEHOLDER_NAME {
                continue;
            }

            let team = if player.team.is_empty() {
                game.home_team.clone()
            } else {
                player.team.clone()
            };

            entries.push(ZeroToiEntry {
                date: game.date.clone(),
                home_team: game.home_team.clone(),
                away_team: game.away_team.clone(),
                team,
                number: player.number.clone(),
                name: player.name.clone(),
                position: player.position.clone(),
                source: player.source.map_or("N/A", |origin| origin.as_str()).to_string(),
                present_in_both: player.present_in_both,
            });
        }
    }

    entries
}

/// Zero time-on-ice player counts per team, most affected teams first
pub fn count_by_team(entries: &[ZeroToiEntry]) -> Vec<TeamCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.team.as_str()).or_default() += 1;
    }

    let mut teams: Vec<TeamCount> = counts
        .into_iter()
        .map(|(team, count)| TeamCount { team: team.to_string(), count })
        .collect();
    teams.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.team.cmp(&b.team)));
    teams
}

/// Zero time-on-ice occurrences per (team, player), grouped by team with
/// each team's repeat offenders first
pub fn zero_toi_frequency(entries: &[ZeroToiEntry]) -> Vec<FrequencyEntry> {
    let mut counts: HashMap<(&str, &str), usize> = HashMap::new();
    for entry in entries {
        *counts.entry((entry.team.as_str(), entry.name.as_str())).or_default() += 1;
    }

    let mut frequencies: Vec<FrequencyEntry> = counts
        .into_iter()
        .map(|((team, name), count)| FrequencyEntry {
            team: team.to_string(),
            name: name.to_string(),
            count,
        })
        .collect();
    frequencies.sort_by(|a, b| {
        a.team.cmp(&b.team).then_with(|| b.count.cmp(&a.count)).then_with(|| a.name.cmp(&b.name))
    });
    frequencies
}
