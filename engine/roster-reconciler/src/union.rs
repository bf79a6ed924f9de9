use game_scraper::ScrapedPlayer;
use league_fetcher::models::RosterEntry;
use std::collections::{HashMap, HashSet};

use crate::types::{PlayerOrigin, ReconciledPlayer};

/// Time-on-ice value meaning "did not play"
pub const ZERO_TOI: &str = "00:00";

/// Union of the scraped player list and the official roster for one team,
/// keyed by jersey number.
///
/// - Present in both: ice time, name and position come from the scraped
///   line; the official roster carries no ice time.
/// - Scraped only: the official roster is the authority on who actually
///   appeared, so the recorded ice time is overridden to "00:00" and the
///   player is tagged `source = local`.
/// - Official only: "00:00" ice time, name and position from the roster,
///   tagged `source = official`.
///
/// Output order follows map iteration and is deliberately unspecified.
/// Entries without a jersey number share one key per source ("" scraped,
/// "None" official) and are not deduplicated by name.
pub fn union_players(
    local: &[ScrapedPlayer],
    official: &HashMap<String, RosterEntry>,
) -> Vec<ReconciledPlayer> {
    let mut official_view: HashMap<String, (String, String)> = HashMap::new();
    for entry in official.values() {
        official_view.insert(entry.jersey_key(), (entry.full_name(), entry.position.clone()));
    }

    let mut local_view: HashMap<String, &ScrapedPlayer> = HashMap::new();
    for player in local {
        local_view.insert(player.number.clone(), player);
    }

    let mut numbers: HashSet<String> = local_view.keys().cloned().collect();
    numbers.extend(official_view.keys().cloned());

    let mut union = Vec::with_capacity(numbers.len());
    for number in numbers {
        match (local_view.get(&number), official_view.get(&number)) {
            (Some(line), Some(_)) => union.push(ReconciledPlayer {
                number,
                name: line.name.clone(),
                position: line.position.clone(),
                time_on_ice: line.time_on_ice.clone(),
                present_in_both: true,
                source: None,
                team: String::new(),
            }),
            (Some(line), None) => union.push(ReconciledPlayer {
                number,
                name: line.name.clone(),
                position: line.position.clone(),
                time_on_ice: ZERO_TOI.to_string(),
                present_in_both: false,
                source: Some(PlayerOrigin::Local),
                team: String::new(),
            }),
            (None, Some((name, position))) => union.push(ReconciledPlayer {
                number,
                name: name.clone(),
                position: position.clone(),
                time_on_ice: ZERO_TOI.to_string(),
                present_in_both: false,
                source: Some(PlayerOrigin::Official),
                team: String::new(),
            }),
            (None, None) => continue,
        }
    }

    union
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scraped(number: &str, name: &str, position: &str, toi: &str) -> ScrapedPlayer {
        ScrapedPlayer {
            number: number.to_string(),
            name: name.to_string(),
            position: position.to_string(),
            time_on_ice: toi.to_string(),
        }
    }

    fn roster_entry(jersey: Option<u32>, name: &str, surname: &str, position: &str) -> RosterEntry {
        RosterEntry {
            jersey,
            name: name.to_string(),
            surname: surname.to_string(),
            position: position.to_string(),
        }
    }

    fn roster(entries: Vec<RosterEntry>) -> HashMap<String, RosterEntry> {
        entries.into_iter().enumerate().map(|(i, e)| (format!("p{i}"), e)).collect()
    }

    #[test]
    fn player_in_both_keeps_scraped_ice_time() {
        let local = vec![scraped("9", "A Smith", "F", "12:34")];
        let official = roster(vec![roster_entry(Some(9), "A", "Smith", "F")]);

        let union = union_players(&local, &official);
        assert_eq!(union.len(), 1);
        assert_eq!(union[0].number, "9");
        assert_eq!(union[0].time_on_ice, "12:34");
        assert!(union[0].present_in_both);
        assert!(union[0].source.is_none());
        // Name and position come from the scraped line.
        assert_eq!(union[0].name, "A Smith");
        assert_eq!(union[0].position, "F");
    }

    #[test]
    fn scraped_only_player_is_zeroed() {
        let local = vec![scraped("7", "B Jones", "D", "05:00")];
        let official = HashMap::new();

        let union = union_players(&local, &official);
        assert_eq!(union.len(), 1);
        assert_eq!(union[0].number, "7");
        assert!(!union[0].present_in_both);
        assert_eq!(union[0].source, Some(PlayerOrigin::Local));
        assert_eq!(union[0].time_on_ice, "00:00");
    }

    #[test]
    fn official_only_player_is_zeroed_with_roster_name() {
        let local: Vec<ScrapedPlayer> = Vec::new();
        let official = roster(vec![roster_entry(Some(4), "C", "Lee", "F")]);

        let union = union_players(&local, &official);
        assert_eq!(union.len(), 1);
        assert_eq!(union[0].number, "4");
        assert!(!union[0].present_in_both);
        assert_eq!(union[0].source, Some(PlayerOrigin::Official));
        assert_eq!(union[0].time_on_ice, "00:00");
        assert_eq!(union[0].name, "C Lee");
        assert_eq!(union[0].position, "F");
    }

    #[test]
    fn union_is_complete_over_both_key_sets() {
        let local = vec![
            scraped("9", "A Smith", "F", "12:34"),
            scraped("7", "B Jones", "D", "05:00"),
        ];
        let official = roster(vec![
            roster_entry(Some(9), "A", "Smith", "F"),
            roster_entry(Some(4), "C", "Lee", "F"),
        ]);

        let union = union_players(&local, &official);
        let numbers: HashSet<&str> = union.iter().map(|p| p.number.as_str()).collect();
        assert_eq!(union.len(), 3);
        assert_eq!(numbers, HashSet::from(["9", "7", "4"]));
    }

    #[test]
    fn provenance_is_exclusive() {
        let local = vec![
            scraped("9", "A Smith", "F", "12:34"),
            scraped("7", "B Jones", "D", "05:00"),
        ];
        let official = roster(vec![
            roster_entry(Some(9), "A", "Smith", "F"),
            roster_entry(Some(4), "C", "Lee", "F"),
        ]);

        for player in union_players(&local, &official) {
            assert_eq!(player.present_in_both, player.source.is_none());
            if !player.present_in_both {
                assert_eq!(player.time_on_ice, "00:00");
            }
        }
    }

    #[test]
    fn missing_jerseys_collapse_onto_the_none_key() {
        // Two official entries without a jersey number share the "None"
        // key; only one survives. Preserved quirk.
        let local: Vec<ScrapedPlayer> = Vec::new();
        let official = roster(vec![
            roster_entry(None, "noname", "noname", "F"),
            roster_entry(None, "D", "Uncounted", "D"),
        ]);

        let union = union_players(&local, &official);
        assert_eq!(union.len(), 1);
        assert_eq!(union[0].number, "None");
    }

    #[test]
    fn scraped_player_without_number_still_participates() {
        let local = vec![scraped("", "E Ghost", "F", "03:00")];
        let official = roster(vec![roster_entry(Some(4), "C", "Lee", "F")]);

        let union = union_players(&local, &official);
        assert_eq!(union.len(), 2);
        let ghost = union.iter().find(|p| p.number.is_empty()).unwrap();
        assert_eq!(ghost.source, Some(PlayerOrigin::Local));
        assert_eq!(ghost.time_on_ice, "00:00");
    }
}
