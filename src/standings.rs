//! Folds a match list into a ranked standings table.

use std::collections::HashMap;

use tracing::debug;

use crate::model::{Match, ResultCode, Standings, TeamStanding};

/// Team records keyed by name, iterated in first-appearance order.
#[derive(Debug, Default)]
struct TeamTable {
    rows: Vec<(String, TeamStanding)>,
    index: HashMap<String, usize>,
}

impl TeamTable {
    /// The record for `name`, created with `logo` on first sight.
    fn entry(&mut self, name: &str, logo: &str) -> &mut TeamStanding {
        let slot = match self.index.get(name).copied() {
            Some(slot) => slot,
            None => {
                self.rows.push((name.to_string(), TeamStanding::new(logo)));
                self.index.insert(name.to_string(), self.rows.len() - 1);
                self.rows.len() - 1
            }
        };
        &mut self.rows[slot].1
    }

    /// Points descending. Ties keep first-appearance order.
    fn into_ranked(self) -> Standings {
        let mut rows = self.rows;
        rows.sort_by(|(_, a), (_, b)| b.points.cmp(&a.points));
        rows
    }
}

/// Compute the standings for `matches`.
///
/// Every non-TBA team that occupies a slot gets a row, even if none of its
/// matches has been decided yet. Pending matches count for nothing.
pub fn compute(matches: &[Match]) -> Standings {
    let mut table = TeamTable::default();

    for m in matches {
        for (side, team) in m.sides() {
            if team.is_tba() {
                continue;
            }
            let standing = table.entry(&team.name, &team.logo);
            match m.result {
                ResultCode::Pending => {}
                ResultCode::NoResult => standing.record_no_result(),
                code if code == ResultCode::won_by(side) => standing.record_win(),
                _ => standing.record_loss(),
            }
            standing.refresh_points();
        }
    }

    let standings = table.into_ranked();
    debug!(
        teams = standings.len(),
        matches = matches.len(),
        "computed standings"
    );
    standings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Team, TBA};

    fn game(a: &str, b: &str, result: ResultCode) -> Match {
        Match::new(
            None,
            "",
            Team::new(a, 0, format!("{a}.png"), None),
            Team::new(b, 1, format!("{b}.png"), None),
            result,
        )
    }

    fn row<'a>(standings: &'a Standings, name: &str) -> &'a TeamStanding {
        &standings
            .iter()
            .find(|(n, _)| n == name)
            .unwrap_or_else(|| panic!("no row for {name}"))
            .1
    }

    #[test]
    fn test_compute_example() {
        let matches = vec![
            game("A", "B", ResultCode::FirstWon),
            game("A", "C", ResultCode::NoResult),
        ];
        let standings = compute(&matches);

        let names: Vec<&str> = standings.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["A", "C", "B"]);

        let a = row(&standings, "A");
        assert_eq!(
            (a.matches, a.wins, a.losses, a.no_results, a.points),
            (2, 1, 0, 1, 3)
        );
        assert_eq!(a.history, "WX");
        assert_eq!(a.logo, "A.png");

        let b = row(&standings, "B");
        assert_eq!(
            (b.matches, b.wins, b.losses, b.no_results, b.points),
            (1, 0, 1, 0, 0)
        );
        assert_eq!(b.history, "L");

        let c = row(&standings, "C");
        assert_eq!(
            (c.matches, c.wins, c.losses, c.no_results, c.points),
            (1, 0, 0, 1, 1)
        );
        assert_eq!(c.history, "X");
    }

    #[test]
    fn test_second_side_win() {
        let standings = compute(&[game("A", "B", ResultCode::SecondWon)]);
        assert_eq!(row(&standings, "B").history, "W");
        assert_eq!(row(&standings, "A").history, "L");
        assert_eq!(standings[0].0, "B");
    }

    #[test]
    fn test_provider_orders_one_and_two() {
        let m = Match::new(
            None,
            "",
            Team::new("IND", 1, "", None),
            Team::new("PAK", 2, "", None),
            ResultCode::FirstWon,
        );
        let standings = compute(&[m]);
        assert_eq!(row(&standings, "IND").wins, 1);
        assert_eq!(row(&standings, "PAK").losses, 1);
    }

    #[test]
    fn test_pending_match_lists_team_without_counting() {
        let standings = compute(&[
            game("A", "B", ResultCode::FirstWon),
            game("C", "A", ResultCode::Pending),
        ]);
        let a = row(&standings, "A");
        assert_eq!((a.matches, a.wins, a.points), (1, 1, 2));
        assert_eq!(a.history, "W");

        let c = row(&standings, "C");
        assert_eq!(*c, TeamStanding::new("C.png"));
    }

    #[test]
    fn test_tba_never_gets_a_row() {
        let standings = compute(&[
            game(TBA, TBA, ResultCode::Pending),
            game("A", TBA, ResultCode::FirstWon),
        ]);
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].0, "A");
        assert_eq!(standings[0].1.wins, 1);
    }

    #[test]
    fn test_ties_keep_first_appearance_order() {
        let standings = compute(&[
            game("A", "B", ResultCode::SecondWon),
            game("C", "D", ResultCode::FirstWon),
            game("E", "F", ResultCode::Pending),
        ]);
        let names: Vec<&str> = standings.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["B", "C", "A", "D", "E", "F"]);
    }

    #[test]
    fn test_points_and_history_invariants() {
        let codes = [
            ResultCode::FirstWon,
            ResultCode::SecondWon,
            ResultCode::NoResult,
            ResultCode::Pending,
        ];
        let teams = ["A", "B", "C", "D"];
        let matches: Vec<Match> = (0..24)
            .map(|i| {
                game(
                    teams[i % 4],
                    teams[(i + 1 + (i / 4) % 3) % 4],
                    codes[(i * 7) % 4],
                )
            })
            .collect();
        for (name, s) in compute(&matches) {
            assert_eq!(s.points, 2 * s.wins + s.no_results, "points for {name}");
            assert_eq!(s.history.len() as u32, s.matches, "history for {name}");
            assert_eq!(s.matches, s.wins + s.losses + s.no_results);
        }
    }
}
