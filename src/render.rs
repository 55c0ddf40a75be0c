//! Plain-text rendering of the standings table and match list.

use itertools::Itertools;

use crate::model::{Match, ResultCode, Side, Standings};

const MATCH_DATE_FORMAT: &str = "%a %b %e %Y";
const TEAM_WIDTH: usize = 12;

/// Standings as an aligned table with Team, M, W, L, N/R, P and History
/// columns, in ranking order.
pub fn standings_table(standings: &Standings) -> String {
    let header = format!(
        "{:<TEAM_WIDTH$} {:>3} {:>3} {:>3} {:>3} {:>3}  History",
        "Team", "M", "W", "L", "N/R", "P"
    );
    let rule = "-".repeat(TEAM_WIDTH + 26);
    let rows = standings.iter().map(|(name, s)| {
        format!(
            "{:<TEAM_WIDTH$} {:>3} {:>3} {:>3} {:>3} {:>3}  {}",
            name, s.matches, s.wins, s.losses, s.no_results, s.points, s.history
        )
    });
    let mut table = [header, rule].into_iter().chain(rows).join("\n");
    table.push('\n');
    table
}

/// How a side's button reads given the match result.
fn marker(result: ResultCode, side: Side) -> &'static str {
    match result.winner() {
        Some(winner) if winner == side => "won",
        Some(_) => "lost",
        None => "",
    }
}

/// One block per match, numbered by signature position.
pub fn match_cards(matches: &[Match]) -> String {
    matches
        .iter()
        .enumerate()
        .map(|(i, m)| match_card(i, m))
        .join("\n")
}

fn match_card(index: usize, m: &Match) -> String {
    let date = m
        .date
        .map(|d| d.format(MATCH_DATE_FORMAT).to_string())
        .unwrap_or_else(|| "date tbc".to_string());
    let sides = m
        .sides()
        .map(|(side, team)| {
            format!(
                "{} {} {}",
                team.name,
                team.score,
                marker(m.result, side)
            )
            .trim_end()
            .to_string()
        })
        .collect_vec();
    let middle = match m.result {
        ResultCode::NoResult => "N/R",
        ResultCode::Pending => "vs",
        ResultCode::FirstWon | ResultCode::SecondWon => "-",
    };
    format!(
        "#{index:<3} [{}] {date}\n     {} {middle} {}\n     {}\n",
        m.result, sides[0], sides[1], m.summary
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Team, TeamStanding};

    #[test]
    fn test_standings_table() {
        let standings: Standings = vec![(
            "ENG".to_string(),
            TeamStanding {
                matches: 2,
                wins: 1,
                losses: 0,
                no_results: 1,
                points: 3,
                history: "WX".to_string(),
                logo: String::new(),
            },
        )];
        let table = standings_table(&standings);
        let lines = table.lines().collect_vec();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Team"));
        assert!(lines[0].ends_with("History"));
        assert_eq!(
            lines[2].split_whitespace().collect_vec(),
            ["ENG", "2", "1", "0", "1", "3", "WX"]
        );
    }

    #[test]
    fn test_empty_standings_table() {
        let table = standings_table(&Standings::new());
        assert!(table.ends_with('\n'));
        assert_eq!(table.lines().count(), 2);
        assert_eq!(table.lines().nth(1).map(str::len), Some(TEAM_WIDTH + 26));
    }

    #[test]
    fn test_match_cards() {
        let matches = vec![
            Match::new(
                chrono::NaiveDate::from_ymd_opt(2019, 5, 30).and_then(|d| d.and_hms_opt(9, 30, 0)),
                "England won by 104 runs",
                Team::new("ENG", 1, "", Some("311/8")),
                Team::new("SA", 2, "", Some("207")),
                ResultCode::FirstWon,
            ),
            Match::new(
                None,
                "Match yet to begin",
                Team::new("AUS", 1, "", None),
                Team::new("WI", 2, "", None),
                ResultCode::Pending,
            ),
        ];
        let cards = match_cards(&matches);
        assert!(cards.contains("#0   [1] Thu May 30 2019"));
        assert!(cards.contains("ENG 311/8 won - SA 207 lost"));
        assert!(cards.contains("#1   [O] date tbc"));
        assert!(cards.contains("AUS DNB vs WI DNB"));
        assert!(cards.contains("England won by 104 runs"));
    }
}
