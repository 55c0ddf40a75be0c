use serde::Serialize;

/// Ranked table: team name and its record, highest points first.
pub type Standings = Vec<(String, TeamStanding)>;

/// Aggregated record for one team, derived from the match list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamStanding {
    pub matches: u32,
    pub wins: u32,
    pub losses: u32,
    pub no_results: u32,
    pub points: u32,
    /// One of `W`, `L`, `X` per counted match, oldest first.
    pub history: String,
    pub logo: String,
}

impl TeamStanding {
    pub fn new(logo: impl Into<String>) -> Self {
        Self {
            logo: logo.into(),
            ..Self::default()
        }
    }

    pub(crate) fn record_win(&mut self) {
        self.matches += 1;
        self.wins += 1;
        self.history.push('W');
    }

    pub(crate) fn record_loss(&mut self) {
        self.matches += 1;
        self.losses += 1;
        self.history.push('L');
    }

    pub(crate) fn record_no_result(&mut self) {
        self.matches += 1;
        self.no_results += 1;
        self.history.push('X');
    }

    /// Two points per win, one per no-result.
    pub(crate) fn refresh_points(&mut self) {
        self.points = 2 * self.wins + self.no_results;
    }
}
