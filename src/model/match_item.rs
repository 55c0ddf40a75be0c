use chrono::NaiveDateTime;
use serde::Serialize;
use strum_macros::EnumString;

use super::team::{Side, Team};

/// The outcome of a single match, as stored in a signature character.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, EnumString, strum_macros::Display,
)]
pub enum ResultCode {
    /// The first-side team won.
    #[serde(rename = "1")]
    #[strum(serialize = "1")]
    FirstWon,
    /// The second-side team won.
    #[serde(rename = "2")]
    #[strum(serialize = "2")]
    SecondWon,
    /// Played (or abandoned) without a winner.
    #[serde(rename = "X")]
    #[strum(serialize = "X")]
    NoResult,
    /// Not decided yet.
    #[default]
    #[serde(rename = "O")]
    #[strum(serialize = "O")]
    Pending,
}

impl ResultCode {
    /// The code meaning "this side won".
    pub fn won_by(side: Side) -> Self {
        match side {
            Side::First => ResultCode::FirstWon,
            Side::Second => ResultCode::SecondWon,
        }
    }

    /// The winning side, if the code names one.
    pub fn winner(self) -> Option<Side> {
        match self {
            ResultCode::FirstWon => Some(Side::First),
            ResultCode::SecondWon => Some(Side::Second),
            ResultCode::NoResult | ResultCode::Pending => None,
        }
    }
}

/// A scheduled match with its current (possibly user-overridden) result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub date: Option<NaiveDateTime>,
    pub summary: String,
    /// Slots ordered by the provider's order index, first side at `[0]`.
    pub teams: [Team; 2],
    pub result: ResultCode,
}

impl Match {
    /// Build a match, placing the lower-order team on the first side.
    pub fn new(
        date: Option<NaiveDateTime>,
        summary: impl Into<String>,
        a: Team,
        b: Team,
        result: ResultCode,
    ) -> Self {
        let teams = if b.order < a.order { [b, a] } else { [a, b] };
        Self {
            date,
            summary: summary.into(),
            teams,
            result,
        }
    }

    pub fn team(&self, side: Side) -> &Team {
        &self.teams[side.index()]
    }

    /// Both slots paired with their side, first side first.
    pub fn sides(&self) -> impl Iterator<Item = (Side, &Team)> {
        [Side::First, Side::Second]
            .into_iter()
            .map(move |side| (side, self.team(side)))
    }

    /// A copy of this match carrying `result`.
    pub fn with_result(&self, result: ResultCode) -> Self {
        Self {
            result,
            ..self.clone()
        }
    }
}
