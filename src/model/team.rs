use serde::Serialize;

/// Placeholder name the provider uses for a participant that is not yet known.
pub const TBA: &str = "TBA";

/// Score shown for a side that did not bat.
pub const DID_NOT_BAT: &str = "DNB";

/// One of the two slots in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The slot with the lower provider order.
    First,
    /// The slot with the higher provider order.
    Second,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// A team as it appears in a single match slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub name: String,
    pub order: u8,
    pub logo: String,
    pub score: String,
}

impl Team {
    /// Build a team slot, substituting [`DID_NOT_BAT`] for an empty score.
    pub fn new(
        name: impl Into<String>,
        order: u8,
        logo: impl Into<String>,
        score: Option<&str>,
    ) -> Self {
        let score = score
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DID_NOT_BAT)
            .to_string();
        Self {
            name: name.into(),
            order,
            logo: logo.into(),
            score,
        }
    }

    pub fn is_tba(&self) -> bool {
        self.name == TBA
    }
}
