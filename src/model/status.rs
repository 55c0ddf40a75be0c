use strum_macros::EnumString;

/// Progress of a match as reported by the scoreboard feed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum EventState {
    Pre,
    In,
    Post,
    #[default]
    #[strum(disabled)]
    Unknown,
}

/// Feed status description meaning the match finished with a decision.
pub const RESULT_DESCRIPTION: &str = "Result";
