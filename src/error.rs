/// All errors that can occur while loading a tournament or editing a scenario.
#[derive(thiserror::Error, Debug)]
pub enum WhatIfError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The scoreboard body is not the JSON shape we expect.
    #[error("failed to decode scoreboard json: {0}")]
    Json(#[from] serde_json::Error),

    /// A scoreboard event is missing its competition or competitors.
    #[error("malformed event #{index}: {context}")]
    MalformedEvent { index: usize, context: &'static str },

    /// A match index past the end of the match list.
    #[error("match index {index} out of range (tournament has {len} matches)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A `--toggle` argument that is not `INDEX:SIDE`.
    #[error("invalid toggle {0:?}, expected INDEX:SIDE with SIDE one of 1, 2, x")]
    InvalidToggle(String),

    /// Reading a feed file or the scenario store failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WhatIfError>;
