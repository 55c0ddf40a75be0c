pub use client::{CricinfoClient, ProviderConfig};
pub use error::{Result, WhatIfError};
pub use model::*;
pub use provider::scoreboard::parse_scoreboard;
pub use scenario::{
    FileStore, MatchToggle, MemoryStore, Scenario, ScenarioSession, ScenarioState, ScenarioStore,
    Toggle,
};

pub mod client;
pub mod codec;
pub mod error;
pub mod model;
pub(crate) mod provider;
pub mod render;
pub mod scenario;
pub mod standings;
