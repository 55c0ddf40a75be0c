//! What-if scenarios: provider results with viewer overrides on top.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, info};

use crate::codec;
use crate::error::{Result, WhatIfError};
use crate::model::{Match, ResultCode, Side, Standings};
use crate::standings;

/// Where the current results came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScenarioState {
    /// Results as reported by the provider.
    Default,
    /// Results seeded from a signature or edited by the viewer.
    Overridden,
}

/// One of the three result buttons on a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    First,
    Second,
    NoResult,
}

impl Toggle {
    fn code(self) -> ResultCode {
        match self {
            Toggle::First => ResultCode::won_by(Side::First),
            Toggle::Second => ResultCode::won_by(Side::Second),
            Toggle::NoResult => ResultCode::NoResult,
        }
    }

    /// Set this toggle's code, or clear back to pending if it is already set.
    pub fn apply(self, current: ResultCode) -> ResultCode {
        let code = self.code();
        if current == code {
            ResultCode::Pending
        } else {
            code
        }
    }
}

impl FromStr for Toggle {
    type Err = WhatIfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(Toggle::First),
            "2" => Ok(Toggle::Second),
            "x" | "X" => Ok(Toggle::NoResult),
            _ => Err(WhatIfError::InvalidToggle(s.to_string())),
        }
    }
}

/// A toggle aimed at one match, parsed from `INDEX:SIDE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchToggle {
    pub index: usize,
    pub toggle: Toggle,
}

impl FromStr for MatchToggle {
    type Err = WhatIfError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || WhatIfError::InvalidToggle(s.to_string());
        let (index, side) = s.split_once(':').ok_or_else(invalid)?;
        let index = index.trim().parse().map_err(|_| invalid())?;
        let toggle = side.parse().map_err(|_| invalid())?;
        Ok(MatchToggle { index, toggle })
    }
}

/// An immutable snapshot of every match result in the tournament.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    matches: Vec<Match>,
    state: ScenarioState,
}

impl Scenario {
    /// Start from the provider's matches, applying `signature` if it is valid
    /// for this match count.
    pub fn new(matches: Vec<Match>, signature: Option<&str>) -> Self {
        match signature.and_then(|s| codec::decode(s, matches.len())) {
            Some(codes) => {
                let matches = matches
                    .into_iter()
                    .zip(codes)
                    .map(|(m, result)| Match { result, ..m })
                    .collect();
                Self {
                    matches,
                    state: ScenarioState::Overridden,
                }
            }
            None => Self {
                matches,
                state: ScenarioState::Default,
            },
        }
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn state(&self) -> ScenarioState {
        self.state
    }

    pub fn signature(&self) -> String {
        codec::encode(&self.matches)
    }

    pub fn standings(&self) -> Standings {
        standings::compute(&self.matches)
    }

    /// Link that reopens this scenario: `base#SIGNATURE`.
    pub fn share_url(&self, base: &str) -> String {
        let base = base.split('#').next().unwrap_or_default();
        format!("{base}#{}", self.signature())
    }

    /// A new scenario with match `index` toggled.
    pub fn toggle(&self, index: usize, toggle: Toggle) -> Result<Self> {
        let current = self.get(index)?.result;
        self.set_result(index, toggle.apply(current))
    }

    /// A new scenario with match `index` set to `result`.
    pub fn set_result(&self, index: usize, result: ResultCode) -> Result<Self> {
        self.get(index)?;
        let matches = self
            .matches
            .iter()
            .enumerate()
            .map(|(i, m)| if i == index { m.with_result(result) } else { m.clone() })
            .collect();
        Ok(Self {
            matches,
            state: ScenarioState::Overridden,
        })
    }

    fn get(&self, index: usize) -> Result<&Match> {
        self.matches.get(index).ok_or(WhatIfError::IndexOutOfRange {
            index,
            len: self.matches.len(),
        })
    }
}

/// Persistence for the scenario signature.
pub trait ScenarioStore {
    /// The saved signature, if any. Validity is checked by the caller.
    fn load(&self) -> Result<Option<String>>;

    fn save(&mut self, signature: &str) -> Result<()>;
}

/// Keeps the signature in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    signature: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_signature(signature: impl Into<String>) -> Self {
        Self {
            signature: Some(signature.into()),
        }
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }
}

impl ScenarioStore for MemoryStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.signature.clone())
    }

    fn save(&mut self, signature: &str) -> Result<()> {
        self.signature = Some(signature.to_string());
        Ok(())
    }
}

/// Keeps the signature in a text file.
///
/// A missing file means no saved scenario. A leading `#` is ignored so a
/// copied URL fragment can be pasted in as is.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScenarioStore for FileStore {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let signature = contents.trim();
                let signature = signature.strip_prefix('#').unwrap_or(signature);
                Ok(Some(signature.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, signature: &str) -> Result<()> {
        fs::write(&self.path, format!("{signature}\n"))?;
        Ok(())
    }
}

/// A scenario bound to the store that persists it.
///
/// Opening loads the stored signature; every edit saves the new one.
#[derive(Debug)]
pub struct ScenarioSession<S> {
    store: S,
    scenario: Scenario,
}

impl<S: ScenarioStore> ScenarioSession<S> {
    pub fn open(store: S, matches: Vec<Match>) -> Result<Self> {
        let signature = store.load()?;
        let scenario = Scenario::new(matches, signature.as_deref());
        info!(
            state = ?scenario.state(),
            matches = scenario.matches().len(),
            "opened scenario"
        );
        Ok(Self { store, scenario })
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn toggle(&mut self, index: usize, toggle: Toggle) -> Result<&Scenario> {
        let next = self.scenario.toggle(index, toggle)?;
        self.commit(next)
    }

    pub fn set_result(&mut self, index: usize, result: ResultCode) -> Result<&Scenario> {
        let next = self.scenario.set_result(index, result)?;
        self.commit(next)
    }

    fn commit(&mut self, next: Scenario) -> Result<&Scenario> {
        let signature = next.signature();
        self.store.save(&signature)?;
        debug!(signature = %signature, "saved scenario");
        self.scenario = next;
        Ok(&self.scenario)
    }

    pub fn into_scenario(self) -> Scenario {
        self.scenario
    }
}
