use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime};
use itertools::Itertools;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::codec;
use crate::error::{Result, WhatIfError};
use crate::model::{EventState, Match, ResultCode, Side, Team, TBA};
use crate::provider;

pub(crate) const EVENT_DATE_FORMAT: &str = "%Y-%m-%dT%H:%MZ";

#[derive(Debug, Deserialize)]
struct Scoreboard {
    #[serde(default)]
    events: Vec<RawEvent>,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(default)]
    date: String,
    #[serde(default)]
    status: RawStatus,
    #[serde(default)]
    competitions: Vec<RawCompetition>,
}

#[derive(Debug, Default, Deserialize)]
struct RawStatus {
    #[serde(default)]
    summary: String,
    #[serde(rename = "type", default)]
    kind: RawStatusType,
}

#[derive(Debug, Default, Deserialize)]
struct RawStatusType {
    #[serde(default)]
    description: String,
    #[serde(default)]
    state: String,
}

#[derive(Debug, Deserialize)]
struct RawCompetition {
    #[serde(default)]
    competitors: Vec<RawCompetitor>,
}

#[derive(Debug, Deserialize)]
struct RawCompetitor {
    #[serde(default)]
    score: Option<Loose>,
    #[serde(default)]
    order: Option<Loose>,
    #[serde(default)]
    winner: Option<Loose>,
    #[serde(default)]
    team: Option<RawTeam>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTeam {
    #[serde(default)]
    short_display_name: String,
    #[serde(default)]
    logo: String,
}

/// The feed mixes JSON types for the same field (`"winner": "true"` next to
/// `"winner": true`, numeric and string orders).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Int(u64),
    Text(String),
}

impl Loose {
    fn as_bool(&self) -> bool {
        match self {
            Loose::Bool(b) => *b,
            Loose::Int(n) => *n != 0,
            Loose::Text(s) => s.eq_ignore_ascii_case("true"),
        }
    }

    fn as_u8(&self) -> u8 {
        match self {
            Loose::Bool(b) => u8::from(*b),
            Loose::Int(n) => u8::try_from(*n).unwrap_or(u8::MAX),
            Loose::Text(s) => s.trim().parse().unwrap_or(u8::MAX),
        }
    }

    fn as_text(&self) -> String {
        match self {
            Loose::Bool(b) => b.to_string(),
            Loose::Int(n) => n.to_string(),
            Loose::Text(s) => s.clone(),
        }
    }
}

#[instrument(skip(client))]
pub(crate) async fn get_matches(client: &reqwest::Client, url: &str) -> Result<Vec<Match>> {
    let body = provider::get_body(client, url).await?;
    parse_scoreboard(&body)
}

/// Parse a scoreboard JSON body into matches carrying the provider's results.
pub fn parse_scoreboard(body: &str) -> Result<Vec<Match>> {
    let scoreboard: Scoreboard = serde_json::from_str(body)?;
    let matches = scoreboard
        .events
        .into_iter()
        .enumerate()
        .map(|(index, event)| parse_event(index, event))
        .collect::<Result<Vec<_>>>()?;
    debug!(count = matches.len(), "parsed scoreboard");
    Ok(matches)
}

fn parse_event(index: usize, event: RawEvent) -> Result<Match> {
    let competition = event
        .competitions
        .into_iter()
        .next()
        .ok_or(WhatIfError::MalformedEvent {
            index,
            context: "no competition",
        })?;
    let (a, b) = competition
        .competitors
        .into_iter()
        .take(2)
        .collect_tuple()
        .ok_or(WhatIfError::MalformedEvent {
            index,
            context: "fewer than two competitors",
        })?;

    let winner = winning_side(&a, &b);
    let state = EventState::from_str(&event.status.kind.state).unwrap_or_default();
    let result = codec::default_result(&event.status.kind.description, state, winner);

    Ok(Match::new(
        parse_date(&event.date),
        event.status.summary,
        parse_team(a),
        parse_team(b),
        result,
    ))
}

/// The side of whichever competitor is flagged as winner.
///
/// Sides follow the same ordering as [`Match::new`]: `b` only takes the first
/// side when its order is strictly lower.
fn winning_side(a: &RawCompetitor, b: &RawCompetitor) -> Option<Side> {
    let flagged = |c: &RawCompetitor| c.winner.as_ref().is_some_and(Loose::as_bool);
    let swapped = order_of(b) < order_of(a);
    match (flagged(a), flagged(b), swapped) {
        (true, false, false) | (false, true, true) => Some(Side::First),
        (true, false, true) | (false, true, false) => Some(Side::Second),
        _ => None,
    }
}

fn order_of(competitor: &RawCompetitor) -> u8 {
    competitor.order.as_ref().map(Loose::as_u8).unwrap_or(u8::MAX)
}

/// A slot with no team descriptor, or no name in it, becomes [`TBA`].
fn parse_team(competitor: RawCompetitor) -> Team {
    let order = order_of(&competitor);
    let score = competitor.score.as_ref().map(Loose::as_text);
    let team = competitor.team.unwrap_or_default();
    let name = match team.short_display_name.trim() {
        "" => TBA.to_string(),
        name => name.to_string(),
    };
    Team::new(name, order, team.logo, score.as_deref())
}

fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, EVENT_DATE_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|d| d.naive_utc())
        })
}
