//! Fixed-width scenario signatures: one result character per match.

use std::str::FromStr;

use tracing::warn;

use crate::model::{EventState, Match, ResultCode, Side, RESULT_DESCRIPTION};

/// Decode `signature` into one result code per match.
///
/// Returns `None` unless the signature is exactly `match_count` characters,
/// all of them in `1`, `2`, `O`, `X`. A rejected signature is never partially
/// applied.
pub fn decode(signature: &str, match_count: usize) -> Option<Vec<ResultCode>> {
    let codes = signature
        .chars()
        .map(|c| ResultCode::from_str(c.encode_utf8(&mut [0; 4])))
        .collect::<Result<Vec<_>, _>>()
        .ok();
    match codes {
        Some(codes) if codes.len() == match_count => Some(codes),
        _ => {
            warn!(
                len = signature.chars().count(),
                expected = match_count,
                "ignoring malformed signature"
            );
            None
        }
    }
}

/// Concatenate every match's current result code, in match order.
pub fn encode(matches: &[Match]) -> String {
    matches.iter().map(|m| m.result.to_string()).collect()
}

/// The result the provider reports for a match, used when no valid
/// signature overrides it.
///
/// A decided match with a flagged winner maps to that winner's side. A match
/// that has not started or is still in progress is pending. Anything else
/// finished without a winner.
pub fn default_result(description: &str, state: EventState, winner: Option<Side>) -> ResultCode {
    match (description == RESULT_DESCRIPTION, winner, state) {
        (true, Some(side), _) => ResultCode::won_by(side),
        (_, _, EventState::Pre | EventState::In) => ResultCode::Pending,
        _ => ResultCode::NoResult,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Team;

    fn fixture(codes: &[ResultCode]) -> Vec<Match> {
        codes
            .iter()
            .enumerate()
            .map(|(i, &code)| {
                Match::new(
                    None,
                    format!("match {i}"),
                    Team::new(format!("T{i}a"), 1, "", None),
                    Team::new(format!("T{i}b"), 2, "", None),
                    code,
                )
            })
            .collect()
    }

    #[test]
    fn test_encode() {
        let matches = fixture(&[
            ResultCode::FirstWon,
            ResultCode::Pending,
            ResultCode::NoResult,
        ]);
        assert_eq!(encode(&matches), "1OX");
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_decode() {
        assert_eq!(
            decode("1OX", 3),
            Some(vec![
                ResultCode::FirstWon,
                ResultCode::Pending,
                ResultCode::NoResult
            ])
        );
        assert_eq!(decode("", 0), Some(vec![]));
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        assert_eq!(decode("1OX", 4), None);
        assert_eq!(decode("1OX", 2), None);
    }

    #[test]
    fn test_decode_rejects_foreign_characters() {
        assert_eq!(decode("1OY", 3), None);
        assert_eq!(decode("1ox", 3), None);
        assert_eq!(decode("#1O", 3), None);
        assert_eq!(decode("1Oé", 3), None);
    }

    #[test]
    fn test_default_result() {
        assert_eq!(
            default_result("Result", EventState::Post, Some(Side::First)),
            ResultCode::FirstWon
        );
        assert_eq!(
            default_result("Result", EventState::Post, Some(Side::Second)),
            ResultCode::SecondWon
        );
        assert_eq!(
            default_result("Scheduled", EventState::Pre, None),
            ResultCode::Pending
        );
        assert_eq!(
            default_result("Live", EventState::In, None),
            ResultCode::Pending
        );
        assert_eq!(
            default_result("Abandoned", EventState::Post, None),
            ResultCode::NoResult
        );
        assert_eq!(
            default_result("Result", EventState::Post, None),
            ResultCode::NoResult
        );
    }

    #[test]
    fn test_round_trip() {
        let codes = [
            ResultCode::SecondWon,
            ResultCode::FirstWon,
            ResultCode::Pending,
            ResultCode::NoResult,
            ResultCode::SecondWon,
        ];
        let matches = fixture(&codes);
        assert_eq!(decode(&encode(&matches), matches.len()), Some(codes.to_vec()));
    }
}
