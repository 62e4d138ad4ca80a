//! Move intents submitted by players, and their wire representation.
//!
//! Inside the engine an intent is a tagged variant, so a movement can never
//! carry a half-missing endpoint and a placement always knows its monster
//! kind. The looser JSON shape the clients send
//! (`{playerId, from?, to?, placeOnly?, type?}`) is bridged by
//! [`IntentPayload`].

use crate::grid::Position;
use crate::types::PlayerId;
use crate::unit::MonsterType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One player's submission for a round.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Intent {
    /// The player passes this round.
    Skip { player: PlayerId },
    /// Put a new monster on an empty cell. Placements never trigger combat.
    Place {
        player: PlayerId,
        at: Position,
        kind: MonsterType,
    },
    /// Move a monster already on the board.
    Move {
        player: PlayerId,
        from: Position,
        to: Position,
    },
}

impl Intent {
    /// The player who submitted this intent.
    pub const fn player(&self) -> PlayerId {
        match *self {
            Intent::Skip { player }
            | Intent::Place { player, .. }
            | Intent::Move { player, .. } => player,
        }
    }
}

/// Errors produced while decoding a wire payload into an [`Intent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntentError {
    #[error("placement from player {0} is missing a destination")]
    MissingDestination(PlayerId),
    #[error("placement from player {0} is missing a monster type")]
    MissingMonsterType(PlayerId),
}

/// The JSON shape clients submit, with overlapping optional fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentPayload {
    pub player_id: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Position>,
    #[serde(default)]
    pub place_only: bool,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MonsterType>,
}

impl IntentPayload {
    /// Decode a payload from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Encode this payload to its JSON wire form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl TryFrom<IntentPayload> for Intent {
    type Error = IntentError;

    /// A movement payload with a missing endpoint is a pass, not an error:
    /// clients send exactly that shape when a player skips their turn. A
    /// placement payload missing its destination or kind is rejected
    /// outright.
    fn try_from(payload: IntentPayload) -> Result<Self, IntentError> {
        let player = payload.player_id;
        if payload.place_only {
            let at = payload
                .to
                .ok_or(IntentError::MissingDestination(player))?;
            let kind = payload
                .kind
                .ok_or(IntentError::MissingMonsterType(player))?;
            return Ok(Intent::Place { player, at, kind });
        }
        match (payload.from, payload.to) {
            (Some(from), Some(to)) => Ok(Intent::Move { player, from, to }),
            _ => Ok(Intent::Skip { player }),
        }
    }
}

impl From<Intent> for IntentPayload {
    fn from(intent: Intent) -> Self {
        match intent {
            Intent::Skip { player } => IntentPayload {
                player_id: player,
                ..IntentPayload::default()
            },
            Intent::Place { player, at, kind } => IntentPayload {
                player_id: player,
                to: Some(at),
                place_only: true,
                kind: Some(kind),
                ..IntentPayload::default()
            },
            Intent::Move { player, from, to } => IntentPayload {
                player_id: player,
                from: Some(from),
                to: Some(to),
                ..IntentPayload::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_payload_decodes_to_move() {
        let payload = IntentPayload {
            player_id: 1,
            from: Some(Position::new(5, 5)),
            to: Some(Position::new(5, 6)),
            ..IntentPayload::default()
        };
        let intent = Intent::try_from(payload).unwrap();
        assert_eq!(
            intent,
            Intent::Move {
                player: 1,
                from: Position::new(5, 5),
                to: Position::new(5, 6),
            }
        );
    }

    #[test]
    fn test_missing_endpoint_degrades_to_skip() {
        let payload = IntentPayload {
            player_id: 3,
            from: Some(Position::new(2, 2)),
            ..IntentPayload::default()
        };
        assert_eq!(Intent::try_from(payload).unwrap(), Intent::Skip { player: 3 });
    }

    #[test]
    fn test_placement_payload_decodes_to_place() {
        let payload = IntentPayload {
            player_id: 2,
            to: Some(Position::new(0, 9)),
            place_only: true,
            kind: Some(MonsterType::Ghost),
            ..IntentPayload::default()
        };
        let intent = Intent::try_from(payload).unwrap();
        assert_eq!(
            intent,
            Intent::Place {
                player: 2,
                at: Position::new(0, 9),
                kind: MonsterType::Ghost,
            }
        );
    }

    #[test]
    fn test_placement_missing_kind_is_rejected() {
        let payload = IntentPayload {
            player_id: 2,
            to: Some(Position::new(0, 9)),
            place_only: true,
            ..IntentPayload::default()
        };
        assert_eq!(
            Intent::try_from(payload),
            Err(IntentError::MissingMonsterType(2))
        );
    }

    #[test]
    fn test_placement_missing_destination_is_rejected() {
        let payload = IntentPayload {
            player_id: 4,
            place_only: true,
            kind: Some(MonsterType::Vampire),
            ..IntentPayload::default()
        };
        assert_eq!(
            Intent::try_from(payload),
            Err(IntentError::MissingDestination(4))
        );
    }

    #[test]
    fn test_wire_json_uses_camel_case_and_type_key() {
        let json = r#"{"playerId":2,"to":{"x":3,"y":4},"placeOnly":true,"type":"vampire"}"#;
        let payload = IntentPayload::from_json(json).unwrap();
        assert_eq!(payload.player_id, 2);
        assert!(payload.place_only);
        assert_eq!(payload.kind, Some(MonsterType::Vampire));

        let encoded = payload.to_json().unwrap();
        assert!(encoded.contains("\"playerId\":2"));
        assert!(encoded.contains("\"type\":\"vampire\""));
    }

    #[test]
    fn test_payload_round_trip_through_intent() {
        let original = Intent::Move {
            player: 1,
            from: Position::new(0, 0),
            to: Position::new(0, 5),
        };
        let payload = IntentPayload::from(original);
        assert_eq!(Intent::try_from(payload).unwrap(), original);
    }
}
