//! Monsters and the units that carry them across the board.

use crate::grid::Position;
use crate::types::PlayerId;
use serde::{Deserialize, Serialize};

/// The three monster kinds, locked in a dominance cycle:
/// vampire beats werewolf, werewolf beats ghost, ghost beats vampire.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonsterType {
    Vampire,
    Werewolf,
    Ghost,
}

impl MonsterType {
    /// Whether this kind defeats `other` outright.
    ///
    /// Equal kinds never beat each other; they annihilate in combat instead.
    pub const fn beats(self, other: MonsterType) -> bool {
        matches!(
            (self, other),
            (MonsterType::Vampire, MonsterType::Werewolf)
                | (MonsterType::Werewolf, MonsterType::Ghost)
                | (MonsterType::Ghost, MonsterType::Vampire)
        )
    }

    /// Get all monster kinds.
    pub const fn all() -> &'static [MonsterType] {
        &[
            MonsterType::Vampire,
            MonsterType::Werewolf,
            MonsterType::Ghost,
        ]
    }
}

impl std::fmt::Display for MonsterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonsterType::Vampire => write!(f, "vampire"),
            MonsterType::Werewolf => write!(f, "werewolf"),
            MonsterType::Ghost => write!(f, "ghost"),
        }
    }
}

/// A single monster on the board.
///
/// Units live only inside board cells; they carry no position of their own.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Unit {
    /// Owning player.
    pub owner: PlayerId,
    /// Monster kind.
    pub kind: MonsterType,
}

impl Unit {
    /// Create a new unit.
    pub const fn new(owner: PlayerId, kind: MonsterType) -> Self {
        Self { owner, kind }
    }

    /// Tag this unit with its last known position for result reporting.
    pub const fn at(&self, position: Position) -> UnitAt {
        UnitAt {
            owner: self.owner,
            kind: self.kind,
            position,
        }
    }
}

/// A unit snapshot tagged with a position, used in round results
/// (`eliminated`, `winner`, `escaped`).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UnitAt {
    /// Owning player.
    pub owner: PlayerId,
    /// Monster kind.
    pub kind: MonsterType,
    /// Where the unit stood when the record was made.
    pub position: Position,
}
