//! Combat resolution between monster kinds.
//!
//! Combat is a pure function of the two kinds involved. The winner of a
//! matchup does not depend on who initiated it: if the attacker's kind wins
//! with the roles one way, it also wins as the defender with the roles
//! reversed.

use crate::unit::MonsterType;
use serde::{Deserialize, Serialize};

/// Result of a combat engagement.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CombatOutcome {
    /// The attacker survives and takes the cell.
    AttackerWins,
    /// The defender survives in place.
    DefenderWins,
    /// Equal kinds annihilate each other.
    BothEliminated,
}

/// Resolve combat between an attacking and a defending monster kind.
pub fn resolve_combat(attacker: MonsterType, defender: MonsterType) -> CombatOutcome {
    if attacker == defender {
        CombatOutcome::BothEliminated
    } else if attacker.beats(defender) {
        CombatOutcome::AttackerWins
    } else {
        CombatOutcome::DefenderWins
    }
}
