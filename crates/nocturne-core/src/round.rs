//! Round resolution: simultaneous application of a full intent batch.
//!
//! All submissions for a round are resolved as if they happened at once.
//! Placements land first, then every surviving movement intent is grouped by
//! destination and each group is resolved independently. Before any group
//! runs, every mover is detached from the board, so a vacating unit can
//! neither be attacked at its origin nor be overwritten there before its own
//! move is accounted; group processing order cannot change the outcome.
//!
//! Three distinct tie-break policies apply per destination:
//! - a stationary defender stormed by two or more movers takes everyone down
//!   with it (overwhelm);
//! - two movers converging on an open cell fight each other, and the winner
//!   takes the cell;
//! - three or more movers converging on an open cell all perish (pile-up).

use crate::board::Board;
use crate::combat::{resolve_combat, CombatOutcome};
use crate::grid::Position;
use crate::intent::Intent;
use crate::state::RoundState;
use crate::types::PlayerId;
use crate::unit::{MonsterType, Unit, UnitAt};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Outcome of applying a single move.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Units removed from the board by this move.
    pub eliminated: Vec<UnitAt>,
    /// Whether the mover ended up in the destination cell.
    pub moved: bool,
}

/// Outcome of one resolved conflict group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Units removed from the board by this conflict.
    pub eliminated: Vec<UnitAt>,
    /// Whether any unit ended up in the contested cell.
    pub moved: bool,
    /// Survivor of a pairwise fight over an open cell, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<UnitAt>,
    /// Units that vacated the contested cell this round and were therefore
    /// not attacked.
    pub escaped: Vec<UnitAt>,
}

/// Resolve one attacker moving from `from` into `to` against at most one
/// defender.
///
/// An empty origin is a silent no-op; the unit may have been consumed by an
/// earlier conflict in the same round. An empty or friendly-held destination
/// is taken unconditionally (the validator rejects friendly destinations
/// upstream; a caller that bypasses it gets a silent replacement).
pub fn apply_move(board: &mut Board, from: Position, to: Position) -> MoveReport {
    let Some(attacker) = board.get(from).copied() else {
        return MoveReport::default();
    };

    let mut report = MoveReport::default();
    match board.get(to).copied() {
        Some(defender) if defender.owner != attacker.owner => {
            match resolve_combat(attacker.kind, defender.kind) {
                CombatOutcome::AttackerWins => {
                    report.eliminated.push(defender.at(to));
                    board.take(from);
                    board.put(to, attacker);
                    report.moved = true;
                }
                CombatOutcome::DefenderWins => {
                    report.eliminated.push(attacker.at(from));
                    board.take(from);
                }
                CombatOutcome::BothEliminated => {
                    report.eliminated.push(attacker.at(from));
                    report.eliminated.push(defender.at(to));
                    board.take(from);
                    board.take(to);
                }
            }
        }
        _ => {
            board.take(from);
            board.put(to, attacker);
            report.moved = true;
        }
    }
    report
}

/// A retained movement intent together with its detached unit.
struct Mover {
    from: Position,
    to: Position,
    unit: Option<Unit>,
}

/// Resolve an entire round of intents against the board and state, mutating
/// both in place.
///
/// Returns one [`RoundResult`] per conflict group, ordered by destination
/// (row-major). Eliminations feed the owners' death counters; owners that
/// reach the elimination threshold lose all remaining units and are
/// deactivated, regardless of whether those units fought this round.
pub fn resolve_round(
    intents: &[Intent],
    board: &mut Board,
    state: &mut RoundState,
) -> Vec<RoundResult> {
    apply_placements(intents, board);

    // Keep only well-formed movement intents.
    let mut movers: Vec<Mover> = intents
        .iter()
        .filter_map(|intent| match *intent {
            Intent::Move { from, to, .. }
                if board.in_bounds(from) && board.in_bounds(to) && from != to =>
            {
                Some(Mover {
                    from,
                    to,
                    unit: None,
                })
            }
            _ => None,
        })
        .collect();

    // Origins being vacated this round; an attack aimed at one of these
    // cells lands on empty space.
    let outgoing: HashSet<Position> = movers.iter().map(|m| m.from).collect();

    // Post-placement snapshot, used only for escape reporting.
    let pre = board.clone();

    // Detach every mover from the board. A second move claiming the same
    // origin finds it already empty and is skipped during resolution.
    for mover in &mut movers {
        mover.unit = board.take(mover.from);
    }

    // Group by destination; the ordered map makes the result order (and any
    // residual interaction between groups) deterministic.
    let mut groups: BTreeMap<Position, Vec<usize>> = BTreeMap::new();
    for (i, mover) in movers.iter().enumerate() {
        groups.entry(mover.to).or_default().push(i);
    }

    let results: Vec<RoundResult> = groups
        .iter()
        .map(|(&dest, group)| resolve_group(dest, group, &movers, &pre, &outgoing, board))
        .collect();

    for result in &results {
        for unit in &result.eliminated {
            state.record_loss(unit.owner);
        }
    }

    eliminate_defeated(board, state);

    results
}

/// Apply all placement intents to the board.
///
/// A contested empty cell goes to the lowest player id, so the winner does
/// not depend on batch order. Occupied or off-board destinations are dropped
/// silently; placements never fight.
fn apply_placements(intents: &[Intent], board: &mut Board) {
    let mut placements: Vec<(PlayerId, Position, MonsterType)> = intents
        .iter()
        .filter_map(|intent| match *intent {
            Intent::Place { player, at, kind } => Some((player, at, kind)),
            _ => None,
        })
        .collect();
    placements.sort_by_key(|&(player, _, _)| player);

    for (player, at, kind) in placements {
        let _ = board.place(at, Unit::new(player, kind));
    }
}

/// Resolve all movement intents sharing one destination cell.
fn resolve_group(
    dest: Position,
    group: &[usize],
    movers: &[Mover],
    pre: &Board,
    outgoing: &HashSet<Position>,
    board: &mut Board,
) -> RoundResult {
    let mut result = RoundResult::default();

    // A unit that stood here after placements but is moving away this round
    // escapes the incoming attack entirely.
    if let Some(occupant) = pre.get(dest) {
        if outgoing.contains(&dest) {
            result.escaped.push(occupant.at(dest));
        }
    }

    // Movers whose origin still held a unit when it was detached. The others
    // lost their unit to an earlier conflict or a duplicate claim on the
    // same origin.
    let present: Vec<(Position, Unit)> = group
        .iter()
        .filter_map(|&i| movers[i].unit.map(|unit| (movers[i].from, unit)))
        .collect();

    if let Some(defender) = board.get(dest).copied() {
        // The occupant is stationary: it was not detached, so it is not
        // moving anywhere this round.
        if group.len() == 1 {
            if let Some(&(from, attacker)) = present.first() {
                resolve_against_defender(attacker, from, defender, dest, board, &mut result);
            }
        } else {
            // Overwhelm: the defender and every present mover all perish.
            for &(from, attacker) in &present {
                result.eliminated.push(attacker.at(from));
            }
            result.eliminated.push(defender.at(dest));
            board.take(dest);
        }
    } else {
        match present.as_slice() {
            [] => {}
            &[(_, mover)] if group.len() <= 2 => {
                // Unopposed relocation; with two intents this also covers a
                // contender that vanished earlier in the round.
                board.put(dest, mover);
                result.moved = true;
            }
            &[(from_a, a), (from_b, b)] if group.len() == 2 => {
                resolve_pairwise(a, from_a, b, from_b, dest, board, &mut result);
            }
            _ => {
                // Pile-up: three or more intents on an open cell eliminate
                // every mover that made it here.
                for &(from, mover) in &present {
                    result.eliminated.push(mover.at(from));
                }
            }
        }
    }

    result
}

/// Single detached attacker versus a stationary defender.
fn resolve_against_defender(
    attacker: Unit,
    from: Position,
    defender: Unit,
    dest: Position,
    board: &mut Board,
    result: &mut RoundResult,
) {
    if defender.owner == attacker.owner {
        // Same-owner destination: the mover replaces its own monster
        // without combat. The validator rejects this upstream.
        board.put(dest, attacker);
        result.moved = true;
        return;
    }

    match resolve_combat(attacker.kind, defender.kind) {
        CombatOutcome::AttackerWins => {
            result.eliminated.push(defender.at(dest));
            board.put(dest, attacker);
            result.moved = true;
        }
        CombatOutcome::DefenderWins => {
            result.eliminated.push(attacker.at(from));
        }
        CombatOutcome::BothEliminated => {
            result.eliminated.push(attacker.at(from));
            result.eliminated.push(defender.at(dest));
            board.take(dest);
        }
    }
}

/// Two detached movers fighting over an open cell.
fn resolve_pairwise(
    a: Unit,
    from_a: Position,
    b: Unit,
    from_b: Position,
    dest: Position,
    board: &mut Board,
    result: &mut RoundResult,
) {
    match resolve_combat(a.kind, b.kind) {
        CombatOutcome::AttackerWins => {
            result.eliminated.push(b.at(from_b));
            board.put(dest, a);
            result.winner = Some(a.at(dest));
            result.moved = true;
        }
        CombatOutcome::DefenderWins => {
            result.eliminated.push(a.at(from_a));
            board.put(dest, b);
            result.winner = Some(b.at(dest));
            result.moved = true;
        }
        CombatOutcome::BothEliminated => {
            result.eliminated.push(a.at(from_a));
            result.eliminated.push(b.at(from_b));
        }
    }
}

/// Remove every unit of players whose death counters have reached the
/// threshold, and deactivate them for future rounds.
fn eliminate_defeated(board: &mut Board, state: &mut RoundState) {
    for player in state.newly_defeated() {
        board.remove_units_of(player);
        state.deactivate(player);
    }
}
