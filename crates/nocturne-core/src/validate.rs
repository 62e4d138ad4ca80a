//! Move legality: geometry and line-of-sight.
//!
//! The validator is pure and read-only, so it can be called speculatively
//! before a round starts, both for client-side hinting and server-side
//! enforcement. It deliberately does not check that the origin holds one of
//! the mover's units; whether the unit still exists when the round resolves
//! is a resolution-time concern.

use crate::board::Board;
use crate::grid::Position;
use crate::types::PlayerId;

/// Check whether `player` may move a unit from `from` to `to`.
///
/// A move is legal iff:
/// - both endpoints are on the board and differ;
/// - it is axis-aligned (any distance) or diagonal with `|dx| == |dy| <= 2`;
/// - an axis-aligned path is not blocked by an enemy unit strictly between
///   the endpoints (friendly units do not block; diagonals may jump);
/// - the destination does not hold one of the mover's own units.
pub fn is_legal(from: Position, to: Position, board: &Board, player: PlayerId) -> bool {
    if !board.in_bounds(from) || !board.in_bounds(to) || from == to {
        return false;
    }

    // A friendly-held destination is illegal; the resolver would otherwise
    // silently replace the occupant.
    if board.get(to).is_some_and(|unit| unit.owner == player) {
        return false;
    }

    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    let straight = dx == 0 || dy == 0;
    let diagonal = dx == dy && dx <= 2;

    if !straight && !diagonal {
        return false;
    }

    !(straight && path_blocked(from, to, board, player))
}

/// Check whether an enemy unit stands strictly between `from` and `to`.
pub fn path_blocked(from: Position, to: Position, board: &Board, player: PlayerId) -> bool {
    from.cells_between(&to)
        .into_iter()
        .any(|cell| board.get(cell).is_some_and(|unit| unit.owner != player))
}
