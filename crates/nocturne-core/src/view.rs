//! Per-player masking of in-progress placements.
//!
//! Between rounds, players position new monsters on a working copy of the
//! board. Until the round resolves, each player may only see the last
//! resolved board plus their own pending placements; everyone else's show up
//! after resolution.

use crate::board::Board;
use crate::types::PlayerId;

/// Build the board `player` is allowed to see during the placement phase.
///
/// Every cell shows the resolved state, except cells where the working board
/// holds one of `player`'s own units. Both boards must share dimensions.
pub fn placement_view(resolved: &Board, working: &Board, player: PlayerId) -> Board {
    debug_assert_eq!(resolved.width(), working.width());
    debug_assert_eq!(resolved.height(), working.height());

    let mut view = resolved.clone();
    for (pos, unit) in working.units_of(player) {
        view.put(pos, *unit);
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;
    use crate::unit::{MonsterType, Unit};

    #[test]
    fn test_view_hides_other_players_pending_placements() {
        let resolved = Board::default();
        let mut working = resolved.clone();
        working
            .place(Position::new(1, 1), Unit::new(1, MonsterType::Vampire))
            .unwrap();
        working
            .place(Position::new(8, 8), Unit::new(2, MonsterType::Ghost))
            .unwrap();

        let view = placement_view(&resolved, &working, 1);
        assert_eq!(
            view.get(Position::new(1, 1)),
            Some(&Unit::new(1, MonsterType::Vampire))
        );
        assert!(view.is_empty_cell(Position::new(8, 8)));
    }

    #[test]
    fn test_view_keeps_resolved_units_visible() {
        let mut resolved = Board::default();
        resolved
            .place(Position::new(4, 4), Unit::new(2, MonsterType::Werewolf))
            .unwrap();
        let working = resolved.clone();

        let view = placement_view(&resolved, &working, 1);
        assert_eq!(
            view.get(Position::new(4, 4)),
            Some(&Unit::new(2, MonsterType::Werewolf))
        );
    }
}
