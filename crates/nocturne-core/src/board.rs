//! The game board: a fixed-size grid of monster slots.

use crate::grid::Position;
use crate::settings::GameSettings;
use crate::types::PlayerId;
use crate::unit::Unit;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from interactive board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),
    #[error("cell {0} is already occupied")]
    CellOccupied(Position),
}

/// A fixed-size grid where each cell either holds exactly one unit or is
/// empty.
///
/// Dimensions never change after construction. Cells are stored row-major;
/// the at-most-one-unit-per-cell invariant is carried by the representation
/// itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    width: u32,
    height: u32,
    cells: Vec<Option<Unit>>,
}

impl Board {
    /// Create a new empty board with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![None; (width * height) as usize],
        }
    }

    /// Create an empty board sized per the game settings.
    pub fn from_settings(settings: &GameSettings) -> Self {
        Self::new(settings.board_width, settings.board_height)
    }

    /// Board width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if a position is within the board bounds.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.in_bounds(self.width, self.height)
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some((pos.y as u32 * self.width + pos.x as u32) as usize)
        } else {
            None
        }
    }

    /// Get the unit at a position. Out-of-bounds positions read as empty.
    pub fn get(&self, pos: Position) -> Option<&Unit> {
        self.index(pos).and_then(|i| self.cells[i].as_ref())
    }

    /// Check if a cell holds no unit. Out-of-bounds positions read as empty.
    pub fn is_empty_cell(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Remove and return the unit at a position, leaving the cell empty.
    pub fn take(&mut self, pos: Position) -> Option<Unit> {
        self.index(pos).and_then(|i| self.cells[i].take())
    }

    /// Put a unit into a cell, returning any unit it displaced.
    ///
    /// Out-of-bounds writes are dropped and return `None`.
    pub fn put(&mut self, pos: Position, unit: Unit) -> Option<Unit> {
        match self.index(pos) {
            Some(i) => self.cells[i].replace(unit),
            None => None,
        }
    }

    /// Place a unit on an empty cell.
    ///
    /// Unlike [`Board::put`] this refuses to displace an occupant, so the
    /// service layer can report the rejection to the submitting player.
    pub fn place(&mut self, pos: Position, unit: Unit) -> Result<(), BoardError> {
        let i = self.index(pos).ok_or(BoardError::OutOfBounds(pos))?;
        if self.cells[i].is_some() {
            return Err(BoardError::CellOccupied(pos));
        }
        self.cells[i] = Some(unit);
        Ok(())
    }

    /// Iterate over all occupied cells in row-major order.
    pub fn units(&self) -> impl Iterator<Item = (Position, &Unit)> {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref().map(|unit| {
                let x = (i as u32 % self.width) as i32;
                let y = (i as u32 / self.width) as i32;
                (Position::new(x, y), unit)
            })
        })
    }

    /// Iterate over the cells occupied by one player's units.
    pub fn units_of(&self, owner: PlayerId) -> impl Iterator<Item = (Position, &Unit)> {
        self.units().filter(move |(_, unit)| unit.owner == owner)
    }

    /// Count all units on the board.
    pub fn unit_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Remove every unit owned by a player, returning how many were removed.
    ///
    /// Sweeping cells that are already empty is a no-op.
    pub fn remove_units_of(&mut self, owner: PlayerId) -> usize {
        let mut removed = 0;
        for cell in &mut self.cells {
            if cell.map(|unit| unit.owner) == Some(owner) {
                *cell = None;
                removed += 1;
            }
        }
        removed
    }
}

impl Default for Board {
    /// The standard board: 10x10, all cells empty.
    fn default() -> Self {
        Self::from_settings(&GameSettings::default())
    }
}
