//! Game settings and configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a game session (immutable after start).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Board width in cells.
    pub board_width: u32,
    /// Board height in cells.
    pub board_height: u32,
    /// Death count at which a player's remaining units are removed and the
    /// player is deactivated.
    pub elimination_threshold: u32,
    /// Maximum number of players the host accepts into one game.
    pub max_players: u8,
}

impl Default for GameSettings {
    /// The standard game: four players on a 10x10 board, eliminated after
    /// ten losses.
    fn default() -> Self {
        Self {
            board_width: 10,
            board_height: 10,
            elimination_threshold: 10,
            max_players: 4,
        }
    }
}
