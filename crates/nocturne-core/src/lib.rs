//! Nocturne Core Library
//!
//! This crate contains the core game logic for Nocturne, a turn-based,
//! simultaneous-move territory game where vampires, werewolves, and ghosts
//! contest a fixed grid.
//!
//! # Design Principles
//!
//! - **No I/O dependencies**: This crate is purely game logic; transport,
//!   persistence, and rendering live in the service layer
//! - **Deterministic**: A round's outcome depends only on the board, the
//!   intent batch, and the round state, never on submission order
//! - **Serializable**: All state can be broadcast/persisted via serde
//! - **Defensive**: Well-formed batches never produce errors; stale or
//!   malformed intents degrade to no-ops

// Core modules
pub mod grid;
pub mod types;
pub mod unit;

// Board and configuration
pub mod board;
pub mod settings;

// Round resolution
pub mod combat;
pub mod intent;
pub mod round;
pub mod state;
pub mod validate;

// Per-player views
pub mod view;

// Re-exports for convenience
pub use board::{Board, BoardError};
pub use combat::{resolve_combat, CombatOutcome};
pub use grid::Position;
pub use intent::{Intent, IntentError, IntentPayload};
pub use round::{apply_move, resolve_round, MoveReport, RoundResult};
pub use settings::GameSettings;
pub use state::RoundState;
pub use types::PlayerId;
pub use unit::{MonsterType, Unit, UnitAt};
pub use validate::{is_legal, path_blocked};
pub use view::placement_view;
