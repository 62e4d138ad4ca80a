//! Per-game player bookkeeping: death counters and active status.

use crate::settings::GameSettings;
use crate::types::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Death counters and activity status carried across rounds.
///
/// Counters only ever grow. Once a player's count reaches the elimination
/// threshold the resolver removes their remaining units and deactivates them
/// permanently. Ordered collections keep iteration and serialized state
/// deterministic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// How many units each player has lost so far.
    pub deaths: BTreeMap<PlayerId, u32>,
    /// Players removed from play by the elimination cascade.
    eliminated: BTreeSet<PlayerId>,
    /// Death count at which a player is knocked out.
    elimination_threshold: u32,
}

impl RoundState {
    /// Create an empty state using the settings' elimination threshold.
    pub fn new(settings: &GameSettings) -> Self {
        Self {
            deaths: BTreeMap::new(),
            eliminated: BTreeSet::new(),
            elimination_threshold: settings.elimination_threshold,
        }
    }

    /// Register a player, starting their death counter at zero.
    pub fn add_player(&mut self, player: PlayerId) {
        self.deaths.entry(player).or_insert(0);
    }

    /// How many units this player has lost. Unregistered players read zero.
    pub fn deaths_of(&self, player: PlayerId) -> u32 {
        self.deaths.get(&player).copied().unwrap_or(0)
    }

    /// Whether the player is still in the game.
    pub fn is_active(&self, player: PlayerId) -> bool {
        !self.eliminated.contains(&player)
    }

    /// Registered players that have not been knocked out, in id order.
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.deaths
            .keys()
            .copied()
            .filter(|&player| self.is_active(player))
            .collect()
    }

    /// Record one lost unit for a player, returning the new count.
    ///
    /// Players never seen before are registered on the fly.
    pub fn record_loss(&mut self, player: PlayerId) -> u32 {
        let count = self.deaths.entry(player).or_insert(0);
        *count += 1;
        *count
    }

    /// Permanently remove a player from play.
    pub fn deactivate(&mut self, player: PlayerId) {
        self.eliminated.insert(player);
    }

    /// The death count at which players are knocked out.
    pub fn elimination_threshold(&self) -> u32 {
        self.elimination_threshold
    }

    /// Registered players whose counters have reached the threshold but who
    /// have not been deactivated yet.
    pub fn newly_defeated(&self) -> Vec<PlayerId> {
        self.deaths
            .iter()
            .filter(|&(&player, &count)| {
                count >= self.elimination_threshold && self.is_active(player)
            })
            .map(|(&player, _)| player)
            .collect()
    }

    /// The winner, if exactly one registered player remains active.
    ///
    /// Game termination stays a caller decision; this is the threshold check
    /// the service layer runs after each round.
    pub fn sole_survivor(&self) -> Option<PlayerId> {
        let active = self.active_players();
        match active.as_slice() {
            &[winner] => Some(winner),
            _ => None,
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new(&GameSettings::default())
    }
}
