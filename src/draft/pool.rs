// The shared pool of undrafted players.

use std::cmp::Reverse;

use super::player::Player;

/// The rating-sorted pool of players still available to draft.
///
/// The pool exclusively owns its backing sequence: it is sorted by rating
/// descending at construction and only `remove`/`remove_at` can mutate it,
/// so index 0 is always the highest-rated remaining player.
#[derive(Debug, Clone)]
pub struct PlayerPool {
    players: Vec<Player>,
}

impl PlayerPool {
    /// Build a pool from an externally supplied player list. Sorts by
    /// rating descending; the sort is stable, so equal ratings keep
    /// their input order.
    pub fn new(mut players: Vec<Player>) -> Self {
        players.sort_by_key(|p| Reverse(p.rating));
        PlayerPool { players }
    }

    /// Remove the first player with the given name. A no-op returning
    /// `None` when no such player is in the pool.
    pub fn remove(&mut self, name: &str) -> Option<Player> {
        let idx = self.players.iter().position(|p| p.name == name)?;
        Some(self.players.remove(idx))
    }

    /// Remove the player at the given index, if it exists.
    pub fn remove_at(&mut self, idx: usize) -> Option<Player> {
        if idx < self.players.len() {
            Some(self.players.remove(idx))
        } else {
            None
        }
    }

    /// Whether the pool has been exhausted.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Number of players remaining.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Rating of the best remaining player, if any.
    pub fn highest_rating(&self) -> Option<i32> {
        self.players.first().map(|p| p.rating)
    }

    /// Read-only view of the remaining players, best-rated first.
    pub fn players(&self) -> &[Player] {
        &self.players
    }
}
