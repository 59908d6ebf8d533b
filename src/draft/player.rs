// Player and team records.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// An undrafted player in the shared pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Player name, unique within the pool.
    pub name: String,
    /// Detailed position label.
    pub position: Position,
    /// Overall rating. Higher is better.
    pub rating: i32,
}

/// A team participating in the draft. Supplied externally; read-only
/// to the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Team name, unique within the team list.
    pub name: String,
    /// URL or path of the team badge image.
    pub badge_url: String,
}

/// A player after being drafted, annotated with where in the draft the
/// pick happened. All three numbers are 1-based.
#[derive(Debug, Clone, Serialize)]
pub struct DraftedPlayer {
    pub name: String,
    pub position: Position,
    pub rating: i32,
    /// Overall pick index across the whole draft.
    pub draft_number: u32,
    /// Round the pick was made in.
    pub round: u32,
    /// Pick index within the round.
    pub pick: u32,
}

impl DraftedPlayer {
    /// Annotate a pool player with its pick coordinates.
    pub fn from_pick(player: Player, draft_number: u32, round: u32, pick: u32) -> Self {
        DraftedPlayer {
            name: player.name,
            position: player.position,
            rating: player.rating,
            draft_number,
            round,
            pick,
        }
    }
}
