// Serpentine draft order generation.

use rand::seq::SliceRandom;
use rand::Rng;

/// Number of rounds in a draft. Every team ends up with one pick per round.
pub const ROUNDS: usize = 23;

/// One entry of the draft schedule: which team picks at which overall slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftSlot {
    /// Index into the team list.
    pub team_idx: usize,
    /// 0-based overall slot index.
    pub overall: usize,
}

/// Generate the full serpentine pick schedule for `team_count` teams.
///
/// Teams are shuffled once into a random first-round order; even rounds
/// repeat that order forward, odd rounds reverse it, which balances the
/// average pick position across teams. The result is immutable by
/// convention: it is generated once per draft and consumed as-is.
pub fn generate_order<R: Rng>(team_count: usize, rng: &mut R) -> Vec<DraftSlot> {
    let mut first_round: Vec<usize> = (0..team_count).collect();
    first_round.shuffle(rng);

    let mut order = Vec::with_capacity(ROUNDS * team_count);
    for round in 0..ROUNDS {
        let forward = round % 2 == 0;
        for i in 0..team_count {
            let team_idx = if forward {
                first_round[i]
            } else {
                first_round[team_count - 1 - i]
            };
            order.push(DraftSlot {
                team_idx,
                overall: order.len(),
            });
        }
    }
    order
}
