// Eligible-player selection for the pick on the clock.

use super::pool::PlayerPool;
use super::position::PositionGroup;
use super::roster::RosterEntry;

/// How far below the best remaining rating a player may be and still be
/// draftable under the best-available rule.
pub const RATING_BAND: i32 = 2;

/// Team pick number after which unmet positional minimums take priority.
/// With 23 picks per team this covers each team's final 7 picks.
pub const FORCED_FILL_AFTER: usize = 16;

/// The first positional group, in fixed check order, that is still below
/// its minimum for this roster. `None` when every minimum is met.
pub fn needed_group(roster: &RosterEntry) -> Option<PositionGroup> {
    PositionGroup::CHECK_ORDER
        .into_iter()
        .find(|group| roster.count(*group) < group.minimum())
}

/// Compute the candidate set for a team's next pick, as indices into the
/// pool's current player slice.
///
/// Priority protocol:
/// 1. In the team's final picks (`team pick number > FORCED_FILL_AFTER`),
///    an unmet minimum restricts the candidates to that group.
/// 2. Otherwise (or when no such player remains in the pool), candidates
///    are every player within `RATING_BAND` of the best remaining rating
///    whose group has not reached its cap for this roster.
///
/// An empty result means the pick is stalled: no player satisfies the
/// rules for this team.
pub fn eligible_players(roster: &RosterEntry, pool: &PlayerPool) -> Vec<usize> {
    let team_pick_number = roster.len() + 1;

    if team_pick_number > FORCED_FILL_AFTER {
        if let Some(needed) = needed_group(roster) {
            let forced: Vec<usize> = pool
                .players()
                .iter()
                .enumerate()
                .filter(|(_, p)| p.position.group() == needed)
                .map(|(i, _)| i)
                .collect();
            if !forced.is_empty() {
                return forced;
            }
        }
    }

    let Some(highest) = pool.highest_rating() else {
        return Vec::new();
    };
    pool.players()
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            let group = p.position.group();
            p.rating >= highest - RATING_BAND && roster.count(group) < group.cap()
        })
        .map(|(i, _)| i)
        .collect()
}
