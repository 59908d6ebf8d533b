// The pick-by-pick draft state machine.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use super::eligibility::eligible_players;
use super::order::{generate_order, DraftSlot, ROUNDS};
use super::player::{DraftedPlayer, Player, Team};
use super::pool::PlayerPool;
use super::roster::RosterEntry;

/// Where the draft currently stands.
///
/// `Completed` carries whether completion was clean (every slot filled)
/// or forced by a stall: an empty eligible set or an exhausted pool left
/// some teams under-drafted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftPhase {
    NotStarted,
    InProgress,
    Completed { stalled: bool },
}

/// Result of a single `step()` call.
#[derive(Debug, Clone)]
pub enum StepOutcome {
    /// A pick was committed.
    Picked(DraftedPlayer),
    /// No player satisfies the eligibility rules for the team on the
    /// clock (or the pool is empty). The draft state is unchanged.
    Stalled,
    /// The draft is already in a terminal state.
    Complete,
}

/// The draft simulation: the serpentine schedule, the shared pool, and
/// one roster per team.
///
/// The simulator exclusively owns and mutates the pool and the rosters.
/// Each successful step commits atomically: the player moves from the
/// pool to exactly one roster, that roster's group tally is bumped, and
/// the cursor advances, all before `step()` returns.
#[derive(Debug)]
pub struct DraftSim {
    teams: Vec<Team>,
    order: Vec<DraftSlot>,
    cursor: usize,
    rosters: Vec<RosterEntry>,
    pool: PlayerPool,
    phase: DraftPhase,
    followed: Option<usize>,
    rng: ChaCha8Rng,
}

impl DraftSim {
    /// Set up a draft over the given teams and player pool.
    ///
    /// The seed drives both the first-round team shuffle and the
    /// tie-break among eligible players; the same seed over the same
    /// input reproduces the draft pick for pick.
    pub fn new(teams: Vec<Team>, players: Vec<Player>, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let order = generate_order(teams.len(), &mut rng);
        let rosters = teams.iter().map(|_| RosterEntry::new()).collect();
        let pool = PlayerPool::new(players);
        info!(
            teams = teams.len(),
            pool = pool.len(),
            total_picks = order.len(),
            seed,
            "draft initialised"
        );
        DraftSim {
            teams,
            order,
            cursor: 0,
            rosters,
            pool,
            phase: DraftPhase::NotStarted,
            followed: None,
            rng,
        }
    }

    /// Choose which team's perspective is being followed. Purely a view
    /// concern; has no effect on the simulation. Returns `false` when no
    /// team with that name exists.
    pub fn select_team(&mut self, name: &str) -> bool {
        match self.teams.iter().position(|t| t.name == name) {
            Some(idx) => {
                self.followed = Some(idx);
                true
            }
            None => false,
        }
    }

    /// The followed team, if one was selected.
    pub fn followed_team(&self) -> Option<&Team> {
        self.followed.map(|idx| &self.teams[idx])
    }

    /// Advance the draft by exactly one pick.
    ///
    /// A stalled pick is a no-op: the cursor, pool, and rosters are left
    /// untouched and the caller sees `StepOutcome::Stalled`. Stepping a
    /// completed draft returns `Complete` without touching state.
    pub fn step(&mut self) -> StepOutcome {
        if matches!(self.phase, DraftPhase::Completed { .. }) {
            return StepOutcome::Complete;
        }
        if self.cursor >= self.order.len() {
            self.phase = DraftPhase::Completed { stalled: false };
            return StepOutcome::Complete;
        }
        if self.pool.is_empty() {
            warn!(cursor = self.cursor, "pool exhausted before the schedule ran out");
            return StepOutcome::Stalled;
        }
        match self.try_pick() {
            Some(drafted) => {
                self.phase = if self.cursor == self.order.len() {
                    DraftPhase::Completed { stalled: false }
                } else {
                    DraftPhase::InProgress
                };
                StepOutcome::Picked(drafted)
            }
            None => StepOutcome::Stalled,
        }
    }

    /// Fast-forward the draft to its terminal state.
    ///
    /// Applies the step logic in a loop; stops early when a pick stalls
    /// or the pool runs dry. The cursor is then forced to the total so
    /// the draft always lands in `Completed`; a stall is recorded in the
    /// phase rather than silently reported as a clean finish.
    pub fn complete_draft(&mut self) {
        if matches!(self.phase, DraftPhase::Completed { .. }) {
            return;
        }
        let total = self.order.len();
        while self.cursor < total && !self.pool.is_empty() {
            if self.try_pick().is_none() {
                break;
            }
        }
        let stalled = self.cursor < total;
        if stalled {
            warn!(
                picks_made = self.cursor,
                total,
                "draft stalled before every slot was filled"
            );
        } else {
            info!(total, "draft completed");
        }
        self.cursor = total;
        self.phase = DraftPhase::Completed { stalled };
    }

    /// Resolve the current slot and commit one pick. Returns `None`
    /// without changing any state when the eligible set is empty.
    fn try_pick(&mut self) -> Option<DraftedPlayer> {
        let slot = self.order[self.cursor];
        let roster = &self.rosters[slot.team_idx];
        let eligible = eligible_players(roster, &self.pool);
        let Some(&pool_idx) = eligible.as_slice().choose(&mut self.rng) else {
            warn!(
                team = %self.teams[slot.team_idx].name,
                cursor = self.cursor,
                pool = self.pool.len(),
                "no eligible player for the team on the clock"
            );
            return None;
        };

        let player = self.pool.remove_at(pool_idx)?;
        let team_count = self.teams.len();
        let drafted = DraftedPlayer::from_pick(
            player,
            self.cursor as u32 + 1,
            (self.cursor / team_count) as u32 + 1,
            (self.cursor % team_count) as u32 + 1,
        );
        debug!(
            team = %self.teams[slot.team_idx].name,
            player = %drafted.name,
            position = %drafted.position,
            rating = drafted.rating,
            draft_number = drafted.draft_number,
            "pick committed"
        );
        self.rosters[slot.team_idx].add(drafted.clone());
        self.cursor += 1;
        Some(drafted)
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> DraftPhase {
        self.phase
    }

    /// Number of the next pick to be made (0-based). Forced to the total
    /// after `complete_draft()`, even when the draft stalled early.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of slots in the schedule (`ROUNDS` per team).
    pub fn total_picks(&self) -> usize {
        self.order.len()
    }

    /// The team whose pick is next, while the draft is still running.
    pub fn on_the_clock(&self) -> Option<&Team> {
        if matches!(self.phase, DraftPhase::Completed { .. }) {
            return None;
        }
        self.order.get(self.cursor).map(|slot| &self.teams[slot.team_idx])
    }

    /// The participating teams, in their supplied order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Each team paired with its roster, in team-list order.
    pub fn rosters(&self) -> impl Iterator<Item = (&Team, &RosterEntry)> {
        self.teams.iter().zip(self.rosters.iter())
    }

    /// A single team's roster, by team name.
    pub fn roster_for(&self, team_name: &str) -> Option<&RosterEntry> {
        self.teams
            .iter()
            .position(|t| t.name == team_name)
            .map(|idx| &self.rosters[idx])
    }

    /// The remaining undrafted pool.
    pub fn pool(&self) -> &PlayerPool {
        &self.pool
    }

    /// The full pick schedule.
    pub fn order(&self) -> &[DraftSlot] {
        &self.order
    }

    /// Total picks per team so far equals `ROUNDS` on a cleanly
    /// completed draft.
    pub fn rounds(&self) -> usize {
        ROUNDS
    }
}
