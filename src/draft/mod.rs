// Draft simulation core: schedule generation, eligibility rules, the
// pick state machine, and end-of-draft validation.

pub mod eligibility;
pub mod order;
pub mod player;
pub mod pool;
pub mod position;
pub mod roster;
pub mod simulator;
pub mod summary;

pub use order::ROUNDS;
pub use player::{DraftedPlayer, Player, Team};
pub use position::{Position, PositionGroup};
pub use roster::{RosterEntry, RosterSort};
pub use simulator::{DraftPhase, DraftSim, StepOutcome};
pub use summary::{draft_summary, TeamSummary};
