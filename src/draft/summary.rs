// End-of-draft roster validation and the per-team summary.

use serde::Serialize;

use super::order::ROUNDS;
use super::position::PositionGroup;
use super::roster::RosterEntry;
use super::simulator::DraftSim;

/// The warnings for one team's final roster.
#[derive(Debug, Clone, Serialize)]
pub struct TeamSummary {
    pub team_name: String,
    pub warnings: Vec<String>,
}

/// Derive the warnings for one roster from its final position counts.
///
/// Each group is compared against its minimum and cap (GK has an exact
/// target of 3, the others are ranges), and the total drafted count is
/// compared against the full 23-round squad size. Pure and idempotent:
/// the same roster always yields the same warnings, and none when every
/// bound holds.
pub fn team_warnings(roster: &RosterEntry) -> Vec<String> {
    let mut warnings = Vec::new();
    for group in PositionGroup::CHECK_ORDER {
        let count = roster.count(group);
        if count < group.minimum() {
            warnings.push(format!(
                "Less than {} {}",
                group.minimum(),
                group.plural_label()
            ));
        }
        if count > group.cap() {
            warnings.push(format!("More than {} {}", group.cap(), group.plural_label()));
        }
    }
    let total = roster.len();
    if total != ROUNDS {
        warnings.push(format!(
            "Total players drafted: {} (should be {})",
            total, ROUNDS
        ));
    }
    warnings
}

/// Assemble the summary for every team, in team-list order. Callable at
/// any point, but only meaningful once the draft is completed.
pub fn draft_summary(sim: &DraftSim) -> Vec<TeamSummary> {
    sim.rosters()
        .map(|(team, roster)| TeamSummary {
            team_name: team.name.clone(),
            warnings: team_warnings(roster),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::player::DraftedPlayer;
    use crate::draft::position::Position;

    fn roster_with(counts: &[(Position, usize)]) -> RosterEntry {
        let mut roster = RosterEntry::new();
        let mut n = 0u32;
        for (position, count) in counts {
            for _ in 0..*count {
                n += 1;
                roster.add(DraftedPlayer {
                    name: format!("Player {}", n),
                    position: *position,
                    rating: 80,
                    draft_number: n,
                    round: 1,
                    pick: n,
                });
            }
        }
        roster
    }

    #[test]
    fn legal_roster_has_no_warnings() {
        let roster = roster_with(&[
            (Position::Goalkeeper, 3),
            (Position::CentreBack, 7),
            (Position::CentralMidfielder, 6),
            (Position::Striker, 7),
        ]);
        assert!(team_warnings(&roster).is_empty());
    }

    #[test]
    fn short_roster_reports_each_violated_bound() {
        // GK=2, DEF=6, MID=4, ATT=5: total 17.
        let roster = roster_with(&[
            (Position::Goalkeeper, 2),
            (Position::LeftBack, 6),
            (Position::CentralMidfielder, 4),
            (Position::Striker, 5),
        ]);
        let warnings = team_warnings(&roster);
        assert!(warnings.contains(&"Less than 3 Goalkeepers".to_string()));
        assert!(warnings.contains(&"Total players drafted: 17 (should be 23)".to_string()));
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn empty_roster_reports_every_minimum() {
        let roster = RosterEntry::new();
        let warnings = team_warnings(&roster);
        assert!(warnings.contains(&"Less than 3 Goalkeepers".to_string()));
        assert!(warnings.contains(&"Less than 6 Defenders".to_string()));
        assert!(warnings.contains(&"Less than 4 Midfielders".to_string()));
        assert!(warnings.contains(&"Less than 5 Attackers".to_string()));
        assert!(warnings.contains(&"Total players drafted: 0 (should be 23)".to_string()));
        assert_eq!(warnings.len(), 5);
    }

    #[test]
    fn excess_counts_report_cap_violations() {
        // Not reachable through the simulator (caps are enforced at pick
        // time) but the validator checks both directions regardless.
        let roster = roster_with(&[
            (Position::Goalkeeper, 4),
            (Position::CentreBack, 11),
            (Position::CentralMidfielder, 8),
        ]);
        let warnings = team_warnings(&roster);
        assert!(warnings.contains(&"More than 3 Goalkeepers".to_string()));
        assert!(warnings.contains(&"More than 10 Defenders".to_string()));
        assert!(warnings.contains(&"More than 7 Midfielders".to_string()));
    }

    #[test]
    fn warnings_are_idempotent() {
        let roster = roster_with(&[(Position::Goalkeeper, 1), (Position::Striker, 2)]);
        assert_eq!(team_warnings(&roster), team_warnings(&roster));
    }
}
