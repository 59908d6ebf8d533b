// Per-team roster state and display transforms.

use serde::Serialize;

use super::player::DraftedPlayer;
use super::position::PositionGroup;

/// Running count of drafted players per positional group.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupCounts {
    pub gk: usize,
    pub def: usize,
    pub mid: usize,
    pub att: usize,
}

impl GroupCounts {
    /// Count for one group.
    pub fn get(&self, group: PositionGroup) -> usize {
        match group {
            PositionGroup::Goalkeeper => self.gk,
            PositionGroup::Defence => self.def,
            PositionGroup::Midfield => self.mid,
            PositionGroup::Attack => self.att,
        }
    }

    fn bump(&mut self, group: PositionGroup) {
        match group {
            PositionGroup::Goalkeeper => self.gk += 1,
            PositionGroup::Defence => self.def += 1,
            PositionGroup::Midfield => self.mid += 1,
            PositionGroup::Attack => self.att += 1,
        }
    }

    /// Sum over all four groups. Always equals the roster's player count.
    pub fn total(&self) -> usize {
        self.gk + self.def + self.mid + self.att
    }
}

/// Sort orders for displaying a drafted roster. Presentation only; the
/// underlying roster always keeps draft order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterSort {
    DraftOrder,
    Position,
    Rating,
}

impl RosterSort {
    /// Parse a config key ("draft_order", "position", "rating").
    pub fn from_str_key(s: &str) -> Option<Self> {
        match s {
            "draft_order" => Some(RosterSort::DraftOrder),
            "position" => Some(RosterSort::Position),
            "rating" => Some(RosterSort::Rating),
            _ => None,
        }
    }
}

/// One team's state during and after the draft: the players it has
/// drafted (in draft order) and its per-group tallies.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RosterEntry {
    players: Vec<DraftedPlayer>,
    counts: GroupCounts,
}

impl RosterEntry {
    pub fn new() -> Self {
        RosterEntry::default()
    }

    /// Record a drafted player. The group tally is bumped in the same
    /// call so counts and player sequence can never disagree.
    pub fn add(&mut self, player: DraftedPlayer) {
        self.counts.bump(player.position.group());
        self.players.push(player);
    }

    /// Drafted players in draft order.
    pub fn players(&self) -> &[DraftedPlayer] {
        &self.players
    }

    /// Number of players drafted so far.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Count for one positional group.
    pub fn count(&self, group: PositionGroup) -> usize {
        self.counts.get(group)
    }

    /// All four group tallies.
    pub fn counts(&self) -> &GroupCounts {
        &self.counts
    }

    /// Players re-ordered for display. `DraftOrder` is the natural order;
    /// `Position` uses the detailed-position display order; `Rating` is
    /// highest to lowest.
    pub fn sorted_players(&self, sort: RosterSort) -> Vec<&DraftedPlayer> {
        let mut view: Vec<&DraftedPlayer> = self.players.iter().collect();
        match sort {
            RosterSort::DraftOrder => {}
            RosterSort::Position => {
                view.sort_by_key(|p| p.position.display_order());
            }
            RosterSort::Rating => {
                view.sort_by_key(|p| std::cmp::Reverse(p.rating));
            }
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::position::Position;

    fn drafted(name: &str, position: Position, rating: i32, draft_number: u32) -> DraftedPlayer {
        DraftedPlayer {
            name: name.into(),
            position,
            rating,
            draft_number,
            round: 1,
            pick: draft_number,
        }
    }

    #[test]
    fn new_roster_is_empty() {
        let roster = RosterEntry::new();
        assert!(roster.is_empty());
        assert_eq!(roster.counts().total(), 0);
    }

    #[test]
    fn add_updates_group_counts() {
        let mut roster = RosterEntry::new();
        roster.add(drafted("Keeper", Position::Goalkeeper, 85, 1));
        roster.add(drafted("Back", Position::CentreBack, 84, 2));
        roster.add(drafted("Wide", Position::LeftWinger, 83, 3));
        assert_eq!(roster.count(PositionGroup::Goalkeeper), 1);
        assert_eq!(roster.count(PositionGroup::Defence), 1);
        assert_eq!(roster.count(PositionGroup::Midfield), 0);
        assert_eq!(roster.count(PositionGroup::Attack), 1);
    }

    #[test]
    fn counts_total_equals_player_count() {
        let mut roster = RosterEntry::new();
        let positions = [
            Position::Goalkeeper,
            Position::LeftBack,
            Position::CentralMidfielder,
            Position::Striker,
            Position::RightWinger,
        ];
        for (i, pos) in positions.iter().enumerate() {
            roster.add(drafted(&format!("P{}", i), *pos, 80, i as u32 + 1));
            assert_eq!(roster.counts().total(), roster.len());
        }
    }

    #[test]
    fn sorted_by_draft_order_keeps_natural_order() {
        let mut roster = RosterEntry::new();
        roster.add(drafted("First", Position::Striker, 70, 1));
        roster.add(drafted("Second", Position::Goalkeeper, 90, 2));
        let view = roster.sorted_players(RosterSort::DraftOrder);
        assert_eq!(view[0].name, "First");
        assert_eq!(view[1].name, "Second");
    }

    #[test]
    fn sorted_by_position_uses_display_order() {
        let mut roster = RosterEntry::new();
        roster.add(drafted("Striker", Position::Striker, 88, 1));
        roster.add(drafted("Keeper", Position::Goalkeeper, 80, 2));
        roster.add(drafted("Back", Position::RightBack, 78, 3));
        let view = roster.sorted_players(RosterSort::Position);
        let names: Vec<&str> = view.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Keeper", "Back", "Striker"]);
    }

    #[test]
    fn sorted_by_rating_is_descending() {
        let mut roster = RosterEntry::new();
        roster.add(drafted("Mid", Position::CentralMidfielder, 80, 1));
        roster.add(drafted("Best", Position::Striker, 92, 2));
        roster.add(drafted("Low", Position::LeftBack, 75, 3));
        let view = roster.sorted_players(RosterSort::Rating);
        let ratings: Vec<i32> = view.iter().map(|p| p.rating).collect();
        assert_eq!(ratings, vec![92, 80, 75]);
    }

    #[test]
    fn sorting_does_not_mutate_the_roster() {
        let mut roster = RosterEntry::new();
        roster.add(drafted("A", Position::Striker, 70, 1));
        roster.add(drafted("B", Position::Goalkeeper, 90, 2));
        let _ = roster.sorted_players(RosterSort::Rating);
        assert_eq!(roster.players()[0].name, "A");
    }

    #[test]
    fn roster_sort_from_str_key() {
        assert_eq!(RosterSort::from_str_key("draft_order"), Some(RosterSort::DraftOrder));
        assert_eq!(RosterSort::from_str_key("position"), Some(RosterSort::Position));
        assert_eq!(RosterSort::from_str_key("rating"), Some(RosterSort::Rating));
        assert_eq!(RosterSort::from_str_key("salary"), None);
    }
}
