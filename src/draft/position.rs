// Detailed position labels and the four positional groups.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Detailed field positions as they appear in the player data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "LB")]
    LeftBack,
    #[serde(rename = "CB")]
    CentreBack,
    #[serde(rename = "RB")]
    RightBack,
    #[serde(rename = "CDM")]
    DefensiveMidfielder,
    #[serde(rename = "CM")]
    CentralMidfielder,
    #[serde(rename = "CAM")]
    AttackingMidfielder,
    #[serde(rename = "ST")]
    Striker,
    #[serde(rename = "LW")]
    LeftWinger,
    #[serde(rename = "RW")]
    RightWinger,
}

impl Position {
    /// Parse a position label into a Position enum.
    ///
    /// Only the ten labels used by the player data are recognised
    /// ("GK", "LB", "CB", "RB", "CDM", "CM", "CAM", "ST", "LW", "RW").
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GK" => Some(Position::Goalkeeper),
            "LB" => Some(Position::LeftBack),
            "CB" => Some(Position::CentreBack),
            "RB" => Some(Position::RightBack),
            "CDM" => Some(Position::DefensiveMidfielder),
            "CM" => Some(Position::CentralMidfielder),
            "CAM" => Some(Position::AttackingMidfielder),
            "ST" => Some(Position::Striker),
            "LW" => Some(Position::LeftWinger),
            "RW" => Some(Position::RightWinger),
            _ => None,
        }
    }

    /// Return the display label for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::LeftBack => "LB",
            Position::CentreBack => "CB",
            Position::RightBack => "RB",
            Position::DefensiveMidfielder => "CDM",
            Position::CentralMidfielder => "CM",
            Position::AttackingMidfielder => "CAM",
            Position::Striker => "ST",
            Position::LeftWinger => "LW",
            Position::RightWinger => "RW",
        }
    }

    /// The positional group this detailed position belongs to.
    pub fn group(&self) -> PositionGroup {
        match self {
            Position::Goalkeeper => PositionGroup::Goalkeeper,
            Position::LeftBack | Position::CentreBack | Position::RightBack => {
                PositionGroup::Defence
            }
            Position::DefensiveMidfielder
            | Position::CentralMidfielder
            | Position::AttackingMidfielder => PositionGroup::Midfield,
            Position::Striker | Position::LeftWinger | Position::RightWinger => {
                PositionGroup::Attack
            }
        }
    }

    /// Deterministic ordering index for roster display, goalkeeper first,
    /// then defence right-to-left, midfield, wings and striker last.
    pub fn display_order(&self) -> u8 {
        match self {
            Position::Goalkeeper => 0,
            Position::RightBack => 1,
            Position::CentreBack => 2,
            Position::LeftBack => 3,
            Position::DefensiveMidfielder => 4,
            Position::CentralMidfielder => 5,
            Position::AttackingMidfielder => 6,
            Position::RightWinger => 7,
            Position::LeftWinger => 8,
            Position::Striker => 9,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// The four positional groups a squad is balanced over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionGroup {
    Goalkeeper,
    Defence,
    Midfield,
    Attack,
}

impl PositionGroup {
    /// Fixed order in which unmet minimums are checked during the
    /// forced-fill phase of the draft.
    pub const CHECK_ORDER: [PositionGroup; 4] = [
        PositionGroup::Goalkeeper,
        PositionGroup::Defence,
        PositionGroup::Midfield,
        PositionGroup::Attack,
    ];

    /// Minimum number of players a legal squad needs in this group.
    pub fn minimum(&self) -> usize {
        match self {
            PositionGroup::Goalkeeper => 3,
            PositionGroup::Defence => 6,
            PositionGroup::Midfield => 4,
            PositionGroup::Attack => 5,
        }
    }

    /// Maximum number of players a squad may draft in this group.
    pub fn cap(&self) -> usize {
        match self {
            PositionGroup::Goalkeeper => 3,
            PositionGroup::Defence => 10,
            PositionGroup::Midfield => 7,
            PositionGroup::Attack => 8,
        }
    }

    /// Short display label ("GK", "DEF", "MID", "ATT").
    pub fn display_str(&self) -> &'static str {
        match self {
            PositionGroup::Goalkeeper => "GK",
            PositionGroup::Defence => "DEF",
            PositionGroup::Midfield => "MID",
            PositionGroup::Attack => "ATT",
        }
    }

    /// Plural noun used in the end-of-draft warnings.
    pub fn plural_label(&self) -> &'static str {
        match self {
            PositionGroup::Goalkeeper => "Goalkeepers",
            PositionGroup::Defence => "Defenders",
            PositionGroup::Midfield => "Midfielders",
            PositionGroup::Attack => "Attackers",
        }
    }
}

impl fmt::Display for PositionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}
