//! Group type - four-band label derived from aggregate mismatch.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

/// Inclusive upper bounds of the first three bands.
pub const GROUP_TYPE_BREAKPOINTS: [u8; 3] = [25, 45, 65];

/// How aligned a group is, best-aligned first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupType {
    /// Mismatch ≤ 25.
    InSync,
    /// Mismatch ≤ 45.
    Friendly,
    /// Mismatch ≤ 65.
    Balanced,
    /// Mismatch > 65.
    Individualist,
}

impl GroupType {
    /// Buckets an aggregate mismatch score.
    pub fn from_mismatch(mismatch: Percentage) -> Self {
        match mismatch.value() {
            m if m <= GROUP_TYPE_BREAKPOINTS[0] => GroupType::InSync,
            m if m <= GROUP_TYPE_BREAKPOINTS[1] => GroupType::Friendly,
            m if m <= GROUP_TYPE_BREAKPOINTS[2] => GroupType::Balanced,
            _ => GroupType::Individualist,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            GroupType::InSync => "以心伝心タイプ",
            GroupType::Friendly => "なかよしタイプ",
            GroupType::Balanced => "バランスタイプ",
            GroupType::Individualist => "個性派タイプ",
        }
    }

    /// One-line description shown under the label.
    pub fn description(&self) -> &'static str {
        match self {
            GroupType::InSync => "言わなくても通じ合う、息ぴったりのグループ",
            GroupType::Friendly => "少しの違いも楽しめる、仲の良いグループ",
            GroupType::Balanced => "好みはそれぞれ、歩み寄りが鍵のグループ",
            GroupType::Individualist => "こだわり強め、話し合うほど面白いグループ",
        }
    }
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn of(m: u8) -> GroupType {
        GroupType::from_mismatch(Percentage::new(m))
    }

    #[test]
    fn upper_bounds_are_inclusive() {
        assert_eq!(of(0), GroupType::InSync);
        assert_eq!(of(25), GroupType::InSync);
        assert_eq!(of(26), GroupType::Friendly);
        assert_eq!(of(45), GroupType::Friendly);
        assert_eq!(of(46), GroupType::Balanced);
        assert_eq!(of(65), GroupType::Balanced);
        assert_eq!(of(66), GroupType::Individualist);
        assert_eq!(of(100), GroupType::Individualist);
    }

    #[test]
    fn bands_are_ordered_best_first() {
        assert!(GroupType::InSync < GroupType::Friendly);
        assert!(GroupType::Balanced < GroupType::Individualist);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(format!("{}", GroupType::Balanced), "バランスタイプ");
    }
}
