//! Roadmap phases.
//!
//! The phase of an item depends only on its current level. The mapping is a
//! fixed lookup table so it can be retuned without touching any logic.

use crate::model::MaturityLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time window an improvement is scheduled into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// First quarter
    #[serde(rename = "0-3 months")]
    Immediate,
    /// Second quarter
    #[serde(rename = "3-6 months")]
    ShortTerm,
    /// Second half-year
    #[serde(rename = "6-12 months")]
    MediumTerm,
    /// Already at the top level, no deadline
    #[serde(rename = "maintenance")]
    Maintenance,
}

impl Phase {
    /// All phases in schedule order
    pub const ALL: [Self; 4] = [
        Self::Immediate,
        Self::ShortTerm,
        Self::MediumTerm,
        Self::Maintenance,
    ];

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Immediate => "0–3 months",
            Self::ShortTerm => "3–6 months",
            Self::MediumTerm => "6–12 months",
            Self::Maintenance => "Maintenance",
        }
    }

    /// Start and end month of the window, `None` for maintenance
    #[must_use]
    pub const fn window_months(self) -> Option<(u8, u8)> {
        match self {
            Self::Immediate => Some((0, 3)),
            Self::ShortTerm => Some((3, 6)),
            Self::MediumTerm => Some((6, 12)),
            Self::Maintenance => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How urgently a phase should be worked on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhasePriority {
    /// Foundational gaps
    High = 1,
    Medium = 2,
    /// Moving from managed to optimized
    Optimization = 3,
    Maintenance = 4,
}

impl PhasePriority {
    /// Priority number (1 = highest)
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Optimization => "Optimization",
            Self::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for PhasePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the phase table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseRule {
    pub level: MaturityLevel,
    pub phase: Phase,
    pub priority: PhasePriority,
}

/// Phase assignment by current level, indexed by `level - 1`
pub const PHASE_TABLE: [PhaseRule; 5] = [
    PhaseRule {
        level: MaturityLevel::Initial,
        phase: Phase::Immediate,
        priority: PhasePriority::High,
    },
    PhaseRule {
        level: MaturityLevel::Developing,
        phase: Phase::Immediate,
        priority: PhasePriority::High,
    },
    PhaseRule {
        level: MaturityLevel::Defined,
        phase: Phase::ShortTerm,
        priority: PhasePriority::Medium,
    },
    PhaseRule {
        level: MaturityLevel::Managed,
        phase: Phase::MediumTerm,
        priority: PhasePriority::Optimization,
    },
    PhaseRule {
        level: MaturityLevel::Optimized,
        phase: Phase::Maintenance,
        priority: PhasePriority::Maintenance,
    },
];

/// Phase table row for a level
#[must_use]
pub const fn phase_rule(level: MaturityLevel) -> PhaseRule {
    PHASE_TABLE[level.number() as usize - 1]
}

/// Phase an item at this current level belongs to
#[must_use]
pub const fn phase_for_level(level: MaturityLevel) -> Phase {
    phase_rule(level).phase
}

/// Priority of an item at this current level
#[must_use]
pub const fn priority_for_level(level: MaturityLevel) -> PhasePriority {
    phase_rule(level).priority
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows_match_their_index() {
        for (i, rule) in PHASE_TABLE.iter().enumerate() {
            assert_eq!(usize::from(rule.level.number()), i + 1);
        }
    }

    #[test]
    fn test_phase_assignment() {
        assert_eq!(phase_for_level(MaturityLevel::Initial), Phase::Immediate);
        assert_eq!(phase_for_level(MaturityLevel::Developing), Phase::Immediate);
        assert_eq!(phase_for_level(MaturityLevel::Defined), Phase::ShortTerm);
        assert_eq!(phase_for_level(MaturityLevel::Managed), Phase::MediumTerm);
        assert_eq!(phase_for_level(MaturityLevel::Optimized), Phase::Maintenance);
    }

    #[test]
    fn test_priorities() {
        assert_eq!(priority_for_level(MaturityLevel::Initial), PhasePriority::High);
        assert_eq!(priority_for_level(MaturityLevel::Defined), PhasePriority::Medium);
        assert_eq!(
            priority_for_level(MaturityLevel::Managed),
            PhasePriority::Optimization
        );
        assert_eq!(PhasePriority::High.rank(), 1);
    }

    #[test]
    fn test_phase_order_and_windows() {
        assert!(Phase::Immediate < Phase::ShortTerm);
        assert!(Phase::MediumTerm < Phase::Maintenance);
        assert_eq!(Phase::ShortTerm.window_months(), Some((3, 6)));
        assert_eq!(Phase::Maintenance.window_months(), None);
    }

    #[test]
    fn test_phase_serializes_to_window_name() {
        assert_eq!(
            serde_json::to_string(&Phase::Immediate).unwrap(),
            "\"0-3 months\""
        );
        assert_eq!(Phase::MediumTerm.to_string(), "6–12 months");
    }
}
