//! Letter grades and maturity levels.
//!
//! Questionnaire answers are letters A–E on a 1–5 scale. Averages over
//! several answers are mapped back onto whole maturity levels with
//! [`level_from_score`].

use crate::error::{MaturityError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest score on the answer scale (grade A)
pub const MIN_SCORE: f64 = 1.0;
/// Highest score on the answer scale (grade E)
pub const MAX_SCORE: f64 = 5.0;

/// Letter grade given for a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    /// Score on the 1-5 scale (A=1 … E=5)
    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            Self::A => 1.0,
            Self::B => 2.0,
            Self::C => 3.0,
            Self::D => 4.0,
            Self::E => 5.0,
        }
    }

    /// Get grade letter
    #[must_use]
    pub const fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }

    /// Maturity level this grade stands for
    #[must_use]
    pub const fn level(self) -> MaturityLevel {
        match self {
            Self::A => MaturityLevel::Initial,
            Self::B => MaturityLevel::Developing,
            Self::C => MaturityLevel::Defined,
            Self::D => MaturityLevel::Managed,
            Self::E => MaturityLevel::Optimized,
        }
    }
}

impl FromStr for Grade {
    type Err = MaturityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            _ => Err(MaturityError::InvalidGrade {
                grade: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Grade {
    type Error = MaturityError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.letter().to_string()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Whole maturity level, 1 (Initial) through 5 (Optimized).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MaturityLevel {
    Initial = 1,
    Developing = 2,
    Defined = 3,
    Managed = 4,
    Optimized = 5,
}

impl MaturityLevel {
    /// All levels, lowest first
    pub const ALL: [Self; 5] = [
        Self::Initial,
        Self::Developing,
        Self::Defined,
        Self::Managed,
        Self::Optimized,
    ];

    /// Create a level from its number (1-5)
    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Initial),
            2 => Some(Self::Developing),
            3 => Some(Self::Defined),
            4 => Some(Self::Managed),
            5 => Some(Self::Optimized),
            _ => None,
        }
    }

    /// Level number (1-5)
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Next level to aim for; level 5 stays at 5
    #[must_use]
    pub const fn target(self) -> Self {
        match self {
            Self::Initial => Self::Developing,
            Self::Developing => Self::Defined,
            Self::Defined => Self::Managed,
            Self::Managed | Self::Optimized => Self::Optimized,
        }
    }

    /// Whether there is no higher level to reach
    #[must_use]
    pub const fn is_top(self) -> bool {
        matches!(self, Self::Optimized)
    }

    /// Get level name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Developing => "Developing",
            Self::Defined => "Defined",
            Self::Managed => "Managed",
            Self::Optimized => "Optimized",
        }
    }

    /// Report label, e.g. "Level 3 - Defined"
    #[must_use]
    pub fn label(self) -> String {
        format!("Level {} - {}", self.number(), self.name())
    }
}

impl TryFrom<u8> for MaturityLevel {
    type Error = MaturityError;

    fn try_from(n: u8) -> Result<Self> {
        Self::from_number(n).ok_or_else(|| MaturityError::invalid_score(f64::from(n)))
    }
}

impl From<MaturityLevel> for u8 {
    fn from(level: MaturityLevel) -> Self {
        level.number()
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.number())
    }
}

/// Check that a score lies on the 1-5 answer scale.
pub fn validate_score(score: f64) -> Result<f64> {
    if score.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(score)
    } else {
        Err(MaturityError::invalid_score(score))
    }
}

/// Map an (average) score onto a whole maturity level.
///
/// Ties round half away from zero, so 2.5 maps to level 3. Out-of-range
/// input is rejected rather than clamped; the clamp after rounding only
/// absorbs floating-point overshoot at the boundaries.
pub fn level_from_score(score: f64) -> Result<MaturityLevel> {
    let score = validate_score(score)?;
    let rounded = score.round().clamp(MIN_SCORE, MAX_SCORE) as u8;
    MaturityLevel::try_from(rounded)
}
