//! Narrative findings derived from the overall maturity score.

use serde::{Deserialize, Serialize};

/// Band of the overall score used to pick findings and general advice
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// Below 2.0
    Foundational,
    /// 2.0 up to 3.0
    Basic,
    /// 3.0 up to 4.0
    Established,
    /// 4.0 and above
    Advanced,
}

impl ScoreBand {
    /// Create band from an overall score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 4.0 {
            Self::Advanced
        } else if score >= 3.0 {
            Self::Established
        } else if score >= 2.0 {
            Self::Basic
        } else {
            Self::Foundational
        }
    }

    /// Headline findings for this band
    #[must_use]
    pub const fn key_findings(self) -> &'static [&'static str] {
        match self {
            Self::Advanced => &[
                "Your organization demonstrates excellent security maturity practices",
                "Continue to maintain and optimize current security processes",
            ],
            Self::Established => &[
                "Your organization has well-defined security processes",
                "Focus on implementing consistent management practices",
            ],
            Self::Basic => &[
                "Your organization has basic security processes in place",
                "Work on formalizing and documenting security procedures",
            ],
            Self::Foundational => &[
                "Your organization needs significant improvement in security practices",
                "Prioritize establishing fundamental security processes",
            ],
        }
    }

    /// Organization-wide recommendations for this band
    #[must_use]
    pub const fn general_recommendations(self) -> &'static [&'static str] {
        match self {
            Self::Foundational => &[
                "Establish basic security policies and procedures",
                "Implement fundamental access controls",
                "Create incident response procedures",
                "Establish regular security training programs",
            ],
            Self::Basic => &[
                "Document all security processes and procedures",
                "Implement regular security assessments",
                "Establish security metrics and monitoring",
                "Create formal risk management processes",
            ],
            Self::Established => &[
                "Implement automated security monitoring",
                "Establish security performance metrics",
                "Create continuous improvement processes",
                "Implement advanced threat detection",
            ],
            Self::Advanced => &[
                "Continue optimizing security processes",
                "Share best practices across the organization",
                "Implement predictive security analytics",
                "Lead industry security initiatives",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_from_score() {
        assert_eq!(ScoreBand::from_score(1.0), ScoreBand::Foundational);
        assert_eq!(ScoreBand::from_score(1.99), ScoreBand::Foundational);
        assert_eq!(ScoreBand::from_score(2.0), ScoreBand::Basic);
        assert_eq!(ScoreBand::from_score(2.43), ScoreBand::Basic);
        assert_eq!(ScoreBand::from_score(3.0), ScoreBand::Established);
        assert_eq!(ScoreBand::from_score(4.0), ScoreBand::Advanced);
        assert_eq!(ScoreBand::from_score(5.0), ScoreBand::Advanced);
    }

    #[test]
    fn test_every_band_has_content() {
        for band in [
            ScoreBand::Foundational,
            ScoreBand::Basic,
            ScoreBand::Established,
            ScoreBand::Advanced,
        ] {
            assert_eq!(band.key_findings().len(), 2);
            assert_eq!(band.general_recommendations().len(), 4);
        }
    }
}
