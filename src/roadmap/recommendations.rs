//! Level transition recommendations.
//!
//! A [`RecommendationTable`] maps (sub-dimension, current level, target
//! level) to advice text. Tables are plain data: they can be loaded from
//! YAML, merged, or started from the built-in DSOMM set, and are handed to
//! a [`RecommendationResolver`] by value.

use crate::error::{ErrorContext, MaturityError, MaturityWarning, Result};
use crate::model::MaturityLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Built-in transitions for common DSOMM sub-dimensions
const BUILTIN_RECOMMENDATIONS: &[(&str, u8, u8, &str)] = &[
    ("Build", 1, 2, "Define a documented, repeatable build process"),
    ("Build", 2, 3, "Build in a CI pipeline with pinned, versioned artifacts"),
    ("Build", 3, 4, "Sign build artifacts and verify signatures before release"),
    ("Build", 4, 5, "Produce reproducible builds with attested provenance"),
    ("Deployment", 1, 2, "Script deployments instead of performing them by hand"),
    ("Deployment", 2, 3, "Implement consistent deployment process"),
    ("Deployment", 3, 4, "Gate deployments on automated security checks"),
    ("Deployment", 4, 5, "Roll out with automated canary analysis and rollback"),
    ("Design", 1, 2, "Capture security requirements for new features"),
    ("Design", 2, 3, "Run threat modeling for high-risk components"),
    ("Design", 3, 4, "Make threat modeling part of every design review"),
    ("Design", 4, 5, "Track threat model findings to closure with metrics"),
    ("Application Hardening", 1, 2, "Adopt a secure coding baseline for all services"),
    ("Application Hardening", 2, 3, "Enforce hardening settings through shared libraries"),
    ("Application Hardening", 3, 4, "Verify hardening controls automatically in CI"),
    ("Application Hardening", 4, 5, "Continuously benchmark hardening against industry standards"),
    ("Logging", 1, 2, "Centralize application and security logs"),
    ("Logging", 2, 3, "Standardize log formats and retention"),
    ("Logging", 3, 4, "Correlate security events across systems"),
    ("Logging", 4, 5, "Detect anomalies in logs with automated analytics"),
    ("Monitoring", 1, 2, "Monitor availability of production systems"),
    ("Monitoring", 2, 3, "Alert on security-relevant metrics"),
    ("Monitoring", 3, 4, "Define and review security dashboards regularly"),
    ("Monitoring", 4, 5, "Feed monitoring results back into risk management"),
];

/// One entry of a recommendation table file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub sub_dimension: String,
    pub current: MaturityLevel,
    pub target: MaturityLevel,
    pub text: String,
}

/// Top-level document of a recommendation table file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationFile {
    #[serde(default)]
    pub recommendations: Vec<RecommendationEntry>,
}

type TransitionKey = (String, MaturityLevel, MaturityLevel);

/// Read-only mapping from level transitions to advice text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationTable {
    entries: BTreeMap<TransitionKey, String>,
}

impl RecommendationTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in DSOMM table
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for &(sub, current, target, text) in BUILTIN_RECOMMENDATIONS {
            if let (Some(current), Some(target)) = (
                MaturityLevel::from_number(current),
                MaturityLevel::from_number(target),
            ) {
                table.insert(sub, current, target, text);
            }
        }
        table
    }

    /// Build a table from entries; later entries win
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = RecommendationEntry>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry.sub_dimension, entry.current, entry.target, entry.text);
        }
        table
    }

    /// Parse a YAML (or JSON) recommendation document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: RecommendationFile = serde_yaml::from_str(content)?;
        Ok(Self::from_entries(file.recommendations))
    }

    /// Load a recommendation file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| MaturityError::io(path, e))?;
        let table = Self::from_yaml_str(&content)
            .with_context(|| format!("recommendation file {}", path.display()))?;
        tracing::debug!(
            "Loaded {} recommendation(s) from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Add or replace an entry
    pub fn insert(
        &mut self,
        sub_dimension: impl Into<String>,
        current: MaturityLevel,
        target: MaturityLevel,
        text: impl Into<String>,
    ) {
        self.entries
            .insert((sub_dimension.into(), current, target), text.into());
    }

    /// Overlay another table; its entries replace ours
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Exact lookup
    #[must_use]
    pub fn get(
        &self,
        sub_dimension: &str,
        current: MaturityLevel,
        target: MaturityLevel,
    ) -> Option<&str> {
        self.entries
            .get(&(sub_dimension.to_string(), current, target))
            .map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order
    pub fn entries(&self) -> impl Iterator<Item = RecommendationEntry> + '_ {
        self.entries
            .iter()
            .map(|((sub, current, target), text)| RecommendationEntry {
                sub_dimension: sub.clone(),
                current: *current,
                target: *target,
                text: text.clone(),
            })
    }
}

/// Where a resolved recommendation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Table,
    Fallback,
}

/// Result of a recommendation lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub text: String,
    pub source: RecommendationSource,
}

/// Generic text used when the table has no entry for a transition
#[must_use]
pub fn fallback_text(sub_dimension: &str, current: MaturityLevel, target: MaturityLevel) -> String {
    format!(
        "L{}→L{}: Improve {sub_dimension} practices",
        current.number(),
        target.number()
    )
}

/// Resolves transitions against an injected table
#[derive(Debug, Clone, Default)]
pub struct RecommendationResolver {
    table: RecommendationTable,
}

impl RecommendationResolver {
    #[must_use]
    pub const fn new(table: RecommendationTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub const fn table(&self) -> &RecommendationTable {
        &self.table
    }

    /// Look up advice for a transition, falling back to generic text.
    ///
    /// A miss is never an error; see [`Resolution::warning`].
    #[must_use]
    pub fn resolve(
        &self,
        sub_dimension: &str,
        current: MaturityLevel,
        target: MaturityLevel,
    ) -> Resolution {
        match self.table.get(sub_dimension, current, target) {
            Some(text) => Resolution {
                text: text.to_string(),
                source: RecommendationSource::Table,
            },
            None => {
                tracing::warn!(
                    "No recommendation for {sub_dimension} {current}→{target}, using generic text"
                );
                Resolution {
                    text: fallback_text(sub_dimension, current, target),
                    source: RecommendationSource::Fallback,
                }
            }
        }
    }

    /// Resolve and also report the warning a fallback implies
    #[must_use]
    pub fn resolve_with_warning(
        &self,
        sub_dimension: &str,
        current: MaturityLevel,
        target: MaturityLevel,
    ) -> (Resolution, Option<MaturityWarning>) {
        let resolution = self.resolve(sub_dimension, current, target);
        let warning = resolution.warning(sub_dimension, current, target);
        (resolution, warning)
    }
}

impl Resolution {
    /// Whether the generic fallback text was used
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == RecommendationSource::Fallback
    }

    /// Missing-recommendation warning for a fallback resolution
    #[must_use]
    pub fn warning(
        &self,
        sub_dimension: &str,
        current: MaturityLevel,
        target: MaturityLevel,
    ) -> Option<MaturityWarning> {
        self.is_fallback()
            .then(|| MaturityWarning::MissingRecommendation {
                sub_dimension: sub_dimension.to_string(),
                current_level: current.number(),
                target_level: target.number(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MaturityLevel::{Defined, Developing, Managed, Optimized};

    #[test]
    fn test_exact_lookup() {
        let mut table = RecommendationTable::new();
        table.insert("Build", Developing, Defined, "Automate the build");
        let resolver = RecommendationResolver::new(table);

        let resolution = resolver.resolve("Build", Developing, Defined);
        assert_eq!(resolution.text, "Automate the build");
        assert_eq!(resolution.source, RecommendationSource::Table);
        assert!(resolution.warning("Build", Developing, Defined).is_none());
    }

    #[test]
    fn test_missing_entry_falls_back() {
        let resolver = RecommendationResolver::new(RecommendationTable::new());
        let (resolution, warning) = resolver.resolve_with_warning("Build", Developing, Defined);

        assert_eq!(resolution.text, "L2→L3: Improve Build practices");
        assert!(resolution.is_fallback());
        assert_eq!(
            warning,
            Some(MaturityWarning::MissingRecommendation {
                sub_dimension: "Build".to_string(),
                current_level: 2,
                target_level: 3,
            })
        );
    }

    #[test]
    fn test_lookup_is_exact_on_all_three_keys() {
        let mut table = RecommendationTable::new();
        table.insert("Build", Developing, Defined, "text");
        assert!(table.get("Build", Defined, Managed).is_none());
        assert!(table.get("build", Developing, Defined).is_none());
        assert!(table.get("Build", Developing, Managed).is_none());
    }

    #[test]
    fn test_builtin_table() {
        let table = RecommendationTable::builtin();
        assert_eq!(table.len(), BUILTIN_RECOMMENDATIONS.len());
        assert_eq!(
            table.get("Deployment", Developing, Defined),
            Some("Implement consistent deployment process")
        );
        assert!(table.get("Deployment", Optimized, Optimized).is_none());
    }

    #[test]
    fn test_from_yaml_and_merge() {
        let yaml = r"
recommendations:
  - sub_dimension: Build
    current: 2
    target: 3
    text: Use the shared pipeline template
  - sub_dimension: Secrets
    current: 1
    target: 2
    text: Move secrets into a vault
";
        let custom = RecommendationTable::from_yaml_str(yaml).unwrap();
        assert_eq!(custom.len(), 2);

        let mut table = RecommendationTable::builtin();
        table.merge(custom);
        assert_eq!(
            table.get("Build", Developing, Defined),
            Some("Use the shared pipeline template")
        );
        assert_eq!(
            table.get("Secrets", MaturityLevel::Initial, Developing),
            Some("Move secrets into a vault")
        );
        assert_eq!(table.len(), BUILTIN_RECOMMENDATIONS.len() + 1);
    }

    #[test]
    fn test_invalid_level_in_yaml() {
        let yaml = "recommendations:\n  - {sub_dimension: Build, current: 0, target: 1, text: x}\n";
        assert!(RecommendationTable::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_entries_round_trip_through_table() {
        let table = RecommendationTable::builtin();
        let rebuilt = RecommendationTable::from_entries(table.entries());
        assert_eq!(table, rebuilt);
    }
}
