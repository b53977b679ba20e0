use std::collections::HashMap;

use super::error::StatusConfigError;
use crate::enums::CanonicalStatus;

// ============================================================================
// Builtin aliases
// ============================================================================

const ACTIVE_ALIASES: &[&str] = &[
    "active",
    "act",
    "in_progress",
    "inprogress",
    "in progress",
    "ongoing",
    "started",
];

const PENDING_ALIASES: &[&str] = &["pending", "todo", "to_do", "planned", "backlog"];

const COMPLETED_ALIASES: &[&str] = &["completed", "done", "finished", "closed"];

const ARCHIVED_ALIASES: &[&str] = &["archived", "archive", "removed", "deleted"];

/// Trim and lower-case. Keys of the table are stored in this form.
pub fn fold_alias(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// ============================================================================
// AliasTable
// ============================================================================

/// Immutable mapping from folded alias to canonical status.
///
/// Lookups are exact: no substring or fuzzy matching.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasTable {
    entries: HashMap<String, CanonicalStatus>,
}

impl AliasTable {
    /// The builtin alias families
    pub fn builtin() -> Self {
        let families = [
            (CanonicalStatus::Active, ACTIVE_ALIASES),
            (CanonicalStatus::Pending, PENDING_ALIASES),
            (CanonicalStatus::Completed, COMPLETED_ALIASES),
            (CanonicalStatus::Archived, ARCHIVED_ALIASES),
        ];

        let entries = families
            .iter()
            .flat_map(|(status, aliases)| aliases.iter().map(move |a| (a.to_string(), *status)))
            .collect();

        Self { entries }
    }

    /// Look up an already folded alias
    pub fn get(&self, folded: &str) -> Option<CanonicalStatus> {
        self.entries.get(folded).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aliases mapped to `status`, sorted
    pub fn aliases_of(&self, status: CanonicalStatus) -> Vec<&str> {
        let mut aliases: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, s)| **s == status)
            .map(|(a, _)| a.as_str())
            .collect();
        aliases.sort_unstable();
        aliases
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, CanonicalStatus)> {
        self.entries.iter().map(|(a, s)| (a.as_str(), *s))
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builds an [`AliasTable`] from the builtin families plus overrides.
#[derive(Debug, Clone)]
pub struct AliasTableBuilder {
    entries: HashMap<String, CanonicalStatus>,
}

impl AliasTableBuilder {
    /// Start from the builtin table
    pub fn from_builtin() -> Self {
        Self {
            entries: AliasTable::builtin().entries,
        }
    }

    /// Start from an empty table
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Map `alias` to `status`. Returns the previous mapping if the alias was
    /// already known.
    pub fn insert(
        &mut self,
        alias: &str,
        status: CanonicalStatus,
    ) -> Result<Option<CanonicalStatus>, StatusConfigError> {
        let key = fold_alias(alias);
        if key.is_empty() {
            return Err(StatusConfigError::EmptyAlias);
        }
        Ok(self.entries.insert(key, status))
    }

    /// Map `alias` to the status named by a canonical `code`
    pub fn insert_code(
        &mut self,
        alias: &str,
        code: &str,
    ) -> Result<Option<CanonicalStatus>, StatusConfigError> {
        let status = CanonicalStatus::from_code(code).ok_or_else(|| {
            StatusConfigError::UnknownStatusCode {
                code: code.to_string(),
            }
        })?;
        self.insert(alias, status)
    }

    pub fn build(self) -> AliasTable {
        AliasTable {
            entries: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_families() {
        let table = AliasTable::builtin();
        assert_eq!(table.len(), 20);
        assert_eq!(table.get("in progress"), Some(CanonicalStatus::Active));
        assert_eq!(table.get("to_do"), Some(CanonicalStatus::Pending));
        assert_eq!(table.get("closed"), Some(CanonicalStatus::Completed));
        assert_eq!(table.get("deleted"), Some(CanonicalStatus::Archived));
        assert_eq!(table.get("to do"), None);
        assert!(table.aliases_of(CanonicalStatus::Unknown).is_empty());
    }

    #[test]
    fn test_builder_folds_keys() {
        let mut builder = AliasTableBuilder::from_builtin();
        assert_eq!(builder.insert("  WIP ", CanonicalStatus::Active), Ok(None));
        let table = builder.build();
        assert_eq!(table.get("wip"), Some(CanonicalStatus::Active));
        assert_eq!(table.get("  WIP "), None);
    }

    #[test]
    fn test_builder_reports_remap() {
        let mut builder = AliasTableBuilder::from_builtin();
        let previous = builder.insert_code("closed", "archived").unwrap();
        assert_eq!(previous, Some(CanonicalStatus::Completed));
        assert_eq!(builder.build().get("closed"), Some(CanonicalStatus::Archived));
    }

    #[test]
    fn test_builder_rejects_bad_input() {
        let mut builder = AliasTableBuilder::empty();
        assert_eq!(
            builder.insert("   ", CanonicalStatus::Active),
            Err(StatusConfigError::EmptyAlias)
        );
        assert_eq!(
            builder.insert_code("wip", "running"),
            Err(StatusConfigError::UnknownStatusCode {
                code: "running".to_string()
            })
        );
        assert!(builder.build().is_empty());
    }
}
