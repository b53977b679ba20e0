use once_cell::sync::Lazy;
use std::cmp::Ordering;

use super::alias_table::{fold_alias, AliasTable};
use super::rank_table::RankTable;
use super::raw::RawStatus;
use crate::enums::CanonicalStatus;

static BUILTIN_RESOLVER: Lazy<StatusResolver> = Lazy::new(StatusResolver::default);

/// Reduces raw status labels to [`CanonicalStatus`] and ranks them for sorting.
///
/// Both operations are total: malformed or unrecognized input becomes
/// `Unknown`, never an error. The tables are owned and never mutated, so a
/// resolver can be shared across threads without locking.
#[derive(Debug, Clone, Default)]
pub struct StatusResolver {
    aliases: AliasTable,
    ranks: RankTable,
}

impl StatusResolver {
    pub fn new(aliases: AliasTable, ranks: RankTable) -> Self {
        Self { aliases, ranks }
    }

    /// Process-wide resolver over the builtin tables, built on first use
    pub fn builtin() -> &'static StatusResolver {
        &BUILTIN_RESOLVER
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn ranks(&self) -> &RankTable {
        &self.ranks
    }

    /// Normalize any raw input
    pub fn normalize(&self, raw: impl Into<RawStatus>) -> CanonicalStatus {
        let raw = raw.into();
        match raw.coerce() {
            Some(text) => self.normalize_str(&text),
            None => CanonicalStatus::Unknown,
        }
    }

    /// Normalize a borrowed string without building a [`RawStatus`]
    pub fn normalize_str(&self, raw: &str) -> CanonicalStatus {
        let folded = fold_alias(raw);
        if folded.is_empty() {
            return CanonicalStatus::Unknown;
        }
        self.aliases.get(&folded).unwrap_or(CanonicalStatus::Unknown)
    }

    pub fn rank(&self, status: CanonicalStatus) -> u32 {
        self.ranks.rank(status)
    }

    /// Rank a status given by its code. Codes outside the canonical set rank
    /// as `Unknown`.
    pub fn rank_code(&self, code: &str) -> u32 {
        self.rank(CanonicalStatus::from_code(code).unwrap_or(CanonicalStatus::Unknown))
    }

    /// `rank(normalize(raw))`
    pub fn rank_raw(&self, raw: impl Into<RawStatus>) -> u32 {
        self.rank(self.normalize(raw))
    }

    /// Compare by rank only. Equal ranks compare `Equal`, so a stable sort
    /// keeps the caller's order for ties.
    pub fn compare(&self, a: CanonicalStatus, b: CanonicalStatus) -> Ordering {
        self.rank(a).cmp(&self.rank(b))
    }
}

/// Normalize with the builtin resolver
pub fn normalize(raw: impl Into<RawStatus>) -> CanonicalStatus {
    StatusResolver::builtin().normalize(raw)
}

/// Rank with the builtin resolver
pub fn rank(status: CanonicalStatus) -> u32 {
    StatusResolver::builtin().rank(status)
}
