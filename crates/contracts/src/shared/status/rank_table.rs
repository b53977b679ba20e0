use super::error::StatusConfigError;
use crate::enums::CanonicalStatus;

/// Sort priority per canonical status. Lower rank sorts first.
///
/// Builtin ranks: Active 0, Pending 1, Completed 2, Archived 3, Unknown 1.
/// Pending and Unknown tie; callers break ties with their own stable key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankTable {
    ranks: [u32; 5],
}

impl RankTable {
    pub const fn builtin() -> Self {
        // indexed by CanonicalStatus::index()
        Self {
            ranks: [0, 1, 2, 3, 1],
        }
    }

    pub fn rank(&self, status: CanonicalStatus) -> u32 {
        self.ranks[status.index()]
    }

    /// Copy of this table with `status` moved to `rank`
    pub fn with_rank(mut self, status: CanonicalStatus, rank: u32) -> Self {
        self.ranks[status.index()] = rank;
        self
    }

    /// Apply `code -> rank` overrides, e.g. from configuration
    pub fn with_overrides<'a, I>(self, overrides: I) -> Result<Self, StatusConfigError>
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        overrides.into_iter().try_fold(self, |table, (code, rank)| {
            let status = CanonicalStatus::from_code(code).ok_or_else(|| {
                StatusConfigError::UnknownStatusCode {
                    code: code.to_string(),
                }
            })?;
            Ok(table.with_rank(status, rank))
        })
    }
}

impl Default for RankTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ranks() {
        let table = RankTable::builtin();
        assert_eq!(table.rank(CanonicalStatus::Active), 0);
        assert_eq!(table.rank(CanonicalStatus::Pending), 1);
        assert_eq!(table.rank(CanonicalStatus::Completed), 2);
        assert_eq!(table.rank(CanonicalStatus::Archived), 3);
        assert_eq!(table.rank(CanonicalStatus::Unknown), 1);
    }

    #[test]
    fn test_overrides() {
        let table = RankTable::builtin()
            .with_overrides([("unknown", 4), ("ARCHIVED", 5)])
            .unwrap();
        assert_eq!(table.rank(CanonicalStatus::Unknown), 4);
        assert_eq!(table.rank(CanonicalStatus::Archived), 5);
        assert_eq!(table.rank(CanonicalStatus::Pending), 1);
    }

    #[test]
    fn test_overrides_reject_unknown_code() {
        let result = RankTable::builtin().with_overrides([("done", 9)]);
        assert_eq!(
            result,
            Err(StatusConfigError::UnknownStatusCode {
                code: "done".to_string()
            })
        );
    }
}
