use serde::{Deserialize, Serialize};

/// Canonical record status. Every raw label is reduced to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalStatus {
    Active,
    Pending,
    Completed,
    Archived,
    /// Empty or unrecognized input
    Unknown,
}

impl CanonicalStatus {
    /// Lower-case code, also used as the serialized form
    pub fn code(&self) -> &'static str {
        match self {
            CanonicalStatus::Active => "active",
            CanonicalStatus::Pending => "pending",
            CanonicalStatus::Completed => "completed",
            CanonicalStatus::Archived => "archived",
            CanonicalStatus::Unknown => "unknown",
        }
    }

    /// Human readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            CanonicalStatus::Active => "Active",
            CanonicalStatus::Pending => "Pending",
            CanonicalStatus::Completed => "Completed",
            CanonicalStatus::Archived => "Archived",
            CanonicalStatus::Unknown => "Unknown",
        }
    }

    /// All statuses in declaration order
    pub fn all() -> [CanonicalStatus; 5] {
        [
            CanonicalStatus::Active,
            CanonicalStatus::Pending,
            CanonicalStatus::Completed,
            CanonicalStatus::Archived,
            CanonicalStatus::Unknown,
        ]
    }

    /// Parse a canonical code. Only the five codes are accepted, aliases are not.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "active" => Some(CanonicalStatus::Active),
            "pending" => Some(CanonicalStatus::Pending),
            "completed" => Some(CanonicalStatus::Completed),
            "archived" => Some(CanonicalStatus::Archived),
            "unknown" => Some(CanonicalStatus::Unknown),
            _ => None,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            CanonicalStatus::Active => 0,
            CanonicalStatus::Pending => 1,
            CanonicalStatus::Completed => 2,
            CanonicalStatus::Archived => 3,
            CanonicalStatus::Unknown => 4,
        }
    }
}

impl std::fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
