//! Status canonicalization and ranking.
//!
//! Free-form status labels from user input, imports and integrations are
//! reduced to [`CanonicalStatus`] by [`StatusResolver::normalize`], and
//! [`StatusResolver::rank`] gives a sort key over the canonical values.

pub mod alias_table;
pub mod error;
pub mod rank_table;
pub mod raw;
pub mod resolver;
pub mod sorting;

pub use crate::enums::CanonicalStatus;
pub use alias_table::{fold_alias, AliasTable, AliasTableBuilder};
pub use error::StatusConfigError;
pub use rank_table::RankTable;
pub use raw::RawStatus;
pub use resolver::{normalize, rank, StatusResolver};
pub use sorting::{
    count_by_status, filter_by_status, sort_by_status, sort_by_status_then, StatusCounts,
    StatusRanked,
};
