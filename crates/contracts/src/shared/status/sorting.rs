//! List helpers over canonical statuses: stable ordering, filtering, counts.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::raw::RawStatus;
use super::resolver::StatusResolver;
use crate::enums::CanonicalStatus;

/// Records that carry a raw status.
///
/// Records that were already normalized (at import, say) override
/// `resolved_status` / `resolved_rank` to return the stored values, so the
/// list helpers do not re-resolve them against a possibly newer resolver.
pub trait StatusRanked {
    fn raw_status(&self) -> RawStatus;

    fn resolved_status(&self, resolver: &StatusResolver) -> CanonicalStatus {
        resolver.normalize(self.raw_status())
    }

    fn resolved_rank(&self, resolver: &StatusResolver) -> u32 {
        resolver.rank(self.resolved_status(resolver))
    }
}

/// Stable sort by `rank(normalize(raw))`.
///
/// Records with equal rank keep their original relative order in both
/// directions.
pub fn sort_by_status<T: StatusRanked>(items: &mut [T], resolver: &StatusResolver, ascending: bool) {
    sort_by_status_then(items, resolver, ascending, |_, _| Ordering::Equal);
}

/// Stable sort by rank, ties broken by `secondary` (always ascending).
///
/// Each item is ranked once.
pub fn sort_by_status_then<T, F>(
    items: &mut [T],
    resolver: &StatusResolver,
    ascending: bool,
    mut secondary: F,
) where
    T: StatusRanked,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut keyed: Vec<(u32, usize)> = items
        .iter()
        .enumerate()
        .map(|(idx, item)| (item.resolved_rank(resolver), idx))
        .collect();

    keyed.sort_by(|(rank_a, idx_a), (rank_b, idx_b)| {
        let cmp = if ascending {
            rank_a.cmp(rank_b)
        } else {
            rank_b.cmp(rank_a)
        };
        cmp.then_with(|| secondary(&items[*idx_a], &items[*idx_b]))
    });

    apply_order(items, keyed.into_iter().map(|(_, idx)| idx).collect());
}

/// Move the element at `order[i]` to position `i`, following permutation cycles.
fn apply_order<T>(items: &mut [T], mut order: Vec<usize>) {
    for start in 0..order.len() {
        let mut current = start;
        while order[current] != start {
            let next = order[current];
            items.swap(current, next);
            order[current] = current;
            current = next;
        }
        order[current] = current;
    }
}

/// Keep records whose normalized status is in `statuses`. An empty set keeps
/// everything.
pub fn filter_by_status<T: StatusRanked>(
    items: Vec<T>,
    resolver: &StatusResolver,
    statuses: &[CanonicalStatus],
) -> Vec<T> {
    if statuses.is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| statuses.contains(&item.resolved_status(resolver)))
        .collect()
}

/// Number of records per canonical status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub active: usize,
    pub pending: usize,
    pub completed: usize,
    pub archived: usize,
    pub unknown: usize,
}

impl StatusCounts {
    pub fn get(&self, status: CanonicalStatus) -> usize {
        match status {
            CanonicalStatus::Active => self.active,
            CanonicalStatus::Pending => self.pending,
            CanonicalStatus::Completed => self.completed,
            CanonicalStatus::Archived => self.archived,
            CanonicalStatus::Unknown => self.unknown,
        }
    }

    pub fn add(&mut self, status: CanonicalStatus) {
        let slot = match status {
            CanonicalStatus::Active => &mut self.active,
            CanonicalStatus::Pending => &mut self.pending,
            CanonicalStatus::Completed => &mut self.completed,
            CanonicalStatus::Archived => &mut self.archived,
            CanonicalStatus::Unknown => &mut self.unknown,
        };
        *slot += 1;
    }

    pub fn total(&self) -> usize {
        self.active + self.pending + self.completed + self.archived + self.unknown
    }
}

pub fn count_by_status<T: StatusRanked>(items: &[T], resolver: &StatusResolver) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for item in items {
        counts.add(item.resolved_status(resolver));
    }
    counts
}
