//! Memoized standings keyed by store revisions.
//!
//! Standings recompute the whole season window on every call; this cache
//! avoids the O(season) rescan per request once fixture counts grow.
//! Correctness never depends on it: entries are keyed by the revision
//! stamps of all three stores, so any write makes the cached entry
//! unreachable, and stale entries are pruned when touched.

use std::sync::Arc;

use dashmap::DashMap;
use time::Date;
use tracing::debug;

use crate::domain::{Division, StandingsRow};

/// Revision stamps of the three stores at computation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreRevisions {
    pub teams: u64,
    pub fixtures: u64,
    pub results: u64,
}

struct CacheEntry {
    revisions: StoreRevisions,
    rows: Arc<Vec<StandingsRow>>,
}

/// Cache of computed ladders, one entry per `(division, as_of)`.
#[derive(Default)]
pub struct StandingsCache {
    entries: DashMap<(Division, Date), CacheEntry>,
}

impl StandingsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached rows for `(division, as_of)` if computed at exactly the given
    /// revisions; a stale entry is removed on the way through.
    pub fn get(
        &self,
        division: Division,
        as_of: Date,
        revisions: StoreRevisions,
    ) -> Option<Arc<Vec<StandingsRow>>> {
        let key = (division, as_of);
        let hit = match self.entries.get(&key) {
            Some(entry) if entry.revisions == revisions => Some(Arc::clone(&entry.rows)),
            Some(_) => None,
            None => return None,
        };
        if hit.is_none() {
            self.entries.remove(&key);
            debug!(division = %division, %as_of, "stale standings entry pruned");
        }
        hit
    }

    pub fn insert(
        &self,
        division: Division,
        as_of: Date,
        revisions: StoreRevisions,
        rows: Arc<Vec<StandingsRow>>,
    ) {
        self.entries
            .insert((division, as_of), CacheEntry { revisions, rows });
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
