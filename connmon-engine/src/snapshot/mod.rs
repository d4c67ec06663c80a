//! Connection snapshots
//!
//! A snapshot is the set of connection records captured at one instant.
//! It is created fresh for each monitoring request, reordered by ranking,
//! then handed off for presentation.

pub mod record;

pub use record::{zero_instant, ConnInfo, ConnState};

use chrono::{DateTime, Duration, Utc};

use crate::ranking::{IdleRanker, Ranker, SortDirection, SortOption};

/// Point-in-time collection of connection records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSnapshot {
    /// Instant the records were captured
    captured_at: DateTime<Utc>,
    /// Records in their current order
    conns: Vec<ConnInfo>,
}

impl ConnectionSnapshot {
    pub fn new(captured_at: DateTime<Utc>, conns: Vec<ConnInfo>) -> Self {
        ConnectionSnapshot { captured_at, conns }
    }

    /// Instant the snapshot was taken; the natural reference time for ranking
    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn len(&self) -> usize {
        self.conns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conns.is_empty()
    }

    pub fn conns(&self) -> &[ConnInfo] {
        &self.conns
    }

    /// Mutable access for reordering. Records can be swapped but not added or removed.
    pub fn conns_mut(&mut self) -> &mut [ConnInfo] {
        &mut self.conns
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConnInfo> {
        self.conns.iter()
    }

    pub fn into_conns(self) -> Vec<ConnInfo> {
        self.conns
    }

    /// Order by ascending idle time relative to the capture instant
    pub fn rank_by_idle(&mut self) {
        IdleRanker::new(self.captured_at).rank(&mut self.conns);
    }

    /// Order with an arbitrary ranking strategy
    pub fn rank_with(&mut self, ranker: &Ranker) {
        ranker.rank(&mut self.conns);
    }

    /// Idle time of every record, in current order
    pub fn idle_durations(&self, reference: DateTime<Utc>) -> Vec<Duration> {
        self.conns.iter().map(|c| c.idle(reference)).collect()
    }
}

impl IntoIterator for ConnectionSnapshot {
    type Item = ConnInfo;
    type IntoIter = std::vec::IntoIter<ConnInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.conns.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConnectionSnapshot {
    type Item = &'a ConnInfo;
    type IntoIter = std::slice::Iter<'a, ConnInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.conns.iter()
    }
}

/// Anything that can produce a snapshot of the live connection table.
///
/// Implementors must return records captured at a single instant and
/// report that instant through `ConnectionSnapshot::captured_at`.
pub trait SnapshotSource {
    fn snapshot(&self) -> ConnectionSnapshot;
}

impl<F> SnapshotSource for F
where
    F: Fn() -> ConnectionSnapshot,
{
    fn snapshot(&self) -> ConnectionSnapshot {
        self()
    }
}

/// Pull a fresh snapshot from `source` and order it by `key`.
///
/// The snapshot's own capture instant is the reference time. When
/// `direction` is `None` the key's natural direction applies.
pub fn collect_ranked<S>(
    source: &S,
    key: SortOption,
    direction: Option<SortDirection>,
) -> ConnectionSnapshot
where
    S: SnapshotSource + ?Sized,
{
    let mut snapshot = source.snapshot();
    let direction = direction.unwrap_or_else(|| key.default_direction());
    let ranker = Ranker::new(key, direction, snapshot.captured_at());
    snapshot.rank_with(&ranker);
    snapshot
}
