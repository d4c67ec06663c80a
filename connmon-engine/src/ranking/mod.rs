//! Connection ranking
//!
//! Strategies that reorder a connection snapshot. `IdleRanker` is the core
//! idle-time ordering; `Ranker` generalizes it to every `SortOption`.

pub mod sort_opt;
pub mod ranker;

pub use sort_opt::{SortDirection, SortOption};
pub use ranker::{IdleRanker, Ranker};

use chrono::{DateTime, Utc};

use crate::snapshot::ConnectionSnapshot;

/// Reorder `snapshot` in place by ascending idle time relative to `reference`.
///
/// Cannot fail: every combination of instants, including unset ones and
/// activity after `reference`, has a well-defined position.
pub fn rank(snapshot: &mut ConnectionSnapshot, reference: DateTime<Utc>) {
    IdleRanker::new(reference).rank(snapshot.conns_mut());
}
