//! Comparators bound to a fixed reference time
//!
//! Every duration-based key (idle, uptime) is measured against the
//! reference instant captured in the ranker, never against the wall clock,
//! so ranking the same snapshot twice gives the same order.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use super::sort_opt::{SortDirection, SortOption};
use crate::snapshot::ConnInfo;

/// Orders connections by ascending idle time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleRanker {
    reference: DateTime<Utc>,
}

impl IdleRanker {
    pub fn new(reference: DateTime<Utc>) -> Self {
        IdleRanker { reference }
    }

    pub fn reference(&self) -> DateTime<Utc> {
        self.reference
    }

    /// Idle time of `conn` relative to the reference instant
    pub fn idle(&self, conn: &ConnInfo) -> Duration {
        conn.idle(self.reference)
    }

    /// Compare two connections by idle time.
    ///
    /// Activity after the reference instant gives a negative idle time and
    /// sorts first. Start time never takes part in the comparison.
    pub fn compare(&self, a: &ConnInfo, b: &ConnInfo) -> Ordering {
        self.idle(a).cmp(&self.idle(b))
    }

    /// Reorder `conns` in place, least idle first. Ties land in any order.
    pub fn rank(&self, conns: &mut [ConnInfo]) {
        debug!(count = conns.len(), reference = %self.reference, "ranking connections by idle time");
        conns.sort_unstable_by(|a, b| self.compare(a, b));
    }
}

/// Orders connections by any sort key in either direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranker {
    key: SortOption,
    direction: SortDirection,
    reference: DateTime<Utc>,
}

impl Ranker {
    pub fn new(key: SortOption, direction: SortDirection, reference: DateTime<Utc>) -> Self {
        Ranker {
            key,
            direction,
            reference,
        }
    }

    /// Ranker for `key` in its natural direction
    pub fn natural(key: SortOption, reference: DateTime<Utc>) -> Self {
        Self::new(key, key.default_direction(), reference)
    }

    pub fn key(&self) -> SortOption {
        self.key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn reference(&self) -> DateTime<Utc> {
        self.reference
    }

    /// Compare two connections according to the sort key
    pub fn compare(&self, a: &ConnInfo, b: &ConnInfo) -> Ordering {
        let result = match self.key {
            SortOption::Cid => a.cid.cmp(&b.cid),
            SortOption::Start => a.start.cmp(&b.start),
            SortOption::Subs => a.num_subs.cmp(&b.num_subs),
            SortOption::Pending => a.pending_bytes.cmp(&b.pending_bytes),
            SortOption::MsgsTo => a.out_msgs.cmp(&b.out_msgs),
            SortOption::MsgsFrom => a.in_msgs.cmp(&b.in_msgs),
            SortOption::BytesTo => a.out_bytes.cmp(&b.out_bytes),
            SortOption::BytesFrom => a.in_bytes.cmp(&b.in_bytes),
            SortOption::Last => a.last_activity.cmp(&b.last_activity),
            SortOption::Idle => IdleRanker::new(self.reference).compare(a, b),
            SortOption::Uptime => a.uptime(self.reference).cmp(&b.uptime(self.reference)),
            SortOption::Stop => a.stop.cmp(&b.stop),
            SortOption::Reason => a.reason.cmp(&b.reason),
            SortOption::Rtt => a.rtt.cmp(&b.rtt),
        };

        match self.direction {
            SortDirection::Ascending => result,
            SortDirection::Descending => result.reverse(),
        }
    }

    /// Reorder `conns` in place. Ties land in any order.
    pub fn rank(&self, conns: &mut [ConnInfo]) {
        debug!(
            key = %self.key,
            direction = %self.direction,
            count = conns.len(),
            "ranking connections"
        );
        conns.sort_unstable_by(|a, b| self.compare(a, b));
    }
}
