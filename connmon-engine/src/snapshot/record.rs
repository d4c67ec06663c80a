//! Per-connection activity records
//!
//! A record is plain data copied out of the live connection table. Any
//! instant may be left at its zero value when the collector did not know it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The instant used for fields that were never set.
///
/// No real timestamp can precede it, so an unset activity time is always
/// the most idle.
pub fn zero_instant() -> DateTime<Utc> {
    DateTime::<Utc>::MIN_UTC
}

/// Connection lifecycle state a snapshot was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnState {
    /// Connection is still open
    #[default]
    Open,
    /// Connection has been closed and is kept for inspection
    Closed,
}

/// Activity record for a single client connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnInfo {
    /// Connection identifier assigned by the server
    pub cid: u64,
    /// When the connection was established
    pub start: DateTime<Utc>,
    /// Most recent observed activity
    pub last_activity: DateTime<Utc>,
    /// When the connection was closed
    pub stop: Option<DateTime<Utc>>,
    /// Why the connection was closed
    pub reason: Option<String>,
    /// Last measured round trip time
    pub rtt: std::time::Duration,
    /// Bytes queued for the client but not yet flushed
    pub pending_bytes: u64,
    /// Messages received from the client
    pub in_msgs: u64,
    /// Messages delivered to the client
    pub out_msgs: u64,
    /// Bytes received from the client
    pub in_bytes: u64,
    /// Bytes delivered to the client
    pub out_bytes: u64,
    /// Number of active subscriptions
    pub num_subs: u32,
}

impl Default for ConnInfo {
    fn default() -> Self {
        ConnInfo {
            cid: 0,
            start: zero_instant(),
            last_activity: zero_instant(),
            stop: None,
            reason: None,
            rtt: std::time::Duration::ZERO,
            pending_bytes: 0,
            in_msgs: 0,
            out_msgs: 0,
            in_bytes: 0,
            out_bytes: 0,
            num_subs: 0,
        }
    }
}

impl ConnInfo {
    /// Create a record with only its identity and timing set
    pub fn new(cid: u64, start: DateTime<Utc>, last_activity: DateTime<Utc>) -> Self {
        ConnInfo {
            cid,
            start,
            last_activity,
            ..Default::default()
        }
    }

    /// Mark the record as closed at `stop` for `reason`
    pub fn closed(mut self, stop: DateTime<Utc>, reason: impl Into<String>) -> Self {
        self.stop = Some(stop);
        self.reason = Some(reason.into());
        self
    }

    /// Time since last activity, measured from `reference`.
    ///
    /// Negative when the activity was recorded after `reference`. An unset
    /// `last_activity` yields the distance back to the zero instant.
    pub fn idle(&self, reference: DateTime<Utc>) -> Duration {
        reference.signed_duration_since(self.last_activity)
    }

    /// How long the connection has been (or was) up
    pub fn uptime(&self, reference: DateTime<Utc>) -> Duration {
        self.stop
            .unwrap_or(reference)
            .signed_duration_since(self.start)
    }

    pub fn is_closed(&self) -> bool {
        self.stop.is_some()
    }

    pub fn state(&self) -> ConnState {
        if self.is_closed() {
            ConnState::Closed
        } else {
            ConnState::Open
        }
    }

    /// Check whether the activity timestamp was never recorded
    pub fn activity_unset(&self) -> bool {
        self.last_activity == zero_instant()
    }
}
