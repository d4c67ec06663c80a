//! Named sort keys and directions for connection listings

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MonitorError, MonitorResult};
use crate::snapshot::ConnState;

/// Keys a connection listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Connection id
    Cid,
    /// Connection start time
    Start,
    /// Number of subscriptions
    Subs,
    /// Pending bytes
    Pending,
    /// Messages delivered to the client
    MsgsTo,
    /// Messages received from the client
    MsgsFrom,
    /// Bytes delivered to the client
    BytesTo,
    /// Bytes received from the client
    BytesFrom,
    /// Last activity time
    Last,
    /// Time since last activity
    #[default]
    Idle,
    /// Time the connection has been up
    Uptime,
    /// Close time (closed connections only)
    Stop,
    /// Close reason (closed connections only)
    Reason,
    /// Round trip time
    Rtt,
}

impl SortOption {
    pub const ALL: [SortOption; 14] = [
        SortOption::Cid,
        SortOption::Start,
        SortOption::Subs,
        SortOption::Pending,
        SortOption::MsgsTo,
        SortOption::MsgsFrom,
        SortOption::BytesTo,
        SortOption::BytesFrom,
        SortOption::Last,
        SortOption::Idle,
        SortOption::Uptime,
        SortOption::Stop,
        SortOption::Reason,
        SortOption::Rtt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Cid => "cid",
            SortOption::Start => "start",
            SortOption::Subs => "subs",
            SortOption::Pending => "pending",
            SortOption::MsgsTo => "msgs_to",
            SortOption::MsgsFrom => "msgs_from",
            SortOption::BytesTo => "bytes_to",
            SortOption::BytesFrom => "bytes_from",
            SortOption::Last => "last",
            SortOption::Idle => "idle",
            SortOption::Uptime => "uptime",
            SortOption::Stop => "stop",
            SortOption::Reason => "reason",
            SortOption::Rtt => "rtt",
        }
    }

    /// Check if `name` names a known sort option
    pub fn is_valid(name: &str) -> bool {
        name.parse::<SortOption>().is_ok()
    }

    /// Keys that only make sense once a connection has closed
    pub fn requires_closed(&self) -> bool {
        matches!(self, SortOption::Stop | SortOption::Reason)
    }

    /// Reject keys that cannot apply to connections in `state`
    pub fn validate_for(&self, state: ConnState) -> MonitorResult<()> {
        if self.requires_closed() && state != ConnState::Closed {
            return Err(MonitorError::RequiresClosed(*self));
        }
        Ok(())
    }

    /// Direction used when the caller does not pick one.
    ///
    /// Identity-like keys list oldest first; counters and durations list
    /// the largest values first.
    pub fn default_direction(&self) -> SortDirection {
        match self {
            SortOption::Cid | SortOption::Start | SortOption::Reason => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .iter()
            .copied()
            .find(|opt| opt.as_str() == s)
            .ok_or_else(|| MonitorError::UnknownSortOption(s.to_string()))
    }
}

/// Order in which a sort key is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(MonitorError::UnknownDirection(s.to_string())),
        }
    }
}

impl TryFrom<String> for SortDirection {
    type Error = MonitorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_parse_back() {
        for opt in SortOption::ALL {
            assert_eq!(opt.as_str().parse::<SortOption>().unwrap(), opt);
            assert_eq!(opt.to_string(), opt.as_str());
        }
    }

    #[test]
    fn test_unknown_option() {
        assert!(!SortOption::is_valid("foo"));
        assert!(!SortOption::is_valid("Idle"));
        assert!(SortOption::is_valid("bytes_from"));

        match "foo".parse::<SortOption>() {
            Err(MonitorError::UnknownSortOption(name)) => assert_eq!(name, "foo"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_closed_only_options() {
        assert!(SortOption::Stop.validate_for(ConnState::Open).is_err());
        assert!(SortOption::Reason.validate_for(ConnState::Open).is_err());
        assert!(SortOption::Stop.validate_for(ConnState::Closed).is_ok());
        assert!(SortOption::Idle.validate_for(ConnState::Open).is_ok());
        assert!(SortOption::Idle.validate_for(ConnState::Closed).is_ok());
    }

    #[test]
    fn test_default_directions() {
        assert_eq!(SortOption::Cid.default_direction(), SortDirection::Ascending);
        assert_eq!(SortOption::Start.default_direction(), SortDirection::Ascending);
        assert_eq!(SortOption::Idle.default_direction(), SortDirection::Descending);
        assert_eq!(SortOption::BytesTo.default_direction(), SortDirection::Descending);
        assert_eq!(SortOption::default(), SortOption::Idle);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert_eq!("descending".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert!("sideways".parse::<SortDirection>().is_err());
        assert_eq!(SortDirection::Ascending.reversed(), SortDirection::Descending);
    }
}
