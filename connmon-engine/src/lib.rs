//! Connmon Engine - connection activity ranking
//!
//! This crate orders point-in-time snapshots of server connections for
//! monitoring endpoints. The central operation ranks a snapshot by idle
//! time against a single caller-supplied reference instant.

pub mod error;
pub mod snapshot;
pub mod ranking;
pub mod config;

pub use error::{MonitorError, MonitorResult};
pub use snapshot::{collect_ranked, zero_instant, ConnInfo, ConnState, ConnectionSnapshot, SnapshotSource};
pub use ranking::{rank, IdleRanker, Ranker, SortDirection, SortOption};
pub use config::{load_config, parse_config, RankingConfig};
