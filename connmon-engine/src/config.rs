//! Ranking configuration
//!
//! Monitoring endpoints can pin a default ordering in a TOML file:
//!
//! ```toml
//! sort = "idle"
//! direction = "desc"
//! closed = false
//! ```

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{MonitorError, MonitorResult};
use crate::ranking::{Ranker, SortDirection, SortOption};
use crate::snapshot::ConnState;

/// Maximum config file size (1 MB)
const MAX_CONFIG_SIZE: u64 = 1_048_576;

/// Default ordering for connection listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankingConfig {
    /// Sort key
    pub sort: SortOption,
    /// Explicit direction; the key's natural direction when absent
    pub direction: Option<SortDirection>,
    /// Rank closed connections instead of open ones
    pub closed: bool,
}

impl RankingConfig {
    /// Connection state this configuration ranks
    pub fn state(&self) -> ConnState {
        if self.closed {
            ConnState::Closed
        } else {
            ConnState::Open
        }
    }

    pub fn effective_direction(&self) -> SortDirection {
        self.direction
            .unwrap_or_else(|| self.sort.default_direction())
    }

    pub fn validate(&self) -> MonitorResult<()> {
        self.sort.validate_for(self.state())
    }

    /// Build the configured ranker for a snapshot taken at `reference`
    pub fn ranker(&self, reference: DateTime<Utc>) -> Ranker {
        Ranker::new(self.sort, self.effective_direction(), reference)
    }
}

/// Load and validate ranking configuration from a TOML file
pub fn load_config(path: &Path) -> MonitorResult<RankingConfig> {
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_CONFIG_SIZE {
        warn!(path = %path.display(), size = metadata.len(), "Ranking config too large");
        return Err(MonitorError::ConfigTooLarge {
            size: metadata.len(),
            max: MAX_CONFIG_SIZE,
        });
    }

    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    debug!(
        path = %path.display(),
        sort = %config.sort,
        direction = %config.effective_direction(),
        "Loaded ranking config"
    );
    Ok(config)
}

/// Parse ranking configuration from a TOML string
pub fn parse_config(content: &str) -> MonitorResult<RankingConfig> {
    let config: RankingConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
