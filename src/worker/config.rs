//! Worker configuration

use crate::error::{Result, WorkerError};
use std::time::Duration;

/// Worker configuration
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Poll interval when no work is available; also the wait after a
    /// failed cycle
    pub poll_interval: Duration,

    /// Maximum items fetched per cycle
    pub batch_size: usize,

    /// Per-item processing timeout
    pub task_timeout: Duration,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            batch_size: 10,
            task_timeout: Duration::from_secs(300), // 5 minutes
        }
    }
}

impl WorkerConfig {
    /// Create a new config builder
    pub fn builder() -> WorkerConfigBuilder {
        WorkerConfigBuilder::default()
    }

    /// Build a config from environment variables
    ///
    /// Reads `WORKER_POLL_INTERVAL`, `WORKER_BATCH_SIZE` and
    /// `WORKER_TASK_TIMEOUT` (interval and timeout in seconds). Unset
    /// variables fall back to the defaults; unparsable values are a
    /// configuration error.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Some(secs) = read_env_u64("WORKER_POLL_INTERVAL")? {
            config.poll_interval = Duration::from_secs(secs);
        }
        if let Some(size) = read_env_u64("WORKER_BATCH_SIZE")? {
            config.batch_size = (size as usize).max(1);
        }
        if let Some(secs) = read_env_u64("WORKER_TASK_TIMEOUT")? {
            config.task_timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

fn read_env_u64(name: &str) -> Result<Option<u64>> {
    match std::env::var(name) {
        Ok(raw) => raw.parse::<u64>().map(Some).map_err(|_| {
            WorkerError::ConfigError(format!("{} must be an integer, got '{}'", name, raw))
        }),
        Err(_) => Ok(None),
    }
}

/// Builder for WorkerConfig
pub struct WorkerConfigBuilder {
    config: WorkerConfig,
}

impl WorkerConfigBuilder {
    /// Set poll interval
    pub fn poll_interval(mut self, duration: Duration) -> Self {
        self.config.poll_interval = duration;
        self
    }

    /// Set poll interval in seconds
    pub fn poll_interval_secs(mut self, secs: u64) -> Self {
        self.config.poll_interval = Duration::from_secs(secs);
        self
    }

    /// Set batch size (clamped to at least 1)
    pub fn batch_size(mut self, size: usize) -> Self {
        self.config.batch_size = size.max(1);
        self
    }

    /// Set per-item timeout
    pub fn task_timeout(mut self, duration: Duration) -> Self {
        self.config.task_timeout = duration;
        self
    }

    /// Build the config
    pub fn build(self) -> WorkerConfig {
        self.config
    }
}

impl Default for WorkerConfigBuilder {
    fn default() -> Self {
        Self {
            config: WorkerConfig::default(),
        }
    }
}
