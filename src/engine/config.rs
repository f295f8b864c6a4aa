//! Engine configuration
//!
//! [`EngineConfig`] carries the capacity constants the engines are built
//! with, plus the playback cadence used by renderers. Values default to the
//! constants in [`constants`](super::constants) and are checked by
//! [`EngineConfig::validate`] before a [`Session`](super::session::Session)
//! is created.

use super::constants::{DEFAULT_BUCKET_COUNT, DEFAULT_MAX_NODES, DEFAULT_STEP_DELAY_MS};
use super::errors::ConfigError;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Tree capacity
    pub max_nodes: usize,
    /// Hash table bucket count
    pub bucket_count: usize,
    /// Delay between steps when a trace is auto-played
    pub step_delay: Duration,
}

impl EngineConfig {
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_nodes == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.bucket_count == 0 {
            return Err(ConfigError::ZeroBuckets);
        }
        if self.step_delay.is_zero() {
            return Err(ConfigError::ZeroStepDelay);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_nodes: DEFAULT_MAX_NODES,
            bucket_count: DEFAULT_BUCKET_COUNT,
            step_delay: Duration::from_millis(DEFAULT_STEP_DELAY_MS),
        }
    }
}
