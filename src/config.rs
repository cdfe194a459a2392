//! Runtime knobs for the showcase.
//!
//! Every field has a default, so the binary runs with no config at all. A TOML
//! file may override any subset:
//!
//! ```toml
//! delay_ms = 0
//! lock_demo = true
//! lock_threads = 4
//! verbose = true
//! ```

use crate::error::{Result, ShowcaseError};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_DELAY_MS: u64 = 1000;
pub const DEFAULT_LOCK_THREADS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    /// Simulated latency of the async process-data step.
    pub delay_ms: u64,
    /// Also run the mutual-exclusion demonstration.
    pub lock_demo: bool,
    pub lock_threads: usize,
    /// Print section banners on stderr.
    pub verbose: bool,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        ShowcaseConfig {
            delay_ms: DEFAULT_DELAY_MS,
            lock_demo: false,
            lock_threads: DEFAULT_LOCK_THREADS,
            verbose: false,
        }
    }
}

impl ShowcaseConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ShowcaseConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ShowcaseError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<()> {
        if self.lock_threads == 0 {
            return Err(ShowcaseError::invalid_config(
                "lock_threads",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
