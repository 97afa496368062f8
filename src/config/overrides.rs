//! Command-line overrides of the crawler settings
//!
//! Overrides are applied on top of a loaded config, and the result is
//! validated again so a flag cannot slip an invalid value past the loader.

use crate::config::types::{Config, DedupMode};
use crate::config::validation::validate;
use crate::ConfigError;

/// Crawler settings given on the command line
#[derive(Debug, Clone, Default)]
pub struct CrawlerOverrides {
    /// Replaces `crawler.seed`
    pub seed: Option<String>,

    /// Replaces `crawler.max-depth`
    pub max_depth: Option<i32>,

    /// Forces `crawler.dedup = "exact"` when set
    pub exact: bool,
}

impl CrawlerOverrides {
    /// Applies the overrides to `config` and validates the result
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The overridden config is valid
    /// * `Err(ConfigError)` - An override produced an invalid config
    pub fn apply(&self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(seed) = &self.seed {
            config.crawler.seed = seed.clone();
        }
        if let Some(depth) = self.max_depth {
            config.crawler.max_depth = depth;
        }
        if self.exact {
            config.crawler.dedup = DedupMode::Exact;
        }

        validate(config)
    }
}
