use crate::config::types::{Config, CrawlerConfig, OutputConfig, PageEntry};
use crate::ConfigError;
use std::collections::HashSet;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_output_config(&config.output)?;
    validate_pages(&config.pages)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // max_depth <= 0 is legal and produces an empty crawl

    if config.seed.trim().is_empty() {
        return Err(ConfigError::Validation(
            "seed cannot be empty".to_string(),
        ));
    }

    if config.fetch_timeout_ms == Some(0) {
        return Err(ConfigError::Validation(
            "fetch-timeout-ms must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if let Some(path) = &config.summary_path {
        if path.is_empty() {
            return Err(ConfigError::Validation(
                "summary-path cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates the site map: every page needs a unique, non-empty address
fn validate_pages(pages: &[PageEntry]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for page in pages {
        if page.address.is_empty() {
            return Err(ConfigError::Validation(
                "page address cannot be empty".to_string(),
            ));
        }

        if !seen.insert(page.address.as_str()) {
            return Err(ConfigError::DuplicatePage(page.address.clone()));
        }

        if page.links.iter().any(|link| link.is_empty()) {
            return Err(ConfigError::Validation(format!(
                "page '{}' has an empty link",
                page.address
            )));
        }
    }

    Ok(())
}
