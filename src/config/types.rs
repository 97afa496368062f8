use serde::Deserialize;

/// Main configuration structure for Ripple-Crawl
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
    /// Offline site map served by the bundled fetcher
    #[serde(default, rename = "page")]
    pub pages: Vec<PageEntry>,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Address the crawl starts from
    pub seed: String,

    /// Maximum depth to crawl from the seed (0 or less fetches nothing)
    #[serde(rename = "max-depth")]
    pub max_depth: i32,

    /// How duplicate discoveries of the same address are handled
    #[serde(default)]
    pub dedup: DedupMode,

    /// Per-fetch deadline in milliseconds; unbounded when absent
    #[serde(rename = "fetch-timeout-ms", default)]
    pub fetch_timeout_ms: Option<u64>,
}

/// Dedup strategy for addresses discovered concurrently from several branches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DedupMode {
    /// Check the registry, fetch, then record. Two branches racing on the
    /// same address may both fetch it.
    #[default]
    BestEffort,

    /// Reserve the address atomically before fetching. Each address is
    /// fetched at most once per crawl.
    Exact,
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Path to the markdown summary file
    #[serde(rename = "summary-path", default)]
    pub summary_path: Option<String>,
}

/// One page of the offline site map
#[derive(Debug, Clone, Deserialize)]
pub struct PageEntry {
    /// Address the page is served under
    pub address: String,

    /// Content returned for the page
    #[serde(default)]
    pub content: String,

    /// Addresses linked from the page
    #[serde(default)]
    pub links: Vec<String>,
}
