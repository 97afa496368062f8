//! Final crawl report
//!
//! Built from the visited registry after the work tracker reports zero
//! outstanding tasks, so it holds exactly what the registry held at that
//! point.

use crate::crawler::CrawlSettings;
use crate::output::stats::CrawlStatsSnapshot;
use crate::state::{Address, FetchOutcome};
use chrono::{DateTime, Utc};
use std::io::{self, Write};

/// Every recorded outcome of one crawl, plus run metadata
#[derive(Debug, Clone)]
pub struct CrawlReport {
    pub settings: CrawlSettings,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub stats: CrawlStatsSnapshot,

    /// Sorted by address
    entries: Vec<(Address, FetchOutcome)>,
}

impl CrawlReport {
    pub fn new(
        settings: CrawlSettings,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        mut entries: Vec<(Address, FetchOutcome)>,
        stats: CrawlStatsSnapshot,
    ) -> Self {
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self {
            settings,
            started_at,
            finished_at,
            stats,
            entries,
        }
    }

    pub fn entries(&self) -> &[(Address, FetchOutcome)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the outcome recorded for `address`
    pub fn get(&self, address: &str) -> Option<&FetchOutcome> {
        self.entries
            .binary_search_by(|(candidate, _)| candidate.as_str().cmp(address))
            .ok()
            .map(|index| &self.entries[index].1)
    }

    pub fn successes(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_success()).count()
    }

    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_failure()).count()
    }

    /// Percentage of recorded addresses that were fetched successfully
    pub fn success_rate(&self) -> f64 {
        if self.entries.is_empty() {
            0.0
        } else {
            (self.successes() as f64 / self.entries.len() as f64) * 100.0
        }
    }

    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }

    /// Formats one report line per recorded address
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries
            .iter()
            .map(|(address, outcome)| format!("{} --> {}", address, outcome))
    }

    /// Writes the "Final results" block
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Final results:")?;
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
