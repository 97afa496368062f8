//! Markdown summary generation
//!
//! This module generates a human-readable markdown summary of a crawl,
//! including run settings, statistics, and every recorded outcome.

use crate::config::DedupMode;
use crate::output::report::CrawlReport;
use crate::output::traits::OutputResult;
use crate::state::FetchOutcome;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the markdown summary of `report` to `output_path`
///
/// # Arguments
///
/// * `report` - The finished crawl report
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote markdown summary
/// * `Err(OutputError)` - Failed to write summary
pub fn generate_markdown_summary(report: &CrawlReport, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_summary(report);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a crawl report as markdown
pub fn format_markdown_summary(report: &CrawlReport) -> String {
    let mut md = String::new();

    md.push_str("# Ripple-Crawl Summary\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Seed**: {}\n", report.settings.seed));
    md.push_str(&format!("- **Max Depth**: {}\n", report.settings.max_depth));
    let dedup = match report.settings.dedup {
        DedupMode::BestEffort => "best-effort",
        DedupMode::Exact => "exact",
    };
    md.push_str(&format!("- **Dedup**: {}\n", dedup));
    match report.settings.fetch_timeout {
        Some(limit) => md.push_str(&format!("- **Fetch Timeout**: {} ms\n", limit.as_millis())),
        None => md.push_str("- **Fetch Timeout**: none\n"),
    }
    md.push_str(&format!("- **Started**: {}\n", report.started_at.to_rfc3339()));
    md.push_str(&format!("- **Finished**: {}\n", report.finished_at.to_rfc3339()));
    md.push_str(&format!(
        "- **Duration**: {} ms\n\n",
        report.duration().num_milliseconds()
    ));

    // Overall statistics
    let stats = &report.stats;
    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!("- **Addresses Recorded**: {}\n", report.len()));
    md.push_str(&format!("- **Successes**: {}\n", report.successes()));
    md.push_str(&format!("- **Failures**: {}\n", report.failures()));
    md.push_str(&format!(
        "- **Success Rate**: {:.2}%\n\n",
        report.success_rate()
    ));

    md.push_str("| Counter | Value |\n");
    md.push_str("|---------|-------|\n");
    md.push_str(&format!("| Tasks Spawned | {} |\n", stats.tasks_spawned));
    md.push_str(&format!("| Fetch Attempts | {} |\n", stats.fetches()));
    md.push_str(&format!(
        "| Duplicates Skipped | {} |\n",
        stats.duplicates_skipped
    ));
    md.push_str(&format!("| Depth Cut-offs | {} |\n", stats.depth_cutoffs));
    md.push_str(&format!("| Timeouts | {} |\n\n", stats.timeouts));

    // Outcomes
    md.push_str("## Outcomes\n\n");
    if report.is_empty() {
        md.push_str("_No addresses were fetched._\n");
        return md;
    }

    md.push_str("| Address | Result | Links |\n");
    md.push_str("|---------|--------|-------|\n");
    for (address, outcome) in report.entries() {
        let result = match outcome {
            FetchOutcome::Success(page) => escape_cell(&page.content),
            FetchOutcome::Failure(failure) => format!("**ERROR**: {}", escape_cell(failure.reason())),
        };
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            escape_cell(address.as_str()),
            result,
            outcome.links().len()
        ));
    }

    md
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
