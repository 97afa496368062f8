//! Line-oriented console reporting

use crate::output::traits::CrawlObserver;
use crate::state::{Address, Page};
use crate::FetchFailure;

/// Prints one line to stdout per fetch
///
/// Successes print as `found: <address> "<content>"`, failures print the
/// failure reason on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn found_line(address: &Address, page: &Page) -> String {
        format!("found: {} {:?}", address, page.content)
    }

    pub fn failure_line(failure: &FetchFailure) -> String {
        failure.to_string()
    }
}

impl CrawlObserver for ConsoleReporter {
    fn on_found(&self, address: &Address, page: &Page) {
        println!("{}", Self::found_line(address, page));
    }

    fn on_failure(&self, _address: &Address, failure: &FetchFailure) {
        println!("{}", Self::failure_line(failure));
    }
}
