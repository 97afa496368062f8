//! Fetch outcome definitions
//!
//! An outcome is created once per fetch and never modified afterwards.

use crate::state::Address;
use crate::FetchFailure;
use std::fmt;

/// A successfully fetched page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    /// Page body (or any content the fetcher chooses to expose)
    pub content: String,

    /// Addresses discovered on the page, in document order
    pub links: Vec<Address>,
}

impl Page {
    pub fn new(content: impl Into<String>, links: Vec<Address>) -> Self {
        Self {
            content: content.into(),
            links,
        }
    }
}

/// Result of attempting to fetch one address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The fetcher returned content and links
    Success(Page),

    /// The fetcher could not resolve the address
    Failure(FetchFailure),
}

impl FetchOutcome {
    /// Returns true if the fetch succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true if the fetch failed
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the failure, if any
    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Returns the discovered links (empty for failures)
    pub fn links(&self) -> &[Address] {
        match self {
            Self::Success(page) => &page.links,
            Self::Failure(_) => &[],
        }
    }
}

impl From<Result<Page, FetchFailure>> for FetchOutcome {
    fn from(result: Result<Page, FetchFailure>) -> Self {
        match result {
            Ok(page) => Self::Success(page),
            Err(failure) => Self::Failure(failure),
        }
    }
}

/// Renders the right-hand side of a final report line
impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(page) => write!(f, "{}", page.content),
            Self::Failure(failure) => write!(f, "ERROR: {}", failure),
        }
    }
}
