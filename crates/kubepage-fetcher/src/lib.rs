//! Cross-pod log aggregation and pagination for kubepage
//!
//! Given a set of replica pods, this crate fetches a byte-bounded slice of
//! logs from each one, merges everything into a single time-ordered page,
//! and hands back an opaque continuation token recording how far into each
//! pod's stream the page reached. The actual pod discovery and log retrieval
//! are behind the [`LogSource`] trait, so the whole engine is testable
//! without a cluster.

mod aggregate;
mod budget;
mod cursor;
mod error;
mod fetcher;
mod parser;
pub mod token;

pub use error::{FetchError, TokenError};
pub use fetcher::{LogFetcher, LogSource, build_labels};

// Re-export types used in our public API
pub use kubepage_types::{CursorMap, FetchResult, LogEntry, Query};
