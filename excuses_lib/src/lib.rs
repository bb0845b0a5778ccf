//! Library layer for the developer excuse fetcher: HTTP client, anchor-text
//! extraction, and failure classification.

pub mod client;
pub mod error;
pub mod extract;
pub mod failure;

pub use client::{ExcuseClient, DEFAULT_URL};
pub use error::FetchError;
pub use extract::{extract_excuse, ExcuseOutcome};
pub use failure::{fetch_excuse, FetchFailure};
