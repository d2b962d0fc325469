//! HTTP access to the trend seed API.
//!
//! `ApiClient` is the single configured reqwest wrapper; every request and
//! response passes through its logging hooks. The `FeedSource` and
//! `ItemLookup` traits are the seams the UI containers depend on, so the
//! containers can be driven by the mock dataset or by test doubles.

mod client;
mod error;
mod source;

pub use client::ApiClient;
pub use error::{ApiError, ErrorKind, GENERIC_LOAD_ERROR};
pub use source::{FeedSource, ItemLookup, MockFeedSource, PlaceholderLookup};
