//! Client-side state for the trend seed discovery feed: the feed and
//! save-to-board workflow, suggested users, the detail page, page chrome,
//! and the HTTP client that fetches the feed.

pub mod api;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod model;
pub mod ui;
