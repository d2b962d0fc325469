use std::future::Future;

use tracing::debug;

use crate::api::error::ApiError;
use crate::model::mock::{placeholder_item, repeat_items, seed_feed};
use crate::model::FeedItem;

/// Anything that can produce the feed: one call, no parameters.
pub trait FeedSource {
    fn fetch_feed(&self) -> impl Future<Output = Result<Vec<FeedItem>, ApiError>> + Send;
}

/// Fetch-by-id collaborator used by the detail view when no item was
/// handed over by navigation.
pub trait ItemLookup {
    fn fetch_item_by_id(&self, id: u64)
        -> impl Future<Output = Result<FeedItem, ApiError>> + Send;
}

/// Serves the bundled seed dataset, optionally repeated.
#[derive(Debug, Clone)]
pub struct MockFeedSource {
    items: Vec<FeedItem>,
}

impl MockFeedSource {
    pub fn new(repeat: usize) -> Self {
        Self {
            items: repeat_items(&seed_feed(), repeat),
        }
    }

    pub fn from_items(items: Vec<FeedItem>) -> Self {
        Self { items }
    }
}

impl FeedSource for MockFeedSource {
    async fn fetch_feed(&self) -> Result<Vec<FeedItem>, ApiError> {
        debug!(items = self.items.len(), "Serving mock feed");
        Ok(self.items.clone())
    }
}

/// Resolves every id to the local placeholder item.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderLookup;

impl ItemLookup for PlaceholderLookup {
    async fn fetch_item_by_id(&self, id: u64) -> Result<FeedItem, ApiError> {
        debug!(id, "Using placeholder item");
        Ok(placeholder_item(id))
    }
}
