use crate::model::FeedItem;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FeedIntent {
    /// A fetch was issued.
    LoadStarted,
    /// The fetch returned items; they replace the current list.
    LoadSucceeded { items: Vec<FeedItem> },
    /// The fetch failed. An empty message falls back to a generic one.
    LoadFailed { message: String },
    /// Increment the like count of the item with `id`.
    Like { id: u64 },
    /// Mark the item with `id` as saved to a board.
    MarkSaved { id: u64 },
}

impl Intent for FeedIntent {}
