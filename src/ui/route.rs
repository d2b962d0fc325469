//! Navigation targets and share links.

use std::fmt;

use crate::config::join_url;
use crate::model::FeedItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Feed,
    /// `/content/{id}`
    Content { id: u64 },
}

impl Route {
    /// Parse a path. Query strings and trailing slashes are ignored.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Route::Feed),
            ["content", id] => id.parse().ok().map(|id| Route::Content { id }),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Feed => "/".to_string(),
            Route::Content { id } => format!("/content/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Navigation to a detail page, optionally carrying the item the feed
/// already has so the detail view can skip a fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRequest {
    pub id: u64,
    pub transfer: Option<FeedItem>,
}

impl ContentRequest {
    /// Navigate by id only, e.g. from a typed URL.
    pub fn by_id(id: u64) -> Self {
        Self { id, transfer: None }
    }

    /// Navigate from a feed card, handing over a copy of the item.
    pub fn from_item(item: &FeedItem) -> Self {
        Self {
            id: item.id,
            transfer: Some(item.clone()),
        }
    }

    pub fn route(&self) -> Route {
        Route::Content { id: self.id }
    }
}

/// Destinations offered by the share prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    CopyLink,
    WhatsApp,
    Messenger,
    Facebook,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 4] = [
        ShareTarget::CopyLink,
        ShareTarget::WhatsApp,
        ShareTarget::Messenger,
        ShareTarget::Facebook,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShareTarget::CopyLink => "Copy link",
            ShareTarget::WhatsApp => "WhatsApp",
            ShareTarget::Messenger => "Messenger",
            ShareTarget::Facebook => "Facebook",
        }
    }
}

/// Link to an item's detail page, absolute when `origin` is given.
pub fn share_link(origin: Option<&str>, id: u64) -> String {
    let path = Route::Content { id }.path();
    match origin {
        Some(origin) => join_url(origin, &path),
        None => path,
    }
}
