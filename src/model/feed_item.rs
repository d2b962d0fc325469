use serde::{Deserialize, Serialize};

/// One trend seed as returned by the feed endpoint.
///
/// The wire format is camelCase JSON:
/// `{"id": 1, "name": "...", "imageUrl": "...", "likeCount": 0, "commentCount": 0, "saved": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: u64,
    pub name: String,
    pub image_url: String,
    pub like_count: u64,
    pub comment_count: u64,
    pub saved: bool,
}

impl FeedItem {
    /// Copy with `like_count` incremented by one.
    pub fn liked(&self) -> Self {
        Self {
            like_count: self.like_count.saturating_add(1),
            ..self.clone()
        }
    }

    /// Copy with `saved` set.
    pub fn marked_saved(&self) -> Self {
        Self {
            saved: true,
            ..self.clone()
        }
    }
}
