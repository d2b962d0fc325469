//! Seed datasets used for the offline demo, the suggested-users panel and
//! the detail-view placeholder.

use crate::model::{FeedItem, SuggestedUser};

/// Name shown for an item opened without transfer state.
pub const PLACEHOLDER_NAME: &str = "Elegant White Ensemble";
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://i.pinimg.com/474x/97/94/0d/97940d3488cd063b20e2a457d59674d2.jpg";

const SEED_FEED: [(&str, &str, u64, u64); 6] = [
    (
        "Instagram User",
        "https://i.pinimg.com/564x/f0/f6/88/f0f68858fca3187ede74eac299d9f5f0.jpg",
        120,
        15,
    ),
    (
        "Fashion Blog",
        "https://i.pinimg.com/564x/40/1b/8b/401b8b540588fa8eb613b1d3b0432651.jpg",
        89,
        7,
    ),
    (
        "Pinterest User",
        "https://i.pinimg.com/474x/10/85/fb/1085fbc7a071d3856794fd24e739fafb.jpg",
        230,
        32,
    ),
    (
        "Fashion Magazine",
        "https://i.pinimg.com/474x/97/94/0d/97940d3488cd063b20e2a457d59674d2.jpg",
        180,
        25,
    ),
    (
        "Style Blogger",
        "https://i.pinimg.com/474x/98/91/09/989109d6a833f02720f7a990fd15cd80.jpg",
        150,
        20,
    ),
    (
        "Fashion Designer",
        "https://i.pinimg.com/474x/88/3a/bc/883abc6d6f5cf1df4be9990355a9be00.jpg",
        200,
        30,
    ),
];

const SEED_USERS: [(&str, u64); 10] = [
    ("Fashion Guru", 10_000),
    ("Style Maven", 8_500),
    ("Trend Setter", 12_000),
    ("Chic Influencer", 15_000),
    ("Fashionista", 9_000),
    ("Vogue Visionary", 11_000),
    ("Couture Queen", 13_500),
    ("Runway Rebel", 7_500),
    ("Fashion Forward", 14_000),
    ("Style Savant", 10_500),
];

/// The six demo trend seeds, ids 1 through 6, none saved.
pub fn seed_feed() -> Vec<FeedItem> {
    SEED_FEED
        .iter()
        .zip(1u64..)
        .map(|(&(name, image_url, likes, comments), id)| FeedItem {
            id,
            name: name.to_string(),
            image_url: image_url.to_string(),
            like_count: likes,
            comment_count: comments,
            saved: false,
        })
        .collect()
}

/// The ten suggested users, ids 1 through 10, none followed.
pub fn seed_users() -> Vec<SuggestedUser> {
    SEED_USERS
        .iter()
        .zip(1u64..)
        .map(|(&(name, followers), id)| SuggestedUser {
            id,
            name: name.to_string(),
            avatar: format!("https://source.unsplash.com/random/100x100?face={}", id),
            followers,
            is_following: false,
        })
        .collect()
}

/// Stand-in for an item that was not handed over by the navigating view.
pub fn placeholder_item(id: u64) -> FeedItem {
    FeedItem {
        id,
        name: PLACEHOLDER_NAME.to_string(),
        image_url: PLACEHOLDER_IMAGE_URL.to_string(),
        like_count: 1000,
        comment_count: 50,
        saved: false,
    }
}

/// Repeat `items` `times` times, in order.
///
/// Ids are kept as-is, so a padded list contains duplicate ids. This is
/// only meant for exercising long demo feeds; id-keyed operations then
/// apply to every copy.
pub fn repeat_items(items: &[FeedItem], times: usize) -> Vec<FeedItem> {
    let mut out = Vec::with_capacity(items.len() * times);
    for _ in 0..times {
        out.extend_from_slice(items);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_feed_has_unique_sequential_ids() {
        let feed = seed_feed();
        let ids: Vec<u64> = feed.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert!(feed.iter().all(|i| !i.saved && !i.name.is_empty()));
    }

    #[test]
    fn seed_users_start_unfollowed() {
        let users = seed_users();
        assert_eq!(users.len(), 10);
        assert!(users.iter().all(|u| !u.is_following));
        let ids: HashSet<u64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), 10);
        assert!(users[2].avatar.ends_with("face=3"));
    }

    #[test]
    fn placeholder_uses_route_id() {
        let item = placeholder_item(42);
        assert_eq!(item.id, 42);
        assert_eq!(item.name, PLACEHOLDER_NAME);
        assert_eq!(item.like_count, 1000);
        assert_eq!(item.comment_count, 50);
        assert!(!item.saved);
    }

    #[test]
    fn repeat_keeps_original_ids() {
        let feed = seed_feed();
        let padded = repeat_items(&feed, 3);
        assert_eq!(padded.len(), 18);
        assert_eq!(padded[6].id, 1);
        assert_eq!(&padded[12..], &feed[..]);
    }

    #[test]
    fn repeat_zero_times_is_empty() {
        assert!(repeat_items(&seed_feed(), 0).is_empty());
    }
}
