//! Domain records shared by the API client and the UI containers.

mod feed_item;
pub mod mock;
mod suggested_user;

pub use feed_item::FeedItem;
pub use suggested_user::SuggestedUser;
