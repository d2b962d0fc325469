//! Suggested-users container. Independent of the feed.

mod intent;
mod panel;
mod reducer;
mod state;

pub use intent::UsersIntent;
pub use panel::SuggestedUsersPanel;
pub use reducer::UsersReducer;
pub use state::SuggestedUsersState;
