//! Feed container: the loaded trend seeds plus load status.

mod intent;
mod reducer;
mod state;

pub use intent::FeedIntent;
pub use reducer::FeedReducer;
pub use state::{FeedState, LoadPhase};
