//! Save-to-board workflow: pick an item, choose a board, show a notice.

mod intent;
mod reducer;
mod state;

pub use intent::SaveIntent;
pub use reducer::SaveReducer;
pub use state::{SaveNotification, SaveWorkflowState};
