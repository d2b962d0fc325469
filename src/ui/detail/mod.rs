//! Detail view: one item, a tab strip, overlays and prompts.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::{DetailState, DetailTab};
pub use view::{resolve_content, DetailView};
