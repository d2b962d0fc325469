use crate::api::GENERIC_LOAD_ERROR;
use crate::model::FeedItem;
use crate::ui::feed::intent::FeedIntent;
use crate::ui::feed::state::{FeedState, LoadPhase};
use crate::ui::mvi::Reducer;

pub struct FeedReducer;

impl Reducer for FeedReducer {
    type State = FeedState;
    type Intent = FeedIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeedIntent::LoadStarted => FeedState {
                phase: LoadPhase::Loading,
                error: None,
                ..state
            },
            FeedIntent::LoadSucceeded { items } => FeedState {
                items,
                phase: LoadPhase::Loaded,
                error: None,
            },
            FeedIntent::LoadFailed { message } => {
                let message = if message.trim().is_empty() {
                    GENERIC_LOAD_ERROR.to_string()
                } else {
                    message
                };
                // A failed load never shows the previous list.
                FeedState {
                    items: Vec::new(),
                    phase: LoadPhase::Failed,
                    error: Some(message),
                }
            }
            FeedIntent::Like { id } => update_item(state, id, FeedItem::liked),
            FeedIntent::MarkSaved { id } => update_item(state, id, FeedItem::marked_saved),
        }
    }
}

/// Replace every item with `id` by `f(item)`. Unknown ids leave the state untouched.
fn update_item(mut state: FeedState, id: u64, f: impl Fn(&FeedItem) -> FeedItem) -> FeedState {
    for item in state.items.iter_mut().filter(|item| item.id == id) {
        *item = f(item);
    }
    state
}
