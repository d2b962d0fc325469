use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::{DetailState, DetailTab};
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::ContentLoaded { item } => DetailState {
                content: Some(item),
                ..state
            },
            // The heart and bookmark live on the original tab and start
            // over whenever that tab is left.
            DetailIntent::SelectTab(tab) if tab != DetailTab::Original => DetailState {
                active_tab: tab,
                liked: false,
                saved: false,
                ..state
            },
            DetailIntent::SelectTab(tab) => DetailState {
                active_tab: tab,
                ..state
            },
            DetailIntent::ToggleObjectRecognition => DetailState {
                object_recognition: !state.object_recognition,
                ..state
            },
            DetailIntent::OpenSimilarProducts => DetailState {
                similar_products_open: true,
                ..state
            },
            DetailIntent::CloseSimilarProducts => DetailState {
                similar_products_open: false,
                ..state
            },
            DetailIntent::OpenSavePrompt => DetailState {
                save_prompt_open: true,
                ..state
            },
            DetailIntent::CloseSavePrompt | DetailIntent::ConfirmSave { .. } => DetailState {
                save_prompt_open: false,
                ..state
            },
            DetailIntent::OpenSharePrompt => DetailState {
                share_prompt_open: true,
                ..state
            },
            DetailIntent::CloseSharePrompt => DetailState {
                share_prompt_open: false,
                ..state
            },
            DetailIntent::ToggleLike | DetailIntent::ToggleSave
                if state.active_tab != DetailTab::Original =>
            {
                state
            }
            DetailIntent::ToggleLike => DetailState {
                liked: !state.liked,
                ..state
            },
            DetailIntent::ToggleSave => DetailState {
                saved: !state.saved,
                ..state
            },
        }
    }
}
