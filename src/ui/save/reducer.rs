use crate::ui::mvi::Reducer;
use crate::ui::save::intent::SaveIntent;
use crate::ui::save::state::SaveWorkflowState;

pub struct SaveReducer;

impl Reducer for SaveReducer {
    type State = SaveWorkflowState;
    type Intent = SaveIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SaveIntent::Request { id } => SaveWorkflowState {
                selected_item_id: Some(id),
                is_prompt_open: true,
                ..state
            },
            SaveIntent::Confirm { board_name } => SaveWorkflowState {
                selected_item_id: None,
                is_prompt_open: false,
                last_saved_board_name: board_name,
                notification_visible: true,
            },
            SaveIntent::Cancel => SaveWorkflowState {
                selected_item_id: None,
                is_prompt_open: false,
                ..state
            },
            SaveIntent::DismissNotification => SaveWorkflowState {
                notification_visible: false,
                ..state
            },
        }
    }
}
