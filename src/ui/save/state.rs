use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SaveWorkflowState {
    pub selected_item_id: Option<u64>,
    pub is_prompt_open: bool,
    /// Board used by the last completed save. Kept after the notice closes.
    pub last_saved_board_name: String,
    pub notification_visible: bool,
}

impl UiState for SaveWorkflowState {}

/// Transient notice shown after a save completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveNotification<'a> {
    pub board_name: &'a str,
}

impl SaveWorkflowState {
    pub fn notification(&self) -> Option<SaveNotification<'_>> {
        self.notification_visible.then_some(SaveNotification {
            board_name: &self.last_saved_board_name,
        })
    }
}
