use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SaveIntent {
    /// User pressed save on an item: remember it and open the board prompt.
    Request { id: u64 },
    /// User picked a board in the prompt.
    Confirm { board_name: String },
    /// User closed the prompt without picking a board.
    Cancel,
    /// User closed the "saved to board" notification.
    DismissNotification,
}

impl Intent for SaveIntent {}
