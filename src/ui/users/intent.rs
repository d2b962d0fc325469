use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum UsersIntent {
    ToggleFollow { id: u64 },
}

impl Intent for UsersIntent {}
