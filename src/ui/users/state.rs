use crate::model::mock::seed_users;
use crate::model::SuggestedUser;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestedUsersState {
    pub users: Vec<SuggestedUser>,
}

impl UiState for SuggestedUsersState {}

/// Starts from the bundled seed users.
impl Default for SuggestedUsersState {
    fn default() -> Self {
        Self {
            users: seed_users(),
        }
    }
}

impl SuggestedUsersState {
    pub fn user(&self, id: u64) -> Option<&SuggestedUser> {
        self.users.iter().find(|u| u.id == id)
    }
}
