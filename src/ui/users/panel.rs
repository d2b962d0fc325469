use tracing::debug;

use crate::model::SuggestedUser;
use crate::ui::mvi::dispatch_mvi;
use crate::ui::users::intent::UsersIntent;
use crate::ui::users::reducer::UsersReducer;
use crate::ui::users::state::SuggestedUsersState;

/// Owns the suggested-users state. Follow toggles are local only.
#[derive(Debug, Default)]
pub struct SuggestedUsersPanel {
    state: SuggestedUsersState,
}

impl SuggestedUsersPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<SuggestedUser>) -> Self {
        Self {
            state: SuggestedUsersState { users },
        }
    }

    pub fn toggle_follow(&mut self, id: u64) {
        if self.state.user(id).is_none() {
            debug!(id, "Follow toggle for unknown user ignored");
        }
        dispatch_mvi!(self, state, UsersReducer, UsersIntent::ToggleFollow { id });
    }

    pub fn state(&self) -> &SuggestedUsersState {
        &self.state
    }

    pub fn users(&self) -> &[SuggestedUser] {
        &self.state.users
    }
}
