use crate::ui::mvi::Reducer;
use crate::ui::users::intent::UsersIntent;
use crate::ui::users::state::SuggestedUsersState;

pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = SuggestedUsersState;
    type Intent = UsersIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UsersIntent::ToggleFollow { id } => {
                if let Some(user) = state.users.iter_mut().find(|u| u.id == id) {
                    user.is_following = !user.is_following;
                }
                state
            }
        }
    }
}
