//! Auth slice reducer.

use super::AuthState;
use crate::store::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    SetIsLoggedIn { is_logged_in: bool },
}

pub fn reduce(state: &mut AuthState, action: AuthAction) {
    match action {
        AuthAction::SetIsLoggedIn { is_logged_in } => state.is_logged_in = is_logged_in,
    }
}

pub fn set_is_logged_in(is_logged_in: bool) -> Action {
    Action::Auth(AuthAction::SetIsLoggedIn { is_logged_in })
}
