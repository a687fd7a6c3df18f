//! App slice reducer.

use todo_types::RequestStatus;

use super::AppState;
use crate::store::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    SetAppError { error: Option<String> },
    SetAppStatus { status: RequestStatus },
    SetAppInitialized { is_initialized: bool },
}

/// Plain field replacement; every action is accepted as-is.
pub fn reduce(state: &mut AppState, action: AppAction) {
    match action {
        AppAction::SetAppError { error } => state.error = error,
        AppAction::SetAppStatus { status } => state.status = status,
        AppAction::SetAppInitialized { is_initialized } => state.is_initialized = is_initialized,
    }
}

pub fn set_app_error(error: Option<String>) -> Action {
    Action::App(AppAction::SetAppError { error })
}

pub fn set_app_status(status: RequestStatus) -> Action {
    Action::App(AppAction::SetAppStatus { status })
}

pub fn set_app_initialized(is_initialized: bool) -> Action {
    Action::App(AppAction::SetAppInitialized { is_initialized })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_app_error_replaces_and_clears() {
        let mut state = AppState::default();
        reduce(
            &mut state,
            AppAction::SetAppError {
                error: Some("boom".to_string()),
            },
        );
        assert_eq!(state.error.as_deref(), Some("boom"));

        reduce(&mut state, AppAction::SetAppError { error: None });
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_set_app_status_touches_only_status() {
        let mut state = AppState {
            error: Some("kept".to_string()),
            is_initialized: true,
            ..Default::default()
        };
        reduce(
            &mut state,
            AppAction::SetAppStatus {
                status: RequestStatus::Loading,
            },
        );
        assert_eq!(state.status, RequestStatus::Loading);
        assert_eq!(state.error.as_deref(), Some("kept"));
        assert!(state.is_initialized);
    }

    #[test]
    fn test_set_app_status_is_idempotent() {
        let mut once = AppState::default();
        reduce(
            &mut once,
            AppAction::SetAppStatus {
                status: RequestStatus::Idle,
            },
        );

        let mut twice = AppState::default();
        for _ in 0..2 {
            reduce(
                &mut twice,
                AppAction::SetAppStatus {
                    status: RequestStatus::Idle,
                },
            );
        }
        assert_eq!(once, twice);
    }

    #[test]
    fn test_set_app_initialized() {
        let mut state = AppState::default();
        reduce(
            &mut state,
            AppAction::SetAppInitialized {
                is_initialized: true,
            },
        );
        assert!(state.is_initialized);
    }
}
