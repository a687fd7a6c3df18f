use serde::Serialize;
use todo_types::RequestStatus;

/// Global request lifecycle and bootstrap flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub status: RequestStatus,
    /// Last reported error; `None` when cleared.
    pub error: Option<String>,
    /// Set once the identity check at startup has completed.
    pub is_initialized: bool,
}
