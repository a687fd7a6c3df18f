//! Failure reporting into the app slice.
//!
//! Both helpers end the same way: the app error is set and the global status
//! becomes `failed`. The UI renders the error and lets the status drive its
//! loading indicators.

use todo_types::{ApiResponse, RequestStatus};

use crate::features::app::{set_app_error, set_app_status};
use crate::store::Dispatch;

/// Shown when the server or the transport gives no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Some error occurred";

/// Reports an application-level failure (non-zero result code).
///
/// Uses the first server message, or the generic message when none was sent.
pub fn handle_server_app_error<T, D>(response: &ApiResponse<T>, dispatch: &D)
where
    D: Dispatch + ?Sized,
{
    let message = response
        .first_message()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(GENERIC_ERROR_MESSAGE);
    tracing::warn!(result_code = response.result_code, error = message, "server rejected request");
    dispatch.dispatch(set_app_error(Some(message.to_string())));
    dispatch.dispatch(set_app_status(RequestStatus::Failed));
}

/// Reports a transport failure (no response was obtained).
pub fn handle_server_network_error<D>(error: &anyhow::Error, dispatch: &D)
where
    D: Dispatch + ?Sized,
{
    let message = format!("{error:#}");
    let message = if message.trim().is_empty() {
        GENERIC_ERROR_MESSAGE.to_string()
    } else {
        message
    };
    tracing::warn!(error = %message, "request failed");
    dispatch.dispatch(set_app_error(Some(message)));
    dispatch.dispatch(set_app_status(RequestStatus::Failed));
}
