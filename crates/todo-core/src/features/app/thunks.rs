//! App bootstrap orchestration.

use anyhow::Result;

use super::set_app_initialized;
use crate::api::AuthApi;
use crate::features::auth::set_is_logged_in;
use crate::store::Dispatch;

/// Runs the startup identity check.
///
/// Result code 0 marks the session as logged in; any other code leaves auth
/// untouched. Either way the app is then flagged initialized. A transport
/// failure is returned to the caller and the app stays uninitialized.
pub async fn initialize_app<A, D>(api: &A, dispatch: &D) -> Result<()>
where
    A: AuthApi,
    D: Dispatch + ?Sized,
{
    let res = api.me().await?;
    if res.is_success() {
        dispatch.dispatch(set_is_logged_in(true));
    } else {
        tracing::debug!(result_code = res.result_code, "identity check: not logged in");
    }

    dispatch.dispatch(set_app_initialized(true));
    Ok(())
}
