//! Login/logout orchestration.
//!
//! Both routines report failures into the app slice (error + `failed`
//! status) and never return them.

use todo_types::{LoginParams, RequestStatus};

use super::set_is_logged_in;
use crate::api::AuthApi;
use crate::error_utils::{handle_server_app_error, handle_server_network_error};
use crate::features::app::set_app_status;
use crate::store::Dispatch;

pub async fn login<A, D>(api: &A, dispatch: &D, params: &LoginParams)
where
    A: AuthApi,
    D: Dispatch + ?Sized,
{
    dispatch.dispatch(set_app_status(RequestStatus::Loading));
    match api.login(params).await {
        Ok(res) if res.is_success() => {
            tracing::info!(email = %params.email, "logged in");
            dispatch.dispatch(set_is_logged_in(true));
            dispatch.dispatch(set_app_status(RequestStatus::Succeeded));
        }
        Ok(res) => handle_server_app_error(&res, dispatch),
        Err(err) => handle_server_network_error(&err, dispatch),
    }
}

pub async fn logout<A, D>(api: &A, dispatch: &D)
where
    A: AuthApi,
    D: Dispatch + ?Sized,
{
    dispatch.dispatch(set_app_status(RequestStatus::Loading));
    match api.logout().await {
        Ok(res) if res.is_success() => {
            tracing::info!("logged out");
            dispatch.dispatch(set_is_logged_in(false));
            dispatch.dispatch(set_app_status(RequestStatus::Succeeded));
        }
        Ok(res) => handle_server_app_error(&res, dispatch),
        Err(err) => handle_server_network_error(&err, dispatch),
    }
}
