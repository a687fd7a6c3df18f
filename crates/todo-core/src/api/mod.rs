//! REST API seam.
//!
//! The orchestration code only sees these traits; `HttpApi` is the reqwest
//! implementation used by the CLI. A transport failure (connection error,
//! timeout, non-2xx status, undecodable body) is an `Err`. An application
//! failure is an `Ok` response with a non-zero result code.

mod http;
#[cfg(test)]
pub(crate) mod test_fixtures;

use std::future::Future;

use anyhow::Result;
use todo_types::{ApiResponse, CreateTodolistData, LoginData, LoginParams, MeData, Todolist};

pub use http::HttpApi;

/// Authentication endpoints.
pub trait AuthApi {
    /// Identity check (`GET auth/me`).
    fn me(&self) -> impl Future<Output = Result<ApiResponse<MeData>>> + Send;

    /// Opens a session (`POST auth/login`).
    fn login(
        &self,
        params: &LoginParams,
    ) -> impl Future<Output = Result<ApiResponse<LoginData>>> + Send;

    /// Closes the session (`DELETE auth/login`).
    fn logout(&self) -> impl Future<Output = Result<ApiResponse>> + Send;
}

/// Todo-list endpoints.
pub trait TodolistsApi {
    /// Lists the user's todo-lists in server order (`GET todo-lists`).
    fn get_todolists(&self) -> impl Future<Output = Result<Vec<Todolist>>> + Send;

    /// `POST todo-lists`
    fn create_todolist(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<ApiResponse<CreateTodolistData>>> + Send;

    /// `DELETE todo-lists/{id}`
    fn delete_todolist(&self, id: &str) -> impl Future<Output = Result<ApiResponse>> + Send;

    /// `PUT todo-lists/{id}`
    fn update_todolist(
        &self,
        id: &str,
        title: &str,
    ) -> impl Future<Output = Result<ApiResponse>> + Send;
}
