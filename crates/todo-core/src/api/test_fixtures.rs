//! Scripted in-memory API used by the thunk tests.

use std::sync::Mutex;

use anyhow::{Result, anyhow};
use todo_types::{ApiResponse, CreateTodolistData, LoginData, LoginParams, MeData, Todolist};

use super::{AuthApi, TodolistsApi};

/// Canned outcome of one endpoint: a response, or a transport failure with
/// the given message.
pub(crate) type Scripted<T> = Result<T, String>;

/// Fake API returning the same scripted outcome for every call of an
/// endpoint, and recording the calls it receives.
pub(crate) struct FakeApi {
    pub me: Scripted<ApiResponse<MeData>>,
    pub login: Scripted<ApiResponse<LoginData>>,
    pub logout: Scripted<ApiResponse>,
    pub todolists: Scripted<Vec<Todolist>>,
    pub create: Scripted<ApiResponse<CreateTodolistData>>,
    pub delete: Scripted<ApiResponse>,
    pub update: Scripted<ApiResponse>,
    pub calls: Mutex<Vec<String>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            me: Ok(ApiResponse::ok(MeData::default())),
            login: Ok(ApiResponse::ok(LoginData::default())),
            logout: Ok(ApiResponse::ok(Default::default())),
            todolists: Ok(Vec::new()),
            create: Ok(ApiResponse::ok(CreateTodolistData::default())),
            delete: Ok(ApiResponse::ok(Default::default())),
            update: Ok(ApiResponse::ok(Default::default())),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeApi {
    /// Calls received so far, e.g. `["login me@example.com", "me"]`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

pub(crate) fn todolist(id: &str, title: &str) -> Todolist {
    Todolist {
        id: id.to_string(),
        title: title.to_string(),
        order: 0,
        added_date: "2024-01-01T00:00:00".to_string(),
    }
}

fn replay<T: Clone>(scripted: &Scripted<T>) -> Result<T> {
    scripted.clone().map_err(|msg| anyhow!(msg))
}

impl AuthApi for FakeApi {
    async fn me(&self) -> Result<ApiResponse<MeData>> {
        self.record("me".to_string());
        replay(&self.me)
    }

    async fn login(&self, params: &LoginParams) -> Result<ApiResponse<LoginData>> {
        self.record(format!("login {}", params.email));
        replay(&self.login)
    }

    async fn logout(&self) -> Result<ApiResponse> {
        self.record("logout".to_string());
        replay(&self.logout)
    }
}

impl TodolistsApi for FakeApi {
    async fn get_todolists(&self) -> Result<Vec<Todolist>> {
        self.record("get_todolists".to_string());
        replay(&self.todolists)
    }

    async fn create_todolist(&self, title: &str) -> Result<ApiResponse<CreateTodolistData>> {
        self.record(format!("create_todolist {title}"));
        replay(&self.create)
    }

    async fn delete_todolist(&self, id: &str) -> Result<ApiResponse> {
        self.record(format!("delete_todolist {id}"));
        replay(&self.delete)
    }

    async fn update_todolist(&self, id: &str, title: &str) -> Result<ApiResponse> {
        self.record(format!("update_todolist {id} {title}"));
        replay(&self.update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_struct_update_keeps_call_log() {
        let api = FakeApi {
            delete: Err("offline".to_string()),
            ..Default::default()
        };

        assert!(api.delete_todolist("7").await.is_err());
        assert!(api.me().await.unwrap().is_success());
        assert_eq!(api.calls(), vec!["delete_todolist 7", "me"]);
    }
}
