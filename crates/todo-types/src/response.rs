use serde::{Deserialize, Serialize};

use crate::Todolist;

/// Envelope returned by every mutating endpoint.
///
/// `result_code == 0` means success; anything else is an application-level
/// failure, usually explained by `messages`. The server sends `data: {}` on
/// failure, so `data` falls back to its default when fields are missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<D = Empty> {
    pub result_code: i32,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub fields_errors: Vec<FieldError>,
    #[serde(default)]
    pub data: D,
}

impl<D> ApiResponse<D> {
    pub const SUCCESS: i32 = 0;

    pub fn is_success(&self) -> bool {
        self.result_code == Self::SUCCESS
    }

    /// First server-supplied message, if any.
    pub fn first_message(&self) -> Option<&str> {
        self.messages.first().map(String::as_str)
    }
}

impl<D: Default> ApiResponse<D> {
    pub fn ok(data: D) -> Self {
        Self {
            result_code: Self::SUCCESS,
            messages: Vec::new(),
            fields_errors: Vec::new(),
            data,
        }
    }

    pub fn failed(result_code: i32, messages: Vec<String>) -> Self {
        Self {
            result_code,
            messages,
            fields_errors: Vec::new(),
            data: D::default(),
        }
    }
}

/// Per-field validation error attached to a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub error: String,
}

/// Empty `data` payload (`{}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Empty {}

/// Body of `POST auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginParams {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captcha: Option<String>,
}

/// `data` of a successful `POST auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// `data` of `GET auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeData {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
}

/// `data` of `POST todo-lists`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateTodolistData {
    #[serde(default)]
    pub item: Option<Todolist>,
}
