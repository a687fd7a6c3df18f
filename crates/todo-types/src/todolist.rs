use serde::{Deserialize, Serialize};

use crate::{FilterValue, RequestStatus};

/// A todo-list as the server returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todolist {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub added_date: String,
}

/// A todo-list as the store keeps it: the server record plus the UI-only
/// filter and per-row request status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodolistDomain {
    pub id: String,
    pub title: String,
    pub order: i64,
    pub added_date: String,
    pub filter: FilterValue,
    pub entity_status: RequestStatus,
}

impl From<Todolist> for TodolistDomain {
    /// Decorates a server record with `filter = all` and `entity_status = idle`.
    fn from(todolist: Todolist) -> Self {
        Self {
            id: todolist.id,
            title: todolist.title,
            order: todolist.order,
            added_date: todolist.added_date,
            filter: FilterValue::All,
            entity_status: RequestStatus::Idle,
        }
    }
}
