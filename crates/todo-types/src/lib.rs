//! Wire and domain types shared by the todos crates.
//!
//! Everything here is plain data: no I/O, no async. The shapes mirror the
//! todo-list REST API (camelCase JSON) plus the client-side decorations
//! (`filter`, `entity_status`) the store adds on top.

mod response;
mod status;
mod todolist;

pub use response::{
    ApiResponse, CreateTodolistData, Empty, FieldError, LoginData, LoginParams, MeData,
};
pub use status::{FilterValue, RequestStatus};
pub use todolist::{Todolist, TodolistDomain};
