//! Todolists slice: the ordered collection of todo-lists with their filter
//! and per-row request status.

mod state;
mod thunks;
mod update;

pub use state::TodolistsState;
pub use thunks::{add_todolist, change_todolist_title, fetch_todolists, remove_todolist};
pub use update::{TodolistsAction, reduce};

/// Action creators, named after the actions they build.
pub mod actions {
    pub use super::update::{
        add_todolist, change_todolist_entity_status, change_todolist_filter,
        change_todolist_title, remove_todolist, set_todolists,
    };
}
