//! Todolists slice reducer.
//!
//! Row-targeted actions locate the row by id and do nothing when it is
//! missing.

use todo_types::{FilterValue, RequestStatus, Todolist, TodolistDomain};

use super::TodolistsState;
use crate::store::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodolistsAction {
    RemoveTodolist {
        id: String,
    },
    AddTodolist {
        todolist: Todolist,
    },
    ChangeTodolistTitle {
        id: String,
        title: String,
    },
    ChangeTodolistFilter {
        id: String,
        filter: FilterValue,
    },
    ChangeTodolistEntityStatus {
        id: String,
        entity_status: RequestStatus,
    },
    /// Appends every record to the existing collection.
    SetTodolists {
        todolists: Vec<Todolist>,
    },
}

pub fn reduce(state: &mut TodolistsState, action: TodolistsAction) {
    match action {
        TodolistsAction::RemoveTodolist { id } => {
            if let Some(index) = position(state, &id) {
                state.remove(index);
            }
        }
        TodolistsAction::AddTodolist { todolist } => {
            state.insert(0, TodolistDomain::from(todolist));
        }
        TodolistsAction::ChangeTodolistTitle { id, title } => {
            if let Some(row) = find_mut(state, &id) {
                row.title = title;
            }
        }
        TodolistsAction::ChangeTodolistFilter { id, filter } => {
            if let Some(row) = find_mut(state, &id) {
                row.filter = filter;
            }
        }
        TodolistsAction::ChangeTodolistEntityStatus { id, entity_status } => {
            if let Some(row) = find_mut(state, &id) {
                row.entity_status = entity_status;
            }
        }
        TodolistsAction::SetTodolists { todolists } => {
            state.extend(todolists.into_iter().map(TodolistDomain::from));
        }
    }
}

fn position(state: &TodolistsState, id: &str) -> Option<usize> {
    state.iter().position(|row| row.id == id)
}

fn find_mut<'a>(state: &'a mut TodolistsState, id: &str) -> Option<&'a mut TodolistDomain> {
    state.iter_mut().find(|row| row.id == id)
}

pub fn remove_todolist(id: impl Into<String>) -> Action {
    Action::Todolists(TodolistsAction::RemoveTodolist { id: id.into() })
}

pub fn add_todolist(todolist: Todolist) -> Action {
    Action::Todolists(TodolistsAction::AddTodolist { todolist })
}

pub fn change_todolist_title(id: impl Into<String>, title: impl Into<String>) -> Action {
    Action::Todolists(TodolistsAction::ChangeTodolistTitle {
        id: id.into(),
        title: title.into(),
    })
}

pub fn change_todolist_filter(id: impl Into<String>, filter: FilterValue) -> Action {
    Action::Todolists(TodolistsAction::ChangeTodolistFilter {
        id: id.into(),
        filter,
    })
}

pub fn change_todolist_entity_status(
    id: impl Into<String>,
    entity_status: RequestStatus,
) -> Action {
    Action::Todolists(TodolistsAction::ChangeTodolistEntityStatus {
        id: id.into(),
        entity_status,
    })
}

pub fn set_todolists(todolists: Vec<Todolist>) -> Action {
    Action::Todolists(TodolistsAction::SetTodolists { todolists })
}
