use todo_types::TodolistDomain;

/// Todo-lists in display order (newest first after an add). Ids are unique
/// server-assigned strings; lookups are a linear scan.
pub type TodolistsState = Vec<TodolistDomain>;
