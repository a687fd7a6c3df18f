//! Todo-list orchestration.
//!
//! Only `fetch_todolists` reports failures into the app slice. The other
//! routines only log a non-zero result code and hand transport failures back
//! to the caller without dispatching anything further, so the global status
//! is left as it was when the call failed.

use anyhow::{Context, Result};
use todo_types::{ApiResponse, RequestStatus};

use super::actions;
use crate::api::TodolistsApi;
use crate::error_utils::{GENERIC_ERROR_MESSAGE, handle_server_network_error};
use crate::features::app::set_app_status;
use crate::store::Dispatch;

/// Loads the todo-lists and appends them to the collection.
pub async fn fetch_todolists<A, D>(api: &A, dispatch: &D)
where
    A: TodolistsApi,
    D: Dispatch + ?Sized,
{
    dispatch.dispatch(set_app_status(RequestStatus::Loading));
    match api.get_todolists().await {
        Ok(todolists) => {
            tracing::debug!(count = todolists.len(), "fetched todo-lists");
            dispatch.dispatch(actions::set_todolists(todolists));
            dispatch.dispatch(set_app_status(RequestStatus::Succeeded));
        }
        Err(err) => handle_server_network_error(&err, dispatch),
    }
}

/// Deletes a todo-list, marking its row busy while the request runs.
pub async fn remove_todolist<A, D>(api: &A, dispatch: &D, id: &str) -> Result<()>
where
    A: TodolistsApi,
    D: Dispatch + ?Sized,
{
    dispatch.dispatch(set_app_status(RequestStatus::Loading));
    dispatch.dispatch(actions::change_todolist_entity_status(
        id,
        RequestStatus::Loading,
    ));

    let res = api.delete_todolist(id).await?;
    warn_if_rejected(&res, "delete", id);
    tracing::debug!(id, result_code = res.result_code, "deleted todo-list");

    dispatch.dispatch(actions::remove_todolist(id));
    dispatch.dispatch(set_app_status(RequestStatus::Succeeded));
    Ok(())
}

/// Creates a todo-list and prepends the server's record.
pub async fn add_todolist<A, D>(api: &A, dispatch: &D, title: &str) -> Result<()>
where
    A: TodolistsApi,
    D: Dispatch + ?Sized,
{
    dispatch.dispatch(set_app_status(RequestStatus::Loading));

    let res = api.create_todolist(title).await?;
    warn_if_rejected(&res, "create", title);
    let item = res.data.item.with_context(|| {
        format!(
            "create todo-list response has no item (result code {})",
            res.result_code
        )
    })?;
    tracing::debug!(id = %item.id, "created todo-list");

    dispatch.dispatch(actions::add_todolist(item));
    dispatch.dispatch(set_app_status(RequestStatus::Succeeded));
    Ok(())
}

/// Renames a todo-list on the server, then locally.
pub async fn change_todolist_title<A, D>(api: &A, dispatch: &D, id: &str, title: &str) -> Result<()>
where
    A: TodolistsApi,
    D: Dispatch + ?Sized,
{
    let res = api.update_todolist(id, title).await?;
    warn_if_rejected(&res, "rename", id);
    tracing::debug!(id, result_code = res.result_code, "renamed todo-list");

    dispatch.dispatch(actions::change_todolist_title(id, title));
    Ok(())
}

/// Surfaces a non-zero result code in the log. State updates go ahead
/// regardless.
fn warn_if_rejected<T>(res: &ApiResponse<T>, request: &str, subject: &str) {
    if !res.is_success() {
        let error = res.first_message().unwrap_or(GENERIC_ERROR_MESSAGE);
        tracing::warn!(
            request,
            subject,
            result_code = res.result_code,
            error = %error,
            "server rejected todo-list request"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::mpsc;
    use todo_types::{CreateTodolistData, TodolistDomain};

    use super::*;
    use crate::api::test_fixtures::{FakeApi, todolist};
    use crate::store::{Action, RootState, Store};

    fn seeded_store() -> Store {
        let mut state = RootState::default();
        state.todolists = vec![
            TodolistDomain::from(todolist("1", "Work")),
            TodolistDomain::from(todolist("2", "Home")),
        ];
        Store::with_state(state)
    }

    async fn drain(mut rx: mpsc::UnboundedReceiver<Action>) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Some(action) = rx.recv().await {
            actions.push(action);
        }
        actions
    }

    #[tokio::test]
    async fn test_fetch_appends_and_succeeds() {
        let api = FakeApi {
            todolists: Ok(vec![todolist("1", "Work"), todolist("2", "Home")]),
            ..Default::default()
        };
        let store = Store::new();

        fetch_todolists(&api, &store).await;

        let state = store.state();
        assert_eq!(state.todolists.len(), 2);
        assert_eq!(state.todolists[0].title, "Work");
        assert_eq!(state.app.status, RequestStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_fetch_twice_duplicates_rows() {
        let api = FakeApi {
            todolists: Ok(vec![todolist("1", "X")]),
            ..Default::default()
        };
        let store = Store::new();

        fetch_todolists(&api, &store).await;
        fetch_todolists(&api, &store).await;

        let ids: Vec<_> = store
            .state()
            .todolists
            .iter()
            .map(|row| row.id.clone())
            .collect();
        assert_eq!(ids, vec!["1", "1"]);
    }

    #[tokio::test]
    async fn test_fetch_network_failure_reports_error() {
        let api = FakeApi {
            todolists: Err("timed out".to_string()),
            ..Default::default()
        };
        let store = Store::new();

        fetch_todolists(&api, &store).await;

        let state = store.state();
        assert!(state.todolists.is_empty());
        assert_eq!(state.app.error.as_deref(), Some("timed out"));
        assert_eq!(state.app.status, RequestStatus::Failed);
    }

    #[tokio::test]
    async fn test_remove_marks_row_then_removes() {
        let api = FakeApi::default();
        let (tx, rx) = mpsc::unbounded_channel::<Action>();

        remove_todolist(&api, &tx, "1").await.unwrap();
        drop(tx);

        assert_eq!(
            drain(rx).await,
            vec![
                set_app_status(RequestStatus::Loading),
                actions::change_todolist_entity_status("1", RequestStatus::Loading),
                actions::remove_todolist("1"),
                set_app_status(RequestStatus::Succeeded),
            ]
        );
        assert_eq!(api.calls(), vec!["delete_todolist 1"]);
    }

    #[tokio::test]
    async fn test_remove_ignores_result_code() {
        let api = FakeApi {
            delete: Ok(ApiResponse::failed(1, vec!["not yours".to_string()])),
            ..Default::default()
        };
        let store = seeded_store();

        remove_todolist(&api, &store, "1").await.unwrap();

        let state = store.state();
        assert_eq!(state.todolists.len(), 1);
        assert_eq!(state.todolists[0].id, "2");
        assert_eq!(state.app.status, RequestStatus::Succeeded);
        assert_eq!(state.app.error, None);
    }

    #[tokio::test]
    async fn test_remove_transport_failure_leaves_row_loading() {
        let api = FakeApi {
            delete: Err("connection reset".to_string()),
            ..Default::default()
        };
        let store = seeded_store();

        let err = remove_todolist(&api, &store, "1").await.unwrap_err();

        assert!(err.to_string().contains("connection reset"));
        let state = store.state();
        assert_eq!(state.todolists.len(), 2);
        assert_eq!(state.todolists[0].entity_status, RequestStatus::Loading);
        assert_eq!(state.app.status, RequestStatus::Loading);
        assert_eq!(state.app.error, None);
    }

    #[tokio::test]
    async fn test_add_prepends_created_item() {
        let api = FakeApi {
            create: Ok(ApiResponse::ok(CreateTodolistData {
                item: Some(todolist("3", "Trip")),
            })),
            ..Default::default()
        };
        let store = seeded_store();

        add_todolist(&api, &store, "Trip").await.unwrap();

        let state = store.state();
        let ids: Vec<_> = state.todolists.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert_eq!(state.app.status, RequestStatus::Succeeded);
        assert_eq!(api.calls(), vec!["create_todolist Trip"]);
    }

    #[tokio::test]
    async fn test_add_without_item_is_error() {
        let api = FakeApi {
            create: Ok(ApiResponse::failed(1, vec!["Title is too long".to_string()])),
            ..Default::default()
        };
        let store = seeded_store();

        let err = add_todolist(&api, &store, "x").await.unwrap_err();

        assert!(err.to_string().contains("has no item"));
        let state = store.state();
        assert_eq!(state.todolists.len(), 2);
        assert_eq!(state.app.status, RequestStatus::Loading);
    }

    #[tokio::test]
    async fn test_change_title_updates_row_without_status() {
        let api = FakeApi::default();
        let (tx, rx) = mpsc::unbounded_channel::<Action>();

        change_todolist_title(&api, &tx, "2", "Chores").await.unwrap();
        drop(tx);

        assert_eq!(
            drain(rx).await,
            vec![actions::change_todolist_title("2", "Chores")]
        );
        assert_eq!(api.calls(), vec!["update_todolist 2 Chores"]);
    }

    #[tokio::test]
    async fn test_change_title_transport_failure_keeps_title() {
        let api = FakeApi {
            update: Err("offline".to_string()),
            ..Default::default()
        };
        let store = seeded_store();

        assert!(change_todolist_title(&api, &store, "2", "Chores").await.is_err());
        assert_eq!(store.state().todolists[1].title, "Home");
    }

    #[tokio::test]
    async fn test_concurrent_removes_through_inbox() {
        let api = Arc::new(FakeApi::default());
        let store = Arc::new(seeded_store());
        let (tx, rx) = mpsc::unbounded_channel::<Action>();

        let first = tokio::spawn({
            let api = Arc::clone(&api);
            let tx = tx.clone();
            async move { remove_todolist(api.as_ref(), &tx, "1").await }
        });
        let second = tokio::spawn({
            let api = Arc::clone(&api);
            let tx = tx.clone();
            async move { remove_todolist(api.as_ref(), &tx, "2").await }
        });
        drop(tx);

        first.await.unwrap().unwrap();
        second.await.unwrap().unwrap();
        store.run_inbox(rx).await;

        let state = store.state();
        assert!(state.todolists.is_empty());
        assert_eq!(state.app.status, RequestStatus::Succeeded);
    }
}
