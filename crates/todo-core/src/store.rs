//! Root state, action routing and the store.
//!
//! ## State Hierarchy
//!
//! ```text
//! RootState
//! ├── app: AppState            (global status, error, initialized flag)
//! ├── auth: AuthState          (login flag)
//! └── todolists: TodolistsState (ordered todo-lists)
//! ```
//!
//! All mutations go through [`reduce`]. Thunks never touch state directly:
//! they receive a [`Dispatch`] and send actions through it.
//!
//! ## Inbox Pattern
//!
//! Thunks running on other tasks can dispatch into an
//! `mpsc::UnboundedSender<Action>`; [`Store::run_inbox`] drains the receiver
//! and applies the actions in arrival order.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{mpsc, watch};

use crate::features::app::{self, AppAction, AppState};
use crate::features::auth::{self, AuthAction, AuthState};
use crate::features::todolists::{self, TodolistsAction, TodolistsState};

/// The whole client-side state tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RootState {
    pub app: AppState,
    pub auth: AuthState,
    pub todolists: TodolistsState,
}

/// Every action the store accepts, tagged by owning slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    App(AppAction),
    Auth(AuthAction),
    Todolists(TodolistsAction),
}

impl From<AppAction> for Action {
    fn from(action: AppAction) -> Self {
        Action::App(action)
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

impl From<TodolistsAction> for Action {
    fn from(action: TodolistsAction) -> Self {
        Action::Todolists(action)
    }
}

/// Routes an action to the slice that owns it.
pub fn reduce(state: &mut RootState, action: Action) {
    match action {
        Action::App(action) => app::reduce(&mut state.app, action),
        Action::Auth(action) => auth::reduce(&mut state.auth, action),
        Action::Todolists(action) => todolists::reduce(&mut state.todolists, action),
    }
}

/// Accepts actions on behalf of a state container.
pub trait Dispatch {
    fn dispatch(&self, action: Action);
}

impl<D: Dispatch + ?Sized> Dispatch for Arc<D> {
    fn dispatch(&self, action: Action) {
        (**self).dispatch(action);
    }
}

impl Dispatch for mpsc::UnboundedSender<Action> {
    fn dispatch(&self, action: Action) {
        if self.send(action).is_err() {
            tracing::warn!("inbox closed, action dropped");
        }
    }
}

/// In-memory state container.
///
/// Each dispatch is applied atomically and then published to subscribers.
/// Share it by reference (or `Arc`) between concurrently running thunks.
#[derive(Debug)]
pub struct Store {
    state: watch::Sender<RootState>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(RootState::default())
    }

    pub fn with_state(state: RootState) -> Self {
        Self {
            state: watch::Sender::new(state),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> RootState {
        self.state.borrow().clone()
    }

    /// Reads part of the state without cloning the whole tree.
    pub fn select<R>(&self, f: impl FnOnce(&RootState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Receiver that observes every state change after it is applied.
    pub fn subscribe(&self) -> watch::Receiver<RootState> {
        self.state.subscribe()
    }

    /// Applies actions from an inbox until every sender is dropped.
    pub async fn run_inbox(&self, mut inbox: mpsc::UnboundedReceiver<Action>) {
        while let Some(action) = inbox.recv().await {
            self.dispatch(action);
        }
    }
}

impl Dispatch for Store {
    fn dispatch(&self, action: Action) {
        tracing::debug!(?action, "dispatch");
        self.state.send_modify(|state| reduce(state, action));
    }
}
