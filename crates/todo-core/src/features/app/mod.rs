//! App status slice: global request status, error message and the
//! initialization flag.

mod state;
mod thunks;
mod update;

pub use state::AppState;
pub use thunks::initialize_app;
pub use update::{AppAction, reduce, set_app_error, set_app_initialized, set_app_status};
