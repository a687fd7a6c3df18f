//! Auth slice: login flag plus login/logout orchestration.

mod state;
mod thunks;
mod update;

pub use state::AuthState;
pub use thunks::{login, logout};
pub use update::{AuthAction, reduce, set_is_logged_in};
