//! State slices (state/update/thunks per slice).
//!
//! Each slice owns its subtree of `RootState`. Cross-slice effects only
//! happen by dispatching another slice's action from a thunk.

pub mod app;
pub mod auth;
pub mod todolists;
