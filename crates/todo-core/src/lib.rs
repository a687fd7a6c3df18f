//! Core todos library (store, slices, API client, config).

pub mod api;
pub mod config;
pub mod error_utils;
pub mod features;
pub mod logging;
pub mod store;

pub use store::{Action, Dispatch, RootState, Store};
