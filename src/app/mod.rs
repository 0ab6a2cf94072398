//! Application module
//!
//! This module contains the application state, its configuration, and the
//! context object handed to every UI callback.

pub mod config;
mod context;
mod state;

pub use context::AppContext;
pub use state::AppState;
