//! State management module
//!
//! This module contains the focus session state machine and the shared
//! application state that wraps it.

pub mod run_state;
pub mod session;
pub mod app_state;

// Re-export main types
pub use run_state::RunState;
pub use session::{SessionSnapshot, SessionState, TickOutcome};
pub use app_state::AppState;
