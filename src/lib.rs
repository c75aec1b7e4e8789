//! Coffee Focus - A state-managed HTTP server for focus session countdowns
//!
//! This library provides a countdown timer for focus sessions with a
//! draining coffee-cup level indicator and a free-text focus goal. The
//! session state machine is driven by a one-second background task and
//! exposed through a small HTTP API.

pub mod config;
pub mod display;
pub mod error;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{InvalidDurationError, MediaPlaybackError};
pub use state::AppState;
pub use api::create_router;
pub use utils::shutdown_signal;
