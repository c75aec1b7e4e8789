//! Utility functions

pub mod signals;

pub use signals::shutdown_signal;
