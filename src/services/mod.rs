//! External side effects
//!
//! The only one this server has is the best-effort completion sound.

pub mod alarm;

// Re-export main types and functions
pub use alarm::{check_player_available, play_alarm, AlarmConfig};
