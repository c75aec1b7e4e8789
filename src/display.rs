//! Countdown display computation
//!
//! Formats the remaining time as a clock string and maps it onto the
//! coffee-cup level indicator. The cup geometry comes from configuration
//! at construction time, never from the presentation layer.

use serde::{Deserialize, Serialize};

/// Geometry of the coffee-cup indicator.
///
/// `cup_height` is the height of a full cup; `cup_y` is the vertical
/// offset of the liquid band when the cup is full. The y axis grows
/// downward, so a lower level sits at a larger offset.
#[derive(Debug, Clone, Copy)]
pub struct DisplayConfig {
    pub cup_height: f64,
    pub cup_y: f64,
}

/// Computed attributes of the coffee-level indicator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoffeeLevel {
    /// Remaining time over total time, 1.0 when no session is configured.
    pub fraction: f64,
    pub height: f64,
    pub y: f64,
}

impl DisplayConfig {
    /// Map remaining/total seconds onto the indicator.
    ///
    /// The band shrinks from the top: its height scales with the fraction
    /// and its offset drops by the height that was lost.
    pub fn coffee_level(&self, remaining_seconds: u64, total_seconds: u64) -> CoffeeLevel {
        let fraction = if total_seconds > 0 {
            remaining_seconds as f64 / total_seconds as f64
        } else {
            1.0
        };

        let height = self.cup_height * fraction;
        let y = self.cup_y + (self.cup_height - height);

        CoffeeLevel {
            fraction,
            height,
            y,
        }
    }
}

/// Format remaining seconds as `MM:SS`.
///
/// Both fields are zero-padded to two digits; the minutes field grows
/// beyond two digits for long sessions.
pub fn format_clock(remaining_seconds: u64) -> String {
    let minutes = remaining_seconds / 60;
    let seconds = remaining_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DisplayConfig {
        DisplayConfig {
            cup_height: 130.0,
            cup_y: 65.0,
        }
    }

    #[test]
    fn clock_pads_minutes_and_seconds() {
        assert_eq!(format_clock(125), "02:05");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn clock_minutes_grow_past_two_digits() {
        assert_eq!(format_clock(120 * 60), "120:00");
    }

    #[test]
    fn halfway_session_is_half_a_cup() {
        let level = config().coffee_level(300, 600);
        assert_eq!(level.fraction, 0.5);
        assert_eq!(level.height, 65.0);
        assert_eq!(level.y, 65.0 + 65.0);
    }

    #[test]
    fn unconfigured_session_shows_a_full_cup() {
        let level = config().coffee_level(0, 0);
        assert_eq!(level.fraction, 1.0);
        assert_eq!(level.height, 130.0);
        assert_eq!(level.y, 65.0);
    }

    #[test]
    fn empty_session_shows_an_empty_cup() {
        let level = config().coffee_level(0, 600);
        assert_eq!(level.fraction, 0.0);
        assert_eq!(level.height, 0.0);
        assert_eq!(level.y, 65.0 + 130.0);
    }

    #[test]
    fn fraction_is_independent_of_geometry() {
        let other = DisplayConfig {
            cup_height: 40.0,
            cup_y: 10.0,
        };
        assert_eq!(other.coffee_level(300, 600).fraction, 0.5);
    }
}
