//! Configuration and CLI argument handling

use clap::Parser;

use crate::display::DisplayConfig;
use crate::services::AlarmConfig;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "coffee-focus")]
#[command(about = "A state-managed HTTP server for coffee-cup focus session timers")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20870")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Initial value of the minutes field
    #[arg(short, long, default_value = "25")]
    pub minutes: u64,

    /// External player used for the completion sound
    #[arg(long, default_value = "mpv")]
    pub alarm_player: String,

    /// Audio file played when a session completes
    #[arg(long, default_value = "alarm.mp3")]
    pub alarm_file: String,

    /// Height of a full coffee-cup indicator
    #[arg(long, default_value = "130.0")]
    pub cup_height: f64,

    /// Vertical offset of the liquid band when the cup is full
    #[arg(long, default_value = "65.0")]
    pub cup_y: f64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Indicator geometry injected into the display computation
    pub fn display_config(&self) -> DisplayConfig {
        DisplayConfig {
            cup_height: self.cup_height,
            cup_y: self.cup_y,
        }
    }

    /// Player command and audio file for the completion sound
    pub fn alarm_config(&self) -> AlarmConfig {
        AlarmConfig {
            player: self.alarm_player.clone(),
            file: self.alarm_file.clone(),
        }
    }
}
