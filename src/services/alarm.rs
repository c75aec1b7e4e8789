//! Completion sound playback
//!
//! Played at most once per completed session through an external player
//! process. Playback is best effort: every failure is logged by the caller
//! and never reaches the client.

use tokio::process::Command;
use tracing::info;

use crate::error::MediaPlaybackError;

/// Player command and audio file for the completion sound.
#[derive(Debug, Clone)]
pub struct AlarmConfig {
    pub player: String,
    pub file: String,
}

/// Play the completion sound once, waiting for the player to exit.
pub async fn play_alarm(alarm: &AlarmConfig) -> Result<(), MediaPlaybackError> {
    info!("Playing completion sound: {} {}", alarm.player, alarm.file);

    let output = Command::new(&alarm.player)
        .arg(&alarm.file)
        .output()
        .await
        .map_err(|e| MediaPlaybackError(format!("failed to run {}: {}", alarm.player, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(MediaPlaybackError(format!(
            "{} exited with {}: {}",
            alarm.player,
            output.status,
            stderr.trim()
        )));
    }

    Ok(())
}

/// Check whether the configured player can be spawned at all.
///
/// A missing player only degrades the completion sound, so callers warn
/// and continue instead of refusing to start.
pub async fn check_player_available(alarm: &AlarmConfig) -> Result<(), MediaPlaybackError> {
    Command::new(&alarm.player)
        .arg("--version")
        .output()
        .await
        .map_err(|_| {
            MediaPlaybackError(format!(
                "{} is not available, session completion will be silent",
                alarm.player
            ))
        })?;

    info!("Alarm player {} is available", alarm.player);
    Ok(())
}
