//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::warn;

use crate::config::Config;
use crate::display::DisplayConfig;
use crate::error::InvalidDurationError;
use crate::services::AlarmConfig;

use super::{RunState, SessionSnapshot, SessionState, TickOutcome};

/// Main application state that owns the session and its observers
#[derive(Debug)]
pub struct AppState {
    /// The focus session state machine
    pub session: Arc<Mutex<SessionState>>,
    /// Injected display geometry and alarm configuration
    pub display: DisplayConfig,
    pub alarm: AlarmConfig,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Run-state changes, watched by the countdown task
    pub run_state_tx: watch::Sender<RunState>,
    /// Snapshot updates for observers
    pub snapshot_tx: watch::Sender<SessionSnapshot>,
    /// Keep receivers alive to prevent channel closure
    pub _run_state_rx: watch::Receiver<RunState>,
    pub _snapshot_rx: watch::Receiver<SessionSnapshot>,
}

impl AppState {
    /// Create a new AppState from the parsed configuration.
    ///
    /// The session performs its initial reset here, so the server comes up
    /// with the default minutes loaded and a full cup before any request.
    pub fn new(config: &Config) -> Self {
        let display = config.display_config();
        let session = SessionState::new(config.minutes);
        let (run_state_tx, run_state_rx) = watch::channel(session.run_state);
        let (snapshot_tx, snapshot_rx) = watch::channel(session.snapshot(&display));

        Self {
            session: Arc::new(Mutex::new(session)),
            display,
            alarm: config.alarm_config(),
            start_time: Instant::now(),
            port: config.port,
            host: config.host.clone(),
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            run_state_tx,
            snapshot_tx,
            _run_state_rx: run_state_rx,
            _snapshot_rx: snapshot_rx,
        }
    }

    /// Apply a transition to the session and notify observers.
    ///
    /// Locks the session, applies the closure, snapshots the result, then
    /// releases the lock before recording the action and notifying the
    /// run-state and snapshot watchers.
    pub fn with_session<T, F>(&self, action: &str, updater: F) -> Result<(T, SessionSnapshot), String>
    where
        F: FnOnce(&mut SessionState) -> T,
    {
        let mut session = self.session.lock()
            .map_err(|e| format!("Failed to lock session state: {}", e))?;

        let result = updater(&mut *session);
        let run_state = session.run_state;
        let snapshot = session.snapshot(&self.display);
        drop(session); // Release the lock early

        // Update last action tracking
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        // Notify the countdown task and any snapshot watchers
        if let Err(e) = self.run_state_tx.send(run_state) {
            warn!("Failed to send run-state change notification: {}", e);
        }
        if let Err(e) = self.snapshot_tx.send(snapshot.clone()) {
            warn!("Failed to send snapshot update: {}", e);
        }

        Ok((result, snapshot))
    }

    /// Toggle the start/pause control.
    ///
    /// The outer error is a lock failure; the inner result reports whether
    /// the toggle was accepted or rejected for an unusable duration.
    pub fn toggle_start_pause(
        &self,
    ) -> Result<(Result<(), InvalidDurationError>, SessionSnapshot), String> {
        self.with_session("start", |session| session.toggle_start_pause())
    }

    /// Reset the session from the current minutes field.
    pub fn reset(&self) -> Result<SessionSnapshot, String> {
        let ((), snapshot) = self.with_session("reset", |session| session.reset())?;
        Ok(snapshot)
    }

    /// Store a new minutes-field value; resets unless a session is running.
    pub fn set_minutes_input(&self, text: String) -> Result<SessionSnapshot, String> {
        let ((), snapshot) =
            self.with_session("minutes", |session| session.set_minutes_input(text))?;
        Ok(snapshot)
    }

    /// Store a new focus-goal value.
    pub fn set_focus_goal(&self, text: String) -> Result<SessionSnapshot, String> {
        let ((), snapshot) =
            self.with_session("focus-goal", |session| session.set_focus_goal(text))?;
        Ok(snapshot)
    }

    /// Apply one countdown tick.
    ///
    /// Called only by the countdown task; ticks are not user actions, so
    /// last-action tracking is left alone. The run-state watchers are only
    /// notified when the tick changed the phase.
    pub fn apply_tick(&self) -> Result<(TickOutcome, SessionSnapshot), String> {
        let mut session = self.session.lock()
            .map_err(|e| format!("Failed to lock session state: {}", e))?;

        let outcome = session.tick();
        let run_state = session.run_state;
        let snapshot = session.snapshot(&self.display);
        drop(session);

        if outcome == TickOutcome::Finished {
            if let Err(e) = self.run_state_tx.send(run_state) {
                warn!("Failed to send run-state change notification: {}", e);
            }
        }
        if outcome != TickOutcome::Inactive {
            if let Err(e) = self.snapshot_tx.send(snapshot.clone()) {
                warn!("Failed to send snapshot update: {}", e);
            }
        }

        Ok((outcome, snapshot))
    }

    /// Get the current session snapshot
    pub fn get_snapshot(&self) -> Result<SessionSnapshot, String> {
        self.session.lock()
            .map(|session| session.snapshot(&self.display))
            .map_err(|e| format!("Failed to lock session state: {}", e))
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
