//! Focus session state machine
//!
//! This is the countdown controller itself: the minutes and focus-goal
//! field texts, the configured and remaining duration, the run state, and
//! the last-written status line and start-control label. Every mutation is
//! one of the named transitions below; the HTTP layer and the countdown
//! task never touch the fields directly.

use serde::{Deserialize, Serialize};

use crate::display::{CoffeeLevel, DisplayConfig};
use crate::error::InvalidDurationError;
use super::RunState;

/// Status line shown before a session has started.
pub const MSG_READY: &str = "Gotowy do rozpoczęcia sesji";
/// Status line shown while the timer is paused.
pub const MSG_PAUSED: &str = "Pauza";
/// Status line shown when the countdown completes.
pub const MSG_FINISHED: &str = "KONIEC! Świetna robota!";
/// Goal interpolated into the focus message when the field is empty.
pub const DEFAULT_FOCUS_GOAL: &str = "Twoim celu";

/// Start-control labels.
pub const LABEL_START: &str = "Start";
pub const LABEL_PAUSE: &str = "Pauza";
pub const LABEL_RESUME: &str = "Wznów";

/// Build the running status line for a focus goal.
fn focus_message(goal: &str) -> String {
    let goal = if goal.is_empty() {
        DEFAULT_FOCUS_GOAL
    } else {
        goal
    };
    format!("Skupienie na: \"{}\"", goal)
}

/// Result of one tick transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second was consumed; the countdown keeps running.
    Ticked { remaining_seconds: u64 },
    /// The tick observed zero remaining and moved the session to Finished.
    /// The caller stops the periodic timer and fires the alarm.
    Finished,
    /// The controller was not Running; nothing changed.
    Inactive,
}

/// The focus timer controller state.
///
/// Invariant: `remaining_seconds <= total_seconds`, both zero in Idle.
/// `status_message` and `start_label` are stateful outputs; they change
/// only at the transitions that write them.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub minutes_input: String,
    pub focus_goal: String,
    pub total_seconds: u64,
    pub remaining_seconds: u64,
    pub run_state: RunState,
    pub status_message: String,
    pub start_label: String,
}

/// A serializable view of the session for clients and observers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub run_state: RunState,
    pub clock: String,
    pub status_message: String,
    pub start_label: String,
    pub total_seconds: u64,
    pub remaining_seconds: u64,
    pub minutes_input: String,
    pub focus_goal: String,
    pub coffee: CoffeeLevel,
}

impl SessionState {
    /// Create the initial state, seeded with a default minutes value and
    /// reset once so the clock and cup start in their ready positions.
    pub fn new(default_minutes: u64) -> Self {
        let mut session = Self {
            minutes_input: default_minutes.to_string(),
            focus_goal: String::new(),
            total_seconds: 0,
            remaining_seconds: 0,
            run_state: RunState::Idle,
            status_message: MSG_READY.to_string(),
            start_label: LABEL_START.to_string(),
        };
        session.reset();
        session
    }

    /// Parse the minutes field as a session duration.
    ///
    /// Rejects values whose duration would not fit in `u64` seconds, so
    /// `minutes * 60` is safe at every call site.
    pub fn parse_minutes(&self) -> Result<u64, InvalidDurationError> {
        self.minutes_input
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|minutes| *minutes > 0 && *minutes <= (u64::MAX / 60) as i64)
            .map(|minutes| minutes as u64)
            .ok_or(InvalidDurationError)
    }

    /// Configure a fresh session from the minutes field.
    ///
    /// On success the full duration is loaded and the session is Paused,
    /// ready to run. On failure nothing changes.
    pub fn configure(&mut self) -> Result<(), InvalidDurationError> {
        let minutes = self.parse_minutes()?;
        self.total_seconds = minutes * 60;
        self.remaining_seconds = self.total_seconds;
        self.run_state = RunState::Paused;
        Ok(())
    }

    /// The start/pause control.
    ///
    /// Running pauses. Anything else starts, configuring a new session
    /// first when no time remains; an unusable minutes value aborts the
    /// toggle with no state change.
    pub fn toggle_start_pause(&mut self) -> Result<(), InvalidDurationError> {
        if self.run_state.is_running() {
            self.run_state = RunState::Paused;
            self.status_message = MSG_PAUSED.to_string();
            self.start_label = LABEL_RESUME.to_string();
            return Ok(());
        }

        if self.remaining_seconds == 0 {
            self.configure()?;
        }

        self.run_state = RunState::Running;
        self.start_label = LABEL_PAUSE.to_string();
        self.status_message = focus_message(&self.focus_goal);
        Ok(())
    }

    /// One second of countdown.
    ///
    /// A tick that observes zero remaining performs the Finished
    /// transition; reaching zero by decrement does not finish in the same
    /// invocation. Outside Running this is a no-op, which makes a tick
    /// racing a pause or reset harmless.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.run_state.is_running() {
            return TickOutcome::Inactive;
        }

        if self.remaining_seconds == 0 {
            self.run_state = RunState::Finished;
            self.status_message = MSG_FINISHED.to_string();
            self.start_label = LABEL_START.to_string();
            return TickOutcome::Finished;
        }

        self.remaining_seconds -= 1;
        if self.remaining_seconds > 0 {
            self.status_message = focus_message(&self.focus_goal);
        }
        TickOutcome::Ticked {
            remaining_seconds: self.remaining_seconds,
        }
    }

    /// The reset control.
    ///
    /// Reloads the full duration from the minutes field and parks the
    /// session in Paused; an unusable value empties the session to Idle
    /// instead of failing. Always returns to the ready message and the
    /// Start label.
    pub fn reset(&mut self) {
        match self.parse_minutes() {
            Ok(minutes) => {
                self.total_seconds = minutes * 60;
                self.remaining_seconds = self.total_seconds;
                self.run_state = RunState::Paused;
            }
            Err(_) => {
                self.total_seconds = 0;
                self.remaining_seconds = 0;
                self.run_state = RunState::Idle;
            }
        }
        self.status_message = MSG_READY.to_string();
        self.start_label = LABEL_START.to_string();
    }

    /// The minutes field changed.
    ///
    /// The text is stored either way, but it only takes effect through a
    /// reset when the timer is not running; a session in progress is never
    /// silently altered.
    pub fn set_minutes_input(&mut self, text: String) {
        self.minutes_input = text;
        if !self.run_state.is_running() {
            self.reset();
        }
    }

    /// The focus-goal field changed. Display-only; the next status-line
    /// write picks it up.
    pub fn set_focus_goal(&mut self, text: String) {
        self.focus_goal = text;
    }

    /// Build the client-facing view of this state.
    pub fn snapshot(&self, display: &DisplayConfig) -> SessionSnapshot {
        SessionSnapshot {
            run_state: self.run_state,
            clock: crate::display::format_clock(self.remaining_seconds),
            status_message: self.status_message.clone(),
            start_label: self.start_label.clone(),
            total_seconds: self.total_seconds,
            remaining_seconds: self.remaining_seconds,
            minutes_input: self.minutes_input.clone(),
            focus_goal: self.focus_goal.clone(),
            coffee: display.coffee_level(self.remaining_seconds, self.total_seconds),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(25)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_minutes(minutes: &str) -> SessionState {
        let mut session = SessionState::new(25);
        session.set_minutes_input(minutes.to_string());
        session
    }

    fn assert_invariant(session: &SessionState) {
        assert!(session.remaining_seconds <= session.total_seconds);
        if session.run_state == RunState::Idle {
            assert_eq!(session.total_seconds, 0);
            assert_eq!(session.remaining_seconds, 0);
        }
    }

    #[test]
    fn new_session_starts_ready_and_full() {
        let session = SessionState::new(25);
        assert_eq!(session.run_state, RunState::Paused);
        assert_eq!(session.total_seconds, 25 * 60);
        assert_eq!(session.remaining_seconds, 25 * 60);
        assert_eq!(session.status_message, MSG_READY);
        assert_eq!(session.start_label, LABEL_START);
    }

    #[test]
    fn configure_loads_full_duration() {
        for minutes in [1u64, 5, 25, 120] {
            let mut session = session_with_minutes(&minutes.to_string());
            session.configure().expect("valid minutes");
            assert_eq!(session.total_seconds, minutes * 60);
            assert_eq!(session.remaining_seconds, minutes * 60);
            assert_eq!(session.run_state, RunState::Paused);
        }
    }

    #[test]
    fn configure_rejects_unusable_minutes() {
        for input in ["0", "-5", "abc", ""] {
            let mut session = session_with_minutes("5");
            session.set_minutes_input(input.to_string());
            let before_total = session.total_seconds;
            let before_remaining = session.remaining_seconds;
            assert_eq!(session.configure(), Err(InvalidDurationError));
            assert_eq!(session.total_seconds, before_total);
            assert_eq!(session.remaining_seconds, before_remaining);
            assert_invariant(&session);
        }
    }

    #[test]
    fn configure_rejects_minutes_too_large_for_seconds() {
        let huge = "400000000000000000";
        let mut session = session_with_minutes("5");
        session.minutes_input = huge.to_string();
        assert_eq!(session.configure(), Err(InvalidDurationError));
        assert_eq!(session.total_seconds, 300);
        assert_eq!(session.remaining_seconds, 300);

        // The reset path treats the same value as unusable input.
        session.set_minutes_input(huge.to_string());
        assert_eq!(session.run_state, RunState::Idle);
        assert_eq!(session.total_seconds, 0);
        assert_invariant(&session);

        // The largest duration that still fits in seconds is accepted.
        let mut session = session_with_minutes(&(u64::MAX / 60).to_string());
        assert_eq!(session.run_state, RunState::Paused);
        assert_eq!(session.total_seconds, (u64::MAX / 60) * 60);
    }

    #[test]
    fn start_from_zero_with_bad_minutes_leaves_state_untouched() {
        let mut session = session_with_minutes("abc");
        assert_eq!(session.run_state, RunState::Idle);
        let before = session.clone();

        assert_eq!(session.toggle_start_pause(), Err(InvalidDurationError));
        assert_eq!(session.run_state, before.run_state);
        assert_eq!(session.remaining_seconds, before.remaining_seconds);
        assert_eq!(session.status_message, before.status_message);
        assert_eq!(session.start_label, before.start_label);
    }

    #[test]
    fn start_runs_with_focus_message_and_pause_label() {
        let mut session = session_with_minutes("5");
        session.set_focus_goal("raport".to_string());
        session.toggle_start_pause().expect("start");

        assert_eq!(session.run_state, RunState::Running);
        assert_eq!(session.start_label, LABEL_PAUSE);
        assert_eq!(session.status_message, "Skupienie na: \"raport\"");
    }

    #[test]
    fn empty_goal_falls_back_to_default() {
        let mut session = session_with_minutes("5");
        session.toggle_start_pause().expect("start");
        assert_eq!(
            session.status_message,
            format!("Skupienie na: \"{}\"", DEFAULT_FOCUS_GOAL)
        );
    }

    #[test]
    fn pause_then_resume_keeps_remaining() {
        let mut session = session_with_minutes("5");
        session.toggle_start_pause().expect("start");
        session.tick();
        session.tick();
        let remaining = session.remaining_seconds;

        session.toggle_start_pause().expect("pause");
        assert_eq!(session.run_state, RunState::Paused);
        assert_eq!(session.status_message, MSG_PAUSED);
        assert_eq!(session.start_label, LABEL_RESUME);
        assert_eq!(session.remaining_seconds, remaining);

        session.toggle_start_pause().expect("resume");
        assert_eq!(session.run_state, RunState::Running);
        assert_eq!(session.remaining_seconds, remaining);
    }

    #[test]
    fn tick_drains_one_second_at_a_time() {
        let mut session = session_with_minutes("1");
        session.toggle_start_pause().expect("start");

        for expected in (0..60).rev() {
            let outcome = session.tick();
            assert_eq!(
                outcome,
                TickOutcome::Ticked {
                    remaining_seconds: expected
                }
            );
            assert_invariant(&session);
        }

        // Still Running at zero; the next tick performs the transition.
        assert_eq!(session.run_state, RunState::Running);
        assert_eq!(session.tick(), TickOutcome::Finished);
        assert_eq!(session.run_state, RunState::Finished);
        assert_eq!(session.remaining_seconds, 0);
    }

    #[test]
    fn one_minute_session_runs_to_completion() {
        let mut session = session_with_minutes("1");
        session.toggle_start_pause().expect("start");

        let mut invocations = 0;
        loop {
            invocations += 1;
            if session.tick() == TickOutcome::Finished {
                break;
            }
            assert!(invocations <= 61, "countdown never finished");
        }

        assert_eq!(invocations, 61);
        assert_eq!(session.run_state, RunState::Finished);
        assert_eq!(session.status_message, MSG_FINISHED);
        assert_eq!(session.start_label, LABEL_START);
        let snapshot = session.snapshot(&crate::display::DisplayConfig {
            cup_height: 130.0,
            cup_y: 65.0,
        });
        assert_eq!(snapshot.clock, "00:00");
        assert_eq!(snapshot.coffee.fraction, 0.0);
    }

    #[test]
    fn tick_outside_running_is_inactive() {
        let mut session = session_with_minutes("5");
        assert_eq!(session.tick(), TickOutcome::Inactive);
        assert_eq!(session.remaining_seconds, 300);

        session.toggle_start_pause().expect("start");
        session.toggle_start_pause().expect("pause");
        assert_eq!(session.tick(), TickOutcome::Inactive);
        assert_eq!(session.remaining_seconds, 300);
    }

    #[test]
    fn reset_mid_session_restores_the_full_duration() {
        let mut session = session_with_minutes("5");
        session.toggle_start_pause().expect("start");
        for _ in 0..10 {
            session.tick();
        }
        assert_eq!(session.remaining_seconds, 290);

        session.reset();
        assert_eq!(session.run_state, RunState::Paused);
        assert_eq!(session.remaining_seconds, 300);
        assert_eq!(session.status_message, MSG_READY);
        assert_eq!(session.start_label, LABEL_START);

        let snapshot = session.snapshot(&crate::display::DisplayConfig {
            cup_height: 130.0,
            cup_y: 65.0,
        });
        assert_eq!(snapshot.clock, "05:00");
        assert_eq!(snapshot.coffee.fraction, 1.0);
    }

    #[test]
    fn reset_with_bad_minutes_empties_the_session() {
        let mut session = session_with_minutes("5");
        session.set_minutes_input("nie".to_string());
        assert_eq!(session.run_state, RunState::Idle);
        assert_eq!(session.total_seconds, 0);
        assert_eq!(session.remaining_seconds, 0);
        assert_invariant(&session);
    }

    #[test]
    fn minutes_change_is_ignored_while_running() {
        let mut session = session_with_minutes("5");
        session.toggle_start_pause().expect("start");
        for _ in 0..10 {
            session.tick();
        }

        session.set_minutes_input("10".to_string());
        assert_eq!(session.run_state, RunState::Running);
        assert_eq!(session.total_seconds, 300);
        assert_eq!(session.remaining_seconds, 290);

        // The new value takes effect at the next reset.
        session.reset();
        assert_eq!(session.total_seconds, 600);
        assert_eq!(session.remaining_seconds, 600);
    }

    #[test]
    fn minutes_change_while_paused_resets_immediately() {
        let mut session = session_with_minutes("5");
        session.set_minutes_input("10".to_string());
        assert_eq!(session.run_state, RunState::Paused);
        assert_eq!(session.remaining_seconds, 600);
    }

    #[test]
    fn start_after_finish_configures_a_new_session() {
        let mut session = session_with_minutes("1");
        session.toggle_start_pause().expect("start");
        while session.tick() != TickOutcome::Finished {}

        session.toggle_start_pause().expect("restart");
        assert_eq!(session.run_state, RunState::Running);
        assert_eq!(session.remaining_seconds, 60);
    }

    #[test]
    fn status_line_is_not_rewritten_on_the_zero_tick() {
        let mut session = session_with_minutes("1");
        session.set_focus_goal("kod".to_string());
        session.toggle_start_pause().expect("start");
        for _ in 0..60 {
            session.tick();
        }

        // remaining just hit zero; the focus message stays until the
        // finishing tick writes the completion message.
        assert_eq!(session.remaining_seconds, 0);
        assert_eq!(session.status_message, "Skupienie na: \"kod\"");
    }
}
