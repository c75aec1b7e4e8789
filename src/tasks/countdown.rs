//! Countdown background task

use std::{sync::Arc, time::Duration};
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use crate::{
    services::play_alarm,
    state::{AppState, RunState, TickOutcome},
};

/// Background task that drives the one-second countdown.
///
/// Exactly one of these runs for the lifetime of the server, and its
/// interval exists only while the controller is Running, so at most one
/// periodic timer is ever live. Pausing or resetting notifies the
/// run-state channel, which wins the `select!` and drops the interval
/// before another tick can fire; a tick that loses that race is still a
/// no-op because the session re-checks its phase under the lock.
pub async fn countdown_task(state: Arc<AppState>) {
    info!("Starting countdown task");

    let mut run_state_rx = state.run_state_tx.subscribe();

    loop {
        // Wait for the controller to enter Running
        while *run_state_rx.borrow_and_update() != RunState::Running {
            if run_state_rx.changed().await.is_err() {
                info!("Run-state channel closed, stopping countdown task");
                return;
            }
        }

        debug!("Session running, starting one-second interval");

        let mut interval = tokio::time::interval(Duration::from_secs(1));
        interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
        // The first interval tick fires immediately; the countdown starts
        // one second after the session does.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    match state.apply_tick() {
                        Ok((TickOutcome::Ticked { remaining_seconds }, _)) => {
                            debug!("Tick: {} seconds remaining", remaining_seconds);
                        }
                        Ok((TickOutcome::Finished, _)) => {
                            info!("Session complete");

                            // Best-effort completion sound; spawned so a
                            // slow player never delays the next session.
                            let alarm = state.alarm.clone();
                            tokio::spawn(async move {
                                if let Err(e) = play_alarm(&alarm).await {
                                    warn!("{}", e);
                                }
                            });

                            break;
                        }
                        Ok((TickOutcome::Inactive, _)) => {
                            debug!("Tick arrived after the session stopped");
                            break;
                        }
                        Err(e) => {
                            error!("Failed to apply tick: {}", e);
                            break;
                        }
                    }
                }

                changed = run_state_rx.changed() => {
                    if changed.is_err() {
                        info!("Run-state channel closed, stopping countdown task");
                        return;
                    }
                    if *run_state_rx.borrow() != RunState::Running {
                        debug!("Session paused or reset, dropping interval");
                        break;
                    }
                }
            }
        }
    }
}
