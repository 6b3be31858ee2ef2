//! Countdown background task

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, Instant},
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::{
    display::{DisplaySurface, ALERT_COLOR},
    state::{TimerState, EXPIRED_TEXT},
};

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Invoked on every tick spent at or below the warning threshold.
pub type WarningCallback = Box<dyn FnMut() + Send>;

/// Invoked exactly once when the countdown expires. A returned error is
/// logged and swallowed; it never unwinds the expiry that already happened.
pub type TimeoutCallback = Box<dyn FnOnce() -> anyhow::Result<()> + Send>;

/// How the countdown task left its tick loop.
enum Outcome {
    Expired,
    Stopped,
}

/// Handle to a running countdown.
///
/// Dropping the handle does not cancel the countdown; it keeps ticking to
/// expiry unless [`stop`](CountdownHandle::stop) is called.
pub struct CountdownHandle {
    cancel: CancellationToken,
    state_rx: watch::Receiver<TimerState>,
    task: Option<JoinHandle<()>>,
    started_at: DateTime<Utc>,
}

impl CountdownHandle {
    /// Stop the countdown before it expires. Idempotent, and a no-op once
    /// the countdown has already expired.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Get the current state snapshot
    pub fn state(&self) -> TimerState {
        *self.state_rx.borrow()
    }

    /// Watch state snapshots as they are published each tick
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.state_rx.clone()
    }

    /// When the countdown was started
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Wait until the countdown task has wound down, after expiry or an
    /// explicit stop. Safe to call again once it has returned.
    pub async fn finished(&mut self) {
        if let Some(task) = self.task.as_mut() {
            if let Err(e) = task.await {
                error!("Countdown task failed: {}", e);
            }
        } else {
            return;
        }
        self.task = None;
    }
}

/// Start a countdown of `duration_seconds`, driving `display` once per
/// second until expiry or an explicit stop.
///
/// The first tick fires one second after this call. The duration is not
/// validated: a negative value reaches the expiry branch on the first tick.
/// Must be called from within a tokio runtime.
pub fn start_countdown<D>(
    duration_seconds: i64,
    display: D,
    on_warning: Option<WarningCallback>,
    on_timeout: Option<TimeoutCallback>,
) -> CountdownHandle
where
    D: DisplaySurface + Send + 'static,
{
    info!("Starting countdown for {} seconds", duration_seconds);

    let cancel = CancellationToken::new();
    let (state_tx, state_rx) = watch::channel(TimerState::running(duration_seconds));

    let task = tokio::spawn(countdown_task(
        duration_seconds,
        display,
        on_warning,
        on_timeout,
        state_tx,
        cancel.clone(),
    ));

    CountdownHandle {
        cancel,
        state_rx,
        task: Some(task),
        started_at: Utc::now(),
    }
}

/// The tick loop. Owns the interval, the display, the callbacks, and the
/// counter; nothing here is shared, so ticks never race each other.
async fn countdown_task<D>(
    mut remaining: i64,
    mut display: D,
    mut on_warning: Option<WarningCallback>,
    on_timeout: Option<TimeoutCallback>,
    state_tx: watch::Sender<TimerState>,
    cancel: CancellationToken,
) where
    D: DisplaySurface + Send + 'static,
{
    let mut interval = time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);

    let outcome = loop {
        tokio::select! {
            _ = interval.tick() => {
                let state = TimerState::running(remaining);
                display.set_text(&state.display_text());

                if state.in_warning() {
                    display.set_text_color(ALERT_COLOR);
                    if let Some(warn) = on_warning.as_mut() {
                        warn();
                    }
                }

                debug!("Tick: {} seconds remaining", remaining);
                // No subscribers just means nobody is watching.
                let _ = state_tx.send(state);

                remaining -= 1;
                if remaining < 0 {
                    break Outcome::Expired;
                }
            }
            _ = cancel.cancelled() => {
                break Outcome::Stopped;
            }
        }
    };

    // The tick registration is released before any terminal action runs.
    drop(interval);

    match outcome {
        Outcome::Expired => {
            info!("Countdown expired");
            display.set_text(EXPIRED_TEXT);
            let _ = state_tx.send(TimerState::expired());

            if let Some(timeout) = on_timeout {
                if let Err(e) = timeout() {
                    error!("timeout callback error: {:#}", e);
                }
            }
        }
        Outcome::Stopped => {
            info!("Countdown stopped with {} seconds remaining", remaining);
            let _ = state_tx.send(TimerState::stopped(remaining));
        }
    }
}
