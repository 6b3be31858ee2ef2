//! Countdown state snapshot

use serde::{Deserialize, Serialize};

/// Text shown once the countdown has expired.
pub const EXPIRED_TEXT: &str = "Time's up!";

/// Seconds remaining at or below which alert styling and the warning
/// callback apply.
pub const WARNING_THRESHOLD_SECS: i64 = 30;

/// Phase of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Running,
    Expired,
    Stopped,
}

/// Snapshot of a countdown, published on every tick.
///
/// `remaining_seconds` is the pre-decrement value of the most recent tick.
/// It is signed: a negative starting duration flows through the same
/// arithmetic unvalidated and expires on the first tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub phase: TimerPhase,
    pub remaining_seconds: i64,
}

impl TimerState {
    /// Create a running snapshot with the given remaining seconds
    pub fn running(remaining_seconds: i64) -> Self {
        Self {
            phase: TimerPhase::Running,
            remaining_seconds,
        }
    }

    /// Create the terminal expired snapshot
    pub fn expired() -> Self {
        Self {
            phase: TimerPhase::Expired,
            remaining_seconds: 0,
        }
    }

    /// Create the terminal stopped snapshot with the seconds never ticked
    pub fn stopped(remaining_seconds: i64) -> Self {
        Self {
            phase: TimerPhase::Stopped,
            remaining_seconds,
        }
    }

    /// Check if the countdown is still ticking
    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }

    /// Check if the countdown has reached expiry
    pub fn is_expired(&self) -> bool {
        self.phase == TimerPhase::Expired
    }

    /// Whether this tick falls inside the warning window.
    pub fn in_warning(&self) -> bool {
        self.phase == TimerPhase::Running && self.remaining_seconds <= WARNING_THRESHOLD_SECS
    }

    /// Text for the display surface: `M:SS` while running (seconds padded
    /// to two digits, minutes unpadded), the fixed message once expired.
    pub fn display_text(&self) -> String {
        match self.phase {
            TimerPhase::Expired => EXPIRED_TEXT.to_string(),
            _ => {
                let minutes = self.remaining_seconds / 60;
                let seconds = self.remaining_seconds % 60;
                format!("{}:{:02}", minutes, seconds)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_zero_padded_seconds() {
        assert_eq!(TimerState::running(0).display_text(), "0:00");
        assert_eq!(TimerState::running(5).display_text(), "0:05");
        assert_eq!(TimerState::running(59).display_text(), "0:59");
        assert_eq!(TimerState::running(60).display_text(), "1:00");
        assert_eq!(TimerState::running(90).display_text(), "1:30");
        assert_eq!(TimerState::running(615).display_text(), "10:15");
    }

    #[test]
    fn expired_snapshot_shows_the_fixed_message() {
        assert_eq!(TimerState::expired().display_text(), EXPIRED_TEXT);
        assert!(TimerState::expired().is_expired());
    }

    #[test]
    fn warning_window_starts_exactly_at_the_threshold() {
        assert!(!TimerState::running(31).in_warning());
        assert!(TimerState::running(30).in_warning());
        assert!(TimerState::running(0).in_warning());
    }

    #[test]
    fn terminal_snapshots_never_warn() {
        assert!(!TimerState::stopped(10).in_warning());
        assert!(!TimerState::expired().in_warning());
    }
}
