//! Times Up - a per-second countdown timer
//!
//! This library drives a write-only display surface once per second from a
//! caller-supplied duration: `M:SS` text every tick, alert styling inside
//! the final thirty seconds, a warning callback while in that window, and a
//! timeout callback exactly once at expiry. The returned handle can stop
//! the countdown early and exposes its state over a watch channel.

pub mod config;
pub mod display;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use display::{ConsoleDisplay, DisplaySurface, ALERT_COLOR};
pub use state::{TimerPhase, TimerState, EXPIRED_TEXT, WARNING_THRESHOLD_SECS};
pub use tasks::{start_countdown, CountdownHandle, TimeoutCallback, WarningCallback};
pub use utils::signals::shutdown_signal;
