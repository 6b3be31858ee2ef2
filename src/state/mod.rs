//! State management module
//!
//! Observable countdown state and the display constants tied to it.

pub mod timer_state;

// Re-export main types
pub use timer_state::{TimerPhase, TimerState, EXPIRED_TEXT, WARNING_THRESHOLD_SECS};
