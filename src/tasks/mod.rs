//! Background tasks module
//!
//! The countdown tick loop runs as a background task alongside whatever the
//! caller is doing.

pub mod countdown;

// Re-export main types
pub use countdown::{start_countdown, CountdownHandle, TimeoutCallback, WarningCallback};
