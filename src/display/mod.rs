//! Display surface abstraction
//!
//! The countdown only ever writes to its display: text content and text
//! color, nothing is read back.

pub mod console;

// Re-export main types
pub use console::ConsoleDisplay;

/// Color applied to the display once the countdown enters the warning
/// window. Never reverted for the lifetime of the countdown.
pub const ALERT_COLOR: &str = "#e74c3c";

/// A write-only surface the countdown renders into.
///
/// Both operations are idempotent and infallible from the countdown's point
/// of view. A surface that can no longer be written to is a precondition
/// violation, not an error the countdown handles.
pub trait DisplaySurface {
    /// Replace the displayed text.
    fn set_text(&mut self, text: &str);

    /// Set the color used for the displayed text. Colors are CSS-style hex
    /// strings such as `#e74c3c`.
    fn set_text_color(&mut self, color: &str);
}
