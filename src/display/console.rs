//! Terminal display surface

use std::io::{self, Write};

use super::{DisplaySurface, ALERT_COLOR};

const ANSI_RED: &str = "\x1b[31m";
const ANSI_RESET: &str = "\x1b[0m";

/// Renders the countdown on a single terminal line, rewriting it in place.
///
/// The alert color maps to ANSI red; unrecognized colors fall back to the
/// terminal default. A newline is emitted on drop so the shell prompt does
/// not land on the countdown line.
pub struct ConsoleDisplay {
    color: Option<&'static str>,
    wrote: bool,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self {
            color: None,
            wrote: false,
        }
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for ConsoleDisplay {
    fn set_text(&mut self, text: &str) {
        let mut stdout = io::stdout();
        let (color, reset) = match self.color {
            Some(color) => (color, ANSI_RESET),
            None => ("", ""),
        };
        // Clear to end of line so shorter texts leave no stale tail.
        let _ = write!(stdout, "\r\x1b[K{}{}{}", color, text, reset);
        let _ = stdout.flush();
        self.wrote = true;
    }

    fn set_text_color(&mut self, color: &str) {
        self.color = match color {
            ALERT_COLOR => Some(ANSI_RED),
            _ => None,
        };
    }
}

impl Drop for ConsoleDisplay {
    fn drop(&mut self) {
        if self.wrote {
            let _ = writeln!(io::stdout());
        }
    }
}
