//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "times-up")]
#[command(about = "A per-second countdown timer for the terminal")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Countdown duration in seconds
    #[arg(short, long, default_value = "60", allow_negative_numbers = true)]
    pub duration: i64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
