//! Times Up - countdown timer for the terminal
//!
//! This is the main entry point for the times-up binary.

use tracing::{debug, info};

use times_up::{
    config::Config,
    display::ConsoleDisplay,
    state::WARNING_THRESHOLD_SECS,
    tasks::{start_countdown, TimeoutCallback, WarningCallback},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout belongs to the countdown line.
    tracing_subscriber::fmt()
        .with_env_filter(format!("times_up={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting countdown: {} seconds", config.duration);

    let mut warned = false;
    let on_warning: WarningCallback = Box::new(move || {
        if !warned {
            warned = true;
            debug!("Entered the final {} seconds", WARNING_THRESHOLD_SECS);
        }
    });
    let on_timeout: TimeoutCallback = Box::new(|| {
        info!("Countdown finished");
        Ok(())
    });

    let mut handle = start_countdown(
        config.duration,
        ConsoleDisplay::new(),
        Some(on_warning),
        Some(on_timeout),
    );
    debug!("Countdown started at {}", handle.started_at());

    let mut updates = handle.subscribe();
    tokio::select! {
        _ = shutdown_signal() => {
            info!("Shutdown signal received, stopping countdown");
            handle.stop();
        }
        // The sender side drops once the countdown task winds down.
        _ = async { while updates.changed().await.is_ok() {} } => {}
    }

    handle.finished().await;
    info!("Countdown shutdown complete");
    Ok(())
}
