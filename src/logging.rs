//! Logging setup.
//!
//! Components only emit through `tracing` macros; whichever subscriber is
//! installed decides where diagnostics go. The binary installs [`init`],
//! which writes every event both to stderr and to an append-only log file.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Mutex;
use tracing::warn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "debug";

/// Installs the process-wide subscriber.
///
/// If `log_file` can't be opened the console still receives every event and
/// a warning names the file. Subsequent calls are no-ops.
pub fn init(log_file: &Path) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let console = fmt::layer()
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let (file, file_error) = match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => (
            Some(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            ),
            None,
        ),
        Err(err) => (None, Some(err)),
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .is_ok();

    if let (true, Some(err)) = (installed, file_error) {
        warn!(
            "Unable to open log file {}, logging to console only: {}",
            log_file.display(),
            err
        );
    }
}

#[cfg(test)]
pub(crate) use capture::capture_logs;


#[cfg(test)]
mod tests {
    use super::*;
    use tracing::info;

    #[test]
    fn should_capture_events_from_scoped_subscriber() {
        let (value, logs) = capture_logs(|| {
            info!("captured message");
            7
        });

        assert_eq!(value, 7);
        assert!(logs.contains("INFO"));
        assert!(logs.contains("captured message"));
    }
}
