use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a log file base path.
pub const LOG_ENV: &str = "STEPFORM_LOG";

/// Initialize tracing with optional file output.
///
/// Nothing is written to stdout or stderr while the TUI owns the terminal,
/// so logging stays off unless `STEPFORM_LOG` or `configured` names a path.
/// The environment variable wins.
///
/// Files are named `{path}.{timestamp}.{pid}` so concurrent instances never
/// share one. `RUST_LOG` overrides `default_filter`.
pub fn init_tracing(configured: Option<&Path>, default_filter: &str) {
    let log_path = match std::env::var(LOG_ENV).ok() {
        Some(path) => path,
        None => match configured {
            Some(path) => path.display().to_string(),
            None => return,
        },
    };

    let unique_path = unique_log_path(&log_path);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_path_appends_timestamp_and_pid() {
        let path = unique_log_path("/tmp/stepform.log");
        let suffix = format!(".{}", std::process::id());
        assert!(path.starts_with("/tmp/stepform.log."));
        assert!(path.ends_with(&suffix));
    }
}
