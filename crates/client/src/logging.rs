//! Tracing setup for the simulator binary.
use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Logs to stderr and to `<log dir>/<session>/fight-sim.log`.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the life of the process. `RUST_LOG` overrides the default `info` level.
pub fn setup_logging(session_id: Option<&str>) -> Result<WorkerGuard> {
    let session_id = session_id.map(str::to_owned).unwrap_or_else(|| {
        format!("session_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    });

    let session_log_dir = log_directory().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "fight-sim.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/fight-sim.log", session_log_dir.display());

    Ok(guard)
}

/// `FIGHT_LOG_DIR`, else the platform cache directory.
fn log_directory() -> PathBuf {
    if let Some(dir) = std::env::var_os("FIGHT_LOG_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(xdg_cache) = std::env::var_os("XDG_CACHE_HOME") {
        return PathBuf::from(xdg_cache).join("fight-sim").join("logs");
    }

    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home).join(".cache").join("fight-sim").join("logs");
    }

    std::env::temp_dir().join("fight-sim").join("logs")
}
