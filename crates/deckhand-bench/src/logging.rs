use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LoggingConfig, ResolvedOutputs};

/// Keeps the non-blocking telemetry writer alive for the whole run;
/// dropping it flushes any buffered events.
pub struct TelemetryGuard {
    _worker: WorkerGuard,
    pub telemetry_path: PathBuf,
}

/// Install a JSON subscriber capturing the engine's decision telemetry
/// next to the run's JSONL output. Returns `None` when structured
/// logging is disabled in the scenario.
pub fn init_logging(
    logging: &LoggingConfig,
    outputs: &ResolvedOutputs,
) -> Result<Option<TelemetryGuard>> {
    if !logging.enable_structured {
        return Ok(None);
    }

    let telemetry_path = telemetry_path_for(&outputs.jsonl);
    if let Some(dir) = telemetry_path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating telemetry directory at {}", dir.display()))?;
    }
    let file = File::create(&telemetry_path)
        .with_context(|| format!("creating telemetry file at {}", telemetry_path.display()))?;

    let (writer, worker) = non_blocking::NonBlockingBuilder::default()
        .lossy(false)
        .finish(file);

    // RUST_LOG wins over the scenario's configured level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(parse_level(&logging.tracing_level).as_str()));
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .json()
        .with_current_span(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(writer)
        .finish();

    // Ignore error if a global subscriber is already set (e.g., when running in tests)
    let _ = tracing::subscriber::set_global_default(subscriber);

    Ok(Some(TelemetryGuard {
        _worker: worker,
        telemetry_path,
    }))
}

/// Telemetry lands beside the decision rows.
fn telemetry_path_for(jsonl: &Path) -> PathBuf {
    jsonl
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("telemetry.jsonl")
}

/// Unrecognized level names fall back to INFO rather than erroring; a
/// scenario with a typo still produces telemetry.
fn parse_level(raw: &str) -> Level {
    match raw.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_level, telemetry_path_for};
    use std::path::{Path, PathBuf};
    use tracing::Level;

    #[test]
    fn level_names_parse_with_info_fallback() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("WARNING"), Level::WARN);
        assert_eq!(parse_level("verbose"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }

    #[test]
    fn telemetry_sits_beside_the_rows() {
        assert_eq!(
            telemetry_path_for(Path::new("bench/out/run/decisions.jsonl")),
            PathBuf::from("bench/out/run/telemetry.jsonl")
        );
        assert_eq!(
            telemetry_path_for(Path::new("decisions.jsonl")),
            PathBuf::from("telemetry.jsonl")
        );
    }
}
