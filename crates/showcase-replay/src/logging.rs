use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::Level;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LoggingConfig, ResolvedOutputs};

pub const TELEMETRY_FILE: &str = "telemetry.jsonl";

pub struct LoggingGuard {
    _guard: WorkerGuard,
    pub telemetry_path: PathBuf,
}

/// Route structured JSON logs to `telemetry.jsonl` next to the summary file.
pub fn init_logging(
    logging: &LoggingConfig,
    outputs: &ResolvedOutputs,
) -> Result<Option<LoggingGuard>> {
    if !logging.enable_structured {
        return Ok(None);
    }

    let telemetry_path = telemetry_path_for(outputs);
    if let Some(dir) = telemetry_path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating telemetry directory at {}", dir.display()))?;
    }
    let file = File::create(&telemetry_path)
        .with_context(|| format!("creating telemetry file at {}", telemetry_path.display()))?;

    let (writer, guard) = non_blocking::NonBlockingBuilder::default()
        .lossy(false)
        .finish(file);
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(step_filter(logging))
        .json()
        .with_current_span(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(writer)
        .finish();

    // Tests share one process, so only the first install takes effect.
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::event!(Level::DEBUG, "telemetry subscriber already installed");
    }

    Ok(Some(LoggingGuard {
        _guard: guard,
        telemetry_path,
    }))
}

/// `RUST_LOG` wins over the configured level.
fn step_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(logging.level().unwrap_or(Level::INFO).as_str())
    })
}

pub fn telemetry_path_for(outputs: &ResolvedOutputs) -> PathBuf {
    outputs
        .summary_md
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(TELEMETRY_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outputs(summary: &str) -> ResolvedOutputs {
        ResolvedOutputs {
            frames_jsonl: PathBuf::from("frames.jsonl"),
            summary_md: PathBuf::from(summary),
        }
    }

    #[test]
    fn telemetry_sits_next_to_summary() {
        assert_eq!(
            telemetry_path_for(&outputs("out/walk/summary.md")),
            PathBuf::from("out/walk/telemetry.jsonl")
        );
        assert_eq!(
            telemetry_path_for(&outputs("summary.md")),
            PathBuf::from("./telemetry.jsonl")
        );
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let logging = LoggingConfig {
            enable_structured: true,
            tracing_level: "chatty".into(),
        };
        assert_eq!(logging.level(), None);
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(
                step_filter(&logging).max_level_hint(),
                Some(tracing_subscriber::filter::LevelFilter::INFO)
            );
        }
    }

    #[test]
    fn disabled_logging_installs_nothing() {
        let guard = init_logging(&LoggingConfig::default(), &outputs("summary.md")).expect("ok");
        assert!(guard.is_none());
    }
}
