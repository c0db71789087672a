use serde::Deserialize;
use showcase_core::{InputEvent, ShufflePolicy};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

const RUN_ID_ALLOWED: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789._-";

/// Root replay configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReplayConfig {
    pub run_id: String,
    /// Catalog JSON; the built-in placeholder menu is used when absent.
    #[serde(default)]
    pub catalog: Option<String>,
    #[serde(default)]
    pub session: SessionConfig,
    pub script: Vec<String>,
    pub outputs: OutputsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ReplayConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: ReplayConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        validate_run_id(&self.run_id)?;
        self.parsed_script()?;
        self.outputs.validate(&self.run_id)?;
        if let Some(catalog) = self.catalog.as_ref() {
            if catalog.trim().is_empty() {
                return Err(ValidationError::InvalidField {
                    field: "catalog".to_string(),
                    message: "catalog path must not be empty when given".to_string(),
                });
            }
        }
        self.logging.normalize();
        Ok(())
    }

    /// Script steps parsed into engine input events.
    pub fn parsed_script(&self) -> Result<Vec<InputEvent>, ValidationError> {
        if self.script.is_empty() {
            return Err(ValidationError::InvalidField {
                field: "script".to_string(),
                message: "script must contain at least one step".to_string(),
            });
        }
        self.script
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                raw.parse::<InputEvent>()
                    .map_err(|err| ValidationError::InvalidField {
                        field: format!("script[{index}]"),
                        message: err.to_string(),
                    })
            })
            .collect()
    }

    /// Resolve output templates (`{run_id}` placeholders) into concrete paths.
    pub fn resolved_outputs(&self) -> ResolvedOutputs {
        ResolvedOutputs {
            frames_jsonl: resolve_template(&self.run_id, &self.outputs.frames_jsonl),
            summary_md: resolve_template(&self.run_id, &self.outputs.summary_md),
        }
    }
}

/// Engine options for the replayed page load.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct SessionConfig {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub shuffle: ShufflePolicy,
    #[serde(default)]
    pub viewport_width: Option<u32>,
}

/// Output artifact configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputsConfig {
    pub frames_jsonl: String,
    pub summary_md: String,
}

impl OutputsConfig {
    fn validate(&self, run_id: &str) -> Result<(), ValidationError> {
        for (label, value) in [
            ("outputs.frames_jsonl", &self.frames_jsonl),
            ("outputs.summary_md", &self.summary_md),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::InvalidField {
                    field: label.to_string(),
                    message: "path must not be empty".to_string(),
                });
            }

            let resolved = resolve_template(run_id, value);
            if resolved.components().count() == 0 {
                return Err(ValidationError::InvalidField {
                    field: label.to_string(),
                    message: "resolved path is invalid".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Logging configuration defaults to disabled structured logs.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_structured: bool,
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: default_tracing_level(),
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        if self.tracing_level.trim().is_empty() {
            self.tracing_level = default_tracing_level();
        }
    }

    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_tracing_level() -> String {
    "info".to_string()
}

fn validate_run_id(run_id: &str) -> Result<(), ValidationError> {
    if run_id.trim().is_empty() {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: "run_id must not be empty".to_string(),
        });
    }

    if !run_id.chars().all(|c| RUN_ID_ALLOWED.contains(c)) {
        return Err(ValidationError::InvalidField {
            field: "run_id".to_string(),
            message: "run_id may only contain alphanumeric characters, '.', '_' or '-'".to_string(),
        });
    }

    Ok(())
}

fn resolve_template(run_id: &str, template: &str) -> PathBuf {
    let replaced = template.replace("{run_id}", run_id);
    PathBuf::from(replaced)
}

/// Fully resolved output paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutputs {
    pub frames_jsonl: PathBuf,
    pub summary_md: PathBuf,
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path.as_path(),
        }
    }
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC_YAML: &str = r#"
run_id: "dessert_walk"
session:
  seed: 11
  shuffle: "stable"
script:
  - "category:dessert"
  - "category:all"
  - "page:3"
  - "next"
outputs:
  frames_jsonl: "replay/out/{run_id}/frames.jsonl"
  summary_md: "replay/out/{run_id}/summary.md"
logging:
  enable_structured: true
  tracing_level: "debug"
"#;

    #[test]
    fn loads_and_validates_basic_config() {
        let mut cfg: ReplayConfig = serde_yaml::from_str(BASIC_YAML).expect("parse yaml");
        cfg.validate().expect("validate");

        assert_eq!(cfg.session.shuffle, ShufflePolicy::Stable);
        assert_eq!(cfg.session.viewport_width, None);
        assert!(cfg.catalog.is_none());
        assert!(cfg.logging.enable_structured);
        assert_eq!(cfg.logging.level(), Some(Level::DEBUG));
        assert_eq!(cfg.parsed_script().unwrap().len(), 4);

        let outputs = cfg.resolved_outputs();
        assert_eq!(
            outputs.frames_jsonl,
            PathBuf::from("replay/out/dessert_walk/frames.jsonl")
        );
    }

    #[test]
    fn session_and_logging_default_when_omitted() {
        let yaml = BASIC_YAML
            .replace("session:\n  seed: 11\n  shuffle: \"stable\"\n", "")
            .replace(
                "logging:\n  enable_structured: true\n  tracing_level: \"debug\"\n",
                "",
            );
        let mut cfg: ReplayConfig = serde_yaml::from_str(&yaml).expect("parse");
        cfg.validate().expect("valid");
        assert_eq!(cfg.session, SessionConfig::default());
        assert_eq!(cfg.session.shuffle, ShufflePolicy::Reshuffle);
        assert_eq!(cfg.logging, LoggingConfig::default());
    }

    #[test]
    fn rejects_unparseable_script_step() {
        let yaml = BASIC_YAML.replace("\"page:3\"", "\"page:three\"");
        let mut cfg: ReplayConfig = serde_yaml::from_str(&yaml).expect("parse");
        let err = cfg.validate().expect_err("bad step");
        assert!(matches!(
            err,
            ValidationError::InvalidField { field, .. } if field == "script[2]"
        ));
    }

    #[test]
    fn rejects_empty_script() {
        let mut cfg: ReplayConfig = serde_yaml::from_str(BASIC_YAML).expect("parse");
        cfg.script.clear();
        let err = cfg.validate().expect_err("empty script");
        assert!(matches!(
            err,
            ValidationError::InvalidField { field, .. } if field == "script"
        ));
    }

    #[test]
    fn rejects_invalid_run_id() {
        let yaml = BASIC_YAML.replace("dessert_walk", "dessert walk");
        let mut cfg: ReplayConfig = serde_yaml::from_str(&yaml).expect("parse");
        let err = cfg.validate().expect_err("invalid run id");
        assert!(matches!(
            err,
            ValidationError::InvalidField { field, .. } if field == "run_id"
        ));
    }

    #[test]
    fn rejects_blank_output_path() {
        let yaml = BASIC_YAML.replace("replay/out/{run_id}/summary.md", " ");
        let mut cfg: ReplayConfig = serde_yaml::from_str(&yaml).expect("parse");
        let err = cfg.validate().expect_err("blank output");
        assert!(matches!(
            err,
            ValidationError::InvalidField { field, .. } if field == "outputs.summary_md"
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ReplayConfig::from_path("/no/such/replay.yaml").expect_err("missing");
        assert_eq!(err.path(), Path::new("/no/such/replay.yaml"));
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
