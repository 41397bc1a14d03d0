use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

const RUN_ID_ALLOWED: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789._-";

/// Root replay-scenario configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScenarioConfig {
    pub run_id: String,
    /// Strategy registry key bound at match start. Unrecognized keys
    /// fall back to the baseline, same as in a live match.
    #[serde(default)]
    pub strategy: Option<String>,
    pub turns: Vec<TurnScript>,
    pub outputs: OutputsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ScenarioConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let mut cfg: ScenarioConfig =
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
        if self.turns.is_empty() {
            return Err(ValidationError::InvalidField {
                field: "turns".to_string(),
                message: "a scenario must script at least one turn".to_string(),
            });
        }
        for (index, turn) in self.turns.iter().enumerate() {
            turn.validate(index)?;
        }
        self.outputs.validate(&self.run_id)?;
        self.logging.normalize();
        Ok(())
    }

    /// Resolve output templates (`{run_id}` placeholders) into concrete paths.
    pub fn resolved_outputs(&self) -> ResolvedOutputs {
        ResolvedOutputs {
            jsonl: resolve_template(&self.run_id, &self.outputs.jsonl),
        }
    }
}

/// One scripted turn: the hand we are dealt and the table we see.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TurnScript {
    #[serde(default)]
    pub hand: BTreeMap<String, u32>,
    pub stock: BTreeMap<String, u32>,
    /// Our score first, opponents after. Missing scores read as zero.
    #[serde(default)]
    pub scores: Vec<i32>,
}

impl TurnScript {
    fn validate(&self, index: usize) -> Result<(), ValidationError> {
        for (label, quantities) in [("hand", &self.hand), ("stock", &self.stock)] {
            if let Some(card) = quantities.keys().find(|card| card.trim().is_empty()) {
                return Err(ValidationError::InvalidField {
                    field: format!("turns[{index}].{label}"),
                    message: format!("blank card name {card:?} is not allowed"),
                });
            }
        }
        Ok(())
    }
}

/// Output artifact configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputsConfig {
    pub jsonl: String,
}

impl OutputsConfig {
    fn validate(&self, run_id: &str) -> Result<(), ValidationError> {
        if self.jsonl.trim().is_empty() {
            return Err(ValidationError::InvalidField {
                field: "outputs.jsonl".to_string(),
                message: "path must not be empty".to_string(),
            });
        }
        let resolved = resolve_template(run_id, &self.jsonl);
        if resolved.components().count() == 0 {
            return Err(ValidationError::InvalidField {
                field: "outputs.jsonl".to_string(),
                message: "resolved path is invalid".to_string(),
            });
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
    pub jsonl: PathBuf,
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
run_id: "replay_smoke"
strategy: "bm_smithy"
turns:
  - hand: { copper: 4, estate: 1 }
    stock: { province: 8, gold: 30, silver: 40, smithy: 10 }
    scores: [0, 0]
  - hand: { smithy: 1, copper: 4 }
    stock: { province: 8, gold: 29, silver: 40, smithy: 9 }
outputs:
  jsonl: "bench/out/{run_id}/decisions.jsonl"
logging:
  enable_structured: true
  tracing_level: "debug"
"#;

    #[test]
    fn loads_and_validates_basic_config() {
        let mut cfg: ScenarioConfig = serde_yaml::from_str(BASIC_YAML).expect("parse yaml");
        cfg.validate().expect("validate");

        assert_eq!(cfg.strategy.as_deref(), Some("bm_smithy"));
        assert_eq!(cfg.turns.len(), 2);
        assert!(cfg.turns[1].scores.is_empty());
        assert!(cfg.logging.enable_structured);

        let outputs = cfg.resolved_outputs();
        assert_eq!(
            outputs.jsonl,
            PathBuf::from("bench/out/replay_smoke/decisions.jsonl")
        );
    }

    #[test]
    fn rejects_empty_turn_list() {
        let yaml = r#"
run_id: "empty"
turns: []
outputs:
  jsonl: "out.jsonl"
"#;
        let mut cfg: ScenarioConfig = serde_yaml::from_str(yaml).expect("parse");
        let err = cfg.validate().expect_err("should fail");
        assert!(matches!(
            err,
            ValidationError::InvalidField { field, .. } if field == "turns"
        ));
    }

    #[test]
    fn rejects_invalid_run_id() {
        let yaml = BASIC_YAML.replace("replay_smoke", "replay smoke");
        let mut cfg: ScenarioConfig = serde_yaml::from_str(&yaml).expect("parse");
        let err = cfg.validate().expect_err("invalid run id");
        assert!(matches!(
            err,
            ValidationError::InvalidField { field, .. } if field == "run_id"
        ));
    }

    #[test]
    fn outputs_resolve_template_multiple_occurrences() {
        let yaml = BASIC_YAML.replace(
            "bench/out/{run_id}/decisions.jsonl",
            "bench/out/{run_id}/{run_id}.jsonl",
        );
        let mut cfg: ScenarioConfig = serde_yaml::from_str(&yaml).expect("parse");
        cfg.validate().expect("valid");
        assert_eq!(
            cfg.resolved_outputs().jsonl,
            PathBuf::from("bench/out/replay_smoke/replay_smoke.jsonl")
        );
    }
}
