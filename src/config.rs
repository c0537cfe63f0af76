use crate::error::{Result, ResultExt as _, ScramblerError};
use crate::scramble::SemanticType;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_LABEL_PREFIX: &str = "column_";
pub const DEFAULT_INFER_SCHEMA_LENGTH: usize = 10_000;

/// Which randomization stages run, in their fixed order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StageToggles {
    pub rename: bool,
    pub reorder: bool,
    pub coerce: bool,
}

impl Default for StageToggles {
    fn default() -> Self {
        Self {
            rename: true,
            reorder: true,
            coerce: true,
        }
    }
}

/// Settings for one scramble run.
///
/// Every field is optional in the JSON form; missing fields take the values
/// from [`ScrambleConfig::default`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ScrambleConfig {
    pub seed: Option<i64>,
    pub label_prefix: String,
    pub stages: StageToggles,
    /// Universe of types the coercer may pick from.
    pub target_types: Vec<SemanticType>,
    /// Rows sampled for dtype inference; `None` scans the whole file.
    pub infer_schema_length: Option<usize>,
    pub allow_overwrite: bool,
    pub dry_run: bool,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            seed: None,
            label_prefix: DEFAULT_LABEL_PREFIX.to_owned(),
            stages: StageToggles::default(),
            target_types: SemanticType::ALL.to_vec(),
            infer_schema_length: Some(DEFAULT_INFER_SCHEMA_LENGTH),
            allow_overwrite: true,
            dry_run: false,
        }
    }
}

impl ScrambleConfig {
    /// Reads a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ScramblerError::Config`] if the file cannot be read, is not
    /// valid JSON, or fails [`ScrambleConfig::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScramblerError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ScramblerError::Config`] for an empty label prefix, an empty
    /// target type list, or a zero inference length.
    pub fn validate(&self) -> Result<()> {
        if self.label_prefix.is_empty() {
            return Err(ScramblerError::Config(
                "label_prefix must not be empty".to_owned(),
            ));
        }
        if self.target_types.is_empty() {
            return Err(ScramblerError::Config(
                "target_types must name at least one type".to_owned(),
            ));
        }
        if self.infer_schema_length == Some(0) {
            return Err(ScramblerError::Config(
                "infer_schema_length must be positive".to_owned(),
            ));
        }
        Ok(())
    }

    /// Target types with duplicates removed, in configured order.
    pub fn target_universe(&self) -> Vec<SemanticType> {
        let mut universe = Vec::with_capacity(self.target_types.len());
        for kind in &self.target_types {
            if !universe.contains(kind) {
                universe.push(*kind);
            }
        }
        universe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_enable_every_stage() {
        let config = ScrambleConfig::default();
        assert!(config.stages.rename && config.stages.reorder && config.stages.coerce);
        assert_eq!(config.label_prefix, "column_");
        assert_eq!(config.target_types.len(), 4);
        assert!(config.validate().is_ok(), "defaults must validate");
    }

    #[test]
    fn test_partial_json_fills_defaults() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(
            file,
            r#"{{ "seed": 7, "stages": {{ "reorder": false }}, "target_types": ["text", "categorical"] }}"#
        )?;

        let config = ScrambleConfig::load(file.path())?;
        assert_eq!(config.seed, Some(7));
        assert!(config.stages.rename, "unspecified stage keeps its default");
        assert!(!config.stages.reorder);
        assert_eq!(
            config.target_types,
            vec![SemanticType::Text, SemanticType::Categorical]
        );
        assert_eq!(config.label_prefix, DEFAULT_LABEL_PREFIX);
        Ok(())
    }

    #[test]
    fn test_unknown_field_is_config_error() -> anyhow::Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(file, r#"{{ "sed": 7 }}"#)?;

        let err = ScrambleConfig::load(file.path()).unwrap_err();
        assert!(
            matches!(err, ScramblerError::Config(_)),
            "expected config error, got {err:?}"
        );
        Ok(())
    }

    #[test]
    fn test_empty_target_types_rejected() {
        let config = ScrambleConfig {
            target_types: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err(), "empty universe must be rejected");
    }

    #[test]
    fn test_target_universe_dedupes() {
        let config = ScrambleConfig {
            target_types: vec![
                SemanticType::Float,
                SemanticType::Text,
                SemanticType::Float,
            ],
            ..Default::default()
        };
        assert_eq!(
            config.target_universe(),
            vec![SemanticType::Float, SemanticType::Text]
        );
    }
}
