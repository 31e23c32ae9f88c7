//! Trainer configuration.
//!
//! Values come from `wortdrill.toml` (or an explicit `--config` path);
//! command-line flags override them in `main`.

use crate::error::{ConfigError, VocabularyError};
use crate::export::{delimited, json};
use crate::models::Vocabulary;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "wortdrill.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillConfig {
    /// Word list to drill; the built-in list is used when unset.
    #[serde(default)]
    pub vocabulary_path: Option<PathBuf>,
    /// Header of the German column in delimited files.
    #[serde(default = "default_term_column")]
    pub term_column: String,
    /// Header of the French column in delimited files.
    #[serde(default = "default_translation_column")]
    pub translation_column: String,
    /// Fixed RNG seed, for reproducible drills.
    #[serde(default)]
    pub seed: Option<u64>,
    /// How long feedback stays on screen after a correct answer.
    #[serde(default = "default_correct_pause")]
    pub correct_pause_ms: u64,
    /// How long feedback stays on screen after a wrong answer.
    #[serde(default = "default_incorrect_pause")]
    pub incorrect_pause_ms: u64,
    /// Length of the most-missed list in the statistics panel.
    #[serde(default = "default_most_missed_len")]
    pub most_missed_len: usize,
}

fn default_term_column() -> String {
    "German".to_string()
}
fn default_translation_column() -> String {
    "French".to_string()
}
fn default_correct_pause() -> u64 {
    1000
}
fn default_incorrect_pause() -> u64 {
    2000
}
fn default_most_missed_len() -> usize {
    10
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            vocabulary_path: None,
            term_column: default_term_column(),
            translation_column: default_translation_column(),
            seed: None,
            correct_pause_ms: default_correct_pause(),
            incorrect_pause_ms: default_incorrect_pause(),
            most_missed_len: default_most_missed_len(),
        }
    }
}

/// Load config from an explicit path, or from `wortdrill.toml` in the
/// working directory, falling back to defaults when neither exists.
pub fn load_config_from(path: Option<&Path>) -> Result<DrillConfig, ConfigError> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => return Err(ConfigError::NotFound(p.to_path_buf())),
        None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            let config: DrillConfig = toml::from_str(&content)
                .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;
            tracing::debug!(path = %path.display(), "config loaded");
            Ok(config)
        }
        None => Ok(DrillConfig::default()),
    }
}

impl DrillConfig {
    /// Loads the configured word list. `.json` files are read as decks,
    /// anything else as a delimited table.
    pub fn load_vocabulary(&self) -> Result<Vocabulary, VocabularyError> {
        match &self.vocabulary_path {
            Some(path) => load_vocabulary_file(path, &self.term_column, &self.translation_column),
            None => Ok(Vocabulary::builtin()),
        }
    }
}

pub fn load_vocabulary_file(
    path: &Path,
    term_column: &str,
    translation_column: &str,
) -> Result<Vocabulary, VocabularyError> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        json::import_vocabulary(path)
    } else {
        delimited::load_delimited(path, term_column, translation_column)
    }
}
