use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::phrases::{PhraseError, DEFAULT_FILE_NAME};

pub const LOCALE_ENV: &str = "PHRASEBOOK_LOCALE";
pub const ROOT_ENV: &str = "PHRASEBOOK_ROOT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhrasebookConfig {
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Directory holding one sub-directory per locale.
    #[serde(default = "default_root")]
    pub resource_root: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from("resources")
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for PhrasebookConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            resource_root: default_root(),
            file_name: default_file_name(),
        }
    }
}

impl PhrasebookConfig {
    pub fn from_json_str(json: &str) -> Result<Self, PhraseError> {
        serde_json::from_str(json).map_err(|e| PhraseError::Config(e.to_string()))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PhraseError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| PhraseError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&content)
    }

    /// Applies `PHRASEBOOK_LOCALE` / `PHRASEBOOK_ROOT` when set and non-empty.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(locale) = lookup(LOCALE_ENV).filter(|v| !v.trim().is_empty()) {
            self.locale = locale;
        }
        if let Some(root) = lookup(ROOT_ENV).filter(|v| !v.trim().is_empty()) {
            self.resource_root = PathBuf::from(root);
        }
        self
    }
}
