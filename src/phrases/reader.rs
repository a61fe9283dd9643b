use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use super::error::{PhraseError, Result};

pub const DEFAULT_FILE_NAME: &str = "utterances.yml";

/// Supplies the raw phrase document for a locale.
pub trait UtteranceReader {
    fn read(&self, locale: &str) -> Result<String>;
}

impl<R: UtteranceReader + ?Sized> UtteranceReader for &R {
    fn read(&self, locale: &str) -> Result<String> {
        (**self).read(locale)
    }
}

impl<R: UtteranceReader + ?Sized> UtteranceReader for Box<R> {
    fn read(&self, locale: &str) -> Result<String> {
        (**self).read(locale)
    }
}

impl<R: UtteranceReader + ?Sized> UtteranceReader for Arc<R> {
    fn read(&self, locale: &str) -> Result<String> {
        (**self).read(locale)
    }
}

/// File-based reader: `<root>/<locale>/<file_name>`.
#[derive(Debug, Clone)]
pub struct FileUtteranceReader {
    root: PathBuf,
    file_name: String,
}

impl FileUtteranceReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn path_for(&self, locale: &str) -> PathBuf {
        self.root.join(locale).join(&self.file_name)
    }
}

impl UtteranceReader for FileUtteranceReader {
    fn read(&self, locale: &str) -> Result<String> {
        let path = self.path_for(locale);
        tracing::debug!(path = %path.display(), "reading phrase document");
        fs::read_to_string(&path).map_err(|source| PhraseError::DocumentUnavailable {
            locale: locale.to_string(),
            source,
        })
    }
}

/// In-memory reader keyed by locale.
#[derive(Debug, Clone, Default)]
pub struct StaticUtteranceReader {
    documents: HashMap<String, String>,
}

impl StaticUtteranceReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(locale, text);
        self
    }

    pub fn insert(&mut self, locale: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(locale.into(), text.into());
    }
}

impl UtteranceReader for StaticUtteranceReader {
    fn read(&self, locale: &str) -> Result<String> {
        self.documents
            .get(locale)
            .cloned()
            .ok_or_else(|| PhraseError::DocumentUnavailable {
                locale: locale.to_string(),
                source: io::Error::new(
                    io::ErrorKind::NotFound,
                    "no document registered for locale",
                ),
            })
    }
}
