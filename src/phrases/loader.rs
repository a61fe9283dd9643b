use super::error::{PhraseError, Result};
use super::flatten::flatten;
use super::node::Node;
use super::reader::UtteranceReader;

/// Flattened phrase data beneath one intent. Index 0 holds utterances, index 1 reprompts.
pub type IntentPhrases = Vec<Node>;

/// Fetches and parses the locale document. Holds no cache of its own.
pub struct DocumentLoader<R> {
    reader: R,
    locale: String,
}

impl<R: UtteranceReader> DocumentLoader<R> {
    pub fn new(reader: R, locale: impl Into<String>) -> Self {
        Self {
            reader,
            locale: locale.into(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Parses the whole document for the configured locale.
    pub fn document(&self) -> Result<Node> {
        let text = self.reader.read(&self.locale)?;
        if text.trim().is_empty() {
            return Ok(Node::Mapping(Vec::new()));
        }

        let document: Option<Node> =
            serde_yaml::from_str(&text).map_err(|e| PhraseError::DocumentMalformed {
                locale: self.locale.clone(),
                reason: e.to_string(),
            })?;

        match document {
            // Comment-only documents parse to nothing
            None => Ok(Node::Mapping(Vec::new())),
            Some(mapping @ Node::Mapping(_)) => Ok(mapping),
            Some(_) => Err(PhraseError::DocumentMalformed {
                locale: self.locale.clone(),
                reason: "top level is not a mapping of intent names".to_string(),
            }),
        }
    }

    /// Phrase data for `intent_name`. An unknown intent yields an empty sequence.
    pub fn load(&self, intent_name: &str) -> Result<IntentPhrases> {
        let document = self.document()?;
        let phrases = match document.get(intent_name) {
            Some(node) => intent_slots(node),
            None => Vec::new(),
        };

        tracing::debug!(
            locale = %self.locale,
            intent = intent_name,
            entries = phrases.len(),
            "loaded intent phrases"
        );
        Ok(phrases)
    }
}

/// A list made only of lists at the intent root is read as positional slots.
fn intent_slots(node: &Node) -> IntentPhrases {
    match node {
        Node::List(items)
            if !items.is_empty() && items.iter().all(|i| matches!(i, Node::List(_))) =>
        {
            items.clone()
        }
        _ => flatten(node),
    }
}
