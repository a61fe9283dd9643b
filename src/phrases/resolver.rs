use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use rand::seq::SliceRandom;
use rand::Rng;

use super::error::{PhraseError, Result};
use super::loader::{DocumentLoader, IntentPhrases};
use super::node::Node;
use super::reader::{FileUtteranceReader, UtteranceReader};
use crate::config::PhrasebookConfig;
use crate::outputs::IntentOutput;

/// Position of a phrase group within an intent's flattened data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Utterance,
    Reprompt,
}

impl Slot {
    pub fn index(self) -> usize {
        match self {
            Slot::Utterance => 0,
            Slot::Reprompt => 1,
        }
    }
}

/// Resolves utterances and reprompts per intent.
///
/// Each intent is loaded at most once per resolver; entries are never refreshed.
/// A failed load leaves the cache untouched so the next call retries.
pub struct PhraseResolver<R> {
    loader: DocumentLoader<R>,
    cache: Mutex<HashMap<String, Arc<IntentPhrases>>>,
}

impl PhraseResolver<FileUtteranceReader> {
    pub fn from_config(config: &PhrasebookConfig) -> Self {
        let reader = FileUtteranceReader::new(config.resource_root.clone())
            .with_file_name(&config.file_name);
        Self::new(reader, &config.locale)
    }
}

impl<R: UtteranceReader> PhraseResolver<R> {
    pub fn new(reader: R, locale: impl Into<String>) -> Self {
        Self {
            loader: DocumentLoader::new(reader, locale),
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn locale(&self) -> &str {
        self.loader.locale()
    }

    pub fn utterances(&self, intent_name: &str) -> Result<Vec<String>> {
        self.phrases(intent_name, Slot::Utterance)
    }

    pub fn random_utterance(&self, intent_name: &str) -> Result<Option<String>> {
        self.random_phrase(intent_name, Slot::Utterance)
    }

    pub fn reprompts(&self, intent_name: &str) -> Result<Vec<String>> {
        self.phrases(intent_name, Slot::Reprompt)
    }

    pub fn random_reprompt(&self, intent_name: &str) -> Result<Option<String>> {
        self.random_phrase(intent_name, Slot::Reprompt)
    }

    pub fn utterances_for(&self, output: &impl IntentOutput) -> Result<Vec<String>> {
        self.utterances(output.intent_name())
    }

    pub fn random_utterance_for(&self, output: &impl IntentOutput) -> Result<Option<String>> {
        self.random_utterance(output.intent_name())
    }

    pub fn reprompts_for(&self, output: &impl IntentOutput) -> Result<Vec<String>> {
        self.reprompts(output.intent_name())
    }

    pub fn random_reprompt_for(&self, output: &impl IntentOutput) -> Result<Option<String>> {
        self.random_reprompt(output.intent_name())
    }

    /// All candidate phrases for the slot. Unrecognized shapes give an empty list.
    pub fn phrases(&self, intent_name: &str, slot: Slot) -> Result<Vec<String>> {
        let contents = self.intent_phrases(intent_name)?;
        Ok(extract_slot(intent_name, &contents, slot))
    }

    pub fn random_phrase(&self, intent_name: &str, slot: Slot) -> Result<Option<String>> {
        self.random_phrase_with(intent_name, slot, &mut rand::thread_rng())
    }

    /// Same as [`random_phrase`](Self::random_phrase) with a caller-supplied RNG.
    pub fn random_phrase_with<G: Rng + ?Sized>(
        &self,
        intent_name: &str,
        slot: Slot,
        rng: &mut G,
    ) -> Result<Option<String>> {
        let phrases = self.phrases(intent_name, slot)?;
        Ok(phrases.choose(rng).cloned())
    }

    /// Cached phrase data for the intent, loading it on first access.
    pub fn intent_phrases(&self, intent_name: &str) -> Result<Arc<IntentPhrases>> {
        if intent_name.trim().is_empty() {
            return Err(PhraseError::InvalidArgument(
                "Intent name is null or empty.".to_string(),
            ));
        }

        if let Some(cached) = self.lock_cache().get(intent_name) {
            tracing::debug!(intent = intent_name, "phrase cache hit");
            return Ok(Arc::clone(cached));
        }

        // Load outside the lock; a concurrent loader that got there first wins.
        tracing::debug!(intent = intent_name, locale = self.locale(), "phrase cache miss");
        let loaded = Arc::new(self.loader.load(intent_name)?);

        let mut cache = self.lock_cache();
        let entry = cache.entry(intent_name.to_string()).or_insert(loaded);
        Ok(Arc::clone(entry))
    }

    pub fn is_cached(&self, intent_name: &str) -> bool {
        self.lock_cache().contains_key(intent_name)
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, HashMap<String, Arc<IntentPhrases>>> {
        // Entries are immutable once inserted, so a poisoned map is still consistent
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn extract_slot(intent_name: &str, contents: &[Node], slot: Slot) -> Vec<String> {
    let index = slot.index();
    match contents.get(index) {
        None => Vec::new(),
        // Bare phrases directly under the intent form one implicit utterance list
        Some(Node::Scalar(_)) if slot == Slot::Utterance => {
            contents.iter().map(ToString::to_string).collect()
        }
        Some(Node::List(items)) => items.iter().map(ToString::to_string).collect(),
        Some(other) => {
            tracing::trace!(
                intent = intent_name,
                ?slot,
                shape = ?other,
                "dropping unrecognized phrase shape"
            );
            Vec::new()
        }
    }
}
