use serde::{Deserialize, Serialize};

/// Anything that answers for an intent and can be voiced by the resolver.
pub trait IntentOutput {
    fn intent_name(&self) -> &str;
}

impl IntentOutput for String {
    fn intent_name(&self) -> &str {
        self
    }
}

/// Minimal response object: the intent it speaks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechOutput {
    pub intent_name: String,
}

impl SpeechOutput {
    pub fn new(intent_name: impl Into<String>) -> Self {
        Self {
            intent_name: intent_name.into(),
        }
    }
}

impl IntentOutput for SpeechOutput {
    fn intent_name(&self) -> &str {
        &self.intent_name
    }
}
