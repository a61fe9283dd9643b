pub mod cli;
pub mod config;
pub mod outputs;
pub mod phrases;

pub use config::PhrasebookConfig;
pub use outputs::{IntentOutput, SpeechOutput};
pub use phrases::{PhraseError, PhraseResolver, Slot};
