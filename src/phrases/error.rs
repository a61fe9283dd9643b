use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhraseError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("phrase document for locale '{locale}' is unavailable")]
    DocumentUnavailable {
        locale: String,
        #[source]
        source: std::io::Error,
    },

    #[error("phrase document for locale '{locale}' is malformed: {reason}")]
    DocumentMalformed { locale: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PhraseError>;
