use thiserror::Error;

use crate::flags::errors::FlagError;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("File error: {0}.")]
    FileError(String),

    #[error("malformed config document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("config document must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("unsupported {found} value for key '{key}': only booleans, numbers and strings are allowed")]
    UnsupportedValue { key: String, found: &'static str },

    #[error("unknown flag '{key}'")]
    UnknownKey { key: String },

    #[error("invalid value '{text}' for flag '{key}': {source}")]
    Conversion {
        key: String,
        text: String,
        #[source]
        source: FlagError,
    },
}

impl MergeError {
    /// The document key the error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            MergeError::UnsupportedValue { key, .. }
            | MergeError::UnknownKey { key }
            | MergeError::Conversion { key, .. } => Some(key),
            _ => None,
        }
    }

    /// True for errors caused by the shape of the document itself.
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            MergeError::FileError(_)
                | MergeError::Document(_)
                | MergeError::NotAnObject { .. }
                | MergeError::UnsupportedValue { .. }
        )
    }
}
