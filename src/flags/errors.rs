use thiserror::Error;

use super::value::FlagKind;

#[derive(Debug, Error)]
pub enum FlagError {
    #[error("invalid {kind} value '{text}': {reason}")]
    InvalidValue {
        kind: FlagKind,
        text: String,
        reason: String,
    },

    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    #[error("flag '{0}' is already registered")]
    DuplicateFlag(String),

    #[error("shorthand '-{shorthand}' of flag '{flag}' is already used by '{existing}'")]
    DuplicateShorthand {
        shorthand: char,
        flag: String,
        existing: String,
    },

    #[error("File error: {0}.")]
    FileError(String),

    #[error("Invalid flag declaration: {0}.")]
    Declaration(String),

    #[error("In flag '{flag}': {source}")]
    InFlag {
        flag: String,
        #[source]
        source: Box<FlagError>,
    },
}

impl FlagError {
    pub(crate) fn invalid(kind: FlagKind, text: &str, reason: impl Into<String>) -> Self {
        FlagError::InvalidValue {
            kind,
            text: text.to_string(),
            reason: reason.into(),
        }
    }
}
