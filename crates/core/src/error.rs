use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

/// Why a generation request stopped without producing any text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbortReason {
    /// The cursor is not inside a method declaration
    NoMethodContext,
    /// The enclosing method returns `void` or has no return type at all
    VoidOrMissingReturnType,
    /// The return type or the enclosing type has no usable declaration
    UnresolvableType,
}

impl AbortReason {
    /// Message shown to the user when generation is aborted
    pub fn user_message(&self) -> &'static str {
        match self {
            AbortReason::NoMethodContext => "Please put the cursor into method body",
            AbortReason::VoidOrMissingReturnType => {
                "The enclosing method has no return type to map into"
            }
            AbortReason::UnresolvableType => {
                "Cannot resolve the declaration of the return type or the enclosing type"
            }
        }
    }
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_message())
    }
}

/// Errors that can occur during o2ox operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Generation aborted: {0}")]
    Abort(AbortReason),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Tree-sitter error: {0}")]
    TreeSitterError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Edit error: {0}")]
    EditError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    /// The abort reason, if this error is a user-facing abort rather than a fault
    pub fn abort_reason(&self) -> Option<AbortReason> {
        match self {
            Error::Abort(reason) => Some(*reason),
            _ => None,
        }
    }
}

impl From<AbortReason> for Error {
    fn from(reason: AbortReason) -> Self {
        Error::Abort(reason)
    }
}

/// Result type alias for o2ox operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_reason_is_exposed() {
        let err: Error = AbortReason::UnresolvableType.into();
        assert_eq!(err.abort_reason(), Some(AbortReason::UnresolvableType));

        let io = Error::IoError(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert_eq!(io.abort_reason(), None);
    }

    #[test]
    fn test_serde_json_errors_convert() {
        fn parse(text: &str) -> Result<serde_json::Value> {
            Ok(serde_json::from_str(text)?)
        }
        let err = parse("{").unwrap_err();
        assert!(matches!(err, Error::SerializationError(_)));
        assert!(err.to_string().starts_with("Serialization error: "));
        assert_eq!(err.abort_reason(), None);
    }

    #[test]
    fn test_no_method_context_message() {
        let err = Error::Abort(AbortReason::NoMethodContext);
        assert_eq!(
            err.to_string(),
            "Generation aborted: Please put the cursor into method body"
        );
    }
}
