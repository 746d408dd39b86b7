use thiserror::Error;

/// Errors surfaced by client-side operations.
///
/// None of these escape a component: network failures become an inline
/// "something went wrong" state, validation failures become field hints and
/// storage failures degrade to "no bookmarks".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PulseError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl PulseError {
    pub fn is_network(&self) -> bool {
        matches!(self, PulseError::Network(_))
    }
}

impl From<serde_json::Error> for PulseError {
    fn from(e: serde_json::Error) -> Self {
        PulseError::Parse(e.to_string())
    }
}
