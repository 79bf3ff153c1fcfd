use std::fmt;

/// Error type for store and persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The underlying lock was poisoned during the named operation.
    LockPoisoned(&'static str),
    /// A new record was persisted under an alias that is already taken.
    DuplicateAlias(String),
    /// A previously stored record no longer exists.
    NotFound(String),
    /// Serialization/deserialization error.
    Serde(String),
    /// Any other backend failure.
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "template store lock poisoned during {}", operation)
            }
            StoreError::DuplicateAlias(alias) => {
                write!(f, "a template with alias {} already exists", alias)
            }
            StoreError::NotFound(alias) => write!(f, "template not found: {}", alias),
            StoreError::Serde(msg) => write!(f, "template serialization error: {}", msg),
            StoreError::Backend(msg) => write!(f, "template backend error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}
