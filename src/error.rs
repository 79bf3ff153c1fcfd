use std::error::Error;
use std::fmt;

use crate::store::StoreError;

/// Error type for template operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A required argument was absent.
    InvalidArgument(&'static str),
    /// The store or persistence collaborator failed.
    Store(StoreError),
    /// The template was deleted; it can no longer be saved or deleted.
    Deleted { alias: String },
    /// Linking the master template would make the template its own ancestor.
    CycleDetected { alias: String, chain: Vec<String> },
    /// The master chain is deeper than the configured limit.
    DepthExceeded { alias: String, max_depth: usize },
    /// `instance()` was called before a store handle was installed.
    NotConfigured,
    /// A store handle was already installed for this process.
    AlreadyInstalled,
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::InvalidArgument(name) => write!(f, "invalid argument: {} is required", name),
            TemplateError::Store(e) => write!(f, "store error: {}", e),
            TemplateError::Deleted { alias } => write!(f, "template {} has been deleted", alias),
            TemplateError::CycleDetected { alias, chain } => write!(
                f,
                "circular master template reference for {}: {}",
                alias,
                chain.join(" -> ")
            ),
            TemplateError::DepthExceeded { alias, max_depth } => write!(
                f,
                "master template chain of {} exceeds {} levels",
                alias, max_depth
            ),
            TemplateError::NotConfigured => {
                write!(f, "template service requested before a store handle was installed")
            }
            TemplateError::AlreadyInstalled => write!(f, "a store handle is already installed"),
        }
    }
}

impl Error for TemplateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TemplateError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for TemplateError {
    fn from(err: StoreError) -> Self {
        TemplateError::Store(err)
    }
}
