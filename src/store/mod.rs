//! Store - collaborator contracts for creating, fetching and persisting
//! template records.
//!
//! The core never talks to durable storage directly. It needs two
//! capabilities, which a backend may implement on one type or split across
//! two:
//!
//! - [`TemplateStore`]: build new native records and look existing ones up
//!   by alias.
//! - [`TemplatePersistence`]: durably write and remove records.
//!
//! [`InMemoryTemplateStore`] implements both and is what tests and
//! [`StoreHandle::in_memory`](crate::StoreHandle::in_memory) use.

mod error;
mod in_memory;

pub use error::StoreError;
pub use in_memory::InMemoryTemplateStore;

use crate::record::TemplateRecord;

/// Creation and lookup of native template records.
pub trait TemplateStore: Send + Sync {
    /// Build a new, unsaved record. Alias uniqueness is not checked here.
    fn create_native(&self, alias: &str, name: &str) -> Result<TemplateRecord, StoreError>;

    /// Look up a stored record by alias. Returns None if not found.
    fn fetch_native(&self, alias: &str) -> Result<Option<TemplateRecord>, StoreError>;
}

/// Durable writes of native template records.
pub trait TemplatePersistence: Send + Sync {
    /// Insert or update a record and return its store id.
    ///
    /// A transient record (`id == 0`) is inserted and the newly assigned id
    /// returned; the caller stamps it onto the record. A stored record is
    /// updated in place and its existing id returned.
    fn persist(&self, record: &TemplateRecord) -> Result<u64, StoreError>;

    /// Remove the record with this alias. `parent_context_id` is a
    /// backend-specific scoping value passed through untouched.
    /// Returns true if a record existed.
    fn remove(&self, alias: &str, parent_context_id: i64) -> Result<bool, StoreError>;
}
