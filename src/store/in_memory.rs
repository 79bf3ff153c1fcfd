//! InMemoryTemplateStore - HashMap-backed template store for testing and development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use super::{StoreError, TemplatePersistence, TemplateStore};
use crate::record::TemplateRecord;

/// Internal stored representation of a template.
struct StoredTemplate {
    id: u64,
    bytes: Vec<u8>,
}

/// In-memory template store keyed by alias.
///
/// Ids come from a shared sequence starting at the seed (1 by default).
/// Clone-friendly via Arc: clones share both the records and the sequence.
#[derive(Clone)]
pub struct InMemoryTemplateStore {
    storage: Arc<RwLock<HashMap<String, StoredTemplate>>>,
    next_id: Arc<AtomicU64>,
}

impl Default for InMemoryTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTemplateStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::with_id_seed(1)
    }

    /// Create a new empty store whose first assigned id is `seed`.
    pub fn with_id_seed(seed: u64) -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(seed.max(1))),
        }
    }

    /// Number of stored templates.
    pub fn len(&self) -> Result<usize, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;
        Ok(storage.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl TemplateStore for InMemoryTemplateStore {
    fn create_native(&self, alias: &str, name: &str) -> Result<TemplateRecord, StoreError> {
        Ok(TemplateRecord::new(alias, name))
    }

    fn fetch_native(&self, alias: &str) -> Result<Option<TemplateRecord>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("fetch"))?;

        match storage.get(alias) {
            Some(stored) => {
                let record: TemplateRecord = serde_json::from_slice(&stored.bytes)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }
}

impl TemplatePersistence for InMemoryTemplateStore {
    fn persist(&self, record: &TemplateRecord) -> Result<u64, StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("persist"))?;

        if record.is_transient() {
            if storage.contains_key(record.alias()) {
                return Err(StoreError::DuplicateAlias(record.alias().to_string()));
            }
            // Assign only once the record is known to be insertable.
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            let stamped = TemplateRecord::stored(
                id,
                record.alias(),
                record.name(),
                record.content(),
                record
                    .master_alias()
                    .map(str::to_string)
                    .zip(record.master_id()),
            );
            let bytes = serde_json::to_vec(&stamped)?;
            storage.insert(record.alias().to_string(), StoredTemplate { id, bytes });
            return Ok(id);
        }

        match storage.get(record.alias()) {
            Some(stored) if stored.id == record.id() => {}
            Some(_) => return Err(StoreError::DuplicateAlias(record.alias().to_string())),
            None => return Err(StoreError::NotFound(record.alias().to_string())),
        }

        let bytes = serde_json::to_vec(record)?;
        storage.insert(
            record.alias().to_string(),
            StoredTemplate {
                id: record.id(),
                bytes,
            },
        );
        Ok(record.id())
    }

    fn remove(&self, alias: &str, _parent_context_id: i64) -> Result<bool, StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("remove"))?;
        Ok(storage.remove(alias).is_some())
    }
}
