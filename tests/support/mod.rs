#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Once};

use fluent_template::{
    loader, InMemoryTemplateStore, StoreError, StoreHandle, TemplatePersistence, TemplateRecord,
};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);
static INSTALL: Once = Once::new();

/// Aliases are unique per call so tests sharing the process-wide store
/// don't collide.
pub fn unique(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{}{}", prefix, id)
}

/// Install an in-memory store for the process-wide service, once.
pub fn install_in_memory() {
    INSTALL.call_once(|| {
        loader::install(StoreHandle::in_memory()).unwrap();
    });
}

/// Persistence that records every call and forwards to an in-memory store.
#[derive(Clone, Default)]
pub struct RecordingPersistence {
    pub inner: InMemoryTemplateStore,
    pub removed: Arc<Mutex<Vec<(String, i64)>>>,
    pub persisted: Arc<Mutex<Vec<String>>>,
}

impl TemplatePersistence for RecordingPersistence {
    fn persist(&self, record: &TemplateRecord) -> Result<u64, StoreError> {
        self.persisted
            .lock()
            .unwrap()
            .push(record.alias().to_string());
        self.inner.persist(record)
    }

    fn remove(&self, alias: &str, parent_context_id: i64) -> Result<bool, StoreError> {
        self.removed
            .lock()
            .unwrap()
            .push((alias.to_string(), parent_context_id));
        self.inner.remove(alias, parent_context_id)
    }
}

/// Persistence whose every call fails with a backend error.
pub struct FailingPersistence;

impl TemplatePersistence for FailingPersistence {
    fn persist(&self, _record: &TemplateRecord) -> Result<u64, StoreError> {
        Err(StoreError::Backend("disk full".into()))
    }

    fn remove(&self, _alias: &str, _parent_context_id: i64) -> Result<bool, StoreError> {
        Err(StoreError::Backend("disk full".into()))
    }
}
