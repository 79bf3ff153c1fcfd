use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::store::{InMemoryTemplateStore, TemplatePersistence, TemplateStore};

/// Everything a [`TemplateService`](super::TemplateService) needs to reach
/// its backing store: the two collaborators plus configuration.
#[derive(Clone)]
pub struct StoreHandle {
    pub(crate) store: Arc<dyn TemplateStore>,
    pub(crate) persistence: Arc<dyn TemplatePersistence>,
    pub(crate) config: ServiceConfig,
}

impl StoreHandle {
    /// Build a handle from separate store and persistence collaborators.
    pub fn new(store: Arc<dyn TemplateStore>, persistence: Arc<dyn TemplatePersistence>) -> Self {
        StoreHandle {
            store,
            persistence,
            config: ServiceConfig::default(),
        }
    }

    /// Build a handle from one backend that implements both contracts.
    pub fn from_backend<B>(backend: B) -> Self
    where
        B: TemplateStore + TemplatePersistence + 'static,
    {
        let backend = Arc::new(backend);
        Self::new(backend.clone(), backend)
    }

    /// A handle over a fresh [`InMemoryTemplateStore`].
    pub fn in_memory() -> Self {
        Self::from_backend(InMemoryTemplateStore::new())
    }

    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
