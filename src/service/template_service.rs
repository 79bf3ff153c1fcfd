//! Template service: the bridge between [`Template`] entities and the
//! store's native records.
//!
//! ## Example
//!
//! ```ignore
//! use fluent_template::{StoreHandle, TemplateService};
//!
//! let service = TemplateService::new(StoreHandle::in_memory());
//! let mut master = service.create("Master", "Master")?;
//! master.save()?;
//!
//! let mut page = service.create("Page", "Page")?;
//! page.set_master_template(Some(&master))?.save()?;
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use super::StoreHandle;
use crate::config::{CyclePolicy, ServiceConfig};
use crate::error::TemplateError;
use crate::record::TemplateRecord;
use crate::store::{TemplatePersistence, TemplateStore};
use crate::template::Template;

/// Creates, looks up and persists templates through the configured
/// collaborators.
///
/// Cloning is cheap and every clone talks to the same store. Each wrapped
/// [`Template`] carries a clone so it can save and delete itself.
#[derive(Clone)]
pub struct TemplateService {
    store: Arc<dyn TemplateStore>,
    persistence: Arc<dyn TemplatePersistence>,
    config: ServiceConfig,
}

impl std::fmt::Debug for TemplateService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TemplateService {
    pub fn new(handle: StoreHandle) -> Self {
        TemplateService {
            store: handle.store,
            persistence: handle.persistence,
            config: handle.config,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Create a new, unsaved template. Alias uniqueness is left to the store
    /// and checked when the template is first saved.
    pub fn create(&self, alias: &str, name: &str) -> Result<Template, TemplateError> {
        let record = self.store.create_native(alias, name)?;
        debug!(alias, name, "created template");
        Ok(self.wrap(record))
    }

    /// Look a template up by alias. A missing alias is `Ok(None)`.
    pub fn get(&self, alias: &str) -> Result<Option<Template>, TemplateError> {
        let record = self.store.fetch_native(alias)?;
        debug!(alias, found = record.is_some(), "fetched template");
        Ok(record.map(|record| self.wrap(record)))
    }

    /// Wrap a native record in a [`Template`] bound to this service.
    pub fn wrap(&self, record: TemplateRecord) -> Template {
        Template::from_record(record, self.clone())
    }

    /// Stored ancestors of `alias`, nearest master first.
    ///
    /// The walk stops at a root or at a master alias that is not stored.
    pub fn ancestors(&self, alias: &str) -> Result<Vec<Template>, TemplateError> {
        let Some(record) = self.store.fetch_native(alias)? else {
            return Ok(Vec::new());
        };

        let mut chain = vec![alias.to_string()];
        let mut seen: HashSet<String> = HashSet::from([alias.to_string()]);
        let mut ancestors = Vec::new();
        let mut next = record.master_alias().map(str::to_string);

        while let Some(master_alias) = next {
            chain.push(master_alias.clone());
            if !seen.insert(master_alias.clone()) {
                return Err(TemplateError::CycleDetected {
                    alias: alias.to_string(),
                    chain,
                });
            }
            let Some(master) = self.store.fetch_native(&master_alias)? else {
                break;
            };
            if ancestors.len() >= self.config.get_max_depth() {
                return Err(TemplateError::DepthExceeded {
                    alias: alias.to_string(),
                    max_depth: self.config.get_max_depth(),
                });
            }
            next = master.master_alias().map(str::to_string);
            ancestors.push(self.wrap(master));
        }

        Ok(ancestors)
    }

    pub(crate) fn save_record(&self, record: &mut TemplateRecord) -> Result<(), TemplateError> {
        let was_transient = record.is_transient();
        let id = self.persistence.persist(record)?;
        if was_transient {
            record.set_id(id);
        } else if id != record.id() {
            warn!(
                alias = record.alias(),
                id = record.id(),
                returned = id,
                "store returned a different id; keeping the existing one"
            );
        }
        debug!(
            alias = record.alias(),
            id = record.id(),
            inserted = was_transient,
            master = record.master_alias(),
            "saved template"
        );
        Ok(())
    }

    pub(crate) fn delete_record(&self, alias: &str) -> Result<bool, TemplateError> {
        let existed = self
            .persistence
            .remove(alias, self.config.get_parent_context_id())?;
        debug!(alias, existed, "deleted template");
        Ok(existed)
    }

    /// Check that linking `child` under `master` keeps the hierarchy a tree.
    ///
    /// The master's own link is read from the in-memory record; links above
    /// it come from the store.
    pub(crate) fn check_master(
        &self,
        child: &TemplateRecord,
        master: &TemplateRecord,
    ) -> Result<(), TemplateError> {
        if master.is_transient() {
            warn!(
                alias = child.alias(),
                master = master.alias(),
                "master template has not been saved; its id is recorded as 0"
            );
        }

        if self.config.get_cycle_policy() == CyclePolicy::Allow {
            return Ok(());
        }

        let mut chain = vec![child.alias().to_string(), master.alias().to_string()];
        if master.alias() == child.alias() {
            return Err(TemplateError::CycleDetected {
                alias: child.alias().to_string(),
                chain,
            });
        }

        let mut seen: HashSet<String> = HashSet::from([master.alias().to_string()]);
        let mut next = master.master_alias().map(str::to_string);
        let mut depth = 1;

        while let Some(master_alias) = next {
            chain.push(master_alias.clone());
            if master_alias == child.alias() {
                return Err(TemplateError::CycleDetected {
                    alias: child.alias().to_string(),
                    chain,
                });
            }
            // A loop further up that does not pass through `child`.
            if !seen.insert(master_alias.clone()) {
                warn!(alias = child.alias(), chain = ?chain, "existing master chain is cyclic");
                return Ok(());
            }
            if depth >= self.config.get_max_depth() {
                return Err(TemplateError::DepthExceeded {
                    alias: child.alias().to_string(),
                    max_depth: self.config.get_max_depth(),
                });
            }
            depth += 1;

            next = match self.store.fetch_native(&master_alias)? {
                Some(record) => record.master_alias().map(str::to_string),
                None => None,
            };
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryTemplateStore;

    fn service_with(store: &InMemoryTemplateStore, config: ServiceConfig) -> TemplateService {
        TemplateService::new(StoreHandle::from_backend(store.clone()).with_config(config))
    }

    fn stored(store: &InMemoryTemplateStore, alias: &str, master: Option<(&str, u64)>) -> u64 {
        let mut record = TemplateRecord::new(alias, alias);
        if let Some((master_alias, master_id)) = master {
            record.set_master(master_alias, master_id);
        }
        store.persist(&record).unwrap()
    }

    #[test]
    fn create_wraps_transient_record() {
        let service = TemplateService::new(StoreHandle::in_memory());
        let template = service.create("A", "Alpha").unwrap();
        assert_eq!(template.alias(), "A");
        assert_eq!(template.id(), 0);
        assert!(service.get("A").unwrap().is_none());
    }

    #[test]
    fn ancestors_nearest_first() {
        let store = InMemoryTemplateStore::new();
        let root = stored(&store, "Root", None);
        let mid = stored(&store, "Mid", Some(("Root", root)));
        stored(&store, "Leaf", Some(("Mid", mid)));

        let service = service_with(&store, ServiceConfig::default());
        let aliases: Vec<String> = service
            .ancestors("Leaf")
            .unwrap()
            .iter()
            .map(|t| t.alias().to_string())
            .collect();
        assert_eq!(aliases, vec!["Mid", "Root"]);
    }

    #[test]
    fn ancestors_of_missing_alias_is_empty() {
        let service = TemplateService::new(StoreHandle::in_memory());
        assert!(service.ancestors("nope").unwrap().is_empty());
    }

    #[test]
    fn ancestors_stop_at_unstored_master() {
        let store = InMemoryTemplateStore::new();
        stored(&store, "Leaf", Some(("Gone", 9)));
        let service = service_with(&store, ServiceConfig::default());
        assert!(service.ancestors("Leaf").unwrap().is_empty());
    }

    #[test]
    fn ancestors_stop_at_unstored_master_on_depth_limit() {
        let store = InMemoryTemplateStore::new();
        let a = stored(&store, "A", Some(("Gone", 99)));
        stored(&store, "B", Some(("A", a)));

        let service = service_with(&store, ServiceConfig::new().max_depth(1));
        let aliases: Vec<String> = service
            .ancestors("B")
            .unwrap()
            .iter()
            .map(|t| t.alias().to_string())
            .collect();
        assert_eq!(aliases, vec!["A"]);
    }

    #[test]
    fn ancestors_report_stored_cycle() {
        let store = InMemoryTemplateStore::new();
        stored(&store, "A", Some(("B", 2)));
        stored(&store, "B", Some(("A", 1)));

        let service = service_with(&store, ServiceConfig::default());
        let err = service.ancestors("A").unwrap_err();
        assert_eq!(
            err,
            TemplateError::CycleDetected {
                alias: "A".into(),
                chain: vec!["A".into(), "B".into(), "A".into()],
            }
        );
    }

    #[test]
    fn ancestors_respect_depth_limit() {
        let store = InMemoryTemplateStore::new();
        let a = stored(&store, "A", None);
        let b = stored(&store, "B", Some(("A", a)));
        stored(&store, "C", Some(("B", b)));

        let service = service_with(&store, ServiceConfig::new().max_depth(1));
        let err = service.ancestors("C").unwrap_err();
        assert_eq!(
            err,
            TemplateError::DepthExceeded {
                alias: "C".into(),
                max_depth: 1,
            }
        );
    }

    #[test]
    fn check_master_allows_anything_by_default() {
        let service = TemplateService::new(StoreHandle::in_memory());
        let record = TemplateRecord::new("A", "Alpha");
        assert!(service.check_master(&record, &record).is_ok());
    }

    #[test]
    fn check_master_tolerates_unrelated_loop() {
        let store = InMemoryTemplateStore::new();
        stored(&store, "X", Some(("Y", 2)));
        stored(&store, "Y", Some(("X", 1)));
        let service = service_with(&store, ServiceConfig::new().cycle_policy(CyclePolicy::Reject));

        let child = TemplateRecord::new("Child", "Child");
        let master = store.fetch_native("X").unwrap().unwrap();
        assert!(service.check_master(&child, &master).is_ok());
    }
}
