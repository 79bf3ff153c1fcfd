//! Template - the fluent entity wrapping a native [`TemplateRecord`].

use std::fmt;

use crate::error::TemplateError;
use crate::loader;
use crate::record::TemplateRecord;
use crate::service::TemplateService;

/// Where a template is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateState {
    /// Created in memory, never saved.
    Transient,
    /// Saved at least once.
    Persisted,
    /// Removed from the store. Terminal: the in-memory fields stay readable
    /// but the template can no longer be saved or deleted.
    Deleted,
}

/// A named presentation template that may inherit from a master template.
///
/// The master is held by value (its alias and an id snapshot), so a template
/// never keeps its master alive and later changes to the master object do
/// not leak into it.
///
/// A `Template` is not meant to be mutated from several threads at once;
/// mutation takes `&mut self`.
#[derive(Clone)]
pub struct Template {
    record: TemplateRecord,
    state: TemplateState,
    service: TemplateService,
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("record", &self.record)
            .field("state", &self.state)
            .finish()
    }
}

impl Template {
    pub(crate) fn from_record(record: TemplateRecord, service: TemplateService) -> Self {
        let state = if record.is_transient() {
            TemplateState::Transient
        } else {
            TemplateState::Persisted
        };
        Template {
            record,
            state,
            service,
        }
    }

    /// Create a new template using `name` with every space removed as its
    /// alias. Call [`save`](Self::save) to store it.
    pub fn create_named(name: &str) -> Result<Template, TemplateError> {
        let alias = name.replace(' ', "");
        Self::create(&alias, name)
    }

    /// Create a new template. Call [`save`](Self::save) to store it.
    pub fn create(alias: &str, name: &str) -> Result<Template, TemplateError> {
        loader::instance()?.create(alias, name)
    }

    /// Obtain a stored template by its alias.
    pub fn get(alias: &str) -> Result<Option<Template>, TemplateError> {
        loader::instance()?.get(alias)
    }

    pub fn id(&self) -> u64 {
        self.record.id()
    }

    pub fn alias(&self) -> &str {
        self.record.alias()
    }

    pub fn name(&self) -> &str {
        self.record.name()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.record.set_name(name);
        self
    }

    pub fn content(&self) -> &str {
        self.record.content()
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.record.set_content(content);
        self
    }

    pub fn master_alias(&self) -> Option<&str> {
        self.record.master_alias()
    }

    pub fn master_id(&self) -> Option<u64> {
        self.record.master_id()
    }

    pub fn is_root(&self) -> bool {
        self.record.master_alias().is_none()
    }

    pub fn state(&self) -> TemplateState {
        self.state
    }

    pub fn record(&self) -> &TemplateRecord {
        &self.record
    }

    /// Set the master template.
    ///
    /// Records the master's alias and its id as of this call. `None` is
    /// rejected with `InvalidArgument` and leaves the current master in
    /// place, as does a cycle refused by the service's cycle policy.
    pub fn set_master_template(
        &mut self,
        master: Option<&Template>,
    ) -> Result<&mut Self, TemplateError> {
        let master = master.ok_or(TemplateError::InvalidArgument("master_template"))?;
        self.service.check_master(&self.record, &master.record)?;
        self.record.set_master(master.alias(), master.id());
        Ok(self)
    }

    /// Un-set the master template.
    pub fn clear_master_template(&mut self) -> &mut Self {
        self.record.clear_master();
        self
    }

    /// The stored master template, if one is set and still exists.
    pub fn master_template(&self) -> Result<Option<Template>, TemplateError> {
        match self.record.master_alias() {
            Some(alias) => self.service.get(alias),
            None => Ok(None),
        }
    }

    /// Save this template. The first save assigns the id; later saves keep it.
    ///
    /// On failure the in-memory fields are left exactly as they were.
    pub fn save(&mut self) -> Result<&mut Self, TemplateError> {
        self.ensure_live()?;
        self.service.save_record(&mut self.record)?;
        self.state = TemplateState::Persisted;
        Ok(self)
    }

    /// Delete this template from the store.
    ///
    /// The in-memory fields stay readable afterwards, but further `save` or
    /// `delete` calls fail with `Deleted`.
    pub fn delete(&mut self) -> Result<(), TemplateError> {
        self.ensure_live()?;
        self.service.delete_record(self.record.alias())?;
        self.state = TemplateState::Deleted;
        Ok(())
    }

    fn ensure_live(&self) -> Result<(), TemplateError> {
        if self.state == TemplateState::Deleted {
            return Err(TemplateError::Deleted {
                alias: self.record.alias().to_string(),
            });
        }
        Ok(())
    }
}
