//! TemplateRecord - the store's native representation of a template.

use serde::{Deserialize, Serialize};

/// Native template record as held by a [`TemplateStore`](crate::TemplateStore).
///
/// The master reference is kept by value (alias + id snapshot). Both halves
/// are written together, so they are either both present or both absent.
/// Outside this crate the identity and master fields are read-only once the
/// record exists; stores rebuild fetched records with [`stored`](Self::stored).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    id: u64,
    alias: String,
    name: String,
    #[serde(default)]
    content: String,
    master_alias: Option<String>,
    master_id: Option<u64>,
}

impl TemplateRecord {
    /// A transient record (`id == 0`) with no master.
    pub fn new(alias: impl Into<String>, name: impl Into<String>) -> Self {
        TemplateRecord {
            alias: alias.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// A record as read back from a store: its id, body and master link.
    ///
    /// ```ignore
    /// let record = TemplateRecord::stored(
    ///     row.id,
    ///     row.alias,
    ///     row.name,
    ///     row.content,
    ///     row.master_alias.zip(row.master_id),
    /// );
    /// ```
    pub fn stored(
        id: u64,
        alias: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
        master: Option<(String, u64)>,
    ) -> Self {
        let (master_alias, master_id) = match master {
            Some((alias, id)) => (Some(alias), Some(id)),
            None => (None, None),
        };
        TemplateRecord {
            id,
            alias: alias.into(),
            name: name.into(),
            content: content.into(),
            master_alias,
            master_id,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_transient(&self) -> bool {
        self.id == 0
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn master_alias(&self) -> Option<&str> {
        self.master_alias.as_deref()
    }

    pub fn master_id(&self) -> Option<u64> {
        self.master_id
    }

    /// Stamped by the service with the id the store returned on first persist.
    pub(crate) fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    pub(crate) fn set_master(&mut self, alias: impl Into<String>, id: u64) {
        self.master_alias = Some(alias.into());
        self.master_id = Some(id);
    }

    pub(crate) fn clear_master(&mut self) {
        self.master_alias = None;
        self.master_id = None;
    }
}
