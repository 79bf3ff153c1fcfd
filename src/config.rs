//! Service configuration.

/// What `set_master_template` does when the new master would make a
/// template its own ancestor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CyclePolicy {
    /// Link without checking (the store accepts any chain).
    #[default]
    Allow,
    /// Walk the stored ancestry and refuse cyclic links.
    Reject,
}

/// Settings shared by a [`TemplateService`](crate::TemplateService) and the
/// templates it wraps.
///
/// ```ignore
/// let config = ServiceConfig::new()
///     .parent_context_id(-1)
///     .cycle_policy(CyclePolicy::Reject);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    parent_context_id: i64,
    cycle_policy: CyclePolicy,
    max_depth: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            parent_context_id: 0,
            cycle_policy: CyclePolicy::Allow,
            max_depth: 64,
        }
    }
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scoping value handed to [`TemplatePersistence::remove`](crate::TemplatePersistence::remove).
    pub fn parent_context_id(mut self, parent_context_id: i64) -> Self {
        self.parent_context_id = parent_context_id;
        self
    }

    pub fn cycle_policy(mut self, cycle_policy: CyclePolicy) -> Self {
        self.cycle_policy = cycle_policy;
        self
    }

    /// Longest master chain the ancestry walk follows.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn get_parent_context_id(&self) -> i64 {
        self.parent_context_id
    }

    pub fn get_cycle_policy(&self) -> CyclePolicy {
        self.cycle_policy
    }

    pub fn get_max_depth(&self) -> usize {
        self.max_depth
    }
}
