//! Loader - the process-wide [`TemplateService`].
//!
//! The host installs a [`StoreHandle`] once at startup. The service is built
//! from it on the first call to [`instance`], from whichever thread gets
//! there first, and every later call returns the same service.
//!
//! ```ignore
//! use fluent_template::{loader, StoreHandle, Template};
//!
//! loader::install(StoreHandle::in_memory())?;
//! let mut home = Template::create_named("Home Page")?;
//! home.save()?;
//! ```

mod lazy;

pub use lazy::LazyLoader;

use std::sync::OnceLock;

use tracing::debug;

use crate::error::TemplateError;
use crate::service::{StoreHandle, TemplateService};

static HANDLE: OnceLock<StoreHandle> = OnceLock::new();
static SERVICE: LazyLoader<TemplateService> = LazyLoader::new();

/// Register the store the process-wide service will use.
///
/// Only the first call succeeds; later calls get `AlreadyInstalled`.
pub fn install(handle: StoreHandle) -> Result<(), TemplateError> {
    HANDLE
        .set(handle)
        .map_err(|_| TemplateError::AlreadyInstalled)
}

pub fn is_installed() -> bool {
    HANDLE.get().is_some()
}

/// The process-wide template service, built on first use.
///
/// Fails with `NotConfigured` until [`install`] has run. The failure is not
/// remembered, so a call after installation succeeds.
pub fn instance() -> Result<&'static TemplateService, TemplateError> {
    SERVICE.get_or_try_init(|| {
        let handle = HANDLE.get().ok_or(TemplateError::NotConfigured)?;
        debug!(config = ?handle.config(), "constructing template service");
        Ok(TemplateService::new(handle.clone()))
    })
}
