//! Template Service - create, fetch, save and delete templates against a
//! [`StoreHandle`].
//!
//! Most callers never build one directly: [`Template::create`](crate::Template::create)
//! and friends go through the process-wide instance from
//! [`loader::instance`](crate::loader::instance). Building a service by hand
//! is useful for tests and for hosts that manage several stores.

mod handle;
mod template_service;

pub use handle::StoreHandle;
pub use template_service::TemplateService;
