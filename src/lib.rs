mod config;
mod error;
pub mod loader;
mod record;
mod schema;
mod service;
mod store;
mod template;

pub use config::{CyclePolicy, ServiceConfig};
pub use error::TemplateError;
pub use loader::LazyLoader;
pub use record::TemplateRecord;
pub use schema::{PreValueRecord, SchemaError};
pub use service::{StoreHandle, TemplateService};
pub use store::{InMemoryTemplateStore, StoreError, TemplatePersistence, TemplateStore};
pub use template::{Template, TemplateState};
