//! Template persistence.
//!
//! Templates are stored at full asset resolution; the editor converts to and
//! from its reduced editing scale on load and save.

mod memory;
mod record;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStore;
pub use record::{PersistedTemplate, TemplateRecord};

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Template not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async operations (compatible with WASM).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Backend holding persisted templates by id.
pub trait TemplateStore: Send + Sync {
    fn save(&self, id: &str, template: &PersistedTemplate) -> BoxFuture<'_, StorageResult<()>>;

    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<PersistedTemplate>>;

    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// All stored template ids.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>>;
}
