//! In-memory template store.

use super::{BoxFuture, PersistedTemplate, StorageError, StorageResult, TemplateStore};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory store for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStore {
    templates: RwLock<HashMap<String, PersistedTemplate>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(e: impl std::fmt::Display) -> StorageError {
    StorageError::Other(format!("Lock error: {}", e))
}

impl TemplateStore for MemoryStore {
    fn save(&self, id: &str, template: &PersistedTemplate) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        let template = template.clone();
        Box::pin(async move {
            let mut templates = self.templates.write().map_err(lock_error)?;
            templates.insert(id, template);
            Ok(())
        })
    }

    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<PersistedTemplate>> {
        let id = id.to_string();
        Box::pin(async move {
            let templates = self.templates.read().map_err(lock_error)?;
            templates
                .get(&id)
                .cloned()
                .ok_or_else(|| StorageError::NotFound(id))
        })
    }

    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        Box::pin(async move {
            let mut templates = self.templates.write().map_err(lock_error)?;
            templates.remove(&id);
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        Box::pin(async move {
            let templates = self.templates.read().map_err(lock_error)?;
            Ok(templates.keys().cloned().collect())
        })
    }

    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let id = id.to_string();
        Box::pin(async move {
            let templates = self.templates.read().map_err(lock_error)?;
            Ok(templates.contains_key(&id))
        })
    }
}
