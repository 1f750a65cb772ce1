//! In-memory session store.

use crate::db::{SessionDocument, SessionStore};
use crate::error::{AppError, Result};
use std::sync::Mutex;

/// Store that keeps the document in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<SessionDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document.
    pub fn with_document(document: SessionDocument) -> Self {
        Self {
            document: Mutex::new(document),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load_document(&self) -> Result<SessionDocument> {
        self.document
            .lock()
            .map(|d| d.clone())
            .map_err(|_| AppError::Persistence("memory store lock poisoned".to_string()))
    }

    fn write_document(&self, document: &SessionDocument) -> Result<()> {
        let mut guard = self
            .document
            .lock()
            .map_err(|_| AppError::Persistence("memory store lock poisoned".to_string()))?;
        *guard = document.clone();
        Ok(())
    }
}
