// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use comunidade_ativa::db::{MemoryStore, SessionDocument, SessionStore};
use comunidade_ativa::error::{AppError, Result};
use comunidade_ativa::models::User;
use comunidade_ativa::services::{Registration, Session};
use std::sync::atomic::{AtomicBool, Ordering};

/// Create a session over an empty in-memory store.
#[allow(dead_code)]
pub fn memory_session() -> Session<MemoryStore> {
    Session::new(MemoryStore::new())
}

/// Register the reference user "Ana".
#[allow(dead_code)]
pub fn register_ana<S: SessionStore>(session: &mut Session<S>) -> User {
    session
        .register(Registration::new("Ana", "ana@x.com", "secret"))
        .expect("Registration should succeed")
}

/// Store whose writes can be switched to fail.
#[allow(dead_code)]
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    fail_writes: AtomicBool,
}

#[allow(dead_code)]
impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl SessionStore for FlakyStore {
    fn load_document(&self) -> Result<SessionDocument> {
        self.inner.load_document()
    }

    fn write_document(&self, document: &SessionDocument) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Persistence("quota exceeded".to_string()));
        }
        self.inner.write_document(document)
    }
}
