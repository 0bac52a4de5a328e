//! Session-keyed result cache for redisplay and export without recomputation
//!
//! The engine never touches this store. The calling layer owns it, supplies
//! the opaque session token, writes once per completed computation, and reads
//! as many times as it needs. Repeated writes for the same token are
//! last-write-wins.

use std::collections::HashMap;

use log::debug;

use crate::projection::ProjectionResult;

/// Store/fetch capability injected at the core boundary by the calling layer
pub trait ResultStore {
    /// Store a result under a session token, replacing any prior entry
    fn store(&mut self, session_id: &str, result: ProjectionResult);

    /// Fetch the stored result for a session token, if any
    fn fetch(&self, session_id: &str) -> Option<&ProjectionResult>;
}

/// In-memory result store keyed by opaque session token
#[derive(Debug, Default)]
pub struct SessionCache {
    entries: HashMap<String, ProjectionResult>,
}

impl SessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the entry for a session token
    pub fn remove(&mut self, session_id: &str) -> Option<ProjectionResult> {
        self.entries.remove(session_id)
    }

    /// Drop all cached results
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResultStore for SessionCache {
    fn store(&mut self, session_id: &str, result: ProjectionResult) {
        debug!("caching projection result for session {}", session_id);
        self.entries.insert(session_id.to_string(), result);
    }

    fn fetch(&self, session_id: &str) -> Option<&ProjectionResult> {
        self.entries.get(session_id)
    }
}
