//! The external recent-projects registry, seen through a narrow
//! interface: snapshot reads plus add/remove requests. The registry
//! serializes its own mutations, so a snapshot is always internally
//! consistent and every mutation is visible to the next snapshot.

use std::sync::Mutex;

use crate::paths;

/// Ordered recent-projects registry, most recent first, no duplicates.
pub trait RecentProjects: Send + Sync {
    /// Ordered snapshot of the current entries.
    fn snapshot(&self) -> Vec<String>;

    /// Record `path` as the most recent project, displacing any entry
    /// for the same project (by normalized path).
    fn add(&self, path: &str);

    /// Remove `path` from the registry. Removing an absent path is a
    /// successful no-op.
    fn remove(&self, path: &str);
}

/// In-memory registry for hosts without persistence, and for tests.
#[derive(Default)]
pub struct MemoryRecents {
    entries: Mutex<Vec<String>>,
}

impl MemoryRecents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the registry, keeping the first occurrence of duplicate
    /// entries (by normalized path).
    pub fn with_entries(entries: Vec<String>) -> Self {
        let mut deduped: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            if !deduped.iter().any(|e| paths::equivalent(e, &entry)) {
                deduped.push(entry);
            }
        }
        Self {
            entries: Mutex::new(deduped),
        }
    }
}

impl RecentProjects for MemoryRecents {
    fn snapshot(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    fn add(&self, path: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|e| !paths::equivalent(e, path));
        entries.insert(0, path.to_string());
        tracing::debug!(path, "recorded recent project");
    }

    fn remove(&self, path: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|e| !paths::equivalent(e, path));
    }
}
