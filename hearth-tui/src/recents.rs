//! File-backed recent-projects store.
//!
//! The welcome screen only sees the `RecentProjects` interface; the
//! TOML file underneath is this host's concern. Mutations are
//! serialized through an internal mutex and written back immediately,
//! so every snapshot read observes the previous mutation.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use hearth_core::paths;
use hearth_core::registry::RecentProjects;

#[derive(Debug, Default, Serialize, Deserialize)]
struct RecentsFile {
    #[serde(default)]
    projects: Vec<String>,
}

/// Recent projects persisted as TOML, most recent first.
pub struct FileRecents {
    path: PathBuf,
    entries: Mutex<Vec<String>>,
}

impl FileRecents {
    /// Load the store backing file at `path`. A missing file is an
    /// empty list; a corrupt one is logged and treated as empty rather
    /// than failing startup.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<RecentsFile>(&content) {
                Ok(file) => dedupe(file.projects),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "ignoring corrupt recents file"
                    );
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    /// Default backing file: ~/.hearth/recents.toml
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hearth/recents.toml")
    }

    pub fn file_path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &[String]) {
        let file = RecentsFile {
            projects: entries.to_vec(),
        };
        let serialized = match toml::to_string_pretty(&file) {
            Ok(s) => s,
            Err(err) => {
                tracing::warn!(error = %err, "could not serialize recents");
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "could not create recents directory"
                );
                return;
            }
        }

        if let Err(err) = fs::write(&self.path, serialized) {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "could not persist recents"
            );
        }
    }
}

fn dedupe(candidates: Vec<String>) -> Vec<String> {
    let mut deduped: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !deduped.iter().any(|e| paths::equivalent(e, &candidate)) {
            deduped.push(candidate);
        }
    }
    deduped
}

impl RecentProjects for FileRecents {
    fn snapshot(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    fn add(&self, path: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|e| !paths::equivalent(e, path));
        entries.insert(0, path.to_string());
        self.persist(&entries);
    }

    fn remove(&self, path: &str) {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| !paths::equivalent(e, path));
        // Absent paths change nothing; skip the write so the file is
        // untouched.
        if entries.len() != before {
            self.persist(&entries);
        }
    }
}
