//! User-triggered operations on the recent-projects list.
//!
//! Neither operation retries or throws to the caller: an open attempt
//! settles into exactly one of two outcomes, and removal always leads
//! to a re-render. Failure reasons are logged here, never surfaced;
//! reporting them to the user is the loader's job.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::registry::RecentProjects;

/// What the screen must do once an open attempt settles. The variants
/// are mutually exclusive: exactly one outcome per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The project is loading; dismiss the welcome screen.
    Dismiss,

    /// The attempt failed; re-render against the current registry and
    /// leave the screen open.
    Refresh,
}

/// Host project loader: asynchronous open-by-path.
#[async_trait]
pub trait ProjectLoader: Send + Sync {
    async fn open(&self, path: &str) -> Result<()>;
}

/// The open and remove operations, wired to a loader and a registry.
pub struct ProjectActions<L, R> {
    loader: L,
    registry: Arc<R>,

    /// Serializes open attempts: a second open waits for the first to
    /// settle, then runs against the then-current state.
    open_gate: Mutex<()>,
}

impl<L: ProjectLoader, R: RecentProjects> ProjectActions<L, R> {
    pub fn new(loader: L, registry: Arc<R>) -> Self {
        Self {
            loader,
            registry,
            open_gate: Mutex::new(()),
        }
    }

    /// Delegate to the loader and translate the result into the
    /// screen-level outcome. The rest of the screen stays interactive
    /// while the attempt is pending.
    pub async fn open_project(&self, path: &str) -> OpenOutcome {
        let _attempt = self.open_gate.lock().await;

        match self.loader.open(path).await {
            Ok(()) => OpenOutcome::Dismiss,
            Err(err) => {
                tracing::debug!(path, error = %err, "project open failed");
                OpenOutcome::Refresh
            }
        }
    }

    /// Request removal from the registry. Removing an absent path is a
    /// no-op at the registry level; the caller re-renders either way.
    pub fn remove_project(&self, path: &str) {
        self.registry.remove(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HearthError;
    use crate::registry::MemoryRecents;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedLoader {
        fail: bool,
    }

    #[async_trait]
    impl ProjectLoader for ScriptedLoader {
        async fn open(&self, path: &str) -> Result<()> {
            if self.fail {
                Err(HearthError::project_open(path, "scripted failure"))
            } else {
                Ok(())
            }
        }
    }

    /// Tracks how many open calls overlap.
    #[derive(Default)]
    struct ConcurrencyProbe {
        active: AtomicUsize,
        max_active: AtomicUsize,
    }

    struct ProbedLoader {
        probe: Arc<ConcurrencyProbe>,
    }

    #[async_trait]
    impl ProjectLoader for ProbedLoader {
        async fn open(&self, _path: &str) -> Result<()> {
            let now = self.probe.active.fetch_add(1, Ordering::SeqCst) + 1;
            self.probe.max_active.fetch_max(now, Ordering::SeqCst);
            for _ in 0..4 {
                tokio::task::yield_now().await;
            }
            self.probe.active.fetch_sub(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn successful_open_dismisses() {
        let registry = Arc::new(MemoryRecents::new());
        let actions = ProjectActions::new(ScriptedLoader { fail: false }, registry);
        assert_eq!(actions.open_project("/p/a").await, OpenOutcome::Dismiss);
    }

    #[tokio::test]
    async fn failed_open_refreshes() {
        let registry = Arc::new(MemoryRecents::new());
        let actions = ProjectActions::new(ScriptedLoader { fail: true }, registry);
        assert_eq!(actions.open_project("/p/a").await, OpenOutcome::Refresh);
    }

    #[tokio::test]
    async fn failed_open_does_not_touch_the_registry() {
        let registry = Arc::new(MemoryRecents::with_entries(vec!["/p/a".into()]));
        let actions =
            ProjectActions::new(ScriptedLoader { fail: true }, Arc::clone(&registry));
        actions.open_project("/p/missing").await;
        assert_eq!(registry.snapshot(), vec!["/p/a"]);
    }

    #[tokio::test]
    async fn remove_is_idempotent_at_the_registry() {
        let registry = Arc::new(MemoryRecents::with_entries(vec!["/p/a".into()]));
        let actions =
            ProjectActions::new(ScriptedLoader { fail: false }, Arc::clone(&registry));

        actions.remove_project("/p/a");
        assert!(registry.snapshot().is_empty());

        actions.remove_project("/p/a");
        assert!(registry.snapshot().is_empty());
    }

    #[tokio::test]
    async fn open_attempts_are_serialized() {
        let probe = Arc::new(ConcurrencyProbe::default());
        let registry = Arc::new(MemoryRecents::new());
        let actions = Arc::new(ProjectActions::new(
            ProbedLoader {
                probe: Arc::clone(&probe),
            },
            registry,
        ));

        let first = tokio::spawn({
            let actions = Arc::clone(&actions);
            async move { actions.open_project("/p/a").await }
        });
        let second = tokio::spawn({
            let actions = Arc::clone(&actions);
            async move { actions.open_project("/p/b").await }
        });

        assert_eq!(first.await.unwrap(), OpenOutcome::Dismiss);
        assert_eq!(second.await.unwrap(), OpenOutcome::Dismiss);
        assert_eq!(probe.max_active.load(Ordering::SeqCst), 1);
    }
}
