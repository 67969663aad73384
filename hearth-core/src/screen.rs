//! The welcome screen: wires the open-folder and explore triggers,
//! owns the render→commit cycle, and routes action outcomes back into
//! view state.

use std::sync::Arc;

use crate::actions::{OpenOutcome, ProjectActions, ProjectLoader};
use crate::config::HearthConfig;
use crate::registry::RecentProjects;
use crate::view::{RecentProjectsView, RowSink};

pub struct WelcomeScreen<L, R, S: RowSink> {
    actions: Arc<ProjectActions<L, R>>,
    registry: Arc<R>,
    view: RecentProjectsView<S>,
    welcome_path: String,
    explore_path: String,
    known_prefixes: Vec<String>,
    dismissed: bool,
}

impl<L: ProjectLoader, R: RecentProjects, S: RowSink> WelcomeScreen<L, R, S> {
    pub fn new(config: &HearthConfig, loader: L, registry: Arc<R>, sink: S) -> Self {
        Self {
            actions: Arc::new(ProjectActions::new(loader, Arc::clone(&registry))),
            view: RecentProjectsView::new(sink),
            welcome_path: config.paths.welcome_project.to_string_lossy().into_owned(),
            explore_path: config.paths.explore_project.to_string_lossy().into_owned(),
            known_prefixes: config.known_prefixes(),
            registry,
            dismissed: false,
        }
    }

    /// Perform the initial render. The open-folder trigger is wired by
    /// the host: its picker produces a path, which comes back through
    /// [`open_project`](Self::open_project).
    pub fn init(&mut self) {
        self.refresh();
    }

    /// Full re-render from the current registry snapshot.
    pub fn refresh(&mut self) {
        let rows = self.view.render(
            &self.registry.snapshot(),
            &self.welcome_path,
            &self.known_prefixes,
        );
        self.view.commit(&rows);
    }

    /// Open a project and apply the outcome: dismiss on success, full
    /// re-render on failure. Exactly one of the two happens.
    pub async fn open_project(&mut self, path: &str) -> OpenOutcome {
        let outcome = self.actions.open_project(path).await;
        self.apply_open_outcome(outcome);
        outcome
    }

    /// Open the host-supplied sample project.
    pub async fn explore_sample(&mut self) -> OpenOutcome {
        let path = self.explore_path.clone();
        self.open_project(&path).await
    }

    /// Apply a settled open outcome against the current state. Hosts
    /// that drive attempts on their own tasks (via
    /// [`actions`](Self::actions)) call this when the attempt lands,
    /// however late; the effect hits whatever state exists by then.
    pub fn apply_open_outcome(&mut self, outcome: OpenOutcome) {
        match outcome {
            OpenOutcome::Dismiss => self.dismissed = true,
            OpenOutcome::Refresh => self.refresh(),
        }
    }

    /// Remove a project from the registry and re-render, whether or not
    /// the path was present.
    pub fn remove_project(&mut self, path: &str) {
        self.actions.remove_project(path);
        self.refresh();
    }

    /// Shared handle on the action layer, for hosts that run open
    /// attempts concurrently with the rest of the screen.
    pub fn actions(&self) -> Arc<ProjectActions<L, R>> {
        Arc::clone(&self.actions)
    }

    pub fn view(&self) -> &RecentProjectsView<S> {
        &self.view
    }

    pub fn explore_path(&self) -> &str {
        &self.explore_path
    }

    /// Whether a successful open has signalled the host to close the
    /// screen.
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }
}
