use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::sync::Arc;
use std::time::Duration;

use hearth_core::view::ProjectRow;
use hearth_core::{HearthConfig, OpenOutcome, RecentProjects, WelcomeScreen};

use crate::loader::FsProjectLoader;
use crate::mode::AppMode;
use crate::recents::FileRecents;
use crate::ui::VisibleList;

type Screen = WelcomeScreen<FsProjectLoader, FileRecents, VisibleList>;

/// Main application state
pub struct App {
    /// The welcome screen core
    pub screen: Screen,

    /// Shared registry handle, for recording successful opens
    registry: Arc<FileRecents>,

    /// Current input mode
    pub mode: AppMode,

    /// Selected row index
    pub selected: usize,

    /// Folder-path input buffer (OPEN FOLDER mode)
    pub path_input: String,

    /// Status message (shown in the status bar)
    pub status_message: Option<String>,

    /// Project handed off to the editor shell, set on dismiss
    pub opened_project: Option<String>,

    /// Should quit?
    pub should_quit: bool,
}

impl App {
    /// Create a new App and perform the initial render
    pub fn new(config: &HearthConfig, registry: Arc<FileRecents>) -> Self {
        let mut screen = WelcomeScreen::new(
            config,
            FsProjectLoader,
            Arc::clone(&registry),
            VisibleList::default(),
        );
        screen.init();

        Self {
            screen,
            registry,
            mode: AppMode::Browse,
            selected: 0,
            path_input: String::new(),
            status_message: None,
            opened_project: None,
            should_quit: false,
        }
    }

    /// Rows committed by the last render pass
    pub fn rows(&self) -> &[ProjectRow] {
        &self.screen.view().sink().rows
    }

    /// Handle keyboard input
    pub async fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        match self.mode {
            AppMode::Browse => self.handle_browse_mode(key).await?,
            AppMode::PathInput => self.handle_path_input_mode(key).await?,
        }
        Ok(())
    }

    /// Handle browse mode keys
    async fn handle_browse_mode(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }

            // Selection
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
            }

            // Open the selected project
            KeyCode::Enter => {
                if let Some(row) = self.rows().get(self.selected) {
                    let path = row.full_path.clone();
                    self.open_project(path).await;
                }
            }

            // Remove the selected project. The remove control consumes
            // the key outright: it never falls through to the open
            // handler, and the welcome row has no remove control.
            KeyCode::Char('x') | KeyCode::Delete => {
                if let Some(row) = self.rows().get(self.selected) {
                    if row.removable {
                        let path = row.full_path.clone();
                        self.screen.remove_project(&path);
                        self.clamp_selection();
                        self.status_message = Some(format!("Removed {}", path));
                    }
                }
            }

            // Open a folder by path (stands in for the host folder picker)
            KeyCode::Char('o') => {
                self.mode = AppMode::PathInput;
                self.path_input.clear();
            }

            // Explore the sample project
            KeyCode::Char('e') => {
                let path = self.screen.explore_path().to_string();
                let outcome = self.screen.explore_sample().await;
                self.apply_outcome(path, outcome);
            }

            _ => {}
        }
        Ok(())
    }

    /// Handle path input mode keys
    async fn handle_path_input_mode(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            // Cancel input
            KeyCode::Esc => {
                self.mode = AppMode::Browse;
                self.path_input.clear();
            }

            // Open the typed folder
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.path_input);
                self.mode = AppMode::Browse;

                let path = input.trim().to_string();
                if !path.is_empty() {
                    self.open_project(path).await;
                }
            }

            // Backspace
            KeyCode::Backspace => {
                self.path_input.pop();
            }

            // Type characters
            KeyCode::Char(c) => {
                self.path_input.push(c);
            }

            _ => {}
        }
        Ok(())
    }

    async fn open_project(&mut self, path: String) {
        let outcome = self.screen.open_project(&path).await;
        self.apply_outcome(path, outcome);
    }

    fn apply_outcome(&mut self, path: String, outcome: OpenOutcome) {
        match outcome {
            OpenOutcome::Dismiss => {
                // Record the hand-off so the project tops the list on
                // the next launch.
                self.registry.add(&path);
                self.opened_project = Some(path);
                self.should_quit = true;
            }
            OpenOutcome::Refresh => {
                self.clamp_selection();
                self.status_message = Some(format!("Could not open {}", path));
            }
        }
    }

    /// Move selection up
    fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down
    fn select_next(&mut self) {
        if self.selected < self.rows().len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Poll for events with timeout
    pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}
