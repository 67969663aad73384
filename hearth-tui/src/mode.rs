/// Input modes for the welcome screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Navigate the recent-projects list
    Browse,

    /// Type a folder path to open
    PathInput,
}

impl AppMode {
    /// Get display name for status bar
    pub fn display_name(&self) -> &'static str {
        match self {
            AppMode::Browse => "BROWSE",
            AppMode::PathInput => "OPEN FOLDER",
        }
    }

    /// Get color for status bar (in ratatui Color enum)
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            AppMode::Browse => Color::Cyan,
            AppMode::PathInput => Color::Yellow,
        }
    }
}
