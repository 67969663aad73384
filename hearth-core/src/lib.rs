pub mod actions;
pub mod config;
pub mod error;
pub mod label;
pub mod paths;
pub mod registry;
pub mod screen;
pub mod view;

pub use actions::{OpenOutcome, ProjectActions, ProjectLoader};
pub use config::{HearthConfig, LauncherConfig, PathsConfig};
pub use error::{HearthError, Result};
pub use label::display_label;
pub use registry::{MemoryRecents, RecentProjects};
pub use screen::WelcomeScreen;
pub use view::{build_rows, ProjectRow, RecentProjectsView, RowSink, TAB_ORDER_BASE};
