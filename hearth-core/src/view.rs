//! Row data and the render→commit cycle for the recent-projects list.
//!
//! Rows are plain data, rebuilt from scratch on every render pass and
//! handed to a swappable [`RowSink`]. There is no incremental update
//! path: any state change re-renders the whole list.

use serde::Serialize;

use crate::label;
use crate::paths;

/// Tab order assigned to the first row; later rows increment by one.
pub const TAB_ORDER_BASE: u16 = 20;

/// Fixed prefix for synthesized row ids.
const ROW_ID_PREFIX: &str = "recent-prj-";

/// One renderable entry in the recent-projects list.
///
/// Derived fresh per render pass and never mutated in place. `row_id`
/// is unique within its pass; there is no cross-pass stability
/// guarantee and no semantic meaning attached to its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRow {
    /// Identifier unique within one render pass
    pub row_id: String,

    /// Shortened, human-facing label
    pub label: String,

    /// Full project path; the identity used by open/remove
    pub full_path: String,

    /// Keyboard focus order
    pub tab_order: u16,

    /// False exactly for the welcome project, whose remove control is
    /// hidden
    pub removable: bool,
}

/// Build the ordered row sequence for one render pass.
///
/// Rows come out in registry order with tab order counting up from
/// [`TAB_ORDER_BASE`]. `removable` is decided by normalized-path
/// equality against `welcome_path`; labels are derived from the raw
/// path via [`label::display_label`].
pub fn build_rows(
    snapshot: &[String],
    welcome_path: &str,
    known_prefixes: &[String],
) -> Vec<ProjectRow> {
    let welcome = paths::normalize(welcome_path);

    snapshot
        .iter()
        .enumerate()
        .map(|(idx, full_path)| {
            let tab_order = TAB_ORDER_BASE + idx as u16;
            ProjectRow {
                row_id: format!("{ROW_ID_PREFIX}{tab_order}"),
                label: label::display_label(full_path, known_prefixes),
                full_path: full_path.clone(),
                tab_order,
                removable: paths::normalize(full_path) != welcome,
            }
        })
        .collect()
}

/// Render target for the visible list.
///
/// Implementations replace their entire contents on every call;
/// replacing with the same rows must leave the visible state unchanged.
pub trait RowSink {
    fn replace(&mut self, rows: &[ProjectRow]);
}

/// Owns the render→commit cycle. `render` derives rows from a registry
/// snapshot; `commit` hands them to the sink. Together they are the
/// only way the visible list changes.
pub struct RecentProjectsView<S: RowSink> {
    sink: S,
}

impl<S: RowSink> RecentProjectsView<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Derive the row sequence for the given snapshot. Pure; pairs with
    /// [`commit`](Self::commit).
    pub fn render(
        &self,
        snapshot: &[String],
        welcome_path: &str,
        known_prefixes: &[String],
    ) -> Vec<ProjectRow> {
        build_rows(snapshot, welcome_path, known_prefixes)
    }

    /// Replace the visible list with exactly `rows`, in order,
    /// discarding whatever was displayed before. Idempotent: committing
    /// the same rows again produces the same visible state.
    pub fn commit(&mut self, rows: &[ProjectRow]) {
        self.sink.replace(rows);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestSink {
        rows: Vec<ProjectRow>,
        replace_calls: usize,
    }

    impl RowSink for TestSink {
        fn replace(&mut self, rows: &[ProjectRow]) {
            self.rows = rows.to_vec();
            self.replace_calls += 1;
        }
    }

    fn prefixes() -> Vec<String> {
        vec!["/home/alice/projects/".to_string(), "/mnt/".to_string()]
    }

    fn snapshot() -> Vec<String> {
        vec![
            "/home/alice/projects/welcome".to_string(),
            "/home/alice/projects/app1".to_string(),
            "/mnt/usb/app2".to_string(),
        ]
    }

    #[test]
    fn rows_follow_snapshot_order() {
        let rows = build_rows(&snapshot(), "/home/alice/projects/welcome", &prefixes());

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].label, "welcome");
        assert_eq!(rows[1].label, "app1");
        assert_eq!(rows[2].label, "usb/app2");
        assert_eq!(
            rows.iter().map(|r| r.tab_order).collect::<Vec<_>>(),
            vec![TAB_ORDER_BASE, TAB_ORDER_BASE + 1, TAB_ORDER_BASE + 2]
        );
    }

    #[test]
    fn row_ids_are_unique_within_a_pass() {
        let rows = build_rows(&snapshot(), "/home/alice/projects/welcome", &prefixes());
        let mut ids: Vec<&str> = rows.iter().map(|r| r.row_id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), rows.len());
        assert!(rows[0].row_id.starts_with("recent-prj-"));
    }

    #[test]
    fn welcome_row_is_not_removable() {
        // The registry entry carries a trailing separator the config
        // value lacks; identity still matches through normalization.
        let snapshot = vec![
            "/home/alice/projects/welcome/".to_string(),
            "/home/alice/projects/app1".to_string(),
        ];
        let rows = build_rows(&snapshot, "/home/alice/projects/welcome", &prefixes());

        assert!(!rows[0].removable);
        assert!(rows[1].removable);
    }

    #[test]
    fn welcome_absent_from_registry_leaves_all_removable() {
        let snapshot = vec!["/home/alice/projects/app1".to_string()];
        let rows = build_rows(&snapshot, "/opt/hearth/welcome", &prefixes());
        assert!(rows.iter().all(|r| r.removable));
    }

    #[test]
    fn empty_snapshot_renders_no_rows() {
        let rows = build_rows(&[], "/opt/hearth/welcome", &prefixes());
        assert!(rows.is_empty());
    }

    #[test]
    fn commit_replaces_the_whole_list() {
        let mut view = RecentProjectsView::new(TestSink::default());
        let first = view.render(&snapshot(), "/opt/hearth/welcome", &prefixes());
        view.commit(&first);
        assert_eq!(view.sink().rows.len(), 3);

        let shorter = view.render(&snapshot()[..1], "/opt/hearth/welcome", &prefixes());
        view.commit(&shorter);
        assert_eq!(view.sink().rows.len(), 1);
        assert_eq!(view.sink().rows[0].full_path, snapshot()[0]);
    }

    #[test]
    fn double_commit_is_idempotent() {
        let mut view = RecentProjectsView::new(TestSink::default());
        let rows = view.render(&snapshot(), "/opt/hearth/welcome", &prefixes());

        view.commit(&rows);
        let after_one = view.sink().rows.clone();
        view.commit(&rows);

        assert_eq!(view.sink().rows, after_one);
    }

    #[test]
    fn rows_serialize_for_transport() {
        let rows = build_rows(&snapshot()[..1], "/opt/hearth/welcome", &prefixes());
        let json = serde_json::to_string(&rows[0]).unwrap();
        assert!(json.contains("\"row_id\""));
        assert!(json.contains("\"tab_order\":20"));
        assert!(json.contains("\"removable\":true"));
    }
}
