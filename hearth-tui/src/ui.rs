//! Welcome-screen rendering.
//!
//! The UI draws whatever rows the core last committed; it never derives
//! list state on its own.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use hearth_core::view::{ProjectRow, RowSink};

use crate::app::App;
use crate::mode::AppMode;

/// Render target for the committed row list
#[derive(Debug, Default)]
pub struct VisibleList {
    pub rows: Vec<ProjectRow>,
}

impl RowSink for VisibleList {
    fn replace(&mut self, rows: &[ProjectRow]) {
        self.rows = rows.to_vec();
    }
}

/// Render the whole screen
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_project_list(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Hearth",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  open a recent project, or a new folder",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_project_list(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Recent Projects ");

    if app.rows().is_empty() {
        let empty_msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No recent projects",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press 'o' to open a folder, or 'e' to explore the sample project",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block)
        .alignment(Alignment::Center);

        f.render_widget(empty_msg, area);
    } else {
        let items: Vec<ListItem> = app
            .rows()
            .iter()
            .enumerate()
            .map(|(idx, row)| render_row(row, idx == app.selected))
            .collect();

        let list = List::new(items).block(block);

        f.render_widget(list, area);
    }
}

/// Render a single project row as a list item
fn render_row(row: &ProjectRow, is_selected: bool) -> ListItem<'_> {
    let label_style = if is_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(format!("  {}", row.label), label_style),
        Span::styled(
            format!("  {}", row.full_path),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    // The welcome project's remove control is hidden; tag the row
    // instead of offering 'x'.
    if !row.removable {
        spans.push(Span::styled(
            "  (welcome)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    ListItem::new(Line::from(spans))
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.mode.color()))
        .title(format!(" {} ", app.mode.display_name()));

    let content = match app.mode {
        AppMode::PathInput => Line::from(vec![
            Span::styled("Open folder: ", Style::default().fg(Color::Yellow)),
            Span::raw(app.path_input.clone()),
            Span::styled("▏", Style::default().fg(Color::Yellow)),
        ]),
        AppMode::Browse => match &app.status_message {
            Some(message) => Line::from(Span::raw(message.clone())),
            None => Line::from(Span::styled(
                "↑/↓ select · Enter open · x remove · o open folder · e explore · q quit",
                Style::default().fg(Color::DarkGray),
            )),
        },
    };

    f.render_widget(Paragraph::new(content).block(block), area);
}
