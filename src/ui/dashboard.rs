//! Dashboard screen rendering
//!
//! Renders the header with the last update date, the body for the current
//! view (or a warning/error state when there is nothing to show), and the
//! key hints at the bottom.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{chart, help_overlay, table};
use crate::app::{App, MarkerState, SnapshotState, View};

/// Name of the fetcher binary, referenced in hints
const FETCH_COMMAND: &str = "blsdash-fetch";

/// Renders the whole dashboard frame
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title, description, last update
            Constraint::Min(3),    // Table / chart / state message
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_body(frame, app, chunks[1]);
    render_hints(frame, app, chunks[2]);

    if app.show_help {
        help_overlay::render(frame);
    }
}

/// Renders the title block and the freshness line
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let freshness = match &app.marker {
        MarkerState::Known(marker) => {
            let age = app.marker_age_days().unwrap_or_default();
            Line::from(vec![
                Span::styled(
                    format!("Last Data Update: {}", marker.last_fetch.format("%Y-%m-%d")),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ({})", describe_age(age)),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        MarkerState::Missing => Line::from(Span::styled(
            format!(
                "Last Data Update: unknown. No last fetch date found. Please run '{}' first.",
                FETCH_COMMAND
            ),
            Style::default().fg(Color::Yellow),
        )),
        MarkerState::Unreadable(err) => Line::from(Span::styled(
            format!("Last Data Update: unknown ({})", err),
            Style::default().fg(Color::Red),
        )),
    };

    let lines = vec![
        Line::from(Span::styled(
            "BLS Monthly Data Dashboard",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Latest BLS data trends with descriptive labels.",
            Style::default().fg(Color::Gray),
        )),
        freshness,
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Renders the table or chart, or a state message when no data is loaded
fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    match &app.snapshot {
        SnapshotState::Loaded { .. } => match app.view {
            View::Table => table::render(frame, app, area),
            View::Charts => chart::render(frame, app, area),
        },
        SnapshotState::Empty => render_state_message(
            frame,
            area,
            " Warning ",
            format!(
                "Data file is empty. Please run '{}' to populate the data.",
                FETCH_COMMAND
            ),
            Color::Yellow,
        ),
        SnapshotState::Missing => render_state_message(
            frame,
            area,
            " Error ",
            format!(
                "No data file found. Please run '{}' to fetch and create the data file.",
                FETCH_COMMAND
            ),
            Color::Red,
        ),
        SnapshotState::Unreadable(err) => render_state_message(
            frame,
            area,
            " Error ",
            format!("Could not read the data file: {}", err),
            Color::Red,
        ),
    }
}

fn render_state_message(frame: &mut Frame, area: Rect, title: &str, message: String, color: Color) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, area);
}

/// Renders the key hints for the current view
fn render_hints(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Table/Charts  "),
    ];

    match app.view {
        View::Table => spans.extend([
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::raw(" Scroll  "),
        ]),
        View::Charts => spans.extend([
            Span::styled("←/→", Style::default().fg(Color::Yellow)),
            Span::raw(" Series  "),
        ]),
    }

    spans.extend([
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(" Reload  "),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::raw(" Help  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ]);

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Human wording for a marker age in days
fn describe_age(days: i64) -> String {
    match days {
        d if d < 0 => "dated in the future".to_string(),
        0 => "today".to_string(),
        1 => "1 day ago".to_string(),
        d => format!("{} days ago", d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Observation;
    use crate::store::{DataStore, FetchMarker};
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn store_with(observations: Option<&[Observation]>, marker: bool) -> (DataStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = DataStore::with_dir(temp_dir.path().to_path_buf());
        if let Some(observations) = observations {
            store.write_snapshot(observations).unwrap();
        }
        if marker {
            store
                .write_marker(&FetchMarker::new(NaiveDate::from_ymd_opt(2026, 10, 12).unwrap()))
                .unwrap();
        }
        (store, temp_dir)
    }

    #[test]
    fn test_missing_files_show_unknown_and_error_states() {
        let app = App::new(None, today());
        let content = render_to_string(&app);

        assert!(content.contains("BLS Monthly Data Dashboard"));
        assert!(content.contains("Last Data Update: unknown"));
        assert!(content.contains("No data file found"));
    }

    #[test]
    fn test_empty_snapshot_shows_warning_not_chart() {
        let (store, _temp_dir) = store_with(Some(&[][..]), true);
        let mut app = App::new(Some(store), today());
        app.view = View::Charts;

        let content = render_to_string(&app);

        assert!(content.contains("Warning"));
        assert!(content.contains("Data file is empty"));
        assert!(!content.contains("Trend:"), "No chart should be drawn");
    }

    #[test]
    fn test_marker_date_and_age_are_shown() {
        let (store, _temp_dir) = store_with(None, true);
        let app = App::new(Some(store), today());
        let content = render_to_string(&app);

        assert!(content.contains("Last Data Update: 2026-10-12"));
        assert!(content.contains("7 days ago"));
    }

    #[test]
    fn test_loaded_snapshot_renders_table_by_default() {
        let rows = [Observation::new("LNS14000000", 2026, 9, 4.3)];
        let (store, _temp_dir) = store_with(Some(&rows[..]), true);
        let app = App::new(Some(store), today());

        let content = render_to_string(&app);

        assert!(content.contains("Series ID"));
        assert!(content.contains("LNS14000000"));
        assert!(!content.contains("No data file found"));
    }

    #[test]
    fn test_help_overlay_is_drawn_on_top() {
        let mut app = App::new(None, today());
        app.show_help = true;

        let content = render_to_string(&app);
        assert!(content.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn test_describe_age() {
        assert_eq!(describe_age(0), "today");
        assert_eq!(describe_age(1), "1 day ago");
        assert_eq!(describe_age(30), "30 days ago");
        assert_eq!(describe_age(-2), "dated in the future");
    }
}
