//! Data table of every snapshot row

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table},
    Frame,
};

use crate::app::App;

/// Renders the snapshot rows starting at the app's scroll offset
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let all_rows = app.rows();
    // Borders and header take three lines
    let visible = area.height.saturating_sub(3) as usize;

    let rows: Vec<Row> = all_rows
        .iter()
        .skip(app.table_offset)
        .take(visible)
        .map(|obs| {
            Row::new(vec![
                obs.series_id.clone(),
                obs.year.to_string(),
                obs.month.to_string(),
                format_value(obs.value),
            ])
        })
        .collect();

    let header = Row::new(vec!["Series ID", "Year", "Month", "Value"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let last_shown = (app.table_offset + rows.len()).min(all_rows.len());
    let title = format!(
        " Data Table ({}-{} of {}) ",
        (app.table_offset + 1).min(last_shown),
        last_shown,
        all_rows.len()
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(Block::default().title(title).borders(Borders::ALL));

    frame.render_widget(table, area);
}

/// Formats a value without a trailing `.0` for whole numbers
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}
