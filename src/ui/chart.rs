//! Per-series line chart
//!
//! Dates are plotted as a month index (`year * 12 + month - 1`) so monthly
//! points are evenly spaced on the x axis.

use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::{App, SeriesChart};

/// Smallest area a chart is drawn into
const MIN_WIDTH: u16 = 30;
const MIN_HEIGHT: u16 = 8;

/// Renders the selected series as a line chart
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(series) = app.current_series() else {
        return;
    };

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let message = Paragraph::new("Chart area too small (resize terminal).")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(message, area);
        return;
    }

    let title = format!(
        " Trend: {} [{}/{}] ",
        series.label,
        app.selected_series + 1,
        app.series().len()
    );

    let points = chart_points(series);
    let (x_bounds, y_bounds) = bounds(&points);

    let dataset = Dataset::default()
        .name(series.series_id.clone())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(date_labels(series)),
        )
        .y_axis(
            Axis::default()
                .title("Value")
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(value_labels(y_bounds)),
        );

    frame.render_widget(chart, area);
}

/// Month index used as the x coordinate
fn month_index(date: NaiveDate) -> f64 {
    (date.year() * 12 + date.month0() as i32) as f64
}

fn chart_points(series: &SeriesChart) -> Vec<(f64, f64)> {
    series
        .points
        .iter()
        .map(|(date, value)| (month_index(*date), *value))
        .collect()
}

/// Axis bounds with a little headroom; flat or single-point series get a unit span
fn bounds(points: &[(f64, f64)]) -> ([f64; 2], [f64; 2]) {
    let (mut x_min, mut x_max) = (f64::MAX, f64::MIN);
    let (mut y_min, mut y_max) = (f64::MAX, f64::MIN);
    for &(x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if points.is_empty() {
        return ([0.0, 1.0], [0.0, 1.0]);
    }
    if x_max <= x_min {
        x_min -= 0.5;
        x_max += 0.5;
    }

    let pad = if y_max > y_min {
        (y_max - y_min) * 0.05
    } else {
        y_max.abs().max(1.0) * 0.05
    };

    ([x_min, x_max], [y_min - pad, y_max + pad])
}

/// First, middle and last dates as `YYYY-MM`
fn date_labels(series: &SeriesChart) -> Vec<Span<'static>> {
    let dates: Vec<NaiveDate> = series.points.iter().map(|(date, _)| *date).collect();
    let picks = match dates.len() {
        0 => Vec::new(),
        1 => vec![dates[0]],
        2 => vec![dates[0], dates[1]],
        n => vec![dates[0], dates[n / 2], dates[n - 1]],
    };
    picks
        .into_iter()
        .map(|date| Span::raw(date.format("%Y-%m").to_string()))
        .collect()
}

/// Min, mid and max labels for the y axis
fn value_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let [low, high] = bounds;
    [low, (low + high) / 2.0, high]
        .into_iter()
        .map(|v| Span::raw(format!("{:.2}", v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::View;
    use crate::data::Observation;
    use crate::store::DataStore;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn ymd(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    fn series(points: Vec<(NaiveDate, f64)>) -> SeriesChart {
        SeriesChart {
            series_id: "LNS14000000".to_string(),
            label: "Unemployment Rate (16 yrs and over)".to_string(),
            points,
        }
    }

    #[test]
    fn test_month_index_is_contiguous_across_years() {
        assert_eq!(month_index(ymd(2026, 1)) - month_index(ymd(2025, 12)), 1.0);
    }

    #[test]
    fn test_chart_points_follow_series_order() {
        let points = chart_points(&series(vec![(ymd(2025, 11), 4.1), (ymd(2025, 12), 4.2)]));
        assert_eq!(points.len(), 2);
        assert!(points[0].0 < points[1].0);
        assert_eq!(points[1].1, 4.2);
    }

    #[test]
    fn test_bounds_pad_value_range() {
        let (x, y) = bounds(&[(10.0, 4.0), (12.0, 6.0)]);
        assert_eq!(x, [10.0, 12.0]);
        assert!(y[0] < 4.0 && y[1] > 6.0);
    }

    #[test]
    fn test_bounds_single_point_is_not_degenerate() {
        let (x, y) = bounds(&[(10.0, 4.0)]);
        assert!(x[1] > x[0]);
        assert!(y[1] > y[0]);
    }

    #[test]
    fn test_date_labels_pick_first_middle_last() {
        let labels = date_labels(&series(vec![
            (ymd(2025, 1), 1.0),
            (ymd(2025, 2), 1.0),
            (ymd(2025, 3), 1.0),
            (ymd(2025, 4), 1.0),
        ]));
        let text: Vec<_> = labels.iter().map(|s| s.content.to_string()).collect();
        assert_eq!(text, vec!["2025-01", "2025-03", "2025-04"]);
    }

    #[test]
    fn test_render_shows_trend_title() {
        let temp_dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(temp_dir.path().to_path_buf());
        store
            .write_snapshot(&[
                Observation::new("LNS14000000", 2026, 2, 4.1),
                Observation::new("LNS14000000", 2026, 1, 4.0),
            ])
            .unwrap();
        let mut app = App::new(Some(store), ymd(2026, 10));
        app.view = View::Charts;

        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, &app, area);
            })
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(content.contains("Trend: Unemployment Rate (16 yrs and over) [1/1]"));
        assert!(content.contains("2026-01"));
    }

    #[test]
    fn test_render_in_tiny_area_shows_resize_hint() {
        let temp_dir = TempDir::new().unwrap();
        let store = DataStore::with_dir(temp_dir.path().to_path_buf());
        store
            .write_snapshot(&[Observation::new("LNS14000000", 2026, 1, 4.0)])
            .unwrap();
        let app = App::new(Some(store), ymd(2026, 10));

        let backend = TestBackend::new(40, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, &app, area);
            })
            .unwrap();
        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(content.contains("Chart area too small"));
        assert!(!content.contains("Trend:"));
    }
}
