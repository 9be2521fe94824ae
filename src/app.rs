//! Application state management for the blsdash dashboard
//!
//! This module holds what the dashboard loaded from the data store, the
//! current view, and keyboard handling. Loading is a pure read of the two
//! store files; the dashboard never fetches.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};

use crate::data::{series_label, Observation};
use crate::store::{DataStore, FetchMarker};

/// Rows moved by PageUp/PageDown in the table view
const PAGE_ROWS: usize = 10;

/// Which body the dashboard shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Every snapshot row
    Table,
    /// Line chart of one series at a time
    Charts,
}

/// Result of reading the freshness marker
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerState {
    Known(FetchMarker),
    /// No marker yet, so the last update date is unknown
    Missing,
    Unreadable(String),
}

/// Result of reading the snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotState {
    Loaded {
        rows: Vec<Observation>,
        series: Vec<SeriesChart>,
    },
    /// File exists but holds no rows
    Empty,
    Missing,
    Unreadable(String),
}

/// One series prepared for charting
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesChart {
    pub series_id: String,
    pub label: String,
    /// Sorted by date ascending
    pub points: Vec<(NaiveDate, f64)>,
}

/// Groups observations per series in order of first appearance
///
/// Each series gets its catalog label (or the raw ID) and date-sorted points.
/// Rows whose year/month do not form a date are skipped.
pub fn group_series(observations: &[Observation]) -> Vec<SeriesChart> {
    let mut charts: Vec<SeriesChart> = Vec::new();

    for observation in observations {
        let Some(date) = observation.date() else {
            continue;
        };

        let index = match charts
            .iter()
            .position(|c| c.series_id == observation.series_id)
        {
            Some(index) => index,
            None => {
                charts.push(SeriesChart {
                    series_id: observation.series_id.clone(),
                    label: series_label(&observation.series_id).to_string(),
                    points: Vec::new(),
                });
                charts.len() - 1
            }
        };
        charts[index].points.push((date, observation.value));
    }

    for chart in &mut charts {
        chart.points.sort_by_key(|(date, _)| *date);
    }

    charts
}

/// Main dashboard struct managing state and data
pub struct App {
    /// Current body view
    pub view: View,
    /// What the marker read produced
    pub marker: MarkerState,
    /// What the snapshot read produced
    pub snapshot: SnapshotState,
    /// Date used to compute the marker age
    pub today: NaiveDate,
    /// First visible table row
    pub table_offset: usize,
    /// Index into the loaded series for the chart view
    pub selected_series: usize,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    store: Option<DataStore>,
}

impl App {
    /// Creates the dashboard and performs the initial read
    ///
    /// A `None` store (no resolvable data directory) behaves like a store with
    /// neither file present.
    pub fn new(store: Option<DataStore>, today: NaiveDate) -> Self {
        let mut app = Self {
            view: View::Table,
            marker: MarkerState::Missing,
            snapshot: SnapshotState::Missing,
            today,
            table_offset: 0,
            selected_series: 0,
            show_help: false,
            should_quit: false,
            store,
        };
        app.reload();
        app
    }

    /// Re-reads both files from disk and resets scroll positions
    pub fn reload(&mut self) {
        self.marker = self
            .store
            .as_ref()
            .map_or(MarkerState::Missing, load_marker);
        self.snapshot = self
            .store
            .as_ref()
            .map_or(SnapshotState::Missing, load_snapshot);
        self.table_offset = 0;
        self.selected_series = 0;
    }

    /// Age of the marker in days, when known
    pub fn marker_age_days(&self) -> Option<i64> {
        match &self.marker {
            MarkerState::Known(marker) => Some(marker.age_days(self.today)),
            _ => None,
        }
    }

    /// Snapshot rows, empty unless loaded
    pub fn rows(&self) -> &[Observation] {
        match &self.snapshot {
            SnapshotState::Loaded { rows, .. } => rows.as_slice(),
            _ => &[],
        }
    }

    /// Charted series, empty unless loaded
    pub fn series(&self) -> &[SeriesChart] {
        match &self.snapshot {
            SnapshotState::Loaded { series, .. } => series.as_slice(),
            _ => &[],
        }
    }

    /// Series shown in the chart view
    pub fn current_series(&self) -> Option<&SeriesChart> {
        self.series().get(self.selected_series)
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - `q` or `Esc`: Quit the application
    /// - `Tab`: Switch between table and chart views
    /// - `Up`/`k`, `Down`/`j`, `PageUp`, `PageDown`, `g`: Scroll the table
    /// - `Left`/`h`, `Right`/`l`: Previous/next series in chart view
    /// - `r`: Re-read files from disk
    /// - `?`: Toggle help overlay
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Help overlay intercepts all keys when shown
        if self.show_help {
            if matches!(
                key_event.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return;
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_view(),
            KeyCode::Char('r') => self.reload(),
            KeyCode::Char('?') => self.show_help = true,
            code => match self.view {
                View::Table => self.handle_table_key(code),
                View::Charts => self.handle_chart_key(code),
            },
        }
    }

    fn handle_table_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(PAGE_ROWS),
            KeyCode::PageDown => self.scroll_down(PAGE_ROWS),
            KeyCode::Char('g') | KeyCode::Home => self.table_offset = 0,
            _ => {}
        }
    }

    fn handle_chart_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Up | KeyCode::Char('k') => {
                self.previous_series()
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
                self.next_series()
            }
            _ => {}
        }
    }

    fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Table => View::Charts,
            View::Charts => View::Table,
        };
    }

    fn scroll_up(&mut self, rows: usize) {
        self.table_offset = self.table_offset.saturating_sub(rows);
    }

    fn scroll_down(&mut self, rows: usize) {
        let max_offset = self.rows().len().saturating_sub(1);
        self.table_offset = (self.table_offset + rows).min(max_offset);
    }

    /// Selects the next series, wrapping at the end
    fn next_series(&mut self) {
        let count = self.series().len();
        if count > 0 {
            self.selected_series = (self.selected_series + 1) % count;
        }
    }

    /// Selects the previous series, wrapping at the start
    fn previous_series(&mut self) {
        let count = self.series().len();
        if count > 0 {
            self.selected_series = (self.selected_series + count - 1) % count;
        }
    }
}

fn load_marker(store: &DataStore) -> MarkerState {
    match store.read_marker() {
        Ok(Some(marker)) => MarkerState::Known(marker),
        Ok(None) => MarkerState::Missing,
        Err(e) => {
            log::warn!("Could not read fetch marker: {}", e);
            MarkerState::Unreadable(e.to_string())
        }
    }
}

fn load_snapshot(store: &DataStore) -> SnapshotState {
    match store.read_snapshot() {
        Ok(None) => SnapshotState::Missing,
        Ok(Some(rows)) if rows.is_empty() => SnapshotState::Empty,
        Ok(Some(rows)) => {
            let series = group_series(&rows);
            log::debug!("Loaded {} rows across {} series", rows.len(), series.len());
            SnapshotState::Loaded { rows, series }
        }
        Err(e) => {
            log::warn!("Could not read snapshot: {}", e);
            SnapshotState::Unreadable(e.to_string())
        }
    }
}
