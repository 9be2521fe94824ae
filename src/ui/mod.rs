//! UI rendering module for the blsdash dashboard
//!
//! This module contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components.

pub mod chart;
pub mod dashboard;
pub mod help_overlay;
pub mod table;

pub use dashboard::render as render_dashboard;
