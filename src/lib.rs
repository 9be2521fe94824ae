//! blsdash library
//!
//! Shared by the `blsdash-fetch` fetcher and the `blsdash` dashboard. The two
//! binaries only meet through the files managed by [`store::DataStore`].

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod fetcher;
pub mod store;
pub mod ui;
