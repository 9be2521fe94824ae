//! Command-line interface definitions for both binaries
//!
//! Neither program takes flags beyond `--help` and `--version`; data paths
//! are fixed (see [`crate::config`] for the environment overrides).

use clap::Parser;

/// Terminal dashboard for BLS labor statistics
///
/// Reads the snapshot written by `blsdash-fetch` and shows it as a table and
/// per-series line charts. Never contacts the BLS API itself.
#[derive(Parser, Debug)]
#[command(name = "blsdash")]
#[command(about = "Browse fetched BLS monthly data in the terminal")]
#[command(version)]
pub struct DashboardCli {}

/// Fetch BLS series when the local snapshot is at least 30 days old
#[derive(Parser, Debug)]
#[command(name = "blsdash-fetch")]
#[command(about = "Refresh the local BLS snapshot (at most once every 30 days)")]
#[command(version)]
pub struct FetchCli {}
