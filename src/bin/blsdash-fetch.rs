//! blsdash-fetch - Refresh the local BLS snapshot
//!
//! Does nothing when the last successful fetch is less than 30 days old.
//! Network and parse failures abort the run with a non-zero exit and leave
//! existing files untouched.

use chrono::Local;
use clap::Parser;

use blsdash::cli::FetchCli;
use blsdash::config::Config;
use blsdash::data::BlsClient;
use blsdash::fetcher::{FetchOutcome, Fetcher};
use blsdash::store::DataStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _cli = FetchCli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let store = DataStore::from_config(&config).ok_or_else(|| {
        format!(
            "could not determine a data directory; set {}",
            blsdash::config::DATA_DIR_ENV
        )
    })?;
    log::debug!("Using data directory {}", store.data_dir().display());

    let fetcher = Fetcher::new(BlsClient::from_config(&config), store);

    match fetcher.run(Local::now().date_naive()).await? {
        FetchOutcome::Updated { observations } => {
            log::info!("Data successfully fetched and updated ({} observations).", observations);
        }
        FetchOutcome::UpToDate | FetchOutcome::NoData => {}
    }

    Ok(())
}
