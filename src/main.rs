mod catalog;
mod config;
mod fetcher;
mod github;
mod http;
mod logger;

use anyhow::Result;
use config::Config;
use std::process;

#[tokio::main]
async fn main() -> Result<()> {
    logger::init()?;

    let config = Config::from_env();

    if let Err(err) = fetcher::run(&config).await {
        log::error!("Error fetching repository data: {:#}", err);
        process::exit(1);
    }

    Ok(())
}
