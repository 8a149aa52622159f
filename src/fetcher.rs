use crate::{catalog::Catalog, config::Config, github::GithubClient};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug)]
pub struct Summary {
    pub path: PathBuf,
    pub count: usize,
    pub total_stars: u64,
}

/// Fetches every configured repository in order, then writes the sorted catalog.
///
/// The first failed fetch aborts the run before anything touches the output file.
pub async fn run(config: &Config) -> Result<Summary> {
    let client = GithubClient::new(&config.api_base_url, config.token.clone())
        .context("Cannot create the http client")?;

    log::info!("Fetching repository data from GitHub...");

    let mut records = Vec::with_capacity(config.repositories.len());
    for repo in &config.repositories {
        log::info!("  Fetching {}...", repo);
        records.push(client.fetch_one(&config.owner, repo).await?);
    }

    let catalog = Catalog::new(records);

    catalog
        .write(&config.output_path)
        .await
        .context("Cannot write the repository data")?;

    let summary = Summary {
        path: config.output_path.to_owned(),
        count: catalog.count(),
        total_stars: catalog.total_stars(),
    };

    log::info!(
        "✓ Successfully wrote {} repositories to {}",
        summary.count,
        summary.path.display()
    );
    log::info!("  Total stars: {}", summary.total_stars);

    Ok(summary)
}
