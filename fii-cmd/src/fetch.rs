//! Download the dataset the ranking page serves.

use anyhow::Context;
use fii_core::Dataset;
use log::info;
use std::path::Path;

/// Fetch `url`, check it parses as a dataset, and write it to `output`.
pub async fn run_fetch(url: &str, output: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    info!("Fetching FII dataset from {}", url);
    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?
        .error_for_status()?;
    let body = response.text().await?;

    let dataset = Dataset::from_json(&body)?;
    if dataset.results.is_empty() {
        anyhow::bail!("{} returned an empty results array", url);
    }

    let path = Path::new(output);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, dataset.to_json_pretty()?)
        .await
        .with_context(|| format!("Failed to write {}", output))?;

    info!("Saved {} funds to {}", dataset.results.len(), output);
    Ok(())
}
