//! Query a CKAN-style open-data portal for its most-viewed datasets, group
//! them by publishing organization, and write a flat CSV report.
//!
//! One-shot batch tool: load configuration, search the portal, group the
//! results, enrich each dataset with its view count, write the report, exit.

use std::path::Path;

use tracing::info;

pub mod client;
pub mod config;
pub mod error;
pub mod group;
pub mod models;
pub mod report;

pub use client::PortalClient;
pub use config::{ReportConfig, Settings};
pub use error::{ReportError, Result};
pub use group::{GroupedDatasets, group_by_organization};

/// Run one report from the configuration file at `config_path`.
///
/// Fail-fast at every step: configuration is validated before any network
/// call, and the first fetch or write failure aborts the run. On success a
/// confirmation line is printed to stdout.
pub async fn run(config_path: &Path) -> Result<()> {
    info!("loading configuration from {}", config_path.display());
    let settings = config::load(config_path);
    let config = settings.validate()?;

    let client = PortalClient::new(&config);

    info!("fetching datasets from the portal");
    let search = client
        .most_viewed(config.rows, config.organization.as_deref())
        .await?;

    info!("grouping datasets by organization");
    let grouped = group_by_organization(search, config.organization.as_deref());

    info!("saving report");
    report::write_report(&grouped, &client, &config).await?;

    println!(
        "Data has been successfully saved to '{}'.",
        config.output_file.display()
    );
    Ok(())
}
