use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::models::{ActionResponse, Dataset, PackageSearchResult, TrackedPackage};

/// Client for a CKAN-style open-data portal.
///
/// Holds the base address and a single `reqwest::Client` for the whole run;
/// constructed once by the orchestrator and passed to every component that
/// talks to the network.
#[derive(Debug, Clone)]
pub struct PortalClient {
    base_url: String,
    http: Client,
}

impl PortalClient {
    /// Create a client for the portal named in `config`.
    ///
    /// No request timeout is configured; a hanging request blocks the run.
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Base portal address, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the `package_search` URL for the most-viewed datasets.
    ///
    /// The query matches everything (`q=*:*`), optionally narrowed to one
    /// organization slug, sorted by descending total views and capped at
    /// `rows` results.
    pub fn search_url(&self, rows: u32, organization: Option<&str>) -> String {
        let mut query = String::from("q=*:*");
        if let Some(org) = organization.filter(|o| !o.is_empty()) {
            query.push_str("+organization:");
            query.push_str(org);
        }
        format!(
            "{}/api/action/package_search?{query}&sort=views_total%20desc&rows={rows}",
            self.base_url
        )
    }

    /// Build the `package_show` URL for one dataset, with tracking data
    pub fn show_url(&self, id: &str) -> String {
        format!(
            "{}/api/action/package_show?id={}&include_tracking=True",
            self.base_url,
            urlencoding::encode(id)
        )
    }

    /// Issue a GET against an action endpoint and unwrap the CKAN envelope.
    ///
    /// Fails on any non-success HTTP status, on `success: false` in the
    /// envelope, or on an envelope with no `result`. No retries.
    async fn fetch_action(&self, url: &str) -> Result<Value> {
        debug!("GET {url}");
        let response = self.http.get(url).send().await?;
        info!("portal response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ReportError::fetch(status, message));
        }

        let envelope: ActionResponse = serde_json::from_value(response.json().await?)?;
        if !envelope.success {
            return Err(ReportError::fetch(200, "portal reported action failure"));
        }
        envelope
            .result
            .ok_or_else(|| ReportError::fetch(200, "no result data in portal response"))
    }

    /// Fetch the `rows` most-viewed datasets, optionally filtered to one
    /// organization slug.
    pub async fn most_viewed(
        &self,
        rows: u32,
        organization: Option<&str>,
    ) -> Result<PackageSearchResult> {
        let url = self.search_url(rows, organization);
        let result = self.fetch_action(&url).await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Look up the total view count for one dataset.
    ///
    /// Issues a `package_show` request with tracking enabled and reads
    /// `tracking_summary.total`; a missing summary counts as 0 views.
    pub async fn views_for(&self, dataset: &Dataset) -> Result<u64> {
        info!("fetching view count for dataset {}", dataset.name);
        let url = self.show_url(&dataset.id);
        let result = self.fetch_action(&url).await?;
        let package: TrackedPackage = serde_json::from_value(result)?;
        Ok(package.tracking_summary.map_or(0, |summary| summary.total))
    }
}
