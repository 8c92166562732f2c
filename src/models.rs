use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wrapper every CKAN action endpoint returns: `{ help, success, result }`
#[derive(Clone, Debug, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub result: Option<Value>,
}

/// `result` payload of a `package_search` call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackageSearchResult {
    /// Total number of matches on the portal, not the number returned
    pub count: Option<u64>,
    pub results: Vec<Dataset>,
}

/// A single dataset record as returned by the search API.
///
/// Every field listed here is required; a record missing one of them is a
/// decode error rather than a silently empty value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Unique identifier (UUID on most portals)
    pub id: String,
    /// URL-safe slug, used to compose the dataset's public URL
    pub name: String,
    /// Display title
    pub title: String,
    pub metadata_created: String,
    pub metadata_modified: String,
    pub organization: Organization,
}

/// The publishing organization attached to a dataset
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Internal slug, matched against the configured organization filter
    pub name: String,
    /// Display name, used as the grouping key in the report
    pub title: String,
}

/// `result` payload of a `package_show` call with `include_tracking=True`.
///
/// Only the fields the view enrichment needs; the rest of the (large)
/// package record is ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TrackedPackage {
    pub name: String,
    pub tracking_summary: Option<TrackingSummary>,
}

/// Portal-provided usage statistics for a dataset
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackingSummary {
    #[serde(default)]
    pub total: u64,
}
