use indexmap::IndexMap;
use tracing::info;

use crate::models::{Dataset, PackageSearchResult};

/// Datasets keyed by organization display name.
///
/// Insertion order is preserved on both levels, so iterating the grouping
/// replays the API's result order (descending total views).
pub type GroupedDatasets = IndexMap<String, Vec<Dataset>>;

/// Partition search results by publishing organization.
///
/// When `organization` holds a slug, records whose organization slug equals
/// it are appended under their organization's display name, in result order.
/// When no slug is given the grouping comes back empty and the report will
/// contain only its header row; this filter-dependent behavior is
/// deliberate (see DESIGN.md).
pub fn group_by_organization(
    search: PackageSearchResult,
    organization: Option<&str>,
) -> GroupedDatasets {
    let mut grouped = GroupedDatasets::new();

    let Some(filter) = organization.filter(|o| !o.is_empty()) else {
        return grouped;
    };

    for dataset in search.results {
        if dataset.organization.name == filter {
            grouped
                .entry(dataset.organization.title.clone())
                .or_default()
                .push(dataset);
        }
    }

    info!(
        "grouped {} datasets into {} organizations",
        grouped.values().map(Vec::len).sum::<usize>(),
        grouped.len()
    );
    grouped
}
