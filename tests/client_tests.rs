use std::path::PathBuf;

use popular_datasets::models::{Dataset, Organization, PackageSearchResult};
use popular_datasets::{PortalClient, ReportConfig, ReportError, group_by_organization};

fn test_config() -> ReportConfig {
    ReportConfig {
        url: "https://data.example.org".to_string(),
        rows: 5,
        output_file: PathBuf::from("out.csv"),
        organization: Some("acme".to_string()),
    }
}

fn dataset(name: &str, org_slug: &str, org_title: &str) -> Dataset {
    Dataset {
        id: format!("id-{name}"),
        name: name.to_string(),
        title: format!("Title of {name}"),
        metadata_created: "2023-01-01T00:00:00".to_string(),
        metadata_modified: "2024-01-01T00:00:00".to_string(),
        organization: Organization {
            name: org_slug.to_string(),
            title: org_title.to_string(),
        },
    }
}

fn search_result(results: Vec<Dataset>) -> PackageSearchResult {
    PackageSearchResult {
        count: Some(results.len() as u64),
        results,
    }
}

#[test]
fn test_search_url_without_organization() {
    let client = PortalClient::new(&test_config());
    assert_eq!(
        client.search_url(25, None),
        "https://data.example.org/api/action/package_search?q=*:*&sort=views_total%20desc&rows=25"
    );
}

#[test]
fn test_search_url_with_organization_filter() {
    let client = PortalClient::new(&test_config());
    assert_eq!(
        client.search_url(5, Some("acme")),
        "https://data.example.org/api/action/package_search?q=*:*+organization:acme&sort=views_total%20desc&rows=5"
    );
}

#[test]
fn test_show_url_includes_tracking_flag() {
    let client = PortalClient::new(&test_config());
    assert_eq!(
        client.show_url("a1b2-c3d4"),
        "https://data.example.org/api/action/package_show?id=a1b2-c3d4&include_tracking=True"
    );
}

/// Without a configured organization the grouping comes back empty
#[test]
fn test_grouping_is_empty_without_filter() {
    let search = search_result(vec![
        dataset("a", "acme", "Acme Corp"),
        dataset("b", "other", "Other Org"),
    ]);

    assert!(group_by_organization(search.clone(), None).is_empty());
    assert!(group_by_organization(search, Some("")).is_empty());
}

#[test]
fn test_grouping_filters_by_slug_and_keys_by_display_name() {
    let search = search_result(vec![
        dataset("a", "acme", "Acme Corp"),
        dataset("b", "other", "Other Org"),
        dataset("c", "acme", "Acme Corp"),
    ]);

    let grouped = group_by_organization(search, Some("acme"));

    assert_eq!(grouped.len(), 1);
    let acme = &grouped["Acme Corp"];
    assert_eq!(acme.len(), 2);
    // Result order survives the grouping
    assert_eq!(acme[0].name, "a");
    assert_eq!(acme[1].name, "c");
}

#[test]
fn test_grouping_with_no_matching_slug_is_empty() {
    let search = search_result(vec![dataset("a", "acme", "Acme Corp")]);
    assert!(group_by_organization(search, Some("nasa")).is_empty());
}

#[test]
fn test_error_messages() {
    let err = ReportError::config("missing required key 'url'");
    assert!(err.to_string().contains("url"));

    let err = ReportError::fetch(503, "service unavailable");
    let message = err.to_string();
    assert!(message.contains("503"));
    assert!(message.contains("service unavailable"));

    let err = ReportError::file_write("out.csv", "permission denied");
    assert!(err.to_string().contains("out.csv"));
}
