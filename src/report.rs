use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::client::PortalClient;
use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::group::GroupedDatasets;

/// Fixed column set of the report
const HEADER: [&str; 6] = [
    "Organization",
    "Title",
    "URL",
    "Metadata Created",
    "Metadata Modified",
    "Views",
];

/// Write the grouped datasets to `config.output_file` as CSV.
///
/// One row per dataset, in grouping order: organization display name, title,
/// public dataset URL, metadata timestamps, and the total view count fetched
/// from the portal one dataset at a time.
///
/// The report is staged in a temporary file next to the destination and
/// renamed into place once every row is written, so a failure mid-run never
/// leaves a partial report at the final path.
pub async fn write_report(
    grouped: &GroupedDatasets,
    client: &PortalClient,
    config: &ReportConfig,
) -> Result<()> {
    let out_path = &config.output_file;
    let staging_dir = match out_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let staging =
        NamedTempFile::new_in(staging_dir).map_err(|e| ReportError::file_write(out_path, e))?;
    let mut writer = csv::Writer::from_writer(staging);

    writer
        .write_record(HEADER)
        .map_err(|e| ReportError::file_write(out_path, e))?;
    info!("writing report rows to {}", out_path.display());

    for (organization, datasets) in grouped {
        for dataset in datasets {
            let url = format!("{}/dataset/{}", client.base_url(), dataset.name);
            let views = client.views_for(dataset).await?;
            writer
                .write_record([
                    organization.as_str(),
                    dataset.title.as_str(),
                    url.as_str(),
                    dataset.metadata_created.as_str(),
                    dataset.metadata_modified.as_str(),
                    views.to_string().as_str(),
                ])
                .map_err(|e| ReportError::file_write(out_path, e))?;
        }
    }

    let staging = writer
        .into_inner()
        .map_err(|e| ReportError::file_write(out_path, e))?;
    staging
        .persist(out_path)
        .map_err(|e| ReportError::file_write(out_path, e))?;

    info!("report written to {}", out_path.display());
    Ok(())
}
