use std::path::{Path, PathBuf};

use ini::Ini;
use tracing::warn;

use crate::error::{ReportError, Result};

/// Section of the INI file all settings live in
const SECTION: &str = "default";

/// Raw key/value settings as read from disk, before validation.
///
/// Loading is tolerant: a missing or unreadable file yields an empty
/// `Settings`, and the missing keys are only reported when `validate` runs.
#[derive(Debug, Default)]
pub struct Settings {
    ini: Ini,
}

/// Load settings from an INI file at `path`.
///
/// Never fails; an unreadable file produces an empty configuration.
pub fn load(path: &Path) -> Settings {
    match Ini::load_from_file(path) {
        Ok(ini) => Settings { ini },
        Err(err) => {
            warn!("could not read configuration file {}: {err}", path.display());
            Settings::default()
        }
    }
}

impl Settings {
    fn get(&self, key: &str) -> Option<&str> {
        self.ini
            .get_from(Some(SECTION), key)
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| ReportError::config(format!("missing required key '{key}'")))
    }

    /// Validate the raw settings into a ready-to-use [`ReportConfig`].
    ///
    /// `url`, `rows` and `output_file` are required; `organization` is an
    /// optional filter. Runs before any network activity.
    pub fn validate(&self) -> Result<ReportConfig> {
        let url = self.require("url")?.trim_end_matches('/').to_string();

        let rows_raw = self.require("rows")?;
        let rows: u32 = rows_raw
            .parse()
            .map_err(|_| ReportError::config(format!("'rows' is not an integer: {rows_raw}")))?;
        if rows == 0 {
            return Err(ReportError::config("'rows' must be a positive integer"));
        }

        let output_file = PathBuf::from(self.require("output_file")?);
        let organization = self.get("organization").map(str::to_string);

        Ok(ReportConfig {
            url,
            rows,
            output_file,
            organization,
        })
    }
}

/// Validated configuration for a single report run
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Base portal address, without a trailing slash
    pub url: String,
    /// Row limit passed to the search API
    pub rows: u32,
    /// Destination path for the CSV report
    pub output_file: PathBuf,
    /// Optional organization slug; when set, only that organization's
    /// datasets are reported
    pub organization: Option<String>,
}
