//! Loading table specs from JSON or YAML configuration.
//!
//! A config document has the same fields as [`TableSpecBuilder`]:
//!
//! ```yaml
//! width: 3
//! list_size: 5
//! fill_order: top-left-bottom
//! start_padding: 1
//! ```
//!
//! Omitted dimensions and padding default to `0`; validation is the same as
//! for [`TableSpecBuilder::build`].

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, TableError};
use crate::spec::{TableSpec, TableSpecBuilder};

impl TableSpec {
    /// Parses and validates a spec from a JSON document.
    pub fn from_json_str(json: &str) -> Result<TableSpec> {
        let builder: TableSpecBuilder = serde_json::from_str(json)?;
        Ok(builder.build()?)
    }

    /// Parses and validates a spec from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<TableSpec> {
        let builder: TableSpecBuilder = serde_yaml::from_str(yaml)?;
        Ok(builder.build()?)
    }

    /// Reads a spec from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<TableSpec> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let content = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading table spec");

        match extension.as_deref() {
            Some("json") => TableSpec::from_json_str(&content),
            Some("yaml") | Some("yml") => TableSpec::from_yaml_str(&content),
            _ => Err(TableError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
