//! Truck catalog loader (JSON or TOML)

use std::path::Path;

use haulplan_domain::TruckSpec;
use haulplan_types::{ConfigError, Error, Result};
use serde::Deserialize;
use tracing::info;

use crate::{read_file, FileFormat};

/// Container for parsing trucks.toml
#[derive(Debug, Deserialize)]
struct TruckCatalogFile {
    trucks: Vec<TruckSpec>,
}

/// Load a truck catalog.
///
/// JSON files hold either a bare array or `{"trucks": [...]}`; TOML files
/// use `[[trucks]]` tables.
pub fn load_truck_catalog(path: &Path) -> Result<Vec<TruckSpec>> {
    let content = read_file(path)?;
    let trucks = match FileFormat::from_path(path)? {
        FileFormat::Json => parse_json(&content)?,
        FileFormat::Toml => toml::from_str::<TruckCatalogFile>(&content)?.trucks,
        FileFormat::Csv => return Err(Error::UnsupportedFormat(path.display().to_string())),
    };
    if trucks.is_empty() {
        return Err(Error::Config(ConfigError::ParseError(format!(
            "truck catalog {} contains no trucks",
            path.display()
        ))));
    }
    info!(path = %path.display(), trucks = trucks.len(), "loaded truck catalog");
    Ok(trucks)
}

fn parse_json(content: &str) -> Result<Vec<TruckSpec>> {
    if content.trim_start().starts_with('[') {
        Ok(serde_json::from_str(content)?)
    } else {
        Ok(serde_json::from_str::<TruckCatalogFile>(content)?.trucks)
    }
}
