//! Infrastructure layer
//!
//! File loaders for the reference data and inputs the planning core treats
//! as external: the truck catalog, the state permit table, cargo manifests
//! and route files.

pub mod cargo_loader;
pub mod permit_table_loader;
pub mod route_loader;
pub mod truck_catalog_loader;

use std::fs;
use std::path::Path;

use haulplan_types::{Error, Result};

pub use cargo_loader::load_cargo_items;
pub use permit_table_loader::{load_permit_table, parse_permit_table};
pub use route_loader::load_route;
pub use truck_catalog_loader::load_truck_catalog;

/// Serialization formats accepted by the loaders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FileFormat {
    Json,
    Toml,
    Csv,
}

impl FileFormat {
    /// Pick a format from the file extension
    pub(crate) fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(FileFormat::Json),
            "toml" => Ok(FileFormat::Toml),
            "csv" => Ok(FileFormat::Csv),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Read a whole file, mapping a missing path to `FileNotFound`
pub(crate) fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}
