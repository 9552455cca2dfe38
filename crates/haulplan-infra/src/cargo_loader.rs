//! Cargo manifest loader (CSV or JSON)
//!
//! Expected CSV header (optional columns may be omitted or left blank):
//! id,description,length,width,height,weight,quantity,stackable,fragile,hazmat,bottom_only,width_includes_securement

use std::path::Path;

use haulplan_domain::service::validate_items;
use haulplan_domain::CargoItem;
use haulplan_types::{Error, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{read_file, FileFormat};

/// One CSV row; blank cells deserialize as `None`
#[derive(Debug, Deserialize)]
struct CargoRow {
    id: String,
    #[serde(default)]
    description: Option<String>,
    length: f64,
    width: f64,
    height: f64,
    weight: f64,
    #[serde(default)]
    quantity: Option<i64>,
    #[serde(default)]
    stackable: Option<bool>,
    #[serde(default)]
    fragile: Option<bool>,
    #[serde(default)]
    hazmat: Option<bool>,
    #[serde(default)]
    bottom_only: Option<bool>,
    #[serde(default)]
    width_includes_securement: Option<bool>,
}

impl From<CargoRow> for CargoItem {
    fn from(row: CargoRow) -> Self {
        let mut item = CargoItem::new(row.id, row.length, row.width, row.height, row.weight)
            .with_quantity(row.quantity.map_or(1, CargoItem::clamp_quantity));
        if let Some(description) = row.description {
            item = item.with_description(description);
        }
        item.stackable = row.stackable.unwrap_or(false);
        item.fragile = row.fragile.unwrap_or(false);
        item.hazmat = row.hazmat.unwrap_or(false);
        item.bottom_only = row.bottom_only.unwrap_or(false);
        item.width_includes_securement = row.width_includes_securement.unwrap_or(false);
        item
    }
}

/// Load and validate cargo items from a CSV or JSON manifest
pub fn load_cargo_items(path: &Path) -> Result<Vec<CargoItem>> {
    let content = read_file(path)?;
    let items = match FileFormat::from_path(path)? {
        FileFormat::Csv => parse_csv(&content)?,
        FileFormat::Json => parse_json(&content)?,
        FileFormat::Toml => return Err(Error::UnsupportedFormat(path.display().to_string())),
    };
    if items.is_empty() {
        warn!(path = %path.display(), "cargo manifest is empty");
    }
    validate_items(&items)?;
    info!(path = %path.display(), items = items.len(), "loaded cargo manifest");
    Ok(items)
}

/// Parse CSV manifest content
pub fn parse_csv(content: &str) -> Result<Vec<CargoItem>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut items = Vec::new();
    for row in reader.deserialize::<CargoRow>() {
        items.push(row?.into());
    }
    Ok(items)
}

/// Parse a JSON manifest: a bare array or `{"items": [...]}`
pub fn parse_json(content: &str) -> Result<Vec<CargoItem>> {
    #[derive(Deserialize)]
    struct Manifest {
        items: Vec<CargoItem>,
    }

    if content.trim_start().starts_with('[') {
        Ok(serde_json::from_str(content)?)
    } else {
        Ok(serde_json::from_str::<Manifest>(content)?.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_csv_with_blank_optionals() {
        let csv = "\
id,description,length,width,height,weight,quantity,hazmat
gen-1,Generator,12,7.5,8,9000,,
pipe,Steel pipe,40,2,2,1500,4,false
drum,,3,2,3,400,2,true
";
        let items = parse_csv(csv).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].label(), "Generator");
        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[1].quantity, 4);
        assert!(items[2].hazmat);
        assert_eq!(items[2].label(), "drum");
        assert!(!items[0].width_includes_securement);
    }

    #[test]
    fn test_parse_csv_non_positive_quantity_is_one_unit() {
        let csv = "\
id,length,width,height,weight,quantity
a,10,8,4,500,-1
b,10,8,4,500,0
";
        let items = parse_csv(csv).unwrap();
        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[1].quantity, 1);
    }

    #[test]
    fn test_parse_json_negative_quantity() {
        let json = r#"[{"id": "a", "length": 10, "width": 8, "height": 4, "weight": 500,
            "quantity": -2}]"#;
        let items = parse_json(json).unwrap();
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn test_parse_csv_bad_number() {
        let csv = "id,length,width,height,weight\nx,ten,1,1,1\n";
        assert!(matches!(parse_csv(csv), Err(Error::Csv(_))));
    }

    #[test]
    fn test_parse_json_wrapped() {
        let json =
            r#"{"items": [{"id": "a", "length": 10, "width": 8, "height": 4, "weight": 500}]}"#;
        let items = parse_json(json).unwrap();
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn test_load_rejects_invalid_item() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cargo.csv");
        fs::write(&path, "id,length,width,height,weight\nbad,10,-8,4,500\n").unwrap();
        assert!(matches!(
            load_cargo_items(&path),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_load_fixture() {
        let path =
            Path::new(env!("CARGO_MANIFEST_DIR")).join("../../tests/fixtures/cargo_manifest.csv");
        let items = load_cargo_items(&path).unwrap();
        assert!(!items.is_empty());
    }
}
