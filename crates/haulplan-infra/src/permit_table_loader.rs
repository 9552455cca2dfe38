//! State permit table loader
//!
//! Accepted layouts:
//! - JSON array of state records
//! - JSON object keyed by state code
//! - JSON or TOML document with a `states` list (`[[states]]` in TOML)

use std::collections::HashMap;
use std::path::Path;

use haulplan_domain::{PermitTable, StatePermitData};
use haulplan_types::{Error, Result};
use serde::Deserialize;
use tracing::info;

use crate::{read_file, FileFormat};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PermitTableFile {
    List(Vec<StatePermitData>),
    Wrapped { states: Vec<StatePermitData> },
    Keyed(HashMap<String, StatePermitData>),
}

impl PermitTableFile {
    fn into_table(self) -> PermitTable {
        match self {
            PermitTableFile::List(states) | PermitTableFile::Wrapped { states } => {
                states.into_iter().collect()
            }
            PermitTableFile::Keyed(map) => map
                .into_iter()
                .map(|(code, mut data)| {
                    if data.state_code.trim().is_empty() {
                        data.state_code = code;
                    }
                    data
                })
                .collect(),
        }
    }
}

/// Load a permit table from a JSON or TOML file
pub fn load_permit_table(path: &Path) -> Result<PermitTable> {
    let content = read_file(path)?;
    let format = FileFormat::from_path(path)?;
    if format == FileFormat::Csv {
        return Err(Error::UnsupportedFormat(path.display().to_string()));
    }
    let table = parse_permit_table(&content, format == FileFormat::Toml)?;
    info!(path = %path.display(), states = table.len(), "loaded permit table");
    Ok(table)
}

/// Parse permit table content; `is_toml` selects TOML over JSON
pub fn parse_permit_table(content: &str, is_toml: bool) -> Result<PermitTable> {
    let file: PermitTableFile = if is_toml {
        toml::from_str(content)?
    } else {
        serde_json::from_str(content)?
    };
    Ok(file.into_table())
}

#[cfg(test)]
mod tests {
    use super::*;
    use haulplan_domain::SurchargeModel;
    use std::fs;
    use tempfile::tempdir;

    const STATE_JSON: &str = r#"{
        "state_code": "tx",
        "state_name": "Texas",
        "legal_limits": {
            "max_width": 8.5,
            "max_height": 14.0,
            "max_length_single": 59.0,
            "max_length_combination": 65.0,
            "max_gross_weight": 80000.0
        },
        "oversize_permits": {
            "base_fee": 60.0,
            "dimension_surcharges": { "width": [{ "threshold": 12.0, "fee": 30.0 }] },
            "surcharge_model": "tiered"
        }
    }"#;

    #[test]
    fn test_parse_array() {
        let table = parse_permit_table(&format!("[{}]", STATE_JSON), false).unwrap();
        assert_eq!(table.len(), 1);
        let tx = table.get("TX").unwrap();
        assert_eq!(tx.state_name, "Texas");
        assert_eq!(tx.oversize_permits.surcharge_model, SurchargeModel::Tiered);
    }

    #[test]
    fn test_parse_keyed_object() {
        let body = STATE_JSON.replace(r#""state_code": "tx","#, r#""state_code": "","#);
        let table = parse_permit_table(&format!(r#"{{"ok": {}}}"#, body), false).unwrap();
        assert!(table.get("OK").is_some());
    }

    #[test]
    fn test_parse_toml_states() {
        let toml = r#"
[[states]]
state_code = "OK"
state_name = "Oklahoma"

[states.legal_limits]
max_width = 8.5
max_height = 13.5
max_length_single = 53.0
max_length_combination = 65.0
max_gross_weight = 80000.0

[states.oversize_permits]
base_fee = 40.0
"#;
        let table = parse_permit_table(toml, true).unwrap();
        let ok = table.get("ok").unwrap();
        assert!((ok.oversize_permits.base_fee - 40.0).abs() < f64::EPSILON);
        assert!(ok.contact.is_none());
    }

    #[test]
    fn test_load_rejects_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("permits.csv");
        fs::write(&path, "state_code\nTX\n").unwrap();
        assert!(matches!(
            load_permit_table(&path),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../tests/fixtures/state_permits.json");
        let table = load_permit_table(&path).unwrap();
        assert!(table.get("TX").is_some());
        assert!(table.get("OK").is_some());
    }
}
