//! Route file loader
//!
//! A route file is JSON or TOML with an ordered `states` list and an
//! optional `distances` table of miles per state.

use std::path::Path;

use haulplan_domain::RouteInput;
use haulplan_types::{Error, Result};
use tracing::info;

use crate::{read_file, FileFormat};

pub fn load_route(path: &Path) -> Result<RouteInput> {
    let content = read_file(path)?;
    let raw: RouteInput = match FileFormat::from_path(path)? {
        FileFormat::Json => serde_json::from_str(&content)?,
        FileFormat::Toml => toml::from_str(&content)?,
        FileFormat::Csv => return Err(Error::UnsupportedFormat(path.display().to_string())),
    };

    // Normalize codes the same way the builder does
    let mut route = RouteInput::new(&raw.states);
    for (code, miles) in raw.distances {
        if !miles.is_finite() || miles < 0.0 {
            return Err(Error::InvalidInput(format!(
                "distance for {} must be a non-negative number",
                code
            )));
        }
        route = route.with_distance(&code, miles);
    }
    info!(path = %path.display(), states = route.states.len(), "loaded route");
    Ok(route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_toml_route() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("route.toml");
        fs::write(
            &path,
            "states = [\"tx\", \"ok\", \"ks\"]\n\n[distances]\ntx = 310.0\nKS = 120.5\n",
        )
        .unwrap();

        let route = load_route(&path).unwrap();
        assert_eq!(route.states, vec!["TX", "OK", "KS"]);
        assert!((route.distance_for("TX", 200.0) - 310.0).abs() < f64::EPSILON);
        assert!((route.distance_for("OK", 200.0) - 200.0).abs() < f64::EPSILON);
        assert!((route.total_distance(200.0) - 630.5).abs() < 1e-9);
    }

    #[test]
    fn test_negative_distance_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("route.json");
        fs::write(&path, r#"{"states": ["TX"], "distances": {"TX": -5}}"#).unwrap();
        assert!(matches!(load_route(&path), Err(Error::InvalidInput(_))));
    }
}
