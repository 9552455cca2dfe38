//! Expands quantity-bearing cargo entries into single units

use haulplan_types::{Error, Result};

use crate::model::CargoItem;

/// Reject items whose dimensions or weight cannot describe real cargo
pub fn validate_items(items: &[CargoItem]) -> Result<()> {
    for item in items {
        if item.id.trim().is_empty() {
            return Err(Error::InvalidInput("cargo item with empty id".to_string()));
        }
        let fields = [
            ("length", item.length),
            ("width", item.width),
            ("height", item.height),
            ("weight", item.weight),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            return Err(Error::InvalidInput(format!(
                "{}: {} must be a non-negative number, got {}",
                item.id, name, value
            )));
        }
    }
    Ok(())
}

/// Expand every entry into `quantity` separate units.
///
/// Units of a multi-quantity entry get ids `<id>-unit-<n>` (1-based);
/// entries with quantity 1 (or 0, treated as 1) keep their id.
pub fn normalize_items(items: &[CargoItem]) -> Vec<CargoItem> {
    items
        .iter()
        .flat_map(|item| {
            let quantity = item.quantity.max(1);
            (1..=quantity).map(move |n| {
                let mut unit = item.clone();
                unit.quantity = 1;
                if quantity > 1 {
                    unit.id = format!("{}-unit-{}", item.id, n);
                }
                unit
            })
        })
        .collect()
}
