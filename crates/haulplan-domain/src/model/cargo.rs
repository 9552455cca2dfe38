//! Cargo item type definitions

use serde::{Deserialize, Deserializer, Serialize};

use super::load::PlannedLoad;

/// One physical unit (or a batch of identical units) to transport.
///
/// Dimensions are in feet, weight in pounds. `quantity` is expanded into
/// individual units by [`crate::service::normalizer::normalize_items`]
/// before any planning happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoItem {
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Weight of a single unit
    pub weight: f64,
    /// Zero or negative counts in a manifest read as 1
    #[serde(default = "default_quantity", deserialize_with = "deserialize_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub stackable: bool,
    #[serde(default)]
    pub fragile: bool,
    #[serde(default)]
    pub hazmat: bool,
    #[serde(default)]
    pub bottom_only: bool,
    /// Width was measured including chains and binders
    #[serde(default)]
    pub width_includes_securement: bool,
}

fn default_quantity() -> u32 {
    1
}

fn deserialize_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    i64::deserialize(deserializer).map(CargoItem::clamp_quantity)
}

impl CargoItem {
    /// Manifest quantity as a unit count: at least 1, at most `u32::MAX`
    pub fn clamp_quantity(raw: i64) -> u32 {
        u32::try_from(raw.max(1)).unwrap_or(u32::MAX)
    }

    /// Create a single unit with no handling flags
    pub fn new(id: impl Into<String>, length: f64, width: f64, height: f64, weight: f64) -> Self {
        Self {
            id: id.into(),
            description: String::new(),
            length,
            width,
            height,
            weight,
            quantity: 1,
            stackable: false,
            fragile: false,
            hazmat: false,
            bottom_only: false,
            width_includes_securement: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Weight of every unit in this entry (quantity 0 counts as 1)
    pub fn total_weight(&self) -> f64 {
        self.weight * f64::from(self.quantity.max(1))
    }

    /// Description, or the id when no description was given
    pub fn label(&self) -> &str {
        if self.description.trim().is_empty() {
            &self.id
        } else {
            &self.description
        }
    }
}

/// Dimensions and weight handed to the permit engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CargoSpecs {
    pub length: f64,
    pub width: f64,
    /// Overall transport height (cargo plus deck)
    pub height: f64,
    pub gross_weight: f64,
    #[serde(default)]
    pub width_includes_securement: bool,
}

impl CargoSpecs {
    pub fn new(length: f64, width: f64, height: f64, gross_weight: f64) -> Self {
        Self {
            length,
            width,
            height,
            gross_weight,
            width_includes_securement: false,
        }
    }

    /// Specs for a planned load riding on its truck.
    ///
    /// Height adds the deck height; gross weight adds the trailer tare (when
    /// known) and the tractor weight.
    pub fn for_load(load: &PlannedLoad, tractor_weight: f64) -> Self {
        let tare = load.truck.tare_weight.unwrap_or(0.0);
        Self {
            length: load.length,
            width: load.width,
            height: load.height + load.truck.deck_height,
            gross_weight: load.weight + tare + tractor_weight,
            width_includes_securement: !load.items.is_empty()
                && load.items.iter().all(|i| i.width_includes_securement),
        }
    }
}
