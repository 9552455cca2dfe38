//! Built-in trailer catalog for US open-deck freight
//!
//! Order matters: the truck fit evaluator breaks score ties in favour of the
//! first entry.

use crate::constants::regulations::LEGAL_HEIGHT_FT;
use crate::model::{LoadingMethod, TruckCategory, TruckSpec};
use std::sync::LazyLock;

#[allow(clippy::too_many_arguments)]
fn spec(
    id: &str,
    name: &str,
    category: TruckCategory,
    loading_method: LoadingMethod,
    deck: (f64, f64, f64),
    well: Option<(f64, f64)>,
    max_cargo_weight: f64,
    tare_weight: f64,
) -> TruckSpec {
    let (deck_length, deck_width, deck_height) = deck;
    TruckSpec {
        id: id.to_string(),
        name: name.to_string(),
        category,
        loading_method,
        deck_length,
        deck_width,
        deck_height,
        well_length: well.map(|w| w.0),
        well_height: well.map(|w| w.1),
        max_cargo_weight,
        tare_weight: Some(tare_weight),
        // A well lowers the cargo, so legal cargo height is measured from it
        max_legal_cargo_height: well.map(|w| LEGAL_HEIGHT_FT - w.1),
        max_legal_cargo_width: None,
    }
}

/// Standard trailer catalog
#[rustfmt::skip]
pub static TRUCK_SPECS: LazyLock<Vec<TruckSpec>> = LazyLock::new(|| {
    use LoadingMethod::*;
    use TruckCategory::*;

    vec![
        spec("flatbed-48", "48' Flatbed", Flatbed, Forklift, (48.0, 8.5, 5.0), None, 48_000.0, 10_500.0),
        spec("flatbed-53", "53' Flatbed", Flatbed, Forklift, (53.0, 8.5, 5.0), None, 46_000.0, 11_500.0),
        spec("step-deck-48", "48' Step Deck", StepDeck, Ramp, (48.0, 8.5, 3.5), Some((37.0, 3.5)), 48_000.0, 11_000.0),
        spec("step-deck-53", "53' Step Deck", StepDeck, Ramp, (53.0, 8.5, 3.5), Some((42.0, 3.5)), 46_000.0, 12_000.0),
        spec("double-drop", "Double Drop", DoubleDrop, Crane, (48.0, 8.5, 3.5), Some((29.0, 2.0)), 45_000.0, 14_000.0),
        spec("rgn", "Removable Gooseneck", Rgn, DriveOn, (48.0, 8.5, 2.0), Some((29.0, 2.0)), 42_000.0, 18_000.0),
        spec("lowboy", "Lowboy", Lowboy, DriveOn, (40.0, 8.5, 1.5), Some((24.0, 1.5)), 80_000.0, 20_000.0),
        spec("extendable-flatbed", "Extendable Flatbed", Extendable, Crane, (80.0, 8.5, 5.0), None, 43_000.0, 13_000.0),
        spec("conestoga", "Conestoga", Conestoga, SideLoad, (48.0, 8.5, 5.0), None, 44_000.0, 12_500.0),
        spec("hotshot", "40' Hotshot", Hotshot, Forklift, (40.0, 8.5, 3.5), None, 16_500.0, 7_000.0),
    ]
});

/// The built-in catalog, in tie-break order
pub fn default_catalog() -> Vec<TruckSpec> {
    TRUCK_SPECS.clone()
}

/// Get truck spec by id (case-insensitive) or display name
pub fn get_truck_spec(truck: &str) -> Option<&'static TruckSpec> {
    let needle = truck.trim().to_lowercase();
    TRUCK_SPECS
        .iter()
        .find(|t| t.id == needle)
        .or_else(|| TRUCK_SPECS.iter().find(|t| t.name.to_lowercase() == needle))
}
