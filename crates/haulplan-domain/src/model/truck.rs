//! Truck and trailer type definitions

use serde::{Deserialize, Serialize};

use crate::constants::regulations::{LEGAL_HEIGHT_FT, LEGAL_WIDTH_FT};

/// Trailer family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TruckCategory {
    Flatbed,
    StepDeck,
    DoubleDrop,
    Rgn,
    Lowboy,
    Extendable,
    Conestoga,
    Hotshot,
    #[serde(other)]
    Other,
}

impl TruckCategory {
    /// Trailers that are easy to book on short notice
    pub fn is_common(&self) -> bool {
        matches!(self, TruckCategory::Flatbed | TruckCategory::StepDeck)
    }

    /// Trailers with a lowered well for tall cargo
    pub fn is_lowered(&self) -> bool {
        matches!(
            self,
            TruckCategory::DoubleDrop | TruckCategory::Rgn | TruckCategory::Lowboy
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            TruckCategory::Flatbed => "Flatbed",
            TruckCategory::StepDeck => "Step Deck",
            TruckCategory::DoubleDrop => "Double Drop",
            TruckCategory::Rgn => "RGN",
            TruckCategory::Lowboy => "Lowboy",
            TruckCategory::Extendable => "Extendable",
            TruckCategory::Conestoga => "Conestoga",
            TruckCategory::Hotshot => "Hotshot",
            TruckCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for TruckCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How cargo gets onto the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadingMethod {
    Forklift,
    Crane,
    DriveOn,
    Ramp,
    SideLoad,
    #[serde(other)]
    Other,
}

impl LoadingMethod {
    /// Self-propelled equipment can drive itself aboard
    pub fn accepts_rolling_stock(&self) -> bool {
        matches!(self, LoadingMethod::DriveOn | LoadingMethod::Ramp)
    }
}

impl std::fmt::Display for LoadingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LoadingMethod::Forklift => "forklift",
            LoadingMethod::Crane => "crane",
            LoadingMethod::DriveOn => "drive-on",
            LoadingMethod::Ramp => "ramp",
            LoadingMethod::SideLoad => "side-load",
            LoadingMethod::Other => "other",
        };
        f.write_str(s)
    }
}

/// Trailer specification
///
/// Linear dimensions in feet, weights in pounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruckSpec {
    pub id: String,
    /// Display name
    pub name: String,
    pub category: TruckCategory,
    pub loading_method: LoadingMethod,
    pub deck_length: f64,
    pub deck_width: f64,
    /// Deck height above ground
    pub deck_height: f64,
    /// Lowered section length (step-deck, RGN, lowboy)
    #[serde(default)]
    pub well_length: Option<f64>,
    /// Lowered section height above ground
    #[serde(default)]
    pub well_height: Option<f64>,
    pub max_cargo_weight: f64,
    /// Empty trailer weight
    #[serde(default)]
    pub tare_weight: Option<f64>,
    #[serde(default)]
    pub max_legal_cargo_height: Option<f64>,
    #[serde(default)]
    pub max_legal_cargo_width: Option<f64>,
}

impl TruckSpec {
    /// Tallest cargo that keeps the load within the legal height
    pub fn legal_cargo_height(&self) -> f64 {
        self.max_legal_cargo_height
            .unwrap_or(LEGAL_HEIGHT_FT - self.deck_height)
    }

    /// Widest cargo that keeps the load within the legal width
    pub fn legal_cargo_width(&self) -> f64 {
        self.max_legal_cargo_width.unwrap_or(LEGAL_WIDTH_FT)
    }

    /// Whether the trailer has a lowered well section
    pub fn carries_tall_cargo(&self) -> bool {
        self.well_length.is_some() || self.well_height.is_some()
    }
}
