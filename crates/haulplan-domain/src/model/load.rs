//! Planned load and plan type definitions

use serde::{Deserialize, Serialize};

use super::cargo::CargoItem;
use super::permit::PlanPermitEstimate;
use super::strategy::PlanStrategy;
use super::truck::TruckSpec;

/// Position of one item on a truck deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementResult {
    pub item_id: String,
    /// Offset along the deck length, feet from the front
    pub x: f64,
    /// Offset across the deck width, feet from the driver side
    pub z: f64,
    /// Reserved; the row packer never rotates items
    pub rotated: bool,
    /// The packer could not fit this item; it needs manual placement
    pub failed: bool,
}

/// One physical truckload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedLoad {
    pub id: String,
    pub truck: TruckSpec,
    pub items: Vec<CargoItem>,
    /// Total cargo weight in pounds
    pub weight: f64,
    /// Envelope: maximum length across items
    pub length: f64,
    /// Envelope: maximum width across items
    pub width: f64,
    /// Envelope: maximum height across items
    pub height: f64,
    pub placements: Vec<PlacementResult>,
    pub is_legal: bool,
    pub permits_required: Vec<String>,
    pub warnings: Vec<String>,
}

impl PlannedLoad {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn failed_placements(&self) -> usize {
        self.placements.iter().filter(|p| p.failed).count()
    }
}

/// Full output for one strategy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadPlan {
    pub loads: Vec<PlannedLoad>,
    pub total_trucks: usize,
    pub total_items: usize,
    pub total_weight: f64,
    pub warnings: Vec<String>,
    /// Ids of items no truck in the catalog can physically carry
    #[serde(default)]
    pub unassignable_items: Vec<String>,
}

impl LoadPlan {
    /// Build a plan whose totals are derived from its loads
    pub fn from_loads(loads: Vec<PlannedLoad>, warnings: Vec<String>) -> Self {
        let total_items = loads.iter().map(PlannedLoad::item_count).sum();
        let total_weight = loads.iter().map(|l| l.weight).sum();
        Self {
            total_trucks: loads.len(),
            total_items,
            total_weight,
            loads,
            warnings,
            unassignable_items: Vec::new(),
        }
    }

    pub fn legal_loads(&self) -> usize {
        self.loads.iter().filter(|l| l.is_legal).count()
    }

    pub fn permit_count(&self) -> usize {
        self.loads.iter().map(|l| l.permits_required.len()).sum()
    }
}

/// A named strategy's result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartPlanOption {
    pub strategy: PlanStrategy,
    pub name: String,
    pub description: String,
    pub plan: LoadPlan,
    pub legal_loads: usize,
    pub non_legal_loads: usize,
    pub permit_count: usize,
    pub is_recommended: bool,
    pub badges: Vec<String>,
    /// Route permit and escort costs, when a route was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permit_estimate: Option<PlanPermitEstimate>,
}
