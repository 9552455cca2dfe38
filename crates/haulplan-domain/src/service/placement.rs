//! Deck placement and weight-bounded load splitting
//!
//! Both passes are single left-to-right folds over the item list with no
//! backtracking or rotation, so the same input always yields the same layout.

use std::collections::HashMap;
use tracing::debug;

use crate::model::{CargoItem, LoadPlan, PlacementResult, PlannedLoad, TruckSpec};

/// Permit entry recorded on a load that exceeds the truck's legal limits
pub const PERMIT_REQUIRED: &str = "PERMIT_REQUIRED";

// ==========================================
// Deck placement
// ==========================================

/// Running state of the row packer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct DeckCursor {
    x: f64,
    z: f64,
    /// Widest item in the current row
    row_width: f64,
}

impl DeckCursor {
    /// Place one item, returning the next cursor and the placement
    fn place(self, item: &CargoItem, truck: &TruckSpec) -> (DeckCursor, PlacementResult) {
        let cursor = if self.x + item.length > truck.deck_length {
            DeckCursor {
                x: 0.0,
                z: self.z + self.row_width,
                row_width: 0.0,
            }
        } else {
            self
        };

        if cursor.z + item.width > truck.deck_width {
            let failed = PlacementResult {
                item_id: item.id.clone(),
                x: 0.0,
                z: 0.0,
                rotated: false,
                failed: true,
            };
            return (cursor, failed);
        }

        let placed = PlacementResult {
            item_id: item.id.clone(),
            x: cursor.x,
            z: cursor.z,
            rotated: false,
            failed: false,
        };
        let next = DeckCursor {
            x: cursor.x + item.length,
            z: cursor.z,
            row_width: cursor.row_width.max(item.width),
        };
        (next, placed)
    }
}

/// Greedy row packing of `items` onto the deck, in order.
///
/// Items that overflow the deck width are marked `failed` at `(0, 0)` and do
/// not advance the cursor.
pub fn place_items(items: &[CargoItem], truck: &TruckSpec) -> Vec<PlacementResult> {
    items
        .iter()
        .fold(
            (DeckCursor::default(), Vec::with_capacity(items.len())),
            |(cursor, mut placements), item| {
                let (next, placement) = cursor.place(item, truck);
                placements.push(placement);
                (next, placements)
            },
        )
        .1
}

// ==========================================
// Load splitting
// ==========================================

#[derive(Debug, Default)]
struct SplitState {
    loads: Vec<Vec<CargoItem>>,
    current: Vec<CargoItem>,
    current_weight: f64,
}

impl SplitState {
    fn push(mut self, item: &CargoItem, capacity: f64) -> Self {
        let weight = item.total_weight();
        if !self.current.is_empty() && self.current_weight + weight > capacity {
            self.loads.push(std::mem::take(&mut self.current));
            self.current_weight = 0.0;
        }
        self.current.push(item.clone());
        self.current_weight += weight;
        self
    }

    fn finish(mut self) -> Vec<Vec<CargoItem>> {
        if !self.current.is_empty() {
            self.loads.push(self.current);
        }
        self.loads
    }
}

/// Split items into consecutive groups whose weight stays within the truck's
/// capacity. A single item heavier than the capacity still gets its own group.
pub fn split_into_loads(items: &[CargoItem], truck: &TruckSpec) -> Vec<Vec<CargoItem>> {
    items
        .iter()
        .fold(SplitState::default(), |state, item| {
            state.push(item, truck.max_cargo_weight)
        })
        .finish()
}

// ==========================================
// Load assembly
// ==========================================

/// Assemble a load: envelope, placement, legality and advisory warnings
pub fn build_load(
    id: impl Into<String>,
    truck: &TruckSpec,
    items: Vec<CargoItem>,
) -> PlannedLoad {
    let weight: f64 = items.iter().map(CargoItem::total_weight).sum();
    let length = items.iter().map(|i| i.length).fold(0.0, f64::max);
    let width = items.iter().map(|i| i.width).fold(0.0, f64::max);
    let height = items.iter().map(|i| i.height).fold(0.0, f64::max);

    let placements = place_items(&items, truck);

    let is_legal = length <= truck.deck_length
        && width <= truck.legal_cargo_width()
        && height <= truck.legal_cargo_height()
        && weight <= truck.max_cargo_weight;

    let permits_required = if is_legal {
        Vec::new()
    } else {
        vec![PERMIT_REQUIRED.to_string()]
    };

    let mut warnings = Vec::new();
    let failed = placements.iter().filter(|p| p.failed).count();
    if failed > 0 {
        warnings.push(format!(
            "{} item(s) could not be placed automatically and need manual placement",
            failed
        ));
    }
    if weight > truck.max_cargo_weight {
        warnings.push(format!(
            "Load weight {:.0} lbs exceeds {} capacity of {:.0} lbs",
            weight, truck.name, truck.max_cargo_weight
        ));
    }
    warnings.extend(handling_warnings(&items));

    PlannedLoad {
        id: id.into(),
        truck: truck.clone(),
        items,
        weight,
        length,
        width,
        height,
        placements,
        is_legal,
        permits_required,
        warnings,
    }
}

/// Advisories driven by item handling flags
pub(crate) fn handling_warnings(items: &[CargoItem]) -> Vec<String> {
    let mut warnings = Vec::new();
    for item in items.iter().filter(|i| i.hazmat) {
        warnings.push(format!(
            "Hazmat cargo ({}) requires placards and a hazmat-endorsed driver",
            item.label()
        ));
    }
    if items.len() > 1 {
        for item in items.iter().filter(|i| i.fragile) {
            warnings.push(format!(
                "Fragile cargo ({}) shares the deck with other items; secure it separately",
                item.label()
            ));
        }
    }
    warnings
}

/// Split `items` by weight and place each group on its own copy of `truck`
pub fn plan_truck_loads(items: &[CargoItem], truck: &TruckSpec) -> LoadPlan {
    let groups = split_into_loads(items, truck);
    let mut warnings = Vec::new();
    if groups.len() > 1 {
        warnings.push(format!(
            "Load split into {} trucks based on weight",
            groups.len()
        ));
    }

    let loads = groups
        .into_iter()
        .enumerate()
        .map(|(idx, group)| build_load(format!("load-{}", idx + 1), truck, group))
        .collect();

    LoadPlan::from_loads(loads, warnings)
}

/// Legality verdict a load carries beyond what its deck alone reports
#[derive(Debug, Default)]
struct CarriedVerdict {
    illegal: bool,
    permits: Vec<String>,
    warnings: Vec<String>,
}

impl CarriedVerdict {
    /// Difference between `load` and a fresh [`build_load`] of the same items
    fn of(load: &PlannedLoad) -> Self {
        let deck = build_load(load.id.clone(), &load.truck, load.items.clone());
        let illegal = !load.is_legal
            && (deck.is_legal || load.permits_required != deck.permits_required);
        Self {
            illegal,
            permits: if illegal {
                load.permits_required.clone()
            } else {
                Vec::new()
            },
            warnings: load
                .warnings
                .iter()
                .filter(|w| !deck.warnings.contains(w))
                .cloned()
                .collect(),
        }
    }

    fn merge(&mut self, other: &CarriedVerdict) {
        self.illegal |= other.illegal;
        push_unique(&mut self.permits, &other.permits);
        push_unique(&mut self.warnings, &other.warnings);
    }

    fn apply(self, load: &mut PlannedLoad) {
        if self.illegal {
            load.is_legal = false;
            load.permits_required = self.permits;
        }
        let mut warnings = self.warnings;
        push_unique(&mut warnings, &load.warnings);
        load.warnings = warnings;
    }
}

fn push_unique(into: &mut Vec<String>, from: &[String]) {
    for value in from {
        if !into.contains(value) {
            into.push(value.clone());
        }
    }
}

/// Pack a strategy's loads into real truckloads.
///
/// Items are grouped by assigned truck (first-seen order) and every group
/// is split and placed with [`plan_truck_loads`]. A load the strategy had
/// already ruled illegal keeps its permits and warnings in whichever
/// packed load its items land in.
pub fn consolidate_plan(plan: &LoadPlan) -> LoadPlan {
    let mut groups: Vec<(TruckSpec, Vec<CargoItem>)> = Vec::new();
    let mut verdicts: HashMap<String, CarriedVerdict> = HashMap::new();
    for load in &plan.loads {
        let verdict = CarriedVerdict::of(load);
        for item in &load.items {
            verdicts.entry(item.id.clone()).or_default().merge(&verdict);
        }
        match groups.iter_mut().find(|(t, _)| t.id == load.truck.id) {
            Some((_, items)) => items.extend(load.items.iter().cloned()),
            None => groups.push((load.truck.clone(), load.items.clone())),
        }
    }

    let mut warnings = plan.warnings.clone();
    let mut loads = Vec::new();
    for (truck, items) in &groups {
        let packed = plan_truck_loads(items, truck);
        debug!(
            truck = %truck.id,
            items = items.len(),
            loads = packed.loads.len(),
            "consolidated truck group"
        );
        warnings.extend(
            packed
                .warnings
                .into_iter()
                .map(|w| format!("{}: {}", truck.name, w)),
        );
        loads.extend(packed.loads);
    }

    let loads = loads
        .into_iter()
        .enumerate()
        .map(|(idx, mut load)| {
            load.id = format!("load-{}", idx + 1);
            let mut carried = CarriedVerdict::default();
            for item in &load.items {
                if let Some(verdict) = verdicts.get(&item.id) {
                    carried.merge(verdict);
                }
            }
            carried.apply(&mut load);
            load
        })
        .collect();

    let mut consolidated = LoadPlan::from_loads(loads, warnings);
    consolidated.unassignable_items = plan.unassignable_items.clone();
    consolidated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LoadingMethod, TruckCategory};

    fn flatbed() -> TruckSpec {
        TruckSpec {
            id: "flatbed".to_string(),
            name: "Flatbed".to_string(),
            category: TruckCategory::Flatbed,
            loading_method: LoadingMethod::Forklift,
            deck_length: 48.0,
            deck_width: 8.5,
            deck_height: 5.0,
            well_length: None,
            well_height: None,
            max_cargo_weight: 48_000.0,
            tare_weight: None,
            max_legal_cargo_height: None,
            max_legal_cargo_width: None,
        }
    }

    // ==========================================
    // Placement
    // ==========================================

    #[test]
    fn test_places_along_length_then_wraps() {
        let truck = flatbed();
        let items = vec![
            CargoItem::new("a", 20.0, 4.0, 3.0, 1_000.0),
            CargoItem::new("b", 20.0, 3.0, 3.0, 1_000.0),
            CargoItem::new("c", 20.0, 4.0, 3.0, 1_000.0),
        ];
        let placements = place_items(&items, &truck);
        assert_eq!((placements[0].x, placements[0].z), (0.0, 0.0));
        assert_eq!((placements[1].x, placements[1].z), (20.0, 0.0));
        // 40 + 20 > 48: new row at the widest item of row one
        assert_eq!((placements[2].x, placements[2].z), (0.0, 4.0));
        assert!(placements.iter().all(|p| !p.failed && !p.rotated));
    }

    #[test]
    fn test_overflowing_width_fails_without_moving_cursor() {
        let truck = flatbed();
        let items = vec![
            CargoItem::new("a", 40.0, 6.0, 3.0, 1_000.0),
            CargoItem::new("b", 40.0, 6.0, 3.0, 1_000.0),
            CargoItem::new("c", 8.0, 2.0, 3.0, 1_000.0),
        ];
        let placements = place_items(&items, &truck);
        assert!(!placements[0].failed);
        assert!(placements[1].failed);
        assert_eq!((placements[1].x, placements[1].z), (0.0, 0.0));
        // Row two starts at z = 6; the narrow item still fits there
        assert!(!placements[2].failed);
        assert_eq!((placements[2].x, placements[2].z), (0.0, 6.0));
    }

    #[test]
    fn test_same_row_items_do_not_overlap() {
        let truck = flatbed();
        let items: Vec<CargoItem> = (0..7)
            .map(|n| CargoItem::new(format!("i{}", n), 9.0 + n as f64, 2.5, 3.0, 500.0))
            .collect();
        let placements = place_items(&items, &truck);
        for (i, a) in placements.iter().enumerate().filter(|(_, p)| !p.failed) {
            for (j, b) in placements.iter().enumerate().filter(|(_, p)| !p.failed) {
                if i >= j || a.z != b.z {
                    continue;
                }
                let a_end = a.x + items[i].length;
                let b_end = b.x + items[j].length;
                assert!(a_end <= b.x || b_end <= a.x, "{} overlaps {}", a.item_id, b.item_id);
            }
        }
    }

    // ==========================================
    // Splitting
    // ==========================================

    #[test]
    fn test_weight_split_scenario() {
        let truck = flatbed();
        let items = vec![
            CargoItem::new("item1", 10.0, 4.0, 3.0, 20_000.0),
            CargoItem::new("item2", 10.0, 4.0, 3.0, 20_000.0),
            CargoItem::new("item3", 10.0, 4.0, 3.0, 20_000.0),
        ];
        let plan = plan_truck_loads(&items, &truck);
        assert_eq!(plan.total_trucks, 2);
        assert_eq!(plan.loads[0].items.len(), 2);
        assert!((plan.loads[0].weight - 40_000.0).abs() < f64::EPSILON);
        assert_eq!(plan.loads[1].items[0].id, "item3");
        assert!((plan.loads[1].weight - 20_000.0).abs() < f64::EPSILON);
        assert_eq!(plan.warnings, vec!["Load split into 2 trucks based on weight".to_string()]);
        assert_eq!(plan.total_items, 3);
        assert!((plan.total_weight - 60_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_every_split_load_within_capacity() {
        let truck = flatbed();
        let items: Vec<CargoItem> = [12_000.0, 30_000.0, 7_500.0, 41_000.0, 6_000.0, 48_000.0, 1.0]
            .iter()
            .enumerate()
            .map(|(n, w)| CargoItem::new(format!("i{}", n), 5.0, 4.0, 3.0, *w))
            .collect();
        for group in split_into_loads(&items, &truck) {
            let weight: f64 = group.iter().map(CargoItem::total_weight).sum();
            assert!(weight <= truck.max_cargo_weight, "group weighs {}", weight);
        }
    }

    #[test]
    fn test_oversized_single_item_gets_own_load() {
        let truck = flatbed();
        let items = vec![
            CargoItem::new("light", 5.0, 4.0, 3.0, 1_000.0),
            CargoItem::new("huge", 5.0, 4.0, 3.0, 60_000.0),
        ];
        let groups = split_into_loads(&items, &truck);
        assert_eq!(groups.len(), 2);
        let plan = plan_truck_loads(&items, &truck);
        assert!(plan.loads[1]
            .warnings
            .iter()
            .any(|w| w.contains("exceeds Flatbed capacity")));
    }

    #[test]
    fn test_empty_items_empty_plan() {
        let plan = plan_truck_loads(&[], &flatbed());
        assert_eq!(plan.total_trucks, 0);
        assert_eq!(plan.total_items, 0);
        assert!(plan.warnings.is_empty());
    }

    // ==========================================
    // Legality
    // ==========================================

    #[test]
    fn test_legal_flatbed_scenario() {
        let item = CargoItem::new("a", 48.0, 8.5, 4.5, 40_000.0);
        let load = build_load("load-1", &flatbed(), vec![item]);
        assert!(load.is_legal);
        assert!(load.permits_required.is_empty());
        assert!(load.warnings.is_empty());
    }

    #[test]
    fn test_oversize_height_scenario() {
        let item = CargoItem::new("a", 48.0, 8.5, 10.0, 40_000.0);
        let load = build_load("load-1", &flatbed(), vec![item]);
        assert!(!load.is_legal);
        assert_eq!(load.permits_required, vec![PERMIT_REQUIRED.to_string()]);
    }

    #[test]
    fn test_legal_load_respects_limits() {
        let truck = flatbed();
        let load = build_load(
            "load-1",
            &truck,
            vec![
                CargoItem::new("a", 30.0, 8.0, 8.0, 20_000.0),
                CargoItem::new("b", 10.0, 4.0, 2.0, 5_000.0),
            ],
        );
        assert!(load.is_legal);
        assert!(load.length <= truck.deck_length);
        assert!(load.width <= truck.legal_cargo_width());
        assert!(load.height <= truck.legal_cargo_height());
        assert!(load.weight <= truck.max_cargo_weight);
    }

    #[test]
    fn test_failed_placement_warns() {
        let load = build_load(
            "load-1",
            &flatbed(),
            vec![
                CargoItem::new("a", 40.0, 6.0, 3.0, 1_000.0),
                CargoItem::new("b", 40.0, 6.0, 3.0, 1_000.0),
            ],
        );
        assert_eq!(load.failed_placements(), 1);
        assert!(load.warnings[0].contains("manual placement"));
    }

    #[test]
    fn test_hazmat_and_fragile_warnings() {
        let mut drum =
            CargoItem::new("drum", 4.0, 4.0, 4.0, 800.0).with_description("Solvent drums");
        drum.hazmat = true;
        let mut glass = CargoItem::new("glass", 8.0, 4.0, 4.0, 900.0);
        glass.fragile = true;
        let load = build_load("load-1", &flatbed(), vec![drum, glass]);
        assert!(load.warnings.iter().any(|w| w.contains("Solvent drums")));
        assert!(load.warnings.iter().any(|w| w.starts_with("Fragile cargo (glass)")));
    }

    // ==========================================
    // Consolidation
    // ==========================================

    #[test]
    fn test_consolidate_groups_by_truck() {
        let truck = flatbed();
        let loads = (1..=3)
            .map(|n| {
                build_load(
                    format!("load-{}", n),
                    &truck,
                    vec![CargoItem::new(format!("i{}", n), 12.0, 4.0, 3.0, 20_000.0)],
                )
            })
            .collect();
        let plan = LoadPlan::from_loads(loads, Vec::new());
        let packed = consolidate_plan(&plan);
        assert_eq!(packed.total_trucks, 2);
        assert_eq!(packed.total_items, 3);
        assert_eq!(packed.loads[1].id, "load-2");
        assert_eq!(
            packed.warnings,
            vec!["Flatbed: Load split into 2 trucks based on weight".to_string()]
        );
    }
}
