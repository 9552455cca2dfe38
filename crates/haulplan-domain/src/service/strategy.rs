//! Plan strategy generation
//!
//! Every strategy picks a truck for each item independently; items never
//! interact within a strategy. Packing several items onto one truck is a
//! separate step (see [`crate::service::placement::consolidate_plan`]).

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::constants::regulations::{LEGAL_HEIGHT_FT, LEGAL_WIDTH_FT};
use crate::model::{
    CargoItem, LoadPlan, LoadingMethod, PlanStrategy, PlannedLoad, SmartPlanOption, TruckCategory,
    TruckSpec,
};
use crate::service::normalizer::normalize_items;
use crate::service::placement::build_load;
use crate::service::truck_fit::{best_fit_index, evaluate_fit, fits_legally, fits_physically, ratio};

/// Mandatory permit entry when no legal truck exists for an item
pub const OVERSIZE_PERMIT_REQUIRED: &str = "Oversize/overweight permit required";

/// Deck height of a standard flatbed; cargo taller than the legal height
/// above it is "tall" and benefits from a lowered deck
const STANDARD_DECK_HEIGHT_FT: f64 = 5.0;

// Best-placement bonuses
const PLACEMENT_BASE_SCORE: f64 = 50.0;
const ROLLING_STOCK_BONUS: f64 = 25.0;
const TALL_CARGO_WELL_BONUS: f64 = 20.0;
const CRANE_CARGO_BONUS: f64 = 20.0;
const LONG_MATERIAL_BONUS: f64 = 15.0;
const COVERED_CARGO_BONUS: f64 = 15.0;
const CLEARANCE_WINDOW_BONUS: f64 = 10.0;
const CLEARANCE_WINDOW_FT: f64 = 2.0;
const LEGAL_FIT_BONUS: f64 = 15.0;

static ROLLING_STOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(excavator|dozer|bulldozer|loader|backhoe|skid[- ]?steer|tractor|grader|paver|roller|compactor|telehandler|forklift)s?\b")
        .expect("valid rolling stock pattern")
});

static CRANE_CARGO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(transformer|generator|tank|vessel|boiler|turbine|press|machinery|machine)s?\b")
        .expect("valid crane cargo pattern")
});

static LONG_MATERIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(beam|girder|pipe|pole|truss|lumber|steel|rebar|piling)s?\b")
        .expect("valid long material pattern")
});

static COVERED_CARGO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(drywall|insulation|paper|electronics|crated|palletized|cabinet)s?\b")
        .expect("valid covered cargo pattern")
});

/// Truck chosen for one item under one strategy
#[derive(Debug, Clone, PartialEq)]
pub struct TruckSelection {
    /// Index into the truck catalog
    pub truck_index: usize,
    pub fits: bool,
    pub is_legal: bool,
    /// No truck in the catalog can physically carry the item
    pub unassignable: bool,
    pub permits: Vec<String>,
    pub warnings: Vec<String>,
}

// ==========================================
// Selection policies
// ==========================================

impl PlanStrategy {
    /// The truck this strategy prefers, if any candidate qualifies
    fn preferred_truck(&self, item: &CargoItem, trucks: &[TruckSpec]) -> Option<usize> {
        match self {
            PlanStrategy::Recommended => best_fit_index(item, trucks),
            PlanStrategy::LegalOnly => smallest_legal(item, trucks, |_| true),
            PlanStrategy::Fastest => smallest_legal(item, trucks, |t| t.category.is_common())
                .or_else(|| smallest_legal(item, trucks, |_| true)),
            PlanStrategy::MaxSafety => highest_scoring(item, trucks, safety_score),
            PlanStrategy::BestPlacement => highest_scoring(item, trucks, placement_score),
        }
    }

    /// Strategies that only accept legal trucks fall back with a permit
    fn requires_legal(&self) -> bool {
        matches!(self, PlanStrategy::LegalOnly | PlanStrategy::Fastest)
    }
}

/// Shortest deck among legally fitting trucks that pass `filter`
fn smallest_legal<F>(item: &CargoItem, trucks: &[TruckSpec], filter: F) -> Option<usize>
where
    F: Fn(&TruckSpec) -> bool,
{
    let mut best: Option<(usize, f64)> = None;
    for (idx, truck) in trucks.iter().enumerate() {
        if !filter(truck) || !fits_legally(item, truck) {
            continue;
        }
        match best {
            Some((_, length)) if truck.deck_length >= length => {}
            _ => best = Some((idx, truck.deck_length)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Highest `score` among physically fitting trucks, first-seen on ties
fn highest_scoring<F>(item: &CargoItem, trucks: &[TruckSpec], score: F) -> Option<usize>
where
    F: Fn(&CargoItem, &TruckSpec) -> f64,
{
    let mut best: Option<(usize, f64)> = None;
    for (idx, truck) in trucks.iter().enumerate() {
        if !fits_physically(item, truck) {
            continue;
        }
        let s = score(item, truck);
        match best {
            Some((_, top)) if s <= top => {}
            _ => best = Some((idx, s)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Slack on every axis: height clearance, weight margin, spare deck length
pub fn safety_score(item: &CargoItem, truck: &TruckSpec) -> f64 {
    let weight_margin = truck.max_cargo_weight - item.total_weight();
    5.0 * (truck.legal_cargo_height() - item.height)
        + 50.0 * ratio(weight_margin, truck.max_cargo_weight)
        + 2.0 * (truck.deck_length - item.length)
}

/// How well the trailer type and loading method suit the cargo
pub fn placement_score(item: &CargoItem, truck: &TruckSpec) -> f64 {
    let description = item.description.as_str();
    let mut score = PLACEMENT_BASE_SCORE;

    if ROLLING_STOCK.is_match(description) && truck.loading_method.accepts_rolling_stock() {
        score += ROLLING_STOCK_BONUS;
    }
    if item.height > LEGAL_HEIGHT_FT - STANDARD_DECK_HEIGHT_FT
        && (truck.carries_tall_cargo() || truck.category.is_lowered())
    {
        score += TALL_CARGO_WELL_BONUS;
    }
    if CRANE_CARGO.is_match(description) && truck.loading_method == LoadingMethod::Crane {
        score += CRANE_CARGO_BONUS;
    }
    if LONG_MATERIAL.is_match(description)
        && matches!(truck.category, TruckCategory::Flatbed | TruckCategory::Extendable)
    {
        score += LONG_MATERIAL_BONUS;
    }
    if COVERED_CARGO.is_match(description) && truck.category == TruckCategory::Conestoga {
        score += COVERED_CARGO_BONUS;
    }

    let clearance = truck.legal_cargo_height() - item.height;
    if (0.0..=CLEARANCE_WINDOW_FT).contains(&clearance) {
        score += CLEARANCE_WINDOW_BONUS;
    }
    if fits_legally(item, truck) {
        score += LEGAL_FIT_BONUS;
    }
    score
}

/// Why an item on this truck exceeds the federal baseline
fn permit_reasons(item: &CargoItem, truck: &TruckSpec) -> Vec<String> {
    let mut reasons = Vec::new();
    if item.width > LEGAL_WIDTH_FT {
        reasons.push(format!(
            "Oversize width: {:.2} ft exceeds {:.1} ft",
            item.width, LEGAL_WIDTH_FT
        ));
    }
    let overall_height = item.height + truck.deck_height;
    if overall_height > LEGAL_HEIGHT_FT {
        reasons.push(format!(
            "Oversize height: {:.2} ft overall exceeds {:.1} ft",
            overall_height, LEGAL_HEIGHT_FT
        ));
    }
    reasons
}

/// Pick a truck for one item. Returns `None` only for an empty catalog.
pub fn select_truck(
    strategy: PlanStrategy,
    item: &CargoItem,
    trucks: &[TruckSpec],
) -> Option<TruckSelection> {
    if trucks.is_empty() {
        return None;
    }

    let mut warnings = Vec::new();
    let mut mandatory_permit = false;

    let truck_index = match strategy.preferred_truck(item, trucks) {
        Some(idx) => idx,
        None if strategy.requires_legal() => {
            let idx = best_fit_index(item, trucks).unwrap_or(0);
            debug!(
                item = %item.id,
                strategy = %strategy,
                truck = %trucks[idx].id,
                "no legal truck, falling back"
            );
            warnings.push(format!(
                "No legal truck for {}; using {} with an oversize/overweight permit",
                item.label(),
                trucks[idx].name
            ));
            mandatory_permit = true;
            idx
        }
        None => 0,
    };

    let truck = &trucks[truck_index];
    let fit = evaluate_fit(item, truck);
    let unassignable = !fit.fits;
    if unassignable {
        debug!(item = %item.id, strategy = %strategy, "item fits no truck in the catalog");
        warnings.push(format!(
            "No truck in the catalog can carry {} ({:.1} x {:.1} x {:.1} ft, {:.0} lbs); \
             assigned {} for manual review",
            item.label(),
            item.length,
            item.width,
            item.height,
            item.total_weight(),
            truck.name
        ));
    }

    let mut permits = if fit.is_legal {
        Vec::new()
    } else {
        permit_reasons(item, truck)
    };
    if mandatory_permit || (!fit.is_legal && permits.is_empty()) {
        permits.insert(0, OVERSIZE_PERMIT_REQUIRED.to_string());
    }

    Some(TruckSelection {
        truck_index,
        fits: fit.fits,
        is_legal: fit.is_legal,
        unassignable,
        permits,
        warnings,
    })
}

// ==========================================
// Plan assembly
// ==========================================

/// One-item load carrying the selection's legality verdict
fn selection_load(
    id: String,
    item: &CargoItem,
    truck: &TruckSpec,
    selection: TruckSelection,
) -> PlannedLoad {
    let mut load = build_load(id, truck, vec![item.clone()]);
    let deck_legal = load.is_legal;
    load.is_legal = selection.is_legal && deck_legal;
    if !selection.is_legal {
        load.permits_required = selection.permits;
    }
    let mut warnings = selection.warnings;
    warnings.append(&mut load.warnings);
    load.warnings = warnings;
    load
}

fn badges(plan: &LoadPlan, legal_loads: usize, permit_count: usize) -> Vec<String> {
    let mut badges = Vec::new();
    if permit_count == 0 {
        badges.push("No Permits".to_string());
    } else if permit_count == 1 {
        badges.push("1 Permit".to_string());
    } else {
        badges.push(format!("{} Permits", permit_count));
    }
    if !plan.loads.is_empty() && legal_loads == plan.loads.len() {
        badges.push("100% Legal".to_string());
    }
    if plan.total_trucks == 1 {
        badges.push("Single Truck".to_string());
    }
    if !plan.loads.is_empty() && plan.loads.iter().all(|l| l.truck.category.is_common()) {
        badges.push("Common Trailers".to_string());
    }
    if !plan.unassignable_items.is_empty() {
        badges.push("Needs Review".to_string());
    }
    badges
}

/// Summarise a plan as a strategy option
pub fn build_option(strategy: PlanStrategy, plan: LoadPlan) -> SmartPlanOption {
    let legal_loads = plan.legal_loads();
    let permit_count = plan.permit_count();
    SmartPlanOption {
        strategy,
        name: strategy.name().to_string(),
        description: strategy.description().to_string(),
        legal_loads,
        non_legal_loads: plan.loads.len() - legal_loads,
        permit_count,
        is_recommended: strategy == PlanStrategy::Recommended,
        badges: badges(&plan, legal_loads, permit_count),
        plan,
        permit_estimate: None,
    }
}

/// Plan already-normalized items with one strategy
pub fn plan_with_strategy(
    strategy: PlanStrategy,
    items: &[CargoItem],
    trucks: &[TruckSpec],
) -> SmartPlanOption {
    let mut loads = Vec::with_capacity(items.len());
    let mut unassignable = Vec::new();
    let mut fallbacks = 0;

    for item in items {
        let Some(selection) = select_truck(strategy, item, trucks) else {
            unassignable.push(item.id.clone());
            continue;
        };
        if selection.unassignable {
            unassignable.push(item.id.clone());
        }
        if selection.permits.iter().any(|p| p == OVERSIZE_PERMIT_REQUIRED) {
            fallbacks += 1;
        }
        let truck = &trucks[selection.truck_index];
        let id = format!("load-{}", loads.len() + 1);
        loads.push(selection_load(id, item, truck, selection));
    }

    let mut warnings = Vec::new();
    if trucks.is_empty() && !items.is_empty() {
        warnings.push("No trucks available in the catalog".to_string());
    }
    if !unassignable.is_empty() && !trucks.is_empty() {
        warnings.push(format!(
            "{} item(s) do not fit any truck in the catalog and need manual review",
            unassignable.len()
        ));
    }
    if strategy.requires_legal() && fallbacks > 0 {
        warnings.push(format!(
            "{} item(s) have no legal truck and require permits",
            fallbacks
        ));
    }

    let mut plan = LoadPlan::from_loads(loads, warnings);
    plan.total_items = items.len();
    plan.unassignable_items = unassignable;
    build_option(strategy, plan)
}

/// Produce all five strategy options for raw cargo entries
pub fn generate_smart_plans(items: &[CargoItem], trucks: &[TruckSpec]) -> Vec<SmartPlanOption> {
    let units = normalize_items(items);
    debug!(
        entries = items.len(),
        units = units.len(),
        trucks = trucks.len(),
        "generating smart plans"
    );
    PlanStrategy::ALL
        .into_iter()
        .map(|strategy| plan_with_strategy(strategy, &units, trucks))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::default_catalog;
    use crate::service::placement::consolidate_plan;

    fn truck(id: &str, category: TruckCategory, deck_length: f64, deck_height: f64) -> TruckSpec {
        TruckSpec {
            id: id.to_string(),
            name: id.to_string(),
            category,
            loading_method: LoadingMethod::Forklift,
            deck_length,
            deck_width: 8.5,
            deck_height,
            well_length: None,
            well_height: None,
            max_cargo_weight: 48_000.0,
            tare_weight: None,
            max_legal_cargo_height: None,
            max_legal_cargo_width: None,
        }
    }

    fn option(options: &[SmartPlanOption], strategy: PlanStrategy) -> &SmartPlanOption {
        options.iter().find(|o| o.strategy == strategy).unwrap()
    }

    // ==========================================
    // Policies
    // ==========================================

    #[test]
    fn test_legal_only_picks_shortest_legal_deck() {
        let trucks = vec![
            truck("long", TruckCategory::Flatbed, 53.0, 5.0),
            truck("short", TruckCategory::Flatbed, 30.0, 5.0),
            truck("tiny", TruckCategory::Flatbed, 10.0, 5.0),
        ];
        let item = CargoItem::new("a", 20.0, 8.0, 4.0, 10_000.0);
        let selection = select_truck(PlanStrategy::LegalOnly, &item, &trucks).unwrap();
        assert_eq!(selection.truck_index, 1);
        assert!(selection.is_legal);
        assert!(selection.permits.is_empty());
    }

    #[test]
    fn test_legal_only_falls_back_with_mandatory_permit() {
        let trucks = vec![truck("fb", TruckCategory::Flatbed, 48.0, 5.0)];
        let item = CargoItem::new("tall", 20.0, 8.0, 10.0, 10_000.0);
        let selection = select_truck(PlanStrategy::LegalOnly, &item, &trucks).unwrap();
        assert_eq!(selection.truck_index, 0);
        assert!(!selection.is_legal);
        assert_eq!(selection.permits[0], OVERSIZE_PERMIT_REQUIRED);
        assert!(selection.permits.iter().any(|p| p.starts_with("Oversize height")));
        assert!(selection.warnings[0].starts_with("No legal truck for tall"));
        assert!(!selection.unassignable);
    }

    #[test]
    fn test_fastest_prefers_common_categories() {
        let trucks = vec![
            truck("hotshot", TruckCategory::Hotshot, 30.0, 3.5),
            truck("step", TruckCategory::StepDeck, 48.0, 3.5),
            truck("flat", TruckCategory::Flatbed, 53.0, 5.0),
        ];
        let item = CargoItem::new("a", 25.0, 8.0, 6.0, 10_000.0);
        let selection = select_truck(PlanStrategy::Fastest, &item, &trucks).unwrap();
        assert_eq!(selection.truck_index, 1);
    }

    #[test]
    fn test_fastest_uses_any_legal_when_no_common_fits() {
        let trucks = vec![
            truck("flat", TruckCategory::Flatbed, 48.0, 5.0),
            truck("rgn", TruckCategory::Rgn, 48.0, 2.0),
        ];
        let item = CargoItem::new("tall", 25.0, 8.0, 11.0, 10_000.0);
        let selection = select_truck(PlanStrategy::Fastest, &item, &trucks).unwrap();
        assert_eq!(selection.truck_index, 1);
        assert!(selection.is_legal);
    }

    #[test]
    fn test_max_safety_prefers_slack() {
        let trucks = vec![
            truck("snug", TruckCategory::Flatbed, 26.0, 5.0),
            truck("roomy", TruckCategory::StepDeck, 53.0, 3.5),
        ];
        let item = CargoItem::new("a", 25.0, 8.0, 6.0, 10_000.0);
        let selection = select_truck(PlanStrategy::MaxSafety, &item, &trucks).unwrap();
        assert_eq!(selection.truck_index, 1);
    }

    #[test]
    fn test_safety_score_formula() {
        let t = truck("fb", TruckCategory::Flatbed, 48.0, 5.0);
        let item = CargoItem::new("a", 40.0, 8.0, 6.5, 24_000.0);
        // 5*(8.5-6.5) + 50*(24000/48000) + 2*(48-40)
        assert!((safety_score(&item, &t) - 51.0).abs() < 1e-9);
    }

    #[test]
    fn test_best_placement_matches_drive_on_equipment() {
        let mut rgn = truck("rgn", TruckCategory::Rgn, 48.0, 2.0);
        rgn.loading_method = LoadingMethod::DriveOn;
        let trucks = vec![truck("flat", TruckCategory::Flatbed, 48.0, 5.0), rgn];
        let item =
            CargoItem::new("cat", 24.0, 8.0, 7.0, 30_000.0).with_description("CAT 320 Excavator");
        let selection = select_truck(PlanStrategy::BestPlacement, &item, &trucks).unwrap();
        assert_eq!(selection.truck_index, 1);
    }

    #[test]
    fn test_placement_score_components() {
        let t = truck("fb", TruckCategory::Flatbed, 48.0, 5.0);
        // Clearance 8.5 - 7.0 = 1.5 → window bonus; legal → bonus
        let item = CargoItem::new("a", 40.0, 8.0, 7.0, 10_000.0).with_description("Steel beams");
        let expected =
            PLACEMENT_BASE_SCORE + LONG_MATERIAL_BONUS + CLEARANCE_WINDOW_BONUS + LEGAL_FIT_BONUS;
        assert!((placement_score(&item, &t) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_unfittable_item_assigned_first_truck_with_flag() {
        let trucks = vec![
            truck("a", TruckCategory::Flatbed, 48.0, 5.0),
            truck("b", TruckCategory::Flatbed, 53.0, 5.0),
        ];
        let item = CargoItem::new("giant", 90.0, 12.0, 14.0, 150_000.0);
        for strategy in PlanStrategy::ALL {
            let selection = select_truck(strategy, &item, &trucks).unwrap();
            assert_eq!(selection.truck_index, 0, "{}", strategy);
            assert!(selection.unassignable);
            assert!(!selection.permits.is_empty());
            assert!(selection
                .warnings
                .iter()
                .any(|w| w.starts_with("No truck in the catalog can carry giant")));
        }
    }

    #[test]
    fn test_empty_catalog_selects_nothing() {
        let item = CargoItem::new("a", 10.0, 8.0, 4.0, 1_000.0);
        assert!(select_truck(PlanStrategy::Recommended, &item, &[]).is_none());
    }

    // ==========================================
    // Options
    // ==========================================

    #[test]
    fn test_generates_five_options_one_load_per_unit() {
        let items = vec![CargoItem::new("crate", 10.0, 6.0, 4.0, 5_000.0).with_quantity(3)];
        let options = generate_smart_plans(&items, &default_catalog());
        assert_eq!(options.len(), 5);
        for opt in &options {
            assert_eq!(opt.plan.total_trucks, 3);
            assert_eq!(opt.plan.total_items, 3);
            assert!((opt.plan.total_weight - 15_000.0).abs() < f64::EPSILON);
        }
        assert!(option(&options, PlanStrategy::Recommended).is_recommended);
        assert_eq!(options.iter().filter(|o| o.is_recommended).count(), 1);
    }

    #[test]
    fn test_legal_plan_badges() {
        let items = vec![CargoItem::new("a", 20.0, 8.0, 4.0, 10_000.0)];
        let options =
            generate_smart_plans(&items, &[truck("fb", TruckCategory::Flatbed, 48.0, 5.0)]);
        let rec = option(&options, PlanStrategy::Recommended);
        assert_eq!(rec.legal_loads, 1);
        assert_eq!(rec.non_legal_loads, 0);
        assert_eq!(rec.permit_count, 0);
        assert!(rec.badges.contains(&"No Permits".to_string()));
        assert!(rec.badges.contains(&"100% Legal".to_string()));
        assert!(rec.badges.contains(&"Single Truck".to_string()));
        assert!(rec.badges.contains(&"Common Trailers".to_string()));
    }

    #[test]
    fn test_permit_counts_aggregate() {
        let items = vec![
            CargoItem::new("wide-tall", 20.0, 10.0, 10.0, 10_000.0),
            CargoItem::new("ok", 20.0, 8.0, 4.0, 10_000.0),
        ];
        let mut wide = truck("wide", TruckCategory::Flatbed, 48.0, 5.0);
        wide.deck_width = 12.0;
        let options = generate_smart_plans(&items, &[wide]);
        let rec = option(&options, PlanStrategy::Recommended);
        assert_eq!(rec.non_legal_loads, 1);
        assert_eq!(rec.permit_count, 2);
        assert!(rec.badges.contains(&"2 Permits".to_string()));
        let legal_only = option(&options, PlanStrategy::LegalOnly);
        assert_eq!(legal_only.permit_count, 3);
        assert!(legal_only
            .plan
            .warnings
            .contains(&"1 item(s) have no legal truck and require permits".to_string()));
    }

    #[test]
    fn test_empty_inputs_give_empty_plans() {
        let options = generate_smart_plans(&[], &default_catalog());
        assert!(options.iter().all(|o| o.plan.total_trucks == 0 && o.plan.total_weight == 0.0));

        let items = vec![CargoItem::new("a", 10.0, 8.0, 4.0, 1_000.0)];
        let options = generate_smart_plans(&items, &[]);
        for opt in &options {
            assert!(opt.plan.loads.is_empty());
            assert_eq!(opt.plan.unassignable_items, vec!["a".to_string()]);
            assert_eq!(opt.plan.warnings, vec!["No trucks available in the catalog".to_string()]);
        }
    }

    #[test]
    fn test_unassignable_items_flagged_on_plan() {
        let items = vec![CargoItem::new("giant", 90.0, 12.0, 14.0, 150_000.0)];
        let options = generate_smart_plans(&items, &default_catalog());
        let rec = option(&options, PlanStrategy::Recommended);
        assert_eq!(rec.plan.unassignable_items, vec!["giant".to_string()]);
        assert!(rec.badges.contains(&"Needs Review".to_string()));
        assert!(!rec.plan.loads[0].is_legal);
    }

    #[test]
    fn test_packing_keeps_fallback_permits_and_warnings() {
        let items = vec![CargoItem::new("giant", 90.0, 12.0, 14.0, 150_000.0)];
        let option = plan_with_strategy(PlanStrategy::LegalOnly, &items, &default_catalog());
        let packed = consolidate_plan(&option.plan);
        assert_eq!(packed.loads.len(), 1);

        let load = &packed.loads[0];
        assert!(!load.is_legal);
        assert_eq!(load.permits_required[0], OVERSIZE_PERMIT_REQUIRED);
        assert_eq!(load.permits_required, option.plan.loads[0].permits_required);
        assert!(load.warnings.iter().any(|w| w.starts_with("No legal truck for giant")));
        assert!(load
            .warnings
            .iter()
            .any(|w| w.starts_with("No truck in the catalog can carry giant")));
        assert_eq!(packed.unassignable_items, vec!["giant".to_string()]);
    }

    #[test]
    fn test_packing_leaves_legal_loads_untouched() {
        let items = vec![CargoItem::new("a", 20.0, 8.0, 4.0, 10_000.0)];
        let option = plan_with_strategy(PlanStrategy::Recommended, &items, &default_catalog());
        let packed = consolidate_plan(&option.plan);
        assert!(packed.loads[0].is_legal);
        assert!(packed.loads[0].permits_required.is_empty());
        assert_eq!(packed.loads[0].warnings, option.plan.loads[0].warnings);
    }
}
