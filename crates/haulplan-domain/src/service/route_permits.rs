//! Route permit aggregation
//!
//! Runs the state engine over every state on a route and rolls the results
//! up into route and plan totals.

use tracing::debug;

use super::permit_engine::{
    calculate_state_permit, estimate_without_state_data, trip_days, trip_hours,
};
use crate::model::{
    CargoSpecs, EscortCostBreakdown, EscortRates, LoadPlan, PermitTable, PlanPermitEstimate,
    RouteInput, RoutePermitSummary, StateEscortCost,
};

/// Permit and escort summary for one load along a route.
///
/// States missing from `table` fall back to the estimator. States without a
/// supplied distance are charged for `default_distance` miles.
pub fn calculate_route_permits(
    cargo: &CargoSpecs,
    route: &RouteInput,
    table: &PermitTable,
    default_distance: f64,
) -> RoutePermitSummary {
    let mut summary = RoutePermitSummary::default();
    let mut breakdown = EscortCostBreakdown {
        rates: EscortRates::default(),
        ..Default::default()
    };

    for code in &route.states {
        let distance = route.distance_for(code, default_distance);
        let requirement = match table.get(code) {
            Some(data) => calculate_state_permit(data, cargo, distance),
            None => estimate_without_state_data(code, cargo, distance),
        };

        summary.total_permit_fees += requirement.permit_fees;
        summary.total_escort_fees += requirement.escort_fees;
        summary.total_distance_miles += distance;
        summary.any_superload |= requirement.is_superload;

        for restriction in &requirement.travel_restrictions {
            let line = format!("{}: {}", requirement.state_code, restriction);
            if !summary.travel_restrictions.contains(&line) {
                summary.travel_restrictions.push(line);
            }
        }
        for warning in &requirement.warnings {
            if !summary.warnings.contains(warning) {
                summary.warnings.push(warning.clone());
            }
        }

        breakdown.max_escort_count = breakdown.max_escort_count.max(requirement.escorts_required);
        breakdown.pole_car_required |= requirement.pole_car_required;
        breakdown.police_escort_required |= requirement.police_escort_required;
        breakdown.per_state.push(StateEscortCost {
            state_code: requirement.state_code.clone(),
            distance_miles: distance,
            escorts: requirement.escorts_required,
            pole_car: requirement.pole_car_required,
            police_escort: requirement.police_escort_required,
            regional_multiplier: requirement.regional_multiplier,
            cost: requirement.escort_fees,
        });

        summary.states.push(requirement);
    }

    if !route.states.is_empty() {
        breakdown.trip_days = trip_days(summary.total_distance_miles);
        breakdown.trip_hours = trip_hours(summary.total_distance_miles);
    }
    breakdown.total_escort_cost = summary.total_escort_fees;
    summary.escort_breakdown = breakdown;
    summary.total_cost = summary.total_permit_fees + summary.total_escort_fees;

    debug!(
        states = route.states.len(),
        total_cost = summary.total_cost,
        "route permits calculated"
    );
    summary
}

/// Route permits for every load of a plan
pub fn estimate_plan_permits(
    plan: &LoadPlan,
    route: &RouteInput,
    table: &PermitTable,
    tractor_weight: f64,
    default_distance: f64,
) -> PlanPermitEstimate {
    let mut estimate = PlanPermitEstimate::default();
    for load in &plan.loads {
        let cargo = CargoSpecs::for_load(load, tractor_weight);
        let summary = calculate_route_permits(&cargo, route, table, default_distance);
        estimate.total_permit_fees += summary.total_permit_fees;
        estimate.total_escort_fees += summary.total_escort_fees;
        estimate.total_cost += summary.total_cost;
        estimate.per_load.push((load.id.clone(), summary));
    }
    estimate
}
