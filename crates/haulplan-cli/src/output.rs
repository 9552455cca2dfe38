//! Output formatting module

use haulplan_app::{ItemFitReport, PlanningReport};
use haulplan_domain::service::format_cents;
use haulplan_domain::{RoutePermitSummary, SmartPlanOption, TruckSpec};
use haulplan_types::{OutputFormat, Result};
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

pub fn output_plan(output_format: OutputFormat, report: &PlanningReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(report);
    }

    println!("\nLoad Plan");
    println!("=========");
    println!(
        "Cargo: {} entries, {} units{}",
        report.entry_count,
        report.unit_count,
        if report.packed { " (packed)" } else { "" }
    );
    if let Some(route) = &report.route {
        println!("Route: {}", route.states.join(" -> "));
    }

    for option in &report.options {
        print_option(option);
    }
    Ok(())
}

fn print_option(option: &SmartPlanOption) {
    let marker = if option.is_recommended { " *" } else { "" };
    println!("\n--- {}{} ---", option.name, marker);
    println!("{}", option.description);
    if !option.badges.is_empty() {
        println!("[{}]", option.badges.join("] ["));
    }
    println!(
        "Trucks: {}   Legal: {}   Permit loads: {}   Weight: {:.0} lbs",
        option.plan.total_trucks,
        option.legal_loads,
        option.non_legal_loads,
        option.plan.total_weight
    );

    println!(
        "{:<8} {:<24} {:>6} {:>9} {:>7} {:>7} {:>7}  {}",
        "Load", "Truck", "Items", "Lbs", "L ft", "W ft", "H ft", "Status"
    );
    for load in &option.plan.loads {
        let status = if load.is_legal {
            "legal".to_string()
        } else {
            format!("permit ({})", load.permits_required.len())
        };
        println!(
            "{:<8} {:<24} {:>6} {:>9.0} {:>7.2} {:>7.2} {:>7.2}  {}",
            load.id,
            load.truck.name,
            load.item_count(),
            load.weight,
            load.length,
            load.width,
            load.height,
            status
        );
        for warning in &load.warnings {
            println!("           ! {}", warning);
        }
    }

    for warning in &option.plan.warnings {
        println!("Warning: {}", warning);
    }

    if let Some(estimate) = &option.permit_estimate {
        println!(
            "Permits: {}   Escorts: {}   Total: {}",
            format_cents(estimate.total_permit_fees),
            format_cents(estimate.total_escort_fees),
            format_cents(estimate.total_cost)
        );
    }
}

pub fn output_permits(output_format: OutputFormat, summary: &RoutePermitSummary) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(summary);
    }

    println!("\nRoute Permit Estimate");
    println!("=====================");
    println!(
        "{:<6} {:>7} {:>5} {:>5} {:>12} {:>12} {:>12}  {}",
        "State", "Miles", "OS", "OW", "Permits", "Escorts", "Total", "Source"
    );
    for state in &summary.states {
        println!(
            "{:<6} {:>7.0} {:>5} {:>5} {:>12} {:>12} {:>12}  {:?}",
            state.state_code,
            state.distance_miles,
            yes_no(state.oversize_required),
            yes_no(state.overweight_required),
            format_cents(state.permit_fees),
            format_cents(state.escort_fees),
            format_cents(state.total_cost),
            state.source
        );
        for reason in &state.reasons {
            println!("         - {}", reason);
        }
    }

    let escorts = &summary.escort_breakdown;
    println!();
    println!("Distance:        {:.0} mi", summary.total_distance_miles);
    println!(
        "Trip:            {} day(s), {} hour(s)",
        escorts.trip_days, escorts.trip_hours
    );
    println!("Escort vehicles: {} (max)", escorts.max_escort_count);
    println!("Pole car:        {}", yes_no(escorts.pole_car_required));
    println!("Police escort:   {}", yes_no(escorts.police_escort_required));
    println!("Superload:       {}", yes_no(summary.any_superload));
    let permit_states = summary.permit_states();
    if permit_states.is_empty() {
        println!("Permit states:   none");
    } else {
        println!("Permit states:   {}", permit_states.join(", "));
    }
    println!("Permit fees:     {}", format_cents(summary.total_permit_fees));
    println!("Escort fees:     {}", format_cents(summary.total_escort_fees));
    println!("Total:           {}", format_cents(summary.total_cost));

    if !summary.travel_restrictions.is_empty() {
        println!("\nTravel restrictions:");
        for line in &summary.travel_restrictions {
            println!("  {}", line);
        }
    }
    for warning in &summary.warnings {
        println!("Warning: {}", warning);
    }
    Ok(())
}

pub fn output_fit(output_format: OutputFormat, report: &[ItemFitReport]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(report);
    }

    for item in report {
        println!("\n{} ({})", item.label, item.item_id);
        println!("{:<22} {:>5} {:>6} {:>7}", "Truck", "Fits", "Legal", "Score");
        for fit in &item.fits {
            println!(
                "{:<22} {:>5} {:>6} {:>7.1}",
                fit.truck_id,
                yes_no(fit.fits),
                yes_no(fit.is_legal),
                fit.score
            );
        }
        for (strategy, pick) in &item.picks {
            println!(
                "  {:<16} -> {}",
                strategy.name(),
                pick.as_deref().unwrap_or("(none)")
            );
        }
    }
    Ok(())
}

pub fn output_trucks(output_format: OutputFormat, catalog: &[TruckSpec]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(catalog);
    }

    println!(
        "{:<20} {:<28} {:<12} {:>6} {:>6} {:>6} {:>9}",
        "ID", "Name", "Category", "Deck", "Width", "Height", "Capacity"
    );
    for truck in catalog {
        println!(
            "{:<20} {:<28} {:<12} {:>6.1} {:>6.1} {:>6.1} {:>9.0}",
            truck.id,
            truck.name,
            truck.category.label(),
            truck.deck_length,
            truck.deck_width,
            truck.deck_height,
            truck.max_cargo_weight
        );
    }
    Ok(())
}

pub fn output_truck(output_format: OutputFormat, truck: &TruckSpec) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(truck);
    }

    println!("\n{} ({})", truck.name, truck.id);
    println!("Category:        {}", truck.category.label());
    println!("Loading:         {}", truck.loading_method);
    println!(
        "Deck:            {:.1} x {:.1} ft, {:.1} ft high",
        truck.deck_length, truck.deck_width, truck.deck_height
    );
    if let (Some(length), Some(height)) = (truck.well_length, truck.well_height) {
        println!("Well:            {:.1} ft long, {:.1} ft high", length, height);
    }
    println!("Capacity:        {:.0} lbs", truck.max_cargo_weight);
    if let Some(tare) = truck.tare_weight {
        println!("Tare:            {:.0} lbs", tare);
    }
    println!(
        "Legal cargo:     {:.1} ft wide, {:.1} ft high",
        truck.legal_cargo_width(),
        truck.legal_cargo_height()
    );
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
