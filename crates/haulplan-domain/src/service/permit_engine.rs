//! State permit and escort cost engine
//!
//! Classifies cargo against one state's limits and prices the permit and
//! escort requirements. All money is integer cents; reference schedules in
//! dollars are converted per component with rounding.

use tracing::debug;

use crate::constants::regulations::*;
use crate::model::{
    CargoSpecs, DetailedPermitRequirement, LegalLimits, PermitDataSource, StatePermitData,
    SuperloadThresholds, SurchargeModel, SurchargeTier, WeightBracket,
};

impl LegalLimits {
    /// Federal baseline used when a state has no published data
    pub fn federal() -> Self {
        Self {
            max_width: LEGAL_WIDTH_FT,
            max_height: LEGAL_HEIGHT_FT,
            max_length_single: FEDERAL_MAX_LENGTH_SINGLE_FT,
            max_length_combination: FEDERAL_MAX_LENGTH_COMBINATION_FT,
            max_gross_weight: FEDERAL_MAX_GROSS_WEIGHT_LBS,
        }
    }
}

pub fn dollars_to_cents(dollars: f64) -> i64 {
    (dollars * 100.0).round() as i64
}

/// Render cents as `$1,234.56`
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = (abs / 100).to_string();
    let mut grouped = String::new();
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}.{:02}", sign, grouped, abs % 100)
}

/// Width including the chain/binder allowance unless already measured in
pub fn transport_width(cargo: &CargoSpecs) -> f64 {
    if cargo.width_includes_securement {
        cargo.width
    } else {
        cargo.width + SECUREMENT_ALLOWANCE_FT
    }
}

/// Escort days for a distance: one day per 350 miles, at least one
pub fn trip_days(distance_miles: f64) -> u32 {
    ((distance_miles / MILES_PER_DAY).ceil() as u32).max(1)
}

/// Escort hours for a distance: one hour per 50 miles, at least two
pub fn trip_hours(distance_miles: f64) -> u32 {
    ((distance_miles / MILES_PER_HOUR).ceil() as u32).max(MIN_POLICE_HOURS)
}

/// Surcharge for one dimension
pub fn surcharge_cents(value: f64, tiers: &[SurchargeTier], model: SurchargeModel) -> i64 {
    let exceeded = tiers.iter().filter(|t| value > t.threshold);
    match model {
        SurchargeModel::Cumulative => exceeded.map(|t| dollars_to_cents(t.fee)).sum(),
        SurchargeModel::Tiered => exceeded.map(|t| dollars_to_cents(t.fee)).max().unwrap_or(0),
    }
}

/// Fee of the first bracket covering `gross_weight`; weights beyond every
/// bracket pay the highest bracket fee
fn bracket_cents(gross_weight: f64, brackets: &[WeightBracket]) -> i64 {
    brackets
        .iter()
        .find(|b| b.up_to >= gross_weight)
        .map(|b| dollars_to_cents(b.fee))
        .or_else(|| {
            brackets
                .iter()
                .map(|b| dollars_to_cents(b.fee))
                .max()
        })
        .unwrap_or(0)
}

fn is_superload(cargo: &CargoSpecs, width: f64, thresholds: Option<&SuperloadThresholds>) -> bool {
    match thresholds {
        Some(t) => {
            t.width.is_some_and(|w| width > w)
                || t.height.is_some_and(|h| cargo.height > h)
                || t.length.is_some_and(|l| cargo.length > l)
                || t.weight.is_some_and(|w| cargo.gross_weight > w)
        }
        None => {
            width > DEFAULT_SUPERLOAD_WIDTH_FT
                || cargo.height > DEFAULT_SUPERLOAD_HEIGHT_FT
                || cargo.gross_weight > DEFAULT_SUPERLOAD_WEIGHT_LBS
        }
    }
}

fn scaled(cents: i64, factor: f64) -> i64 {
    (cents as f64 * factor).round() as i64
}

/// Dimension checks shared by the state and fallback paths
fn oversize_reasons(
    state: &str,
    cargo: &CargoSpecs,
    width: f64,
    limits: &LegalLimits,
) -> Vec<String> {
    let mut reasons = Vec::new();
    if width > limits.max_width {
        reasons.push(format!(
            "Width {:.2} ft exceeds {} legal limit of {:.1} ft",
            width, state, limits.max_width
        ));
    }
    if cargo.height > limits.max_height {
        reasons.push(format!(
            "Height {:.2} ft exceeds {} legal limit of {:.1} ft",
            cargo.height, state, limits.max_height
        ));
    }
    if cargo.length > limits.max_length_single {
        reasons.push(format!(
            "Length {:.2} ft exceeds {} legal limit of {:.1} ft",
            cargo.length, state, limits.max_length_single
        ));
    }
    reasons
}

/// Escort vehicles required by a state's rules
struct EscortNeeds {
    escorts: u32,
    pole_car: bool,
    police: bool,
}

fn escort_needs(state: &StatePermitData, cargo: &CargoSpecs, width: f64) -> EscortNeeds {
    let rules = &state.escort_rules;
    let exceeds = |value: f64, threshold: Option<f64>| threshold.is_some_and(|t| value > t);

    let by_width = if exceeds(width, rules.width_two_escorts) {
        2
    } else if exceeds(width, rules.width_one_escort) {
        1
    } else {
        0
    };
    let by_length = if exceeds(cargo.length, rules.length_two_escorts) {
        2
    } else if exceeds(cargo.length, rules.length_one_escort) {
        1
    } else {
        0
    };

    let police = rules.police_escort.as_ref().is_some_and(|p| {
        exceeds(width, p.width) || exceeds(cargo.height, p.height)
    });

    EscortNeeds {
        escorts: by_width.max(by_length),
        pole_car: exceeds(cargo.height, rules.pole_car_height),
        police,
    }
}

/// Permit and escort requirement for one state with published data
pub fn calculate_state_permit(
    state: &StatePermitData,
    cargo: &CargoSpecs,
    distance_miles: f64,
) -> DetailedPermitRequirement {
    let code = state.state_code.trim().to_uppercase();
    let width = transport_width(cargo);
    let limits = &state.legal_limits;

    let mut reasons = oversize_reasons(&code, cargo, width, limits);
    let oversize_required = !reasons.is_empty();
    let overweight_required = cargo.gross_weight > limits.max_gross_weight;
    if overweight_required {
        reasons.push(format!(
            "Gross weight {:.0} lbs exceeds {} legal limit of {:.0} lbs",
            cargo.gross_weight, code, limits.max_gross_weight
        ));
    }
    let superload = is_superload(cargo, width, state.superload_thresholds.as_ref());

    let mut details = Vec::new();
    let mut warnings = Vec::new();
    if !cargo.width_includes_securement {
        details.push(format!(
            "Transport width {:.2} ft includes {:.2} ft securement allowance",
            width, SECUREMENT_ALLOWANCE_FT
        ));
    }

    // Permit fees
    let mut permit_fees = 0;
    if oversize_required {
        let schedule = &state.oversize_permits;
        let base = dollars_to_cents(schedule.base_fee);
        details.push(format!("Oversize base fee: {}", format_cents(base)));
        permit_fees += base;

        let model = schedule.surcharge_model;
        let tiers = &schedule.dimension_surcharges;
        for (label, value, tiers) in [
            ("Width", width, &tiers.width),
            ("Height", cargo.height, &tiers.height),
            ("Length", cargo.length, &tiers.length),
        ] {
            let surcharge = surcharge_cents(value, tiers, model);
            if surcharge > 0 {
                details.push(format!(
                    "{} surcharge ({:?}): {}",
                    label,
                    model,
                    format_cents(surcharge)
                ));
                permit_fees += surcharge;
            }
        }
    }
    if overweight_required {
        let schedule = &state.overweight_permits;
        let base = dollars_to_cents(schedule.base_fee);
        details.push(format!("Overweight base fee: {}", format_cents(base)));
        permit_fees += base;

        let bracket = bracket_cents(cargo.gross_weight, &schedule.weight_brackets);
        if bracket > 0 {
            details.push(format!("Weight bracket fee: {}", format_cents(bracket)));
            permit_fees += bracket;
        }
        if let Some(rate) = schedule.per_mile_fee {
            let fee = dollars_to_cents(rate * distance_miles);
            details.push(format!(
                "Mileage fee: ${:.2}/mi x {:.0} mi = {}",
                rate,
                distance_miles,
                format_cents(fee)
            ));
            permit_fees += fee;
        }
        if let Some(rate) = schedule.ton_mile_fee {
            let tons = cargo.gross_weight / 2000.0;
            let fee = dollars_to_cents(rate * tons * distance_miles);
            details.push(format!(
                "Ton-mile fee: ${:.3} x {:.1} t x {:.0} mi = {}",
                rate,
                tons,
                distance_miles,
                format_cents(fee)
            ));
            permit_fees += fee;
        }
        if let Some(extra) = schedule.extra_legal_fee {
            let fee = dollars_to_cents(extra);
            details.push(format!("Extra-legal trip fee: {}", format_cents(fee)));
            permit_fees += fee;
        }
    }

    // Escorts
    let needs = escort_needs(state, cargo, width);
    let multiplier = regional_multiplier(&code);
    let days = trip_days(distance_miles);
    let hours = trip_hours(distance_miles);
    let mut escort_fees = 0;
    if needs.escorts > 0 {
        let fee = scaled(
            i64::from(needs.escorts) * ESCORT_RATE_PER_DAY_CENTS * i64::from(days),
            multiplier,
        );
        details.push(format!(
            "Escorts: {} x {}/day x {} day(s) x {:.2} = {}",
            needs.escorts,
            format_cents(ESCORT_RATE_PER_DAY_CENTS),
            days,
            multiplier,
            format_cents(fee)
        ));
        escort_fees += fee;
        reasons.push(format!("{} escort vehicle(s) required in {}", needs.escorts, code));
    }
    if needs.pole_car {
        let fee = scaled(POLE_CAR_RATE_PER_DAY_CENTS * i64::from(days), multiplier);
        details.push(format!(
            "Pole car: {}/day x {} day(s) x {:.2} = {}",
            format_cents(POLE_CAR_RATE_PER_DAY_CENTS),
            days,
            multiplier,
            format_cents(fee)
        ));
        escort_fees += fee;
        reasons.push(format!("Height pole car required in {}", code));
    }
    if needs.police {
        let state_fee = state
            .escort_rules
            .police_escort
            .as_ref()
            .and_then(|p| p.fee)
            .map(dollars_to_cents);
        // A state rate over zero miles bills nothing; use the hourly minimum then
        let base = state_fee
            .map(|fee| fee * (distance_miles / MILES_PER_HOUR).ceil() as i64)
            .filter(|&cents| cents > 0)
            .unwrap_or(POLICE_RATE_PER_HOUR_CENTS * i64::from(hours));
        let fee = scaled(base, multiplier);
        details.push(format!("Police escort: {}", format_cents(fee)));
        escort_fees += fee;
        reasons.push(format!("Police escort required in {}", code));
    }

    let permit_required = oversize_required || overweight_required;
    if superload {
        warnings.push(format!(
            "Superload in {}: route survey and extended permit review required",
            code
        ));
    }
    if permit_required {
        if let Some(contact) = &state.contact {
            details.push(match &contact.phone {
                Some(phone) => format!("Permit office: {} ({})", contact.agency, phone),
                None => format!("Permit office: {}", contact.agency),
            });
        }
    }
    let travel_restrictions = if permit_required {
        state.travel_restrictions.describe()
    } else {
        Vec::new()
    };

    DetailedPermitRequirement {
        state_code: code,
        state_name: state.state_name.clone(),
        source: PermitDataSource::StateTable,
        distance_miles,
        oversize_required,
        overweight_required,
        is_superload: superload,
        permit_fees,
        escort_fees,
        total_cost: permit_fees + escort_fees,
        escorts_required: needs.escorts,
        pole_car_required: needs.pole_car,
        police_escort_required: needs.police,
        regional_multiplier: multiplier,
        travel_restrictions,
        warnings,
        reasons,
        calculation_details: details,
    }
}

/// Conservative estimate for a state missing from the permit table
pub fn estimate_without_state_data(
    state_code: &str,
    cargo: &CargoSpecs,
    distance_miles: f64,
) -> DetailedPermitRequirement {
    let code = state_code.trim().to_uppercase();
    debug!(state = %code, "no permit data, using federal baseline estimate");

    let limits = LegalLimits::federal();
    let width = transport_width(cargo);

    let mut reasons = oversize_reasons(&code, cargo, width, &limits);
    let oversize_required = !reasons.is_empty();
    let overweight_required = cargo.gross_weight > limits.max_gross_weight;
    if overweight_required {
        reasons.push(format!(
            "Gross weight {:.0} lbs exceeds federal limit of {:.0} lbs",
            cargo.gross_weight, limits.max_gross_weight
        ));
    }
    let superload = is_superload(cargo, width, None);

    let mut details = vec![format!(
        "Estimated from federal baseline limits; no permit data for {}",
        code
    )];
    let mut permit_fees = 0;
    if oversize_required || overweight_required {
        permit_fees += FALLBACK_BASE_FEE_CENTS;
        if oversize_required {
            permit_fees += FALLBACK_OVERSIZE_FEE_CENTS;
        }
        if overweight_required {
            permit_fees += FALLBACK_OVERWEIGHT_FEE_CENTS;
        }
        details.push(format!("Estimated permit fee: {}", format_cents(permit_fees)));
    }

    let escorts = u32::from(width > FALLBACK_ESCORT_WIDTH_FT);
    let pole_car = cargo.height > FALLBACK_POLE_CAR_HEIGHT_FT;
    let police = width > FALLBACK_POLICE_WIDTH_FT || cargo.height > FALLBACK_POLICE_HEIGHT_FT;
    let days = trip_days(distance_miles);
    let hours = trip_hours(distance_miles);

    let mut escort_fees = 0;
    if escorts > 0 {
        escort_fees += i64::from(escorts) * ESCORT_RATE_PER_DAY_CENTS * i64::from(days);
        reasons.push(format!("{} escort vehicle(s) estimated in {}", escorts, code));
    }
    if pole_car {
        escort_fees += POLE_CAR_RATE_PER_DAY_CENTS * i64::from(days);
        reasons.push(format!("Height pole car estimated in {}", code));
    }
    if police {
        escort_fees += POLICE_RATE_PER_HOUR_CENTS * i64::from(hours);
        reasons.push(format!("Police escort estimated in {}", code));
    }
    if escort_fees > 0 {
        details.push(format!("Estimated escort cost: {}", format_cents(escort_fees)));
    }

    let mut warnings = vec![format!(
        "No permit data for {}; figures are estimates, confirm with the state permit office",
        code
    )];
    if superload {
        warnings.push(format!(
            "Superload in {}: route survey and extended permit review required",
            code
        ));
    }

    DetailedPermitRequirement {
        state_name: code.clone(),
        state_code: code,
        source: PermitDataSource::Estimated,
        distance_miles,
        oversize_required,
        overweight_required,
        is_superload: superload,
        permit_fees,
        escort_fees,
        total_cost: permit_fees + escort_fees,
        escorts_required: escorts,
        pole_car_required: pole_car,
        police_escort_required: police,
        regional_multiplier: 1.0,
        travel_restrictions: Vec::new(),
        warnings,
        reasons,
        calculation_details: details,
    }
}
