//! Federal baselines, escort rates and regional cost factors

use std::collections::HashMap;
use std::sync::LazyLock;

/// Federal legal overall height, feet
pub const LEGAL_HEIGHT_FT: f64 = 13.5;
/// Federal legal width, feet
pub const LEGAL_WIDTH_FT: f64 = 8.5;
/// Chain and binder allowance added to measured cargo width (~10 inches)
pub const SECUREMENT_ALLOWANCE_FT: f64 = 0.83;

// Fallback limits for states missing from the permit table
pub const FEDERAL_MAX_LENGTH_SINGLE_FT: f64 = 48.0;
pub const FEDERAL_MAX_LENGTH_COMBINATION_FT: f64 = 65.0;
pub const FEDERAL_MAX_GROSS_WEIGHT_LBS: f64 = 80_000.0;

// Superload thresholds when a state publishes none
pub const DEFAULT_SUPERLOAD_WIDTH_FT: f64 = 16.0;
pub const DEFAULT_SUPERLOAD_HEIGHT_FT: f64 = 16.0;
pub const DEFAULT_SUPERLOAD_WEIGHT_LBS: f64 = 200_000.0;

// Fallback estimator
pub const FALLBACK_BASE_FEE_CENTS: i64 = 5_000;
pub const FALLBACK_OVERSIZE_FEE_CENTS: i64 = 3_000;
pub const FALLBACK_OVERWEIGHT_FEE_CENTS: i64 = 10_000;
pub const FALLBACK_ESCORT_WIDTH_FT: f64 = 12.0;
pub const FALLBACK_POLE_CAR_HEIGHT_FT: f64 = 14.5;
pub const FALLBACK_POLICE_WIDTH_FT: f64 = 14.0;
pub const FALLBACK_POLICE_HEIGHT_FT: f64 = 16.0;

pub const ESCORT_RATE_PER_DAY_CENTS: i64 = 80_000;
pub const POLE_CAR_RATE_PER_DAY_CENTS: i64 = 100_000;
pub const POLICE_RATE_PER_HOUR_CENTS: i64 = 10_000;

/// Miles an escorted load covers in one day
pub const MILES_PER_DAY: f64 = 350.0;
/// Average escorted speed, miles per hour
pub const MILES_PER_HOUR: f64 = 50.0;
pub const MIN_POLICE_HOURS: u32 = 2;

/// Default distance within a route state with no supplied mileage
pub const DEFAULT_STATE_DISTANCE_MILES: f64 = 200.0;

/// Escort cost-of-living factors by state
pub static REGIONAL_MULTIPLIERS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    HashMap::from([
        ("AK", 1.45),
        ("AL", 0.85),
        ("AR", 0.85),
        ("AZ", 1.00),
        ("CA", 1.35),
        ("CO", 1.10),
        ("CT", 1.30),
        ("DC", 1.40),
        ("DE", 1.15),
        ("FL", 1.00),
        ("GA", 0.95),
        ("HI", 1.50),
        ("IA", 0.90),
        ("ID", 0.95),
        ("IL", 1.15),
        ("IN", 0.90),
        ("KS", 0.90),
        ("KY", 0.90),
        ("LA", 0.90),
        ("MA", 1.35),
        ("MD", 1.20),
        ("ME", 1.05),
        ("MI", 1.00),
        ("MN", 1.05),
        ("MO", 0.90),
        ("MS", 0.80),
        ("MT", 0.95),
        ("NC", 0.95),
        ("ND", 0.95),
        ("NE", 0.90),
        ("NH", 1.10),
        ("NJ", 1.30),
        ("NM", 0.90),
        ("NV", 1.05),
        ("NY", 1.40),
        ("OH", 0.95),
        ("OK", 0.85),
        ("OR", 1.10),
        ("PA", 1.10),
        ("RI", 1.20),
        ("SC", 0.90),
        ("SD", 0.90),
        ("TN", 0.90),
        ("TX", 0.95),
        ("UT", 1.00),
        ("VA", 1.05),
        ("VT", 1.05),
        ("WA", 1.20),
        ("WI", 1.00),
        ("WV", 0.85),
        ("WY", 0.95),
    ])
});

/// Regional multiplier for a state code (1.0 when unlisted)
pub fn regional_multiplier(state_code: &str) -> f64 {
    REGIONAL_MULTIPLIERS
        .get(state_code.trim().to_uppercase().as_str())
        .copied()
        .unwrap_or(1.0)
}
