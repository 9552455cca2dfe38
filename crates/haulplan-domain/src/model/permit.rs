//! State permit reference data and permit calculation results
//!
//! Reference data carries fees in dollars the way state schedules publish
//! them; every computed amount is integer cents.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use crate::constants::regulations::{
    ESCORT_RATE_PER_DAY_CENTS, POLE_CAR_RATE_PER_DAY_CENTS, POLICE_RATE_PER_HOUR_CENTS,
};

// ==========================================
// Reference data (read-only, keyed by state)
// ==========================================

/// Standard legal limits for a state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalLimits {
    pub max_width: f64,
    pub max_height: f64,
    /// Single trailer length
    pub max_length_single: f64,
    /// Overall combination length
    pub max_length_combination: f64,
    pub max_gross_weight: f64,
}

/// How dimension surcharge tiers combine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurchargeModel {
    /// Every exceeded tier is charged
    #[default]
    Cumulative,
    /// Only the largest fee among the exceeded tiers is charged
    Tiered,
}

/// Surcharge charged once a dimension exceeds `threshold` feet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurchargeTier {
    pub threshold: f64,
    /// Dollars
    pub fee: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionSurcharges {
    #[serde(default)]
    pub width: Vec<SurchargeTier>,
    #[serde(default)]
    pub height: Vec<SurchargeTier>,
    #[serde(default)]
    pub length: Vec<SurchargeTier>,
}

/// Oversize permit fee schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OversizePermits {
    /// Dollars
    pub base_fee: f64,
    #[serde(default)]
    pub dimension_surcharges: DimensionSurcharges,
    #[serde(default)]
    pub surcharge_model: SurchargeModel,
}

/// Weight bracket: gross weights up to `up_to` pounds pay `fee` dollars
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightBracket {
    pub up_to: f64,
    pub fee: f64,
}

/// Overweight permit fee schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverweightPermits {
    /// Dollars
    pub base_fee: f64,
    #[serde(default)]
    pub weight_brackets: Vec<WeightBracket>,
    /// Dollars per mile travelled in the state
    #[serde(default)]
    pub per_mile_fee: Option<f64>,
    /// Dollars per ton-mile
    #[serde(default)]
    pub ton_mile_fee: Option<f64>,
    /// Flat extra-legal fee per trip, dollars
    #[serde(default)]
    pub extra_legal_fee: Option<f64>,
}

/// Police escort triggers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoliceEscortRules {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    /// State-set fee per 50-mile segment, dollars
    #[serde(default)]
    pub fee: Option<f64>,
}

/// Escort vehicle triggers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EscortRules {
    #[serde(default)]
    pub width_one_escort: Option<f64>,
    #[serde(default)]
    pub width_two_escorts: Option<f64>,
    #[serde(default)]
    pub length_one_escort: Option<f64>,
    #[serde(default)]
    pub length_two_escorts: Option<f64>,
    #[serde(default)]
    pub pole_car_height: Option<f64>,
    #[serde(default)]
    pub police_escort: Option<PoliceEscortRules>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SuperloadThresholds {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
}

/// Movement bans that apply to permitted loads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelRestrictions {
    #[serde(default)]
    pub no_night_travel: bool,
    #[serde(default)]
    pub night_definition: Option<String>,
    #[serde(default)]
    pub no_weekend_travel: bool,
    #[serde(default)]
    pub weekend_definition: Option<String>,
    #[serde(default)]
    pub no_holiday_travel: bool,
    #[serde(default)]
    pub peak_hour_restrictions: Option<String>,
    #[serde(default)]
    pub other: Vec<String>,
}

impl TravelRestrictions {
    /// Human-readable lines, one per active restriction
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.no_night_travel {
            lines.push(match &self.night_definition {
                Some(def) => format!("No night travel ({})", def),
                None => "No night travel".to_string(),
            });
        }
        if self.no_weekend_travel {
            lines.push(match &self.weekend_definition {
                Some(def) => format!("No weekend travel ({})", def),
                None => "No weekend travel".to_string(),
            });
        }
        if self.no_holiday_travel {
            lines.push("No holiday travel".to_string());
        }
        if let Some(peak) = &self.peak_hour_restrictions {
            lines.push(format!("Peak-hour restriction: {}", peak));
        }
        lines.extend(self.other.iter().cloned());
        lines
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateContact {
    pub agency: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Legal limits and permit schedules for one state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatePermitData {
    pub state_code: String,
    pub state_name: String,
    pub legal_limits: LegalLimits,
    #[serde(default)]
    pub oversize_permits: OversizePermits,
    #[serde(default)]
    pub overweight_permits: OverweightPermits,
    #[serde(default)]
    pub escort_rules: EscortRules,
    #[serde(default)]
    pub superload_thresholds: Option<SuperloadThresholds>,
    #[serde(default)]
    pub travel_restrictions: TravelRestrictions,
    #[serde(default)]
    pub contact: Option<StateContact>,
}

/// State permit table keyed by upper-case two-letter code
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PermitTable {
    states: HashMap<String, StatePermitData>,
}

impl PermitTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, data: StatePermitData) {
        self.states.insert(data.state_code.trim().to_uppercase(), data);
    }

    /// Case-insensitive lookup
    pub fn get(&self, state_code: &str) -> Option<&StatePermitData> {
        self.states.get(&state_code.trim().to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State codes in sorted order
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.states.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl<'de> Deserialize<'de> for PermitTable {
    /// Reads a map keyed by state code; keys are normalized like [`PermitTable::insert`]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let states = HashMap::<String, StatePermitData>::deserialize(deserializer)?
            .into_iter()
            .map(|(code, data)| (code.trim().to_uppercase(), data))
            .collect();
        Ok(Self { states })
    }
}

impl FromIterator<StatePermitData> for PermitTable {
    fn from_iter<I: IntoIterator<Item = StatePermitData>>(iter: I) -> Self {
        let mut table = PermitTable::new();
        for data in iter {
            table.insert(data);
        }
        table
    }
}

/// States a route passes through, with miles travelled in each
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteInput {
    pub states: Vec<String>,
    #[serde(default)]
    pub distances: HashMap<String, f64>,
}

impl RouteInput {
    pub fn new<S: AsRef<str>>(states: &[S]) -> Self {
        Self {
            states: states
                .iter()
                .map(|s| s.as_ref().trim().to_uppercase())
                .filter(|s| !s.is_empty())
                .collect(),
            distances: HashMap::new(),
        }
    }

    pub fn with_distance(mut self, state_code: &str, miles: f64) -> Self {
        self.distances
            .insert(state_code.trim().to_uppercase(), miles);
        self
    }

    /// Miles within a state, or `default_miles` when unknown
    pub fn distance_for(&self, state_code: &str, default_miles: f64) -> f64 {
        self.distances
            .get(&state_code.trim().to_uppercase())
            .copied()
            .unwrap_or(default_miles)
    }

    pub fn total_distance(&self, default_miles: f64) -> f64 {
        self.states
            .iter()
            .map(|s| self.distance_for(s, default_miles))
            .sum()
    }
}

// ==========================================
// Calculation results
// ==========================================

/// Whether figures came from the state table or the fallback estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermitDataSource {
    StateTable,
    Estimated,
}

/// Permit and escort requirement for one state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedPermitRequirement {
    pub state_code: String,
    pub state_name: String,
    pub source: PermitDataSource,
    pub distance_miles: f64,
    pub oversize_required: bool,
    pub overweight_required: bool,
    pub is_superload: bool,
    /// Cents
    pub permit_fees: i64,
    /// Cents
    pub escort_fees: i64,
    /// Cents
    pub total_cost: i64,
    pub escorts_required: u32,
    pub pole_car_required: bool,
    pub police_escort_required: bool,
    pub regional_multiplier: f64,
    pub travel_restrictions: Vec<String>,
    pub warnings: Vec<String>,
    pub reasons: Vec<String>,
    pub calculation_details: Vec<String>,
}

impl DetailedPermitRequirement {
    pub fn permit_required(&self) -> bool {
        self.oversize_required || self.overweight_required
    }
}

/// Rates used for escort estimates, in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscortRates {
    pub escort_per_day: i64,
    pub pole_car_per_day: i64,
    pub police_per_hour: i64,
}

impl Default for EscortRates {
    fn default() -> Self {
        Self {
            escort_per_day: ESCORT_RATE_PER_DAY_CENTS,
            pole_car_per_day: POLE_CAR_RATE_PER_DAY_CENTS,
            police_per_hour: POLICE_RATE_PER_HOUR_CENTS,
        }
    }
}

/// Escort cost ledger entry for one state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateEscortCost {
    pub state_code: String,
    pub distance_miles: f64,
    pub escorts: u32,
    pub pole_car: bool,
    pub police_escort: bool,
    pub regional_multiplier: f64,
    /// Cents
    pub cost: i64,
}

/// Route-level escort aggregation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EscortCostBreakdown {
    pub max_escort_count: u32,
    pub pole_car_required: bool,
    pub police_escort_required: bool,
    pub trip_days: u32,
    pub trip_hours: u32,
    pub rates: EscortRates,
    pub per_state: Vec<StateEscortCost>,
    /// Cents
    pub total_escort_cost: i64,
}

/// Permits and escorts for one load across a whole route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutePermitSummary {
    pub states: Vec<DetailedPermitRequirement>,
    /// Cents
    pub total_permit_fees: i64,
    /// Cents
    pub total_escort_fees: i64,
    /// Cents
    pub total_cost: i64,
    pub total_distance_miles: f64,
    pub any_superload: bool,
    pub travel_restrictions: Vec<String>,
    pub warnings: Vec<String>,
    pub escort_breakdown: EscortCostBreakdown,
}

impl RoutePermitSummary {
    /// Codes of the states on the route that require a permit, in route order
    pub fn permit_states(&self) -> Vec<&str> {
        self.states
            .iter()
            .filter(|s| s.permit_required())
            .map(|s| s.state_code.as_str())
            .collect()
    }
}

/// Route permits for every load in a plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanPermitEstimate {
    /// `(load id, summary)` in load order
    pub per_load: Vec<(String, RoutePermitSummary)>,
    /// Cents
    pub total_permit_fees: i64,
    /// Cents
    pub total_escort_fees: i64,
    /// Cents
    pub total_cost: i64,
}
