//! Planning Service - load plans and permit costs for a cargo manifest
//!
//! This service wires the pieces the domain keeps separate:
//! 1. Resolve the truck catalog (file or built-in) and the permit table
//! 2. Validate and normalize cargo
//! 3. Generate strategy options (optionally packed onto shared trucks)
//! 4. Attach route permit estimates to every option

use chrono::{DateTime, Utc};
use haulplan_domain::constants::default_catalog;
use haulplan_domain::service::{
    build_option, calculate_route_permits, consolidate_plan, estimate_plan_permits,
    generate_smart_plans, normalize_items, plan_with_strategy, rank_trucks, select_truck,
    validate_items, TruckFit, TruckSelection,
};
use haulplan_domain::{
    CargoItem, CargoSpecs, PermitTable, PlanStrategy, RouteInput, RoutePermitSummary,
    SmartPlanOption, TruckSpec,
};
use haulplan_infra::{load_permit_table, load_truck_catalog};
use haulplan_types::Error;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;

/// Errors specific to the planning service
#[derive(Debug, Error)]
pub enum PlanningServiceError {
    #[error("Reference data error: {0}")]
    ReferenceData(String),

    #[error("Invalid cargo: {0}")]
    InvalidCargo(String),

    #[error("Unknown truck: {0}")]
    UnknownTruck(String),

    #[error("Planning failed: {0}")]
    PlanningFailed(String),
}

impl From<Error> for PlanningServiceError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidInput(msg) => PlanningServiceError::InvalidCargo(msg),
            Error::UnknownTruck(msg) => PlanningServiceError::UnknownTruck(msg),
            Error::FileNotFound(_)
            | Error::UnsupportedFormat(_)
            | Error::Json(_)
            | Error::Toml(_)
            | Error::Config(_) => PlanningServiceError::ReferenceData(err.to_string()),
            _ => PlanningServiceError::PlanningFailed(err.to_string()),
        }
    }
}

/// Options for a planning run
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    /// Route to price permits for; no permit estimate when unset
    pub route: Option<RouteInput>,

    /// Run a single strategy instead of all five
    pub strategy: Option<PlanStrategy>,

    /// Pack each strategy's loads onto shared trucks
    pub pack: bool,
}

impl PlanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, route: RouteInput) -> Self {
        self.route = Some(route);
        self
    }

    pub fn with_strategy(mut self, strategy: PlanStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn with_pack(mut self, pack: bool) -> Self {
        self.pack = pack;
        self
    }
}

/// Result of a planning run
#[derive(Debug, Clone, Serialize)]
pub struct PlanningReport {
    pub generated_at: DateTime<Utc>,
    /// Manifest entries before quantity expansion
    pub entry_count: usize,
    /// Units after quantity expansion
    pub unit_count: usize,
    pub packed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteInput>,
    pub options: Vec<SmartPlanOption>,
}

impl PlanningReport {
    /// The option flagged as recommended, if it was generated
    pub fn recommended(&self) -> Option<&SmartPlanOption> {
        self.options.iter().find(|o| o.is_recommended)
    }

    pub fn option(&self, strategy: PlanStrategy) -> Option<&SmartPlanOption> {
        self.options.iter().find(|o| o.strategy == strategy)
    }
}

/// Fit evaluation of one cargo unit against the catalog
#[derive(Debug, Clone, Serialize)]
pub struct ItemFitReport {
    pub item_id: String,
    pub label: String,
    pub fits: Vec<TruckFit>,
    /// Truck id chosen by each strategy
    pub picks: Vec<(PlanStrategy, Option<String>)>,
}

/// Planning use case bound to one catalog, permit table and config
#[derive(Debug, Clone)]
pub struct PlanningService {
    catalog: Vec<TruckSpec>,
    permits: PermitTable,
    config: Config,
}

impl PlanningService {
    pub fn new(catalog: Vec<TruckSpec>, permits: PermitTable, config: Config) -> Self {
        Self {
            catalog,
            permits,
            config,
        }
    }

    /// Build a service from config, loading any configured reference files
    pub fn from_config(config: Config) -> Result<Self, PlanningServiceError> {
        let catalog = match &config.truck_catalog {
            Some(path) => load_truck_catalog(path)?,
            None => default_catalog(),
        };
        let permits = match &config.permit_table {
            Some(path) => load_permit_table(path)?,
            None => PermitTable::new(),
        };
        info!(
            trucks = catalog.len(),
            states = ?permits.codes(),
            "planning service ready"
        );
        Ok(Self::new(catalog, permits, config))
    }

    pub fn catalog(&self) -> &[TruckSpec] {
        &self.catalog
    }

    pub fn permit_table(&self) -> &PermitTable {
        &self.permits
    }

    /// Generate plan options for a cargo manifest
    pub fn plan(
        &self,
        items: &[CargoItem],
        options: &PlanOptions,
    ) -> Result<PlanningReport, PlanningServiceError> {
        validate_items(items)?;

        let mut plans = match options.strategy {
            Some(strategy) => {
                let units = normalize_items(items);
                vec![plan_with_strategy(strategy, &units, &self.catalog)]
            }
            None => generate_smart_plans(items, &self.catalog),
        };

        let pack = options.pack || self.config.pack_loads;
        if pack {
            plans = plans
                .into_iter()
                .map(|option| build_option(option.strategy, consolidate_plan(&option.plan)))
                .collect();
        }

        if let Some(route) = &options.route {
            for option in &mut plans {
                option.permit_estimate = Some(estimate_plan_permits(
                    &option.plan,
                    route,
                    &self.permits,
                    self.config.tractor_weight_lbs,
                    self.config.default_state_distance_miles,
                ));
            }
        }

        debug!(options = plans.len(), pack, "plan generated");
        Ok(PlanningReport {
            generated_at: Utc::now(),
            entry_count: items.len(),
            unit_count: normalize_items(items).len(),
            packed: pack,
            route: options.route.clone(),
            options: plans,
        })
    }

    /// Standalone permit estimate for explicit cargo specs
    pub fn estimate_permits(&self, cargo: &CargoSpecs, route: &RouteInput) -> RoutePermitSummary {
        calculate_route_permits(
            cargo,
            route,
            &self.permits,
            self.config.default_state_distance_miles,
        )
    }

    /// Score every unit against every truck and record each strategy's pick
    pub fn fit_report(
        &self,
        items: &[CargoItem],
    ) -> Result<Vec<ItemFitReport>, PlanningServiceError> {
        validate_items(items)?;
        Ok(normalize_items(items)
            .iter()
            .map(|item| ItemFitReport {
                item_id: item.id.clone(),
                label: item.label().to_string(),
                fits: rank_trucks(item, &self.catalog),
                picks: PlanStrategy::ALL
                    .into_iter()
                    .map(|strategy| {
                        let pick = select_truck(strategy, item, &self.catalog)
                            .map(|s: TruckSelection| self.catalog[s.truck_index].id.clone());
                        (strategy, pick)
                    })
                    .collect(),
            })
            .collect())
    }

    /// Look up a catalog truck by id or name
    pub fn truck(&self, id: &str) -> Result<&TruckSpec, PlanningServiceError> {
        let needle = id.trim().to_lowercase();
        self.catalog
            .iter()
            .find(|t| t.id.to_lowercase() == needle || t.name.to_lowercase() == needle)
            .ok_or_else(|| Error::UnknownTruck(id.to_string()).into())
    }
}
