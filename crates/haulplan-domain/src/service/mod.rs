//! Domain services
//!
//! Pure planning functions. Nothing here performs I/O. Apart from input
//! validation, anomalies are reported through `warnings`,
//! `permits_required` and `is_legal` on the results.

pub mod normalizer;
pub mod permit_engine;
pub mod placement;
pub mod route_permits;
pub mod strategy;
pub mod truck_fit;

pub use normalizer::{normalize_items, validate_items};
pub use permit_engine::{
    calculate_state_permit, estimate_without_state_data, format_cents, transport_width,
};
pub use placement::{build_load, consolidate_plan, place_items, plan_truck_loads, split_into_loads};
pub use route_permits::{calculate_route_permits, estimate_plan_permits};
pub use strategy::{
    build_option, generate_smart_plans, plan_with_strategy, select_truck, TruckSelection,
};
pub use truck_fit::{evaluate_fit, fits_legally, fits_physically, rank_trucks, TruckFit};
