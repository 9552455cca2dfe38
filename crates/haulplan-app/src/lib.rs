//! Application service layer - configuration and the planning use case

pub mod app;
pub mod config;

pub use app::planning_service::{
    ItemFitReport, PlanOptions, PlanningReport, PlanningService, PlanningServiceError,
};
pub use config::Config;
