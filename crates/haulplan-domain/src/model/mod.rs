//! Domain model types

pub mod cargo;
pub mod load;
pub mod permit;
pub mod strategy;
pub mod truck;

pub use cargo::{CargoItem, CargoSpecs};
pub use load::{LoadPlan, PlacementResult, PlannedLoad, SmartPlanOption};
pub use permit::{
    DetailedPermitRequirement, DimensionSurcharges, EscortCostBreakdown, EscortRates, EscortRules,
    LegalLimits, OversizePermits, OverweightPermits, PermitDataSource, PermitTable,
    PlanPermitEstimate, PoliceEscortRules, RouteInput, RoutePermitSummary, StateContact,
    StateEscortCost, StatePermitData, SuperloadThresholds, SurchargeModel, SurchargeTier,
    TravelRestrictions, WeightBracket,
};
pub use strategy::PlanStrategy;
pub use truck::{LoadingMethod, TruckCategory, TruckSpec};
