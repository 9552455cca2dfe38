//! Reference constants for load planning

pub mod regulations;
pub mod truck_specs;

pub use regulations::regional_multiplier;
pub use truck_specs::{default_catalog, get_truck_spec};
