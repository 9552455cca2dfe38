//! Freight load planning core
//!
//! Pure, synchronous functions: every call builds new values from its inputs
//! and never touches I/O, so planning requests may run concurrently without
//! coordination.

pub mod constants;
pub mod model;
pub mod service;

pub use model::*;
