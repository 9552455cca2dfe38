//! Application use cases

pub mod planning_service;
