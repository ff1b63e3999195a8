//! Infrastructure layer for MediCare Pro.
//!
//! Fixture-backed repositories, simulated network endpoints and
//! configuration loading.

pub mod config_service;
pub mod fixture_store;
pub mod fixtures;
pub mod paths;
pub mod simulated_gateway;

pub use config_service::ConfigService;
pub use fixture_store::FixtureStore;
pub use simulated_gateway::{SimulatedAuthGateway, SimulatedSubmitGateway};
