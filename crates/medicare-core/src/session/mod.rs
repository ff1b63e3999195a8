//! Session domain module.
//!
//! # Module Structure
//!
//! - `role`: Staff roles (`Role`)
//! - `credentials`: Login input (`Credentials`)
//! - `model`: Authentication state machine (`Session`)
//! - `gateway`: Login endpoint trait (`AuthGateway`)

mod credentials;
mod gateway;
mod model;
mod role;

// Re-export public API
pub use credentials::Credentials;
pub use gateway::AuthGateway;
pub use model::Session;
pub use role::Role;
