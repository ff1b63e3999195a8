//! Domain layer for MediCare Pro.
//!
//! Holds the role policy, view router, session state machine, record models,
//! list filters and create-form drafts. Nothing here performs I/O; data and
//! submissions go through the repository and gateway traits.

pub mod clock;
pub mod config;
pub mod error;
pub mod forms;
pub mod navigation;
pub mod policy;
pub mod records;
pub mod search;
pub mod session;

// Re-export common error type
pub use error::{MedicareError, Result};
