//! Application layer for MediCare Pro.
//!
//! # Module Structure
//!
//! - `shell`: the controller owning session, router, queries and forms
//! - `screens`: pure renderers from shell state to [`screens::Frame`]
//! - `notification`: transient toast messages
//! - `bootstrap`: wiring onto the simulated infrastructure

pub mod bootstrap;
pub mod notification;
pub mod screens;
pub mod shell;

// Re-export public API
pub use bootstrap::AppBootstrap;
pub use notification::{Notification, Severity};
pub use shell::{Shell, ShellServices};
