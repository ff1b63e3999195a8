//! Role of the signed-in staff member.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Staff role assigned at login.
///
/// The role is fixed for the lifetime of an authenticated session and decides
/// which views and action controls are available (see [`crate::policy`]).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Admin,
    Doctor,
    Receptionist,
}

impl Role {
    /// Derives a role from a login identifier.
    ///
    /// Matching is a plain substring test on the identifier: `admin` wins over
    /// `doctor`, and anything else is treated as front-desk staff.
    pub fn from_identifier(identifier: &str) -> Self {
        if identifier.contains("admin") {
            Role::Admin
        } else if identifier.contains("doctor") {
            Role::Doctor
        } else {
            Role::Receptionist
        }
    }

    /// Capitalized name for greetings and captions.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Doctor => "Doctor",
            Role::Receptionist => "Receptionist",
        }
    }
}
