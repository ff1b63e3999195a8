//! Dashboard figures restricted to some roles.

use serde::Serialize;
use strum::{Display, EnumIter};

use crate::session::Role;

/// A summary figure that is shown only to the roles its rule lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Insight {
    /// Number of staff accounts in the system.
    UserCount,
}

/// One row of the insight table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightRule {
    pub insight: Insight,
    pub allowed_roles: &'static [Role],
}

impl InsightRule {
    pub const fn new(insight: Insight, allowed_roles: &'static [Role]) -> Self {
        Self {
            insight,
            allowed_roles,
        }
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }
}
