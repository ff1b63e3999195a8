//! The role-to-view table and the policy built on it.

use serde::Serialize;
use strum::IntoEnumIterator;

use super::action::Action;
use super::insight::{Insight, InsightRule};
use crate::error::{MedicareError, Result};
use crate::navigation::ViewId;
use crate::session::Role;

const ALL_ROLES: &[Role] = &[Role::Admin, Role::Doctor, Role::Receptionist];
const FRONT_DESK: &[Role] = &[Role::Admin, Role::Receptionist];
const CLINICAL: &[Role] = &[Role::Admin, Role::Doctor];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Whether a permitted view is listed in the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Menu,
    Hidden,
}

/// One row of the policy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub view: ViewId,
    pub label: &'static str,
    pub allowed_roles: &'static [Role],
    pub visibility: Visibility,
}

impl MenuEntry {
    pub const fn menu(view: ViewId, label: &'static str, allowed_roles: &'static [Role]) -> Self {
        Self {
            view,
            label,
            allowed_roles,
            visibility: Visibility::Menu,
        }
    }

    pub const fn hidden(view: ViewId, label: &'static str, allowed_roles: &'static [Role]) -> Self {
        Self {
            view,
            label,
            allowed_roles,
            visibility: Visibility::Hidden,
        }
    }

    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }

    pub fn in_menu(&self) -> bool {
        self.visibility == Visibility::Menu
    }
}

/// Menu rows in display order, followed by views reachable only from screens.
pub const STANDARD_TABLE: &[MenuEntry] = &[
    MenuEntry::menu(ViewId::Dashboard, "Dashboard", ALL_ROLES),
    MenuEntry::menu(ViewId::PatientList, "Patients", ALL_ROLES),
    MenuEntry::menu(ViewId::PatientCreate, "Add Patient", FRONT_DESK),
    MenuEntry::menu(ViewId::AppointmentList, "Appointments", ALL_ROLES),
    MenuEntry::menu(ViewId::AppointmentCreate, "Schedule", FRONT_DESK),
    MenuEntry::menu(ViewId::MedicalRecords, "Medical Records", CLINICAL),
    MenuEntry::hidden(ViewId::PatientDetail, "Patient Profile", ALL_ROLES),
];

/// Restricted dashboard figures and the roles that see them.
pub const STANDARD_INSIGHTS: &[InsightRule] = &[InsightRule::new(Insight::UserCount, ADMIN_ONLY)];

/// Single source of truth for who may see which view, control or figure.
#[derive(Debug, Clone)]
pub struct RolePolicy {
    entries: Vec<MenuEntry>,
    insights: Vec<InsightRule>,
}

impl RolePolicy {
    /// Builds a policy from a custom table, rejecting tables that would leave
    /// a role without a dashboard. Insight rules start from the standard set.
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self> {
        let policy = Self {
            entries,
            insights: STANDARD_INSIGHTS.to_vec(),
        };
        policy.validate()?;
        Ok(policy)
    }

    /// The built-in table.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_TABLE.to_vec(),
            insights: STANDARD_INSIGHTS.to_vec(),
        }
    }

    /// Replaces the insight rules.
    pub fn with_insights(mut self, insights: Vec<InsightRule>) -> Self {
        self.insights = insights;
        self
    }

    /// Checks the table invariants: one row per view, and every role can
    /// reach the dashboard.
    pub fn validate(&self) -> Result<()> {
        for (index, entry) in self.entries.iter().enumerate() {
            if self.entries[..index].iter().any(|e| e.view == entry.view) {
                return Err(MedicareError::config(format!(
                    "duplicate policy row for view '{}'",
                    entry.view
                )));
            }
        }

        for role in Role::iter() {
            if !self.is_allowed(role, ViewId::Dashboard) {
                return Err(MedicareError::config(format!(
                    "role '{}' has no access to the dashboard",
                    role
                )));
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Whether `role` may open `view`. Views without a row are denied.
    pub fn is_allowed(&self, role: Role, view: ViewId) -> bool {
        self.entries
            .iter()
            .find(|entry| entry.view == view)
            .is_some_and(|entry| entry.allows(role))
    }

    /// Whether `role` may see the control for `action`.
    pub fn can_perform(&self, role: Role, action: Action) -> bool {
        self.is_allowed(role, action.gate())
    }

    /// Whether `role` may see the restricted figure. Unlisted figures are hidden.
    pub fn can_view(&self, role: Role, insight: Insight) -> bool {
        self.insights
            .iter()
            .find(|rule| rule.insight == insight)
            .is_some_and(|rule| rule.allows(role))
    }

    /// Menu rows visible to `role`, in table order.
    pub fn menu_for(&self, role: Role) -> Vec<&MenuEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.in_menu() && entry.allows(role))
            .collect()
    }

    /// The view a role lands on after login.
    pub fn default_view(&self, _role: Role) -> ViewId {
        ViewId::Dashboard
    }
}

impl Default for RolePolicy {
    fn default() -> Self {
        Self::standard()
    }
}
