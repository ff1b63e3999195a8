//! View screens.
//!
//! Each screen is a pure function of the [`ScreenContext`]. Screens never
//! touch session or router state; they describe controls whose intents the
//! shell carries out.

mod appointments;
mod dashboard;
mod login;
mod model;
mod navigation;
mod patients;
mod records;

use chrono::NaiveDate;
use medicare_core::forms::{AppointmentDraft, CreateForm, PatientDraft};
use medicare_core::navigation::{RouterState, ViewId};
use medicare_core::policy::{Action, RolePolicy};
use medicare_core::records::{Appointment, DashboardSummary, Doctor, Patient};
use medicare_core::search::{AppointmentQuery, PatientQuery};
use medicare_core::session::Role;

pub use login::render as render_login;
pub use model::{
    Control, Frame, Intent, Item, NavEntry, NavRequest, NavigationBar, RenderedScreen, Section,
};
pub use navigation::navigation_bar;

/// Records loaded by the shell for the active view.
#[derive(Debug, Clone, Default)]
pub struct ScreenData {
    /// Patient list after applying the current patient query.
    pub patients: Vec<Patient>,
    /// Appointment list after applying the current appointment query.
    pub appointments: Vec<Appointment>,
    /// The patient resolved from the router's selected entity.
    pub selected_patient: Option<Patient>,
    /// Unfiltered patients offered by the scheduling form.
    pub patient_options: Vec<Patient>,
    pub doctors: Vec<Doctor>,
    pub summary: DashboardSummary,
}

/// Read-only inputs of a screen render.
pub struct ScreenContext<'a> {
    pub role: Role,
    pub router: &'a RouterState,
    pub policy: &'a RolePolicy,
    pub data: &'a ScreenData,
    pub patient_query: &'a PatientQuery,
    pub appointment_query: &'a AppointmentQuery,
    pub patient_form: &'a CreateForm<PatientDraft>,
    pub appointment_form: &'a CreateForm<AppointmentDraft>,
    pub today: NaiveDate,
}

impl ScreenContext<'_> {
    /// A control for `action`, present only when the role policy allows it.
    pub(crate) fn gated(&self, action: Action, label: &str, intent: Intent) -> Option<Control> {
        self.policy
            .can_perform(self.role, action)
            .then(|| Control::new(label, intent))
    }

    /// A navigation control, present only when the target view is allowed.
    pub(crate) fn link(&self, label: &str, request: NavRequest) -> Option<Control> {
        self.policy
            .is_allowed(self.role, request.view)
            .then(|| Control::navigate(label, request))
    }
}

/// Renders the screen for the router's current view.
pub fn render(ctx: &ScreenContext<'_>) -> RenderedScreen {
    match ctx.router.current_screen() {
        ViewId::Dashboard => dashboard::render(ctx),
        ViewId::PatientList => patients::render_list(ctx),
        ViewId::PatientCreate => patients::render_create(ctx),
        ViewId::PatientDetail => patients::render_profile(ctx),
        ViewId::AppointmentList => appointments::render_list(ctx),
        ViewId::AppointmentCreate => appointments::render_create(ctx),
        ViewId::MedicalRecords => records::render(ctx),
    }
}

/// Renders the fields of a draft as section items.
pub(crate) fn form_items<D: medicare_core::forms::Draft>(
    draft: &D,
    options: impl Fn(&str) -> Vec<String>,
) -> Vec<Item> {
    D::fields()
        .iter()
        .map(|field| {
            let value = draft.get(field.name).unwrap_or_default();
            let marker = if field.required { " *" } else { "" };
            let shown = if value.is_empty() { "-" } else { value };
            let mut item = Item::new(format!("{}{}: {}", field.label, marker, shown))
                .badge(field.name);
            let choices = options(field.name);
            if !choices.is_empty() {
                item = item.detail(format!("options: {}", choices.join(", ")));
            }
            item
        })
        .collect()
}
