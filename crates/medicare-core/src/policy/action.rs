//! Action controls gated by the role policy.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::navigation::ViewId;

/// A control a screen may render (buttons such as "Add Patient" or "Cancel").
///
/// Actions carry no permissions of their own. Each one is gated by the view
/// it leads to or belongs to, so the menu and the screens read the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Action {
    AddPatient,
    EditPatient,
    ViewPatientProfile,
    ScheduleAppointment,
    EditAppointment,
    CancelAppointment,
    ViewAppointmentDetails,
}

impl Action {
    /// The view whose permission decides whether this control is shown.
    pub fn gate(&self) -> ViewId {
        match self {
            Action::AddPatient | Action::EditPatient => ViewId::PatientCreate,
            Action::ViewPatientProfile => ViewId::PatientDetail,
            Action::ScheduleAppointment
            | Action::EditAppointment
            | Action::CancelAppointment => ViewId::AppointmentCreate,
            Action::ViewAppointmentDetails => ViewId::AppointmentList,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Action::AddPatient => "Add Patient",
            Action::EditPatient => "Edit",
            Action::ViewPatientProfile => "View Profile",
            Action::ScheduleAppointment => "Schedule Appointment",
            Action::EditAppointment => "Edit",
            Action::CancelAppointment => "Cancel",
            Action::ViewAppointmentDetails => "View Details",
        }
    }
}
