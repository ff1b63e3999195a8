//! View identifiers.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Identifier of a screen within the application.
///
/// The textual form is the page slug used by the menu, the command line and
/// serialized state; descriptive aliases are accepted when parsing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ViewId {
    #[default]
    #[serde(rename = "dashboard", alias = "home")]
    #[strum(to_string = "dashboard", serialize = "home")]
    Dashboard,
    #[serde(rename = "patients", alias = "patient-list")]
    #[strum(to_string = "patients", serialize = "patient-list")]
    PatientList,
    #[serde(rename = "add-patient", alias = "patient-create")]
    #[strum(to_string = "add-patient", serialize = "patient-create")]
    PatientCreate,
    #[serde(rename = "patient-profile", alias = "patient-detail")]
    #[strum(to_string = "patient-profile", serialize = "patient-detail")]
    PatientDetail,
    #[serde(rename = "appointments", alias = "appointment-list")]
    #[strum(to_string = "appointments", serialize = "appointment-list")]
    AppointmentList,
    #[serde(rename = "schedule-appointment", alias = "appointment-create")]
    #[strum(to_string = "schedule-appointment", serialize = "appointment-create")]
    AppointmentCreate,
    #[serde(rename = "medical-records")]
    #[strum(to_string = "medical-records")]
    MedicalRecords,
}

impl ViewId {
    /// Parses a view slug, falling back to the dashboard for unknown input.
    pub fn parse_or_default(raw: &str) -> Self {
        raw.trim().parse().unwrap_or_default()
    }

    /// Whether the view displays a single selected entity.
    pub fn is_detail(&self) -> bool {
        matches!(self, ViewId::PatientDetail)
    }

    /// Whether the view is a create-type form.
    pub fn is_form(&self) -> bool {
        matches!(self, ViewId::PatientCreate | ViewId::AppointmentCreate)
    }
}

/// Resolves the screen to render for a raw view identifier.
///
/// Unknown identifiers resolve to [`ViewId::Dashboard`].
pub fn current_screen_for(raw: &str) -> ViewId {
    ViewId::parse_or_default(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_slugs_round_trip_through_display() {
        for view in ViewId::iter() {
            assert_eq!(ViewId::parse_or_default(&view.to_string()), view);
        }
    }

    #[test]
    fn test_aliases_are_accepted() {
        assert_eq!(current_screen_for("patient-list"), ViewId::PatientList);
        assert_eq!(current_screen_for("Appointment-Create"), ViewId::AppointmentCreate);
        assert_eq!(current_screen_for("patient-detail"), ViewId::PatientDetail);
    }

    #[test]
    fn test_unknown_falls_back_to_dashboard() {
        assert_eq!(current_screen_for("billing"), ViewId::Dashboard);
        assert_eq!(current_screen_for(""), ViewId::Dashboard);
    }

    #[test]
    fn test_serde_matches_display_slug() {
        for view in ViewId::iter() {
            let json = serde_json::to_string(&view).unwrap();
            assert_eq!(json, format!("\"{}\"", view));
            assert_eq!(serde_json::from_str::<ViewId>(&json).unwrap(), view);
        }
        let json = serde_json::to_string(&ViewId::AppointmentCreate).unwrap();
        assert_eq!(json, "\"schedule-appointment\"");
    }

    #[test]
    fn test_serde_accepts_descriptive_aliases() {
        let view: ViewId = serde_json::from_str("\"appointment-create\"").unwrap();
        assert_eq!(view, ViewId::AppointmentCreate);
        let view: ViewId = serde_json::from_str("\"patient-list\"").unwrap();
        assert_eq!(view, ViewId::PatientList);
    }
}
