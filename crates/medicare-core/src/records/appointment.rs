//! Appointment record model and the fixed option lists used when scheduling.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::Completed => "Completed",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum AppointmentType {
    #[strum(to_string = "Regular Checkup", serialize = "checkup")]
    #[serde(rename = "Regular Checkup")]
    RegularCheckup,
    #[strum(to_string = "Follow-up")]
    #[serde(rename = "Follow-up")]
    FollowUp,
    Consultation,
    Treatment,
    Emergency,
    #[strum(to_string = "Preventive Care")]
    #[serde(rename = "Preventive Care")]
    PreventiveCare,
    Diagnostic,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

/// Bookable half-hour slots.
pub const TIME_SLOTS: &[&str] = &[
    "08:00 AM", "08:30 AM", "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM",
    "12:00 PM", "12:30 PM", "01:00 PM", "01:30 PM", "02:00 PM", "02:30 PM", "03:00 PM", "03:30 PM",
    "04:00 PM", "04:30 PM", "05:00 PM", "05:30 PM",
];

/// Selectable durations in minutes.
pub const DURATIONS_MINUTES: &[u32] = &[15, 30, 45, 60, 90];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: u32,
    pub patient_name: String,
    pub doctor_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub kind: AppointmentType,
    pub status: AppointmentStatus,
    pub duration_minutes: u32,
    pub notes: String,
    pub patient_phone: String,
}

/// A doctor that appointments can be booked with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub specialty: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_type_names() {
        assert_eq!(AppointmentType::RegularCheckup.to_string(), "Regular Checkup");
        assert_eq!(
            AppointmentType::from_str("follow-up").unwrap(),
            AppointmentType::FollowUp
        );
        assert_eq!(
            AppointmentType::from_str("Preventive Care").unwrap(),
            AppointmentType::PreventiveCare
        );
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            AppointmentStatus::from_str("Cancelled").unwrap(),
            AppointmentStatus::Cancelled
        );
        assert_eq!(AppointmentStatus::Pending.to_string(), "pending");
    }

    #[test]
    fn test_time_slots_cover_the_working_day() {
        assert_eq!(TIME_SLOTS.len(), 20);
        assert_eq!(TIME_SLOTS.first(), Some(&"08:00 AM"));
        assert_eq!(TIME_SLOTS.last(), Some(&"05:30 PM"));
    }
}
