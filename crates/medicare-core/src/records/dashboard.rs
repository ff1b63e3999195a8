//! Dashboard summary figures.

use serde::{Deserialize, Serialize};

use super::appointment::AppointmentStatus;

/// One row of the dashboard's "today" schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: u32,
    pub time: String,
    pub patient: String,
    pub doctor: String,
    pub kind: String,
    pub status: AppointmentStatus,
}

/// Headline numbers and the day's schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_patients: u32,
    pub total_appointments: u32,
    /// Staff accounts; shown only where the policy allows it.
    pub total_users: u32,
    pub todays_appointments: u32,
    pub schedule: Vec<ScheduleItem>,
}

impl DashboardSummary {
    pub fn count_with_status(&self, status: AppointmentStatus) -> usize {
        self.schedule.iter().filter(|i| i.status == status).count()
    }
}
