//! Read-only in-memory repositories over the fixture tables.

use std::sync::Arc;

use async_trait::async_trait;
use medicare_core::error::Result;
use medicare_core::records::{
    Appointment, AppointmentRepository, DashboardSummary, DirectoryRepository, Doctor, Patient,
    PatientRepository,
};

use crate::fixtures;

/// Serves the compiled-in fixture data through the repository traits.
///
/// Cloning is cheap; all clones share the same tables.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    patients: Arc<Vec<Patient>>,
    appointments: Arc<Vec<Appointment>>,
    doctors: Arc<Vec<Doctor>>,
    summary: Arc<DashboardSummary>,
}

impl FixtureStore {
    pub fn new() -> Self {
        Self::with_records(fixtures::patients(), fixtures::appointments())
    }

    /// A store with custom patient and appointment tables.
    pub fn with_records(patients: Vec<Patient>, appointments: Vec<Appointment>) -> Self {
        Self {
            patients: Arc::new(patients),
            appointments: Arc::new(appointments),
            doctors: Arc::new(fixtures::doctors()),
            summary: Arc::new(fixtures::dashboard_summary()),
        }
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PatientRepository for FixtureStore {
    async fn list(&self) -> Result<Vec<Patient>> {
        Ok(self.patients.as_ref().clone())
    }

    async fn find_by_id(&self, id: u32) -> Result<Option<Patient>> {
        Ok(self.patients.iter().find(|p| p.id == id).cloned())
    }
}

#[async_trait]
impl AppointmentRepository for FixtureStore {
    async fn list(&self) -> Result<Vec<Appointment>> {
        Ok(self.appointments.as_ref().clone())
    }
}

#[async_trait]
impl DirectoryRepository for FixtureStore {
    async fn doctors(&self) -> Result<Vec<Doctor>> {
        Ok(self.doctors.as_ref().clone())
    }

    async fn dashboard_summary(&self) -> Result<DashboardSummary> {
        Ok(self.summary.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use medicare_core::records::AppointmentStatus;
    use medicare_core::search::{AppointmentQuery, DateFilter, Filter, PatientQuery};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 25).unwrap()
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = FixtureStore::new();
        let patient = store.find_by_id(3).await.unwrap().unwrap();
        assert_eq!(patient.name, "Emily Davis");
        assert!(store.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sarah_today_query() {
        let store = FixtureStore::new();
        let query = AppointmentQuery::new("sarah").with_date(DateFilter::Today);

        let result = AppointmentRepository::query(&store, &query, today())
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].patient_name, "Sarah Johnson");
        assert_eq!(result[0].time, "09:00 AM");
    }

    #[tokio::test]
    async fn test_cancelled_upcoming() {
        let store = FixtureStore::new();
        let query = AppointmentQuery::default()
            .with_status(Filter::Only(AppointmentStatus::Cancelled))
            .with_date(DateFilter::Upcoming);

        let result = AppointmentRepository::query(&store, &query, today())
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].patient_name, "Lisa Anderson");
    }

    #[tokio::test]
    async fn test_empty_patient_query_returns_everything() {
        let store = FixtureStore::new();
        let all = PatientRepository::query(&store, &PatientQuery::default(), today())
            .await
            .unwrap();
        assert_eq!(all, PatientRepository::list(&store).await.unwrap());
    }
}
