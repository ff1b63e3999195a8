//! Repository traits for the record query endpoints.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::appointment::{Appointment, Doctor};
use super::dashboard::DashboardSummary;
use super::patient::Patient;
use crate::error::Result;
use crate::search::{AppointmentQuery, PatientQuery, RecordFilter};

/// Query endpoint for patients.
#[async_trait]
pub trait PatientRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Patient>>;

    async fn find_by_id(&self, id: u32) -> Result<Option<Patient>>;

    /// Returns the patients matching `query`, in storage order.
    async fn query(&self, query: &PatientQuery, today: NaiveDate) -> Result<Vec<Patient>> {
        Ok(query.apply(&self.list().await?, today))
    }
}

/// Query endpoint for appointments.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Appointment>>;

    async fn query(&self, query: &AppointmentQuery, today: NaiveDate) -> Result<Vec<Appointment>> {
        Ok(query.apply(&self.list().await?, today))
    }
}

/// Reference data: doctors and dashboard figures.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    async fn doctors(&self) -> Result<Vec<Doctor>>;

    async fn dashboard_summary(&self) -> Result<DashboardSummary>;
}
