//! Record domain module: patients, appointments, doctors and dashboard data.

mod appointment;
mod dashboard;
mod patient;
mod repository;

pub use appointment::{
    Appointment, AppointmentStatus, AppointmentType, DURATIONS_MINUTES, Doctor, Priority,
    TIME_SLOTS,
};
pub use dashboard::{DashboardSummary, ScheduleItem};
pub use patient::{Gender, Patient, PatientStatus};
pub use repository::{AppointmentRepository, DirectoryRepository, PatientRepository};
