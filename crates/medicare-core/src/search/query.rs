//! Search parameters for the patient and appointment lists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::model::{DateFilter, Filter, RecordFilter, contains_folded};
use crate::records::{Appointment, AppointmentStatus, Gender, Patient};

/// Patient list search: free text over name, email and phone, plus gender.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientQuery {
    pub text: String,
    pub gender: Filter<Gender>,
}

impl PatientQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_gender(mut self, gender: Filter<Gender>) -> Self {
        self.gender = gender;
        self
    }
}

impl RecordFilter<Patient> for PatientQuery {
    fn matches(&self, patient: &Patient, _today: NaiveDate) -> bool {
        let needle = self.text.to_lowercase();
        let matches_search = contains_folded(&patient.name, &needle)
            || contains_folded(&patient.email, &needle)
            || patient.phone.contains(self.text.as_str());

        matches_search && self.gender.matches(&patient.gender)
    }

    fn is_unrestricted(&self) -> bool {
        self.text.is_empty() && self.gender.is_all()
    }
}

/// Appointment list search: free text over patient, doctor and type, plus
/// status and date window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentQuery {
    pub text: String,
    pub status: Filter<AppointmentStatus>,
    pub date: DateFilter,
}

impl AppointmentQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: Filter<AppointmentStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_date(mut self, date: DateFilter) -> Self {
        self.date = date;
        self
    }
}

impl RecordFilter<Appointment> for AppointmentQuery {
    fn matches(&self, appointment: &Appointment, today: NaiveDate) -> bool {
        let needle = self.text.to_lowercase();
        let matches_search = contains_folded(&appointment.patient_name, &needle)
            || contains_folded(&appointment.doctor_name, &needle)
            || contains_folded(&appointment.kind.to_string(), &needle);

        matches_search
            && self.status.matches(&appointment.status)
            && self.date.matches(appointment.date, today)
    }

    fn is_unrestricted(&self) -> bool {
        self.text.is_empty() && self.status.is_all() && self.date == DateFilter::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{AppointmentType, PatientStatus};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn patient(id: u32, name: &str, gender: Gender, phone: &str) -> Patient {
        Patient {
            id,
            name: name.to_string(),
            age: 40,
            gender,
            email: format!("{}@email.com", name.to_lowercase().replace(' ', ".")),
            phone: phone.to_string(),
            address: String::new(),
            last_visit: date("2024-01-10"),
            next_appointment: None,
            status: PatientStatus::Active,
            medical_conditions: Vec::new(),
        }
    }

    fn appointment(id: u32, patient: &str, day: &str, status: AppointmentStatus) -> Appointment {
        Appointment {
            id,
            patient_name: patient.to_string(),
            doctor_name: "Dr. Smith".to_string(),
            date: date(day),
            time: "09:00 AM".to_string(),
            kind: AppointmentType::Consultation,
            status,
            duration_minutes: 30,
            notes: String::new(),
            patient_phone: String::new(),
        }
    }

    #[test]
    fn test_patient_text_search_covers_name_email_and_phone() {
        let patients = vec![
            patient(1, "Sarah Johnson", Gender::Female, "(555) 123-4567"),
            patient(2, "Michael Chen", Gender::Male, "(555) 234-5678"),
        ];
        let today = date("2024-01-25");

        assert_eq!(PatientQuery::new("SARAH").apply(&patients, today).len(), 1);
        assert_eq!(PatientQuery::new("michael.chen@").apply(&patients, today)[0].id, 2);
        assert_eq!(PatientQuery::new("234-56").apply(&patients, today)[0].id, 2);
        assert!(PatientQuery::new("nobody").apply(&patients, today).is_empty());
    }

    #[test]
    fn test_patient_gender_filter_is_conjunctive() {
        let patients = vec![
            patient(1, "Sarah Johnson", Gender::Female, "1"),
            patient(2, "Michael Chen", Gender::Male, "2"),
        ];
        let today = date("2024-01-25");
        let query = PatientQuery::new("o").with_gender(Filter::Only(Gender::Male));

        let result = query.apply(&patients, today);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Michael Chen");
    }

    #[test]
    fn test_unrestricted_query_is_identity_and_idempotent() {
        let records = vec![
            appointment(1, "Sarah Johnson", "2024-01-25", AppointmentStatus::Confirmed),
            appointment(2, "Lisa Anderson", "2024-01-26", AppointmentStatus::Cancelled),
        ];
        let today = date("2024-01-25");
        let unrestricted = AppointmentQuery::default();
        assert!(unrestricted.is_unrestricted());
        assert_eq!(unrestricted.apply(&records, today), records);

        let query = AppointmentQuery::new("a").with_date(DateFilter::Upcoming);
        let once = query.apply(&records, today);
        let twice = query.apply(&once, today);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_appointment_filters() {
        let records = vec![
            appointment(1, "Sarah Johnson", "2024-01-25", AppointmentStatus::Confirmed),
            appointment(2, "Michael Chen", "2024-01-25", AppointmentStatus::Pending),
            appointment(3, "Lisa Anderson", "2024-01-26", AppointmentStatus::Cancelled),
            appointment(4, "Old Visit", "2024-01-20", AppointmentStatus::Completed),
        ];
        let today = date("2024-01-25");

        let today_only = AppointmentQuery::default().with_date(DateFilter::Today);
        assert_eq!(today_only.apply(&records, today).len(), 2);

        let upcoming = AppointmentQuery::default().with_date(DateFilter::Upcoming);
        assert_eq!(upcoming.apply(&records, today).len(), 3);

        let pending = AppointmentQuery::default().with_status(Filter::Only(AppointmentStatus::Pending));
        assert_eq!(pending.apply(&records, today)[0].id, 2);

        let by_type = AppointmentQuery::new("consult");
        assert_eq!(by_type.apply(&records, today).len(), 4);
    }
}
