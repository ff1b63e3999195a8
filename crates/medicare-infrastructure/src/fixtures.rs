//! Compiled-in fixture data.
//!
//! Reset on every process start; nothing writes back to these tables.

use chrono::NaiveDate;
use medicare_core::records::{
    Appointment, AppointmentStatus, AppointmentType, DashboardSummary, Doctor, Gender, Patient,
    PatientStatus, ScheduleItem,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn conditions(list: &[&str]) -> Vec<String> {
    list.iter().map(|c| c.to_string()).collect()
}

pub fn patients() -> Vec<Patient> {
    vec![
        Patient {
            id: 1,
            name: "Sarah Johnson".to_string(),
            age: 34,
            gender: Gender::Female,
            email: "sarah.johnson@email.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            address: "123 Main St, City, State".to_string(),
            last_visit: date(2024, 1, 15),
            next_appointment: Some(date(2024, 1, 25)),
            status: PatientStatus::Active,
            medical_conditions: conditions(&["Diabetes", "Hypertension"]),
        },
        Patient {
            id: 2,
            name: "Michael Chen".to_string(),
            age: 28,
            gender: Gender::Male,
            email: "michael.chen@email.com".to_string(),
            phone: "(555) 234-5678".to_string(),
            address: "456 Oak Ave, City, State".to_string(),
            last_visit: date(2024, 1, 10),
            next_appointment: Some(date(2024, 1, 30)),
            status: PatientStatus::Active,
            medical_conditions: conditions(&["Asthma"]),
        },
        Patient {
            id: 3,
            name: "Emily Davis".to_string(),
            age: 45,
            gender: Gender::Female,
            email: "emily.davis@email.com".to_string(),
            phone: "(555) 345-6789".to_string(),
            address: "789 Pine St, City, State".to_string(),
            last_visit: date(2024, 1, 8),
            next_appointment: None,
            status: PatientStatus::Inactive,
            medical_conditions: conditions(&["Arthritis"]),
        },
        Patient {
            id: 4,
            name: "James Wilson".to_string(),
            age: 52,
            gender: Gender::Male,
            email: "james.wilson@email.com".to_string(),
            phone: "(555) 456-7890".to_string(),
            address: "321 Elm Dr, City, State".to_string(),
            last_visit: date(2024, 1, 12),
            next_appointment: Some(date(2024, 1, 28)),
            status: PatientStatus::Active,
            medical_conditions: conditions(&["Heart Disease", "Diabetes"]),
        },
        Patient {
            id: 5,
            name: "Lisa Anderson".to_string(),
            age: 39,
            gender: Gender::Female,
            email: "lisa.anderson@email.com".to_string(),
            phone: "(555) 567-8901".to_string(),
            address: "654 Maple Ln, City, State".to_string(),
            last_visit: date(2024, 1, 14),
            next_appointment: Some(date(2024, 2, 1)),
            status: PatientStatus::Active,
            medical_conditions: conditions(&["Migraines"]),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn appointment(
    id: u32,
    patient_name: &str,
    doctor_name: &str,
    date: NaiveDate,
    time: &str,
    kind: AppointmentType,
    status: AppointmentStatus,
    duration_minutes: u32,
    notes: &str,
    patient_phone: &str,
) -> Appointment {
    Appointment {
        id,
        patient_name: patient_name.to_string(),
        doctor_name: doctor_name.to_string(),
        date,
        time: time.to_string(),
        kind,
        status,
        duration_minutes,
        notes: notes.to_string(),
        patient_phone: patient_phone.to_string(),
    }
}

pub fn appointments() -> Vec<Appointment> {
    use AppointmentStatus::*;
    use AppointmentType::*;

    vec![
        appointment(
            1,
            "Sarah Johnson",
            "Dr. Smith",
            date(2024, 1, 25),
            "09:00 AM",
            RegularCheckup,
            Confirmed,
            30,
            "Annual physical examination",
            "(555) 123-4567",
        ),
        appointment(
            2,
            "Michael Chen",
            "Dr. Rodriguez",
            date(2024, 1, 25),
            "10:30 AM",
            FollowUp,
            Pending,
            15,
            "Post-surgery follow-up",
            "(555) 234-5678",
        ),
        appointment(
            3,
            "Emily Davis",
            "Dr. Smith",
            date(2024, 1, 25),
            "02:00 PM",
            Consultation,
            Confirmed,
            45,
            "Initial consultation for back pain",
            "(555) 345-6789",
        ),
        appointment(
            4,
            "James Wilson",
            "Dr. Johnson",
            date(2024, 1, 26),
            "03:30 PM",
            Treatment,
            Confirmed,
            60,
            "Physical therapy session",
            "(555) 456-7890",
        ),
        appointment(
            5,
            "Lisa Anderson",
            "Dr. Rodriguez",
            date(2024, 1, 26),
            "11:00 AM",
            Emergency,
            Cancelled,
            30,
            "Patient cancelled due to recovery",
            "(555) 567-8901",
        ),
    ]
}

pub fn doctors() -> Vec<Doctor> {
    [
        (1, "Dr. Smith", "General Practice"),
        (2, "Dr. Rodriguez", "Cardiology"),
        (3, "Dr. Johnson", "Orthopedics"),
        (4, "Dr. Williams", "Dermatology"),
        (5, "Dr. Brown", "Pediatrics"),
    ]
    .into_iter()
    .map(|(id, name, specialty)| Doctor {
        id,
        name: name.to_string(),
        specialty: specialty.to_string(),
    })
    .collect()
}

pub fn dashboard_summary() -> DashboardSummary {
    let schedule = [
        (1, "09:00 AM", "Sarah Johnson", "Dr. Smith", "Checkup", AppointmentStatus::Confirmed),
        (2, "10:30 AM", "Michael Chen", "Dr. Rodriguez", "Follow-up", AppointmentStatus::Pending),
        (3, "02:00 PM", "Emily Davis", "Dr. Smith", "Consultation", AppointmentStatus::Confirmed),
        (4, "03:30 PM", "James Wilson", "Dr. Johnson", "Treatment", AppointmentStatus::Confirmed),
    ]
    .into_iter()
    .map(|(id, time, patient, doctor, kind, status)| ScheduleItem {
        id,
        time: time.to_string(),
        patient: patient.to_string(),
        doctor: doctor.to_string(),
        kind: kind.to_string(),
        status,
    })
    .collect();

    DashboardSummary {
        total_patients: 1847,
        total_appointments: 342,
        total_users: 28,
        todays_appointments: 12,
        schedule,
    }
}
