//! Draft for the "Schedule Appointment" form.

use serde::{Deserialize, Serialize};

use super::draft::{Draft, FieldKind, FieldSpec};

const APPOINTMENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("patientId", "Patient", FieldKind::Choice),
    FieldSpec::required("doctorId", "Doctor", FieldKind::Choice),
    FieldSpec::required("appointmentDate", "Date", FieldKind::Date),
    FieldSpec::required("appointmentTime", "Time", FieldKind::Choice),
    FieldSpec::required("duration", "Duration", FieldKind::Choice),
    FieldSpec::optional("priority", "Priority", FieldKind::Choice),
    FieldSpec::required("appointmentType", "Appointment Type", FieldKind::Choice),
    FieldSpec::optional("notes", "Notes", FieldKind::LongText),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    pub patient_id: String,
    pub doctor_id: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub appointment_type: String,
    pub duration: String,
    pub notes: String,
    pub priority: String,
}

impl Default for AppointmentDraft {
    fn default() -> Self {
        Self {
            patient_id: String::new(),
            doctor_id: String::new(),
            appointment_date: String::new(),
            appointment_time: String::new(),
            appointment_type: String::new(),
            duration: "30".to_string(),
            notes: String::new(),
            priority: "normal".to_string(),
        }
    }
}

impl Draft for AppointmentDraft {
    const FORM: &'static str = "appointment";

    fn fields() -> &'static [FieldSpec] {
        APPOINTMENT_FIELDS
    }

    fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            "patientId" => &self.patient_id,
            "doctorId" => &self.doctor_id,
            "appointmentDate" => &self.appointment_date,
            "appointmentTime" => &self.appointment_time,
            "appointmentType" => &self.appointment_type,
            "duration" => &self.duration,
            "notes" => &self.notes,
            "priority" => &self.priority,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut String> {
        let slot = match name {
            "patientId" => &mut self.patient_id,
            "doctorId" => &mut self.doctor_id,
            "appointmentDate" => &mut self.appointment_date,
            "appointmentTime" => &mut self.appointment_time,
            "appointmentType" => &mut self.appointment_type,
            "duration" => &mut self.duration,
            "notes" => &mut self.notes,
            "priority" => &mut self.priority,
            _ => return None,
        };
        Some(slot)
    }
}
