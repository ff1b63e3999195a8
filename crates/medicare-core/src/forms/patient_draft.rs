//! Draft for the "Add Patient" form.

use serde::{Deserialize, Serialize};

use super::draft::{Draft, FieldKind, FieldSpec};

const PATIENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("firstName", "First Name", FieldKind::Text),
    FieldSpec::required("lastName", "Last Name", FieldKind::Text),
    FieldSpec::required("email", "Email", FieldKind::Email),
    FieldSpec::required("phone", "Phone", FieldKind::Phone),
    FieldSpec::required("dateOfBirth", "Date of Birth", FieldKind::Date),
    FieldSpec::required("gender", "Gender", FieldKind::Choice),
    FieldSpec::optional("address", "Street Address", FieldKind::Text),
    FieldSpec::optional("city", "City", FieldKind::Text),
    FieldSpec::optional("state", "State", FieldKind::Text),
    FieldSpec::optional("zipCode", "ZIP Code", FieldKind::Text),
    FieldSpec::optional("emergencyContact", "Emergency Contact Name", FieldKind::Text),
    FieldSpec::optional("emergencyPhone", "Emergency Contact Phone", FieldKind::Phone),
    FieldSpec::optional("medicalHistory", "Medical History", FieldKind::LongText),
    FieldSpec::optional("allergies", "Allergies", FieldKind::LongText),
    FieldSpec::optional("currentMedications", "Current Medications", FieldKind::LongText),
    FieldSpec::optional("insuranceProvider", "Insurance Provider", FieldKind::Text),
    FieldSpec::optional("insuranceNumber", "Insurance Number", FieldKind::Text),
];

/// Gender choices offered by the form.
pub const GENDER_OPTIONS: &[&str] = &["Male", "Female", "Other"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub gender: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub emergency_contact: String,
    pub emergency_phone: String,
    pub medical_history: String,
    pub allergies: String,
    pub current_medications: String,
    pub insurance_provider: String,
    pub insurance_number: String,
}

impl PatientDraft {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl Draft for PatientDraft {
    const FORM: &'static str = "patient";

    fn fields() -> &'static [FieldSpec] {
        PATIENT_FIELDS
    }

    fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            "firstName" => &self.first_name,
            "lastName" => &self.last_name,
            "email" => &self.email,
            "phone" => &self.phone,
            "dateOfBirth" => &self.date_of_birth,
            "gender" => &self.gender,
            "address" => &self.address,
            "city" => &self.city,
            "state" => &self.state,
            "zipCode" => &self.zip_code,
            "emergencyContact" => &self.emergency_contact,
            "emergencyPhone" => &self.emergency_phone,
            "medicalHistory" => &self.medical_history,
            "allergies" => &self.allergies,
            "currentMedications" => &self.current_medications,
            "insuranceProvider" => &self.insurance_provider,
            "insuranceNumber" => &self.insurance_number,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut String> {
        let slot = match name {
            "firstName" => &mut self.first_name,
            "lastName" => &mut self.last_name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "dateOfBirth" => &mut self.date_of_birth,
            "gender" => &mut self.gender,
            "address" => &mut self.address,
            "city" => &mut self.city,
            "state" => &mut self.state,
            "zipCode" => &mut self.zip_code,
            "emergencyContact" => &mut self.emergency_contact,
            "emergencyPhone" => &mut self.emergency_phone,
            "medicalHistory" => &mut self.medical_history,
            "allergies" => &mut self.allergies,
            "currentMedications" => &mut self.current_medications,
            "insuranceProvider" => &mut self.insurance_provider,
            "insuranceNumber" => &mut self.insurance_number,
            _ => return None,
        };
        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MedicareError;

    fn complete() -> PatientDraft {
        let mut draft = PatientDraft::default();
        for (name, value) in [
            ("firstName", "Ada"),
            ("lastName", "Lovelace"),
            ("email", "ada@example.com"),
            ("phone", "(555) 000-0000"),
            ("dateOfBirth", "1815-12-10"),
            ("gender", "Female"),
        ] {
            draft.set(name, value).unwrap();
        }
        draft
    }

    #[test]
    fn test_every_field_is_addressable() {
        let mut draft = PatientDraft::default();
        for field in PatientDraft::fields() {
            draft.set(field.name, "x").unwrap();
            assert_eq!(draft.get(field.name), Some("x"));
        }
    }

    #[test]
    fn test_required_fields_only() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn test_empty_first_name_fails_validation() {
        let mut draft = complete();
        draft.set("firstName", "").unwrap();

        assert_eq!(
            draft.validate(),
            Err(MedicareError::validation("patient", ["firstName"]))
        );
    }

    #[test]
    fn test_unknown_field() {
        let mut draft = PatientDraft::default();
        assert!(matches!(
            draft.set("shoeSize", "42"),
            Err(MedicareError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_full_name() {
        assert_eq!(complete().full_name(), "Ada Lovelace");
    }
}
