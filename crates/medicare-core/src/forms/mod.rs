//! Create-type forms: drafts, field definitions and the submission state machine.

mod appointment_draft;
mod draft;
mod gateway;
mod patient_draft;
mod state;

pub use appointment_draft::AppointmentDraft;
pub use draft::{Draft, FieldKind, FieldSpec};
pub use gateway::SubmitGateway;
pub use patient_draft::{GENDER_OPTIONS, PatientDraft};
pub use state::{CreateForm, FormState};
