//! Error types for the MediCare application.

use thiserror::Error;

use crate::navigation::ViewId;
use crate::session::Role;

/// A shared error type for the entire MediCare application.
///
/// Input errors (`InvalidCredentials`, `Validation`) and submission failures
/// are recoverable at the screen level; the shell turns them into transient
/// notifications and keeps the current state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MedicareError {
    /// A required login field was empty.
    #[error("Invalid credentials: email and password are required")]
    InvalidCredentials,

    /// One or more required form fields were empty.
    #[error("Validation failed for {form}: missing {}", .missing.join(", "))]
    Validation { form: String, missing: Vec<String> },

    /// The simulated backend rejected a submission.
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// A submission for this form is already in flight.
    #[error("A {form} submission is already in progress")]
    SubmissionInFlight { form: String },

    /// An operation required an authenticated session.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// A login was attempted while a session is open. Log out first.
    #[error("Already logged in as '{role}'")]
    AlreadyAuthenticated { role: Role },

    /// The role is not permitted to open the view.
    #[error("Role '{role}' may not open view '{view}'")]
    Forbidden { role: Role, view: ViewId },

    /// A draft field name that the form does not define.
    #[error("Unknown field '{field}' for {form}")]
    UnknownField { form: String, field: String },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound { entity_type: String, id: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MedicareError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error for the given form.
    pub fn validation<I, S>(form: impl Into<String>, missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation {
            form: form.into(),
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a SubmissionFailed error
    pub fn submission_failed(message: impl Into<String>) -> Self {
        Self::SubmissionFailed(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_submission_failed(&self) -> bool {
        matches!(self, Self::SubmissionFailed(_))
    }

    pub fn is_already_authenticated(&self) -> bool {
        matches!(self, Self::AlreadyAuthenticated { .. })
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true for errors caused by user input or a rejected submission.
    ///
    /// These are surfaced as notifications and never abort the shell.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials
                | Self::Validation { .. }
                | Self::SubmissionFailed(_)
                | Self::SubmissionInFlight { .. }
                | Self::NotAuthenticated
                | Self::AlreadyAuthenticated { .. }
                | Self::Forbidden { .. }
                | Self::UnknownField { .. }
                | Self::NotFound { .. }
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for MedicareError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for MedicareError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for MedicareError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for MedicareError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, MedicareError>`.
pub type Result<T> = std::result::Result<T, MedicareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_missing_fields() {
        let err = MedicareError::validation("patient", ["firstName", "email"]);
        assert_eq!(
            err.to_string(),
            "Validation failed for patient: missing firstName, email"
        );
        assert!(err.is_validation());
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_forbidden_message() {
        let err = MedicareError::Forbidden {
            role: Role::Doctor,
            view: ViewId::PatientCreate,
        };
        assert_eq!(err.to_string(), "Role 'doctor' may not open view 'add-patient'");
    }

    #[test]
    fn test_already_authenticated_names_the_role() {
        let err = MedicareError::AlreadyAuthenticated { role: Role::Doctor };
        assert_eq!(err.to_string(), "Already logged in as 'doctor'");
        assert!(err.is_already_authenticated());
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_io_errors_are_not_recoverable() {
        let err: MedicareError = std::io::Error::other("disk gone").into();
        assert!(matches!(err, MedicareError::Io { .. }));
        assert!(!err.is_recoverable());
    }
}
