//! Login credentials.

use serde::{Deserialize, Serialize};

use super::role::Role;
use crate::error::{MedicareError, Result};

/// Email/password pair entered on the login screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Fails with `InvalidCredentials` when either field is empty.
    pub fn validate(&self) -> Result<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(MedicareError::InvalidCredentials);
        }
        Ok(())
    }

    /// Validates the credentials and derives the role from the email.
    pub fn derive_role(&self) -> Result<Role> {
        self.validate()?;
        Ok(Role::from_identifier(&self.email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_are_rejected() {
        assert_eq!(
            Credentials::new("", "secret").derive_role(),
            Err(MedicareError::InvalidCredentials)
        );
        assert_eq!(
            Credentials::new("admin@x.com", "").derive_role(),
            Err(MedicareError::InvalidCredentials)
        );
    }

    #[test]
    fn test_derive_role() {
        assert_eq!(
            Credentials::new("admin@x.com", "pw").derive_role(),
            Ok(Role::Admin)
        );
    }
}
