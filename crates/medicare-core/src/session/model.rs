//! Session state machine.

use serde::{Deserialize, Serialize};

use super::credentials::Credentials;
use super::role::Role;
use crate::error::{MedicareError, Result};

/// Authentication state of the running client.
///
/// There is exactly one session per shell. It starts `Unauthenticated`; only
/// [`Session::login`] (or [`Session::authenticate_as`] after a gateway call)
/// moves it to `Authenticated`, and only [`Session::logout`] moves it back.
/// An authenticated session never switches role in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated { role: Role },
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the credentials locally and authenticates with the derived role.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyAuthenticated` while a session is open and
    /// `InvalidCredentials` for an empty field. The session is left untouched
    /// in both cases.
    pub fn login(&mut self, credentials: &Credentials) -> Result<Role> {
        self.ensure_unauthenticated()?;
        let role = credentials.derive_role()?;
        self.authenticate_as(role)?;
        Ok(role)
    }

    /// Marks the session authenticated with a role resolved elsewhere.
    pub fn authenticate_as(&mut self, role: Role) -> Result<()> {
        self.ensure_unauthenticated()?;
        *self = Session::Authenticated { role };
        Ok(())
    }

    /// Fails with `AlreadyAuthenticated` while a session is open.
    pub fn ensure_unauthenticated(&self) -> Result<()> {
        match self {
            Session::Authenticated { role } => {
                Err(MedicareError::AlreadyAuthenticated { role: *role })
            }
            Session::Unauthenticated => Ok(()),
        }
    }

    pub fn logout(&mut self) {
        *self = Session::Unauthenticated;
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// The current role, if authenticated.
    pub fn role(&self) -> Option<Role> {
        match self {
            Session::Authenticated { role } => Some(*role),
            Session::Unauthenticated => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_unauthenticated() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.role(), None);
    }

    #[test]
    fn test_login_and_logout() {
        let mut session = Session::new();
        let role = session
            .login(&Credentials::new("doctor@medicare.com", "pw"))
            .unwrap();

        assert_eq!(role, Role::Doctor);
        assert_eq!(session, Session::Authenticated { role: Role::Doctor });

        session.logout();
        assert_eq!(session, Session::Unauthenticated);
    }

    #[test]
    fn test_failed_login_leaves_session_unchanged() {
        let mut session = Session::new();
        let result = session.login(&Credentials::new("", "pw"));

        assert_eq!(result, Err(MedicareError::InvalidCredentials));
        assert_eq!(session, Session::Unauthenticated);
    }

    #[test]
    fn test_second_login_keeps_the_first_role() {
        let mut session = Session::new();
        session
            .login(&Credentials::new("doctor@medicare.com", "pw"))
            .unwrap();

        let result = session.login(&Credentials::new("admin@medicare.com", "pw"));
        assert_eq!(
            result,
            Err(MedicareError::AlreadyAuthenticated { role: Role::Doctor })
        );
        assert_eq!(
            session.authenticate_as(Role::Admin),
            Err(MedicareError::AlreadyAuthenticated { role: Role::Doctor })
        );
        assert_eq!(session, Session::Authenticated { role: Role::Doctor });
    }
}
