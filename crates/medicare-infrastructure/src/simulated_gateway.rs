//! Simulated login and create endpoints.
//!
//! Each call waits for the configured delay and then succeeds. Nothing is
//! stored: created records are acknowledged with a fresh identifier only.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use medicare_core::error::Result;
use medicare_core::forms::{Draft, SubmitGateway};
use medicare_core::session::{AuthGateway, Credentials, Role};
use tracing::info;

/// Login endpoint that derives the role from the email address.
#[derive(Debug, Clone, Default)]
pub struct SimulatedAuthGateway {
    delay: Duration,
}

impl SimulatedAuthGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl AuthGateway for SimulatedAuthGateway {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Role> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let role = credentials.derive_role()?;
        info!("[Gateway] Authenticated {} as {}", credentials.email, role);
        Ok(role)
    }
}

/// Create endpoint that hands out sequential identifiers.
#[derive(Debug)]
pub struct SimulatedSubmitGateway {
    delay: Duration,
    next_id: AtomicU32,
}

impl SimulatedSubmitGateway {
    /// `first_id` is the identifier given to the first accepted draft.
    pub fn new(delay: Duration, first_id: u32) -> Self {
        Self {
            delay,
            next_id: AtomicU32::new(first_id),
        }
    }
}

#[async_trait]
impl<D: Draft> SubmitGateway<D> for SimulatedSubmitGateway {
    async fn create(&self, draft: D) -> Result<u32> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        draft.validate()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        info!("[Gateway] Accepted {} draft as #{}", D::FORM, id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medicare_core::MedicareError;
    use medicare_core::forms::AppointmentDraft;

    #[tokio::test]
    async fn test_auth_gateway_roles() {
        let gateway = SimulatedAuthGateway::default();
        let role = gateway
            .authenticate(&Credentials::new("doctor@medicare.com", "pw"))
            .await
            .unwrap();
        assert_eq!(role, Role::Doctor);

        let err = gateway
            .authenticate(&Credentials::new("doctor@medicare.com", ""))
            .await
            .unwrap_err();
        assert_eq!(err, MedicareError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_submit_gateway_hands_out_sequential_ids() {
        let gateway = SimulatedSubmitGateway::new(Duration::ZERO, 6);
        let mut draft = AppointmentDraft::default();
        for (name, value) in [
            ("patientId", "1"),
            ("doctorId", "2"),
            ("appointmentDate", "2024-02-01"),
            ("appointmentTime", "09:00 AM"),
            ("appointmentType", "Consultation"),
        ] {
            draft.set(name, value).unwrap();
        }

        assert_eq!(gateway.create(draft.clone()).await.unwrap(), 6);
        assert_eq!(gateway.create(draft).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_submit_gateway_rejects_incomplete_drafts() {
        let gateway = SimulatedSubmitGateway::new(Duration::ZERO, 1);
        let err = gateway.create(AppointmentDraft::default()).await.unwrap_err();
        assert!(err.is_validation());
    }
}
