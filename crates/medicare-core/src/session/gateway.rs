//! Authentication gateway trait.

use async_trait::async_trait;

use super::credentials::Credentials;
use super::role::Role;
use crate::error::Result;

/// Login endpoint: accepts credentials and returns the resolved role.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Role>;
}
