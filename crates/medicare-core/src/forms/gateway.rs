//! Create endpoint trait.

use async_trait::async_trait;

use super::draft::Draft;
use crate::error::Result;

/// Create endpoint for one record type: accepts a draft and returns the new
/// record's identifier.
#[async_trait]
pub trait SubmitGateway<D: Draft>: Send + Sync {
    async fn create(&self, draft: D) -> Result<u32>;
}
