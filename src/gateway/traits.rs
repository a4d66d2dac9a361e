//! Trait abstraction for the form-intake gateway to enable mocking in tests

use super::error::GatewayError;
use crate::state::FieldValue;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Acknowledgement of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub target: String,
    pub status: u16,
    pub submitted_at: DateTime<Utc>,
}

/// Posts a validated snapshot to the external intake service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Send one submission. Any 2xx is success; nothing is retried.
    async fn submit(
        &self,
        target: &str,
        fields: &[(&'static str, FieldValue)],
    ) -> Result<SubmissionReceipt, GatewayError>;
}
