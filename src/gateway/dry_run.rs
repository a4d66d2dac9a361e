//! Gateway that accepts everything without touching the network

use super::error::GatewayError;
use super::traits::{SubmissionGateway, SubmissionReceipt};
use crate::state::FieldValue;
use async_trait::async_trait;
use chrono::Utc;

/// Logs submissions and reports success; used for local previews
#[derive(Debug, Default)]
pub struct DryRunGateway;

#[async_trait]
impl SubmissionGateway for DryRunGateway {
    async fn submit(
        &self,
        target: &str,
        fields: &[(&'static str, FieldValue)],
    ) -> Result<SubmissionReceipt, GatewayError> {
        tracing::info!(
            form_name = target,
            fields = fields.len(),
            "dry run: submission not sent"
        );
        Ok(SubmissionReceipt {
            target: target.to_string(),
            status: 200,
            submitted_at: Utc::now(),
        })
    }
}
