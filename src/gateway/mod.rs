//! Submission gateway to the external form-intake service

mod client;
mod dry_run;
mod encode;
mod error;
mod traits;

pub use client::HttpGateway;
pub use dry_run::DryRunGateway;
pub use error::GatewayError;
pub use traits::{SubmissionGateway, SubmissionReceipt};

#[cfg(test)]
pub use traits::MockSubmissionGateway;

use crate::config::FunnelConfig;
use std::sync::Arc;

/// Build the gateway selected by the configuration
pub fn from_config(config: &FunnelConfig) -> Result<Arc<dyn SubmissionGateway>, GatewayError> {
    if config.dry_run {
        tracing::info!("dry run enabled, submissions will not be sent");
        return Ok(Arc::new(DryRunGateway));
    }
    let gateway = HttpGateway::new(&config.endpoint, config.submit_timeout())?;
    tracing::info!(endpoint = %gateway.endpoint(), "using intake endpoint");
    Ok(Arc::new(gateway))
}
