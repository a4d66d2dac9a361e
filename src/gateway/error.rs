//! Submission transport errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("intake endpoint answered {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("no response within {0} seconds")]
    Timeout(u64),
    #[error("could not reach intake endpoint: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("invalid intake endpoint `{0}`")]
    InvalidEndpoint(String),
}

impl GatewayError {
    /// Short message for the user; details go to the log
    pub fn user_message(&self) -> &'static str {
        match self {
            GatewayError::Rejected { .. } => "The form service rejected the submission.",
            GatewayError::Timeout(_) => "The form service did not respond in time.",
            GatewayError::Transport(_) | GatewayError::InvalidEndpoint(_) => {
                "Could not reach the form service."
            }
        }
    }
}
