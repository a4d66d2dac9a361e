//! HTTP client for the form-intake endpoint
//!
//! Posts urlencoded bodies the way a static-site form handler expects them.

use super::encode::encode_body;
use super::error::GatewayError;
use super::traits::{SubmissionGateway, SubmissionReceipt};
use crate::state::FieldValue;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use url::Url;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Gateway that talks to the real intake endpoint
pub struct HttpGateway {
    client: reqwest::Client,
    endpoint: Url,
    timeout_secs: u64,
}

impl HttpGateway {
    /// Create a gateway for `endpoint` with a bounded request timeout
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let endpoint =
            Url::parse(endpoint).map_err(|_| GatewayError::InvalidEndpoint(endpoint.to_string()))?;
        let client = reqwest::ClientBuilder::new()
            .timeout(timeout)
            .build()
            .map_err(GatewayError::Transport)?;
        Ok(Self {
            client,
            endpoint,
            timeout_secs: timeout.as_secs(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionGateway for HttpGateway {
    async fn submit(
        &self,
        target: &str,
        fields: &[(&'static str, FieldValue)],
    ) -> Result<SubmissionReceipt, GatewayError> {
        let body = encode_body(target, fields);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout(self.timeout_secs)
                } else {
                    GatewayError::Transport(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(form_name = target, status = status.as_u16(), "submission rejected");
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(form_name = target, status = status.as_u16(), "submission accepted");
        Ok(SubmissionReceipt {
            target: target.to_string(),
            status: status.as_u16(),
            submitted_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Router};
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    type Captured = Arc<Mutex<Vec<(Option<String>, String)>>>;

    /// Start a throwaway intake endpoint answering with `status`
    async fn spawn_intake(status: StatusCode, delay: Duration) -> (String, Captured) {
        let captured: Captured = Arc::default();
        let sink = captured.clone();
        let app = Router::new().route(
            "/",
            post(move |headers: HeaderMap, body: String| {
                let sink = sink.clone();
                async move {
                    let content_type = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    sink.lock().unwrap().push((content_type, body));
                    tokio::time::sleep(delay).await;
                    (status, "intake says hi")
                }
            }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}/"), captured)
    }

    fn minor_fields() -> Vec<(&'static str, FieldValue)> {
        vec![
            ("email", FieldValue::Text("x@y.com".into())),
            ("phone", FieldValue::Text("5551234567".into())),
            ("smsOptIn", FieldValue::Bool(false)),
            ("emailOptIn", FieldValue::Bool(true)),
        ]
    }

    #[tokio::test]
    async fn test_2xx_is_success() {
        let (endpoint, captured) = spawn_intake(StatusCode::OK, Duration::ZERO).await;
        let gateway = HttpGateway::new(&endpoint, Duration::from_secs(5)).unwrap();

        let receipt = gateway
            .submit("interest-form-under-21", &minor_fields())
            .await
            .unwrap();
        assert_eq!(receipt.status, 200);
        assert_eq!(receipt.target, "interest-form-under-21");

        let captured = captured.lock().unwrap();
        assert_eq!(captured.len(), 1);
        let (content_type, body) = &captured[0];
        assert_eq!(content_type.as_deref(), Some(FORM_CONTENT_TYPE));
        assert!(body.contains("smsOptIn=no"));
        assert!(body.contains("emailOptIn=yes"));
        assert!(body.starts_with("form-name=interest-form-under-21"));
    }

    #[tokio::test]
    async fn test_any_2xx_counts() {
        let (endpoint, _) = spawn_intake(StatusCode::ACCEPTED, Duration::ZERO).await;
        let gateway = HttpGateway::new(&endpoint, Duration::from_secs(5)).unwrap();
        let result = gateway.submit("contact-form", &[]).await;
        tokio_test::assert_ok!(result);
    }

    #[tokio::test]
    async fn test_non_2xx_is_rejected() {
        let (endpoint, _) = spawn_intake(StatusCode::INTERNAL_SERVER_ERROR, Duration::ZERO).await;
        let gateway = HttpGateway::new(&endpoint, Duration::from_secs(5)).unwrap();

        match gateway.submit("contact-form", &[]).await {
            Err(GatewayError::Rejected { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "intake says hi");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_slow_endpoint_times_out() {
        let (endpoint, _) = spawn_intake(StatusCode::OK, Duration::from_secs(3)).await;
        let gateway = HttpGateway::new(&endpoint, Duration::from_secs(1)).unwrap();

        let result = gateway.submit("contact-form", &[]).await;
        assert!(matches!(result, Err(GatewayError::Timeout(1))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway =
            HttpGateway::new(&format!("http://{addr}/"), Duration::from_secs(5)).unwrap();
        let result = gateway.submit("contact-form", &[]).await;
        assert!(matches!(result, Err(GatewayError::Transport(_))));
    }

    #[test]
    fn test_invalid_endpoint() {
        assert!(matches!(
            HttpGateway::new("not a url", Duration::from_secs(1)),
            Err(GatewayError::InvalidEndpoint(_))
        ));
    }
}
