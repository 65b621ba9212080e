//! HTTP client for the verification service

use async_trait::async_trait;
use personhood_core::{VerificationRequest, VerificationResult};
use thiserror::Error;
use url::Url;

use crate::config::{ClientConfig, ConfigError};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Verification request timed out")]
    Timeout,

    /// Non-2xx answer. `body` is kept for diagnostics and left out of the message.
    #[error("Verification service returned HTTP {status}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_decode() {
            ClientError::InvalidResponse(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

/// The remote endpoint that checks both payloads
#[async_trait]
pub trait VerificationService: Send + Sync {
    async fn verify(&self, request: &VerificationRequest)
        -> Result<VerificationResult, ClientError>;
}

/// `VerificationService` over HTTP
pub struct HttpVerificationService {
    /// Verify endpoint URL
    verify_url: Url,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpVerificationService {
    /// Create a new client
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let verify_url = config.verify_url()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { verify_url, client })
    }

    pub fn verify_url(&self) -> &Url {
        &self.verify_url
    }
}

#[async_trait]
impl VerificationService for HttpVerificationService {
    async fn verify(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationResult, ClientError> {
        tracing::debug!("POST {}", self.verify_url);

        let response = self
            .client
            .post(self.verify_url.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Verification service returned {}", status);
            tracing::debug!("Error body: {}", body);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result: VerificationResult = response.json().await?;
        tracing::debug!(
            "Verification service answered success={} code={:?}",
            result.success,
            result.code
        );
        Ok(result)
    }
}
