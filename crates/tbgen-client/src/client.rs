//! HTTP client for the generation service
//!
//! One outbound call per method invocation; the service performs its own
//! internal repair retries (`max_retries` is forwarded, never acted on here)
//! and no response is cached. The client imposes no timeout of its own, so a
//! slow generation simply stays pending until the transport gives up.

use reqwest::StatusCode;
use url::Url;

use tbgen_core::error::{Error, Result};
use tbgen_core::types::{GenerateResult, HealthStatus};

use crate::protocol::{ErrorBody, GenerateRequest, GenerateResponse, HealthResponse};

/// Client for the remote generation service.
///
/// Cheap to clone-share behind an `Arc`; the inner `reqwest::Client` pools
/// connections internally.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    base: Url,
    http: reqwest::Client,
}

impl GenerationClient {
    /// Create a client for a service rooted at `base_url`
    /// (e.g. `http://127.0.0.1:8000`).
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|_| Error::InvalidServerUrl {
            url: base_url.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(Error::InvalidServerUrl {
                url: base_url.to_string(),
            });
        }
        Ok(Self {
            base,
            http: reqwest::Client::new(),
        })
    }

    /// The service root this client talks to
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn api_url(&self, endpoint: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(&format!("api/{endpoint}"));
        url
    }

    /// `GET /api/health`. Fails with [`Error::Transport`] when the call cannot
    /// complete; never retried. Callers treat failure as "health unknown".
    pub async fn check_health(&self) -> Result<HealthStatus> {
        let url = self.api_url("health");
        tracing::debug!("checking service health at {url}");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        // The health contract defines no failure mode beyond transport
        // trouble; a non-2xx here is treated the same as not reaching the
        // service at all.
        if !response.status().is_success() {
            return Err(Error::transport(format!(
                "health check returned {}",
                response.status()
            )));
        }

        let body: HealthResponse = response
            .json()
            .await
            .map_err(|e| Error::schema(e.to_string()))?;
        Ok(body.into_status())
    }

    /// `POST /api/generate`. Exactly one outbound call; identical RTL
    /// submitted twice always triggers a fresh remote generation.
    pub async fn generate_testbench(&self, rtl: &str, max_retries: u32) -> Result<GenerateResult> {
        let url = self.api_url("generate");
        let request = GenerateRequest {
            rtl,
            max_retries,
            module_name: None,
            simulator: None,
        };

        tracing::info!(
            rtl_bytes = rtl.len(),
            max_retries,
            "submitting generation request"
        );

        let response = self
            .http
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::request(Self::failure_message(status, response).await));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::schema(e.to_string()))?;
        let result = body.into_result()?;
        tracing::info!(
            module = %result.module.name,
            attempts = result.attempts,
            sim_success = result.sim_success,
            "generation completed"
        );
        Ok(result)
    }

    /// Extract the user-facing message from a non-2xx response: the structured
    /// payload's `detail` when present, otherwise the HTTP status text.
    async fn failure_message(status: StatusCode, response: reqwest::Response) -> String {
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.detail)
            .filter(|detail| !detail.is_empty());
        detail.unwrap_or_else(|| status_text(status))
    }
}

/// HTTP status text, e.g. "Internal Server Error" for 500
fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}
