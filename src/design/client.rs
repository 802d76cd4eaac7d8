//! Blocking HTTP client for the calculation service

use super::{BeamInput, ColumnInput, DesignReport, FoundationInput};
use crate::error::{DraftError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the remote design-check service
///
/// Endpoints are relative to the base URL: `/check/foundation`,
/// `/check/beam`, `/check/column`. Requests and responses are JSON.
#[derive(Debug, Clone)]
pub struct DesignClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl DesignClient {
    /// Create a client for the given base URL with the default timeout
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(DesignClient {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL the client was built with
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check an isolated foundation
    pub fn check_foundation(&self, input: &FoundationInput) -> Result<DesignReport> {
        input.validate()?;
        self.post("/check/foundation", input)
    }

    /// Check a rectangular beam
    pub fn check_beam(&self, input: &BeamInput) -> Result<DesignReport> {
        input.validate()?;
        self.post("/check/beam", input)
    }

    /// Check a rectangular column
    pub fn check_column(&self, input: &ColumnInput) -> Result<DesignReport> {
        input.validate()?;
        self.post("/check/column", input)
    }

    fn post<T: Serialize, R: DeserializeOwned>(&self, endpoint: &str, body: &T) -> Result<R> {
        let url = format!("{}{}", self.base_url, endpoint);
        log::debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send()?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| String::from("<no response body>"));
            log::warn!("design check failed: {} {} - {}", status, endpoint, message);
            return Err(DraftError::Backend {
                endpoint: endpoint.to_string(),
                message: format!("{}: {}", status, message),
            });
        }
        Ok(response.json()?)
    }
}
