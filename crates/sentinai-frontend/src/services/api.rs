//! # API Client
//!
//! HTTP client for the threat analysis endpoint. Payloads are opaque JSON and
//! the response body is handed back untouched.

use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;

use super::error::{ApiError, ApiResult};
use crate::config::ApiConfig;

const ANALYZE_THREAT_PATH: &str = "analyze-threat";

/// Body of `POST /analyze-threat`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeThreatRequest {
    pub sonar_data: Value,
    pub camera_data: Value,
}

/// Sends a JSON request and decodes the JSON reply.
#[allow(async_fn_in_trait)]
pub trait ThreatTransport {
    type Error: std::fmt::Display;

    async fn post_json(&self, url: &str, body: &AnalyzeThreatRequest) -> Result<Value, Self::Error>;
}

/// Browser `fetch` transport
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl ThreatTransport for HttpTransport {
    type Error = ApiError;

    async fn post_json(&self, url: &str, body: &AnalyzeThreatRequest) -> ApiResult<Value> {
        let response = Request::post(url).json(body)?.send().await?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                status_text: response.status_text(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.json().await?)
    }
}

/// Threat analysis client
#[derive(Debug, Clone)]
pub struct ApiClient<T = HttpTransport> {
    config: ApiConfig,
    transport: T,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_transport(config, HttpTransport)
    }
}

impl<T: ThreatTransport> ApiClient<T> {
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Submit sonar and camera data for analysis.
    ///
    /// Errors are logged and returned exactly as the transport produced them.
    pub async fn analyze_threat(&self, sonar_data: Value, camera_data: Value) -> Result<Value, T::Error> {
        let url = self.config.endpoint(ANALYZE_THREAT_PATH);
        let request = AnalyzeThreatRequest {
            sonar_data,
            camera_data,
        };

        log::debug!("POST {url}");
        self.transport
            .post_json(&url, &request)
            .await
            .inspect_err(|e| log::error!("Error analyzing threat: {e}"))
    }
}

/// Analyze a threat against the build-configured endpoint
pub async fn analyze_threat(sonar_data: Value, camera_data: Value) -> ApiResult<Value> {
    ApiClient::new(ApiConfig::from_env())
        .analyze_threat(sonar_data, camera_data)
        .await
}
