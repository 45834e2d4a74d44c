//! HTTP plumbing shared by every endpoint group.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{ApiError, ErrorBody};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

/// Acknowledgement body the backend sends for plain mutations.
#[derive(Debug, Deserialize)]
pub(crate) struct MessageResponse {
    pub message: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: trim_base_url(base_url.into()),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.http_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: trim_base_url(config.base_url.clone()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reads `T` out of a success response. A non-2xx status becomes
    /// `ServerRejected`, carrying the backend's `error` message when the
    /// body has one.
    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(|source| {
                tracing::warn!(endpoint, error = %source, "could not decode response body");
                ApiError::Decode { endpoint, source }
            })
        } else {
            Err(rejection(status, response).await)
        }
    }
}

pub(crate) async fn rejection(status: StatusCode, response: Response) -> ApiError {
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    tracing::warn!(status = status.as_u16(), message = %message, "backend rejected the request");
    ApiError::ServerRejected {
        status: status.as_u16(),
        message,
    }
}

fn trim_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}
