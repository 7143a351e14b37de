//! HTTP API client for the signup backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use signup_shared::{ApiError, RegistrationForm};

/// Resource that creates user accounts.
pub const USER_PATH: &str = "/user";

/// Backend operations used by the registration flow.
#[async_trait(?Send)]
pub trait RegistrationApi {
    /// Create a user. Any 2xx response counts as success.
    async fn register_user(&self, form: &RegistrationForm) -> Result<(), ApiError>;
}

/// HTTP client for JSON requests against the backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
        }
    }

    /// Set the base URL for API requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if self.base_url.is_empty() {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    /// POST a JSON body. Any 2xx is success; the response body is not decoded.
    pub async fn post_json<TReq: Serialize>(&self, path: &str, body: &TReq) -> Result<(), ApiError> {
        let url = self.url(path);
        let body_bytes = serde_json::to_vec(body).map_err(|e| ApiError::Deserialize(e.to_string()))?;

        let resp = self
            .client
            .post(&url)
            .body(body_bytes)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl RegistrationApi for ApiClient {
    async fn register_user(&self, form: &RegistrationForm) -> Result<(), ApiError> {
        self.post_json(USER_PATH, form).await
    }
}
