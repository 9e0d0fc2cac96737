use std::future::Future;

use futures::future::{select, Either};
use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::config::AppConfig;

/// API error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    #[error("Unauthorized - please log in")]
    Unauthorized,
    #[error("Request timed out after {0} ms")]
    Timeout(u32),
    #[error("Request rejected by server: {0}")]
    Rejected(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// API client for making HTTP requests
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
}

impl ApiClient {
    /// Client for the configured API prefix and request deadline
    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_url.clone(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    /// Make a GET request and deserialize the response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        self.with_deadline(async move {
            let response = Request::get(&url)
                .credentials(web_sys::RequestCredentials::Include) // Send cookies
                .send()
                .await?;

            handle_response(response).await
        })
        .await
    }

    /// Make a POST request with a JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let request = Request::post(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;

        self.with_deadline(async move {
            let response = request.send().await?;
            handle_response(response).await
        })
        .await
    }

    /// Fail with `Timeout` if the request has not settled in time
    async fn with_deadline<T, F>(&self, request: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let deadline = gloo_timers::future::TimeoutFuture::new(self.timeout_ms);
        futures::pin_mut!(request);
        futures::pin_mut!(deadline);

        match select(request, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ApiError::Timeout(self.timeout_ms)),
        }
    }
}

/// Handle the HTTP response
async fn handle_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    let status = response.status();

    if status == 401 {
        return Err(ApiError::Unauthorized);
    }

    if !response.ok() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ApiError::Http { status, message });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Deserialization(e.to_string()))
}
