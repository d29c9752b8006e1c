//! Generic API request dispatch
//!
//! Every resource wrapper funnels through [`ApiClient::request`], which owns
//! the bearer-token handshake with the auth subsystem: obtain a token, issue
//! the request, and on a 401 invalidate the token (only if it is still the
//! one this request was sent with) and re-run the whole flow exactly once.

use std::time::Duration;

use meridian_common::auth::AuthManager;
use meridian_domain::constants::API_VERSION_PREFIX;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use super::errors::ApiError;
use crate::config::ClientConfig;

/// HTTP client for the platform API with transparent authentication
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth: AuthManager,
    timeout: Duration,
}

impl ApiClient {
    /// Create a client from validated configuration
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the underlying HTTP client cannot be
    /// built.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;

        let auth = AuthManager::new(&config.auth_base_url, config.credentials());
        let base_url =
            format!("{}{API_VERSION_PREFIX}", config.api_base_url.trim_end_matches('/'));

        Ok(Self { http, base_url, auth, timeout: config.timeout })
    }

    /// Token lifecycle manager backing this client
    #[must_use]
    pub fn auth(&self) -> &AuthManager {
        &self.auth
    }

    /// Execute a GET request
    ///
    /// # Errors
    /// Returns error if the request fails or the response cannot be
    /// deserialized.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.request::<(), T>(Method::GET, path, query, None).await
    }

    /// Execute a POST request with a JSON body
    ///
    /// # Errors
    /// Returns error if the request fails or the response cannot be
    /// deserialized.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    /// Execute a PATCH request with a JSON body
    ///
    /// # Errors
    /// Returns error if the request fails or the response cannot be
    /// deserialized.
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PATCH, path, &[], Some(body)).await
    }

    /// Execute a DELETE request
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<(), T>(Method::DELETE, path, &[], None).await
    }

    /// Issue one authenticated request, with the single 401 retry
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let token = self.auth.get_token().await?;
        let response = self.send(method.clone(), path, query, body, &token).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            // Invalidate only if the cache still holds the token this request
            // went out with; a concurrent refresh may already have replaced it.
            let invalidated = self.auth.invalidate_if_current(&token);
            debug!(path, invalidated, "bearer token rejected, retrying once");

            let token = self.auth.get_token().await?;
            let response = self.send(method, path, query, body, &token).await?;
            return Self::read_json(response).await;
        }

        let result = Self::read_json(response).await;
        if result.is_ok() {
            info!(path, "API request successful");
        }
        result
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
        token: &str,
    ) -> Result<reqwest::Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{path}", self.base_url);
        debug!(%method, %url, "dispatching API request");

        let mut request = self
            .http
            .request(method, &url)
            .header("Content-Type", "application/json")
            .bearer_auth(token);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        match request.send().await {
            Ok(response) => Ok(response),
            Err(err) if err.is_timeout() => Err(ApiError::Timeout(self.timeout)),
            Err(err) => Err(ApiError::Network(err.to_string())),
        }
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let url = response.url().to_string();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_status_error(status, &url, body));
        }

        // 204/205 have no body by RFC spec
        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                ApiError::Client(format!(
                    "no content response ({}), but response type cannot be deserialized from empty body",
                    status.as_u16()
                ))
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Client(format!("failed to parse response: {e}")))
    }

    fn map_status_error(status: StatusCode, url: &str, body: String) -> ApiError {
        let message = if body.is_empty() {
            format!("{url} returned status {status}")
        } else {
            format!("{url} returned status {status}: {body}")
        };

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            ApiError::Auth(message)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            ApiError::RateLimit(message)
        } else if status.is_server_error() {
            ApiError::Server(message)
        } else if status.is_client_error() {
            ApiError::Client(message)
        } else {
            ApiError::Network(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_follows_taxonomy() {
        let auth = ApiClient::map_status_error(StatusCode::UNAUTHORIZED, "http://x/v2/a", String::new());
        assert!(matches!(auth, ApiError::Auth(_)));

        let rate = ApiClient::map_status_error(StatusCode::TOO_MANY_REQUESTS, "http://x/v2/a", String::new());
        assert!(matches!(rate, ApiError::RateLimit(_)));

        let server = ApiClient::map_status_error(StatusCode::BAD_GATEWAY, "http://x/v2/a", String::new());
        assert!(matches!(server, ApiError::Server(_)));

        let client = ApiClient::map_status_error(StatusCode::NOT_FOUND, "http://x/v2/a", String::new());
        assert!(matches!(client, ApiError::Client(_)));
    }

    #[test]
    fn status_error_message_includes_body_when_present() {
        let err = ApiClient::map_status_error(
            StatusCode::BAD_REQUEST,
            "http://x/v2/orders",
            "invalid member".to_string(),
        );
        assert!(err.to_string().contains("invalid member"));
        assert!(err.to_string().contains("400"));
    }
}
