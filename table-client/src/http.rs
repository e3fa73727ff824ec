//! HTTP client for the POS API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use shared::ApiResponse;

/// HTTP client for making requests to the POS API
///
/// Every endpoint answers with an [`ApiResponse`] envelope; requests return
/// the decoded payload, which may be absent on success.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout {
            builder = builder.timeout(std::time::Duration::from_secs(seconds));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    async fn send<T: DeserializeOwned>(&self, mut request: RequestBuilder) -> ClientResult<Option<T>> {
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Option<T>> {
        self.send(self.client.get(self.url(path))).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Option<T>> {
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    /// Make a PUT request without body
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Option<T>> {
        self.send(self.client.put(self.url(path))).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> ClientResult<Option<T>> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // 尝试解析为信封格式的错误
            if let Ok(envelope) = serde_json::from_str::<ApiResponse<serde_json::Value>>(&text)
                && let Err(rejection) = envelope.into_result()
            {
                return Err(rejection.into());
            }
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        let envelope: ApiResponse<T> = serde_json::from_str(&text)
            .map_err(|e| ClientError::InvalidResponse(format!("{e}: {text}")))?;
        Ok(envelope.into_result()?)
    }
}
