/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::constants::REQUEST_ID_HEADER;
use crate::error::AppError;
use crate::utils::id::request_id;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Description of an outgoing API call
///
/// The descriptor is owned by a single call and cloned when the call has to be
/// sent again after a token refresh. Paths are resolved against the configured
/// base URL; absolute URLs are used as-is.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the base URL, or an absolute URL
    pub path: String,
    /// Per-request headers, merged over the client's default headers
    pub headers: HeaderMap,
    /// Query string parameters
    pub query: Vec<(String, String)>,
    /// JSON body
    pub body: Option<serde_json::Value>,
    /// Correlation id sent as `X-Request-ID`, shared by the resend
    pub request_id: String,
}

impl ApiRequest {
    /// Creates a request without headers or body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: None,
            request_id: request_id(),
        }
    }

    /// Shorthand for a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Shorthand for a POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Shorthand for a PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Shorthand for a PATCH request
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Shorthand for a DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Serializes `body` as the JSON payload
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, AppError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Appends a query string parameter
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a header, replacing any previous value
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, AppError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| AppError::InvalidInput(format!("header name {name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| AppError::InvalidInput(format!("header value for {name}: {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Sets `Authorization: Bearer <token>`, replacing any previous value
    pub fn set_bearer(&mut self, token: &str) -> Result<(), AppError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| AppError::InvalidInput(format!("access token: {e}")))?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    /// Token currently carried in the `Authorization` header, if any
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
    }
}

/// Builds the underlying `reqwest` client from the configuration
///
/// The configured default headers and timeout apply to every request sent
/// through the returned client, including refresh calls.
pub fn build_http_client(config: &Config, user_agent: &str) -> Result<Client, AppError> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.rest_api.default_headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| AppError::InvalidInput(format!("default header {name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| AppError::InvalidInput(format!("default header {name}: {e}")))?;
        headers.insert(name, value);
    }

    Ok(Client::builder()
        .user_agent(user_agent)
        .default_headers(headers)
        .timeout(Duration::from_secs(config.rest_api.timeout))
        .build()?)
}

/// Sends `request` once and classifies the outcome
///
/// No interception happens here: the headers of `request` are sent exactly as
/// they are. Callers layer token injection and refresh on top.
///
/// # Returns
///
/// * `Ok(Response)` - 2xx response, untouched
/// * `Err(AppError::AuthExpired)` - 401, with its body
/// * `Err(AppError::Http)` - any other non-success status, with its body
/// * `Err(AppError::Network)` - the request never produced a response
pub async fn make_http_request(
    client: &Client,
    config: &Config,
    request: &ApiRequest,
) -> Result<Response, AppError> {
    let url = config.url_for(&request.path);
    debug!("[{}] {} {}", request.request_id, request.method, url);

    let mut builder = client
        .request(request.method.clone(), &url)
        .headers(request.headers.clone())
        .header(REQUEST_ID_HEADER, request.request_id.as_str());

    if !request.query.is_empty() {
        builder = builder.query(&request.query);
    }

    if let Some(body) = &request.body {
        builder = builder.json(body);
    }

    let response = builder.send().await?;
    let status = response.status();
    debug!("[{}] Response status: {}", request.request_id, status);

    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED => {
            let body = response.text().await.unwrap_or_default();
            warn!("[{}] Unauthorized: {}", request.request_id, body);
            Err(AppError::AuthExpired { body })
        }
        _ => {
            let body = response.text().await.unwrap_or_default();
            error!(
                "[{}] Request failed with status {}: {}",
                request.request_id, status, body
            );
            Err(AppError::Http { status, body })
        }
    }
}
