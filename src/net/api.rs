//! REST API helpers for communicating with the activities server.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Host builds: stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Response bodies are read as text
//! and interpreted by pure helpers, so status/body handling is unit-tested
//! without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Catalog, ErrorResponse, MessageResponse, TokenResponse};
use crate::config::ClientConfig;
use crate::util::encode::encode_component;

/// Failure of a REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, etc.).
    #[error("request failed: {0}")]
    Transport(String),
    /// A response arrived but its body was not the expected JSON.
    #[error("malformed response body: {0}")]
    Decode(String),
    /// Non-2xx response; `detail` is the server's explanation, if any.
    #[error("server responded {status}{}", detail_suffix(.detail.as_deref()))]
    Status { status: u16, detail: Option<String> },
    /// Called outside the browser.
    #[error("not available outside the browser")]
    Unavailable,
}

fn detail_suffix(detail: Option<&str>) -> String {
    detail.map(|d| format!(": {d}")).unwrap_or_default()
}

impl ApiError {
    /// Server-provided detail for application-level failures.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

pub fn token_endpoint(config: &ClientConfig) -> String {
    config.endpoint("/token")
}

pub fn activities_endpoint(config: &ClientConfig) -> String {
    config.endpoint("/activities")
}

pub fn signup_endpoint(config: &ClientConfig, activity: &str, email: &str) -> String {
    config.endpoint(&format!(
        "/activities/{}/signup?email={}",
        encode_component(activity),
        encode_component(email)
    ))
}

pub fn unregister_endpoint(config: &ClientConfig, activity: &str, email: &str) -> String {
    config.endpoint(&format!(
        "/activities/{}/unregister?email={}",
        encode_component(activity),
        encode_component(email)
    ))
}

pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn status_error(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|err| err.detail_text());
    ApiError::Status { status, detail }
}

/// Interpret a `POST /token` response into the access token.
pub fn parse_token_response(status: u16, body: &str) -> Result<String, ApiError> {
    if !is_success(status) {
        return Err(status_error(status, body));
    }
    let token: TokenResponse = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(token.access_token)
}

/// Interpret a `GET /activities` response into a [`Catalog`].
pub fn parse_catalog_response(status: u16, body: &str) -> Result<Catalog, ApiError> {
    if !is_success(status) {
        return Err(status_error(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Interpret a signup/unregister response into the confirmation message.
///
/// A failure body that is not JSON (e.g. a proxy error page) is a
/// [`ApiError::Decode`], not an application-level rejection.
pub fn parse_action_response(status: u16, body: &str) -> Result<String, ApiError> {
    if !is_success(status) {
        let err: ErrorResponse = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        return Err(ApiError::Status { status, detail: err.detail_text() });
    }
    let message: MessageResponse = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(message.message)
}

#[cfg(feature = "csr")]
async fn read_response(request: Result<gloo_net::http::Request, gloo_net::Error>) -> Result<(u16, String), ApiError> {
    let request = request.map_err(|e| ApiError::Transport(e.to_string()))?;
    let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    log::debug!("{} -> {status}", resp.url());
    Ok((status, body))
}

/// Exchange credentials for a bearer token via form-encoded `POST /token`.
///
/// # Errors
///
/// [`ApiError::Status`] when the credentials are rejected, otherwise a
/// transport or decode failure.
pub async fn login(config: &ClientConfig, username: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let form = web_sys::FormData::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
        form.append_with_str("username", username)
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
        form.append_with_str("password", password)
            .map_err(|e| ApiError::Transport(format!("{e:?}")))?;
        let request = gloo_net::http::Request::post(&token_endpoint(config)).body(form);
        let (status, body) = read_response(request).await?;
        parse_token_response(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, username, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the full catalog from `GET /activities`.
///
/// # Errors
///
/// Any non-2xx status, transport failure, or malformed body.
pub async fn fetch_activities(config: &ClientConfig) -> Result<Catalog, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::get(&activities_endpoint(config)).build();
        let (status, body) = read_response(request).await?;
        parse_catalog_response(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Sign `email` up for `activity` via `POST /activities/{name}/signup`.
///
/// # Errors
///
/// [`ApiError::Status`] carries the server's `detail` when present.
pub async fn signup(config: &ClientConfig, token: &str, activity: &str, email: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::post(&signup_endpoint(config, activity, email))
            .header("Authorization", &bearer_header(token))
            .build();
        let (status, body) = read_response(request).await?;
        parse_action_response(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, token, activity, email);
        Err(ApiError::Unavailable)
    }
}

/// Remove `email` from `activity` via `DELETE /activities/{name}/unregister`.
///
/// # Errors
///
/// [`ApiError::Status`] carries the server's `detail` when present.
pub async fn unregister(config: &ClientConfig, token: &str, activity: &str, email: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::delete(&unregister_endpoint(config, activity, email))
            .header("Authorization", &bearer_header(token))
            .build();
        let (status, body) = read_response(request).await?;
        parse_action_response(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, token, activity, email);
        Err(ApiError::Unavailable)
    }
}
