//! HTTP plumbing shared by every endpoint module.
//!
//! One request path: base URL + relative path, bearer token attached when a
//! session is persisted, response body decoded into the caller's type. HTTP
//! 401 is intercepted here for every request — the session is cleared and the
//! browser is sent to `/login` — so no call site handles expiry itself. All
//! other non-2xx statuses become [`ApiError::Api`] with the server's message.
//! No retries, no deduplication, transport-default timeout.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::session;

/// Backend base URL, set at build time via `API_BASE_URL`.
pub fn base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("http://localhost:5001/api")
}

fn builder(method: Method, path: &str) -> reqwest::RequestBuilder {
    let mut request = reqwest::Client::new().request(method, format!("{}{path}", base_url()));
    if let Some(token) = session::token() {
        request = request.bearer_auth(token);
    }
    request
}

/// Send the request and apply the cross-cutting policies: network failures
/// map to [`ApiError::Network`], 401 clears the session and redirects, other
/// non-2xx statuses surface the server's error message.
async fn dispatch(request: reqwest::RequestBuilder) -> Result<String, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if status == 401 {
        tracing::warn!("received 401, clearing session");
        session::clear();
        redirect_to_login();
        return Err(ApiError::Unauthorized);
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, &body));
    }
    Ok(body)
}

async fn decode<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ApiError> {
    let body = dispatch(request).await?;
    serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
}

pub(crate) async fn get<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    decode(builder(Method::GET, path).query(query)).await
}

pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    decode(builder(Method::POST, path).json(body)).await
}

pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    decode(builder(Method::PUT, path).json(body)).await
}

/// POST without a body, ignoring the response payload. Used by the
/// join/leave/register/like/read family where only success matters because
/// the caller refetches afterwards anyway.
pub(crate) async fn post_empty(path: &str) -> Result<(), ApiError> {
    dispatch(builder(Method::POST, path)).await.map(|_| ())
}

/// POST a body, ignoring the response payload.
pub(crate) async fn post_ack<B: Serialize + ?Sized>(path: &str, body: &B) -> Result<(), ApiError> {
    dispatch(builder(Method::POST, path).json(body))
        .await
        .map(|_| ())
}

pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
    dispatch(builder(Method::DELETE, path)).await.map(|_| ())
}

#[cfg(target_arch = "wasm32")]
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn redirect_to_login() {}

/// Standard paging pair for list endpoints. Every list view shows 12 cards
/// per page, matching the backend default.
pub(crate) fn page_query(page: u32) -> Vec<(&'static str, String)> {
    vec![("page", page.to_string()), ("per_page", "12".to_string())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_includes_paging_pair() {
        let query = page_query(3);
        assert_eq!(
            query,
            vec![
                ("page", "3".to_string()),
                ("per_page", "12".to_string()),
            ]
        );
    }
}
