//! JSON helpers over `gloo_net` shared by every page.
//!
//! Any status outside 2xx becomes `ApiError::Rejected` carrying the
//! server's `error` field; network and decoding failures become
//! `ApiError::Transport`.

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_url;

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let url = response.url();
    let body = response.text().await.unwrap_or_default();
    log::warn!("{} answered {}: {}", url, status, body);
    Err(ApiError::rejected(status, &body))
}

/// GET a single JSON document
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(ApiError::transport)?;

    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(ApiError::transport)
}

/// GET a collection; a `null` body is an empty collection
pub async fn get_collection<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    let items = get_json::<Option<Vec<T>>>(path).await?;
    Ok(items.unwrap_or_default())
}

/// Which verb submits a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
}

/// Send `payload` as JSON; the response body is not inspected on success
pub async fn send_json<P: Serialize>(method: Method, path: &str, payload: &P) -> Result<(), ApiError> {
    let url = api_url(path);
    let builder = match method {
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
    };

    let response = builder
        .json(payload)
        .map_err(|e| ApiError::transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(ApiError::transport)?;

    check(response).await.map(|_| ())
}

/// POST without a body, used by logout
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::post(&api_url(path))
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(ApiError::transport)?;

    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(ApiError::transport)
}
