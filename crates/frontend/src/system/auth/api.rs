use contracts::shared::api_error::ApiError;
use contracts::system::auth::{LoginRequest, LoginResponse, LogoutResponse};

use crate::shared::api_client::post_empty;
use crate::shared::api_utils::api_url;
use gloo_net::http::Request;

/// Login with username and PIN; the server sets the session cookie
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let response = Request::post(&api_url("/api/auth/login"))
        .json(request)
        .map_err(|e| ApiError::transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(ApiError::transport)?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::rejected(status, &body));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(ApiError::transport)
}

/// Drop the session cookie
pub async fn logout() -> Result<LogoutResponse, ApiError> {
    post_empty::<LogoutResponse>("/api/auth/logout").await
}
