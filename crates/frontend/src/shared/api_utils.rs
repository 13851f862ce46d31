//! API utilities for frontend-backend communication
//!
//! The API is served from the same origin as the application.

/// Get the base URL for API requests
///
/// Returns the page origin like "http://localhost:8080", or an empty
/// string (relative URLs) when the window is not available.
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/categories/3");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
