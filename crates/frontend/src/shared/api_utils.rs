//! API utilities for frontend-backend communication
//!
//! The API host is derived from the page location; there is no separate
//! configuration file.

/// Port the API server listens on, on the same host as the page.
pub const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available (always the case off wasm)
pub fn api_base() -> String {
    let window = match crate::shared::browser::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("/api/system/auth/login");
/// assert!(url.ends_with("/api/system/auth/login"));
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_without_window_is_relative() {
        assert_eq!(api_url("/api/system/auth/login"), "/api/system/auth/login");
    }
}
