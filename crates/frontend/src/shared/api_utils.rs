//! API utilities for frontend-backend communication

/// Port of the backend server (`[server] port` in config.toml)
pub const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Built from the current window location with the backend port, so the
/// page works both from the backend itself and from `trunk serve`.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Encode `key=value` pairs; pairs with an empty value are skipped
pub fn query_string(params: &[(&str, String)]) -> String {
    params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
