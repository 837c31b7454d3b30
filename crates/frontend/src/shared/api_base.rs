//! Base URL resolution for API requests.

/// Backend dev server port used when no explicit base URL is configured.
const DEV_API_PORT: u16 = 3000;

/// Get the base URL for API requests.
///
/// Resolution order:
/// 1. `KTV_API_BASE` set at build time (deployment override)
/// 2. current window location with the backend dev port
/// 3. fixed development address (no window, e.g. in tests)
pub fn api_base() -> String {
    if let Some(base) = option_env!("KTV_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return format!("http://127.0.0.1:{}", DEV_API_PORT),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEV_API_PORT)
}

/// Build a full API URL from a path starting with "/api/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
