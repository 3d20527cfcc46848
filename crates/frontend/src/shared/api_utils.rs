//! Endpoint addressing for the question service
//!
//! The service is a separate process reached over HTTP; nothing here
//! performs a request by itself.

/// Base URL of the question service.
///
/// Built from the current window location, with port 3001 where the
/// service listens. Empty string if window is not available.
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
    format!("{}//{}:3001", protocol, hostname)
}

/// Full URL of the question/upload endpoint.
pub fn upload_url() -> String {
    format!("{}/upload", api_base())
}
