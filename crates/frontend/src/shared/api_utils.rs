//! Backend location for the HTTP data provider.

/// Base URL of the mock server: same host as the page, port 3000.
///
/// Returns an empty string outside a browser, which makes every request
/// relative to the current origin.
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
    format!("{}//{}:3000", protocol, hostname)
}
