//! API base-URL selection.
//!
//! The deployed backend is the default; builds may point elsewhere (e.g.
//! a local backend) by setting `EDUCACENTER_API_BASE` at compile time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_API_BASE: &str = "https://educacenter-backend.onrender.com/api";

/// Base URL of the backend API, without a trailing slash.
pub fn api_base() -> &'static str {
    option_env!("EDUCACENTER_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Absolute URL for an API path such as `/login.php`.
pub fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}
