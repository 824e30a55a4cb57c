//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::config;

/// Get the base URL for API requests
///
/// The legal chat backend lives on a fixed origin (`http://localhost:8000`
/// unless overridden at build time, see [`super::config`]).
pub fn api_base() -> String {
    config().api_base.clone()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&endpoints::chat_path(&id, "What is a tort?"));
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
