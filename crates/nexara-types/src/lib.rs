//! Foundation types for Nexara Web.
//!
//! Shared by every Nexara crate: the error type, the shell configuration,
//! and the home sentinel that names the built-in start page.

pub mod config;
pub mod error;

/// Reserved URL of the built-in start page.
///
/// Never handed to the content viewer as a network request.
pub const HOME_URL: &str = "nexara://home";

/// Whether `url` is the home sentinel.
pub fn is_home(url: &str) -> bool {
    url == HOME_URL
}
