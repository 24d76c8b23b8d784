//! Application configuration and constants
//!
//! Central values shared by the store and any front end that embeds it.
//! Branding and sizing should reference these constants rather than
//! hardcoding values.

/// The application name
pub const APP_NAME: &str = "Bookstore Manager";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of slots in the production catalog.
pub const CAPACITY: usize = 10_000;

/// Maximum title length in UTF-8 bytes.
pub const TITLE_CAPACITY: usize = 256;

/// Startup banner, e.g. `Bookstore Manager v0.1.0`.
pub fn banner() -> impl core::fmt::Display {
    Banner
}

struct Banner;

impl core::fmt::Display for Banner {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{APP_NAME} v{APP_VERSION}")
    }
}
