//! Application configuration and constants
//!
//! Central values shared by the carousel crates and the desktop runner.
//! Branding and canvas geometry should reference these constants rather than
//! hardcoding values.

/// The application name
pub const APP_NAME: &str = "Enchanted Garden";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default canvas width for one carousel panel
pub const PANEL_WIDTH: u32 = 800;

/// Default canvas height for one carousel panel
pub const PANEL_HEIGHT: u32 = 420;

/// Height of the title band drawn above the image strip
pub const HEADER_HEIGHT: u32 = 64;

/// Default directory the desktop runner resolves image locators against
pub const DEFAULT_IMAGE_ROOT: &str = "public";

/// Full application title (name + version)
pub const fn app_title() -> &'static str {
    APP_NAME
}
