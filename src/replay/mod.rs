//! Headless sessions driven by JSON scripts.

/// Script format, scripted host and the replay driver.
pub mod script;
