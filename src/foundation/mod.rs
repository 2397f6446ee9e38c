//! Shared value types and the crate error.

/// Pixel, frame and colour value types.
pub mod core;
/// Error type and result alias.
pub mod error;
