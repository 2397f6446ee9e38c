//! Offline passes over an exported log: de-duplication, smoothing, simplification and
//! `.exo` export.

/// De-duplication, smoothing and simplification.
pub mod clean;
/// Editor object text export.
pub mod exo;
