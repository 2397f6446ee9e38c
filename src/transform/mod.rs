//! Rotation state and the pose transform applied to the outline.

/// Affine pose built from pointer and angle.
pub mod affine;
/// Wrapped rotation angle in whole degrees.
pub mod angle;
