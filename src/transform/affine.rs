//! Rigid outline transform: rotate about the box centre, then move to the pointer.

use crate::foundation::core::{Affine, PixelPos, Point};
use crate::transform::angle::Angle;

/// Build the local-to-frame transform for one pose.
#[inline]
pub fn pose_affine(angle: Angle, pointer: PixelPos) -> Affine {
    Affine::translate(pointer.to_vec2()) * Affine::rotate(angle.radians())
}

/// Map box-local integer points into floating frame coordinates.
pub fn transform_points(affine: Affine, local: &[PixelPos]) -> Vec<Point> {
    local
        .iter()
        .map(|p| affine * Point::new(f64::from(p.x), f64::from(p.y)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
