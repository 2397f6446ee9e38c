pub use kurbo::{Affine, Point, Vec2};

/// Host frame number. Not unique across a pose log: scrubbing back re-emits frames.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Integer pixel coordinate: frame space for the pointer, box-local space for outline points.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(f64::from(self.x), f64::from(self.y))
    }
}

/// Outline dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BoxSpec {
    pub width: i32,
    pub height: i32,
    pub thickness: i32,
}

/// User-facing straight RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Luma/chroma pixel as laid out by YC editing hosts.
///
/// `y` spans `0..=4096`, `cb`/`cr` span `-2048..=2048`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelYc {
    pub y: i16,
    pub cb: i16,
    pub cr: i16,
}

impl PixelYc {
    /// BT.601 conversion into the host's 12-bit YC range.
    pub fn from_rgb(c: Rgb8) -> Self {
        let r = f64::from(c.r);
        let g = f64::from(c.g);
        let b = f64::from(c.b);
        let scale = 4096.0 / 255.0;
        let y = (0.299 * r + 0.587 * g + 0.114 * b) * scale;
        let cb = (-0.168_736 * r - 0.331_264 * g + 0.5 * b) * scale;
        let cr = (0.5 * r - 0.418_688 * g - 0.081_312 * b) * scale;
        Self {
            y: y.round() as i16,
            cb: cb.round() as i16,
            cr: cr.round() as i16,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
