use crate::foundation::core::Point;
use crate::foundation::error::{TrackError, TrackResult};

/// Mutable view over a host-owned frame buffer.
///
/// `stride` is the row pitch in pixels and may exceed the visible `width`.
pub struct FrameView<'a, P> {
    pixels: &'a mut [P],
    stride: usize,
    width: i32,
    height: i32,
}

impl<'a, P: Copy> FrameView<'a, P> {
    pub fn new(pixels: &'a mut [P], stride: usize, width: i32, height: i32) -> TrackResult<Self> {
        if width < 0 || height < 0 {
            return Err(TrackError::validation(
                "frame width/height must be non-negative",
            ));
        }
        if stride < width as usize {
            return Err(TrackError::validation(format!(
                "frame stride {stride} is smaller than visible width {width}"
            )));
        }
        Ok(Self {
            pixels,
            stride,
            width,
            height,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn get(&self, x: usize, y: usize) -> Option<P> {
        self.pixels.get(y * self.stride + x).copied()
    }
}

/// Overwrite the pixel under each frame-space point with `color`.
///
/// Coordinates truncate toward zero. The upper clip is inclusive: a point on
/// `x == width` or `y == height` is still written, landing in the stride padding or the
/// next row exactly as the host pipeline expects. Indices past the end of the slice are
/// skipped. Returns the number of pixels written.
pub fn stamp_points<P: Copy>(frame: &mut FrameView<'_, P>, points: &[Point], color: P) -> usize {
    let mut written = 0;
    for p in points {
        let ix = p.x as i32;
        let iy = p.y as i32;
        if ix < 0 || iy < 0 {
            continue;
        }
        if ix > frame.width || iy > frame.height {
            continue;
        }
        let idx = iy as usize * frame.stride + ix as usize;
        if let Some(px) = frame.pixels.get_mut(idx) {
            *px = color;
            written += 1;
        }
    }
    written
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
