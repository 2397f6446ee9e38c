//! Wrapped rotation accumulator driven by keyboard steps.

/// Rotation in integral degrees, kept inside the open interval `(-360, 360)`.
///
/// Wrapping uses a sign-preserving floating remainder, so `-370` becomes `-10` rather than
/// `350`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Angle {
    degree: i32,
}

impl Angle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` degrees, wrap, and return the stored value.
    pub fn add(&mut self, delta: i32) -> i32 {
        let raw = i64::from(self.degree) + i64::from(delta);
        let wrapped = (raw as f64) % 360.0;
        self.degree = wrapped as i32;
        self.degree
    }

    pub fn degrees(self) -> i32 {
        self.degree
    }

    /// Rotation fed to the outline transform.
    ///
    /// Divides by 360, not 180: one degree step turns the outline by half a degree.
    pub fn radians(self) -> f64 {
        f64::from(self.degree) * std::f64::consts::PI / 360.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/angle.rs"]
mod tests;
