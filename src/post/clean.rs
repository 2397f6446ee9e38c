//! Clean-up passes over an exported pose log.

use std::collections::HashMap;

use crate::log::record::LogRecord;

/// Pose sample in floating point, ready for smoothing and simplification.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrackPoint {
    pub frame: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub angle: f64,
}

impl From<LogRecord> for TrackPoint {
    fn from(r: LogRecord) -> Self {
        Self {
            frame: r.frame.0 as f64,
            x: f64::from(r.x),
            y: f64::from(r.y),
            width: f64::from(r.width),
            height: f64::from(r.height),
            angle: f64::from(r.angle),
        }
    }
}

/// Collapse repeated frame numbers, keeping the last record written for each frame.
///
/// Output order is the order in which frames first appear in the log.
pub fn dedupe_frames(records: &[LogRecord]) -> Vec<LogRecord> {
    let mut slot_of: HashMap<u64, usize> = HashMap::new();
    let mut out: Vec<LogRecord> = Vec::new();
    for r in records {
        match slot_of.get(&r.frame.0) {
            Some(&i) => out[i] = *r,
            None => {
                slot_of.insert(r.frame.0, out.len());
                out.push(*r);
            }
        }
    }
    out
}

/// Centered rolling mean of `x` and `y` over `window` samples.
///
/// Partial windows at either end average whatever samples exist. Even windows reach one
/// sample further back than forward. `window < 2` leaves the points unchanged.
pub fn smooth_positions(points: &mut [TrackPoint], window: usize) {
    if window < 2 || points.is_empty() {
        return;
    }
    let offset = (window - 1) / 2;
    let src: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
    let last = src.len() - 1;
    for (i, p) in points.iter_mut().enumerate() {
        let hi = (i + offset).min(last);
        let lo = (i + offset + 1).saturating_sub(window);
        let n = (hi - lo + 1) as f64;
        let (sx, sy) = src[lo..=hi]
            .iter()
            .fold((0.0, 0.0), |(ax, ay), (x, y)| (ax + x, ay + y));
        p.x = sx / n;
        p.y = sy / n;
    }
}

/// Area of the triangle spanned by three samples in `(x, y, frame)` space.
pub fn triangle_area(a: &TrackPoint, b: &TrackPoint, c: &TrackPoint) -> f64 {
    let u = [b.x - a.x, b.y - a.y, b.frame - a.frame];
    let v = [c.x - a.x, c.y - a.y, c.frame - a.frame];
    let cross = [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ];
    (cross[0] * cross[0] + cross[1] * cross[1] + cross[2] * cross[2]).sqrt() / 2.0
}

/// Drop samples that add little to the path shape.
///
/// Each interior sample is ranked by the triangle it forms with its neighbours; a rank
/// never decreases between passes. Samples ranked zero or below `threshold` are removed
/// until a pass removes nothing. Endpoints are always kept.
pub fn simplify(points: &[TrackPoint], threshold: f64) -> Vec<TrackPoint> {
    let mut kept: Vec<(TrackPoint, Option<f64>)> = points.iter().map(|p| (*p, None)).collect();
    loop {
        let n = kept.len();
        if n < 3 {
            break;
        }
        for i in 1..n - 1 {
            let area = triangle_area(&kept[i - 1].0, &kept[i].0, &kept[i + 1].0);
            let rank = kept[i].1.map_or(area, |r| r.max(area));
            kept[i].1 = Some(rank);
        }
        let before = kept.len();
        kept.retain(|(_, rank)| match rank {
            None => true,
            Some(r) => *r != 0.0 && *r >= threshold,
        });
        if kept.len() == before {
            break;
        }
    }
    kept.into_iter().map(|(p, _)| p).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/post/clean.rs"]
mod tests;
