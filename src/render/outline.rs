use crate::foundation::core::{BoxSpec, PixelPos};

/// Box-local pixels of a hollow rectangle centred on the origin.
///
/// Bands are emitted top, bottom, left, right, each row-major. Halves use truncating
/// integer division, so odd sizes lean one pixel towards positive coordinates.
/// When `2 * thickness >= height` the side bands are empty.
pub fn outline_points(spec: BoxSpec) -> Vec<PixelPos> {
    let BoxSpec {
        width: w,
        height: h,
        thickness: l,
    } = spec;

    let x0 = -w / 2;
    let x1 = w - w / 2;
    let side_rows = (1 + l - h / 2)..=(h / 2 - l - 1);

    let bands = [
        ((-h / 2)..=(l - h / 2), x0..=x1),
        ((h / 2 - l)..=(h / 2), x0..=x1),
        (side_rows.clone(), x0..=(l - w / 2)),
        (side_rows, (w - l - w / 2)..=x1),
    ];

    let mut out = Vec::with_capacity(bands.iter().map(|(r, c)| span(r) * span(c)).sum());
    for (rows, cols) in bands {
        for y in rows {
            for x in cols.clone() {
                out.push(PixelPos::new(x, y));
            }
        }
    }
    out
}

fn span(r: &std::ops::RangeInclusive<i32>) -> usize {
    if r.is_empty() {
        0
    } else {
        (i64::from(*r.end()) - i64::from(*r.start()) + 1) as usize
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/outline.rs"]
mod tests;
