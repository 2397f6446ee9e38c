use super::*;

fn spec(width: i32, height: i32, thickness: i32) -> BoxSpec {
    BoxSpec {
        width,
        height,
        thickness,
    }
}

fn enumerate_bands(w: i32, h: i32, l: i32) -> usize {
    let mut n = 0;
    for _y in (-h / 2)..=(l - h / 2) {
        for _x in (-w / 2)..=(w - w / 2) {
            n += 1;
        }
    }
    for _y in (h / 2 - l)..=(h / 2) {
        for _x in (-w / 2)..=(w - w / 2) {
            n += 1;
        }
    }
    for _y in (1 + l - h / 2)..=(h / 2 - l - 1) {
        for _x in (-w / 2)..=(l - w / 2) {
            n += 1;
        }
        for _x in (w - l - w / 2)..=(w - w / 2) {
            n += 1;
        }
    }
    n
}

#[test]
fn ten_by_ten_thickness_two_matches_band_enumeration() {
    let pts = outline_points(spec(10, 10, 2));
    // Inclusive bounds: top/bottom 3 rows x 11 columns, sides 5 rows x 3 columns.
    assert_eq!(pts.len(), 33 + 33 + 15 + 15);
    assert_eq!(pts.len(), enumerate_bands(10, 10, 2));
}

#[test]
fn counts_match_enumeration_for_odd_and_even_sizes() {
    for (w, h, l) in [(11, 10, 1), (10, 11, 3), (13, 17, 2), (1024, 10, 10), (10, 1024, 1)] {
        assert_eq!(outline_points(spec(w, h, l)).len(), enumerate_bands(w, h, l));
    }
}

#[test]
fn bands_are_emitted_top_bottom_left_right() {
    let pts = outline_points(spec(10, 10, 2));
    assert_eq!(pts[0], PixelPos::new(-5, -5));
    assert_eq!(pts[10], PixelPos::new(5, -5));
    assert_eq!(pts[33], PixelPos::new(-5, 3));
    assert_eq!(pts[66], PixelPos::new(-5, -2));
    assert_eq!(pts[69], PixelPos::new(-5, -1));
    assert_eq!(*pts.last().unwrap(), PixelPos::new(5, 2));
}

#[test]
fn thick_border_leaves_side_bands_empty() {
    let pts = outline_points(spec(20, 10, 5));
    // Top rows -5..=0, bottom rows 0..=5; the middle row is drawn twice.
    assert_eq!(pts.len(), (6 + 6) * 21);
    assert!(pts.iter().all(|p| p.x >= -10 && p.x <= 10));
}

#[test]
fn every_point_stays_inside_outer_box() {
    let pts = outline_points(spec(31, 17, 3));
    assert!(
        pts.iter()
            .all(|p| p.x >= -15 && p.x <= 16 && p.y >= -8 && p.y <= 8)
    );
}

#[test]
fn zero_thickness_still_draws_single_pixel_edges() {
    let pts = outline_points(spec(10, 10, 0));
    // Top/bottom one row of 11, sides rows -4..=4 with one column each.
    assert_eq!(pts.len(), 11 + 11 + 9 + 9);
}
