use super::*;

#[test]
fn add_wraps_with_sign_of_sum() {
    let mut a = Angle::new();
    assert_eq!(a.add(370), 10);

    let mut b = Angle::new();
    assert_eq!(b.add(-370), -10);
}

#[test]
fn add_keeps_exact_multiples_at_zero() {
    let mut a = Angle::new();
    assert_eq!(a.add(360), 0);
    assert_eq!(a.add(-720), 0);
}

#[test]
fn crossing_zero_flips_sign_without_normalising() {
    let mut a = Angle::new();
    a.add(10);
    assert_eq!(a.add(-30), -20);
    assert_eq!(a.add(-350), -10);
}

#[test]
fn stored_value_stays_in_open_interval() {
    let mut a = Angle::new();
    for (i, step) in [119, -120, 77, 359, -359, 1, 240, -1000, 999].iter().cycle().enumerate() {
        if i > 200 {
            break;
        }
        let d = a.add(*step);
        assert!(d > -360 && d < 360, "angle {d} escaped after step {step}");
    }
}

#[test]
fn radians_use_half_scale_formula() {
    let mut a = Angle::new();
    for step in [0, 12, 90, -45, 300] {
        a.add(step);
        let expected = f64::from(a.degrees()) * std::f64::consts::PI / 360.0;
        assert_eq!(a.radians(), expected);
    }

    let mut quarter = Angle::new();
    quarter.add(180);
    assert!((quarter.radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}
