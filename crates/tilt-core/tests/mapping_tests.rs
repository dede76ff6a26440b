// Host-side tests for the pointer-to-tilt mapping.

use glam::DVec2;
use tilt_core::*;

fn card() -> Geometry {
    Geometry::new(100.0, 50.0, 200.0, 100.0)
}

#[test]
fn tilt_x_endpoints_and_midpoint() {
    for sign in [1.0, -1.0] {
        assert_eq!(tilt_x(0.0, 10.0, sign), 10.0 * sign);
        assert_eq!(tilt_x(1.0, 10.0, sign), -10.0 * sign);
        assert_eq!(tilt_x(0.5, 10.0, sign), 0.0);
    }
}

#[test]
fn tilt_y_endpoints_are_mirrored() {
    for sign in [1.0, -1.0] {
        assert_eq!(tilt_y(0.0, 10.0, sign), -10.0 * sign);
        assert_eq!(tilt_y(1.0, 10.0, sign), 10.0 * sign);
        assert_eq!(tilt_y(0.5, 10.0, sign), 0.0);
    }
}

#[test]
fn tilt_is_linear_in_position() {
    let max = 25.0;
    let step = tilt_x(0.1, max, 1.0) - tilt_x(0.0, max, 1.0);
    for i in 1..10 {
        let x = i as f64 / 10.0;
        let expected = tilt_x(0.0, max, 1.0) + step * i as f64;
        assert!((tilt_x(x, max, 1.0) - expected).abs() < 1e-9, "x={x}");
    }
}

#[test]
fn samples_outside_the_box_are_clamped() {
    let settings = Settings::default();
    let v = compute_values(DVec2::new(-500.0, 900.0), &card(), &Viewport::default(), &settings);
    assert_eq!(v.tilt_x, 10.0);
    assert_eq!(v.tilt_y, 10.0);
    assert_eq!(v.percentage_x, 0.0);
    assert_eq!(v.percentage_y, 100.0);
}

#[test]
fn reverse_flips_both_tilts() {
    let settings = Settings {
        reverse: true,
        ..Settings::default()
    };
    let v = compute_values(DVec2::new(100.0, 50.0), &card(), &Viewport::default(), &settings);
    assert_eq!(v.tilt_x, -10.0);
    assert_eq!(v.tilt_y, 10.0);
}

#[test]
fn tilt_is_rounded_to_two_decimals() {
    let settings = Settings::default();
    // x = 1/3 of the width
    let sample = DVec2::new(100.0 + 200.0 / 3.0, 100.0);
    let v = compute_values(sample, &card(), &Viewport::default(), &settings);
    assert_eq!(v.tilt_x, 3.33);
    assert_eq!(v.tilt_y, 0.0);
}

#[test]
fn degenerate_box_does_not_produce_nan() {
    let settings = Settings::default();
    let flat = Geometry::new(10.0, 10.0, 0.0, 0.0);
    let v = compute_values(DVec2::new(10.0, 10.0), &flat, &Viewport::default(), &settings);
    assert_eq!(v.tilt_x, 0.0);
    assert_eq!(v.tilt_y, 0.0);
    assert!(v.angle.is_finite());
}

#[test]
fn glare_angle_follows_pointer_clockwise_from_top() {
    let g = card();
    let c = g.center();
    assert_eq!(glare_angle(c + DVec2::new(0.0, -10.0), &g), 0.0);
    assert_eq!(glare_angle(c + DVec2::new(10.0, 0.0), &g), 90.0);
    assert_eq!(glare_angle(c + DVec2::new(0.0, 10.0), &g), 180.0);
    assert_eq!(glare_angle(c + DVec2::new(-10.0, 0.0), &g), -90.0);
}

#[test]
fn glare_opacity_scales_with_vertical_position() {
    assert_eq!(glare_opacity(80.0, 50.0), 40.0);
    assert_eq!(glare_opacity(100.0, 1.0), 1.0);
    assert_eq!(glare_opacity(0.0, 1.0), 0.0);
}

#[test]
fn reset_sample_centers_with_zero_start() {
    let settings = Settings::default();
    let s = reset_sample(DVec2::ZERO, &card(), &Viewport::default(), &settings);
    assert_eq!(s, card().center());
    let v = compute_values(s, &card(), &Viewport::default(), &settings);
    assert_eq!((v.tilt_x, v.tilt_y), (0.0, 0.0));
}

#[test]
fn reset_sample_with_zero_max_centers() {
    let settings = Settings {
        max: 0.0,
        ..Settings::default()
    };
    let s = reset_sample(DVec2::new(5.0, 5.0), &card(), &Viewport::default(), &settings);
    assert_eq!(s, card().center());
}

#[test]
fn element_transform_formats_css() {
    let settings = Settings {
        perspective: 500.0,
        ..Settings::default()
    };
    let values = TiltValues {
        tilt_x: 3.5,
        tilt_y: -1.25,
        ..Default::default()
    };
    assert_eq!(
        element_transform(&values, &settings, 1.05),
        "perspective(500px) rotateX(-1.25deg) rotateY(3.5deg) scale3d(1.05, 1.05, 1.05)"
    );
}

#[test]
fn axis_lock_holds_for_any_sample() {
    let x_locked = Settings {
        axis: Some(Axis::X),
        ..Settings::default()
    };
    let y_locked = Settings {
        axis: Some(Axis::Y),
        ..Settings::default()
    };
    for (px, py) in [(100.0, 50.0), (300.0, 150.0), (137.0, 61.0), (-40.0, 400.0)] {
        let v = compute_values(DVec2::new(px, py), &card(), &Viewport::default(), &x_locked);
        assert!(element_transform(&v, &x_locked, 1.0).contains("rotateY(0deg)"));
        let v = compute_values(DVec2::new(px, py), &card(), &Viewport::default(), &y_locked);
        assert!(element_transform(&v, &y_locked, 1.0).contains("rotateX(0deg)"));
    }
}

#[test]
fn values_serialize_with_camel_case_keys() {
    let values = TiltValues {
        tilt_x: 1.0,
        tilt_y: -2.0,
        percentage_x: 45.0,
        percentage_y: 60.0,
        angle: 12.5,
    };
    let json = serde_json::to_value(values).unwrap();
    assert_eq!(json["tiltX"], 1.0);
    assert_eq!(json["tiltY"], -2.0);
    assert_eq!(json["percentageX"], 45.0);
    assert_eq!(json["percentageY"], 60.0);
    assert_eq!(json["angle"], 12.5);
}

#[test]
fn field_names_match_serialized_keys() {
    let values = TiltValues {
        tilt_x: 3.5,
        tilt_y: -1.25,
        percentage_x: 20.0,
        percentage_y: 80.0,
        angle: -90.0,
    };
    let json = serde_json::to_value(values).unwrap();
    let object = json.as_object().unwrap();
    let fields = values.fields();
    assert_eq!(object.len(), fields.len());
    for (key, value) in fields {
        assert_eq!(object[key], value, "{}", key);
    }
}
