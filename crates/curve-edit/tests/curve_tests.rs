//! End-to-end tests driving the curve editor the way a host dialog does:
//! gamma presets, pointer edits, type switches, and the final lookup table.

use curve_edit::{Curve, CurveLayout, CurveType, DragController, FREE_RESOLUTION};

#[test]
fn test_gamma_preset_to_lookup_table() {
    let mut curve = Curve::unit();
    curve.set_gamma(2.2).unwrap();

    let table = curve.sample(256);
    assert_eq!(table.len(), 256);
    assert!(table.iter().all(|y| (0.0..=1.0).contains(y)));
    // x^(1/2.2) is monotone and lifts the midtones.
    assert!(table.windows(2).all(|w| w[0] <= w[1] + 1e-4));
    assert!(table[128] > 0.5);
}

#[test]
fn test_pointer_edit_bends_the_spline() {
    let mut curve = Curve::unit();
    let layout = CurveLayout::new(256.0, 256.0);
    let mut drag = DragController::new();

    // Pull the midpoint up by a quarter of the widget height.
    drag.on_press(&mut curve, &layout, 128.0, 128.0);
    drag.on_drag(&mut curve, &layout, 128.0, 64.0);
    drag.on_release();

    assert_eq!(curve.control_points().len(), 3);
    let mid = curve.interpolate(0.5);
    assert!((mid - 0.75).abs() < 0.02, "midpoint at {mid}");

    // Endpoints still pin the curve.
    assert!((curve.interpolate(0.0) - 0.0).abs() < 1e-4);
    assert!((curve.interpolate(1.0) - 1.0).abs() < 1e-4);
}

#[test]
fn test_free_hand_round_trip_through_type_switch() {
    let mut curve = Curve::unit();
    curve.set_gamma(2.0).unwrap();
    assert_eq!(curve.curve_type(), CurveType::Free);

    // Back to spline and out again: the broad shape survives.
    curve.set_curve_type(CurveType::Spline);
    curve.set_curve_type(CurveType::Free);

    let y = curve.interpolate(0.25);
    assert!((y - 0.5).abs() < 0.05, "sqrt(0.25) drifted to {y}");
}

#[test]
fn test_explicit_sample_vector_drives_interpolation() {
    let mut curve = Curve::unit();
    let inverted: Vec<f32> = (0..FREE_RESOLUTION)
        .map(|i| 1.0 - i as f32 / (FREE_RESOLUTION - 1) as f32)
        .collect();
    curve.set_sample_vector(&inverted).unwrap();

    assert!((curve.interpolate(0.0) - 1.0).abs() < 1e-3);
    assert!((curve.interpolate(1.0) - 0.0).abs() < 1e-3);
    assert!((curve.interpolate(0.5) - 0.5).abs() < 1e-3);
}

#[test]
fn test_reset_discards_edits() {
    let mut curve = Curve::unit();
    let layout = CurveLayout::new(256.0, 256.0);
    let mut drag = DragController::new();

    drag.on_press(&mut curve, &layout, 64.0, 32.0);
    drag.on_release();
    assert_eq!(curve.control_points().len(), 3);

    curve.reset();
    assert_eq!(curve.control_points().len(), 2);
    assert_eq!(curve.curve_type(), CurveType::Spline);
    assert!((curve.interpolate(0.5) - 0.5).abs() < 1e-5);
}
