use std::f64::consts::{FRAC_PI_2, PI};

use navpuck_view::math::{
    EulerXyz, Vector2, Vector3, current_roll_angle, mouse_vector_to_center,
    roll_angle_from_axes, rotate_local_z, round_to_step, signed_angle, snap_to_nearest_angle,
};
use navpuck_view::pos2;

const STEP: f64 = PI / 12.0;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1.0e-9,
        "expected {expected}, got {actual}"
    );
}

/// Up vector for `forward` rolled by `roll` away from the zero-roll up.
fn rolled_up(forward: Vector3, zero_up: Vector3, roll: f64) -> Vector3 {
    let right = forward.cross(zero_up);
    zero_up * roll.cos() - right * roll.sin()
}

#[test]
fn top_view_roll_matches_local_z_rotation() {
    for roll in [-2.5, -1.0, -0.2, 0.0, 0.4, 1.3, 3.0] {
        let rotation = rotate_local_z(EulerXyz::default().to_quaternion(), roll);
        assert_close(current_roll_angle(rotation), roll);
    }
}

#[test]
fn front_view_roll_matches_local_z_rotation() {
    let front = EulerXyz::new(FRAC_PI_2, 0.0, 0.0).to_quaternion();
    assert_close(current_roll_angle(front), 0.0);
    for roll in [-1.7, -0.5, 0.25, 2.0] {
        assert_close(current_roll_angle(rotate_local_z(front, roll)), roll);
    }
}

#[test]
fn upside_down_view_reports_half_turn() {
    let front = EulerXyz::new(FRAC_PI_2, 0.0, 0.0).to_quaternion();
    let flipped = rotate_local_z(front, PI - 1.0e-6);
    assert!((current_roll_angle(flipped).abs() - PI).abs() < 1.0e-5);
}

#[test]
fn roll_is_continuous_across_reference_switch() {
    let roll = 0.3;
    let mut angles = Vec::new();
    for cos_tilt in [0.9985_f64, 0.999, 0.9995] {
        let sin_tilt = (1.0 - cos_tilt * cos_tilt).sqrt();
        let forward = Vector3::new(0.0, sin_tilt, -cos_tilt);
        let zero_up = Vector3::new(0.0, cos_tilt, sin_tilt);
        angles.push(roll_angle_from_axes(rolled_up(forward, zero_up, roll), forward));
    }
    for angle in angles {
        assert!((angle.abs() - roll).abs() < 1.0e-6, "angle {angle}");
    }
}

#[test]
fn small_up_perturbation_gives_small_roll_change() {
    let forward = Vector3::new(0.6, 0.0, -0.8);
    let zero_up = Vector3::new(0.8, 0.0, 0.6);
    let a = roll_angle_from_axes(rolled_up(forward, zero_up, 0.7), forward);
    let b = roll_angle_from_axes(rolled_up(forward, zero_up, 0.7 + 1.0e-4), forward);
    assert!((a - b).abs() < 2.0e-4);
}

#[test]
fn degenerate_up_projection_returns_zero() {
    let forward = Vector3::new(0.0, 0.0, -1.0);
    assert_eq!(roll_angle_from_axes(forward, forward), 0.0);
    assert_eq!(roll_angle_from_axes(forward * -2.0, forward), 0.0);
    assert_eq!(
        roll_angle_from_axes(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0)),
        0.0
    );
}

#[test]
fn snap_is_idempotent() {
    for (angle, initial) in [(0.31, 0.0), (-1.2, 0.4), (2.9, -0.17), (0.05, 1.0)] {
        let once = snap_to_nearest_angle(angle, initial, STEP);
        let twice = snap_to_nearest_angle(once, initial, STEP);
        assert_close(twice, once);
    }
}

#[test]
fn snap_lands_on_absolute_multiples() {
    let initial = 0.1;
    let snapped = snap_to_nearest_angle(0.5, initial, STEP);
    let absolute = (snapped + initial) / STEP;
    assert_close(absolute, absolute.round());
}

#[test]
fn zero_delta_stays_put_for_aligned_start() {
    for k in [-3.0, 0.0, 1.0, 5.0] {
        assert_close(snap_to_nearest_angle(0.0, k * STEP, STEP), 0.0);
    }
}

#[test]
fn zero_delta_realigns_an_unaligned_start() {
    // The absolute angle is snapped, so a start off the grid is pulled onto it.
    assert_close(snap_to_nearest_angle(0.0, 0.1, STEP), -0.1);
}

#[test]
fn non_positive_step_leaves_angle_alone() {
    assert_eq!(snap_to_nearest_angle(0.37, 0.2, 0.0), 0.37);
    assert_eq!(round_to_step(0.37, -1.0), 0.37);
}

#[test]
fn euler_round_trips_through_quaternion() {
    let euler = EulerXyz::new(0.3, -0.4, 1.2);
    let back = EulerXyz::from_quaternion(euler.to_quaternion());
    assert_close(back.x, euler.x);
    assert_close(back.y, euler.y);
    assert_close(back.z, euler.z);
}

#[test]
fn pointer_vector_guards_center() {
    let center = pos2(100.0, 100.0);
    assert!(mouse_vector_to_center(center, center).is_none());
    let v = mouse_vector_to_center(pos2(100.0, 140.0), center).expect("off center");
    assert_close(v.x, 0.0);
    assert_close(v.y, 1.0);
}

#[test]
fn signed_angle_is_clockwise_positive() {
    let right = Vector2::new(1.0, 0.0);
    let up = Vector2::new(0.0, 1.0);
    assert_close(signed_angle(right, up), -FRAC_PI_2);
    assert_close(signed_angle(up, right), FRAC_PI_2);
}
