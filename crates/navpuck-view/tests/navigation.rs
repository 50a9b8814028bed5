use std::f64::consts::FRAC_PI_2;

use cgmath::{Quaternion, Vector3};
use navpuck_view::math::{EulerXyz, current_roll_angle};
use navpuck_view::navigation::{PanInteractor, RollInteractor, ZoomInteractor};
use navpuck_view::{
    EventKind, GestureOperator, Interactor, Interactors, ModalResult, NavigationConfig,
    NavigationKind, PointerEvent, Projection, Region, RegionView, ViewportContext, pos2,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1.0e-9,
        "expected {expected}, got {actual}"
    );
}

fn top_view(distance: f64) -> RegionView {
    RegionView {
        view_location: Vector3::new(0.0, 0.0, 0.0),
        view_rotation: Quaternion::new(1.0, 0.0, 0.0, 0.0),
        view_distance: distance,
        projection: Projection::Perspective,
    }
}

fn press(x: f32, y: f32) -> PointerEvent {
    PointerEvent::press(EventKind::PrimaryButton, pos2(x, y))
}

fn moved(x: f32, y: f32) -> PointerEvent {
    PointerEvent::moved(pos2(x, y))
}

#[test]
fn pan_moves_focus_against_pointer() {
    let mut ctx = ViewportContext::new(top_view(10.0), Region::new(1000.0, 800.0));
    let mut pan = PanInteractor::default();

    pan.pointer_down(&mut ctx, &press(500.0, 400.0));
    pan.pointer_move(&mut ctx, &moved(450.0, 420.0));

    // factor = 10 / 1000 world units per pixel.
    assert_close(ctx.view.view_location.x, 0.5);
    assert_close(ctx.view.view_location.y, -0.2);
    assert!(ctx.redraw_requested());

    // Deltas are incremental: the next move is measured from (450, 420).
    pan.pointer_move(&mut ctx, &moved(450.0, 420.0));
    assert_close(ctx.view.view_location.x, 0.5);
}

#[test]
fn move_without_press_is_ignored() {
    let mut ctx = ViewportContext::new(top_view(10.0), Region::new(1000.0, 800.0));
    let before = ctx.view;
    let mut interactors = Interactors::default();
    for kind in NavigationKind::ALL {
        interactors
            .get_mut(kind)
            .pointer_move(&mut ctx, &moved(10.0, 10.0).with_shift());
    }
    assert_eq!(ctx.view, before);
    assert!(!ctx.redraw_requested());
}

#[test]
fn release_ends_the_gesture() {
    let mut ctx = ViewportContext::new(top_view(10.0), Region::new(1000.0, 800.0));
    let mut pan = PanInteractor::default();
    pan.pointer_down(&mut ctx, &press(0.0, 0.0));
    assert!(pan.is_live());
    pan.release();
    assert!(!pan.is_live());

    let before = ctx.view;
    pan.pointer_move(&mut ctx, &moved(100.0, 0.0));
    assert_eq!(ctx.view, before);
}

#[test]
fn pan_without_region_is_a_noop() {
    let mut ctx = ViewportContext::detached(top_view(10.0));
    let mut pan = PanInteractor::default();
    pan.pointer_down(&mut ctx, &press(0.0, 0.0));
    pan.pointer_move(&mut ctx, &moved(100.0, 0.0));
    assert_eq!(ctx.view.view_location, Vector3::new(0.0, 0.0, 0.0));
}

#[test]
fn zoom_scales_distance_by_vertical_delta() {
    let mut ctx = ViewportContext::new(top_view(10.0), Region::new(1000.0, 800.0));
    let mut zoom = ZoomInteractor::default();
    zoom.pointer_down(&mut ctx, &press(0.0, 100.0));
    zoom.pointer_move(&mut ctx, &moved(50.0, 90.0));
    // 10 px * 0.02 * 10 * 0.1
    assert_close(ctx.view.view_distance, 10.2);
}

#[test]
fn zoom_clamps_to_minimum_distance() {
    let mut ctx = ViewportContext::new(top_view(0.15), Region::new(1000.0, 800.0));
    let mut zoom = ZoomInteractor::default();
    zoom.pointer_down(&mut ctx, &press(0.0, 0.0));
    zoom.pointer_move(&mut ctx, &moved(0.0, 1000.0));
    assert_close(ctx.view.view_distance, 0.1);
}

#[test]
fn orthographic_zoom_changes_scale_not_distance() {
    let mut view = top_view(10.0);
    view.projection = Projection::Orthographic { scale: 4.0 };
    let mut ctx = ViewportContext::new(view, Region::new(1000.0, 800.0));
    let mut zoom = ZoomInteractor::default();
    zoom.pointer_down(&mut ctx, &press(0.0, 100.0));
    zoom.pointer_move(&mut ctx, &moved(0.0, 90.0));

    assert_close(ctx.view.view_distance, 10.0);
    match ctx.view.projection {
        Projection::Orthographic { scale } => assert_close(scale, 4.08),
        Projection::Perspective => panic!("projection changed"),
    }
}

#[test]
fn orbit_adds_yaw_and_pitch() {
    let start = EulerXyz::new(1.1, 0.0, 0.8);
    let mut view = top_view(10.0);
    view.view_rotation = start.to_quaternion();
    let mut ctx = ViewportContext::new(view, Region::new(1000.0, 800.0));
    let mut interactors = Interactors::default();
    let orbit = interactors.get_mut(NavigationKind::Orbit);

    orbit.pointer_down(&mut ctx, &press(100.0, 100.0));
    orbit.pointer_move(&mut ctx, &moved(90.0, 104.0));

    let euler = EulerXyz::from_quaternion(ctx.view.view_rotation);
    assert_close(euler.z, 0.8 + 10.0 * 0.005);
    assert_close(euler.x, 1.1 + 4.0 * 0.005);
    assert_close(euler.y, 0.0);
}

#[test]
fn precise_orbit_snaps_absolute_angles() {
    let step = 15.0_f64.to_radians();
    let mut view = top_view(10.0);
    view.view_rotation = EulerXyz::new(1.1, 0.0, 0.8).to_quaternion();
    let mut ctx = ViewportContext::new(view, Region::new(1000.0, 800.0));
    let mut interactors = Interactors::default();
    let orbit = interactors.get_mut(NavigationKind::Orbit);

    orbit.pointer_down(&mut ctx, &press(100.0, 100.0));
    orbit.pointer_move(&mut ctx, &moved(90.0, 100.0).with_shift());

    let euler = EulerXyz::from_quaternion(ctx.view.view_rotation);
    assert_close(euler.z, 45.0_f64.to_radians());
    assert_close(euler.x, 60.0_f64.to_radians());
    assert!((euler.z / step - (euler.z / step).round()).abs() < 1.0e-9);
}

#[test]
fn roll_quarter_turn_with_snap_is_unchanged() {
    let mut ctx = ViewportContext::new(top_view(10.0), Region::new(200.0, 200.0));
    let mut roll = RollInteractor::default();

    // Center is (100, 100): start vector (1, 0), end vector (0, 1).
    roll.pointer_down(&mut ctx, &press(150.0, 100.0));
    assert_eq!(roll.initial_angle(), Some(0.0));
    roll.pointer_move(&mut ctx, &moved(100.0, 150.0).with_shift());

    let delta = roll.delta().expect("live gesture");
    assert_close(delta.abs(), FRAC_PI_2);
    assert_close(current_roll_angle(ctx.view.view_rotation), delta);
}

#[test]
fn precise_roll_snaps_to_step() {
    let mut ctx = ViewportContext::new(top_view(10.0), Region::new(200.0, 200.0));
    let mut roll = RollInteractor::default();
    let angle = 50.0_f32.to_radians();
    let target = pos2(100.0 + 50.0 * angle.cos(), 100.0 - 50.0 * angle.sin());

    roll.pointer_down(&mut ctx, &press(150.0, 100.0));
    roll.pointer_move(&mut ctx, &PointerEvent::moved(target));
    assert!((roll.delta().unwrap_or_default() - 50.0_f64.to_radians()).abs() < 1.0e-5);

    roll.pointer_move(&mut ctx, &PointerEvent::moved(target).with_shift());
    assert_close(roll.delta().unwrap_or_default(), 45.0_f64.to_radians());
    assert_close(current_roll_angle(ctx.view.view_rotation), 45.0_f64.to_radians());
}

#[test]
fn roll_from_center_waits_for_a_direction() {
    let mut ctx = ViewportContext::new(top_view(10.0), Region::new(200.0, 200.0));
    let before = ctx.view;
    let mut roll = RollInteractor::default();

    roll.pointer_down(&mut ctx, &press(100.0, 100.0));
    roll.pointer_move(&mut ctx, &moved(100.0, 100.0));
    roll.pointer_move(&mut ctx, &moved(150.0, 100.0));
    assert_eq!(ctx.view, before);

    roll.pointer_move(&mut ctx, &moved(100.0, 150.0));
    assert_close(roll.delta().unwrap_or_default().abs(), FRAC_PI_2);
}

#[test]
fn gesture_operator_drives_press_move_release() {
    let mut ctx = ViewportContext::new(top_view(10.0), Region::new(1000.0, 800.0));
    let mut interactors = Interactors::new(&NavigationConfig::default());
    let mut operator = GestureOperator::new(NavigationKind::Pan);

    let idle = PointerEvent::new(
        EventKind::Other,
        navpuck_view::EventAction::Nothing,
        pos2(0.0, 0.0),
    );
    assert_eq!(operator.invoke(&mut ctx, &idle, &mut interactors), ModalResult::Running);
    assert!(!operator.is_pressed());
    assert_eq!(
        operator.modal(&mut ctx, &moved(10.0, 0.0), &mut interactors),
        ModalResult::PassThrough
    );
    assert_eq!(ctx.view.view_location, Vector3::new(0.0, 0.0, 0.0));

    assert_eq!(
        operator.modal(&mut ctx, &press(500.0, 400.0), &mut interactors),
        ModalResult::Running
    );
    assert_eq!(
        operator.modal(&mut ctx, &moved(400.0, 400.0), &mut interactors),
        ModalResult::Running
    );
    assert_close(ctx.view.view_location.x, 1.0);

    let release = PointerEvent::release(EventKind::PrimaryButton, pos2(400.0, 400.0));
    assert_eq!(
        operator.modal(&mut ctx, &release, &mut interactors),
        ModalResult::Finished
    );
    assert!(!interactors.pan.is_live());
}

#[test]
fn gesture_operator_cancels_on_escape_and_right_click() {
    let mut ctx = ViewportContext::new(top_view(10.0), Region::new(1000.0, 800.0));
    let mut interactors = Interactors::default();

    let mut operator = GestureOperator::new(NavigationKind::Zoom);
    operator.invoke(&mut ctx, &press(0.0, 0.0), &mut interactors);
    assert!(operator.is_pressed());
    let escape = PointerEvent::press(EventKind::Escape, pos2(0.0, 0.0));
    assert_eq!(
        operator.modal(&mut ctx, &escape, &mut interactors),
        ModalResult::Cancelled
    );
    assert!(!interactors.zoom.is_live());

    let mut operator = GestureOperator::new(NavigationKind::Zoom);
    operator.invoke(&mut ctx, &moved(0.0, 0.0), &mut interactors);
    let right = PointerEvent::press(EventKind::SecondaryButton, pos2(0.0, 0.0));
    assert_eq!(
        operator.modal(&mut ctx, &right, &mut interactors),
        ModalResult::Cancelled
    );
}

#[test]
fn gesture_operator_needs_a_region() {
    let mut ctx = ViewportContext::detached(top_view(10.0));
    let mut interactors = Interactors::default();
    let mut operator = GestureOperator::new(NavigationKind::Roll);
    assert_eq!(
        operator.invoke(&mut ctx, &press(0.0, 0.0), &mut interactors),
        ModalResult::Cancelled
    );
    assert!(!interactors.roll.is_live());
}

#[test]
fn view_matrix_inverts_the_camera_transform() {
    let view = RegionView {
        view_location: Vector3::new(1.0, -2.0, 3.5),
        ..RegionView::default()
    };
    let product = view.view_matrix() * view.view_matrix_inverse();
    for col in 0..4 {
        for row in 0..4 {
            let expected = if col == row { 1.0 } else { 0.0 };
            assert!(
                (product[col][row] - expected).abs() < 1.0e-9,
                "[{col}][{row}] = {}",
                product[col][row]
            );
        }
    }

    // The eye sits `view_distance` behind the focal point along the view axis.
    let eye = view.view_matrix_inverse().w.truncate();
    let back = eye - view.view_location;
    assert!((back.x.hypot(back.y).hypot(back.z) - 17.0).abs() < 1.0e-9);
}
