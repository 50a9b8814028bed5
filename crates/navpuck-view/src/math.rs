use cgmath::{InnerSpace, Matrix3, Rad, Rotation, Rotation3};

use super::ui::Point2;

pub type Vector2 = cgmath::Vector2<f64>;
pub type Vector3 = cgmath::Vector3<f64>;
pub type Quaternion = cgmath::Quaternion<f64>;
pub type Matrix4 = cgmath::Matrix4<f64>;

/// Squared length below which a projected vector is treated as degenerate.
pub const DEGENERATE_LENGTH_SQ: f64 = 1.0e-8;
/// `|forward . Z|` above which the view counts as looking straight along Z.
pub const AXIS_ALIGNED_DOT: f64 = 0.999;

#[derive(Clone, Copy, Debug)]
pub struct ViewAxes {
    pub right: Vector3,
    pub up: Vector3,
    pub forward: Vector3,
}

impl ViewAxes {
    /// World-space axes of a view rotation. The view looks along its local -Z.
    pub fn from_rotation(rotation: Quaternion) -> Self {
        Self {
            right: rotation.rotate_vector(Vector3::unit_x()),
            up: rotation.rotate_vector(Vector3::unit_y()),
            forward: -rotation.rotate_vector(Vector3::unit_z()),
        }
    }
}

/// Euler angles applied X first, then Y, then Z about the fixed world axes,
/// so the rotation is `Rz * Ry * Rx`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EulerXyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EulerXyz {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn from_quaternion(rotation: Quaternion) -> Self {
        let m = Matrix3::from(rotation.normalize());
        // Row/column notation below: r{row}{col}; cgmath stores columns.
        let r00 = m.x.x;
        let r10 = m.x.y;
        let r20 = m.x.z;
        let r11 = m.y.y;
        let r21 = m.y.z;
        let r12 = m.z.y;
        let r22 = m.z.z;

        let cy = (r00 * r00 + r10 * r10).sqrt();
        if cy > 1.0e-6 {
            Self::new(r21.atan2(r22), (-r20).atan2(cy), r10.atan2(r00))
        } else {
            // Gimbal lock: fold the yaw into X.
            Self::new((-r12).atan2(r11), (-r20).atan2(cy), 0.0)
        }
    }

    pub fn to_quaternion(self) -> Quaternion {
        Quaternion::from_angle_z(Rad(self.z))
            * Quaternion::from_angle_y(Rad(self.y))
            * Quaternion::from_angle_x(Rad(self.x))
    }
}

/// Signed roll of a camera around its forward axis, measured against the
/// zero-roll up vector for that forward direction.
pub fn roll_angle_from_axes(up: Vector3, forward: Vector3) -> f64 {
    if forward.magnitude2() < DEGENERATE_LENGTH_SQ {
        return 0.0;
    }
    let forward = forward.normalize();

    let mut reference = Vector3::unit_z();
    if forward.dot(reference).abs() > AXIS_ALIGNED_DOT {
        reference = Vector3::unit_y();
    }
    let mut zero_roll_up = reject(reference, forward);
    if zero_roll_up.magnitude2() < DEGENERATE_LENGTH_SQ {
        zero_roll_up = reject(Vector3::unit_x(), forward);
    }
    let zero_roll_up = zero_roll_up.normalize();
    let zero_roll_right = forward.cross(zero_roll_up).normalize();

    let up_proj = reject(up, forward);
    if up_proj.magnitude2() < DEGENERATE_LENGTH_SQ {
        return 0.0;
    }
    let up_proj = up_proj.normalize();

    let angle = up_proj.dot(zero_roll_up).clamp(-1.0, 1.0).acos();
    if up_proj.dot(zero_roll_right) > 0.0 {
        -angle
    } else {
        angle
    }
}

pub fn current_roll_angle(rotation: Quaternion) -> f64 {
    let axes = ViewAxes::from_rotation(rotation);
    roll_angle_from_axes(axes.up, axes.forward)
}

/// Snaps `angle` so that `angle + initial_angle` lands on a multiple of `step`.
pub fn snap_to_nearest_angle(angle: f64, initial_angle: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return angle;
    }
    ((angle + initial_angle) / step).round() * step - initial_angle
}

pub fn round_to_step(value: f64, step: f64) -> f64 {
    snap_to_nearest_angle(value, 0.0, step)
}

/// Unit vector from the viewport center to the pointer, or `None` when the
/// pointer sits on the center.
pub fn mouse_vector_to_center(pointer: Point2, center: Point2) -> Option<Vector2> {
    let v = Vector2::new((pointer.x - center.x) as f64, (pointer.y - center.y) as f64);
    if v.magnitude2() < DEGENERATE_LENGTH_SQ {
        None
    } else {
        Some(v.normalize())
    }
}

/// Signed angle turning `from` onto `to`; clockwise is positive.
pub fn signed_angle(from: Vector2, to: Vector2) -> f64 {
    let perp = from.y * to.x - from.x * to.y;
    perp.atan2(from.dot(to))
}

/// Rotates `rotation` about its own local Z axis.
pub fn rotate_local_z(rotation: Quaternion, angle: f64) -> Quaternion {
    (rotation * Quaternion::from_angle_z(Rad(angle))).normalize()
}

fn reject(v: Vector3, axis: Vector3) -> Vector3 {
    v - axis * v.dot(axis)
}
