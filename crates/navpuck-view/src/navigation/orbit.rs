use tracing::trace;

use super::Interactor;
use crate::config::NavigationConfig;
use crate::host::ViewportContext;
use crate::input::PointerEvent;
use crate::math::{EulerXyz, round_to_step};
use crate::ui::Point2;

#[derive(Clone, Debug)]
pub struct OrbitInteractor {
    sensitivity: f64,
    snap_angle: f64,
    prev_pos: Option<Point2>,
}

impl Default for OrbitInteractor {
    fn default() -> Self {
        Self::new(&NavigationConfig::default())
    }
}

impl OrbitInteractor {
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            sensitivity: config.orbit_sensitivity,
            snap_angle: config.snap_angle(),
            prev_pos: None,
        }
    }
}

impl Interactor for OrbitInteractor {
    fn pointer_down(&mut self, _ctx: &mut ViewportContext, event: &PointerEvent) {
        self.prev_pos = Some(event.pos);
    }

    fn pointer_move(&mut self, ctx: &mut ViewportContext, event: &PointerEvent) {
        let Some(prev) = self.prev_pos else {
            return;
        };

        let delta = prev - event.pos;
        let mut euler = EulerXyz::from_quaternion(ctx.view.view_rotation);
        let mut yaw = euler.z + delta.x as f64 * self.sensitivity;
        let mut pitch = euler.x - delta.y as f64 * self.sensitivity;

        // Snap the absolute angles, not the increment.
        if event.modifiers.precise() {
            yaw = round_to_step(yaw, self.snap_angle);
            pitch = round_to_step(pitch, self.snap_angle);
        }
        euler.z = yaw;
        euler.x = pitch;

        ctx.view.view_rotation = euler.to_quaternion();
        ctx.tag_redraw();
        trace!(yaw, pitch, "orbit");

        self.prev_pos = Some(event.pos);
    }

    fn release(&mut self) {
        self.prev_pos = None;
    }

    fn is_live(&self) -> bool {
        self.prev_pos.is_some()
    }
}
