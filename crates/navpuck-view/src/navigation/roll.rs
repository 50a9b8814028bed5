use tracing::trace;

use super::Interactor;
use crate::config::NavigationConfig;
use crate::host::ViewportContext;
use crate::input::PointerEvent;
use crate::math::{
    Quaternion, Vector2, current_roll_angle, mouse_vector_to_center, rotate_local_z,
    signed_angle, snap_to_nearest_angle,
};

#[derive(Clone, Copy, Debug)]
struct RollGesture {
    rotation: Quaternion,
    initial_angle: f64,
    // None until the pointer leaves the viewport center.
    initial_vector: Option<Vector2>,
    delta: f64,
}

#[derive(Clone, Debug)]
pub struct RollInteractor {
    snap_angle: f64,
    gesture: Option<RollGesture>,
}

impl Default for RollInteractor {
    fn default() -> Self {
        Self::new(&NavigationConfig::default())
    }
}

impl RollInteractor {
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            snap_angle: config.snap_angle(),
            gesture: None,
        }
    }

    /// Roll applied by the latest move of the live gesture.
    pub fn delta(&self) -> Option<f64> {
        self.gesture.map(|gesture| gesture.delta)
    }

    pub fn initial_angle(&self) -> Option<f64> {
        self.gesture.map(|gesture| gesture.initial_angle)
    }
}

impl Interactor for RollInteractor {
    fn pointer_down(&mut self, ctx: &mut ViewportContext, event: &PointerEvent) {
        let Some(region) = ctx.region else {
            self.gesture = None;
            return;
        };
        let rotation = ctx.view.view_rotation;
        self.gesture = Some(RollGesture {
            rotation,
            initial_angle: current_roll_angle(rotation),
            initial_vector: mouse_vector_to_center(event.pos, region.center()),
            delta: 0.0,
        });
    }

    fn pointer_move(&mut self, ctx: &mut ViewportContext, event: &PointerEvent) {
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        let Some(region) = ctx.region else {
            return;
        };
        let Some(current) = mouse_vector_to_center(event.pos, region.center()) else {
            return;
        };
        let Some(initial) = gesture.initial_vector else {
            gesture.initial_vector = Some(current);
            return;
        };

        let mut delta = signed_angle(initial, current);
        if event.modifiers.precise() {
            delta = snap_to_nearest_angle(delta, gesture.initial_angle, self.snap_angle);
        }
        gesture.delta = delta;

        ctx.view.view_rotation = rotate_local_z(gesture.rotation, delta);
        ctx.tag_redraw();
        trace!(delta, "roll");
    }

    fn release(&mut self) {
        self.gesture = None;
    }

    fn is_live(&self) -> bool {
        self.gesture.is_some()
    }
}
