use tracing::trace;

use super::Interactor;
use crate::config::NavigationConfig;
use crate::host::{Projection, ViewportContext};
use crate::input::PointerEvent;
use crate::ui::Point2;

const DISTANCE_SCALE: f64 = 0.1;

#[derive(Clone, Debug)]
pub struct ZoomInteractor {
    zoom_factor: f64,
    min_distance: f64,
    prev_pos: Option<Point2>,
}

impl Default for ZoomInteractor {
    fn default() -> Self {
        Self::new(&NavigationConfig::default())
    }
}

impl ZoomInteractor {
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            zoom_factor: config.zoom_factor,
            min_distance: config.min_view_distance,
            prev_pos: None,
        }
    }

    fn zoomed(&self, value: f64, zoom_delta: f64) -> f64 {
        (value + zoom_delta * value * DISTANCE_SCALE).max(self.min_distance)
    }
}

impl Interactor for ZoomInteractor {
    fn pointer_down(&mut self, _ctx: &mut ViewportContext, event: &PointerEvent) {
        self.prev_pos = Some(event.pos);
    }

    fn pointer_move(&mut self, ctx: &mut ViewportContext, event: &PointerEvent) {
        let Some(prev) = self.prev_pos else {
            return;
        };

        let delta = prev - event.pos;
        let zoom_delta = delta.y as f64 * self.zoom_factor;

        match ctx.view.projection {
            Projection::Perspective => {
                ctx.view.view_distance = self.zoomed(ctx.view.view_distance, zoom_delta);
            }
            Projection::Orthographic { scale } => {
                ctx.view.projection = Projection::Orthographic {
                    scale: self.zoomed(scale, zoom_delta),
                };
            }
        }
        ctx.tag_redraw();
        trace!(zoom_delta, distance = ctx.view.view_distance, "zoom");

        self.prev_pos = Some(event.pos);
    }

    fn release(&mut self) {
        self.prev_pos = None;
    }

    fn is_live(&self) -> bool {
        self.prev_pos.is_some()
    }
}
