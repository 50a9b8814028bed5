use tracing::trace;

use super::Interactor;
use crate::host::ViewportContext;
use crate::input::PointerEvent;
use crate::ui::Point2;

#[derive(Clone, Debug, Default)]
pub struct PanInteractor {
    prev_pos: Option<Point2>,
}

impl Interactor for PanInteractor {
    fn pointer_down(&mut self, _ctx: &mut ViewportContext, event: &PointerEvent) {
        self.prev_pos = Some(event.pos);
    }

    fn pointer_move(&mut self, ctx: &mut ViewportContext, event: &PointerEvent) {
        let Some(prev) = self.prev_pos else {
            return;
        };
        let Some(region) = ctx.region else {
            return;
        };
        if region.width <= 0.0 {
            return;
        }

        let delta = prev - event.pos;
        let view_inv = ctx.view.view_matrix_inverse();
        let right = view_inv.x.truncate();
        let up = view_inv.y.truncate();

        // World units per pixel at the focal distance.
        let factor = ctx.view.view_distance / region.width as f64;
        let pan = right * (delta.x as f64 * factor) + up * (delta.y as f64 * factor);
        ctx.view.view_location += pan;
        ctx.tag_redraw();
        trace!(dx = delta.x, dy = delta.y, "pan");

        self.prev_pos = Some(event.pos);
    }

    fn release(&mut self) {
        self.prev_pos = None;
    }

    fn is_live(&self) -> bool {
        self.prev_pos.is_some()
    }
}
