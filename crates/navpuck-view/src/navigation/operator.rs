use tracing::debug;

use super::{Interactors, NavigationKind};
use crate::host::ViewportContext;
use crate::input::{EventKind, ModalResult, PointerEvent};

/// Press-and-hold modal around one interactor: press starts the gesture,
/// moves drive it, release finishes it.
#[derive(Clone, Debug)]
pub struct GestureOperator {
    kind: NavigationKind,
    is_pressed: bool,
}

impl GestureOperator {
    pub fn new(kind: NavigationKind) -> Self {
        Self {
            kind,
            is_pressed: false,
        }
    }

    pub fn kind(&self) -> NavigationKind {
        self.kind
    }

    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    /// Starts the operator. When invoked by a primary press the gesture is
    /// live immediately, otherwise it waits for the next press.
    pub fn invoke(
        &mut self,
        ctx: &mut ViewportContext,
        event: &PointerEvent,
        interactors: &mut Interactors,
    ) -> ModalResult {
        if ctx.region.is_none() {
            debug!(kind = %self.kind, "no region, gesture not started");
            return ModalResult::Cancelled;
        }
        self.is_pressed = event.is_press(EventKind::PrimaryButton);
        if self.is_pressed {
            interactors.get_mut(self.kind).pointer_down(ctx, event);
        }
        debug!(kind = %self.kind, pressed = self.is_pressed, "gesture operator started");
        ModalResult::Running
    }

    pub fn modal(
        &mut self,
        ctx: &mut ViewportContext,
        event: &PointerEvent,
        interactors: &mut Interactors,
    ) -> ModalResult {
        let interactor = interactors.get_mut(self.kind);

        if event.is_press(EventKind::PrimaryButton) {
            self.is_pressed = true;
            interactor.pointer_down(ctx, event);
            return ModalResult::Running;
        }

        if event.is_move() && self.is_pressed {
            interactor.pointer_move(ctx, event);
            return ModalResult::Running;
        }

        if event.is_release(EventKind::PrimaryButton) && self.is_pressed {
            self.is_pressed = false;
            interactor.release();
            debug!(kind = %self.kind, "gesture finished");
            return ModalResult::Finished;
        }

        if event.kind == EventKind::Escape {
            self.is_pressed = false;
            interactor.release();
            debug!(kind = %self.kind, "gesture cancelled");
            return ModalResult::Cancelled;
        }

        if !self.is_pressed && event.is_press(EventKind::SecondaryButton) {
            debug!(kind = %self.kind, "gesture dismissed");
            return ModalResult::Cancelled;
        }

        ModalResult::PassThrough
    }

    pub fn cancel(&mut self, interactors: &mut Interactors) {
        self.is_pressed = false;
        interactors.get_mut(self.kind).release();
    }
}
