use std::sync::Arc;

use navpuck_base::Result;
use tracing::debug;

use crate::config::PuckConfig;
use crate::host::ViewportContext;
use crate::input::{ModalResult, PointerEvent};
use crate::navigation::{GestureOperator, Interactors, NavigationKind};
use crate::overlay::OverlayPainter;
use crate::widget::{WidgetOperator, view_tools_template};

/// Routes host events to whichever operator is live: the open widget first,
/// then the running gesture.
#[derive(Debug)]
pub struct Navigator {
    interactors: Interactors,
    widget: WidgetOperator,
    gesture: Option<GestureOperator>,
}

impl Navigator {
    pub fn new(config: &PuckConfig) -> Result<Self> {
        config.validate()?;
        let template = view_tools_template(&config.widget)?;
        Ok(Self::with_parts(
            Interactors::new(&config.navigation),
            WidgetOperator::new(Arc::new(template)),
        ))
    }

    pub fn with_parts(interactors: Interactors, widget: WidgetOperator) -> Self {
        Self {
            interactors,
            widget,
            gesture: None,
        }
    }

    pub fn interactors(&self) -> &Interactors {
        &self.interactors
    }

    pub fn active_gesture(&self) -> Option<NavigationKind> {
        self.gesture.as_ref().map(GestureOperator::kind)
    }

    pub fn is_idle(&self) -> bool {
        !self.widget.is_open() && self.gesture.is_none()
    }

    pub fn open_widget(&mut self, ctx: &mut ViewportContext, event: &PointerEvent) -> ModalResult {
        if self.gesture.is_some() {
            return ModalResult::PassThrough;
        }
        self.widget.invoke(ctx, event)
    }

    pub fn start_gesture(
        &mut self,
        kind: NavigationKind,
        ctx: &mut ViewportContext,
        event: &PointerEvent,
    ) -> ModalResult {
        if self.widget.is_open() || self.gesture.is_some() {
            return ModalResult::PassThrough;
        }
        let mut operator = GestureOperator::new(kind);
        let result = operator.invoke(ctx, event, &mut self.interactors);
        if result == ModalResult::Running {
            self.gesture = Some(operator);
        }
        result
    }

    pub fn handle_event(&mut self, ctx: &mut ViewportContext, event: &PointerEvent) -> ModalResult {
        if self.widget.is_open() {
            let result = self.widget.modal(ctx, event);
            if !self.widget.is_open() {
                self.start_requested(ctx, event);
            }
            return result;
        }

        if let Some(gesture) = self.gesture.as_mut() {
            let result = gesture.modal(ctx, event, &mut self.interactors);
            if result.is_terminal() {
                self.gesture = None;
            }
            return result;
        }

        ModalResult::PassThrough
    }

    pub fn cancel(&mut self, ctx: &mut ViewportContext) {
        self.widget.cancel(ctx);
        if let Some(mut gesture) = self.gesture.take() {
            gesture.cancel(&mut self.interactors);
        }
    }

    pub fn draw<P: OverlayPainter>(&self, painter: &mut P) {
        self.widget.draw(painter);
    }

    // Buttons queue gestures; start them with the click that chose them so
    // the user can keep dragging.
    fn start_requested(&mut self, ctx: &mut ViewportContext, event: &PointerEvent) {
        while let Some(kind) = ctx.pop_navigation() {
            if self.gesture.is_some() {
                debug!(%kind, "gesture already running, request dropped");
                continue;
            }
            self.start_gesture(kind, ctx, event);
        }
    }
}
