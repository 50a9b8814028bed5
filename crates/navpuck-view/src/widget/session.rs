use std::sync::Arc;

use navpuck_base::Result;
use tracing::debug;

use super::button::{ActionRegistry, Button, ButtonTemplate};
use super::drawer::WidgetDrawer;
use super::layout::WidgetLayout;
use crate::config::WidgetConfig;
use crate::host::{DrawHandle, DrawHooks, ViewportContext};
use crate::input::{EventKind, ModalResult, PointerEvent};
use crate::overlay::OverlayPainter;
use crate::ui::{Point2, Vec2};

/// Read-only configuration of one widget kind, shared by all its sessions.
#[derive(Clone, Debug)]
pub struct WidgetTemplate {
    buttons: Vec<Button>,
    pub layout: WidgetLayout,
    pub drawer: WidgetDrawer,
    pub button_size: Vec2,
    pub auto_dismiss_distance: f32,
}

impl WidgetTemplate {
    /// Resolves every button action against `registry`. An action with no
    /// registered callback fails here rather than on click.
    pub fn build(
        templates: &[ButtonTemplate],
        registry: &ActionRegistry,
        config: &WidgetConfig,
    ) -> Result<Self> {
        config.validate()?;
        let buttons = templates
            .iter()
            .map(|template| template.resolve(registry))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            buttons,
            layout: WidgetLayout::new(config.layout, config.spacing),
            drawer: WidgetDrawer::default(),
            button_size: config.button_size(),
            auto_dismiss_distance: config.auto_dismiss_distance,
        })
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn instantiate(&self) -> Vec<Button> {
        self.buttons.clone()
    }
}

/// Overridable behaviour of a widget kind.
pub trait WidgetDelegate {
    /// Runs once per activation, before layout. `layout` and `drawer` are the
    /// session's own copies of the template's, so changes last until the
    /// widget closes.
    fn setup(
        &mut self,
        _ctx: &ViewportContext,
        _buttons: &mut [Button],
        _layout: &mut WidgetLayout,
        _drawer: &mut WidgetDrawer,
    ) {
    }

    fn on_button_clicked(&mut self, ctx: &mut ViewportContext, button: &Button) -> ModalResult {
        match &button.callback {
            Some(callback) => callback(ctx, button),
            None => ModalResult::Finished,
        }
    }

    fn on_cancel(&mut self, _ctx: &mut ViewportContext) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultDelegate;

impl WidgetDelegate for DefaultDelegate {}

/// How the last session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Dispatching { index: usize },
    Cancelled,
    AutoDismissed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetPhase {
    Closed,
    Running,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Hover {
    Button(usize),
    Empty,
    Dismiss,
}

/// Live state of one open widget.
#[derive(Clone, Debug)]
pub struct WidgetSession {
    active: bool,
    pointer: Point2,
    initial_pointer: Point2,
    hovered: Option<usize>,
    buttons: Vec<Button>,
    layout: WidgetLayout,
    drawer: WidgetDrawer,
    draw_handle: Option<DrawHandle>,
}

impl WidgetSession {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn initial_pointer(&self) -> Point2 {
        self.initial_pointer
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn layout(&self) -> &WidgetLayout {
        &self.layout
    }

    pub fn drawer(&self) -> &WidgetDrawer {
        &self.drawer
    }

    pub fn hit_test(&self, point: Point2) -> Option<usize> {
        self.buttons
            .iter()
            .position(|button| button.contains_point(point))
    }

    fn update_hover(&mut self, auto_dismiss_distance: f32) -> Hover {
        if let Some(idx) = self.hit_test(self.pointer) {
            self.hovered = Some(idx);
            return Hover::Button(idx);
        }
        if self.pointer.distance(self.initial_pointer) > auto_dismiss_distance {
            return Hover::Dismiss;
        }
        self.hovered = None;
        Hover::Empty
    }

    fn teardown(&mut self, hooks: &mut DrawHooks) {
        if let Some(handle) = self.draw_handle.take() {
            hooks.remove(handle);
        }
        self.active = false;
    }
}

/// Modal controller for a floating button widget.
pub struct WidgetOperator {
    template: Arc<WidgetTemplate>,
    delegate: Box<dyn WidgetDelegate>,
    session: Option<WidgetSession>,
    last_end: Option<SessionEnd>,
}

impl WidgetOperator {
    pub fn new(template: Arc<WidgetTemplate>) -> Self {
        Self::with_delegate(template, Box::new(DefaultDelegate))
    }

    pub fn with_delegate(template: Arc<WidgetTemplate>, delegate: Box<dyn WidgetDelegate>) -> Self {
        Self {
            template,
            delegate,
            session: None,
            last_end: None,
        }
    }

    pub fn template(&self) -> &WidgetTemplate {
        &self.template
    }

    pub fn session(&self) -> Option<&WidgetSession> {
        self.session.as_ref()
    }

    pub fn phase(&self) -> WidgetPhase {
        match &self.session {
            Some(session) if session.active => WidgetPhase::Running,
            _ => WidgetPhase::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase() == WidgetPhase::Running
    }

    pub fn last_end(&self) -> Option<SessionEnd> {
        self.last_end
    }

    /// Opens the widget at the event position.
    pub fn invoke(&mut self, ctx: &mut ViewportContext, event: &PointerEvent) -> ModalResult {
        if self.is_open() {
            return ModalResult::PassThrough;
        }
        if ctx.region.is_none() {
            debug!("no region, widget not opened");
            return ModalResult::Cancelled;
        }

        let origin = event.pos;
        let mut buttons = self.template.instantiate();
        let mut layout = self.template.layout;
        let mut drawer = self.template.drawer;
        self.delegate.setup(ctx, &mut buttons, &mut layout, &mut drawer);
        layout.calculate_positions(&mut buttons, origin, self.template.button_size);

        let handle = ctx.draw_hooks.add();
        self.session = Some(WidgetSession {
            active: true,
            pointer: origin,
            initial_pointer: origin,
            hovered: None,
            buttons,
            layout,
            drawer,
            draw_handle: Some(handle),
        });
        self.last_end = None;
        ctx.tag_redraw();
        debug!(x = origin.x, y = origin.y, "widget opened");
        ModalResult::Running
    }

    pub fn modal(&mut self, ctx: &mut ViewportContext, event: &PointerEvent) -> ModalResult {
        let threshold = self.template.auto_dismiss_distance;
        let Some(session) = self.session.as_mut() else {
            return ModalResult::PassThrough;
        };

        session.pointer = event.pos;
        let hover = session.update_hover(threshold);
        if hover == Hover::Dismiss {
            self.close(ctx, SessionEnd::AutoDismissed);
            self.delegate.on_cancel(ctx);
            return ModalResult::Cancelled;
        }
        ctx.tag_redraw();

        if event.is_press(EventKind::PrimaryButton) {
            let Hover::Button(index) = hover else {
                self.close(ctx, SessionEnd::Cancelled);
                self.delegate.on_cancel(ctx);
                return ModalResult::Cancelled;
            };
            let button = session.buttons[index].clone();
            self.close(ctx, SessionEnd::Dispatching { index });
            debug!(index, label = %button.label, "widget button clicked");
            return self.delegate.on_button_clicked(ctx, &button);
        }

        if event.is_press(EventKind::SecondaryButton) || event.is_press(EventKind::Escape) {
            self.close(ctx, SessionEnd::Cancelled);
            self.delegate.on_cancel(ctx);
            return ModalResult::Cancelled;
        }

        ModalResult::Running
    }

    /// Host-initiated teardown. Safe to call on a closed widget.
    pub fn cancel(&mut self, ctx: &mut ViewportContext) {
        if self.session.is_none() {
            return;
        }
        self.close(ctx, SessionEnd::Cancelled);
        self.delegate.on_cancel(ctx);
    }

    /// Paints the open session; a no-op once the session is torn down.
    pub fn draw<P: OverlayPainter>(&self, painter: &mut P) {
        let Some(session) = self.session.as_ref().filter(|session| session.active) else {
            return;
        };
        session
            .drawer
            .draw_widget(painter, &session.buttons, session.hovered);
    }

    fn close(&mut self, ctx: &mut ViewportContext, end: SessionEnd) {
        if let Some(mut session) = self.session.take() {
            session.teardown(&mut ctx.draw_hooks);
        }
        self.last_end = Some(end);
        ctx.tag_redraw();
        debug!(?end, "widget closed");
    }
}

impl std::fmt::Debug for WidgetOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetOperator")
            .field("template", &self.template)
            .field("session", &self.session)
            .field("last_end", &self.last_end)
            .finish()
    }
}
