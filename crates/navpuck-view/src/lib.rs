pub mod config;
pub mod host;
pub mod input;
pub mod math;
pub mod navigation;
mod navigator;
pub mod overlay;
pub mod ui;
pub mod widget;

pub use config::{NavigationConfig, PuckConfig, WidgetConfig};
pub use host::{DrawHandle, DrawHooks, Projection, Region, RegionView, ViewportContext};
pub use input::{EventAction, EventKind, ModalResult, Modifiers, PointerEvent};
pub use navigation::{GestureOperator, Interactor, Interactors, NavigationKind};
pub use navigator::Navigator;
pub use overlay::{DrawCommand, DrawList, OverlayPainter};
pub use ui::{Point2, Rect, Rgba, Vec2, pos2, vec2};
pub use widget::{SessionEnd, WidgetOperator, WidgetPhase};
