mod button;
mod drawer;
mod layout;
mod session;
mod view_tools;

pub use button::{ActionKind, ActionRegistry, Button, ButtonCallback, ButtonTemplate};
pub use drawer::WidgetDrawer;
pub use layout::{LayoutKind, WidgetLayout};
pub use session::{
    DefaultDelegate, SessionEnd, WidgetDelegate, WidgetOperator, WidgetPhase, WidgetSession,
    WidgetTemplate,
};
pub use view_tools::{navigation_actions, view_tools_buttons, view_tools_template};
