use navpuck_base::Result;

use super::button::{ActionKind, ActionRegistry, ButtonTemplate};
use super::session::WidgetTemplate;
use crate::config::WidgetConfig;
use crate::input::ModalResult;
use crate::navigation::NavigationKind;

/// Pan, Orbit, Zoom and Roll, in grid order: bottom-left, bottom-right,
/// top-left, top-right.
pub fn view_tools_buttons() -> Vec<ButtonTemplate> {
    vec![
        ButtonTemplate::new("Pan")
            .icon("VIEW_PAN")
            .action(ActionKind::Navigate(NavigationKind::Pan)),
        ButtonTemplate::new("Orbit")
            .icon("SPHERE")
            .action(ActionKind::Navigate(NavigationKind::Orbit)),
        ButtonTemplate::new("Zoom")
            .icon("VIEW_ZOOM")
            .action(ActionKind::Navigate(NavigationKind::Zoom)),
        ButtonTemplate::new("Roll")
            .icon("MESH_CIRCLE")
            .action(ActionKind::Navigate(NavigationKind::Roll)),
    ]
}

/// Each navigation action queues its gesture operator on the host.
pub fn navigation_actions() -> ActionRegistry {
    let mut registry = ActionRegistry::new();
    for kind in NavigationKind::ALL {
        registry.register(ActionKind::Navigate(kind), move |ctx, _button| {
            ctx.invoke_navigation(kind);
            ModalResult::Finished
        });
    }
    registry
}

pub fn view_tools_template(config: &WidgetConfig) -> Result<WidgetTemplate> {
    WidgetTemplate::build(&view_tools_buttons(), &navigation_actions(), config)
}
