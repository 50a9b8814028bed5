use serde::{Deserialize, Serialize};

use crate::config::NavigationConfig;
use crate::host::ViewportContext;
use crate::input::PointerEvent;

mod operator;
mod orbit;
mod pan;
mod roll;
mod zoom;

pub use operator::GestureOperator;
pub use orbit::OrbitInteractor;
pub use pan::PanInteractor;
pub use roll::RollInteractor;
pub use zoom::ZoomInteractor;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationKind {
    Pan,
    Orbit,
    Zoom,
    Roll,
}

impl NavigationKind {
    pub const ALL: [NavigationKind; 4] = [Self::Pan, Self::Orbit, Self::Zoom, Self::Roll];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pan => "Pan",
            Self::Orbit => "Orbit",
            Self::Zoom => "Zoom",
            Self::Roll => "Roll",
        }
    }
}

impl std::fmt::Display for NavigationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A drag gesture that turns pointer motion into camera changes.
///
/// `pointer_move` only acts between a `pointer_down` and the next `release`;
/// outside a gesture it leaves the view untouched.
pub trait Interactor {
    fn pointer_down(&mut self, ctx: &mut ViewportContext, event: &PointerEvent);
    fn pointer_move(&mut self, ctx: &mut ViewportContext, event: &PointerEvent);
    fn release(&mut self);
    fn is_live(&self) -> bool;
}

/// One interactor per gesture kind, shared by every operator that drives it.
#[derive(Clone, Debug)]
pub struct Interactors {
    pub pan: PanInteractor,
    pub orbit: OrbitInteractor,
    pub zoom: ZoomInteractor,
    pub roll: RollInteractor,
}

impl Default for Interactors {
    fn default() -> Self {
        Self::new(&NavigationConfig::default())
    }
}

impl Interactors {
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            pan: PanInteractor::default(),
            orbit: OrbitInteractor::new(config),
            zoom: ZoomInteractor::new(config),
            roll: RollInteractor::new(config),
        }
    }

    pub fn get_mut(&mut self, kind: NavigationKind) -> &mut dyn Interactor {
        match kind {
            NavigationKind::Pan => &mut self.pan,
            NavigationKind::Orbit => &mut self.orbit,
            NavigationKind::Zoom => &mut self.zoom,
            NavigationKind::Roll => &mut self.roll,
        }
    }
}
