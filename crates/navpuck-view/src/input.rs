use serde::{Deserialize, Serialize};

use super::ui::Point2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub ctrl: bool,
}

impl Modifiers {
    /// Held modifier that turns on angle snapping.
    pub fn precise(&self) -> bool {
        self.shift
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    PrimaryButton,
    SecondaryButton,
    MiddleButton,
    PointerMove,
    Escape,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    Press,
    Release,
    Move,
    Nothing,
}

/// One host event in region coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: EventKind,
    pub action: EventAction,
    pub pos: Point2,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(kind: EventKind, action: EventAction, pos: Point2) -> Self {
        Self {
            kind,
            action,
            pos,
            modifiers: Modifiers::default(),
        }
    }

    pub fn press(kind: EventKind, pos: Point2) -> Self {
        Self::new(kind, EventAction::Press, pos)
    }

    pub fn release(kind: EventKind, pos: Point2) -> Self {
        Self::new(kind, EventAction::Release, pos)
    }

    pub fn moved(pos: Point2) -> Self {
        Self::new(EventKind::PointerMove, EventAction::Move, pos)
    }

    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    pub fn is_press(&self, kind: EventKind) -> bool {
        self.kind == kind && self.action == EventAction::Press
    }

    pub fn is_release(&self, kind: EventKind) -> bool {
        self.kind == kind && self.action == EventAction::Release
    }

    pub fn is_move(&self) -> bool {
        self.kind == EventKind::PointerMove
    }
}

/// Step result handed back to the host event loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalResult {
    Running,
    Finished,
    Cancelled,
    PassThrough,
}

impl ModalResult {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Cancelled)
    }
}
