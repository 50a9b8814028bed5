use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use navpuck_base::{Error, Result, ensure_positive};

use crate::host::ViewportContext;
use crate::input::ModalResult;
use crate::navigation::NavigationKind;
use crate::ui::{Point2, Rect, Vec2, vec2};

pub type ButtonCallback = Arc<dyn Fn(&mut ViewportContext, &Button) -> ModalResult + Send + Sync>;

/// What a button does when clicked; resolved against an [`ActionRegistry`]
/// when the widget template is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Navigate(NavigationKind),
    Custom(&'static str),
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Navigate(kind) => write!(f, "navigate.{}", kind.label().to_lowercase()),
            Self::Custom(name) => write!(f, "custom.{name}"),
        }
    }
}

#[derive(Clone, Default)]
pub struct ActionRegistry {
    actions: HashMap<ActionKind, ButtonCallback>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, kind: ActionKind, callback: F)
    where
        F: Fn(&mut ViewportContext, &Button) -> ModalResult + Send + Sync + 'static,
    {
        self.actions.insert(kind, Arc::new(callback));
    }

    pub fn resolve(&self, kind: ActionKind) -> Result<ButtonCallback> {
        self.actions
            .get(&kind)
            .cloned()
            .ok_or_else(|| Error::UnknownAction(kind.to_string()))
    }

    pub fn contains(&self, kind: ActionKind) -> bool {
        self.actions.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.actions.keys()).finish()
    }
}

/// Configured once per widget kind and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonTemplate {
    pub label: String,
    pub icon: String,
    pub action: Option<ActionKind>,
    pub size: Vec2,
    pub data: BTreeMap<String, serde_json::Value>,
}

impl ButtonTemplate {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: String::new(),
            action: None,
            size: vec2(60.0, 60.0),
            data: BTreeMap::new(),
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn action(mut self, action: ActionKind) -> Self {
        self.action = Some(action);
        self
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    pub fn resolve(&self, registry: &ActionRegistry) -> Result<Button> {
        ensure_positive("button width", self.size.x as f64)?;
        ensure_positive("button height", self.size.y as f64)?;
        let callback = match self.action {
            Some(kind) => Some(registry.resolve(kind)?),
            None => None,
        };
        Ok(Button {
            label: self.label.clone(),
            icon: self.icon.clone(),
            position: Point2::ZERO,
            size: self.size,
            callback,
            data: self.data.clone(),
        })
    }
}

/// A placed, clickable button owned by one widget session.
#[derive(Clone)]
pub struct Button {
    pub label: String,
    pub icon: String,
    pub position: Point2,
    pub size: Vec2,
    pub callback: Option<ButtonCallback>,
    pub data: BTreeMap<String, serde_json::Value>,
}

impl Button {
    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(self.position, self.size)
    }

    /// Edges count as inside.
    pub fn contains_point(&self, point: Point2) -> bool {
        self.bounds().contains(point)
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("position", &self.position)
            .field("size", &self.size)
            .field("callback", &self.callback.is_some())
            .field("data", &self.data)
            .finish()
    }
}
