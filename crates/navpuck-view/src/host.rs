use std::collections::VecDeque;

use cgmath::{Rotation, Zero};
use navpuck_base::Guid;
use tracing::debug;

use super::math::{EulerXyz, Matrix4, Quaternion, Vector3, current_roll_angle};
use super::navigation::NavigationKind;
use super::ui::{Point2, Rect, pos2, vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    Perspective,
    Orthographic { scale: f64 },
}

/// The host-owned 3D view: a focal point, a rotation around it and the
/// distance the eye sits back along the view axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionView {
    pub view_location: Vector3,
    pub view_rotation: Quaternion,
    pub view_distance: f64,
    pub projection: Projection,
}

impl Default for RegionView {
    fn default() -> Self {
        Self {
            view_location: Vector3::zero(),
            view_rotation: EulerXyz::new(1.11, 0.0, 0.79).to_quaternion(),
            view_distance: 17.0,
            projection: Projection::Perspective,
        }
    }
}

impl RegionView {
    /// Camera-to-world transform: columns 0..3 hold the view's right, up and
    /// backward axes, column 3 the eye position.
    pub fn view_matrix_inverse(&self) -> Matrix4 {
        Matrix4::from_translation(self.view_location)
            * Matrix4::from(self.view_rotation)
            * Matrix4::from_translation(Vector3::new(0.0, 0.0, self.view_distance))
    }

    /// World-to-camera transform, built from the inverted factors of
    /// [`Self::view_matrix_inverse`].
    pub fn view_matrix(&self) -> Matrix4 {
        Matrix4::from_translation(Vector3::new(0.0, 0.0, -self.view_distance))
            * Matrix4::from(self.view_rotation.invert())
            * Matrix4::from_translation(-self.view_location)
    }

    pub fn roll_angle(&self) -> f64 {
        current_roll_angle(self.view_rotation)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub width: f32,
    pub height: f32,
}

impl Region {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point2 {
        self.rect().center()
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(self.width, self.height))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DrawHandle(Guid);

impl std::fmt::Display for DrawHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "draw-hook:{}", self.0)
    }
}

/// Persistent per-viewport draw callbacks, tracked by handle. The host walks
/// the live handles on redraw and asks their owners to paint.
#[derive(Clone, Debug, Default)]
pub struct DrawHooks {
    live: Vec<DrawHandle>,
}

impl DrawHooks {
    pub fn add(&mut self) -> DrawHandle {
        let handle = DrawHandle(Guid::generate());
        self.live.push(handle);
        debug!(%handle, "draw hook added");
        handle
    }

    /// Removing a handle that is already gone is a no-op.
    pub fn remove(&mut self, handle: DrawHandle) -> bool {
        let before = self.live.len();
        self.live.retain(|live| *live != handle);
        let removed = self.live.len() != before;
        if removed {
            debug!(%handle, "draw hook removed");
        }
        removed
    }

    pub fn contains(&self, handle: DrawHandle) -> bool {
        self.live.contains(&handle)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

/// Everything an operator may touch while handling one event.
#[derive(Clone, Debug)]
pub struct ViewportContext {
    pub view: RegionView,
    pub region: Option<Region>,
    pub draw_hooks: DrawHooks,
    redraw_requested: bool,
    pending_navigation: VecDeque<NavigationKind>,
}

impl ViewportContext {
    pub fn new(view: RegionView, region: Region) -> Self {
        Self {
            view,
            region: Some(region),
            draw_hooks: DrawHooks::default(),
            redraw_requested: false,
            pending_navigation: VecDeque::new(),
        }
    }

    /// A context whose region has gone away, e.g. the area was closed.
    pub fn detached(view: RegionView) -> Self {
        Self {
            view,
            region: None,
            draw_hooks: DrawHooks::default(),
            redraw_requested: false,
            pending_navigation: VecDeque::new(),
        }
    }

    pub fn tag_redraw(&mut self) {
        self.redraw_requested = true;
    }

    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Queues a navigation gesture operator for the host to start.
    ///
    /// Nothing here consumes the queue: whoever drives the widget drains it
    /// with [`Self::pop_navigation`] after each widget step. [`crate::Navigator`]
    /// does so whenever the widget closes.
    pub fn invoke_navigation(&mut self, kind: NavigationKind) {
        debug!(?kind, "navigation operator requested");
        self.pending_navigation.push_back(kind);
    }

    pub fn pending_navigation(&self) -> impl Iterator<Item = NavigationKind> + '_ {
        self.pending_navigation.iter().copied()
    }

    pub fn pop_navigation(&mut self) -> Option<NavigationKind> {
        self.pending_navigation.pop_front()
    }
}
