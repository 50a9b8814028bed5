use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use super::button::Button;
use crate::ui::{Point2, Vec2, pos2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    #[default]
    Grid,
    Horizontal,
    Vertical,
    Circular,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidgetLayout {
    pub kind: LayoutKind,
    pub spacing: f32,
}

impl Default for WidgetLayout {
    fn default() -> Self {
        Self::new(LayoutKind::Grid, 8.0)
    }
}

impl WidgetLayout {
    pub const fn new(kind: LayoutKind, spacing: f32) -> Self {
        Self { kind, spacing }
    }

    /// Places `buttons` around `origin` and gives each one `size`.
    pub fn calculate_positions(&self, buttons: &mut [Button], origin: Point2, size: Vec2) {
        let Point2 { x, y } = origin;
        let (width, height) = (size.x, size.y);
        let spacing = self.spacing;

        match self.kind {
            LayoutKind::Grid => {
                let half = spacing * 0.5;
                let positions = [
                    pos2(x - width - half, y - height - half),
                    pos2(x + half, y - height - half),
                    pos2(x - width - half, y + half),
                    pos2(x + half, y + half),
                ];
                for (button, position) in buttons.iter_mut().zip(positions) {
                    button.position = position;
                    button.size = size;
                }
            }
            LayoutKind::Horizontal => {
                for (i, button) in buttons.iter_mut().enumerate() {
                    button.position = pos2(x + i as f32 * (width + spacing), y);
                    button.size = size;
                }
            }
            LayoutKind::Vertical => {
                for (i, button) in buttons.iter_mut().enumerate() {
                    button.position = pos2(x, y + i as f32 * (height + spacing));
                    button.size = size;
                }
            }
            LayoutKind::Circular => {
                if buttons.is_empty() {
                    return;
                }
                let radius = width.max(height) * 1.5;
                let step = TAU / buttons.len() as f32;
                for (i, button) in buttons.iter_mut().enumerate() {
                    let angle = i as f32 * step;
                    button.position = pos2(
                        x + radius * angle.cos() - width * 0.5,
                        y + radius * angle.sin() - height * 0.5,
                    );
                    button.size = size;
                }
            }
        }
    }
}
