use super::button::Button;
use crate::overlay::OverlayPainter;
use crate::ui::{Rect, Rgba, Vec2, pos2, vec2};

/// Colours and text metrics of a widget. Drawing is a pure function of the
/// session's buttons and hover index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidgetDrawer {
    pub background_color: Rgba,
    pub button_color: Rgba,
    pub button_hover_color: Rgba,
    pub text_color: Rgba,
    pub font_size: f32,
    pub text_offset: Vec2,
    pub background_padding: f32,
}

impl Default for WidgetDrawer {
    fn default() -> Self {
        Self {
            background_color: Rgba::new(51, 51, 51, 230),
            button_color: Rgba::gray(77),
            button_hover_color: Rgba::opaque(102, 102, 153),
            text_color: Rgba::WHITE,
            font_size: 14.0,
            text_offset: vec2(5.0, 15.0),
            background_padding: 4.0,
        }
    }
}

impl WidgetDrawer {
    pub fn draw_button<P: OverlayPainter>(&self, painter: &mut P, button: &Button, hovered: bool) {
        let bounds = button.bounds();
        if hovered {
            painter.quad(bounds, 0.0, self.button_hover_color);
            painter.outline(bounds, 1.0, self.text_color);
        } else {
            painter.quad(bounds, 0.0, self.button_color);
        }
        let anchor = pos2(
            button.position.x + self.text_offset.x,
            button.position.y + self.text_offset.y,
        );
        painter.label(anchor, &button.label, self.font_size, self.text_color);
    }

    pub fn draw_widget<P: OverlayPainter>(
        &self,
        painter: &mut P,
        buttons: &[Button],
        hovered: Option<usize>,
    ) {
        let Some(backdrop) = buttons.iter().map(Button::bounds).reduce(Rect::union) else {
            return;
        };
        painter.quad(
            backdrop.grow(self.background_padding),
            4.0,
            self.background_color,
        );
        for (idx, button) in buttons.iter().enumerate() {
            self.draw_button(painter, button, hovered == Some(idx));
        }
    }
}
