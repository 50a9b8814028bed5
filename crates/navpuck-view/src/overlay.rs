use super::ui::{Point2, Rect, Rgba};

/// One recorded overlay primitive, in region coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Quad {
        rect: Rect,
        color: Rgba,
        corner_radius: f32,
    },
    Outline {
        rect: Rect,
        color: Rgba,
        thickness: f32,
    },
    /// Text whose baseline starts at `anchor`.
    Label {
        anchor: Point2,
        text: String,
        font_size: f32,
        color: Rgba,
    },
}

/// Sink for overlay primitives. A host forwards them to its GPU path;
/// [`DrawList`] just records them.
pub trait OverlayPainter {
    fn quad(&mut self, rect: Rect, corner_radius: f32, color: Rgba);
    fn outline(&mut self, rect: Rect, thickness: f32, color: Rgba);
    fn label(&mut self, anchor: Point2, text: &str, font_size: f32, color: Rgba);
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn quads(&self) -> Vec<(Rect, Rgba)> {
        self.commands
            .iter()
            .filter_map(|cmd| match *cmd {
                DrawCommand::Quad { rect, color, .. } => Some((rect, color)),
                _ => None,
            })
            .collect()
    }
}

impl OverlayPainter for DrawList {
    fn quad(&mut self, rect: Rect, corner_radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Quad {
            rect,
            color,
            corner_radius,
        });
    }

    fn outline(&mut self, rect: Rect, thickness: f32, color: Rgba) {
        self.commands.push(DrawCommand::Outline {
            rect,
            color,
            thickness,
        });
    }

    fn label(&mut self, anchor: Point2, text: &str, font_size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Label {
            anchor,
            text: text.to_owned(),
            font_size,
            color,
        });
    }
}
