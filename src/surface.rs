//! Output surface: the drawing sink a tick renders into.
//!
//! The simulation only ever talks to the [`Surface`] trait. Hosts supply
//! their own implementation; [`DrawList`] records commands so hosts and tests
//! can inspect exactly what one tick drew.

use crate::entities::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Red,
    Blue,
    Green,
}

pub trait Surface {
    /// Logical dimensions `(width, height)`.
    fn size(&self) -> (f32, f32);
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// `y` is the text baseline, `font` a CSS-like spec such as `"18px Arial"`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillRect { rect: Rect, color: Color },
    Text { text: String, x: f32, y: f32, font: String },
}

/// A surface that just remembers what it was asked to draw.
#[derive(Clone, Debug)]
pub struct DrawList {
    width: f32,
    height: f32,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Rectangles drawn in the given colour, in draw order.
    pub fn rects(&self, color: Color) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { rect, color: c } if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// All text lines drawn, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for DrawList {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    // A clear discards everything drawn so far, like a real canvas.
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
        });
    }
}
