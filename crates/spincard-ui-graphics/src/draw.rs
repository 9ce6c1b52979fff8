use crate::color::Color;
use crate::geometry::{Rect, RoundedCornerShape, Size};

/// A single shape recorded by a draw scope, in node-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Rect {
        rect: Rect,
        color: Color,
    },
    RoundRect {
        rect: Rect,
        color: Color,
        shape: RoundedCornerShape,
    },
}

impl DrawPrimitive {
    pub fn rect(&self) -> Rect {
        match self {
            DrawPrimitive::Rect { rect, .. } | DrawPrimitive::RoundRect { rect, .. } => *rect,
        }
    }
}

pub trait DrawScope {
    fn size(&self) -> Size;
    fn draw_rect(&mut self, color: Color);
    /// Draws a rectangle at the specified position and size.
    fn draw_rect_at(&mut self, rect: Rect, color: Color);
    fn draw_round_rect_at(&mut self, rect: Rect, color: Color, shape: RoundedCornerShape);
    /// Circle of `radius` centered at (`center_x`, `center_y`).
    fn draw_circle(&mut self, center_x: f32, center_y: f32, radius: f32, color: Color) {
        let rect = Rect::new(center_x - radius, center_y - radius, radius * 2.0, radius * 2.0);
        self.draw_round_rect_at(rect, color, RoundedCornerShape::uniform(radius));
    }
    fn into_primitives(self) -> Vec<DrawPrimitive>
    where
        Self: Sized;
}

#[derive(Default)]
pub struct DrawScopeDefault {
    size: Size,
    primitives: Vec<DrawPrimitive>,
}

impl DrawScopeDefault {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            primitives: Vec::new(),
        }
    }
}

impl DrawScope for DrawScopeDefault {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_rect(&mut self, color: Color) {
        self.primitives.push(DrawPrimitive::Rect {
            rect: Rect::from_size(self.size),
            color,
        });
    }

    fn draw_rect_at(&mut self, rect: Rect, color: Color) {
        self.primitives.push(DrawPrimitive::Rect { rect, color });
    }

    fn draw_round_rect_at(&mut self, rect: Rect, color: Color, shape: RoundedCornerShape) {
        self.primitives
            .push(DrawPrimitive::RoundRect { rect, color, shape });
    }

    fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }
}
