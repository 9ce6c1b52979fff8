//! Geometric primitives: Point, Size, Rect, insets, rounded shapes and outlines

use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn distance_to(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Shrinks the rect by `insets`; never produces a negative size.
    pub fn inset(&self, insets: EdgeInsets) -> Self {
        Self::new(
            self.x + insets.left,
            self.y + insets.top,
            (self.width - insets.horizontal_sum()).max(0.0),
            (self.height - insets.vertical_sum()).max(0.0),
        )
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }

    /// Overlap of two rects, or `None` when they share no area.
    pub fn intersect(&self, other: Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = (self.x + self.width).min(other.x + other.width);
        let bottom = (self.y + self.height).min(other.y + other.height);
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// Padding values for each edge of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub fn uniform(all: f32) -> Self {
        Self {
            left: all,
            top: all,
            right: all,
            bottom: all,
        }
    }

    pub fn from_components(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn horizontal_sum(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_sum(&self) -> f32 {
        self.top + self.bottom
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedCornerShape {
    radii: CornerRadii,
}

impl RoundedCornerShape {
    pub fn uniform(radius: f32) -> Self {
        Self {
            radii: CornerRadii::uniform(radius),
        }
    }

    /// Radii clamped so opposite corners never overlap.
    pub fn resolve(&self, width: f32, height: f32) -> CornerRadii {
        let limit = (width / 2.0).min(height / 2.0).max(0.0);
        let clamp = |radius: f32| radius.clamp(0.0, limit);
        CornerRadii {
            top_left: clamp(self.radii.top_left),
            top_right: clamp(self.radii.top_right),
            bottom_right: clamp(self.radii.bottom_right),
            bottom_left: clamp(self.radii.bottom_left),
        }
    }

    pub fn radii(&self) -> CornerRadii {
        self.radii
    }
}

const ARC_SEGMENTS: usize = 8;

/// Clockwise outline of `rect` with rounded corners, in the same space as
/// `rect`. Corners with a zero radius contribute a single vertex.
pub fn rounded_rect_outline(rect: Rect, shape: Option<RoundedCornerShape>) -> Vec<Point> {
    let radii = shape
        .map(|shape| shape.resolve(rect.width, rect.height))
        .unwrap_or_default();
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;
    // (corner center, radius, start angle) walking clockwise in screen space.
    let corners = [
        (
            Point::new(rect.x + radii.top_left, rect.y + radii.top_left),
            radii.top_left,
            2.0 * FRAC_PI_2,
        ),
        (
            Point::new(right - radii.top_right, rect.y + radii.top_right),
            radii.top_right,
            3.0 * FRAC_PI_2,
        ),
        (
            Point::new(right - radii.bottom_right, bottom - radii.bottom_right),
            radii.bottom_right,
            0.0,
        ),
        (
            Point::new(rect.x + radii.bottom_left, bottom - radii.bottom_left),
            radii.bottom_left,
            FRAC_PI_2,
        ),
    ];

    let mut outline = Vec::with_capacity(corners.len() * (ARC_SEGMENTS + 1));
    for (center, radius, start) in corners {
        if radius <= 0.0 {
            outline.push(center);
            continue;
        }
        for step in 0..=ARC_SEGMENTS {
            let angle = start + FRAC_PI_2 * step as f32 / ARC_SEGMENTS as f32;
            outline.push(Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ));
        }
    }
    outline
}

/// Even-odd containment test.
pub fn point_in_polygon(polygon: &[Point], x: f32, y: f32) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut previous = polygon[polygon.len() - 1];
    for &current in polygon {
        if (current.y > y) != (previous.y > y) {
            let crossing =
                current.x + (y - current.y) * (previous.x - current.x) / (previous.y - current.y);
            if x < crossing {
                inside = !inside;
            }
        }
        previous = current;
    }
    inside
}

/// Axis-aligned bounds of a point set, `None` when empty.
pub fn polygon_bounds(polygon: &[Point]) -> Option<Rect> {
    let first = polygon.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for point in &polygon[1..] {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }
    Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
}
