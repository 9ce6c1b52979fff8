use std::collections::HashMap;
use std::rc::Rc;

use spincard_core::NodeId;
use spincard_ui::{PointerEvent, PointerEventKind, DRAG_THRESHOLD};
use spincard_ui_graphics::{
    point_in_polygon, polygon_bounds, rounded_rect_outline, Color, GraphicsLayer, Point, Rect,
    RoundedCornerShape,
};

use crate::{HitTestTarget, RenderScene};

/// A node's graphics layer together with the bounds it pivots around.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerTransform {
    pub layer: GraphicsLayer,
    pub bounds: Rect,
}

impl LayerTransform {
    pub fn apply(&self, point: Point) -> Point {
        let local = Point::new(point.x - self.bounds.x, point.y - self.bounds.y);
        let moved = self.layer.transform_point(local, self.bounds.size());
        Point::new(moved.x + self.bounds.x, moved.y + self.bounds.y)
    }
}

/// Graphics layers from the outermost ancestor down to the node itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerStack(Vec<LayerTransform>);

impl LayerStack {
    pub fn push(&self, transform: LayerTransform) -> Self {
        let mut layers = self.0.clone();
        layers.push(transform);
        Self(layers)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn alpha(&self) -> f32 {
        self.0
            .iter()
            .map(|transform| transform.layer.alpha.clamp(0.0, 1.0))
            .product()
    }

    /// Innermost layer first, then each enclosing one.
    pub fn apply(&self, point: Point) -> Point {
        self.0
            .iter()
            .rev()
            .fold(point, |point, transform| transform.apply(point))
    }

    /// Outline of `rect` rounded by `shape`, as it appears on screen.
    pub fn outline(&self, rect: Rect, shape: Option<RoundedCornerShape>) -> Vec<Point> {
        let mut outline = rounded_rect_outline(rect, shape);
        if !self.is_empty() {
            for point in &mut outline {
                *point = self.apply(*point);
            }
        }
        outline
    }
}

#[derive(Clone, Debug)]
pub struct DrawShape {
    pub rect: Rect,
    pub color: Color,
    pub shape: Option<RoundedCornerShape>,
    pub layers: LayerStack,
    /// Screen-space rect the shape is cut to.
    pub clip: Option<Rect>,
    pub z_index: usize,
}

impl DrawShape {
    pub fn outline(&self) -> Vec<Point> {
        self.layers.outline(self.rect, self.shape)
    }

    /// Screen-space bounds after every layer transform.
    pub fn bounds(&self) -> Option<Rect> {
        polygon_bounds(&self.outline())
    }
}

#[derive(Clone, Debug)]
pub struct TextDraw {
    pub rect: Rect,
    pub text: String,
    pub color: Color,
    pub font_size: f32,
    pub clip: Option<Rect>,
    pub z_index: usize,
}

#[derive(Clone)]
pub struct HitRegion {
    pub node_id: NodeId,
    pub rect: Rect,
    pub shape: Option<RoundedCornerShape>,
    pub layers: LayerStack,
    /// Pointer positions outside this rect miss the region.
    pub hit_clip: Option<Rect>,
    pub click_actions: Vec<Rc<dyn Fn(Point)>>,
    pub pointer_inputs: Vec<Rc<dyn Fn(PointerEvent)>>,
    pub z_index: usize,
    pub tag: Option<String>,
}

impl HitRegion {
    /// Tests against the node's outline after its graphics layers, so a
    /// rotated card is hit where it is drawn.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        if self.hit_clip.is_some_and(|clip| !clip.contains(x, y)) {
            return false;
        }
        if self.layers.is_empty() && self.shape.is_none() {
            return self.rect.contains(x, y);
        }
        point_in_polygon(&self.layers.outline(self.rect, self.shape), x, y)
    }
}

impl HitTestTarget for HitRegion {
    fn dispatch(&self, event: PointerEvent) {
        let x = event.global_position.x;
        let y = event.global_position.y;
        let kind = event.kind;
        let local = Point::new(x - self.rect.x, y - self.rect.y);
        let local_event = event
            .copy_with_local_position(local)
            .with_target_size(self.rect.size());

        for handler in &self.pointer_inputs {
            if local_event.is_consumed() {
                break;
            }
            handler(local_event.clone());
        }

        // Clicks fire on release, for the topmost clickable only, when the
        // pointer has stayed near the press and is still over the region.
        if kind == PointerEventKind::Up
            && !local_event.is_consumed()
            && !self.click_actions.is_empty()
        {
            let stayed = event
                .down_position
                .is_some_and(|down| down.distance_to(event.global_position) <= DRAG_THRESHOLD);
            if stayed && self.contains(x, y) {
                for action in &self.click_actions {
                    action(local);
                }
            }
            local_event.consume();
        }
    }

    fn node_id(&self) -> NodeId {
        self.node_id
    }
}

pub struct Scene {
    pub shapes: Vec<DrawShape>,
    pub texts: Vec<TextDraw>,
    pub hits: Vec<HitRegion>,
    node_index: HashMap<NodeId, usize>,
    next_z: usize,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            texts: Vec::new(),
            hits: Vec::new(),
            node_index: HashMap::new(),
            next_z: 0,
        }
    }

    fn next_z(&mut self) -> usize {
        let z_index = self.next_z;
        self.next_z += 1;
        z_index
    }

    pub fn push_shape(
        &mut self,
        rect: Rect,
        color: Color,
        shape: Option<RoundedCornerShape>,
        layers: LayerStack,
        clip: Option<Rect>,
    ) {
        let z_index = self.next_z();
        self.shapes.push(DrawShape {
            rect,
            color,
            shape,
            layers,
            clip,
            z_index,
        });
    }

    pub fn push_text(
        &mut self,
        rect: Rect,
        text: String,
        color: Color,
        font_size: f32,
        clip: Option<Rect>,
    ) {
        let z_index = self.next_z();
        self.texts.push(TextDraw {
            rect,
            text,
            color,
            font_size,
            clip,
            z_index,
        });
    }

    #[allow(clippy::too_many_arguments)]
    pub fn push_hit(
        &mut self,
        node_id: NodeId,
        rect: Rect,
        shape: Option<RoundedCornerShape>,
        layers: LayerStack,
        hit_clip: Option<Rect>,
        click_actions: Vec<Rc<dyn Fn(Point)>>,
        pointer_inputs: Vec<Rc<dyn Fn(PointerEvent)>>,
        tag: Option<String>,
    ) {
        if click_actions.is_empty() && pointer_inputs.is_empty() {
            return;
        }
        let z_index = self.next_z();
        self.node_index.insert(node_id, self.hits.len());
        self.hits.push(HitRegion {
            node_id,
            rect,
            shape,
            layers,
            hit_clip,
            click_actions,
            pointer_inputs,
            z_index,
            tag,
        });
    }

    /// Shapes and texts interleaved in paint order.
    pub fn paint_order(&self) -> Vec<PaintItem<'_>> {
        let mut items: Vec<_> = self
            .shapes
            .iter()
            .map(PaintItem::Shape)
            .chain(self.texts.iter().map(PaintItem::Text))
            .collect();
        items.sort_by_key(PaintItem::z_index);
        items
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&HitRegion> {
        self.hits.iter().find(|hit| hit.tag.as_deref() == Some(tag))
    }
}

pub enum PaintItem<'a> {
    Shape(&'a DrawShape),
    Text(&'a TextDraw),
}

impl PaintItem<'_> {
    pub fn z_index(&self) -> usize {
        match self {
            PaintItem::Shape(shape) => shape.z_index,
            PaintItem::Text(text) => text.z_index,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderScene for Scene {
    type HitTarget = HitRegion;

    fn clear(&mut self) {
        self.shapes.clear();
        self.texts.clear();
        self.hits.clear();
        self.node_index.clear();
        self.next_z = 0;
    }

    fn hit_test(&self, x: f32, y: f32) -> Vec<Self::HitTarget> {
        let mut hits: Vec<_> = self
            .hits
            .iter()
            .filter(|hit| hit.contains(x, y))
            .cloned()
            .collect();

        // Sort by z-index descending (top to bottom)
        hits.sort_by(|a, b| b.z_index.cmp(&a.z_index));
        hits
    }

    fn find_target(&self, node_id: NodeId) -> Option<Self::HitTarget> {
        self.node_index
            .get(&node_id)
            .and_then(|&index| self.hits.get(index))
            .cloned()
    }
}
