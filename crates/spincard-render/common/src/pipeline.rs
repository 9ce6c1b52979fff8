//! Scene building pipeline: copies a layout tree into a render scene.

use spincard_ui::{LayoutBox, LayoutNodeKind};
use spincard_ui_graphics::{polygon_bounds, DrawPrimitive, Point, Rect};

use crate::scene::{LayerStack, LayerTransform, Scene};

/// Walks the tree parents-first, so later siblings paint and hit-test above
/// earlier ones.
pub fn render_layout_tree(root: &LayoutBox, scene: &mut Scene) {
    render_layout_node(root, &LayerStack::default(), None, scene);
}

fn render_layout_node(
    layout: &LayoutBox,
    parent_layers: &LayerStack,
    clip: Option<Rect>,
    scene: &mut Scene,
) {
    let slices = layout.node_data.modifier_slices();
    let rect = layout.rect;
    let layers = match slices.graphics_layer() {
        Some(layer) => parent_layers.push(LayerTransform {
            layer,
            bounds: rect,
        }),
        None => parent_layers.clone(),
    };
    let alpha = layers.alpha();

    if rect.width > 0.0 && rect.height > 0.0 {
        if let Some(color) = slices.background() {
            let color = color.with_alpha(color.a() * alpha);
            scene.push_shape(rect, color, slices.shape(), layers.clone(), clip);
        }

        for primitive in slices.draw_primitives(rect.size()) {
            let (local, color, shape) = match primitive {
                DrawPrimitive::Rect { rect, color } => (rect, color, None),
                DrawPrimitive::RoundRect { rect, color, shape } => (rect, color, Some(shape)),
            };
            let placed = local.translate(rect.x, rect.y);
            let color = color.with_alpha(color.a() * alpha);
            scene.push_shape(placed, color, shape, layers.clone(), clip);
        }
    }

    if let LayoutNodeKind::Text { text, style } = &layout.node_data.kind {
        // Text follows its layer's translation but is not rotated or scaled.
        let origin = layers.apply(Point::new(rect.x, rect.y));
        let placed = Rect::new(origin.x, origin.y, rect.width, rect.height);
        let color = style.color.with_alpha(style.color.a() * alpha);
        scene.push_text(placed, text.clone(), color, style.font_size, clip);
    }

    if slices.has_pointer_handlers() {
        scene.push_hit(
            layout.node_id,
            rect,
            slices.shape(),
            layers.clone(),
            clip,
            slices.click_handlers().to_vec(),
            slices.pointer_inputs().to_vec(),
            slices.test_tag().map(str::to_string),
        );
    }

    let child_clip = if slices.clips_to_bounds() {
        let bounds = polygon_bounds(&layers.outline(rect, None));
        let visible = match clip {
            Some(outer) => bounds.and_then(|bounds| bounds.intersect(outer)),
            None => bounds,
        };
        // Nothing of the children can show.
        let Some(visible) = visible else {
            return;
        };
        Some(visible)
    } else {
        clip
    };

    for child in &layout.children {
        render_layout_node(child, &layers, child_clip, scene);
    }
}
