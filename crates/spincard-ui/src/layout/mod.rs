//! Measure and place a composed tree.
//!
//! Layout is a single top-down pass: a node's width and height come from
//! its size modifiers, else from filling the incoming bounds, else from its
//! content plus padding. Column children are measured one after another
//! against the height the earlier ones left over. A node with a vertical
//! scroll modifier measures its children with unbounded height, records
//! how far they overflow and places them shifted by the scroll offset.

mod alignment;
pub mod policies;

pub use alignment::{Alignment, HorizontalAlignment, LinearArrangement, VerticalAlignment};
pub use policies::MeasurePolicy;

use spincard_core::NodeId;
use spincard_ui_graphics::{Point, Rect, Size};

use crate::composer::LayoutNode;
use crate::modifier::ModifierSlices;
use crate::text::{measure_text, TextStyle};

/// Result of running layout for a composed tree.
#[derive(Debug, Clone)]
pub struct LayoutTree {
    root: LayoutBox,
}

impl LayoutTree {
    pub fn new(root: LayoutBox) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &LayoutBox {
        &self.root
    }

    pub fn into_root(self) -> LayoutBox {
        self.root
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&LayoutBox> {
        self.root.find(&|node: &LayoutBox| {
            node.node_data.modifier_slices.test_tag() == Some(tag)
        })
    }

    pub fn find_node(&self, node_id: NodeId) -> Option<&LayoutBox> {
        self.root.find(&|node: &LayoutBox| node.node_id == node_id)
    }

    /// Every text node's content with its bounds, in composition order.
    pub fn texts(&self) -> Vec<(Rect, String)> {
        let mut texts = Vec::new();
        self.root.visit(&mut |node| {
            if let Some(text) = node.node_data.text_content() {
                texts.push((node.rect, text.to_string()));
            }
        });
        texts
    }
}

/// Layout information for a single node, in window coordinates.
#[derive(Debug, Clone)]
pub struct LayoutBox {
    pub node_id: NodeId,
    pub rect: Rect,
    pub node_data: LayoutNodeData,
    pub children: Vec<LayoutBox>,
}

impl LayoutBox {
    /// Depth-first, parents before children.
    pub fn visit(&self, f: &mut dyn FnMut(&LayoutBox)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }

    pub fn find(&self, predicate: &dyn Fn(&LayoutBox) -> bool) -> Option<&LayoutBox> {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(predicate))
    }
}

/// Snapshot of the data required to render a layout node.
#[derive(Debug, Clone)]
pub struct LayoutNodeData {
    pub modifier_slices: ModifierSlices,
    pub kind: LayoutNodeKind,
}

impl LayoutNodeData {
    pub fn modifier_slices(&self) -> &ModifierSlices {
        &self.modifier_slices
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            LayoutNodeKind::Text { text, .. } => Some(text),
            LayoutNodeKind::Layout => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNodeKind {
    Layout,
    Text { text: String, style: TextStyle },
}

#[derive(Clone, Copy, Debug)]
struct Constraints {
    max_width: f32,
    max_height: f32,
}

struct Measured<'a> {
    node: &'a LayoutNode,
    slices: ModifierSlices,
    size: Size,
    children: Vec<Measured<'a>>,
}

/// Measures `root` against `viewport` and places it at the origin.
pub fn measure_layout(root: &LayoutNode, viewport: Size) -> LayoutTree {
    let constraints = Constraints {
        max_width: viewport.width.max(0.0),
        max_height: viewport.height.max(0.0),
    };
    let measured = measure(root, constraints);
    LayoutTree::new(place(measured, Point::ZERO))
}

fn resolve_extent(fixed: Option<f32>, fill: bool, max: f32) -> Option<f32> {
    let filled = if fill && max.is_finite() { Some(max) } else { None };
    fixed.or(filled).map(|extent| extent.min(max).max(0.0))
}

fn measure(node: &LayoutNode, constraints: Constraints) -> Measured<'_> {
    let slices = node.modifier.slices();
    let padding = slices.padding();
    let width = resolve_extent(slices.width(), slices.fills_width(), constraints.max_width);
    let height = resolve_extent(
        slices.height(),
        slices.fills_height(),
        constraints.max_height,
    );
    let scroll = slices.vertical_scroll().cloned();
    let content_constraints = Constraints {
        max_width: (width.unwrap_or(constraints.max_width) - padding.horizontal_sum()).max(0.0),
        max_height: if scroll.is_some() {
            f32::INFINITY
        } else {
            (height.unwrap_or(constraints.max_height) - padding.vertical_sum()).max(0.0)
        },
    };

    let (content, children) = match &node.policy {
        MeasurePolicy::Column { arrangement, .. } => {
            let mut remaining = content_constraints.max_height;
            let mut children = Vec::with_capacity(node.children.len());
            for child in &node.children {
                let measured = measure(
                    child,
                    Constraints {
                        max_width: content_constraints.max_width,
                        max_height: remaining.max(0.0),
                    },
                );
                remaining -= measured.size.height + arrangement.spacing();
                children.push(measured);
            }
            let spacing = arrangement.spacing() * children.len().saturating_sub(1) as f32;
            let content = Size::new(
                children.iter().map(|c| c.size.width).fold(0.0, f32::max),
                children.iter().map(|c| c.size.height).sum::<f32>() + spacing,
            );
            (content, children)
        }
        MeasurePolicy::Box { .. } => {
            let children: Vec<_> = node
                .children
                .iter()
                .map(|child| measure(child, content_constraints))
                .collect();
            let content = Size::new(
                children.iter().map(|c| c.size.width).fold(0.0, f32::max),
                children.iter().map(|c| c.size.height).fold(0.0, f32::max),
            );
            (content, children)
        }
        MeasurePolicy::Leaf => (Size::ZERO, Vec::new()),
        MeasurePolicy::Text { text, style } => {
            let metrics = measure_text(text, style.font_size);
            (Size::new(metrics.width, metrics.height), Vec::new())
        }
    };

    let wrap = |content: f32, padding: f32, max: f32| (content + padding).min(max).max(0.0);
    let size = Size::new(
        width.unwrap_or_else(|| {
            wrap(
                content.width,
                padding.horizontal_sum(),
                constraints.max_width,
            )
        }),
        height.unwrap_or_else(|| {
            wrap(
                content.height,
                padding.vertical_sum(),
                constraints.max_height,
            )
        }),
    );

    if let Some(scroll) = scroll {
        scroll.set_max_value(content.height + padding.vertical_sum() - size.height);
    }

    Measured {
        node,
        slices,
        size,
        children,
    }
}

fn place(measured: Measured<'_>, origin: Point) -> LayoutBox {
    let Measured {
        node,
        slices,
        size,
        children,
    } = measured;
    let rect = Rect::from_origin_size(origin, size);
    let scroll_offset = slices
        .vertical_scroll()
        .map(|scroll| scroll.offset())
        .unwrap_or(0.0);
    let content = rect.inset(slices.padding()).translate(0.0, -scroll_offset);

    let mut placed = Vec::with_capacity(children.len());
    match &node.policy {
        MeasurePolicy::Column {
            arrangement,
            alignment,
        } => {
            let mut y = content.y;
            for child in children {
                let x = content.x + alignment.align(child.size.width, content.width);
                let height = child.size.height;
                placed.push(place(child, Point::new(x, y)));
                y += height + arrangement.spacing();
            }
        }
        MeasurePolicy::Box { alignment } => {
            for child in children {
                let alignment = child.slices.alignment().unwrap_or(*alignment);
                let x = content.x + alignment.horizontal.align(child.size.width, content.width);
                let y = content.y + alignment.vertical.align(child.size.height, content.height);
                placed.push(place(child, Point::new(x, y)));
            }
        }
        MeasurePolicy::Leaf | MeasurePolicy::Text { .. } => {}
    }

    let kind = match &node.policy {
        MeasurePolicy::Text { text, style } => LayoutNodeKind::Text {
            text: text.clone(),
            style: *style,
        },
        _ => LayoutNodeKind::Layout,
    };

    LayoutBox {
        node_id: node.id,
        rect,
        node_data: LayoutNodeData {
            modifier_slices: slices,
            kind,
        },
        children: placed,
    }
}

/// Writes the tree to the debug log, one node per line.
pub fn log_layout_tree(tree: &LayoutTree) {
    fn log_node(node: &LayoutBox, depth: usize) {
        let rect = node.rect;
        let label = node
            .node_data
            .text_content()
            .map(|text| format!(" \"{text}\""))
            .or_else(|| {
                node.node_data
                    .modifier_slices
                    .test_tag()
                    .map(|tag| format!(" [{tag}]"))
            })
            .unwrap_or_default();
        log::debug!(
            "{:indent$}#{} ({:.1}, {:.1}) {:.1}x{:.1}{}",
            "",
            node.node_id,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            label,
            indent = depth * 2
        );
        for child in &node.children {
            log_node(child, depth + 1);
        }
    }
    log_node(tree.root(), 0);
}
