use std::fmt;
use std::rc::Rc;

use spincard_ui_graphics::{Color, DrawPrimitive, EdgeInsets, GraphicsLayer, RoundedCornerShape};

use super::{DrawCommandFn, ModifierElement, Point, Size};
use crate::input::PointerEvent;
use crate::layout::Alignment;
use crate::scroll::ScrollState;

/// Snapshot of a modifier chain, folded into what layout, drawing and
/// pointer dispatch consume.
#[derive(Clone, Default)]
pub struct ModifierSlices {
    padding: EdgeInsets,
    width: Option<f32>,
    height: Option<f32>,
    fill_width: bool,
    fill_height: bool,
    alignment: Option<Alignment>,
    background: Option<Color>,
    shape: Option<RoundedCornerShape>,
    clip_to_bounds: bool,
    graphics_layer: Option<GraphicsLayer>,
    draw_commands: Vec<DrawCommandFn>,
    click_handlers: Vec<Rc<dyn Fn(Point)>>,
    pointer_inputs: Vec<Rc<dyn Fn(PointerEvent)>>,
    vertical_scroll: Option<ScrollState>,
    test_tag: Option<String>,
}

impl ModifierSlices {
    pub(crate) fn collect(elements: &[ModifierElement]) -> Self {
        let mut slices = Self::default();
        for element in elements {
            match element {
                ModifierElement::Padding(insets) => {
                    slices.padding.left += insets.left;
                    slices.padding.top += insets.top;
                    slices.padding.right += insets.right;
                    slices.padding.bottom += insets.bottom;
                }
                ModifierElement::Size { width, height } => {
                    slices.width = slices.width.or(*width);
                    slices.height = slices.height.or(*height);
                }
                ModifierElement::Fill { width, height } => {
                    slices.fill_width |= *width;
                    slices.fill_height |= *height;
                }
                ModifierElement::Align(alignment) => slices.alignment = Some(*alignment),
                ModifierElement::Background(color) => slices.background = Some(*color),
                ModifierElement::Clip(shape) => slices.shape = Some(*shape),
                ModifierElement::ClipToBounds => slices.clip_to_bounds = true,
                ModifierElement::GraphicsLayer(layer) => slices.graphics_layer = Some(*layer),
                ModifierElement::DrawBehind(command) => {
                    slices.draw_commands.push(command.clone())
                }
                ModifierElement::Clickable(handler) => {
                    slices.click_handlers.push(handler.clone())
                }
                ModifierElement::PointerInput(handler) => {
                    slices.pointer_inputs.push(handler.clone())
                }
                ModifierElement::VerticalScroll(state) => {
                    slices.vertical_scroll = Some(state.clone())
                }
                ModifierElement::TestTag(tag) => slices.test_tag = Some(tag.clone()),
            }
        }
        slices
    }

    pub fn padding(&self) -> EdgeInsets {
        self.padding
    }

    pub fn width(&self) -> Option<f32> {
        self.width
    }

    pub fn height(&self) -> Option<f32> {
        self.height
    }

    pub fn fills_width(&self) -> bool {
        self.fill_width
    }

    pub fn fills_height(&self) -> bool {
        self.fill_height
    }

    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn shape(&self) -> Option<RoundedCornerShape> {
        self.shape
    }

    pub fn clips_to_bounds(&self) -> bool {
        self.clip_to_bounds
    }

    pub fn graphics_layer(&self) -> Option<GraphicsLayer> {
        self.graphics_layer
    }

    pub fn draw_commands(&self) -> &[DrawCommandFn] {
        &self.draw_commands
    }

    /// Runs every draw command against a node of `size`.
    pub fn draw_primitives(&self, size: Size) -> Vec<DrawPrimitive> {
        self.draw_commands
            .iter()
            .flat_map(|command| command(size))
            .collect()
    }

    pub fn click_handlers(&self) -> &[Rc<dyn Fn(Point)>] {
        &self.click_handlers
    }

    pub fn pointer_inputs(&self) -> &[Rc<dyn Fn(PointerEvent)>] {
        &self.pointer_inputs
    }

    pub fn has_pointer_handlers(&self) -> bool {
        !self.click_handlers.is_empty() || !self.pointer_inputs.is_empty()
    }

    pub fn vertical_scroll(&self) -> Option<&ScrollState> {
        self.vertical_scroll.as_ref()
    }

    pub fn test_tag(&self) -> Option<&str> {
        self.test_tag.as_deref()
    }
}

impl fmt::Debug for ModifierSlices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierSlices")
            .field("padding", &self.padding)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("fill_width", &self.fill_width)
            .field("fill_height", &self.fill_height)
            .field("background", &self.background)
            .field("shape", &self.shape)
            .field("clip_to_bounds", &self.clip_to_bounds)
            .field("graphics_layer", &self.graphics_layer)
            .field("draw_commands", &self.draw_commands.len())
            .field("click_handlers", &self.click_handlers.len())
            .field("pointer_inputs", &self.pointer_inputs.len())
            .field("vertical_scroll", &self.vertical_scroll)
            .field("test_tag", &self.test_tag)
            .finish()
    }
}
