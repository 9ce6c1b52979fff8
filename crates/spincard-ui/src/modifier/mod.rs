//! Modifier chains for Spincard widgets.
//!
//! A [`Modifier`] is an ordered list of elements. Layout, drawing and
//! pointer dispatch read it through [`ModifierSlices`], which folds the
//! chain into the values each subsystem needs.

mod alignment;
mod background;
mod clickable;
mod draw;
mod fill;
mod graphics_layer;
mod padding;
mod pointer_input;
mod scroll;
mod semantics;
mod size;
mod slices;

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

pub use draw::DrawCommandFn;
pub use slices::ModifierSlices;
pub use spincard_ui_graphics::{
    Color, EdgeInsets, GraphicsLayer, Point, RoundedCornerShape, Size,
};

use crate::input::PointerEvent;
use crate::layout::Alignment;
use crate::scroll::ScrollState;

#[derive(Clone)]
pub(crate) enum ModifierElement {
    Padding(EdgeInsets),
    Size {
        width: Option<f32>,
        height: Option<f32>,
    },
    Fill {
        width: bool,
        height: bool,
    },
    Align(Alignment),
    Background(Color),
    Clip(RoundedCornerShape),
    ClipToBounds,
    GraphicsLayer(GraphicsLayer),
    DrawBehind(DrawCommandFn),
    Clickable(Rc<dyn Fn(Point)>),
    PointerInput(Rc<dyn Fn(PointerEvent)>),
    VerticalScroll(ScrollState),
    TestTag(String),
}

impl ModifierElement {
    fn name(&self) -> &'static str {
        match self {
            ModifierElement::Padding(_) => "padding",
            ModifierElement::Size { .. } => "size",
            ModifierElement::Fill { .. } => "fill",
            ModifierElement::Align(_) => "align",
            ModifierElement::Background(_) => "background",
            ModifierElement::Clip(_) => "clip",
            ModifierElement::ClipToBounds => "clipToBounds",
            ModifierElement::GraphicsLayer(_) => "graphicsLayer",
            ModifierElement::DrawBehind(_) => "drawBehind",
            ModifierElement::Clickable(_) => "clickable",
            ModifierElement::PointerInput(_) => "pointerInput",
            ModifierElement::VerticalScroll(_) => "verticalScroll",
            ModifierElement::TestTag(_) => "testTag",
        }
    }
}

#[derive(Clone, Default)]
pub struct Modifier {
    elements: SmallVec<[ModifierElement; 4]>,
}

impl Modifier {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends `next` after every element of `self`.
    pub fn then(mut self, next: Modifier) -> Self {
        self.elements.extend(next.elements);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn slices(&self) -> ModifierSlices {
        ModifierSlices::collect(&self.elements)
    }

    fn with_element(element: ModifierElement) -> Self {
        let mut elements = SmallVec::new();
        elements.push(element);
        Self { elements }
    }
}

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.elements.iter().map(ModifierElement::name))
            .finish()
    }
}
