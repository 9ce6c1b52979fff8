//! UI primitives for Spincard
//!
//! Pointer events, modifier chains, the composer that turns widget calls
//! into a node tree, single-pass layout of that tree, and vertical
//! scrolling.

#![allow(non_snake_case)]

pub mod composer;
pub mod input;
pub mod layout;
pub mod modifier;
pub mod scroll;
pub mod text;
pub mod widgets;

pub use composer::{compose, emit_node, is_composing, LayoutNode, ROOT_NODE_ID};
pub use input::{
    PointerButton, PointerButtons, PointerEvent, PointerEventKind, DRAG_THRESHOLD,
};
pub use layout::{
    log_layout_tree, measure_layout, Alignment, HorizontalAlignment, LayoutBox, LayoutNodeData,
    LayoutNodeKind, LayoutTree, LinearArrangement, MeasurePolicy, VerticalAlignment,
};
pub use modifier::{DrawCommandFn, Modifier, ModifierSlices};
pub use scroll::ScrollState;
pub use text::{
    measure_text, reset_text_measurer, set_text_measurer, TextMeasurer, TextMetrics, TextStyle,
};
pub use widgets::*;

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod layout_tests;

#[cfg(test)]
#[path = "tests/slider_tests.rs"]
mod slider_tests;
