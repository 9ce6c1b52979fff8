//! Card widget implementation

#![allow(non_snake_case)]

use super::layout::Layout;
use crate::layout::{Alignment, MeasurePolicy};
use crate::modifier::{Color, Modifier, RoundedCornerShape};
use spincard_core::NodeId;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardSpec {
    pub background_color: Color,
    pub shape: RoundedCornerShape,
}

impl Default for CardSpec {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            shape: RoundedCornerShape::uniform(4.0),
        }
    }
}

/// Clickable surface filled with the spec's color and clipped to its shape.
///
/// The caller's modifier comes first, so its size and graphics layer apply
/// to the whole card, hit area included.
pub fn Card<C, F>(modifier: Modifier, spec: CardSpec, on_click: C, content: F) -> NodeId
where
    C: Fn() + 'static,
    F: FnOnce(),
{
    let modifier = modifier
        .clip(spec.shape)
        .background(spec.background_color)
        .clickable(move |_point| on_click());
    Layout(
        modifier,
        MeasurePolicy::Box {
            alignment: Alignment::TOP_START,
        },
        content,
    )
}
