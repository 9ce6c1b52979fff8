//! Spacer widget implementation

#![allow(non_snake_case)]

use crate::layout::MeasurePolicy;
use crate::modifier::{Modifier, Size};
use crate::widgets::Layout;
use spincard_core::NodeId;

/// Creates an empty node of the specified size.
pub fn Spacer(size: Size) -> NodeId {
    Layout(
        Modifier::empty().size(size.width, size.height),
        MeasurePolicy::Leaf,
        || {},
    )
}
