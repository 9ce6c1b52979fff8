//! Box widget implementation

#![allow(non_snake_case)]

use super::layout::Layout;
use crate::layout::{Alignment, MeasurePolicy};
use crate::modifier::Modifier;
use spincard_core::NodeId;

/// Where a `Box` places children that carry no `align` modifier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxSpec {
    pub content_alignment: Alignment,
}

impl BoxSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_alignment(mut self, alignment: Alignment) -> Self {
        self.content_alignment = alignment;
        self
    }
}

impl Default for BoxSpec {
    fn default() -> Self {
        Self {
            content_alignment: Alignment::TOP_START,
        }
    }
}

/// Children are drawn in the order they are emitted; the last one is on top.
pub fn Box<F>(modifier: Modifier, spec: BoxSpec, content: F) -> NodeId
where
    F: FnOnce(),
{
    let policy = MeasurePolicy::Box {
        alignment: spec.content_alignment,
    };
    Layout(modifier, policy, content)
}
