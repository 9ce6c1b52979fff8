#![allow(non_snake_case)]

use spincard_core::NodeId;

use crate::composer::emit_node;
use crate::layout::MeasurePolicy;
use crate::modifier::Modifier;

/// The primitive every widget is built on: one node, one measure policy.
pub fn Layout<F>(modifier: Modifier, policy: MeasurePolicy, content: F) -> NodeId
where
    F: FnOnce(),
{
    emit_node(modifier, policy, content)
}
