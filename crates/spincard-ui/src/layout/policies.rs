use super::{Alignment, HorizontalAlignment, LinearArrangement};
use crate::text::TextStyle;

/// How a node sizes itself and places its children.
#[derive(Clone, Debug, PartialEq)]
pub enum MeasurePolicy {
    /// Children stacked top to bottom.
    Column {
        arrangement: LinearArrangement,
        alignment: HorizontalAlignment,
    },
    /// Children stacked on top of each other, each aligned in the content box.
    Box { alignment: Alignment },
    /// No content of its own; sized by modifiers only.
    Leaf,
    Text { text: String, style: TextStyle },
}
