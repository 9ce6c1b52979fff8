#![allow(non_snake_case)]

use crate::layout::MeasurePolicy;
use crate::modifier::Modifier;
use crate::text::TextStyle;
use crate::widgets::Layout;
use spincard_core::NodeId;

/// Single line of text, sized by the installed text measurer.
pub fn Text(text: impl Into<String>, modifier: Modifier, style: TextStyle) -> NodeId {
    let policy = MeasurePolicy::Text {
        text: text.into(),
        style,
    };
    Layout(modifier, policy, || {})
}
