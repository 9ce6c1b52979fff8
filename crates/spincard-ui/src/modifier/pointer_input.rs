use super::{Modifier, ModifierElement};
use crate::input::PointerEvent;
use std::rc::Rc;

impl Modifier {
    /// Receive raw pointer events targeting this node. Moves and releases of
    /// a gesture that started here keep arriving even when the pointer leaves
    /// the node's bounds.
    pub fn pointer_input(self, handler: impl Fn(PointerEvent) + 'static) -> Self {
        self.then(Self::with_element(ModifierElement::PointerInput(Rc::new(
            handler,
        ))))
    }
}
