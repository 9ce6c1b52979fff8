use super::{Modifier, ModifierElement};
use crate::layout::Alignment;

impl Modifier {
    /// Place this node inside a parent `Box` with `alignment` instead of the
    /// box's content alignment.
    pub fn align(self, alignment: Alignment) -> Self {
        self.then(Self::with_element(ModifierElement::Align(alignment)))
    }
}
