use super::{Modifier, ModifierElement};

impl Modifier {
    /// Occupy the full incoming width.
    pub fn fill_max_width(self) -> Self {
        self.then(Self::with_element(ModifierElement::Fill {
            width: true,
            height: false,
        }))
    }

    /// Occupy the full incoming width and height. An unbounded height falls
    /// back to wrapping the content.
    pub fn fill_max_size(self) -> Self {
        self.then(Self::with_element(ModifierElement::Fill {
            width: true,
            height: true,
        }))
    }
}
