use super::{EdgeInsets, Modifier, ModifierElement};

impl Modifier {
    /// Add uniform padding to all sides.
    ///
    /// Example: `Modifier::empty().padding(16.0)`
    pub fn padding(self, p: f32) -> Self {
        self.then(Self::with_element(ModifierElement::Padding(
            EdgeInsets::uniform(p),
        )))
    }

    /// Add padding to each side individually.
    ///
    /// Example: `Modifier::empty().padding_each(10.0, 0.0, 10.0, 10.0)`
    pub fn padding_each(self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        self.then(Self::with_element(ModifierElement::Padding(
            EdgeInsets::from_components(left, top, right, bottom),
        )))
    }
}
