use super::{Color, Modifier, ModifierElement, RoundedCornerShape};

impl Modifier {
    /// Fill the node's bounds with `color`, following the clip shape if one
    /// is set anywhere in the chain.
    pub fn background(self, color: Color) -> Self {
        self.then(Self::with_element(ModifierElement::Background(color)))
    }

    /// Round the node's background and its hit area.
    pub fn clip(self, shape: RoundedCornerShape) -> Self {
        self.then(Self::with_element(ModifierElement::Clip(shape)))
    }
}
