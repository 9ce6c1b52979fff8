use super::{Modifier, ModifierElement};

impl Modifier {
    /// Declare the preferred size of the content to be exactly `width` by
    /// `height`. The first size in a chain wins.
    pub fn size(self, width: f32, height: f32) -> Self {
        self.then(Self::with_element(ModifierElement::Size {
            width: Some(width),
            height: Some(height),
        }))
    }

    pub fn width(self, width: f32) -> Self {
        self.then(Self::with_element(ModifierElement::Size {
            width: Some(width),
            height: None,
        }))
    }

    pub fn height(self, height: f32) -> Self {
        self.then(Self::with_element(ModifierElement::Size {
            width: None,
            height: Some(height),
        }))
    }
}
