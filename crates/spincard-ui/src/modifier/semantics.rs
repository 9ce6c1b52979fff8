use super::{Modifier, ModifierElement};

impl Modifier {
    /// Tag used by tests to find this node.
    pub fn test_tag(self, tag: impl Into<String>) -> Self {
        self.then(Self::with_element(ModifierElement::TestTag(tag.into())))
    }
}
