use super::{GraphicsLayer, Modifier, ModifierElement};

impl Modifier {
    /// Apply a graphics layer with transformations and alpha to this node
    /// and everything inside it. A later layer in the chain replaces an
    /// earlier one.
    ///
    /// Example: `Modifier::empty().graphics_layer(GraphicsLayer { rotation_z: 45.0, ..Default::default() })`
    pub fn graphics_layer(self, layer: GraphicsLayer) -> Self {
        self.then(Self::with_element(ModifierElement::GraphicsLayer(layer)))
    }
}
