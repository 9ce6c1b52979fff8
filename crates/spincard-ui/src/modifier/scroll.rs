use super::{Modifier, ModifierElement};
use crate::scroll::ScrollState;

impl Modifier {
    /// Scroll the content vertically with `state`. Children are measured
    /// with unbounded height, offset by the scroll position and clipped to
    /// this node's bounds. Mouse wheel and primary-button drags move the
    /// position.
    pub fn vertical_scroll(self, state: ScrollState) -> Self {
        let input_state = state.clone();
        self.then(Self::with_element(ModifierElement::VerticalScroll(state)))
            .pointer_input(move |event| input_state.on_pointer_event(&event))
            .clip_to_bounds()
    }

    /// Children draw and receive pointer input only inside this node's
    /// bounds, after its graphics layer is applied.
    pub fn clip_to_bounds(self) -> Self {
        self.then(Self::with_element(ModifierElement::ClipToBounds))
    }
}
