use super::{Modifier, ModifierElement, Point};
use std::rc::Rc;

impl Modifier {
    /// Make the component clickable. The handler runs on release, with the
    /// release position relative to the node, when the pointer went up over
    /// the node within [`DRAG_THRESHOLD`](crate::input::DRAG_THRESHOLD) of
    /// the press.
    ///
    /// Example: `Modifier::empty().clickable(|pt| log::info!("clicked at {:?}", pt))`
    pub fn clickable(self, handler: impl Fn(Point) + 'static) -> Self {
        self.then(Self::with_element(ModifierElement::Clickable(Rc::new(
            handler,
        ))))
    }
}
