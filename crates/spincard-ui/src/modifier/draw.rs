use std::rc::Rc;

use spincard_ui_graphics::{DrawPrimitive, DrawScope, DrawScopeDefault};

use super::{Modifier, ModifierElement, Size};

pub type DrawCommandFn = Rc<dyn Fn(Size) -> Vec<DrawPrimitive>>;

impl Modifier {
    /// Draw behind the node's content, in node-local coordinates.
    pub fn draw_behind(self, f: impl Fn(&mut dyn DrawScope) + 'static) -> Self {
        let command: DrawCommandFn = Rc::new(move |size: Size| {
            let mut scope = DrawScopeDefault::new(size);
            f(&mut scope);
            scope.into_primitives()
        });
        self.then(Self::with_element(ModifierElement::DrawBehind(command)))
    }
}
