use spincard_ui_graphics::{Point, Size};
use std::cell::Cell;
use std::rc::Rc;

/// Travel after which a press stops counting as a click and may start a
/// drag gesture.
pub const DRAG_THRESHOLD: f32 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
    /// Mouse wheel; the amount is in `scroll_delta`.
    Scroll,
}

/// Buttons the desktop platform forwards. Only the primary one drives
/// gestures.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
}

/// Bit set of held buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerButtons(u8);

impl PointerButtons {
    pub const NONE: Self = Self(0);

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn with(mut self, button: PointerButton) -> Self {
        self.insert(button);
        self
    }

    pub fn insert(&mut self, button: PointerButton) {
        self.0 |= 1 << (button as u8);
    }

    pub fn remove(&mut self, button: PointerButton) {
        self.0 &= !(1 << (button as u8));
    }

    pub fn contains(&self, button: PointerButton) -> bool {
        (self.0 & (1 << (button as u8))) != 0
    }
}

impl Default for PointerButtons {
    fn default() -> Self {
        Self::NONE
    }
}

/// Pointer event with shared consumption tracking.
///
/// Handlers consume an event to keep it from reaching the targets below
/// them: a slider drag or a card click stops at the topmost receiver.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Position relative to the receiving node's bounds.
    pub position: Point,
    pub global_position: Point,
    pub buttons: PointerButtons,
    /// Size of the receiving node, zero until the event reaches a target.
    pub target_size: Size,
    /// Wheel travel in pixels, positive toward the end of the content.
    pub scroll_delta: Point,
    /// Global position of the press that started the current gesture.
    pub down_position: Option<Point>,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, global_position: Point) -> Self {
        Self {
            kind,
            position,
            global_position,
            buttons: PointerButtons::NONE,
            target_size: Size::ZERO,
            scroll_delta: Point::ZERO,
            down_position: None,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_target_size(mut self, size: Size) -> Self {
        self.target_size = size;
        self
    }

    pub fn with_scroll_delta(mut self, delta: Point) -> Self {
        self.scroll_delta = delta;
        self
    }

    pub fn with_down_position(mut self, position: Option<Point>) -> Self {
        self.down_position = position;
        self
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }

    /// Creates a copy of this event with a new local position, sharing the
    /// consumption state.
    pub fn copy_with_local_position(&self, position: Point) -> Self {
        Self {
            kind: self.kind,
            position,
            global_position: self.global_position,
            buttons: self.buttons,
            target_size: self.target_size,
            scroll_delta: self.scroll_delta,
            down_position: self.down_position,
            consumed: self.consumed.clone(),
        }
    }
}
