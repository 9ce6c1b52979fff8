//! Vertical scroll position shared between layout and pointer input.
//!
//! Layout writes the scroll range after measuring the content and offsets
//! the children by [`ScrollState::offset`]. Wheel and drag gestures move
//! the position through [`ScrollState::dispatch_raw_delta`]; every change
//! is a state write, so the tree is laid out again on the next update.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use spincard_core::{MutableState, RuntimeHandle};

use crate::input::{PointerButton, PointerEvent, PointerEventKind, DRAG_THRESHOLD};

/// Changes smaller than this are not written.
const MIN_SCROLL_DELTA: f32 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragTracking {
    start_y: f32,
    last_y: f32,
    scrolling: bool,
}

struct ScrollStateInner {
    value: MutableState<f32>,
    max_value: Cell<f32>,
    drag: Cell<Option<DragTracking>>,
}

/// Scroll position in pixels, `0.0` at the top of the content.
#[derive(Clone)]
pub struct ScrollState {
    inner: Rc<ScrollStateInner>,
}

impl ScrollState {
    pub fn new(runtime: &RuntimeHandle) -> Self {
        Self {
            inner: Rc::new(ScrollStateInner {
                value: MutableState::with_runtime(0.0, runtime.clone()),
                max_value: Cell::new(0.0),
                drag: Cell::new(None),
            }),
        }
    }

    pub fn value(&self) -> f32 {
        self.inner.value.get()
    }

    /// How far the content extends past the viewport. Zero until the
    /// scrolling node has been measured.
    pub fn max_value(&self) -> f32 {
        self.inner.max_value.get()
    }

    /// Position clamped to the current range. A shrinking viewport or
    /// content can leave `value` past the end until the next gesture.
    pub fn offset(&self) -> f32 {
        self.value().clamp(0.0, self.max_value())
    }

    /// Scrolls by `delta`, clamped to `[0, max_value]`. Returns the distance
    /// actually scrolled.
    pub fn dispatch_raw_delta(&self, delta: f32) -> f32 {
        let current = self.offset();
        let next = (current + delta).clamp(0.0, self.max_value());
        let actual = next - current;
        if actual.abs() > MIN_SCROLL_DELTA {
            self.inner.value.set_value(next);
            log::trace!("scroll {current:.1} -> {next:.1}");
            actual
        } else {
            0.0
        }
    }

    pub fn scroll_to(&self, position: f32) {
        let target = position.clamp(0.0, self.max_value());
        self.inner.value.set_if_changed(target);
    }

    pub(crate) fn set_max_value(&self, max: f32) {
        self.inner.max_value.set(max.max(0.0));
    }

    /// Wheel events scroll directly. A primary-button drag scrolls once it
    /// has travelled past [`DRAG_THRESHOLD`], and from then on consumes its
    /// moves so clickables below do not see a click.
    pub(crate) fn on_pointer_event(&self, event: &PointerEvent) {
        let y = event.global_position.y;
        match event.kind {
            PointerEventKind::Down => {
                self.inner.drag.set(Some(DragTracking {
                    start_y: y,
                    last_y: y,
                    scrolling: false,
                }));
            }
            PointerEventKind::Move => {
                let Some(mut drag) = self.inner.drag.get() else {
                    return;
                };
                if !event.buttons.contains(PointerButton::Primary) || event.is_consumed() {
                    return;
                }
                if !drag.scrolling && (y - drag.start_y).abs() > DRAG_THRESHOLD {
                    drag.scrolling = true;
                }
                if drag.scrolling {
                    // Content stays under the pointer, including the slop.
                    self.dispatch_raw_delta(drag.last_y - y);
                    drag.last_y = y;
                    event.consume();
                }
                self.inner.drag.set(Some(drag));
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                let was_scrolling = self.inner.drag.take().is_some_and(|drag| drag.scrolling);
                if was_scrolling {
                    event.consume();
                }
            }
            PointerEventKind::Scroll => {
                if event.is_consumed() {
                    return;
                }
                if self.dispatch_raw_delta(event.scroll_delta.y) != 0.0 {
                    event.consume();
                }
            }
        }
    }
}

impl fmt::Debug for ScrollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollState")
            .field("value", &self.value())
            .field("max_value", &self.max_value())
            .finish()
    }
}
