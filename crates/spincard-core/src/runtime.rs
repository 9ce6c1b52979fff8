use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::frame_clock::FrameClock;

pub type FrameCallbackId = u64;

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<Box<dyn FnOnce(u64) + 'static>>,
}

struct RuntimeInner {
    next_frame_callback_id: Cell<FrameCallbackId>,
    frame_callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    invalidated: Cell<bool>,
    frame_waker: RefCell<Option<Box<dyn Fn()>>>,
}

impl RuntimeInner {
    fn new() -> Self {
        Self {
            next_frame_callback_id: Cell::new(1),
            frame_callbacks: RefCell::new(VecDeque::new()),
            // The first frame always composes.
            invalidated: Cell::new(true),
            frame_waker: RefCell::new(None),
        }
    }

    fn wake(&self) {
        if let Ok(waker) = self.frame_waker.try_borrow() {
            if let Some(waker) = waker.as_ref() {
                waker();
            }
        }
    }

    fn register_frame_callback(&self, callback: Box<dyn FnOnce(u64) + 'static>) -> FrameCallbackId {
        let id = self.next_frame_callback_id.get();
        self.next_frame_callback_id.set(id + 1);
        self.frame_callbacks.borrow_mut().push_back(FrameCallbackEntry {
            id,
            callback: Some(callback),
        });
        self.wake();
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        }
    }

    fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        // Callbacks registered while draining run on the next frame.
        let pending: Vec<_> = {
            let mut callbacks = self.frame_callbacks.borrow_mut();
            callbacks
                .drain(..)
                .filter_map(|mut entry| entry.callback.take())
                .collect()
        };
        let count = pending.len();
        for callback in pending {
            callback(frame_time_nanos);
        }
        count
    }
}

/// Owner of the UI runtime. Dropping it turns every outstanding
/// [`RuntimeHandle`] into a no-op.
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new()),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Installs a callback invoked whenever the runtime wants another frame:
    /// a state write or a new frame callback registration.
    pub fn set_frame_waker(&self, waker: impl Fn() + 'static) {
        *self.inner.frame_waker.borrow_mut() = Some(Box::new(waker));
    }

    pub fn clear_frame_waker(&self) {
        if self.inner.frame_waker.borrow_mut().take().is_some() {
            log::trace!("frame waker cleared");
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

/// Weak, cloneable access to the [`Runtime`].
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }

    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_frame_callback(id);
        }
    }

    /// Runs every pending frame callback with the given frame time.
    /// Returns how many callbacks ran.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        self.inner
            .upgrade()
            .map(|inner| inner.drain_frame_callbacks(frame_time_nanos))
            .unwrap_or(0)
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| !inner.frame_callbacks.borrow().is_empty())
            .unwrap_or(false)
    }

    /// Marks the content as stale so the next update recomposes it.
    pub fn invalidate(&self) {
        if let Some(inner) = self.inner.upgrade() {
            let was_invalid = inner.invalidated.replace(true);
            if !was_invalid {
                inner.wake();
            }
        }
    }

    pub fn is_invalidated(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.invalidated.get())
            .unwrap_or(false)
    }

    pub fn take_invalidation(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.invalidated.replace(false))
            .unwrap_or(false)
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}
