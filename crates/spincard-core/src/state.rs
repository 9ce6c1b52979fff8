use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::runtime::RuntimeHandle;

struct StateCell<T> {
    value: RefCell<T>,
    runtime: RuntimeHandle,
}

/// Observable value. Every write invalidates the owning runtime so the
/// content reading it is composed again on the next update.
pub struct MutableState<T> {
    cell: Rc<StateCell<T>>,
}

impl<T> MutableState<T> {
    pub fn with_runtime(value: T, runtime: RuntimeHandle) -> Self {
        Self {
            cell: Rc::new(StateCell {
                value: RefCell::new(value),
                runtime,
            }),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.cell.value.borrow())
    }

    pub fn set_value(&self, value: T) {
        *self.cell.value.borrow_mut() = value;
        self.cell.runtime.invalidate();
    }

    /// Replaces the value with the result of `f` applied to the current one.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = self.with(f);
        self.set_value(next);
    }

    pub fn as_state(&self) -> State<T> {
        State {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Clone> MutableState<T> {
    pub fn get(&self) -> T {
        self.cell.value.borrow().clone()
    }
}

impl<T: PartialEq> MutableState<T> {
    /// Writes `value` only when it differs, so equal writes do not trigger
    /// another composition.
    pub fn set_if_changed(&self, value: T) -> bool {
        let changed = *self.cell.value.borrow() != value;
        if changed {
            self.set_value(value);
        }
        changed
    }
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MutableState")
            .field(&*self.cell.value.borrow())
            .finish()
    }
}

/// Read-only view of a [`MutableState`].
pub struct State<T> {
    cell: Rc<StateCell<T>>,
}

impl<T> State<T> {
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.cell.value.borrow())
    }
}

impl<T: Clone> State<T> {
    pub fn get(&self) -> T {
        self.cell.value.borrow().clone()
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}
