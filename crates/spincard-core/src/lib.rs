//! Core runtime for Spincard: frame clock, frame callbacks and observable state.

mod frame_clock;
mod runtime;
mod state;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{FrameCallbackId, Runtime, RuntimeHandle};
pub use state::{MutableState, State};

/// Identifier of a composed node, stable while the tree keeps its shape.
pub type NodeId = usize;

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod runtime_tests;
