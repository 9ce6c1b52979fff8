//! Animation system for Spincard
//!
//! Provides time-based animations with easing curves and spring physics,
//! driven by the runtime's frame clock.

mod animation;
mod easing;

pub use animation::{Animatable, AnimationSpec, AnimationType, SpringSpec};
pub use easing::Easing;

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
