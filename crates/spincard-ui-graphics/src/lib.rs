//! Pure math/data for drawing in Spincard
//!
//! Geometry primitives, colors and the graphics layer transform shared by
//! the UI, the app shell and the renderers.

mod color;
mod draw;
mod geometry;
mod layer;

pub use color::*;
pub use draw::*;
pub use geometry::*;
pub use layer::*;

#[cfg(test)]
#[path = "tests/graphics_tests.rs"]
mod tests;
