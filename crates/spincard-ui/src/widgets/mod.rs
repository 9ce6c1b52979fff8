//! UI Widget components

pub mod box_widget;
pub mod card;
pub mod column;
pub mod layout;
pub mod slider;
pub mod spacer;
pub mod text;

pub use box_widget::*;
pub use card::*;
pub use column::*;
pub use layout::*;
pub use slider::*;
pub use spacer::*;
pub use text::*;
