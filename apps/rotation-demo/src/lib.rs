#![allow(clippy::type_complexity)]
#![allow(non_snake_case)]

pub mod app;
pub mod card_animations;
pub mod config;
pub mod format;
pub mod screen_state;
pub mod transformations;

pub use app::{rotation_demo, HomeScreen, HomeScreenModel, Rotation, RotationSlider};
pub use config::{AnimationPolicy, ConfigError, OffsetRange, ScreenConfig, SliderRanges};
pub use screen_state::{HomeScreenState, Selection};
pub use transformations::{FieldKind, TransformField, Transformations};

/// Window size that fits the whole screen without scrolling.
pub const DEFAULT_WINDOW_SIZE: (u32, u32) = (480, 900);

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod format_tests;

#[cfg(test)]
#[path = "tests/screen_state_tests.rs"]
mod screen_state_tests;

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;

#[cfg(test)]
#[path = "tests/card_animations_tests.rs"]
mod card_animations_tests;
