//! Screen configuration: slider ranges and how card transforms animate.

use std::fmt;
use std::str::FromStr;

use spincard_animation::AnimationType;
use spincard_ui::{RangeError, SliderRange};
use thiserror::Error;

use crate::transformations::{FieldKind, TransformField};

pub const ROTATION_RANGE: (f32, f32) = (-300.0, 300.0);
pub const SCALE_RANGE: (f32, f32) = (0.0, 2.0);

/// Tween used when a field returns to its identity value.
pub const RESET_TWEEN_MILLIS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown offset range `{0}`, expected `wide` or `narrow`")]
    UnknownOffsetRange(String),
    #[error("unknown animation policy `{0}`, expected `default-aware` or `uniform`")]
    UnknownAnimationPolicy(String),
}

/// Bounds of the two offset sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetRange {
    /// ±2000
    #[default]
    Wide,
    /// ±200, keeps the card on screen.
    Narrow,
}

impl OffsetRange {
    pub fn bound(self) -> f32 {
        match self {
            OffsetRange::Wide => 2000.0,
            OffsetRange::Narrow => 200.0,
        }
    }
}

impl FromStr for OffsetRange {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wide" => Ok(OffsetRange::Wide),
            "narrow" => Ok(OffsetRange::Narrow),
            _ => Err(ConfigError::UnknownOffsetRange(s.to_string())),
        }
    }
}

impl fmt::Display for OffsetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OffsetRange::Wide => f.write_str("wide"),
            OffsetRange::Narrow => f.write_str("narrow"),
        }
    }
}

/// Picks the animation for each field whenever its target changes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AnimationPolicy {
    /// A 500 ms tween toward the field's identity value, a spring toward
    /// anything else.
    #[default]
    DefaultAware,
    /// The same animation for every field and target.
    Uniform(AnimationType),
}

impl AnimationPolicy {
    pub fn animation_for(&self, field: TransformField, target: f32) -> AnimationType {
        match self {
            AnimationPolicy::DefaultAware => {
                if target == field.identity() {
                    AnimationType::tween(RESET_TWEEN_MILLIS)
                } else {
                    AnimationType::spring()
                }
            }
            AnimationPolicy::Uniform(animation) => *animation,
        }
    }
}

impl FromStr for AnimationPolicy {
    type Err = ConfigError;

    /// `uniform` selects a uniform spring.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default-aware" => Ok(AnimationPolicy::DefaultAware),
            "uniform" => Ok(AnimationPolicy::Uniform(AnimationType::spring())),
            _ => Err(ConfigError::UnknownAnimationPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for AnimationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationPolicy::DefaultAware => f.write_str("default-aware"),
            AnimationPolicy::Uniform(_) => f.write_str("uniform"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenConfig {
    pub offset_range: OffsetRange,
    pub animation: AnimationPolicy,
}

impl ScreenConfig {
    pub fn with_offset_range(mut self, offset_range: OffsetRange) -> Self {
        self.offset_range = offset_range;
        self
    }

    pub fn with_animation(mut self, animation: AnimationPolicy) -> Self {
        self.animation = animation;
        self
    }
}

/// Validated range for every slider, built once per screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRanges {
    rotation: SliderRange,
    scale: SliderRange,
    offset: SliderRange,
}

impl SliderRanges {
    pub fn new(config: &ScreenConfig) -> Result<Self, RangeError> {
        let bound = config.offset_range.bound();
        Ok(Self {
            rotation: SliderRange::new(ROTATION_RANGE.0, ROTATION_RANGE.1)?,
            scale: SliderRange::new(SCALE_RANGE.0, SCALE_RANGE.1)?,
            offset: SliderRange::new(-bound, bound)?,
        })
    }

    pub fn for_kind(&self, kind: FieldKind) -> SliderRange {
        match kind {
            FieldKind::Rotation => self.rotation,
            FieldKind::Scale => self.scale,
            FieldKind::Offset => self.offset,
        }
    }

    pub fn for_field(&self, field: TransformField) -> SliderRange {
        self.for_kind(field.kind())
    }
}
