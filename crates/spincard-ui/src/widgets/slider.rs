//! Slider widget implementation

#![allow(non_snake_case)]

use thiserror::Error;

use super::layout::Layout;
use crate::input::{PointerButton, PointerEvent, PointerEventKind};
use crate::layout::MeasurePolicy;
use crate::modifier::{Color, Modifier, RoundedCornerShape};
use spincard_core::NodeId;
use spincard_ui_graphics::{DrawScope, Rect};

pub const SLIDER_HEIGHT: f32 = 48.0;
pub const SLIDER_THUMB_RADIUS: f32 = 10.0;
const TRACK_HEIGHT: f32 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum RangeError {
    #[error("slider range is inverted: {min} > {max}")]
    Inverted { min: f32, max: f32 },
    #[error("slider range bounds must be finite")]
    NotFinite,
}

/// Closed interval of values a slider can produce. Always finite with
/// `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    start: f32,
    end: f32,
}

impl SliderRange {
    pub fn new(min: f32, max: f32) -> Result<Self, RangeError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(RangeError::NotFinite);
        }
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }
        Ok(Self {
            start: min,
            end: max,
        })
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.start && value <= self.end
    }

    /// Nearest value inside the range. NaN maps to the start.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.start
        } else {
            value.clamp(self.start, self.end)
        }
    }

    /// Position of `value` along the range, in `[0, 1]`.
    pub fn fraction_of(&self, value: f32) -> f32 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return 0.0;
        }
        (self.clamp(value) - self.start) / span
    }

    pub fn value_at(&self, fraction: f32) -> f32 {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        self.clamp(self.start + (self.end - self.start) * fraction)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderColors {
    pub thumb_color: Color,
    pub active_track_color: Color,
    pub inactive_track_color: Color,
}

impl Default for SliderColors {
    fn default() -> Self {
        Self {
            thumb_color: Color::WHITE,
            active_track_color: Color::from_argb(0xFF62_00EE),
            inactive_track_color: Color::LIGHT_GRAY,
        }
    }
}

/// Maps a pointer x position inside a slider of `width` onto `range`.
/// Positions past either end of the track give that end's bound.
pub fn slider_value_at(range: &SliderRange, x: f32, width: f32) -> f32 {
    let track = (width - 2.0 * SLIDER_THUMB_RADIUS).max(0.0);
    if track <= 0.0 {
        return range.start();
    }
    range.value_at((x - SLIDER_THUMB_RADIUS) / track)
}

/// Horizontal slider. `on_value_change` runs on press and on every move
/// while the press lasts, always with a value inside `range`.
pub fn Slider<C>(
    value: f32,
    on_value_change: C,
    range: SliderRange,
    colors: SliderColors,
    modifier: Modifier,
) -> NodeId
where
    C: Fn(f32) + 'static,
{
    let fraction = range.fraction_of(value);

    let modifier = modifier
        .fill_max_width()
        .height(SLIDER_HEIGHT)
        .draw_behind(move |scope: &mut dyn DrawScope| {
            draw_slider(scope, fraction, colors);
        })
        .pointer_input(move |event: PointerEvent| {
            let dragging = match event.kind {
                PointerEventKind::Down => true,
                PointerEventKind::Move => event.buttons.contains(PointerButton::Primary),
                PointerEventKind::Up | PointerEventKind::Cancel | PointerEventKind::Scroll => false,
            };
            if !dragging {
                return;
            }
            let width = event.target_size.width;
            on_value_change(slider_value_at(&range, event.position.x, width));
            event.consume();
        });

    Layout(modifier, MeasurePolicy::Leaf, || {})
}

fn draw_slider(scope: &mut dyn DrawScope, fraction: f32, colors: SliderColors) {
    let size = scope.size();
    let track_width = (size.width - 2.0 * SLIDER_THUMB_RADIUS).max(0.0);
    let center_y = size.height / 2.0;
    let track_top = center_y - TRACK_HEIGHT / 2.0;
    let track_shape = RoundedCornerShape::uniform(TRACK_HEIGHT / 2.0);
    let thumb_x = SLIDER_THUMB_RADIUS + track_width * fraction;

    scope.draw_round_rect_at(
        Rect::new(SLIDER_THUMB_RADIUS, track_top, track_width, TRACK_HEIGHT),
        colors.inactive_track_color,
        track_shape,
    );
    scope.draw_round_rect_at(
        Rect::new(
            SLIDER_THUMB_RADIUS,
            track_top,
            track_width * fraction,
            TRACK_HEIGHT,
        ),
        colors.active_track_color,
        track_shape,
    );
    // Outline so a white thumb stays visible on light backgrounds.
    scope.draw_circle(
        thumb_x,
        center_y,
        SLIDER_THUMB_RADIUS + 1.0,
        Color::BLACK.with_alpha(0.2),
    );
    scope.draw_circle(thumb_x, center_y, SLIDER_THUMB_RADIUS, colors.thumb_color);
}
