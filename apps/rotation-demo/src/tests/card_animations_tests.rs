use spincard_animation::AnimationType;
use spincard_core::Runtime;
use spincard_ui_graphics::Color;

use crate::card_animations::{CardAnimations, StatusColorAnimation};
use crate::config::{AnimationPolicy, RESET_TWEEN_MILLIS};
use crate::transformations::{TransformField, Transformations};

const FRAME: u64 = 16_666_667;

/// Drains frames until `busy` reports false or `max_frames` elapse.
/// Returns the last frame time.
fn settle(runtime: &Runtime, mut time: u64, max_frames: usize, busy: impl Fn() -> bool) -> u64 {
    let handle = runtime.handle();
    for _ in 0..max_frames {
        if !busy() {
            break;
        }
        time += FRAME;
        handle.drain_frame_callbacks(time);
    }
    time
}

#[test]
fn starts_at_identity_without_animating() {
    let runtime = Runtime::new();
    let animations = CardAnimations::new(&runtime.handle(), AnimationPolicy::DefaultAware);
    animations.animate_towards(&Transformations::default());

    assert!(!animations.is_running());
    assert!(animations.current().is_identity());
    assert!(animations.graphics_layer().is_identity());
}

#[test]
fn springs_to_a_target_and_settles_exactly() {
    let runtime = Runtime::new();
    let animations = CardAnimations::new(&runtime.handle(), AnimationPolicy::DefaultAware);
    let target = Transformations::default()
        .with_field(TransformField::ZAxisRotation, 90.0)
        .with_field(TransformField::XScale, 1.5);

    animations.animate_towards(&target);
    assert!(animations.is_running());
    assert_eq!(
        animations.animation_of(TransformField::ZAxisRotation),
        AnimationType::spring()
    );

    settle(&runtime, 0, 600, || animations.is_running());
    assert!(!animations.is_running());
    assert_eq!(animations.current(), target);
    let layer = animations.graphics_layer();
    assert_eq!(layer.rotation_z, 90.0);
    assert_eq!(layer.scale_x, 1.5);
}

#[test]
fn returning_to_identity_uses_the_reset_tween() {
    let runtime = Runtime::new();
    let animations = CardAnimations::new(&runtime.handle(), AnimationPolicy::DefaultAware);
    let moved = Transformations::default().with_field(TransformField::XOffset, 300.0);
    animations.animate_towards(&moved);
    let time = settle(&runtime, 0, 600, || animations.is_running());

    animations.animate_towards(&Transformations::default());
    assert_eq!(
        animations.animation_of(TransformField::XOffset),
        AnimationType::tween(RESET_TWEEN_MILLIS)
    );

    let handle = runtime.handle();
    handle.drain_frame_callbacks(time + FRAME);
    handle.drain_frame_callbacks(time + FRAME + 250_000_000);
    let halfway = animations.current().x_offset;
    assert!(halfway > 0.0 && halfway < 300.0, "{halfway}");

    handle.drain_frame_callbacks(time + FRAME + 500_000_000);
    assert!(animations.current().is_identity());
    assert!(!animations.is_running());
}

#[test]
fn unchanged_fields_are_not_restarted() {
    let runtime = Runtime::new();
    let animations = CardAnimations::new(&runtime.handle(), AnimationPolicy::DefaultAware);
    let first = Transformations::default().with_field(TransformField::YAxisRotation, 60.0);
    animations.animate_towards(&first);
    let handle = runtime.handle();
    handle.drain_frame_callbacks(FRAME);
    handle.drain_frame_callbacks(2 * FRAME);
    let in_flight = animations.current().y_axis_rotation;
    assert!(in_flight > 0.0);

    // Same record again, as happens on every recomposition.
    animations.animate_towards(&first);
    handle.drain_frame_callbacks(3 * FRAME);
    assert!(animations.current().y_axis_rotation > in_flight);
}

#[test]
fn status_color_tweens_between_card_colors() {
    let runtime = Runtime::new();
    let blue = Color::from_argb(0xFF00_00FF);
    let status = StatusColorAnimation::new(&runtime.handle(), blue, Color::BLACK);
    assert_eq!(status.color(), blue);

    status.animate_towards(true);
    let handle = runtime.handle();
    handle.drain_frame_callbacks(FRAME);
    handle.drain_frame_callbacks(FRAME + 500_000_000);
    let mid = status.color();
    assert!(mid.2 > 0.0 && mid.2 < 1.0, "{mid:?}");
    assert!(status.is_running());

    handle.drain_frame_callbacks(FRAME + 1_000_000_000);
    assert_eq!(status.color(), Color::BLACK);
    assert!(!status.is_running());
}
