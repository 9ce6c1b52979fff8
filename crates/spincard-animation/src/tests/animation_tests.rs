use super::*;

use spincard_core::Runtime;

const FRAME: u64 = 16_666_667; // ~60 FPS

/// Drains frames until the animatable settles or `max_frames` elapse.
/// Returns every observed value and the last frame time.
fn run_frames(
    runtime: &Runtime,
    animatable: &Animatable,
    mut frame_time: u64,
    max_frames: usize,
) -> (Vec<f32>, u64) {
    let handle = runtime.handle();
    let mut samples = Vec::new();
    for _ in 0..max_frames {
        if !animatable.is_running() {
            break;
        }
        frame_time += FRAME;
        handle.drain_frame_callbacks(frame_time);
        samples.push(animatable.value());
    }
    (samples, frame_time)
}

#[test]
fn tween_interpolates_and_lands_on_target() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(0.0, runtime.handle());
    let state = animatable.state();

    animatable.animate_to(100.0, AnimationType::tween(500));
    assert!(animatable.is_running());
    assert_eq!(state.get(), 0.0);

    let (samples, _) = run_frames(&runtime, &animatable, 0, 64);
    assert!(samples.iter().any(|v| *v > 0.0 && *v < 100.0));
    assert!(samples.windows(2).all(|pair| pair[1] >= pair[0]));
    assert_eq!(animatable.value(), 100.0);
    assert_eq!(state.get(), 100.0);
    assert!(!animatable.is_running());
    // 500 ms at 60 FPS plus the frame that anchors the start time.
    assert!(samples.len() >= 30 && samples.len() <= 33, "{}", samples.len());
}

#[test]
fn tween_delay_holds_the_start_value() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(1.0, handle.clone());
    let spec = AnimationSpec::tween(100, Easing::LinearEasing).with_delay(100);

    animatable.animate_to(0.0, AnimationType::Tween(spec));
    handle.drain_frame_callbacks(FRAME);
    handle.drain_frame_callbacks(FRAME + 50_000_000);
    assert_eq!(animatable.value(), 1.0);
    handle.drain_frame_callbacks(FRAME + 150_000_000);
    assert!((animatable.value() - 0.5).abs() < 1e-4);
}

#[test]
fn spring_settles_on_target() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(0.0, runtime.handle());

    animatable.animate_to(45.0, AnimationType::spring());
    let (samples, _) = run_frames(&runtime, &animatable, 0, 240);

    assert!(!animatable.is_running(), "spring should come to rest");
    assert_eq!(animatable.value(), 45.0);
    assert_eq!(animatable.velocity(), 0.0);
    // Critically damped: never overshoots.
    assert!(samples.iter().all(|v| *v <= 45.0 + 1e-3));
}

#[test]
fn bouncy_spring_overshoots() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(0.0, runtime.handle());

    animatable.animate_to(10.0, AnimationType::Spring(SpringSpec::bouncy()));
    let (samples, _) = run_frames(&runtime, &animatable, 0, 240);
    assert!(samples.iter().any(|v| *v > 10.0));
    assert_eq!(animatable.value(), 10.0);
}

#[test]
fn retargeting_a_spring_keeps_its_velocity() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0, handle.clone());

    animatable.animate_to(100.0, AnimationType::spring());
    let mut time = 0;
    for _ in 0..4 {
        time += FRAME;
        handle.drain_frame_callbacks(time);
    }
    let velocity = animatable.velocity();
    let position = animatable.value();
    assert!(velocity > 0.0);

    animatable.animate_to(200.0, AnimationType::spring());
    assert_eq!(animatable.velocity(), velocity);
    assert_eq!(animatable.value(), position);

    time += FRAME;
    handle.drain_frame_callbacks(time);
    assert!(animatable.value() > position);
    assert!(animatable.velocity() > 0.0);
    assert_eq!(animatable.target(), 200.0);
}

#[test]
fn new_target_supersedes_in_flight_tween() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0, handle.clone());

    animatable.animate_to(100.0, AnimationType::tween(500));
    handle.drain_frame_callbacks(FRAME);
    handle.drain_frame_callbacks(2 * FRAME);
    handle.drain_frame_callbacks(3 * FRAME);
    let midway = animatable.value();
    assert!(midway > 0.0 && midway < 100.0);

    animatable.animate_to(0.0, AnimationType::tween(500));
    let (samples, _) = run_frames(&runtime, &animatable, 3 * FRAME, 64);
    assert!(samples.iter().all(|v| *v <= midway));
    assert_eq!(animatable.value(), 0.0);
}

#[test]
fn update_target_ignores_unchanged_requests() {
    let runtime = Runtime::new();
    let animatable = Animatable::new(0.0, runtime.handle());

    assert!(animatable.update_target(5.0, AnimationType::spring()));
    assert!(!animatable.update_target(5.0, AnimationType::spring()));
    assert!(animatable.update_target(5.0, AnimationType::tween(500)));
    assert_eq!(animatable.animation_type(), AnimationType::tween(500));
}

#[test]
fn animating_to_the_resting_value_schedules_nothing() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(3.0, handle.clone());

    animatable.animate_to(3.0, AnimationType::spring());
    assert!(!animatable.is_running());
    assert!(!handle.has_frame_callbacks());
}

#[test]
fn snap_to_cancels_and_jumps() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let animatable = Animatable::new(0.0, handle.clone());

    animatable.animate_to(10.0, AnimationType::tween(500));
    animatable.snap_to(-4.0);
    assert!(!animatable.is_running());
    assert!(!handle.has_frame_callbacks());
    assert_eq!(animatable.value(), -4.0);
    assert_eq!(animatable.state().get(), -4.0);
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.5), 0.5);
    assert_eq!(Easing::LinearEasing.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::LinearEasing,
        Easing::FastOutSlowInEasing,
        Easing::LinearOutSlowInEasing,
        Easing::FastOutLinearInEasing,
    ];

    for easing in easings {
        assert!(easing.transform(0.0).abs() < 0.01, "start of {:?}", easing);
        assert!((easing.transform(1.0) - 1.0).abs() < 0.01, "end of {:?}", easing);
        let mid = easing.transform(0.5);
        assert!(mid > 0.0 && mid < 1.0, "midpoint of {:?} was {}", easing, mid);
    }
}

#[test]
fn fast_out_slow_in_leads_linear_at_midpoint() {
    assert!(Easing::FastOutSlowInEasing.transform(0.5) > 0.5);
}

#[test]
fn animation_spec_default_has_reasonable_values() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowInEasing);
    assert_eq!(spec.delay_millis, 0);
}

#[test]
fn spring_spec_default_is_critically_damped() {
    let spec = SpringSpec::default();
    assert_eq!(spec.damping_ratio, 1.0);
    assert_eq!(spec.stiffness, 1500.0);
}
