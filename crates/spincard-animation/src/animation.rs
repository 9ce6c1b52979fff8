//! Frame-driven animations with tween and spring specs.

use std::cell::RefCell;
use std::rc::Rc;

use spincard_core::{FrameCallbackRegistration, MutableState, RuntimeHandle, State};

use crate::easing::Easing;

/// Time-based animation: duration, easing and an optional start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Damped harmonic oscillator with unit mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 is critically damped, below bounces, above is sluggish.
    pub damping_ratio: f32,
    pub stiffness: f32,
    /// Speed (units per second) below which the spring may settle.
    pub velocity_threshold: f32,
    /// Distance from the target below which the spring may settle.
    pub position_threshold: f32,
}

impl SpringSpec {
    /// Compose's `spring()`: no bounce, medium stiffness.
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.5,
            position_threshold: 0.01,
        }
    }

    pub fn bouncy() -> Self {
        Self {
            damping_ratio: 0.5,
            ..Self::default_spring()
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    Tween(AnimationSpec),
    Spring(SpringSpec),
}

impl AnimationType {
    pub fn tween(duration_millis: u64) -> Self {
        AnimationType::Tween(AnimationSpec::tween(
            duration_millis,
            Easing::FastOutSlowInEasing,
        ))
    }

    pub fn spring() -> Self {
        AnimationType::Spring(SpringSpec::default())
    }
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

/// Largest integration step for springs, in seconds.
const SPRING_STEP: f32 = 1.0 / 240.0;

/// Animated `f32` driven by the runtime's frame clock.
///
/// Retargeting cancels the pending frame and restarts from the current value;
/// springs keep their velocity across retargets so motion stays continuous.
pub struct Animatable {
    inner: Rc<RefCell<AnimatableInner>>,
}

struct AnimatableInner {
    state: MutableState<f32>,
    runtime: RuntimeHandle,
    current: f32,
    velocity: f32,
    start: f32,
    target: f32,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
}

impl AnimatableInner {
    fn settle(&mut self) {
        self.current = self.target;
        self.start = self.target;
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
    }

    /// Advances the animation to `frame_time_nanos`. Returns whether another
    /// frame is needed.
    fn advance(&mut self, frame_time_nanos: u64) -> bool {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let previous_frame = self.last_frame_nanos.replace(frame_time_nanos);
        let frame_dt = previous_frame
            .map(|previous| frame_time_nanos.saturating_sub(previous) as f32 / 1e9)
            .unwrap_or(0.0);

        match self.animation_type {
            AnimationType::Tween(spec) => {
                let elapsed = frame_time_nanos.saturating_sub(start_time);
                let delay = spec.delay_millis * 1_000_000;
                if elapsed < delay {
                    return true;
                }
                let duration = (spec.duration_millis * 1_000_000).max(1);
                let linear = ((elapsed - delay) as f32 / duration as f32).clamp(0.0, 1.0);
                let value = self.start + (self.target - self.start) * spec.easing.transform(linear);
                if frame_dt > 0.0 {
                    self.velocity = (value - self.current) / frame_dt;
                }
                self.current = value;
                if linear >= 1.0 {
                    self.settle();
                    return false;
                }
                true
            }
            AnimationType::Spring(spec) => {
                let damping = 2.0 * spec.damping_ratio * spec.stiffness.sqrt();
                let mut remaining = frame_dt;
                while remaining > 0.0 {
                    let step = remaining.min(SPRING_STEP);
                    let displacement = self.current - self.target;
                    let force = -spec.stiffness * displacement - damping * self.velocity;
                    // Semi-implicit Euler: velocity first, then position.
                    self.velocity += force * step;
                    self.current += self.velocity * step;
                    remaining -= step;
                }
                let at_rest = self.velocity.abs() < spec.velocity_threshold;
                let near_target = (self.current - self.target).abs() < spec.position_threshold;
                if at_rest && near_target {
                    self.settle();
                    return false;
                }
                true
            }
        }
    }
}

impl Animatable {
    pub fn new(initial: f32, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            state: MutableState::with_runtime(initial, runtime.clone()),
            runtime,
            current: initial,
            velocity: 0.0,
            start: initial,
            target: initial,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            registration: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Animate toward `target` with `animation`, superseding any animation
    /// in flight.
    pub fn animate_to(&self, target: f32, animation: AnimationType) {
        let needs_frames = {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.start = inner.current;
            inner.target = target;
            inner.animation_type = animation;
            // The last frame time survives so a running spring integrates
            // straight through the retarget.
            inner.start_time_nanos = None;

            log::trace!("animating {} -> {target}", inner.current);
            let already_there = inner.current == target && inner.velocity == 0.0;
            if already_there {
                inner.settle();
            }
            !already_there
        };

        if needs_frames {
            Self::schedule_frame(&self.inner);
        }
    }

    /// Starts a new animation only when the target or the spec changed.
    /// Returns whether an animation was started.
    pub fn update_target(&self, target: f32, animation: AnimationType) -> bool {
        let (current_target, current_animation) = {
            let inner = self.inner.borrow();
            (inner.target, inner.animation_type)
        };
        let is_new_target = current_target != target;
        let is_new_animation = current_animation != animation;
        if is_new_target || is_new_animation {
            self.animate_to(target, animation);
            true
        } else {
            false
        }
    }

    /// Jump to `target` without animating.
    pub fn snap_to(&self, target: f32) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.target = target;
        inner.settle();
        inner.state.set_if_changed(target);
    }

    pub fn value(&self) -> f32 {
        self.inner.borrow().current
    }

    /// Current speed in units per second.
    pub fn velocity(&self) -> f32 {
        self.inner.borrow().velocity
    }

    pub fn target(&self) -> f32 {
        self.inner.borrow().target
    }

    pub fn animation_type(&self) -> AnimationType {
        self.inner.borrow().animation_type
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    /// Observable value; reading it from composed content makes the content
    /// follow the animation frame by frame.
    pub fn state(&self) -> State<f32> {
        self.inner.borrow().state.as_state()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner>>) {
        let runtime = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.runtime.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner>>, frame_time_nanos: u64) {
        let schedule_next = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            let running = inner.advance(frame_time_nanos);
            let current = inner.current;
            inner.state.set_if_changed(current);
            running
        };

        if schedule_next {
            Self::schedule_frame(this);
        }
    }
}

impl Clone for Animatable {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
