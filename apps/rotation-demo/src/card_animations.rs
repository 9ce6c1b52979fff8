//! Per-card animation state that outlives individual compositions.

use spincard_animation::{Animatable, AnimationType};
use spincard_core::RuntimeHandle;
use spincard_ui_graphics::{Color, GraphicsLayer};

use crate::config::AnimationPolicy;
use crate::transformations::{TransformField, Transformations};

pub const STATUS_TWEEN_MILLIS: u64 = 1000;

/// One animatable per transform field, following a card's record.
#[derive(Clone)]
pub struct CardAnimations {
    fields: [Animatable; 7],
    policy: AnimationPolicy,
}

impl CardAnimations {
    pub fn new(runtime: &RuntimeHandle, policy: AnimationPolicy) -> Self {
        let fields = TransformField::ALL
            .map(|field| Animatable::new(field.identity(), runtime.clone()));
        Self { fields, policy }
    }

    fn animatable(&self, field: TransformField) -> &Animatable {
        // ALL is in declaration order.
        &self.fields[field as usize]
    }

    /// Retargets every field whose target changed. Unchanged fields keep
    /// running undisturbed.
    pub fn animate_towards(&self, target: &Transformations) {
        for field in TransformField::ALL {
            let value = target.get(field);
            let animation = self.policy.animation_for(field, value);
            if self.animatable(field).update_target(value, animation) {
                log::trace!("{field:?} -> {value}");
            }
        }
    }

    /// Currently displayed transform.
    pub fn current(&self) -> Transformations {
        TransformField::ALL
            .into_iter()
            .fold(Transformations::default(), |acc, field| {
                acc.with_field(field, self.animatable(field).value())
            })
    }

    pub fn graphics_layer(&self) -> GraphicsLayer {
        self.current().to_graphics_layer()
    }

    pub fn animation_of(&self, field: TransformField) -> AnimationType {
        self.animatable(field).animation_type()
    }

    pub fn is_running(&self) -> bool {
        self.fields.iter().any(Animatable::is_running)
    }
}

/// Tint of the status strip, tweened between the two card colors.
#[derive(Clone)]
pub struct StatusColorAnimation {
    /// 0 shows `from`, 1 shows `to`.
    progress: Animatable,
    from: Color,
    to: Color,
}

impl StatusColorAnimation {
    pub fn new(runtime: &RuntimeHandle, from: Color, to: Color) -> Self {
        Self {
            progress: Animatable::new(0.0, runtime.clone()),
            from,
            to,
        }
    }

    pub fn animate_towards(&self, show_to: bool) {
        let target = if show_to { 1.0 } else { 0.0 };
        self.progress
            .update_target(target, AnimationType::tween(STATUS_TWEEN_MILLIS));
    }

    pub fn color(&self) -> Color {
        self.from.lerp(&self.to, self.progress.value())
    }

    pub fn is_running(&self) -> bool {
        self.progress.is_running()
    }
}
