use spincard_core::{MutableState, RuntimeHandle};

use crate::config::SliderRanges;
use crate::transformations::{TransformField, Transformations};

/// The card the sliders currently edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    Blue,
    Black,
}

impl Selection {
    pub fn other(self) -> Self {
        match self {
            Selection::Blue => Selection::Black,
            Selection::Black => Selection::Blue,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Selection::Blue => "blue",
            Selection::Black => "black",
        }
    }
}

/// Transforms of both cards and which one is selected.
///
/// Created when the screen mounts and dropped with it. Every write goes
/// through observable state, so the screen recomposes after each effect.
#[derive(Clone)]
pub struct HomeScreenState {
    blue: MutableState<Transformations>,
    black: MutableState<Transformations>,
    selection: MutableState<Selection>,
    ranges: SliderRanges,
}

impl HomeScreenState {
    pub fn new(runtime: &RuntimeHandle, ranges: SliderRanges) -> Self {
        Self {
            blue: MutableState::with_runtime(Transformations::default(), runtime.clone()),
            black: MutableState::with_runtime(Transformations::default(), runtime.clone()),
            selection: MutableState::with_runtime(Selection::default(), runtime.clone()),
            ranges,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection.get()
    }

    pub fn ranges(&self) -> &SliderRanges {
        &self.ranges
    }

    fn record(&self, card: Selection) -> &MutableState<Transformations> {
        match card {
            Selection::Blue => &self.blue,
            Selection::Black => &self.black,
        }
    }

    pub fn transformation(&self, card: Selection) -> Transformations {
        self.record(card).get()
    }

    /// The selected card's record; the sliders show these values.
    pub fn active_transform(&self) -> Transformations {
        self.transformation(self.selection())
    }

    /// Makes `which` the edited card and resets it to the identity transform.
    pub fn select_card(&self, which: Selection) {
        log::debug!("selected {} card", which.name());
        self.selection.set_value(which);
        self.record(which).set_value(Transformations::default());
    }

    /// Stores `value`, clamped to the field's slider range, into the selected
    /// card's record. The other card is left untouched.
    pub fn update_field(&self, field: TransformField, value: f32) {
        let value = self.ranges.for_field(field).clamp(value);
        self.record(self.selection())
            .update(|current| current.with_field(field, value));
    }
}
