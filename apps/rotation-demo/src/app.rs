//! The rotation demo screen.

#![allow(non_snake_case)]

use spincard_core::RuntimeHandle;
use spincard_ui::{
    Alignment, Box, BoxSpec, Card, CardSpec, Column, ColumnSpec, LinearArrangement, Modifier,
    ScrollState, Slider, SliderColors, SliderRange, Spacer, Text, TextStyle,
};
use spincard_ui_graphics::{Color, RoundedCornerShape, Size};

use crate::card_animations::{CardAnimations, StatusColorAnimation};
use crate::config::{ScreenConfig, SliderRanges};
use crate::format::format_rounded;
use crate::screen_state::{HomeScreenState, Selection};
use crate::transformations::{TransformField, Transformations};

pub const BLUE: Color = Color::from_argb(0xFF00_00FF);
pub const CARD_SIZE: f32 = 150.0;
pub const CARD_CORNER_RADIUS: f32 = 16.0;
pub const STATUS_STRIP_HEIGHT: f32 = 24.0;
pub const VALUE_DIGITS: u32 = 2;

/// Tag of the card for `card`.
pub fn card_tag(card: Selection) -> String {
    format!("card-{}", card.name())
}

pub fn slider_tag(field: TransformField) -> String {
    format!("slider-{}", field.key())
}

pub fn value_tag(field: TransformField) -> String {
    format!("value-{}", field.key())
}

pub const STATUS_STRIP_TAG: &str = "status-strip";

pub fn card_color(card: Selection) -> Color {
    match card {
        Selection::Blue => BLUE,
        Selection::Black => Color::BLACK,
    }
}

/// Everything the screen keeps between compositions.
#[derive(Clone)]
pub struct HomeScreenModel {
    state: HomeScreenState,
    blue: CardAnimations,
    black: CardAnimations,
    status: StatusColorAnimation,
    scroll: ScrollState,
}

impl HomeScreenModel {
    pub fn new(runtime: &RuntimeHandle, config: &ScreenConfig, ranges: SliderRanges) -> Self {
        Self {
            state: HomeScreenState::new(runtime, ranges),
            blue: CardAnimations::new(runtime, config.animation),
            black: CardAnimations::new(runtime, config.animation),
            status: StatusColorAnimation::new(runtime, BLUE, Color::BLACK),
            scroll: ScrollState::new(runtime),
        }
    }

    pub fn state(&self) -> &HomeScreenState {
        &self.state
    }

    pub fn animations(&self, card: Selection) -> &CardAnimations {
        match card {
            Selection::Blue => &self.blue,
            Selection::Black => &self.black,
        }
    }

    pub fn status(&self) -> &StatusColorAnimation {
        &self.status
    }

    /// Scroll position of everything below the status strip.
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }
}

/// Content factory for `AppLauncher::run` and robot tests.
pub fn rotation_demo(
    config: ScreenConfig,
    ranges: SliderRanges,
) -> impl FnOnce(&RuntimeHandle) -> std::boxed::Box<dyn FnMut()> {
    move |runtime: &RuntimeHandle| {
        let model = HomeScreenModel::new(runtime, &config, ranges);
        std::boxed::Box::new(move || HomeScreen(&model))
    }
}

pub fn HomeScreen(model: &HomeScreenModel) {
    let state = model.state().clone();
    let selection = state.selection();
    let active = state.active_transform();

    model
        .status()
        .animate_towards(selection == Selection::Black);
    let status_color = model.status().color();

    Column(Modifier::empty().fill_max_size(), ColumnSpec::new(), || {
        StatusStrip(status_color);

        Column(
            Modifier::empty()
                .fill_max_size()
                .background(Color::WHITE)
                .padding_each(10.0, 0.0, 10.0, 10.0)
                .vertical_scroll(model.scroll().clone()),
            ColumnSpec::new(),
            || {
                Spacer(Size::new(0.0, 20.0));

                Box(
                    Modifier::empty().fill_max_width(),
                    BoxSpec::new().content_alignment(Alignment::TOP_CENTER),
                    || {
                        // Blue is emitted last so it draws and hit-tests on top.
                        for card in [Selection::Black, Selection::Blue] {
                            let state = state.clone();
                            Rotation(
                                &state.transformation(card),
                                model.animations(card),
                                card,
                                move || state.select_card(card),
                            );
                        }
                    },
                );

                Spacer(Size::new(0.0, 60.0));

                Column(
                    Modifier::empty()
                        .fill_max_width()
                        .clip(RoundedCornerShape::uniform(16.0))
                        .background(Color::LIGHT_GRAY)
                        .padding(16.0),
                    ColumnSpec::new().vertical_arrangement(LinearArrangement::SpacedBy(8.0)),
                    || {
                        for field in TransformField::ALL {
                            let state = state.clone();
                            RotationSlider(
                                field,
                                active.get(field),
                                state.ranges().for_field(field),
                                move |value| state.update_field(field, value),
                            );
                        }
                    },
                );
            },
        );
    });
}

/// A 150x150 rounded card whose transform follows `transformation` through
/// `animations`. Clicking it calls `on_select`.
pub fn Rotation<F>(
    transformation: &Transformations,
    animations: &CardAnimations,
    card: Selection,
    on_select: F,
) where
    F: Fn() + 'static,
{
    animations.animate_towards(transformation);
    Card(
        Modifier::empty()
            .size(CARD_SIZE, CARD_SIZE)
            .graphics_layer(animations.graphics_layer())
            .test_tag(card_tag(card)),
        CardSpec {
            background_color: card_color(card),
            shape: RoundedCornerShape::uniform(CARD_CORNER_RADIUS),
        },
        on_select,
        || {},
    );
}

/// Title and rounded value above a slider bound to `range`.
pub fn RotationSlider<F>(field: TransformField, value: f32, range: SliderRange, on_change: F)
where
    F: Fn(f32) + 'static,
{
    let label_style = TextStyle::default().with_color(Color::DARK_GRAY);
    Column(Modifier::empty().fill_max_width(), ColumnSpec::new(), || {
        Box(
            Modifier::empty()
                .fill_max_width()
                .padding_each(0.0, 8.0, 0.0, 0.0),
            BoxSpec::new(),
            || {
                Text(field.label(), Modifier::empty(), label_style);
                Text(
                    format_rounded(value, VALUE_DIGITS),
                    Modifier::empty()
                        .align(Alignment::CENTER_END)
                        .test_tag(value_tag(field)),
                    label_style,
                );
            },
        );
        Slider(
            value,
            on_change,
            range,
            SliderColors {
                thumb_color: Color::WHITE,
                active_track_color: BLUE,
                inactive_track_color: Color::GRAY,
            },
            Modifier::empty().test_tag(slider_tag(field)),
        );
    });
}

fn StatusStrip(color: Color) {
    Box(
        Modifier::empty()
            .fill_max_width()
            .height(STATUS_STRIP_HEIGHT)
            .background(color)
            .test_tag(STATUS_STRIP_TAG),
        BoxSpec::new(),
        || {},
    );
}
