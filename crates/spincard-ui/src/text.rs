use std::cell::RefCell;
use std::rc::Rc;

use spincard_ui_graphics::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    /// Font size in pixels.
    pub font_size: f32,
}

impl TextStyle {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            font_size: 16.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
}

/// Measures single-line text at a font size in pixels.
pub trait TextMeasurer: 'static {
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics;
}

/// Fixed advance per character. Used until a renderer installs a measurer
/// backed by a real font, and by headless tests.
#[derive(Default)]
struct MonospacedTextMeasurer;

impl MonospacedTextMeasurer {
    const ADVANCE: f32 = 0.5;
    const LINE_HEIGHT: f32 = 1.25;
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f32 * font_size * Self::ADVANCE,
            height: font_size * Self::LINE_HEIGHT,
        }
    }
}

thread_local! {
    static TEXT_MEASURER: RefCell<Rc<dyn TextMeasurer>> =
        RefCell::new(Rc::new(MonospacedTextMeasurer));
}

pub fn set_text_measurer<M: TextMeasurer>(measurer: M) {
    TEXT_MEASURER.with(|slot| *slot.borrow_mut() = Rc::new(measurer));
}

pub fn reset_text_measurer() {
    TEXT_MEASURER.with(|slot| *slot.borrow_mut() = Rc::new(MonospacedTextMeasurer));
}

pub fn measure_text(text: &str, font_size: f32) -> TextMetrics {
    let measurer = TEXT_MEASURER.with(|slot| slot.borrow().clone());
    measurer.measure(text, font_size)
}
