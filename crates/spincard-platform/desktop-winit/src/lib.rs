use spincard_ui_graphics::Point;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::MouseScrollDelta;

/// Logical pixels scrolled per wheel notch.
pub const LINE_SCROLL_PIXELS: f32 = 40.0;

/// Converts winit's physical pixels into the logical units content is laid
/// out in.
pub struct DesktopWinitPlatform {
    scale_factor: f64,
}

impl DesktopWinitPlatform {
    pub fn new(scale_factor: f64) -> Self {
        Self { scale_factor }
    }

    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn pointer_position(&self, position: PhysicalPosition<f64>) -> Point {
        Point {
            x: (position.x / self.scale_factor) as f32,
            y: (position.y / self.scale_factor) as f32,
        }
    }

    /// Vertical wheel travel in logical pixels, positive toward the end of
    /// the content. winit reports wheel-up as positive.
    pub fn scroll_delta(&self, delta: MouseScrollDelta) -> f32 {
        match delta {
            MouseScrollDelta::LineDelta(_, lines) => -lines * LINE_SCROLL_PIXELS,
            MouseScrollDelta::PixelDelta(position) => (-position.y / self.scale_factor) as f32,
        }
    }

    /// Logical size of a surface, never smaller than one pixel per side.
    pub fn logical_size(&self, size: PhysicalSize<u32>) -> (u32, u32) {
        let logical = |physical: u32| ((physical as f64 / self.scale_factor).round() as u32).max(1);
        (logical(size.width), logical(size.height))
    }
}

impl Default for DesktopWinitPlatform {
    fn default() -> Self {
        Self::new(1.0)
    }
}
