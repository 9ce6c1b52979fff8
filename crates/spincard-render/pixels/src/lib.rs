//! Software renderer: rasterizes the shared scene into a `pixels` frame.

mod draw;
mod font;

use std::path::Path;
use std::sync::Arc;

use rusttype::Font;
use thiserror::Error;

use spincard_render_common::{render_layout_tree, RenderScene, Renderer, Scene};
use spincard_ui::{set_text_measurer, LayoutTree};
use spincard_ui_graphics::Size;

pub use draw::draw_scene;
pub use font::{default_font, load_font, FontError, RusttypeTextMeasurer};

/// Metrics cache capacity. The demo shows fewer than twenty distinct strings
/// per frame.
const TEXT_CACHE_CAPACITY: usize = 256;

#[derive(Debug, Error)]
pub enum PixelsRendererError {
    #[error("frame buffer holds {actual} bytes but {width}x{height} needs {expected}")]
    FrameSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

pub struct PixelsRenderer {
    scene: Scene,
    font: Option<Arc<Font<'static>>>,
}

impl Default for PixelsRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelsRenderer {
    /// Renderer using the first system font found.
    pub fn new() -> Self {
        Self::with_font(default_font())
    }

    /// Renderer drawing text with `font`; without one, text is laid out with
    /// fallback metrics and never drawn.
    ///
    /// Installs the matching text measurer for the calling thread, so create
    /// the renderer on the UI thread before composing.
    pub fn with_font(font: Option<Arc<Font<'static>>>) -> Self {
        match font.as_ref() {
            Some(font) => {
                set_text_measurer(RusttypeTextMeasurer::new(
                    font.clone(),
                    TEXT_CACHE_CAPACITY,
                ));
            }
            None => log::warn!("no usable font found; text will not be drawn"),
        }
        Self {
            scene: Scene::new(),
            font,
        }
    }

    /// Renderer using the font at `path`, falling back to a system font when
    /// it cannot be loaded.
    pub fn with_font_path(path: Option<&Path>) -> Self {
        let font = match path.map(load_font) {
            Some(Ok(font)) => Some(Arc::new(font)),
            Some(Err(err)) => {
                log::warn!("{err}; falling back to a system font");
                default_font()
            }
            None => default_font(),
        };
        Self::with_font(font)
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    pub fn draw(&self, frame: &mut [u8], width: u32, height: u32) -> Result<(), PixelsRendererError> {
        let expected = width as usize * height as usize * 4;
        if frame.len() != expected {
            return Err(PixelsRendererError::FrameSize {
                width,
                height,
                expected,
                actual: frame.len(),
            });
        }
        draw::draw_scene(frame, width, height, &self.scene, self.font.as_deref());
        Ok(())
    }
}

impl Renderer for PixelsRenderer {
    type Scene = Scene;
    type Error = PixelsRendererError;

    fn scene(&self) -> &Self::Scene {
        &self.scene
    }

    fn scene_mut(&mut self) -> &mut Self::Scene {
        &mut self.scene
    }

    fn rebuild_scene(
        &mut self,
        layout_tree: &LayoutTree,
        _viewport: Size,
    ) -> Result<(), Self::Error> {
        self.scene.clear();
        render_layout_tree(layout_tree.root(), &mut self.scene);
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/draw_tests.rs"]
mod tests;
