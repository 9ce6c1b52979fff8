//! Font loading and rusttype-backed text measurement.

use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lru::LruCache;
use once_cell::sync::Lazy;
use rusttype::{point, Font, Scale};
use thiserror::Error;

use spincard_ui::{TextMeasurer, TextMetrics};

/// Tried in order when no font path is configured.
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static DEFAULT_FONT: Lazy<Option<Arc<Font<'static>>>> = Lazy::new(|| {
    SYSTEM_FONT_PATHS
        .iter()
        .find_map(|path| match load_font(Path::new(path)) {
            Ok(font) => {
                log::debug!("using system font {path}");
                Some(Arc::new(font))
            }
            Err(_) => None,
        })
});

#[derive(Debug, Error)]
pub enum FontError {
    #[error("cannot read font {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a usable TrueType font")]
    Invalid { path: PathBuf },
}

pub fn load_font(path: &Path) -> Result<Font<'static>, FontError> {
    let bytes = std::fs::read(path).map_err(|source| FontError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Font::try_from_vec(bytes).ok_or_else(|| FontError::Invalid {
        path: path.to_path_buf(),
    })
}

/// First font found among common system locations, loaded once.
pub fn default_font() -> Option<Arc<Font<'static>>> {
    DEFAULT_FONT.clone()
}

pub(crate) fn measure_with_font(font: &Font<'_>, text: &str, font_size: f32) -> TextMetrics {
    let scale = Scale::uniform(font_size);
    let v_metrics = font.v_metrics(scale);
    let width = font
        .layout(text, scale, point(0.0, v_metrics.ascent))
        .last()
        .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0);
    TextMetrics {
        width: width.ceil(),
        height: (v_metrics.ascent - v_metrics.descent + v_metrics.line_gap).ceil(),
    }
}

/// Measures with the font the renderer draws with. Layout runs every frame
/// while a card animates, so metrics are cached per text and size.
pub struct RusttypeTextMeasurer {
    font: Arc<Font<'static>>,
    cache: RefCell<LruCache<(String, u32), TextMetrics>>,
}

impl RusttypeTextMeasurer {
    pub fn new(font: Arc<Font<'static>>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            font,
            cache: RefCell::new(LruCache::new(capacity)),
        }
    }
}

impl TextMeasurer for RusttypeTextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics {
        let key = (text.to_string(), font_size.to_bits());
        let mut cache = self.cache.borrow_mut();
        if let Some(metrics) = cache.get(&key) {
            return *metrics;
        }
        let metrics = measure_with_font(&self.font, text, font_size);
        cache.put(key, metrics);
        metrics
    }
}
