//! Builder for application settings and the entry point that runs them.

use std::path::PathBuf;

use spincard_core::RuntimeHandle;

use crate::LaunchError;

/// Configuration for application settings.
#[derive(Clone, Debug, PartialEq)]
pub struct AppSettings {
    /// Window title
    pub window_title: String,
    /// Initial window width in logical pixels
    pub initial_width: u32,
    /// Initial window height in logical pixels
    pub initial_height: u32,
    /// TrueType font used for all text. A system font is used when unset or
    /// unreadable.
    pub font_path: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window_title: "Spincard".into(),
            initial_width: 800,
            initial_height: 600,
            font_path: None,
        }
    }
}

/// Configures and runs an application.
///
/// ```no_run
/// use spincard_app::AppLauncher;
///
/// fn main() -> Result<(), spincard_app::LaunchError> {
///     AppLauncher::new()
///         .with_title("My App")
///         .with_size(1024, 768)
///         .run(|_runtime| {
///             || {
///                 // Widgets here
///             }
///         })
/// }
/// ```
pub struct AppLauncher {
    settings: AppSettings,
}

impl AppLauncher {
    /// Create a new application launcher with default settings.
    pub fn new() -> Self {
        Self {
            settings: AppSettings::default(),
        }
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.settings.window_title = title.into();
        self
    }

    /// Set the initial window size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.settings.initial_width = width;
        self.settings.initial_height = height;
        self
    }

    /// Set the font file text is drawn with.
    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings.font_path = Some(path.into());
        self
    }

    /// The settings the application will start with.
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Opens the window and runs until it is closed.
    ///
    /// `factory` runs once with the runtime handle and returns the content
    /// closure, composed again whenever state it reads changes.
    #[cfg(all(feature = "desktop", feature = "renderer-pixels"))]
    pub fn run<F, C>(self, factory: F) -> Result<(), LaunchError>
    where
        F: FnOnce(&RuntimeHandle) -> C,
        C: FnMut() + 'static,
    {
        crate::desktop::run(self.settings, factory)
    }
}

impl Default for AppLauncher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let launcher = AppLauncher::new()
            .with_title("Rotation")
            .with_size(480, 900)
            .with_font_path("/tmp/font.ttf");

        assert_eq!(
            launcher.settings(),
            &AppSettings {
                window_title: "Rotation".into(),
                initial_width: 480,
                initial_height: 900,
                font_path: Some(PathBuf::from("/tmp/font.ttf")),
            }
        );
    }

    #[test]
    fn defaults_leave_font_unset() {
        let settings = AppSettings::default();
        assert_eq!(settings.initial_width, 800);
        assert!(settings.font_path.is_none());
    }
}
