#![deny(missing_docs)]

//! High level utilities for running Spincard applications with minimal boilerplate.

#[cfg(not(feature = "desktop"))]
compile_error!("spincard-app must be built with the `desktop` feature enabled.");

#[cfg(not(feature = "renderer-pixels"))]
compile_error!("spincard-app requires the `renderer-pixels` feature.");

mod launcher;
pub use launcher::{AppLauncher, AppSettings};

#[cfg(all(feature = "desktop", feature = "renderer-pixels"))]
pub mod desktop;

/// Failures that stop an application from starting or keep it from running.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// The winit event loop could not be created or exited abnormally.
    #[cfg(feature = "desktop")]
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// The operating system refused to create the window.
    #[cfg(feature = "desktop")]
    #[error("cannot create window: {0}")]
    Window(#[from] winit::error::OsError),
    /// No frame buffer could be created for the window.
    #[cfg(feature = "renderer-pixels")]
    #[error("cannot create frame buffer: {0}")]
    Pixels(#[from] pixels::Error),
}
