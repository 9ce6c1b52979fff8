//! Desktop runtime: winit event loop drawing through a `pixels` frame buffer.

use std::sync::Arc;

use pixels::{Pixels, SurfaceTexture};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder};
use winit::window::{Window, WindowBuilder};

use spincard_app_shell::AppShell;
use spincard_core::RuntimeHandle;
use spincard_platform_desktop_winit::DesktopWinitPlatform;
use spincard_render_pixels::PixelsRenderer;

use crate::launcher::AppSettings;
use crate::LaunchError;

/// Runs a desktop application with software rendering.
///
/// The frame buffer holds logical pixels; `pixels` scales it onto the
/// physical surface. The loop sleeps until input arrives or the runtime's
/// frame waker reports a state write or a pending animation frame.
///
/// **Note:** Applications should use `AppLauncher` instead of calling this directly.
pub fn run<F, C>(settings: AppSettings, factory: F) -> Result<(), LaunchError>
where
    F: FnOnce(&RuntimeHandle) -> C,
    C: FnMut() + 'static,
{
    let event_loop = EventLoopBuilder::new().build()?;
    let frame_proxy = event_loop.create_proxy();

    let window = Arc::new(
        WindowBuilder::new()
            .with_title(settings.window_title.as_str())
            .with_inner_size(LogicalSize::new(
                settings.initial_width as f64,
                settings.initial_height as f64,
            ))
            .build(&event_loop)?,
    );

    let mut platform = DesktopWinitPlatform::new(window.scale_factor());
    let size = window.inner_size();
    let (buffer_width, buffer_height) = platform.logical_size(size);
    let surface = SurfaceTexture::new(size.width.max(1), size.height.max(1), window.clone());
    let mut pixels = Pixels::new(buffer_width, buffer_height, surface)?;

    let renderer = PixelsRenderer::with_font_path(settings.font_path.as_deref());
    let mut app = AppShell::new(renderer, factory);
    app.set_frame_waker(move || {
        let _ = frame_proxy.send_event(());
    });
    app.set_buffer_size(buffer_width, buffer_height);
    app.set_viewport(buffer_width as f32, buffer_height as f32);
    log::info!(
        "window {}x{} logical at scale {}",
        buffer_width,
        buffer_height,
        platform.scale_factor()
    );
    if log::log_enabled!(log::Level::Debug) {
        app.log_debug_info();
    }

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Wait);
        match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                }
                WindowEvent::Resized(new_size) => {
                    resize(&mut app, &mut pixels, &platform, new_size);
                    window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    platform.set_scale_factor(scale_factor);
                    resize(&mut app, &mut pixels, &platform, window.inner_size());
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let logical = platform.pointer_position(position);
                    if app.set_cursor(logical.x, logical.y) {
                        window.request_redraw();
                    }
                }
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } => {
                    let handled = match state {
                        ElementState::Pressed => app.pointer_pressed(),
                        ElementState::Released => app.pointer_released(),
                    };
                    if handled {
                        window.request_redraw();
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    if app.mouse_wheel(platform.scroll_delta(delta)) {
                        window.request_redraw();
                    }
                }
                WindowEvent::Focused(false) => {
                    app.cancel_gesture();
                }
                WindowEvent::RedrawRequested => {
                    app.update();
                    draw_frame(&mut app, &mut pixels, &window, elwt);
                }
                _ => {}
            },
            Event::AboutToWait | Event::UserEvent(()) => {
                if app.needs_redraw() {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    })?;

    Ok(())
}

fn resize(
    app: &mut AppShell<PixelsRenderer>,
    pixels: &mut Pixels,
    platform: &DesktopWinitPlatform,
    new_size: PhysicalSize<u32>,
) {
    if new_size.width == 0 || new_size.height == 0 {
        return;
    }
    if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
        log::error!("surface resize failed: {err}");
        return;
    }
    let (width, height) = platform.logical_size(new_size);
    if let Err(err) = pixels.resize_buffer(width, height) {
        log::error!("frame buffer resize failed: {err}");
        return;
    }
    app.set_buffer_size(width, height);
    app.set_viewport(width as f32, height as f32);
}

fn draw_frame(
    app: &mut AppShell<PixelsRenderer>,
    pixels: &mut Pixels,
    window: &Window,
    elwt: &winit::event_loop::EventLoopWindowTarget<()>,
) {
    let (width, height) = app.buffer_size();
    if let Err(err) = app.renderer().draw(pixels.frame_mut(), width, height) {
        log::error!("draw failed: {err}");
        return;
    }
    if let Err(err) = pixels.render() {
        log::error!("render failed: {err}");
        elwt.exit();
        return;
    }
    if app.has_active_animations() {
        window.request_redraw();
    }
}
