//! Application shell: owns the runtime, the content closure and the renderer,
//! and turns input events and frame ticks into fresh scenes.

#![allow(clippy::type_complexity)]

mod hit_path_tracker;

use std::fmt::Debug;

// Use web_time for cross-platform time support (native + WASM) - compatible with winit
use web_time::Instant;

use spincard_core::{Runtime, RuntimeHandle};
use spincard_render_common::{HitTestTarget, RenderScene, Renderer};
use spincard_ui::{
    compose, log_layout_tree, measure_layout, LayoutNode, LayoutTree, PointerButton,
    PointerButtons, PointerEvent, PointerEventKind,
};
use spincard_ui_graphics::{Point, Size};

pub use hit_path_tracker::{HitPathTracker, PointerId};

pub struct AppShell<R>
where
    R: Renderer,
{
    runtime: Runtime,
    content: Box<dyn FnMut()>,
    renderer: R,
    cursor: (f32, f32),
    viewport: (f32, f32),
    buffer_size: (u32, u32),
    start_time: Instant,
    root: Option<LayoutNode>,
    layout_tree: Option<LayoutTree>,
    layout_dirty: bool,
    scene_dirty: bool,
    is_dirty: bool,
    /// Tracks which mouse buttons are currently pressed
    buttons_pressed: PointerButtons,
    /// Nodes hit on press, resolved against the current scene for every
    /// later event of the same gesture.
    hit_path_tracker: HitPathTracker,
}

impl<R> AppShell<R>
where
    R: Renderer,
    R::Error: Debug,
{
    /// Creates the shell and composes the first frame.
    ///
    /// `factory` runs once with the runtime handle so the application can
    /// create its observable state; the closure it returns is the content,
    /// composed again every time that state changes.
    pub fn new<F, C>(mut renderer: R, factory: F) -> Self
    where
        F: FnOnce(&RuntimeHandle) -> C,
        C: FnMut() + 'static,
    {
        let runtime = Runtime::new();
        let content = factory(&runtime.handle());
        renderer.scene_mut().clear();
        let mut shell = Self {
            runtime,
            content: Box::new(content),
            renderer,
            cursor: (0.0, 0.0),
            viewport: (800.0, 600.0),
            buffer_size: (800, 600),
            start_time: Instant::now(),
            root: None,
            layout_tree: None,
            layout_dirty: true,
            scene_dirty: true,
            is_dirty: true,
            buttons_pressed: PointerButtons::NONE,
            hit_path_tracker: HitPathTracker::new(),
        };
        shell.recompose_if_invalid();
        shell.process_frame();
        shell
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
        self.layout_dirty = true;
        self.mark_dirty();
        self.process_frame();
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    pub fn set_buffer_size(&mut self, width: u32, height: u32) {
        self.buffer_size = (width, height);
    }

    pub fn buffer_size(&self) -> (u32, u32) {
        self.buffer_size
    }

    pub fn scene(&self) -> &R::Scene {
        self.renderer.scene()
    }

    pub fn renderer(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Installs a callback that fires whenever the runtime wants a frame.
    pub fn set_frame_waker(&mut self, waker: impl Fn() + 'static) {
        self.runtime.set_frame_waker(waker);
    }

    pub fn clear_frame_waker(&mut self) {
        self.runtime.clear_frame_waker();
    }

    /// Returns true if the shell needs to redraw (dirty flag, layout dirty, active animations).
    pub fn needs_redraw(&self) -> bool {
        self.is_dirty || self.layout_dirty || self.has_active_animations()
    }

    /// Marks the shell as dirty, indicating a redraw is needed.
    pub fn mark_dirty(&mut self) {
        self.is_dirty = true;
    }

    /// Returns true if frame callbacks are pending or state changed since the
    /// last composition.
    pub fn has_active_animations(&self) -> bool {
        let handle = self.runtime.handle();
        handle.has_frame_callbacks() || handle.is_invalidated()
    }

    /// Advances to the current wall-clock frame.
    pub fn update(&mut self) {
        let frame_time = Instant::now()
            .checked_duration_since(self.start_time)
            .unwrap_or_default()
            .as_nanos() as u64;
        self.update_at(frame_time);
    }

    /// Runs one frame at `frame_time_nanos`: frame callbacks, recomposition
    /// when state changed, layout and scene rebuild.
    pub fn update_at(&mut self, frame_time_nanos: u64) {
        let ran = self
            .runtime
            .handle()
            .drain_frame_callbacks(frame_time_nanos);
        if ran > 0 {
            log::trace!("ran {ran} frame callbacks at {frame_time_nanos}ns");
        }
        self.recompose_if_invalid();
        self.process_frame();
        // Clear dirty flag after update (frame has been processed)
        self.is_dirty = false;
    }

    fn recompose_if_invalid(&mut self) {
        if !self.runtime.handle().take_invalidation() {
            return;
        }
        let content = &mut self.content;
        let root = compose(|| content());
        log::trace!("recomposed {} nodes", root.node_count());
        self.root = Some(root);
        self.layout_dirty = true;
    }

    fn resolve_hit_path(
        &self,
        pointer: PointerId,
    ) -> Vec<<<R as Renderer>::Scene as RenderScene>::HitTarget> {
        let Some(node_ids) = self.hit_path_tracker.get_path(pointer) else {
            return Vec::new();
        };

        let scene = self.renderer.scene();
        node_ids
            .iter()
            .filter_map(|&id| scene.find_target(id))
            .collect()
    }

    fn pointer_event(&self, kind: PointerEventKind) -> PointerEvent {
        let position = Point::new(self.cursor.0, self.cursor.1);
        PointerEvent::new(kind, position, position)
            .with_buttons(self.buttons_pressed)
            .with_down_position(self.hit_path_tracker.press_position(PointerId::PRIMARY))
    }

    /// Delivers `event` top to bottom until a target consumes it.
    fn dispatch_to(
        targets: Vec<<<R as Renderer>::Scene as RenderScene>::HitTarget>,
        event: &PointerEvent,
    ) {
        for hit in targets {
            hit.dispatch(event.clone());
            if event.is_consumed() {
                break;
            }
        }
    }

    /// Moves the pointer. While a button is held only the nodes captured by
    /// the press receive the move.
    pub fn set_cursor(&mut self, x: f32, y: f32) -> bool {
        self.cursor = (x, y);

        if self.buttons_pressed != PointerButtons::NONE {
            if !self.hit_path_tracker.has_path(PointerId::PRIMARY) {
                // Button went down outside the window.
                return false;
            }
            let targets = self.resolve_hit_path(PointerId::PRIMARY);
            if targets.is_empty() {
                return false;
            }
            let event = self.pointer_event(PointerEventKind::Move);
            Self::dispatch_to(targets, &event);
            self.mark_dirty();
            return true;
        }

        let hits = self.renderer.scene().hit_test(x, y);
        if hits.is_empty() {
            return false;
        }
        let event = self.pointer_event(PointerEventKind::Move);
        Self::dispatch_to(hits, &event);
        self.mark_dirty();
        true
    }

    /// Presses the primary button at the current cursor position.
    ///
    /// Hit testing runs against the scene the user is looking at, even when
    /// newer state has not been laid out yet.
    pub fn pointer_pressed(&mut self) -> bool {
        self.buttons_pressed.insert(PointerButton::Primary);

        let hits = self.renderer.scene().hit_test(self.cursor.0, self.cursor.1);
        let node_ids = hits.iter().map(|hit| hit.node_id()).collect();
        let position = Point::new(self.cursor.0, self.cursor.1);
        self.hit_path_tracker
            .add_hit_path(PointerId::PRIMARY, node_ids, position);

        if hits.is_empty() {
            return false;
        }
        let event = self.pointer_event(PointerEventKind::Down);
        Self::dispatch_to(hits, &event);
        self.mark_dirty();
        true
    }

    pub fn pointer_released(&mut self) -> bool {
        // Up reports the buttons still held after the release.
        self.buttons_pressed.remove(PointerButton::Primary);

        let targets = self.resolve_hit_path(PointerId::PRIMARY);
        let event = self.pointer_event(PointerEventKind::Up);
        self.hit_path_tracker.remove_path(PointerId::PRIMARY);

        if targets.is_empty() {
            return false;
        }
        Self::dispatch_to(targets, &event);
        self.mark_dirty();
        true
    }

    /// Mouse wheel over the current cursor position. `delta_y` is in pixels,
    /// positive toward the end of the content. Returns whether a scrollable
    /// node took it.
    pub fn mouse_wheel(&mut self, delta_y: f32) -> bool {
        let hits = self.renderer.scene().hit_test(self.cursor.0, self.cursor.1);
        if hits.is_empty() {
            return false;
        }
        let event = self
            .pointer_event(PointerEventKind::Scroll)
            .with_scroll_delta(Point::new(0.0, delta_y));
        Self::dispatch_to(hits, &event);
        if !event.is_consumed() {
            return false;
        }
        self.mark_dirty();
        true
    }

    /// Aborts the gesture in progress, e.g. when the window loses focus.
    pub fn cancel_gesture(&mut self) {
        let targets = self.resolve_hit_path(PointerId::PRIMARY);

        self.hit_path_tracker.clear();
        self.buttons_pressed = PointerButtons::NONE;

        if targets.is_empty() {
            return;
        }
        let event = self.pointer_event(PointerEventKind::Cancel);
        for hit in targets {
            hit.dispatch(event.clone());
        }
        self.mark_dirty();
    }

    pub fn is_gesture_active(&self) -> bool {
        self.hit_path_tracker.has_path(PointerId::PRIMARY)
    }

    pub fn log_debug_info(&self) {
        match self.layout_tree.as_ref() {
            Some(layout_tree) => {
                log::info!(
                    "screen {}x{} (buffer {}x{})",
                    self.viewport.0,
                    self.viewport.1,
                    self.buffer_size.0,
                    self.buffer_size.1
                );
                log_layout_tree(layout_tree);
            }
            None => log::info!("no layout available"),
        }
    }

    /// Get the current layout tree (for robot/testing)
    pub fn layout_tree(&self) -> Option<&LayoutTree> {
        self.layout_tree.as_ref()
    }

    fn process_frame(&mut self) {
        self.run_layout_phase();
        self.run_render_phase();
    }

    fn run_layout_phase(&mut self) {
        if !self.layout_dirty {
            return;
        }
        self.layout_dirty = false;

        let viewport_size = Size::new(self.viewport.0, self.viewport.1);
        self.layout_tree = self
            .root
            .as_ref()
            .map(|root| measure_layout(root, viewport_size));
        self.scene_dirty = true;
    }

    fn run_render_phase(&mut self) {
        if !self.scene_dirty {
            return;
        }
        self.scene_dirty = false;

        let viewport_size = Size::new(self.viewport.0, self.viewport.1);
        if let Some(layout_tree) = self.layout_tree.as_ref() {
            if let Err(err) = self.renderer.rebuild_scene(layout_tree, viewport_size) {
                log::error!("renderer rebuild failed: {err:?}");
            }
        } else {
            self.renderer.scene_mut().clear();
        }
    }
}

impl<R> Drop for AppShell<R>
where
    R: Renderer,
{
    fn drop(&mut self) {
        self.runtime.clear_frame_waker();
    }
}

#[cfg(test)]
#[path = "tests/app_shell_tests.rs"]
mod tests;
