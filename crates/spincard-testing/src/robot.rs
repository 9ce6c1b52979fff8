//! Robot testing framework for end-to-end app testing
//!
//! A [`RobotTestRule`] drives a real [`AppShell`] headlessly: it feeds
//! pointer input, advances a virtual frame clock and queries the laid-out
//! screen.
//!
//! # Example
//!
//! ```
//! use spincard_testing::robot::create_headless_robot_test;
//!
//! let mut robot = create_headless_robot_test(800, 600, |_runtime| {
//!     || {
//!         // Widgets here
//!     }
//! });
//!
//! robot.click_at(100.0, 100.0);
//! robot.wait_for_idle();
//! ```

use spincard_app_shell::AppShell;
use spincard_core::RuntimeHandle;
use spincard_render_common::{HeadlessRenderer, RenderScene, Renderer};
use spincard_ui::LayoutTree;
use spincard_ui_graphics::{Color, GraphicsLayer, Point, Rect};

/// One frame at 60 FPS.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Ten seconds of virtual time; every demo animation settles well within it.
const MAX_IDLE_FRAMES: usize = 600;

/// Main robot testing rule that provides programmatic control over an app.
///
/// Frame time is virtual: it only moves when the robot advances it, so
/// animation tests are deterministic.
pub struct RobotTestRule<R>
where
    R: Renderer,
{
    shell: AppShell<R>,
    frame_time_nanos: u64,
}

impl<R> RobotTestRule<R>
where
    R: Renderer,
    R::Error: std::fmt::Debug,
{
    /// Create a new robot test rule with the given viewport size and app content.
    pub fn new<F, C>(width: u32, height: u32, renderer: R, factory: F) -> Self
    where
        F: FnOnce(&RuntimeHandle) -> C,
        C: FnMut() + 'static,
    {
        let mut shell = AppShell::new(renderer, factory);
        shell.set_viewport(width as f32, height as f32);
        shell.set_buffer_size(width, height);

        Self {
            shell,
            frame_time_nanos: 0,
        }
    }

    pub fn viewport_size(&self) -> (u32, u32) {
        self.shell.buffer_size()
    }

    /// Resize the viewport (simulates window resize).
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.shell.set_viewport(width as f32, height as f32);
        self.shell.set_buffer_size(width, height);
    }

    /// Current virtual frame time.
    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    /// Moves the virtual clock forward by `nanos` and runs one frame.
    pub fn advance_time(&mut self, nanos: u64) {
        self.frame_time_nanos += nanos;
        self.shell.update_at(self.frame_time_nanos);
    }

    pub fn advance_frame(&mut self) {
        self.advance_time(FRAME_NANOS);
    }

    /// Runs frames until no recomposition, redraw or animation is pending.
    ///
    /// Returns false if the app is still busy after ten seconds of virtual
    /// time.
    pub fn wait_for_idle(&mut self) -> bool {
        // Pending input is applied without moving the clock.
        self.pump();
        for _ in 0..MAX_IDLE_FRAMES {
            if !self.shell.needs_redraw() {
                return true;
            }
            self.advance_frame();
        }
        log::warn!("app still busy after {MAX_IDLE_FRAMES} frames");
        false
    }

    fn pump(&mut self) {
        self.shell.update_at(self.frame_time_nanos);
    }

    /// Press and release at the given coordinates, then wait for idle.
    ///
    /// Returns true if the press hit a UI element.
    pub fn click_at(&mut self, x: f32, y: f32) -> bool {
        self.shell.set_cursor(x, y);
        let hit = self.shell.pointer_pressed();
        self.shell.pointer_released();
        self.wait_for_idle();
        hit
    }

    /// Move the cursor to the given coordinates.
    ///
    /// Returns true if the move hit a UI element, false otherwise.
    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        let hit = self.shell.set_cursor(x, y);
        self.wait_for_idle();
        hit
    }

    /// Press, move in ten steps one frame apart, and release.
    pub fn drag(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32) {
        self.shell.set_cursor(from_x, from_y);
        self.shell.pointer_pressed();
        self.advance_frame();

        let steps = 10;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = from_x + (to_x - from_x) * t;
            let y = from_y + (to_y - from_y) * t;
            self.shell.set_cursor(x, y);
            self.advance_frame();
        }

        self.shell.pointer_released();
        self.wait_for_idle();
    }

    /// Turns the mouse wheel by `delta_y` pixels over `(x, y)`, then waits
    /// for idle. Positive values scroll toward the end of the content.
    ///
    /// Returns true if a scrollable element took the scroll.
    pub fn scroll_at(&mut self, x: f32, y: f32, delta_y: f32) -> bool {
        self.shell.set_cursor(x, y);
        let scrolled = self.shell.mouse_wheel(delta_y);
        self.wait_for_idle();
        scrolled
    }

    pub fn mouse_move(&mut self, x: f32, y: f32) {
        self.shell.set_cursor(x, y);
        self.pump();
    }

    pub fn mouse_down(&mut self) {
        self.shell.pointer_pressed();
        self.pump();
    }

    pub fn mouse_up(&mut self) {
        self.shell.pointer_released();
        self.pump();
    }

    pub fn find_by_text(&mut self, text: &str) -> ElementFinder<'_, R> {
        self.pump();
        ElementFinder {
            robot: self,
            query: FinderQuery::Text(text.to_string()),
        }
    }

    pub fn find_by_tag(&mut self, tag: &str) -> ElementFinder<'_, R> {
        self.pump();
        ElementFinder {
            robot: self,
            query: FinderQuery::Tag(tag.to_string()),
        }
    }

    /// Finder for the topmost pointer target at the given position.
    pub fn find_at_position(&mut self, x: f32, y: f32) -> ElementFinder<'_, R> {
        self.pump();
        ElementFinder {
            robot: self,
            query: FinderQuery::Position(x, y),
        }
    }

    /// All text on screen in composition order.
    pub fn get_all_text(&mut self) -> Vec<String> {
        self.pump();
        self.layout_tree()
            .map(|tree| tree.texts().into_iter().map(|(_, text)| text).collect())
            .unwrap_or_default()
    }

    /// Text of the text node tagged `tag`.
    pub fn text_of(&mut self, tag: &str) -> Option<String> {
        self.pump();
        self.layout_tree()?
            .find_by_tag(tag)?
            .node_data
            .text_content()
            .map(str::to_string)
    }

    /// Background color of the node tagged `tag`.
    pub fn background_of(&mut self, tag: &str) -> Option<Color> {
        self.pump();
        self.layout_tree()?
            .find_by_tag(tag)?
            .node_data
            .modifier_slices()
            .background()
    }

    /// Graphics layer currently applied to the node tagged `tag`.
    pub fn graphics_layer_of(&mut self, tag: &str) -> Option<GraphicsLayer> {
        self.pump();
        self.layout_tree()?
            .find_by_tag(tag)?
            .node_data
            .modifier_slices()
            .graphics_layer()
    }

    pub fn shell(&self) -> &AppShell<R> {
        &self.shell
    }

    fn layout_tree(&self) -> Option<&LayoutTree> {
        self.shell.layout_tree()
    }
}

#[derive(Clone, Debug)]
enum FinderQuery {
    Text(String),
    Tag(String),
    Position(f32, f32),
}

/// A finder for locating and interacting with UI elements.
///
/// Created by `RobotTestRule::find_by_text`, `find_by_tag` or
/// `find_at_position`.
pub struct ElementFinder<'a, R>
where
    R: Renderer,
{
    robot: &'a mut RobotTestRule<R>,
    query: FinderQuery,
}

impl<'a, R> ElementFinder<'a, R>
where
    R: Renderer,
    R::Error: std::fmt::Debug,
{
    pub fn exists(&mut self) -> bool {
        self.bounds().is_some()
    }

    /// Layout bounds of the first match, before any graphics layer.
    pub fn bounds(&mut self) -> Option<Rect> {
        let tree = self.robot.layout_tree()?;
        match &self.query {
            FinderQuery::Text(text) => tree
                .texts()
                .into_iter()
                .find(|(_, content)| content.contains(text.as_str()))
                .map(|(rect, _)| rect),
            FinderQuery::Tag(tag) => tree.find_by_tag(tag).map(|node| node.rect),
            FinderQuery::Position(x, y) => {
                let node_id = *self
                    .robot
                    .shell
                    .scene()
                    .hit_test_nodes(*x, *y)
                    .first()?;
                tree.find_node(node_id).map(|node| node.rect)
            }
        }
    }

    pub fn center(&mut self) -> Option<Point> {
        self.bounds().map(|rect| rect.center())
    }

    /// Click on this element at its center.
    ///
    /// Returns true if the element was found and clicked.
    pub fn click(&mut self) -> bool {
        match self.center() {
            Some(center) => self.robot.click_at(center.x, center.y),
            None => false,
        }
    }

    /// Drag from the element's center to `(x, y)`.
    pub fn drag_to(&mut self, x: f32, y: f32) -> bool {
        match self.center() {
            Some(center) => {
                self.robot.drag(center.x, center.y, x, y);
                true
            }
            None => false,
        }
    }

    /// Panics if the element is not found.
    pub fn assert_exists(&mut self) {
        assert!(self.exists(), "Element not found: {:?}", self.query);
    }

    pub fn assert_not_exists(&mut self) {
        assert!(
            !self.exists(),
            "Element unexpectedly found: {:?}",
            self.query
        );
    }
}

/// Create a headless robot test rule. The scene is built and hit-tested
/// like on desktop but never drawn.
pub fn create_headless_robot_test<F, C>(
    width: u32,
    height: u32,
    factory: F,
) -> RobotTestRule<HeadlessRenderer>
where
    F: FnOnce(&RuntimeHandle) -> C,
    C: FnMut() + 'static,
{
    RobotTestRule::new(width, height, HeadlessRenderer::new(), factory)
}

#[cfg(test)]
mod tests {
    use super::*;

    use spincard_core::MutableState;
    use spincard_ui::{
        Box, BoxSpec, Column, ColumnSpec, Modifier, ScrollState, Slider, SliderColors,
        SliderRange, Spacer, Text, TextStyle,
    };
    use spincard_ui_graphics::Size;

    fn counter_robot() -> (RobotTestRule<HeadlessRenderer>, MutableState<i32>) {
        let mut counter = None;
        let robot = create_headless_robot_test(400, 300, |runtime| {
            let count = MutableState::with_runtime(0, runtime.clone());
            counter = Some(count.clone());
            move || {
                let count = count.clone();
                Column(Modifier::empty(), ColumnSpec::new(), move || {
                    Text(
                        format!("clicks: {}", count.get()),
                        Modifier::empty(),
                        TextStyle::default(),
                    );
                    Box(
                        Modifier::empty()
                            .size(120.0, 40.0)
                            .test_tag("button")
                            .clickable(move |_| count.update(|value| value + 1)),
                        BoxSpec::new(),
                        || {},
                    );
                });
            }
        });
        (robot, counter.expect("factory runs during construction"))
    }

    #[test]
    fn robot_reports_viewport() {
        let robot = create_headless_robot_test(800, 600, |_| || {});
        assert_eq!(robot.viewport_size(), (800, 600));
    }

    #[test]
    fn click_by_tag_updates_text() {
        let (mut robot, count) = counter_robot();

        assert!(robot.find_by_tag("button").click());
        assert_eq!(count.get(), 1);
        assert_eq!(robot.get_all_text(), vec!["clicks: 1".to_string()]);
        robot.find_by_text("clicks: 1").assert_exists();
        robot.find_by_text("clicks: 0").assert_not_exists();
    }

    #[test]
    fn click_on_empty_space_reports_a_miss() {
        let (mut robot, count) = counter_robot();
        assert!(!robot.click_at(390.0, 290.0));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn position_finder_resolves_the_hit_node() {
        let (mut robot, _) = counter_robot();
        let bounds = robot
            .find_at_position(10.0, 30.0)
            .bounds()
            .expect("button under the pointer");
        assert_eq!(bounds, Rect::new(0.0, 20.0, 120.0, 40.0));
        assert!(!robot.find_at_position(300.0, 200.0).exists());
    }

    fn slider_robot() -> (RobotTestRule<HeadlessRenderer>, MutableState<f32>) {
        let mut captured = None;
        let robot = create_headless_robot_test(400, 300, |runtime| {
            let value = MutableState::with_runtime(0.0f32, runtime.clone());
            captured = Some(value.clone());
            move || {
                let value = value.clone();
                Slider(
                    value.get(),
                    move |next| value.set_value(next),
                    SliderRange::new(-1.0, 1.0).expect("valid range"),
                    SliderColors::default(),
                    Modifier::empty().test_tag("slider"),
                );
            }
        });
        (robot, captured.expect("factory runs during construction"))
    }

    #[test]
    fn hovering_a_slider_leaves_it_alone() {
        let (mut robot, value) = slider_robot();

        assert!(robot.move_to(350.0, 24.0));
        assert!(!robot.move_to(350.0, 200.0));
        assert_eq!(value.get(), 0.0);
    }

    #[test]
    fn drag_reaches_the_slider_end() {
        let (mut robot, value) = slider_robot();

        assert!(robot.find_by_tag("slider").drag_to(1000.0, 24.0));
        assert_eq!(value.get(), 1.0);
        let before = robot.frame_time_nanos();
        robot.drag(200.0, 24.0, -100.0, 24.0);
        assert_eq!(value.get(), -1.0);
        assert!(robot.frame_time_nanos() >= before + 11 * FRAME_NANOS);
    }

    #[test]
    fn scroll_at_moves_a_scrolling_column() {
        let mut captured = None;
        let mut robot = create_headless_robot_test(400, 300, |runtime| {
            let scroll = ScrollState::new(runtime);
            captured = Some(scroll.clone());
            move || {
                Column(
                    Modifier::empty()
                        .fill_max_size()
                        .vertical_scroll(scroll.clone()),
                    ColumnSpec::new(),
                    || {
                        Spacer(Size::new(100.0, 500.0));
                        Text("bottom", Modifier::empty(), TextStyle::default());
                    },
                );
            }
        });
        let scroll = captured.expect("factory runs during construction");

        assert!(robot.scroll_at(50.0, 50.0, 1000.0));
        assert_eq!(scroll.value(), 220.0);
        let bottom = robot
            .find_by_text("bottom")
            .bounds()
            .expect("text is laid out");
        assert_eq!(bottom.y, 280.0);
        assert!(!robot.scroll_at(50.0, 50.0, 10.0));
    }

    #[test]
    fn advance_time_drives_frame_callbacks() {
        let (mut robot, _) = counter_robot();
        let seen = std::rc::Rc::new(std::cell::Cell::new(0));
        let sink = seen.clone();
        robot
            .shell()
            .runtime_handle()
            .register_frame_callback(move |time| sink.set(time));

        robot.advance_time(5 * FRAME_NANOS);
        assert_eq!(seen.get(), 5 * FRAME_NANOS);
        assert!(robot.wait_for_idle());
    }
}
