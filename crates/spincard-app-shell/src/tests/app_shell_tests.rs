use super::*;
use std::cell::Cell;
use std::rc::Rc;

use spincard_core::MutableState;
use spincard_render_common::HeadlessRenderer;
use spincard_ui::{
    Box, BoxSpec, Column, ColumnSpec, Modifier, ScrollState, Slider, SliderColors, SliderRange,
    Text, TextStyle,
};

const FRAME: u64 = 16_666_667;

/// A label showing a counter above a 100x50 box that increments it.
fn counter_shell() -> (AppShell<HeadlessRenderer>, MutableState<i32>) {
    let mut counter = None;
    let shell = AppShell::new(HeadlessRenderer::new(), |runtime| {
        let count = MutableState::with_runtime(0, runtime.clone());
        counter = Some(count.clone());
        move || {
            let count = count.clone();
            Column(Modifier::empty(), ColumnSpec::new(), move || {
                Text(
                    format!("count {}", count.get()),
                    Modifier::empty(),
                    TextStyle::default(),
                );
                Box(
                    Modifier::empty()
                        .size(100.0, 50.0)
                        .test_tag("increment")
                        .clickable(move |_| count.update(|value| value + 1)),
                    BoxSpec::new(),
                    || {},
                );
            });
        }
    });
    let counter = counter.expect("factory runs during construction");
    (shell, counter)
}

/// A full-width 0..100 slider at the top of the screen.
fn slider_shell() -> (AppShell<HeadlessRenderer>, MutableState<f32>) {
    let mut captured = None;
    let shell = AppShell::new(HeadlessRenderer::new(), |runtime| {
        let value = MutableState::with_runtime(0.0f32, runtime.clone());
        captured = Some(value.clone());
        move || {
            let value = value.clone();
            let range = SliderRange::new(0.0, 100.0).expect("valid range");
            Slider(
                value.get(),
                move |next| value.set_value(next),
                range,
                SliderColors::default(),
                Modifier::empty(),
            );
        }
    });
    let value = captured.expect("factory runs during construction");
    (shell, value)
}

/// A 200x100 scrolling column of five 50 px rows, the first one clickable.
fn scroll_shell() -> (AppShell<HeadlessRenderer>, ScrollState, MutableState<i32>) {
    let mut captured = None;
    let shell = AppShell::new(HeadlessRenderer::new(), |runtime| {
        let scroll = ScrollState::new(runtime);
        let clicks = MutableState::with_runtime(0, runtime.clone());
        captured = Some((scroll.clone(), clicks.clone()));
        move || {
            let clicks = clicks.clone();
            Column(
                Modifier::empty()
                    .size(200.0, 100.0)
                    .vertical_scroll(scroll.clone()),
                ColumnSpec::new(),
                move || {
                    for index in 0..5 {
                        let clicks = clicks.clone();
                        Box(
                            Modifier::empty()
                                .size(200.0, 50.0)
                                .test_tag(format!("row{index}"))
                                .clickable(move |_| clicks.update(|value| value + 1)),
                            BoxSpec::new(),
                            || {},
                        );
                    }
                },
            );
        }
    });
    let (scroll, clicks) = captured.expect("factory runs during construction");
    (shell, scroll, clicks)
}

fn row_top(shell: &AppShell<HeadlessRenderer>, index: usize) -> f32 {
    shell
        .layout_tree()
        .expect("layout is computed")
        .find_by_tag(&format!("row{index}"))
        .expect("row is laid out")
        .rect
        .y
}

fn texts(shell: &AppShell<HeadlessRenderer>) -> Vec<String> {
    shell
        .layout_tree()
        .expect("layout is computed")
        .texts()
        .into_iter()
        .map(|(_, text)| text)
        .collect()
}

#[test]
fn first_frame_is_composed_before_any_update() {
    let (shell, _) = counter_shell();

    assert_eq!(texts(&shell), vec!["count 0".to_string()]);
    assert_eq!(shell.scene().hits.len(), 1);
    assert!(!shell.has_active_animations());
}

#[test]
fn click_takes_effect_on_the_next_update() {
    let (mut shell, count) = counter_shell();

    shell.set_cursor(50.0, 45.0);
    assert!(shell.pointer_pressed());
    assert!(shell.pointer_released());
    assert_eq!(count.get(), 1);
    assert_eq!(texts(&shell), vec!["count 0".to_string()]);
    assert!(shell.needs_redraw());

    shell.update_at(FRAME);
    assert_eq!(texts(&shell), vec!["count 1".to_string()]);
    assert!(!shell.needs_redraw());
}

#[test]
fn click_fires_on_release_not_on_press() {
    let (mut shell, count) = counter_shell();

    shell.set_cursor(50.0, 45.0);
    shell.pointer_pressed();
    assert_eq!(count.get(), 0);
    shell.pointer_released();
    assert_eq!(count.get(), 1);
}

#[test]
fn dragging_off_a_clickable_cancels_the_click() {
    let (mut shell, count) = counter_shell();

    shell.set_cursor(50.0, 45.0);
    shell.pointer_pressed();
    assert!(shell.set_cursor(50.0, 300.0));
    shell.pointer_released();
    assert_eq!(count.get(), 0);

    // Travel that ends back near the press still clicks.
    shell.set_cursor(50.0, 45.0);
    shell.pointer_pressed();
    shell.set_cursor(90.0, 60.0);
    shell.set_cursor(50.0, 45.0);
    shell.pointer_released();
    assert_eq!(count.get(), 1);
}

#[test]
fn mouse_wheel_scrolls_the_column_under_the_cursor() {
    let (mut shell, scroll, _) = scroll_shell();
    assert_eq!(scroll.max_value(), 150.0);

    shell.set_cursor(300.0, 50.0);
    assert!(!shell.mouse_wheel(40.0));

    shell.set_cursor(100.0, 50.0);
    assert!(shell.mouse_wheel(40.0));
    assert_eq!(scroll.value(), 40.0);
    shell.update_at(FRAME);
    assert_eq!(row_top(&shell, 0), -40.0);

    assert!(shell.mouse_wheel(1000.0));
    assert_eq!(scroll.value(), 150.0);
    assert!(!shell.mouse_wheel(10.0));
    assert!(shell.mouse_wheel(-500.0));
    assert_eq!(scroll.value(), 0.0);
}

#[test]
fn dragging_a_row_scrolls_instead_of_clicking() {
    let (mut shell, scroll, clicks) = scroll_shell();

    shell.set_cursor(100.0, 90.0);
    shell.pointer_pressed();
    for y in [80.0, 60.0, 40.0, 30.0] {
        shell.set_cursor(100.0, y);
        shell.update_at(FRAME);
    }
    shell.pointer_released();
    shell.update_at(2 * FRAME);

    assert_eq!(scroll.value(), 60.0);
    assert_eq!(row_top(&shell, 1), -10.0);
    assert_eq!(clicks.get(), 0);

    // Row 1 now spans y -10..40; a plain click lands on it.
    shell.set_cursor(100.0, 20.0);
    shell.pointer_pressed();
    shell.pointer_released();
    assert_eq!(clicks.get(), 1);
}

#[test]
fn press_on_empty_space_reaches_nothing() {
    let (mut shell, count) = counter_shell();

    assert!(!shell.set_cursor(400.0, 400.0));
    assert!(!shell.pointer_pressed());
    assert!(!shell.pointer_released());
    assert!(!shell.is_gesture_active());
    assert_eq!(count.get(), 0);
}

#[test]
fn drag_stays_with_the_slider_outside_its_bounds() {
    let (mut shell, value) = slider_shell();

    shell.set_cursor(400.0, 24.0);
    assert!(shell.pointer_pressed());
    assert_eq!(value.get(), 50.0);
    shell.update_at(FRAME);

    assert!(shell.set_cursor(2000.0, 500.0));
    assert_eq!(value.get(), 100.0);
    shell.update_at(2 * FRAME);

    shell.set_cursor(-50.0, 500.0);
    assert_eq!(value.get(), 0.0);

    shell.pointer_released();
    assert!(!shell.is_gesture_active());

    // Hovering without a button changes nothing.
    shell.set_cursor(600.0, 24.0);
    assert_eq!(value.get(), 0.0);
}

#[test]
fn cancel_ends_the_gesture() {
    let (mut shell, value) = slider_shell();

    shell.set_cursor(400.0, 24.0);
    shell.pointer_pressed();
    shell.cancel_gesture();
    assert!(!shell.is_gesture_active());

    shell.set_cursor(790.0, 24.0);
    assert_eq!(value.get(), 50.0);
}

#[test]
fn frame_callbacks_run_with_the_given_frame_time() {
    let (mut shell, _) = counter_shell();
    let seen = Rc::new(Cell::new(0u64));
    let sink = seen.clone();

    shell
        .runtime_handle()
        .register_frame_callback(move |time| sink.set(time));
    assert!(shell.has_active_animations());

    shell.update_at(42 * FRAME);
    assert_eq!(seen.get(), 42 * FRAME);
    assert!(!shell.has_active_animations());
}

#[test]
fn state_writes_wake_the_event_loop() {
    let (mut shell, count) = counter_shell();
    let woken = Rc::new(Cell::new(0));
    let sink = woken.clone();
    shell.set_frame_waker(move || sink.set(sink.get() + 1));

    count.set_value(5);
    assert_eq!(woken.get(), 1);
    // Already invalid: a second write does not wake again.
    count.set_value(6);
    assert_eq!(woken.get(), 1);

    shell.update_at(FRAME);
    assert_eq!(texts(&shell), vec!["count 6".to_string()]);

    shell.clear_frame_waker();
    count.set_value(7);
    assert_eq!(woken.get(), 1);
}

#[test]
fn viewport_change_relays_out() {
    let (mut shell, _) = slider_shell();
    let width = |shell: &AppShell<HeadlessRenderer>| {
        shell
            .layout_tree()
            .expect("layout is computed")
            .root()
            .children[0]
            .rect
            .width
    };
    assert_eq!(width(&shell), 800.0);

    shell.set_viewport(300.0, 200.0);
    assert_eq!(shell.viewport(), (300.0, 200.0));
    assert_eq!(width(&shell), 300.0);
}
