use super::*;
use spincard_core::Runtime;
use spincard_ui_graphics::{Color, Rect, RoundedCornerShape, Size};

fn viewport() -> Size {
    Size::new(400.0, 300.0)
}

#[test]
fn ids_follow_emission_order() {
    let root = compose(|| {
        Column(Modifier::empty(), ColumnSpec::new(), || {
            Spacer(Size::new(10.0, 10.0));
            Box(Modifier::empty(), BoxSpec::new(), || {
                Spacer(Size::new(5.0, 5.0));
            });
        });
        Spacer(Size::new(1.0, 1.0));
    });

    assert_eq!(root.id, ROOT_NODE_ID);
    assert_eq!(root.node_count(), 6);
    let column = &root.children[0];
    assert_eq!(column.id, 1);
    assert_eq!(column.children[0].id, 2);
    assert_eq!(column.children[1].id, 3);
    assert_eq!(column.children[1].children[0].id, 4);
    assert_eq!(root.children[1].id, 5);
}

#[test]
fn composing_twice_gives_the_same_ids() {
    let content = || {
        Column(Modifier::empty(), ColumnSpec::new(), || {
            Text("a", Modifier::empty(), TextStyle::default());
            Text("b", Modifier::empty(), TextStyle::default());
        });
    };
    let first = compose(content);
    let second = compose(content);
    assert_eq!(first.children[0].children[1].id, second.children[0].children[1].id);
}

#[test]
fn emitting_outside_a_composition_is_ignored() {
    assert!(!is_composing());
    let id = Spacer(Size::new(10.0, 10.0));
    assert_eq!(id, ROOT_NODE_ID);
}

#[test]
fn column_stacks_children_with_spacing_and_padding() {
    let root = compose(|| {
        Column(
            Modifier::empty().padding(10.0),
            ColumnSpec::new().vertical_arrangement(LinearArrangement::SpacedBy(8.0)),
            || {
                Spacer(Size::new(50.0, 20.0));
                Spacer(Size::new(30.0, 40.0));
            },
        );
    });
    let tree = measure_layout(&root, viewport());

    assert_eq!(tree.root().rect, Rect::new(0.0, 0.0, 400.0, 300.0));
    let column = &tree.root().children[0];
    assert_eq!(column.rect, Rect::new(0.0, 0.0, 70.0, 88.0));
    assert_eq!(column.children[0].rect, Rect::new(10.0, 10.0, 50.0, 20.0));
    assert_eq!(column.children[1].rect, Rect::new(10.0, 38.0, 30.0, 40.0));
}

#[test]
fn box_aligns_children_and_honors_align_modifier() {
    let root = compose(|| {
        Box(
            Modifier::empty().fill_max_width(),
            BoxSpec::new().content_alignment(Alignment::TOP_CENTER),
            || {
                Spacer(Size::new(150.0, 150.0));
                Text(
                    "end",
                    Modifier::empty().align(Alignment::CENTER_END),
                    TextStyle::default(),
                );
            },
        );
    });
    let tree = measure_layout(&root, viewport());

    let boxed = &tree.root().children[0];
    assert_eq!(boxed.rect, Rect::new(0.0, 0.0, 400.0, 150.0));
    assert_eq!(boxed.children[0].rect, Rect::new(125.0, 0.0, 150.0, 150.0));
    // 3 characters at 8 px each, 20 px line.
    assert_eq!(boxed.children[1].rect, Rect::new(376.0, 65.0, 24.0, 20.0));
}

#[test]
fn first_size_wins_and_padding_accumulates() {
    let slices = Modifier::empty()
        .size(150.0, 150.0)
        .size(10.0, 10.0)
        .padding(4.0)
        .padding_each(1.0, 2.0, 3.0, 4.0)
        .slices();

    assert_eq!(slices.width(), Some(150.0));
    assert_eq!(slices.height(), Some(150.0));
    let padding = slices.padding();
    assert_eq!(
        (padding.left, padding.top, padding.right, padding.bottom),
        (5.0, 6.0, 7.0, 8.0)
    );
}

#[test]
fn card_modifier_carries_shape_color_and_click() {
    let root = compose(|| {
        Card(
            Modifier::empty().size(150.0, 150.0).test_tag("card"),
            CardSpec {
                background_color: Color::BLACK,
                shape: RoundedCornerShape::uniform(16.0),
            },
            || {},
            || {},
        );
    });
    let tree = measure_layout(&root, viewport());
    let card = tree.find_by_tag("card").expect("card is laid out");
    let slices = card.node_data.modifier_slices();

    assert_eq!(card.rect, Rect::new(0.0, 0.0, 150.0, 150.0));
    assert_eq!(slices.background(), Some(Color::BLACK));
    assert_eq!(slices.shape(), Some(RoundedCornerShape::uniform(16.0)));
    assert_eq!(slices.click_handlers().len(), 1);
}

#[test]
fn texts_are_reported_in_composition_order() {
    let root = compose(|| {
        Column(Modifier::empty(), ColumnSpec::new(), || {
            Text("X scale", Modifier::empty(), TextStyle::default());
            Text("1.00", Modifier::empty(), TextStyle::default());
        });
    });
    let tree = measure_layout(&root, viewport());
    let texts: Vec<_> = tree.texts().into_iter().map(|(_, text)| text).collect();
    assert_eq!(texts, vec!["X scale".to_string(), "1.00".to_string()]);
}

#[test]
fn fill_max_size_takes_the_height_left_in_a_column() {
    let root = compose(|| {
        Column(Modifier::empty().fill_max_size(), ColumnSpec::new(), || {
            Spacer(Size::new(10.0, 24.0));
            Box(
                Modifier::empty().fill_max_size().test_tag("panel"),
                BoxSpec::new(),
                || {
                    Spacer(Size::new(10.0, 30.0));
                },
            );
        });
    });
    let tree = measure_layout(&root, viewport());
    let panel = tree.find_by_tag("panel").expect("panel is laid out");
    assert_eq!(panel.rect, Rect::new(0.0, 24.0, 400.0, 276.0));
}

fn scrolling_column(scroll: &ScrollState) -> LayoutTree {
    let scroll = scroll.clone();
    let root = compose(move || {
        Column(
            Modifier::empty()
                .fill_max_size()
                .padding_each(0.0, 0.0, 0.0, 10.0)
                .vertical_scroll(scroll.clone())
                .test_tag("list"),
            ColumnSpec::new(),
            || {
                for index in 0..5 {
                    Box(
                        Modifier::empty()
                            .fill_max_size()
                            .height(100.0)
                            .test_tag(format!("row{index}")),
                        BoxSpec::new(),
                        || {},
                    );
                }
            },
        );
    });
    measure_layout(&root, viewport())
}

#[test]
fn vertical_scroll_records_overflow_and_offsets_children() {
    let runtime = Runtime::new();
    let scroll = ScrollState::new(&runtime.handle());

    let tree = scrolling_column(&scroll);
    let list = tree.find_by_tag("list").expect("list is laid out");
    assert_eq!(list.rect, Rect::new(0.0, 0.0, 400.0, 300.0));
    assert!(list.node_data.modifier_slices().clips_to_bounds());
    // Five 100 px rows plus 10 px bottom padding in a 300 px viewport.
    assert_eq!(scroll.max_value(), 210.0);
    assert_eq!(
        tree.find_by_tag("row4").map(|row| row.rect),
        Some(Rect::new(0.0, 400.0, 400.0, 100.0))
    );

    scroll.dispatch_raw_delta(1000.0);
    let tree = scrolling_column(&scroll);
    assert_eq!(scroll.value(), 210.0);
    assert_eq!(
        tree.find_by_tag("row0").map(|row| row.rect),
        Some(Rect::new(0.0, -210.0, 400.0, 100.0))
    );
    assert_eq!(
        tree.find_by_tag("row4").map(|row| row.rect),
        Some(Rect::new(0.0, 190.0, 400.0, 100.0))
    );
}

struct WideMeasurer;

impl TextMeasurer for WideMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics {
        TextMetrics {
            width: text.len() as f32 * font_size,
            height: font_size,
        }
    }
}

#[test]
fn installed_text_measurer_sizes_text_until_reset() {
    let content = || {
        Text("abc", Modifier::empty().test_tag("label"), TextStyle::default());
    };

    set_text_measurer(WideMeasurer);
    let wide = measure_layout(&compose(content), viewport());
    reset_text_measurer();
    let monospaced = measure_layout(&compose(content), viewport());

    let rect_of = |tree: &LayoutTree| tree.find_by_tag("label").map(|node| node.rect.size());
    assert_eq!(rect_of(&wide), Some(Size::new(48.0, 16.0)));
    assert_eq!(rect_of(&monospaced), Some(Size::new(24.0, 20.0)));
}
