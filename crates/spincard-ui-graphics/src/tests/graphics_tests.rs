use super::*;

fn assert_point_near(actual: Point, expected: Point) {
    assert!(
        (actual.x - expected.x).abs() < 1e-3 && (actual.y - expected.y).abs() < 1e-3,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

const CARD: Size = Size::new(100.0, 100.0);

#[test]
fn identity_layer_keeps_points_in_place() {
    let layer = GraphicsLayer::default();
    assert!(layer.is_identity());
    for point in [Point::ZERO, Point::new(100.0, 0.0), Point::new(37.0, 81.0)] {
        assert_point_near(layer.transform_point(point, CARD), point);
    }
}

#[test]
fn quarter_turn_about_z_moves_top_left_to_top_right() {
    let layer = GraphicsLayer {
        rotation_z: 90.0,
        ..Default::default()
    };
    assert_point_near(
        layer.transform_point(Point::ZERO, CARD),
        Point::new(100.0, 0.0),
    );
}

#[test]
fn scale_is_about_the_center() {
    let layer = GraphicsLayer {
        scale_x: 2.0,
        scale_y: 0.5,
        ..Default::default()
    };
    assert_point_near(
        layer.transform_point(Point::ZERO, CARD),
        Point::new(-50.0, 25.0),
    );
    assert_point_near(
        layer.transform_point(Point::new(50.0, 50.0), CARD),
        Point::new(50.0, 50.0),
    );
}

#[test]
fn translation_moves_content_before_rotation() {
    let layer = GraphicsLayer {
        translation_x: 10.0,
        translation_y: -20.0,
        ..Default::default()
    };
    assert_point_near(
        layer.transform_point(Point::new(50.0, 50.0), CARD),
        Point::new(60.0, 30.0),
    );

    let rotated = GraphicsLayer {
        translation_x: 10.0,
        rotation_z: 180.0,
        ..Default::default()
    };
    assert_point_near(
        rotated.transform_point(Point::new(50.0, 50.0), CARD),
        Point::new(40.0, 50.0),
    );
}

#[test]
fn edge_on_x_rotation_collapses_height() {
    let layer = GraphicsLayer {
        rotation_x: 90.0,
        ..Default::default()
    };
    let top = layer.transform_point(Point::new(50.0, 0.0), CARD);
    let bottom = layer.transform_point(Point::new(50.0, 100.0), CARD);
    assert!((top.y - bottom.y).abs() < 1e-3);
}

#[test]
fn y_rotation_narrows_and_applies_perspective() {
    let layer = GraphicsLayer {
        rotation_y: 60.0,
        ..Default::default()
    };
    let left = layer.transform_point(Point::new(0.0, 50.0), CARD);
    let right = layer.transform_point(Point::new(100.0, 50.0), CARD);
    let width = (right.x - left.x).abs();
    assert!(width < 60.0 && width > 40.0, "width was {width}");

    // One edge comes toward the camera and grows, the other recedes.
    let top_left = layer.transform_point(Point::ZERO, CARD);
    let top_right = layer.transform_point(Point::new(100.0, 0.0), CARD);
    assert!((top_left.y - top_right.y).abs() > 1.0);
}

#[test]
fn plain_rect_outline_is_four_corners() {
    let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
    let outline = rounded_rect_outline(rect, None);
    assert_eq!(
        outline,
        vec![
            Point::new(10.0, 20.0),
            Point::new(40.0, 20.0),
            Point::new(40.0, 60.0),
            Point::new(10.0, 60.0),
        ]
    );
}

#[test]
fn rounded_outline_cuts_corners() {
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    let outline = rounded_rect_outline(rect, Some(RoundedCornerShape::uniform(16.0)));
    assert!(outline.len() > 4);
    assert!(point_in_polygon(&outline, 50.0, 50.0));
    assert!(point_in_polygon(&outline, 50.0, 1.0));
    assert!(!point_in_polygon(&outline, 1.0, 1.0));
    assert!(!point_in_polygon(&outline, 99.0, 99.0));

    let bounds = polygon_bounds(&outline).expect("bounds");
    assert!((bounds.width - 100.0).abs() < 1e-3);
    assert!((bounds.height - 100.0).abs() < 1e-3);
}

#[test]
fn corner_radius_is_clamped_to_half_the_short_side() {
    let radii = RoundedCornerShape::uniform(80.0).resolve(100.0, 40.0);
    assert_eq!(radii, CornerRadii::uniform(20.0));
}

#[test]
fn inset_never_goes_negative() {
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0).inset(EdgeInsets::uniform(8.0));
    assert_eq!(rect, Rect::new(8.0, 8.0, 0.0, 0.0));
}

#[test]
fn intersect_keeps_the_overlap_only() {
    let a = Rect::new(0.0, 0.0, 100.0, 50.0);
    assert_eq!(
        a.intersect(Rect::new(60.0, 20.0, 100.0, 100.0)),
        Some(Rect::new(60.0, 20.0, 40.0, 30.0))
    );
    assert_eq!(a.intersect(Rect::new(100.0, 0.0, 10.0, 10.0)), None);
    assert_eq!(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0);
}

#[test]
fn color_lerp_and_packing() {
    let mid = Color::BLACK.lerp(&Color::WHITE, 0.5);
    assert_eq!(mid.to_rgba_u8(), [128, 128, 128, 255]);
    assert_eq!(Color::BLACK.lerp(&Color::WHITE, 3.0), Color::WHITE);
    assert_eq!(Color::from_argb(0xFF2196F3).to_rgba_u8(), [0x21, 0x96, 0xF3, 0xFF]);
}

#[test]
fn draw_scope_records_primitives_in_order() {
    let mut scope = DrawScopeDefault::new(Size::new(100.0, 20.0));
    scope.draw_rect(Color::GRAY);
    scope.draw_circle(50.0, 10.0, 10.0, Color::WHITE);

    let primitives = scope.into_primitives();
    assert_eq!(primitives.len(), 2);
    assert_eq!(primitives[0].rect(), Rect::new(0.0, 0.0, 100.0, 20.0));
    assert_eq!(
        primitives[1],
        DrawPrimitive::RoundRect {
            rect: Rect::new(40.0, 0.0, 20.0, 20.0),
            color: Color::WHITE,
            shape: RoundedCornerShape::uniform(10.0),
        }
    );
}
