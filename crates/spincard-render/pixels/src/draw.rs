use rusttype::{point, Font, Scale};

use spincard_render_common::{DrawShape, PaintItem, Scene, TextDraw};
use spincard_ui_graphics::{polygon_bounds, Color, Point, Rect};

const CLEAR_COLOR: [u8; 4] = [255, 255, 255, 255];

/// Paints `scene` into an RGBA `frame` of `width` x `height` pixels.
/// Text is skipped when no font is available.
pub fn draw_scene(
    frame: &mut [u8],
    width: u32,
    height: u32,
    scene: &Scene,
    font: Option<&Font<'static>>,
) {
    for chunk in frame.chunks_exact_mut(4) {
        chunk.copy_from_slice(&CLEAR_COLOR);
    }

    for item in scene.paint_order() {
        match item {
            PaintItem::Shape(shape) => draw_shape(frame, width, height, shape),
            PaintItem::Text(text) => {
                if let Some(font) = font {
                    draw_text(frame, width, height, text, font);
                }
            }
        }
    }
}

fn draw_shape(frame: &mut [u8], width: u32, height: u32, shape: &DrawShape) {
    if shape.color.a() <= 0.0 {
        return;
    }
    fill_polygon(
        frame,
        width,
        height,
        &shape.outline(),
        shape.color,
        shape.clip,
    );
}

/// Pixel window `[x0, x1) x [y0, y1)` whose centers lie inside both the
/// frame and `clip`.
fn pixel_window(width: u32, height: u32, clip: Option<Rect>) -> (i64, i64, i64, i64) {
    let frame = (0, 0, width as i64, height as i64);
    let Some(clip) = clip else {
        return frame;
    };
    let first = |edge: f32| (edge - 0.5).ceil() as i64;
    (
        first(clip.x).max(frame.0),
        first(clip.y).max(frame.1),
        first(clip.x + clip.width).min(frame.2),
        first(clip.y + clip.height).min(frame.3),
    )
}

/// Even-odd scanline fill sampled at pixel centers, limited to the frame
/// and `clip`.
pub(crate) fn fill_polygon(
    frame: &mut [u8],
    width: u32,
    height: u32,
    polygon: &[Point],
    color: Color,
    clip: Option<Rect>,
) {
    if polygon.len() < 3 {
        return;
    }
    let Some(bounds) = polygon_bounds(polygon) else {
        return;
    };
    let (clip_x0, clip_y0, clip_x1, clip_y1) = pixel_window(width, height, clip);
    let min_y = (bounds.y.floor() as i64).max(clip_y0);
    let max_y = ((bounds.y + bounds.height).ceil() as i64).min(clip_y1);
    let rgba = color_to_rgba(color);
    let mut crossings: Vec<f32> = Vec::with_capacity(8);

    for py in min_y..max_y {
        let sample_y = py as f32 + 0.5;
        crossings.clear();
        let mut previous = polygon[polygon.len() - 1];
        for &current in polygon {
            if (current.y > sample_y) != (previous.y > sample_y) {
                let t = (sample_y - current.y) / (previous.y - current.y);
                crossings.push(current.x + t * (previous.x - current.x));
            }
            previous = current;
        }
        crossings.sort_by(f32::total_cmp);

        for span in crossings.chunks_exact(2) {
            // Pixels whose centers fall inside [span[0], span[1]).
            let start = ((span[0] - 0.5).ceil() as i64).max(clip_x0);
            let end = ((span[1] - 0.5).ceil() as i64).min(clip_x1);
            for px in start..end {
                let idx = ((py as u32 * width + px as u32) * 4) as usize;
                blend_pixel(&mut frame[idx..idx + 4], rgba, rgba[3]);
            }
        }
    }
}

fn draw_text(frame: &mut [u8], width: u32, height: u32, draw: &TextDraw, font: &Font<'static>) {
    if draw.font_size <= 0.0 || draw.color.a() <= 0.0 {
        return;
    }
    let rgba = color_to_rgba(draw.color);
    let scale = Scale::uniform(draw.font_size);
    let v_metrics = font.v_metrics(scale);
    let offset = point(draw.rect.x, draw.rect.y + v_metrics.ascent);
    let (clip_x0, clip_y0, clip_x1, clip_y1) = pixel_window(width, height, draw.clip);
    for glyph in font.layout(&draw.text, scale, offset) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = (bb.min.x + gx as i32) as i64;
            let py = (bb.min.y + gy as i32) as i64;
            if px < clip_x0 || py < clip_y0 || px >= clip_x1 || py >= clip_y1 {
                return;
            }
            let idx = ((py as u32 * width + px as u32) * 4) as usize;
            blend_pixel(&mut frame[idx..idx + 4], rgba, coverage * rgba[3]);
        });
    }
}

/// Source-over blend of `color` at `alpha` onto one RGBA8 pixel.
fn blend_pixel(existing: &mut [u8], color: [f32; 4], alpha: f32) {
    if alpha <= 0.0 {
        return;
    }
    for i in 0..3 {
        let dst = existing[i] as f32 / 255.0;
        let blended = color[i] * alpha + dst * (1.0 - alpha);
        existing[i] = (blended.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
    let dst_alpha = existing[3] as f32 / 255.0;
    let out_alpha = alpha + dst_alpha * (1.0 - alpha);
    existing[3] = (out_alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
}

fn color_to_rgba(color: Color) -> [f32; 4] {
    [
        color.0.clamp(0.0, 1.0),
        color.1.clamp(0.0, 1.0),
        color.2.clamp(0.0, 1.0),
        color.3.clamp(0.0, 1.0),
    ]
}
