//! Soft drop shadows.
//!
//! A shadow is a band of width `blur` centered on the edge of the shape, plus the interior
//! of the shape when [`ShadowOptions::fill`] is set. Every vertex carries the shadow color:
//! the falloff is read by the shader from a box-shadow texture through the texture
//! coordinates, where `0` is the outer edge of the band and `0.5` its inner edge.

use crate::basic_shapes::RoundRectOutline;
use crate::geom::{Circle, Color, FloatRect, RoundRect};
use crate::geometry_builder::{allocate, BufferSink, IndexWriter};
use crate::math::*;
use crate::quality::{circle_quality, fan_quality, unit_circle};
use crate::vertex::Vertex2D;
use crate::ShadowOptions;

const BAND_OUTER: Point = Point::new(0.0, 0.5);
const BAND_INNER: Point = Point::new(0.5, 0.5);

fn half_blur(options: &ShadowOptions) -> Option<f32> {
    let blur = options.blur;
    if !(blur >= 0.0) || !blur.is_finite() {
        log::trace!("shadow: invalid blur {}", blur);
        return None;
    }

    Some(blur * 0.5)
}

/// Tessellate the shadow of an axis-aligned rectangle.
///
/// The shadow is a 4×4 grid of vertices. Filled shadows have 9 quads (54 indices),
/// the others skip the center quad (48 indices).
pub fn fill_rect_shadow(
    sink: &mut dyn BufferSink,
    rect: &FloatRect,
    options: &ShadowOptions,
    color: Color,
) -> u32 {
    let hb = match half_blur(options) {
        Some(hb) => hb,
        None => return 0,
    };

    let index_count = if options.fill { 54 } else { 48 };
    let view = match allocate(sink, 16, index_count) {
        Some(view) => view,
        None => return 0,
    };

    let center = rect.center();
    let xs = [
        rect.left - hb,
        (rect.left + hb).min(center.x),
        (rect.right - hb).max(center.x),
        rect.right + hb,
    ];
    let ys = [
        rect.top - hb,
        (rect.top + hb).min(center.y),
        (rect.bottom - hb).max(center.y),
        rect.bottom + hb,
    ];
    let uvs = [0.0, 0.5, 0.5, 1.0];

    for (i, vertex) in view.vertices.iter_mut().enumerate() {
        let (row, col) = (i / 4, i % 4);
        *vertex = Vertex2D::with_tex(
            point(xs[col], ys[row]),
            point(uvs[col], uvs[row]),
            color,
        );
    }

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    for row in 0..3 {
        for col in 0..3 {
            if row == 1 && col == 1 && !options.fill {
                continue;
            }
            let tl = row * 4 + col;
            indices.quad_of(tl, tl + 1, tl + 4, tl + 5);
        }
    }

    indices.finish()
}

/// Tessellate the shadow of a circle.
///
/// Two rings at `r - blur / 2` and `r + blur / 2` are connected by quads. Filled shadows
/// add a center vertex and a fan over the inner ring.
pub fn fill_circle_shadow(
    sink: &mut dyn BufferSink,
    circle: &Circle,
    options: &ShadowOptions,
    color: Color,
) -> u32 {
    let hb = match half_blur(options) {
        Some(hb) => hb,
        None => return 0,
    };

    let r_out = circle.r + hb;
    if !(circle.r >= 0.0) || !(r_out > 0.0) {
        log::trace!("fill_circle_shadow: degenerate {:?}", circle);
        return 0;
    }
    let r_in = (circle.r - hb).max(0.0);

    let quality = circle_quality(r_out * options.scale);
    let q = quality as u32;
    let fill = options.fill as u32;
    let view = match allocate(sink, q * 2 + fill, q * 6 + q * 3 * fill) {
        Some(view) => view,
        None => return 0,
    };

    let c = circle.center;
    for (pair, dir) in view.vertices.chunks_exact_mut(2).zip(unit_circle(quality)) {
        pair[0] = Vertex2D::with_tex(c + dir * r_out, BAND_OUTER, color);
        pair[1] = Vertex2D::with_tex(c + dir * r_in, BAND_INNER, color);
    }

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    crate::basic_shapes::stitch_rings(&mut indices, q);

    if options.fill {
        let center = q * 2;
        view.vertices[center as usize] = Vertex2D::with_tex(c, BAND_INNER, color);
        for i in 0..q {
            indices.triangle(i * 2 + 1, center, (i * 2 + 3) % center);
        }
    }

    indices.finish()
}

/// Tessellate the shadow of a rectangle with rounded corners.
///
/// Each corner is a piece of circle shadow centered on the corner's center, with the radius
/// of the corner. The straight edges bridge consecutive corners.
pub fn fill_round_rect_shadow(
    sink: &mut dyn BufferSink,
    round_rect: &RoundRect,
    options: &ShadowOptions,
    color: Color,
) -> u32 {
    let hb = match half_blur(options) {
        Some(hb) => hb,
        None => return 0,
    };

    let rect = &round_rect.rect;
    if !(rect.width() >= 0.0) || !(rect.height() >= 0.0) {
        log::trace!("fill_round_rect_shadow: degenerate {:?}", round_rect);
        return 0;
    }

    let radius = round_rect.clamped_radius();
    let r_out = radius + hb;
    let r_in = (radius - hb).max(0.0);

    let outline = RoundRectOutline::new(rect, radius, fan_quality(r_out * options.scale), false);
    let q = outline.quality() as u32;
    let fill = options.fill as u32;

    // Per corner: the band between the rings and a bridge to the next corner, then for
    // filled shadows a fan over the inner ring, a strip to the next corner and the
    // center quad.
    let per_corner = q * 2 + fill;
    let band_indices = 4 * (6 * (q - 1) + 6);
    let fill_indices = 4 * (3 * (q - 1) + 6) + 6;
    let view = match allocate(sink, per_corner * 4, band_indices + fill_indices * fill) {
        Some(view) => view,
        None => return 0,
    };

    for (corner, vertices) in view
        .vertices
        .chunks_exact_mut(per_corner as usize)
        .enumerate()
    {
        let center = outline.centers[corner];
        for i in 0..q as usize {
            let dir = outline.direction(corner, i);
            vertices[i * 2] = Vertex2D::with_tex(center + dir * r_out, BAND_OUTER, color);
            vertices[i * 2 + 1] = Vertex2D::with_tex(center + dir * r_in, BAND_INNER, color);
        }
        if options.fill {
            vertices[q as usize * 2] = Vertex2D::with_tex(center, BAND_INNER, color);
        }
    }

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    let last = (q - 1) * 2;
    for corner in 0..4 {
        let base = corner * per_corner;
        let next = (corner + 1) % 4 * per_corner;
        for i in 0..q - 1 {
            let k = base + i * 2;
            indices.quad_of(k, k + 1, k + 2, k + 3);
        }
        indices.quad_of(base + last, base + last + 1, next, next + 1);
    }

    if options.fill {
        let center_of = |corner: u32| corner * per_corner + q * 2;
        for corner in 0..4 {
            let base = corner * per_corner;
            let next = (corner + 1) % 4;
            let center = center_of(corner);
            for i in 0..q - 1 {
                indices.triangle(center, base + i * 2 + 1, base + i * 2 + 3);
            }
            indices.quad_of(
                center,
                base + last + 1,
                center_of(next),
                next * per_corner + 1,
            );
        }
        indices.quad_of(center_of(0), center_of(1), center_of(3), center_of(2));
    }

    indices.finish()
}

#[cfg(test)]
use crate::{NoOutput, VertexBuffers};

#[test]
fn rect_shadow_grid() {
    let rect = FloatRect::new(0.0, 0.0, 100.0, 50.0);
    let mut buffers = VertexBuffers::new();
    let count = fill_rect_shadow(&mut buffers, &rect, &ShadowOptions::blur(10.0), Color::BLACK);

    assert_eq!(count, 54);
    assert_eq!(buffers.vertices.len(), 16);
    assert_eq!(buffers.vertices[0].position(), point(-5.0, -5.0));
    assert_eq!(buffers.vertices[5].position(), point(5.0, 5.0));
    assert_eq!(buffers.vertices[15].position(), point(105.0, 55.0));
    assert_eq!(buffers.vertices[0].tex(), point(0.0, 0.0));
    assert_eq!(buffers.vertices[6].tex(), point(0.5, 0.5));
    assert_eq!(buffers.vertices[15].tex(), point(1.0, 1.0));
    assert_eq!(&buffers.indices[..6], &[0, 1, 4, 4, 1, 5]);

    let options = ShadowOptions::blur(10.0).with_fill(false);
    buffers.clear();
    assert_eq!(fill_rect_shadow(&mut buffers, &rect, &options, Color::BLACK), 48);
    // The diagonal 6-9 of the center quad is only used by the center quad.
    for tri in buffers.indices.chunks(3) {
        assert!(!(tri.contains(&6) && tri.contains(&9)), "{:?}", tri);
    }
}

#[test]
fn rect_shadow_blur_clamped_to_center() {
    let rect = FloatRect::new(0.0, 0.0, 4.0, 4.0);
    let mut buffers = VertexBuffers::new();
    fill_rect_shadow(&mut buffers, &rect, &ShadowOptions::blur(10.0), Color::BLACK);

    assert_eq!(buffers.vertices[0].position(), point(-5.0, -5.0));
    assert_eq!(buffers.vertices[5].position(), point(2.0, 2.0));
    assert_eq!(buffers.vertices[10].position(), point(2.0, 2.0));
}

#[test]
fn circle_shadow() {
    let circle = Circle::new(point(0.0, 0.0), 10.0);
    let options = ShadowOptions::blur(4.0);
    let q = circle_quality(12.0) as u32;

    let mut buffers = VertexBuffers::new();
    assert_eq!(fill_circle_shadow(&mut buffers, &circle, &options, Color::BLACK), q * 9);
    assert_eq!(buffers.vertices.len() as u32, q * 2 + 1);
    assert!((buffers.vertices[0].position() - point(12.0, 0.0)).length() < 1e-4);
    assert!((buffers.vertices[1].position() - point(8.0, 0.0)).length() < 1e-4);
    assert_eq!(buffers.vertices[0].tex(), point(0.0, 0.5));
    assert_eq!(buffers.vertices[1].tex(), point(0.5, 0.5));
    assert_eq!(buffers.vertices[q as usize * 2].position(), point(0.0, 0.0));

    buffers.clear();
    let options = options.with_fill(false);
    assert_eq!(fill_circle_shadow(&mut buffers, &circle, &options, Color::BLACK), q * 6);
    assert_eq!(buffers.vertices.len() as u32, q * 2);

    // The inner ring doesn't go past the center.
    buffers.clear();
    let small = Circle::new(point(0.0, 0.0), 1.0);
    fill_circle_shadow(&mut buffers, &small, &options, Color::BLACK);
    assert_eq!(buffers.vertices[1].position(), point(0.0, 0.0));
}

#[test]
fn round_rect_shadow_counts() {
    let round_rect = RoundRect::new(FloatRect::new(0.0, 0.0, 100.0, 60.0), 10.0);
    let options = ShadowOptions::blur(8.0);
    let q = fan_quality(14.0) as u32;

    let mut buffers = VertexBuffers::new();
    let count = fill_round_rect_shadow(&mut buffers, &round_rect, &options, Color::BLACK);
    assert_eq!(count, 4 * 6 * (q - 1) + 24 + 4 * 3 * (q - 1) + 24 + 6);
    assert_eq!(buffers.vertices.len() as u32, 4 * (2 * q + 1));

    // First point of the top-right corner: straight up from its center.
    assert!((buffers.vertices[0].position() - point(90.0, -4.0)).length() < 1e-4);
    assert!((buffers.vertices[1].position() - point(90.0, 4.0)).length() < 1e-4);
    assert_eq!(buffers.vertices[2 * q as usize].position(), point(90.0, 10.0));

    buffers.clear();
    let options = options.with_fill(false);
    let count = fill_round_rect_shadow(&mut buffers, &round_rect, &options, Color::BLACK);
    assert_eq!(count, 4 * 6 * (q - 1) + 24);
    assert_eq!(buffers.vertices.len() as u32, 4 * 2 * q);
}

#[test]
fn invalid_shadows() {
    let mut sink = NoOutput::new();
    let options = ShadowOptions::blur(-1.0);
    let rect = FloatRect::new(0.0, 0.0, 10.0, 10.0);

    assert_eq!(fill_rect_shadow(&mut sink, &rect, &options, Color::BLACK), 0);
    assert_eq!(
        fill_circle_shadow(&mut sink, &Circle::new(point(0.0, 0.0), 5.0), &options, Color::BLACK),
        0
    );
    assert_eq!(
        fill_round_rect_shadow(&mut sink, &RoundRect::new(rect, 2.0), &options, Color::BLACK),
        0
    );
    assert_eq!(
        fill_circle_shadow(
            &mut sink,
            &Circle::new(point(0.0, 0.0), 0.0),
            &ShadowOptions::blur(0.0),
            Color::BLACK
        ),
        0
    );
    assert_eq!(sink.requests, 0);
}
