//! Builders for simple shapes: triangles, rectangles, quads, circles, pies, arcs, ellipses and
//! rounded rectangles.
//!
//! Radial shapes take an inner and an outer color, which lets the GPU interpolate a
//! radial gradient. Curved shapes take the `scale` of the transform they are rendered with,
//! to pick the number of segments.

use crate::geom::{Circle, Color, Ellipse, FloatQuad, FloatRect, RoundRect, Triangle};
use crate::geometry_builder::{allocate, BufferSink, IndexWriter};
use crate::math::*;
use crate::math_utils::fast_sin_cos;
use crate::quality::*;
use crate::vertex::Vertex2D;
use crate::Index;

use arrayvec::ArrayVec;

use std::f32::consts::{FRAC_PI_2, TAU};

// Outer ring on even vertices, inner ring on odd ones: tl, bl, tr, br.
const RECT_FRAME_INDICES: [Index; 24] = [
    0, 1, 2, 3, 2, 1, 0, 4, 1, 5, 1, 4, 5, 4, 7, 6, 7, 4, 3, 7, 2, 6, 2, 7,
];

/// Position on a circle for an angle in the counter-clockwise, x-right convention of
/// the trigonometric functions (y-down screen space).
#[inline]
pub(crate) fn rim_point(center: Point, r: f32, rad: f32) -> Point {
    let (s, c) = fast_sin_cos(rad);
    point(center.x + r * c, center.y - r * s)
}

/// Tessellate a single color triangle.
pub fn fill_triangle(sink: &mut dyn BufferSink, triangle: &Triangle, color: Color) -> u32 {
    fill_triangle_gradient(sink, triangle, &[color; 3])
}

/// Tessellate a triangle with one color per point.
pub fn fill_triangle_gradient(
    sink: &mut dyn BufferSink,
    triangle: &Triangle,
    colors: &[Color; 3],
) -> u32 {
    let view = match allocate(sink, 3, 3) {
        Some(view) => view,
        None => return 0,
    };

    for (vertex, (p, color)) in view
        .vertices
        .iter_mut()
        .zip(triangle.points().iter().zip(colors))
    {
        *vertex = Vertex2D::new(*p, *color);
    }

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    indices.triangle(0, 1, 2);

    indices.finish()
}

/// Tessellate an axis-aligned rectangle.
///
/// Produces the vertices `(left, top)`, `(right, top)`, `(left, bottom)`, `(right, bottom)`
/// and the triangles `(0, 1, 2)`, `(2, 1, 3)`.
pub fn fill_rect(sink: &mut dyn BufferSink, rect: &FloatRect, color: Color) -> u32 {
    fill_rect_gradient(sink, rect, &[color; 4])
}

/// Tessellate an axis-aligned rectangle with one color per corner.
///
/// The colors are given clockwise starting from the top-left corner.
pub fn fill_rect_gradient(sink: &mut dyn BufferSink, rect: &FloatRect, colors: &[Color; 4]) -> u32 {
    let view = match allocate(sink, 4, 6) {
        Some(view) => view,
        None => return 0,
    };

    view.vertices[0] = Vertex2D::new(rect.top_left(), colors[0]);
    view.vertices[1] = Vertex2D::new(rect.top_right(), colors[1]);
    view.vertices[2] = Vertex2D::new(rect.bottom_left(), colors[3]);
    view.vertices[3] = Vertex2D::new(rect.bottom_right(), colors[2]);

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    indices.quad(0);

    indices.finish()
}

/// Tessellate a frame around a rectangle, extending outwards by `thickness`.
pub fn stroke_rect_frame(
    sink: &mut dyn BufferSink,
    rect: &FloatRect,
    thickness: f32,
    inner_color: Color,
    outer_color: Color,
) -> u32 {
    if thickness <= 0.0 {
        log::trace!("stroke_rect_frame: non-positive thickness {}", thickness);
        return 0;
    }

    let view = match allocate(sink, 8, 24) {
        Some(view) => view,
        None => return 0,
    };

    let outer = rect.inflate(thickness);
    let positions = [
        outer.top_left(),
        rect.top_left(),
        outer.bottom_left(),
        rect.bottom_left(),
        outer.top_right(),
        rect.top_right(),
        outer.bottom_right(),
        rect.bottom_right(),
    ];

    for (i, (vertex, p)) in view.vertices.iter_mut().zip(&positions).enumerate() {
        let color = if i % 2 == 0 { outer_color } else { inner_color };
        *vertex = Vertex2D::new(*p, color);
    }

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    indices.extend(&RECT_FRAME_INDICES);

    indices.finish()
}

/// Tessellate a quadrilateral.
pub fn fill_quad(sink: &mut dyn BufferSink, quad: &FloatQuad, color: Color) -> u32 {
    fill_quad_gradient(sink, quad, &[color; 4])
}

/// Tessellate a quadrilateral with one color per corner, in the order of the corners.
pub fn fill_quad_gradient(sink: &mut dyn BufferSink, quad: &FloatQuad, colors: &[Color; 4]) -> u32 {
    let view = match allocate(sink, 4, 6) {
        Some(view) => view,
        None => return 0,
    };

    let p = &quad.points;
    view.vertices[0] = Vertex2D::new(p[0], colors[0]);
    view.vertices[1] = Vertex2D::new(p[1], colors[1]);
    view.vertices[2] = Vertex2D::new(p[3], colors[3]);
    view.vertices[3] = Vertex2D::new(p[2], colors[2]);

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    indices.quad(0);

    indices.finish()
}

/// Tessellate a circle.
///
/// The center vertex gets `inner_color` and the rim gets `outer_color`.
///
/// ```
/// use tessera_tessellation::{fill_circle, VertexBuffers};
/// use tessera_tessellation::geom::{Circle, Color};
/// use tessera_tessellation::math::point;
///
/// let mut buffers = VertexBuffers::new();
/// let circle = Circle::new(point(0.0, 0.0), 5.0);
///
/// assert_eq!(fill_circle(&mut buffers, &circle, Color::WHITE, Color::BLACK, 1.0), 48);
/// assert_eq!(buffers.vertices.len(), 17);
/// ```
pub fn fill_circle(
    sink: &mut dyn BufferSink,
    circle: &Circle,
    inner_color: Color,
    outer_color: Color,
    scale: f32,
) -> u32 {
    let ellipse = Ellipse::new(circle.center, circle.r, circle.r);
    let quality = circle_quality(circle.r.abs() * scale);
    fan_ellipse(sink, &ellipse, inner_color, outer_color, quality)
}

/// Tessellate an axis-aligned ellipse.
///
/// The center vertex gets `inner_color` and the rim gets `outer_color`.
pub fn fill_ellipse(
    sink: &mut dyn BufferSink,
    ellipse: &Ellipse,
    inner_color: Color,
    outer_color: Color,
    scale: f32,
) -> u32 {
    let quality = ellipse_quality(ellipse.major_axis() * scale);
    fan_ellipse(sink, ellipse, inner_color, outer_color, quality)
}

fn fan_ellipse(
    sink: &mut dyn BufferSink,
    ellipse: &Ellipse,
    inner_color: Color,
    outer_color: Color,
    quality: u16,
) -> u32 {
    if ellipse.a == 0.0 || ellipse.b == 0.0 {
        log::trace!("fill_ellipse: degenerate {:?}", ellipse);
        return 0;
    }

    let q = quality as u32;
    let view = match allocate(sink, q + 1, q * 3) {
        Some(view) => view,
        None => return 0,
    };

    let center = ellipse.center;
    view.vertices[0] = Vertex2D::new(center, inner_color);
    for (vertex, p) in view.vertices[1..].iter_mut().zip(unit_circle(quality)) {
        let pos = point(center.x + ellipse.a * p.x, center.y + ellipse.b * p.y);
        *vertex = Vertex2D::new(pos, outer_color);
    }

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    for i in 0..q - 1 {
        indices.triangle(i + 1, 0, i + 2);
    }
    indices.triangle(q, 0, 1);

    indices.finish()
}

/// Tessellate a ring around a circle of radius `circle.r`, extending outwards by `thickness`.
pub fn stroke_circle_frame(
    sink: &mut dyn BufferSink,
    circle: &Circle,
    thickness: f32,
    inner_color: Color,
    outer_color: Color,
    scale: f32,
) -> u32 {
    let quality = circle_frame_quality((circle.r + thickness) * scale);
    let ellipse = Ellipse::new(circle.center, circle.r, circle.r);
    stroke_ellipse(sink, &ellipse, thickness, inner_color, outer_color, quality)
}

/// Tessellate a ring around an ellipse, extending both semi-axes by `thickness`.
pub fn stroke_ellipse_frame(
    sink: &mut dyn BufferSink,
    ellipse: &Ellipse,
    thickness: f32,
    inner_color: Color,
    outer_color: Color,
    scale: f32,
) -> u32 {
    let major = (ellipse.a + thickness).abs().max((ellipse.b + thickness).abs());
    let quality = circle_frame_quality(major * scale);
    stroke_ellipse(sink, ellipse, thickness, inner_color, outer_color, quality)
}

fn stroke_ellipse(
    sink: &mut dyn BufferSink,
    ellipse: &Ellipse,
    thickness: f32,
    inner_color: Color,
    outer_color: Color,
    quality: u16,
) -> u32 {
    if thickness <= 0.0 {
        log::trace!("stroke_ellipse: non-positive thickness {}", thickness);
        return 0;
    }

    let q = quality as u32;
    let view = match allocate(sink, q * 2, q * 6) {
        Some(view) => view,
        None => return 0,
    };

    let c = ellipse.center;
    let (a_in, b_in) = (ellipse.a, ellipse.b);
    let (a_out, b_out) = (a_in + thickness, b_in + thickness);
    for (pair, p) in view.vertices.chunks_exact_mut(2).zip(unit_circle(quality)) {
        pair[0] = Vertex2D::new(point(c.x + a_out * p.x, c.y + b_out * p.y), outer_color);
        pair[1] = Vertex2D::new(point(c.x + a_in * p.x, c.y + b_in * p.y), inner_color);
    }

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    stitch_rings(&mut indices, q);

    indices.finish()
}

/// Quads between `count` consecutive vertex pairs, wrapping around.
pub(crate) fn stitch_rings(indices: &mut IndexWriter, count: u32) {
    let n = count * 2;
    for i in 0..count {
        let k = i * 2;
        indices.quad_of(k, (k + 1) % n, (k + 2) % n, (k + 3) % n);
    }
}

fn clamp_angle(angle: f32) -> f32 {
    angle.max(-TAU).min(TAU)
}

// Start of the parametrization shared by pies and arcs.
fn pie_start(start_angle: f32, angle: f32) -> f32 {
    -(start_angle + angle) + FRAC_PI_2
}

/// Tessellate a circular sector.
///
/// Angles are in radians, measured clockwise from the up direction. A negative `angle`
/// goes counter-clockwise.
pub fn fill_circle_pie(
    sink: &mut dyn BufferSink,
    circle: &Circle,
    start_angle: f32,
    angle: f32,
    color: Color,
    scale: f32,
) -> u32 {
    if angle == 0.0 || circle.r == 0.0 {
        log::trace!("fill_circle_pie: degenerate pie (angle: {}, r: {})", angle, circle.r);
        return 0;
    }

    let angle = clamp_angle(angle);
    let quality = circle_pie_quality(circle.r.abs() * scale, angle) as u32;
    let view = match allocate(sink, quality + 1, (quality - 1) * 3) {
        Some(view) => view,
        None => return 0,
    };

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    write_pie(view.vertices, &mut indices, 0, circle, start_angle, angle, color);

    indices.finish()
}

/// Writes a pie into `vertices`, the center first and then one vertex per rim point, and
/// its triangles relative to vertex `first` of the view.
pub(crate) fn write_pie(
    vertices: &mut [Vertex2D],
    indices: &mut IndexWriter,
    first: u32,
    circle: &Circle,
    start_angle: f32,
    angle: f32,
    color: Color,
) {
    let quality = vertices.len() as u32 - 1;
    let start = pie_start(start_angle, angle);
    let step = angle / (quality - 1) as f32;
    vertices[0] = Vertex2D::new(circle.center, color);
    for (i, vertex) in vertices[1..].iter_mut().enumerate() {
        let p = rim_point(circle.center, circle.r, start + step * i as f32);
        *vertex = Vertex2D::new(p, color);
    }

    for i in 0..quality - 1 {
        indices.triangle(first + i + 1, first, first + i + 2);
    }
}

/// Tessellate an arc of a ring of inner radius `circle.r`, extending outwards by `thickness`.
pub fn stroke_circle_arc(
    sink: &mut dyn BufferSink,
    circle: &Circle,
    start_angle: f32,
    angle: f32,
    thickness: f32,
    color: Color,
    scale: f32,
) -> u32 {
    if angle == 0.0 || thickness <= 0.0 {
        log::trace!(
            "stroke_circle_arc: degenerate arc (angle: {}, thickness: {})",
            angle,
            thickness
        );
        return 0;
    }

    let angle = clamp_angle(angle);
    let r_in = circle.r;
    let r_out = r_in + thickness;
    let quality = circle_pie_quality(r_out * scale, angle) as u32;
    let view = match allocate(sink, quality * 2, (quality - 1) * 6) {
        Some(view) => view,
        None => return 0,
    };

    let start = pie_start(start_angle, angle);
    let step = angle / (quality - 1) as f32;
    for (i, pair) in view.vertices.chunks_exact_mut(2).enumerate() {
        let (s, c) = fast_sin_cos(start + step * i as f32);
        let center = circle.center;
        pair[0] = Vertex2D::new(point(center.x + r_out * c, center.y - r_out * s), color);
        pair[1] = Vertex2D::new(point(center.x + r_in * c, center.y - r_in * s), color);
    }

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    for i in 0..quality - 1 {
        indices.quad(i * 2);
    }

    indices.finish()
}

/// Tessellate the region between an arc and its chord.
pub fn fill_circle_segment(
    sink: &mut dyn BufferSink,
    circle: &Circle,
    start_angle: f32,
    angle: f32,
    color: Color,
    scale: f32,
) -> u32 {
    if angle == 0.0 || circle.r == 0.0 {
        log::trace!(
            "fill_circle_segment: degenerate segment (angle: {}, r: {})",
            angle,
            circle.r
        );
        return 0;
    }

    let angle = clamp_angle(angle);
    let quality = circle_pie_quality(circle.r.abs() * scale, angle) as u32;
    let view = match allocate(sink, quality, (quality - 2) * 3) {
        Some(view) => view,
        None => return 0,
    };

    let start = pie_start(start_angle, angle);
    let step = angle / (quality - 1) as f32;
    for (i, vertex) in view.vertices.iter_mut().enumerate() {
        let p = rim_point(circle.center, circle.r, start + step * i as f32);
        *vertex = Vertex2D::new(p, color);
    }

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    for i in 1..quality - 1 {
        indices.triangle(0, i, i + 1);
    }

    indices.finish()
}

/// Unit vectors of a quarter circle, from up to right.
pub(crate) fn quarter_fan(quality: u16) -> ArrayVec<Vector, MAX_FAN_QUALITY> {
    let quality = quality.max(2).min(MAX_FAN_QUALITY as u16);
    let step = FRAC_PI_2 / (quality - 1) as f32;
    (0..quality)
        .map(|i| {
            let (s, c) = fast_sin_cos(step * i as f32);
            vector(s, -c)
        })
        .collect()
}

/// The four corner arcs of a rounded rectangle, sampled from a single quarter circle.
///
/// Corners are visited clockwise starting from the top-right one, each from its first to its
/// last point in clockwise order.
pub(crate) struct RoundRectOutline {
    pub centers: [Point; 4],
    pub fan: ArrayVec<Vector, MAX_FAN_QUALITY>,
    pub radius: f32,
    unite_v: bool,
    unite_h: bool,
}

impl RoundRectOutline {
    /// With `unite`, corners whose last point coincides with the first point of the next
    /// corner skip it.
    pub fn new(rect: &FloatRect, radius: f32, quality: u16, unite: bool) -> Self {
        RoundRectOutline {
            centers: [
                point(rect.right - radius, rect.top + radius),
                point(rect.right - radius, rect.bottom - radius),
                point(rect.left + radius, rect.bottom - radius),
                point(rect.left + radius, rect.top + radius),
            ],
            fan: quarter_fan(quality),
            radius,
            unite_v: unite && rect.height() * 0.5 == radius,
            unite_h: unite && rect.width() * 0.5 == radius,
        }
    }

    pub fn quality(&self) -> usize {
        self.fan.len()
    }

    pub fn corner_len(&self, corner: usize) -> usize {
        let united = if corner % 2 == 0 {
            self.unite_v
        } else {
            self.unite_h
        };

        self.fan.len() - united as usize
    }

    pub fn len(&self) -> usize {
        (0..4).map(|corner| self.corner_len(corner)).sum()
    }

    /// Direction of the `i`-th point of a corner from the corner's center.
    pub fn direction(&self, corner: usize, i: usize) -> Vector {
        let fan = &self.fan;
        let last = fan.len() - 1;
        match corner {
            0 => fan[i],
            1 => vector(fan[last - i].x, -fan[last - i].y),
            2 => -fan[i],
            _ => vector(-fan[last - i].x, fan[last - i].y),
        }
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..4).flat_map(move |corner| {
            (0..self.corner_len(corner))
                .map(move |i| self.centers[corner] + self.direction(corner, i) * self.radius)
        })
    }
}

/// Tessellate a rectangle with rounded corners.
///
/// The radius is clamped so that it doesn't exceed half of the width or height. A radius of
/// zero produces a plain rectangle.
pub fn fill_round_rect(
    sink: &mut dyn BufferSink,
    round_rect: &RoundRect,
    color: Color,
    scale: f32,
) -> u32 {
    let radius = round_rect.clamped_radius();
    if radius <= 0.0 {
        return fill_rect(sink, &round_rect.rect, color);
    }

    let outline = RoundRectOutline::new(&round_rect.rect, radius, fan_quality(radius * scale), true);
    let n = outline.len() as u32;
    let view = match allocate(sink, n, (n - 2) * 3) {
        Some(view) => view,
        None => return 0,
    };

    for (vertex, p) in view.vertices.iter_mut().zip(outline.points()) {
        *vertex = Vertex2D::new(p, color);
    }

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    for i in 0..n - 2 {
        indices.triangle(0, i + 1, i + 2);
    }

    indices.finish()
}

/// Tessellate a frame around a rounded rectangle, extending outwards by `thickness`.
///
/// The outer corners have a radius of `radius + thickness`, so that the frame has a
/// constant width.
pub fn stroke_round_rect_frame(
    sink: &mut dyn BufferSink,
    round_rect: &RoundRect,
    thickness: f32,
    inner_color: Color,
    outer_color: Color,
    scale: f32,
) -> u32 {
    if thickness <= 0.0 {
        log::trace!("stroke_round_rect_frame: non-positive thickness {}", thickness);
        return 0;
    }

    let r_in = round_rect.clamped_radius();
    let r_out = r_in + thickness;
    let quality = fan_quality(r_out * scale);
    let inner = RoundRectOutline::new(&round_rect.rect, r_in, quality, false);
    let outer = RoundRectOutline::new(&round_rect.rect.inflate(thickness), r_out, quality, false);

    let n = outer.len() as u32;
    debug_assert_eq!(n as usize, inner.len());
    let view = match allocate(sink, n * 2, n * 6) {
        Some(view) => view,
        None => return 0,
    };

    for (pair, (p_out, p_in)) in view
        .vertices
        .chunks_exact_mut(2)
        .zip(outer.points().zip(inner.points()))
    {
        pair[0] = Vertex2D::new(p_out, outer_color);
        pair[1] = Vertex2D::new(p_in, inner_color);
    }

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    stitch_rings(&mut indices, n);

    indices.finish()
}

#[cfg(test)]
fn positions(buffers: &crate::VertexBuffers) -> Vec<Point> {
    buffers.vertices.iter().map(|v| v.position()).collect()
}

#[test]
fn rect_layout() {
    let mut buffers = crate::VertexBuffers::new();
    let rect = FloatRect::new(0.0, 0.0, 10.0, 10.0);
    assert_eq!(fill_rect(&mut buffers, &rect, Color::WHITE), 6);
    assert_eq!(
        positions(&buffers),
        vec![
            point(0.0, 0.0),
            point(10.0, 0.0),
            point(0.0, 10.0),
            point(10.0, 10.0)
        ]
    );
    assert_eq!(buffers.indices, vec![0, 1, 2, 2, 1, 3]);
}

#[test]
fn rect_gradient_corners() {
    let mut buffers = crate::VertexBuffers::new();
    let red = Color::new(1.0, 0.0, 0.0, 1.0);
    let green = Color::new(0.0, 1.0, 0.0, 1.0);
    let blue = Color::new(0.0, 0.0, 1.0, 1.0);
    let rect = FloatRect::new(0.0, 0.0, 10.0, 10.0);
    fill_rect_gradient(&mut buffers, &rect, &[red, green, blue, Color::WHITE]);

    // Clockwise from the top-left corner: the bottom-right corner is the third color.
    assert_eq!(buffers.vertices[3].position(), point(10.0, 10.0));
    assert_eq!(buffers.vertices[3].color(), blue);
    assert_eq!(buffers.vertices[2].color(), Color::WHITE);
}

#[test]
fn rect_frame() {
    let mut buffers = crate::VertexBuffers::new();
    let rect = FloatRect::new(0.0, 0.0, 10.0, 10.0);
    assert_eq!(
        stroke_rect_frame(&mut buffers, &rect, 2.0, Color::WHITE, Color::BLACK),
        24
    );
    assert_eq!(buffers.vertices[0].position(), point(-2.0, -2.0));
    assert_eq!(buffers.vertices[0].color(), Color::BLACK);
    assert_eq!(buffers.vertices[7].position(), point(10.0, 10.0));
    assert_eq!(buffers.vertices[7].color(), Color::WHITE);

    let mut sink = crate::NoOutput::new();
    assert_eq!(stroke_rect_frame(&mut sink, &rect, 0.0, Color::WHITE, Color::BLACK), 0);
    assert_eq!(sink.requests, 0);
}

#[test]
fn quad_order() {
    let mut buffers = crate::VertexBuffers::new();
    let quad = FloatQuad::from(FloatRect::new(0.0, 0.0, 4.0, 2.0));
    assert_eq!(fill_quad(&mut buffers, &quad, Color::WHITE), 6);
    // Same layout as the rectangle.
    assert_eq!(
        positions(&buffers),
        vec![
            point(0.0, 0.0),
            point(4.0, 0.0),
            point(0.0, 2.0),
            point(4.0, 2.0)
        ]
    );
}

#[test]
fn circle_counts() {
    let mut buffers = crate::VertexBuffers::new();
    let circle = Circle::new(point(10.0, 10.0), 5.0);
    assert_eq!(fill_circle(&mut buffers, &circle, Color::WHITE, Color::BLACK, 1.0), 48);
    assert_eq!(buffers.vertices.len(), 17);
    assert_eq!(buffers.vertices[0].position(), point(10.0, 10.0));
    assert_eq!(buffers.vertices[0].color(), Color::WHITE);
    assert_eq!(buffers.vertices[1].color(), Color::BLACK);
    assert!((buffers.vertices[1].position() - point(15.0, 10.0)).length() < 1e-4);
    // The last triangle closes the fan.
    assert_eq!(&buffers.indices[45..], &[16, 0, 1]);

    let mut sink = crate::NoOutput::new();
    let empty = Circle::new(point(0.0, 0.0), 0.0);
    assert_eq!(fill_circle(&mut sink, &empty, Color::WHITE, Color::WHITE, 1.0), 0);
    assert_eq!(sink.requests, 0);
}

#[test]
fn circle_frame_counts() {
    let mut buffers = crate::VertexBuffers::new();
    let circle = Circle::new(point(0.0, 0.0), 10.0);
    let quality = circle_frame_quality(12.0) as usize;
    let count = stroke_circle_frame(&mut buffers, &circle, 2.0, Color::WHITE, Color::BLACK, 1.0);
    assert_eq!(count as usize, quality * 6);
    assert_eq!(buffers.vertices.len(), quality * 2);
    assert!((buffers.vertices[0].position() - point(12.0, 0.0)).length() < 1e-4);
    assert!((buffers.vertices[1].position() - point(10.0, 0.0)).length() < 1e-4);
}

#[test]
fn pie_orientation() {
    let mut buffers = crate::VertexBuffers::new();
    let circle = Circle::new(point(0.0, 0.0), 10.0);
    // A quarter from the up direction to the right direction.
    let count = fill_circle_pie(&mut buffers, &circle, 0.0, FRAC_PI_2, Color::WHITE, 1.0);
    let quality = circle_pie_quality(10.0, FRAC_PI_2) as usize;
    assert_eq!(count as usize, (quality - 1) * 3);
    assert_eq!(buffers.vertices.len(), quality + 1);

    let first = buffers.vertices[1].position();
    let last = buffers.vertices[quality].position();
    assert!((first - point(10.0, 0.0)).length() < 1e-3, "{:?}", first);
    assert!((last - point(0.0, -10.0)).length() < 1e-3, "{:?}", last);
}

#[test]
fn zero_angle() {
    let mut sink = crate::NoOutput::new();
    let circle = Circle::new(point(0.0, 0.0), 10.0);
    assert_eq!(fill_circle_pie(&mut sink, &circle, 1.0, 0.0, Color::WHITE, 1.0), 0);
    assert_eq!(stroke_circle_arc(&mut sink, &circle, 1.0, 0.0, 2.0, Color::WHITE, 1.0), 0);
    assert_eq!(fill_circle_segment(&mut sink, &circle, 1.0, 0.0, Color::WHITE, 1.0), 0);
    assert_eq!(sink.requests, 0);
}

#[test]
fn arc_and_segment_counts() {
    let mut buffers = crate::VertexBuffers::new();
    let circle = Circle::new(point(0.0, 0.0), 20.0);
    let quality = circle_pie_quality(22.0, 1.0) as u32;
    assert_eq!(
        stroke_circle_arc(&mut buffers, &circle, 0.5, 1.0, 2.0, Color::WHITE, 1.0),
        (quality - 1) * 6
    );
    assert_eq!(buffers.vertices.len() as u32, quality * 2);

    buffers.clear();
    let quality = circle_pie_quality(20.0, -2.0) as u32;
    assert_eq!(
        fill_circle_segment(&mut buffers, &circle, 0.5, -2.0, Color::WHITE, 1.0),
        (quality - 2) * 3
    );
    assert_eq!(buffers.vertices.len() as u32, quality);
}

#[test]
fn ellipse_counts() {
    let mut buffers = crate::VertexBuffers::new();
    let ellipse = Ellipse::new(point(0.0, 0.0), 40.0, 10.0);
    let quality = ellipse_quality(40.0) as u32;
    assert_eq!(
        fill_ellipse(&mut buffers, &ellipse, Color::WHITE, Color::WHITE, 1.0),
        quality * 3
    );
    assert!((buffers.vertices[1].position() - point(40.0, 0.0)).length() < 1e-4);

    buffers.clear();
    let quality = circle_frame_quality(42.0) as u32;
    assert_eq!(
        stroke_ellipse_frame(&mut buffers, &ellipse, 2.0, Color::WHITE, Color::WHITE, 1.0),
        quality * 6
    );
}

#[test]
fn round_rect_united_corners() {
    let mut buffers = crate::VertexBuffers::new();
    // Half of the height equals the radius: the left and right sides are fully round.
    let shape = RoundRect::new(FloatRect::new(0.0, 0.0, 100.0, 20.0), 10.0);
    let q = fan_quality(10.0) as u32;
    let n = (q - 1 + q) * 2;
    assert_eq!(fill_round_rect(&mut buffers, &shape, Color::WHITE, 1.0), (n - 2) * 3);
    assert_eq!(buffers.vertices.len() as u32, n);

    // Starts at the top of the top-right corner and goes clockwise.
    assert!((buffers.vertices[0].position() - point(90.0, 0.0)).length() < 1e-4);
    // The right side has no straight part: the first point of the bottom-right corner
    // replaces the last point of the top-right one.
    assert!((buffers.vertices[q as usize - 1].position() - point(100.0, 10.0)).length() < 1e-4);

    for p in positions(&buffers) {
        assert!(p.x >= -1e-4 && p.x <= 100.0001);
        assert!(p.y >= -1e-4 && p.y <= 20.0001);
    }
}

#[test]
fn round_rect_without_radius() {
    let mut buffers = crate::VertexBuffers::new();
    let shape = RoundRect::new(FloatRect::new(0.0, 0.0, 10.0, 10.0), 0.0);
    assert_eq!(fill_round_rect(&mut buffers, &shape, Color::WHITE, 1.0), 6);
    assert_eq!(buffers.vertices.len(), 4);
}

#[test]
fn round_rect_frame_counts() {
    let mut buffers = crate::VertexBuffers::new();
    let shape = RoundRect::new(FloatRect::new(0.0, 0.0, 100.0, 50.0), 8.0);
    let q = fan_quality(10.0) as u32;
    let count = stroke_round_rect_frame(&mut buffers, &shape, 2.0, Color::WHITE, Color::BLACK, 1.0);
    assert_eq!(count, q * 4 * 6);
    assert_eq!(buffers.vertices.len() as u32, q * 8);
    assert!((buffers.vertices[0].position() - point(92.0, -2.0)).length() < 1e-4);
    assert!((buffers.vertices[1].position() - point(92.0, 0.0)).length() < 1e-4);
}
