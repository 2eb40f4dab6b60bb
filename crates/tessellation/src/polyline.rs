//! Line strings and polygon frames.
//!
//! ## Overview
//!
//! All the builders of this module run the same pipeline:
//!
//! 1. **Point reduction.** Points closer than `join_epsilon / scale` to the previously kept
//!    point are dropped, as well as the last point of a closed ring if it duplicates the first
//!    one. Without per-point colors, interior points lying on the straight continuation of
//!    their neighbours are dropped too.
//! 2. **Corner pass.** At corners sharp enough that the two edges leaving the corner have a
//!    dot product above `bevel_threshold`, an extra point is inserted at `join_epsilon / scale`
//!    from the corner. The miter at such corners would otherwise extend arbitrarily far.
//!    This pass is skipped in `inner` mode.
//! 3. **Miter computation.** Each point gets two vertices, offset on both sides by the miter
//!    normal scaled by half of the thickness. The extremities of open line strings use the
//!    normal of their segment instead, extended by half of the thickness for square caps.
//! 4. **Emission.** Consecutive vertex pairs are connected by quads, wrapping around for
//!    closed rings.
//!
//! Dotted line strings skip the corner pass and the miters: each segment is an independent
//! quad whose texture coordinates carry the distance along the line string.
//!
//! The intermediate points live in a [`ScratchBuffer`] owned by the caller so that they can be
//! reused across calls.

use crate::geom::{Color, Polyline};
use crate::geometry_builder::{allocate, BufferSink, IndexWriter, RECT_INDICES};
use crate::math::*;
use crate::math_utils::{compute_normal, perp, try_normalize};
use crate::stroke::{
    aligned_dot_length, direction_angle, round_dot_phase, square_dot_phase, square_dot_v,
    RoundCap, RoundCaps, SegmentQuad,
};
use crate::vertex::Vertex2D;
use crate::{LineCap, LineStyle, StrokeOptions, MAX_POLYLINE_POINTS};

/// Reusable memory for the line string builders.
///
/// The content is overwritten by each call.
#[derive(Clone, Debug, Default)]
pub struct ScratchBuffer {
    points: Vec<Point>,
    colors: Vec<Color>,
    joined: Vec<Point>,
    joined_colors: Vec<Color>,
}

impl ScratchBuffer {
    pub fn new() -> Self {
        ScratchBuffer::default()
    }

    pub fn with_capacity(num_points: usize) -> Self {
        ScratchBuffer {
            points: Vec::with_capacity(num_points),
            colors: Vec::new(),
            joined: Vec::with_capacity(num_points),
            joined_colors: Vec::new(),
        }
    }
}

/// The colors of a line string.
#[derive(Copy, Clone, Debug, PartialEq)]
enum PointColors<'l> {
    Uniform(Color),
    /// One color per point of the line string.
    PerPoint(&'l [Color]),
}

impl<'l> PointColors<'l> {
    fn slice(&self) -> &'l [Color] {
        match *self {
            PointColors::Uniform(_) => &[],
            PointColors::PerPoint(colors) => colors,
        }
    }
}

/// Tessellate a line string with a single color.
///
/// Closed line strings have no caps: the round and flat styles produce the same geometry as
/// the square one.
///
/// ```
/// use tessera_tessellation::{stroke_line_string, ScratchBuffer, StrokeOptions, VertexBuffers};
/// use tessera_tessellation::geom::{Color, Polyline};
/// use tessera_tessellation::math::point;
///
/// let mut buffers = VertexBuffers::new();
/// let mut scratch = ScratchBuffer::new();
///
/// let points = [point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0), point(0.0, 10.0)];
/// let count = stroke_line_string(
///     &mut buffers,
///     &mut scratch,
///     &Polyline::closed(&points),
///     &StrokeOptions::thickness(2.0),
///     Color::WHITE,
/// );
///
/// // Four quads, one per edge of the square.
/// assert_eq!(count, 24);
/// assert_eq!(buffers.vertices.len(), 8);
/// ```
pub fn stroke_line_string(
    sink: &mut dyn BufferSink,
    scratch: &mut ScratchBuffer,
    polyline: &Polyline,
    options: &StrokeOptions,
    color: Color,
) -> u32 {
    stroke_line_string_impl(sink, scratch, polyline, options, PointColors::Uniform(color))
}

/// Tessellate a line string with one color per point.
///
/// Returns zero if `colors` and the points don't have the same length.
pub fn stroke_line_string_gradient(
    sink: &mut dyn BufferSink,
    scratch: &mut ScratchBuffer,
    polyline: &Polyline,
    options: &StrokeOptions,
    colors: &[Color],
) -> u32 {
    stroke_line_string_impl(sink, scratch, polyline, options, PointColors::PerPoint(colors))
}

/// Tessellate the outline of a polygon.
///
/// The ring is always closed and sharp corners always get bevel points, regardless of the
/// style and of the `inner` flag of the options.
pub fn stroke_polygon_frame(
    sink: &mut dyn BufferSink,
    scratch: &mut ScratchBuffer,
    points: &[Point],
    options: &StrokeOptions,
    color: Color,
) -> u32 {
    let options = options
        .with_style(LineStyle::SQUARE_CAP)
        .with_inner(false);

    stroke_line_string_impl(
        sink,
        scratch,
        &Polyline::closed(points),
        &options,
        PointColors::Uniform(color),
    )
}

fn stroke_line_string_impl(
    sink: &mut dyn BufferSink,
    scratch: &mut ScratchBuffer,
    polyline: &Polyline,
    options: &StrokeOptions,
    colors: PointColors,
) -> u32 {
    let num_points = polyline.len();
    if !(options.thickness > 0.0) || num_points < 2 || num_points > MAX_POLYLINE_POINTS {
        log::trace!(
            "stroke_line_string: rejected {} points with thickness {}",
            num_points,
            options.thickness
        );
        return 0;
    }

    if let PointColors::PerPoint(c) = colors {
        if c.len() != num_points {
            log::trace!(
                "stroke_line_string: {} colors for {} points",
                c.len(),
                num_points
            );
            return 0;
        }
    }

    let epsilon = options.epsilon();
    let closed = polyline.closed;
    reduce_points(
        polyline.points,
        colors.slice(),
        closed,
        epsilon,
        &mut scratch.points,
        &mut scratch.colors,
    );

    let uniform = match colors {
        PointColors::Uniform(color) => Some(color),
        PointColors::PerPoint(_) => None,
    };

    if options.style.is_dotted() {
        if scratch.points.len() < 2 {
            return 0;
        }

        return stroke_dotted(sink, scratch, closed, options, uniform);
    }

    if uniform.is_some() {
        drop_collinear_points(&mut scratch.points, closed, epsilon);
    }

    if scratch.points.len() < 2 {
        log::trace!("stroke_line_string: less than two distinct points");
        return 0;
    }

    insert_bevels(scratch, closed, options);

    let offset = options.offset.unwrap_or_else(Vector::zero);
    let half = options.thickness * 0.5;
    let cap = if closed { LineCap::Square } else { options.style.cap };

    let points = &scratch.joined;
    let caps = if cap == LineCap::Round {
        let n = points.len();
        let color_at = |i: usize| uniform.unwrap_or_else(|| scratch.joined_colors[i]);
        let begin = perp(try_normalize(points[1] - points[0]).unwrap_or_else(Vector::zero));
        let end = perp(try_normalize(points[n - 1] - points[n - 2]).unwrap_or_else(Vector::zero));

        Some(RoundCaps::new(
            [
                RoundCap {
                    center: points[0] + offset,
                    start_angle: direction_angle(begin),
                    color: color_at(0),
                },
                RoundCap {
                    center: points[n - 1] + offset,
                    start_angle: direction_angle(-end),
                    color: color_at(n - 1),
                },
            ],
            half,
            options.scale,
        ))
    } else {
        None
    };

    emit_strip(
        sink,
        points,
        &scratch.joined_colors,
        uniform,
        closed,
        half,
        cap == LineCap::Square,
        offset,
        caps.as_ref(),
    )
}

/// Drops points too close to the previously kept one, and the closing duplicate of rings.
fn reduce_points(
    points: &[Point],
    colors: &[Color],
    closed: bool,
    epsilon: f32,
    out: &mut Vec<Point>,
    out_colors: &mut Vec<Color>,
) {
    out.clear();
    out_colors.clear();

    for (i, &p) in points.iter().enumerate() {
        if let Some(&last) = out.last() {
            if (p - last).length() < epsilon {
                continue;
            }
        }

        out.push(p);
        if let Some(&color) = colors.get(i) {
            out_colors.push(color);
        }
    }

    if closed && out.len() >= 2 && (out[out.len() - 1] - out[0]).length() <= epsilon {
        out.pop();
        out_colors.pop();
    }
}

/// Removes interior points that don't change the direction of the line string.
fn drop_collinear_points(points: &mut Vec<Point>, closed: bool, epsilon: f32) {
    let n = points.len();
    if n < 3 {
        return;
    }

    let mut kept = 1;
    for i in 1..n {
        let current = points[i];
        let is_last = i == n - 1;
        if is_last && !closed {
            points[kept] = current;
            kept += 1;
            continue;
        }

        let prev = points[kept - 1];
        let next = if is_last { points[0] } else { points[i + 1] };
        if !is_straight(prev, current, next, epsilon) {
            points[kept] = current;
            kept += 1;
        }
    }

    points.truncate(kept);
}

fn is_straight(prev: Point, current: Point, next: Point, epsilon: f32) -> bool {
    let chord = next - prev;
    let length = chord.length();
    if length < epsilon {
        return false;
    }

    let distance = (current - prev).cross(chord).abs() / length;

    distance < epsilon && (current - prev).dot(next - current) > 0.0
}

/// The corner pass, from `scratch.points` to `scratch.joined`.
fn insert_bevels(scratch: &mut ScratchBuffer, closed: bool, options: &StrokeOptions) {
    let ScratchBuffer {
        points,
        colors,
        joined,
        joined_colors,
    } = scratch;

    joined.clear();
    joined_colors.clear();

    let n = points.len();
    let threshold = options.bevel_threshold;
    let epsilon = options.epsilon();
    let bevel = !options.inner;

    let mut push = |p: Point, i: usize| {
        joined.push(p);
        if let Some(&color) = colors.get(i) {
            joined_colors.push(color);
        }
    };

    push(points[0], 0);

    let end = if closed { n } else { n - 1 };
    for i in 1..end {
        let (back, current, next) = (points[i - 1], points[i], points[(i + 1) % n]);
        push(current, i);

        if bevel {
            if let Some(offset) = bevel_offset(back, current, next, threshold, epsilon) {
                push(current + offset, i);
            }
        }
    }

    if !closed {
        push(points[n - 1], n - 1);
    } else if bevel {
        // The extra point of the first corner goes before it, at the end of the ring.
        if let Some(offset) = bevel_offset(points[n - 1], points[0], points[1], threshold, epsilon)
        {
            push(points[0] - offset, 0);
        }
    }
}

/// Offset of the extra point of a sharp corner, if the corner needs one.
fn bevel_offset(
    back: Point,
    current: Point,
    next: Point,
    threshold: f32,
    epsilon: f32,
) -> Option<Vector> {
    let v1 = try_normalize(back - current)?;
    let v2 = try_normalize(next - current)?;
    if v1.dot(v2) <= threshold {
        return None;
    }

    // Bisector of the incoming and outgoing directions.
    match try_normalize(v2 - v1) {
        Some(tangent) => {
            let outgoing = next - current;
            if tangent.dot(outgoing) >= (-tangent).dot(outgoing) {
                Some(tangent * epsilon)
            } else {
                Some(-tangent * epsilon)
            }
        }
        // The line string goes straight back.
        None => Some(perp(-v1) * 0.001),
    }
}

fn emit_strip(
    sink: &mut dyn BufferSink,
    points: &[Point],
    colors: &[Color],
    uniform: Option<Color>,
    closed: bool,
    half_thickness: f32,
    square_cap: bool,
    offset: Vector,
    caps: Option<&RoundCaps>,
) -> u32 {
    let n = points.len() as u32;
    let vertex_count = n * 2;
    let num_quads = if closed { n } else { n - 1 };
    let (cap_vertex_count, cap_index_count) =
        caps.map_or((0, 0), |caps| (caps.vertex_count(), caps.index_count()));
    let view = match allocate(
        sink,
        vertex_count + cap_vertex_count,
        num_quads * 6 + cap_index_count,
    ) {
        Some(view) => view,
        None => return 0,
    };

    let (strip, cap_vertices) = view.vertices.split_at_mut(vertex_count as usize);
    let last = points.len() - 1;
    for (i, pair) in strip.chunks_exact_mut(2).enumerate() {
        let p1 = points[i];
        let (a, b) = if closed || (i > 0 && i < last) {
            let p0 = points[(i + last) % points.len()];
            let p2 = points[(i + 1) % points.len()];
            let miter = compute_normal(p0, p1, p2) * half_thickness;
            (p1 + miter, p1 - miter)
        } else {
            // Extremity of an open line string.
            let direction = if i == 0 {
                try_normalize(points[1] - p1)
            } else {
                try_normalize(p1 - points[last - 1])
            }
            .unwrap_or_else(Vector::zero);

            let normal = perp(direction) * half_thickness;
            let mut extension = if square_cap {
                direction * half_thickness
            } else {
                Vector::zero()
            };
            if i == 0 {
                extension = -extension;
            }

            (p1 + normal + extension, p1 - normal + extension)
        };

        let color = uniform.unwrap_or_else(|| colors[i]);
        pair[0] = Vertex2D::new(a + offset, color);
        pair[1] = Vertex2D::new(b + offset, color);
    }

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    for k in 0..num_quads {
        for &i in &RECT_INDICES {
            indices.push((i as u32 + k * 2) % vertex_count);
        }
    }

    if let Some(caps) = caps {
        caps.write(cap_vertices, &mut indices, vertex_count);
    }

    indices.finish()
}

fn stroke_dotted(
    sink: &mut dyn BufferSink,
    scratch: &ScratchBuffer,
    closed: bool,
    options: &StrokeOptions,
    uniform: Option<Color>,
) -> u32 {
    let points = &scratch.points;
    let n = points.len();
    let num_segments = (if closed { n } else { n - 1 }) as u32;
    let view = match allocate(sink, num_segments * 4, num_segments * 6) {
        Some(view) => view,
        None => return 0,
    };

    let thickness = options.thickness;
    let half = thickness * 0.5;
    let offset = options.offset.unwrap_or_else(Vector::zero);
    let style = &options.style;

    let (phase, v) = match style.cap {
        LineCap::SquareDot => (
            square_dot_phase(style.dot_offset, thickness),
            square_dot_v(thickness, options.scale),
        ),
        _ if style.aligned_dot => (0.5, 1.0),
        _ => (round_dot_phase(style.dot_offset, thickness), 1.0),
    };
    let round = style.cap == LineCap::RoundDot;

    // Distance from the first point, in thicknesses.
    let mut distance = 0.0;
    let mut indices = IndexWriter::new(view.indices, view.base_index);
    for (k, quad_vertices) in view.vertices.chunks_exact_mut(4).enumerate() {
        let (i0, i1) = (k, (k + 1) % n);
        let (p0, p1) = (points[i0] + offset, points[i1] + offset);
        let v01 = p1 - p0;
        let normal = perp(try_normalize(v01).unwrap_or_else(Vector::zero)) * half;

        let mut length = v01.length() / thickness;
        if round && style.aligned_dot {
            length = aligned_dot_length(length);
        }

        let u0 = phase + distance;
        let u1 = u0 + length;
        distance += length;

        let quad = SegmentQuad::new(p0, p1, normal, Vector::zero()).with_tex(u0, u1, v, round);
        let c0 = uniform.unwrap_or_else(|| scratch.colors[i0]);
        let c1 = uniform.unwrap_or_else(|| scratch.colors[i1]);
        quad.write(quad_vertices, c0, c1);

        indices.quad(k as u32 * 4);
    }

    indices.finish()
}

#[cfg(test)]
use crate::{stroke_line, NoOutput, VertexBuffers};

#[cfg(test)]
fn stroke_points(points: &[Point], closed: bool, options: &StrokeOptions) -> VertexBuffers {
    let mut buffers = VertexBuffers::new();
    let mut scratch = ScratchBuffer::new();
    let polyline = Polyline { points, closed };
    stroke_line_string(&mut buffers, &mut scratch, &polyline, options, Color::WHITE);

    buffers
}

#[test]
fn collinear_points() {
    let options = StrokeOptions::thickness(2.0);
    let three = stroke_points(
        &[point(0.0, 0.0), point(5.0, 0.0), point(10.0, 0.0)],
        false,
        &options,
    );
    let two = stroke_points(&[point(0.0, 0.0), point(10.0, 0.0)], false, &options);

    assert_eq!(three.vertices.len(), 4);
    assert_eq!(three.indices, vec![0, 1, 2, 2, 1, 3]);
    assert_eq!(three.vertices, two.vertices);

    let mut single = VertexBuffers::new();
    stroke_line(
        &mut single,
        point(0.0, 0.0),
        point(10.0, 0.0),
        &options,
        &[Color::WHITE; 2],
    );
    assert_eq!(three.vertices, single.vertices);
    assert_eq!(three.indices, single.indices);
}

#[test]
fn duplicate_points() {
    let options = StrokeOptions::thickness(2.0);
    let buffers = stroke_points(
        &[
            point(0.0, 0.0),
            point(0.0, 0.001),
            point(10.0, 0.0),
            point(10.0, 10.0),
            point(10.0, 10.005),
        ],
        false,
        &options,
    );
    assert_eq!(buffers.vertices.len(), 6);
    assert_eq!(buffers.indices.len(), 12);

    let mut sink = NoOutput::new();
    let mut scratch = ScratchBuffer::new();
    let same = [point(1.0, 1.0); 4];
    assert_eq!(
        stroke_line_string(&mut sink, &mut scratch, &Polyline::open(&same), &options, Color::WHITE),
        0
    );
    assert_eq!(sink.requests, 0);
}

#[test]
fn closing_duplicate() {
    let options = StrokeOptions::thickness(2.0);
    let square = [
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
        point(0.0, 0.0),
    ];
    let buffers = stroke_points(&square, true, &options);
    assert_eq!(buffers.vertices.len(), 8);
    assert_eq!(buffers.indices.len(), 24);

    // Miters of a clockwise square ring land on the corners of the inner and outer squares.
    assert_almost_eq(buffers.vertices[0].position(), point(1.0, 1.0));
    assert_almost_eq(buffers.vertices[1].position(), point(-1.0, -1.0));
}

#[cfg(test)]
fn assert_almost_eq(a: Point, b: Point) {
    if (a - b).square_length() > 0.00001 {
        panic!("assert almost equal: {:?} != {:?}", a, b);
    }
}

// Isosceles triangle with a 30 degree angle at the origin.
#[cfg(test)]
fn sharp_triangle() -> [Point; 3] {
    let (s, c) = (15.0f32.to_radians()).sin_cos();
    [point(100.0 * c, -100.0 * s), point(0.0, 0.0), point(100.0 * c, 100.0 * s)]
}

#[test]
fn bevel_at_sharp_corners() {
    let options = StrokeOptions::thickness(2.0);

    // Right angles don't get an extra point.
    let square = [
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ];
    assert_eq!(stroke_points(&square, true, &options).vertices.len(), 8);

    // The 30 degree corner does, the two others don't.
    let triangle = sharp_triangle();
    let buffers = stroke_points(&triangle, true, &options);
    assert_eq!(buffers.vertices.len(), 8);
    assert_eq!(buffers.indices.len(), 24);

    // The extra point sits right after the corner, towards the inside of the angle.
    let mut scratch = ScratchBuffer::new();
    let mut sink = VertexBuffers::new();
    stroke_line_string(
        &mut sink,
        &mut scratch,
        &Polyline::closed(&triangle),
        &options,
        Color::WHITE,
    );
    assert_eq!(scratch.joined.len(), 4);
    assert_almost_eq(scratch.joined[2], point(0.0, 0.01));

    // Unless asked not to.
    let inner = options.with_inner(true);
    assert_eq!(stroke_points(&triangle, true, &inner).vertices.len(), 6);
}

#[test]
fn bevel_on_first_point() {
    let options = StrokeOptions::thickness(2.0);
    let t = sharp_triangle();
    let rotated = [t[1], t[2], t[0]];

    let mut scratch = ScratchBuffer::new();
    let mut sink = VertexBuffers::new();
    stroke_line_string(
        &mut sink,
        &mut scratch,
        &Polyline::closed(&rotated),
        &options,
        Color::WHITE,
    );

    // Inserted at the end of the ring, just before the first point.
    assert_eq!(scratch.joined.len(), 4);
    assert_almost_eq(scratch.joined[3], point(0.0, -0.01));
}

#[test]
fn polygon_frame_always_bevels() {
    let mut buffers = VertexBuffers::new();
    let mut scratch = ScratchBuffer::new();
    let options = StrokeOptions::thickness(2.0)
        .with_inner(true)
        .with_line_cap(LineCap::RoundDot);
    let count = stroke_polygon_frame(
        &mut buffers,
        &mut scratch,
        &sharp_triangle(),
        &options,
        Color::WHITE,
    );
    assert_eq!(count, 24);
    assert_eq!(buffers.vertices.len(), 8);
}

#[test]
fn open_extremities() {
    let flat = StrokeOptions::thickness(2.0).with_line_cap(LineCap::Flat);
    let points = [point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)];
    let buffers = stroke_points(&points, false, &flat);
    assert_eq!(buffers.vertices.len(), 6);
    assert_eq!(buffers.vertices[0].position(), point(0.0, 1.0));
    assert_eq!(buffers.vertices[4].position(), point(9.0, 10.0));
    assert_eq!(buffers.vertices[5].position(), point(11.0, 10.0));

    let square = StrokeOptions::thickness(2.0);
    let buffers = stroke_points(&points, false, &square);
    assert_eq!(buffers.vertices[0].position(), point(-1.0, 1.0));
    assert_eq!(buffers.vertices[5].position(), point(11.0, 11.0));
}

#[test]
fn round_caps() {
    let options = StrokeOptions::thickness(4.0).with_line_cap(LineCap::Round);
    let points = [point(0.0, 0.0), point(10.0, 0.0), point(10.0, 10.0)];

    let mut buffers = VertexBuffers::new();
    let mut scratch = ScratchBuffer::new();
    let count = stroke_line_string(
        &mut buffers,
        &mut scratch,
        &Polyline::open(&points),
        &options,
        Color::WHITE,
    );

    let pie = (crate::quality::circle_pie_quality(2.0, std::f32::consts::PI) as u32 - 1) * 3;
    assert_eq!(count, 12 + 2 * pie);
    assert_eq!(buffers.indices.len() as u32, count);

    // Room for the strip and one cap only: nothing is written.
    let pie_vertices = crate::quality::circle_pie_quality(2.0, std::f32::consts::PI) as usize + 1;
    let mut small = VertexBuffers::with_limits(6 + pie_vertices, 12 + pie as usize);
    let count = stroke_line_string(
        &mut small,
        &mut scratch,
        &Polyline::open(&points),
        &options,
        Color::WHITE,
    );
    assert_eq!(count, 0);
    assert!(small.is_empty());

    // Closed rings ignore the caps.
    let square = [
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ];
    buffers.clear();
    let count = stroke_line_string(
        &mut buffers,
        &mut scratch,
        &Polyline::closed(&square),
        &options,
        Color::WHITE,
    );
    assert_eq!(count, 24);
    assert_eq!(buffers.vertices.len(), 8);
}

#[test]
fn gradient() {
    let red = Color::new(1.0, 0.0, 0.0, 1.0);
    let blue = Color::new(0.0, 0.0, 1.0, 1.0);
    let points = [point(0.0, 0.0), point(5.0, 0.0), point(10.0, 0.0)];
    let options = StrokeOptions::thickness(2.0);

    let mut buffers = VertexBuffers::new();
    let mut scratch = ScratchBuffer::new();
    let count = stroke_line_string_gradient(
        &mut buffers,
        &mut scratch,
        &Polyline::open(&points),
        &options,
        &[red, Color::WHITE, blue],
    );

    // Collinear points are kept when they carry a color.
    assert_eq!(count, 12);
    assert_eq!(buffers.vertices[0].color(), red);
    assert_eq!(buffers.vertices[3].color(), Color::WHITE);
    assert_eq!(buffers.vertices[5].color(), blue);

    let mut sink = NoOutput::new();
    assert_eq!(
        stroke_line_string_gradient(
            &mut sink,
            &mut scratch,
            &Polyline::open(&points),
            &options,
            &[red, blue],
        ),
        0
    );
    assert_eq!(sink.requests, 0);
}

#[test]
fn dotted_line_string() {
    let options = StrokeOptions::thickness(2.0).with_style(LineStyle::SQUARE_DOT);
    let points = [point(0.0, 0.0), point(10.0, 0.0), point(10.0, 4.0)];
    let buffers = stroke_points(&points, false, &options);

    assert_eq!(buffers.vertices.len(), 8);
    assert_eq!(buffers.indices, vec![0, 1, 2, 2, 1, 3, 4, 5, 6, 6, 5, 7]);

    // The pattern continues from one segment to the next.
    assert_eq!(buffers.vertices[2].tex().x, 8.0);
    assert_eq!(buffers.vertices[4].tex().x, 8.0);
    assert_eq!(buffers.vertices[6].tex().x, 10.0);

    let closed = stroke_points(&points, true, &options);
    assert_eq!(closed.vertices.len(), 12);
    assert_eq!(closed.indices.len(), 18);
}

#[test]
fn dotted_matches_single_segment() {
    let points = [point(0.0, 0.0), point(10.0, 0.0)];
    let styles = [
        LineStyle::SQUARE_DOT,
        LineStyle::ROUND_DOT,
        LineStyle::ROUND_DOT.with_dot_offset(1.0),
    ];
    for style in &styles {
        let options = StrokeOptions::thickness(2.0).with_style(*style);
        let string = stroke_points(&points, false, &options);

        let mut single = VertexBuffers::new();
        stroke_line(&mut single, points[0], points[1], &options, &[Color::WHITE; 2]);

        assert_eq!(string.vertices, single.vertices);
        assert_eq!(string.indices, single.indices);
    }
}

#[test]
fn rejected_inputs() {
    let mut sink = NoOutput::new();
    let mut scratch = ScratchBuffer::new();
    let options = StrokeOptions::thickness(2.0);

    let one = [point(0.0, 0.0)];
    assert_eq!(
        stroke_line_string(&mut sink, &mut scratch, &Polyline::open(&one), &options, Color::WHITE),
        0
    );

    let two = [point(0.0, 0.0), point(1.0, 0.0)];
    let zero = StrokeOptions::thickness(0.0);
    assert_eq!(
        stroke_line_string(&mut sink, &mut scratch, &Polyline::open(&two), &zero, Color::WHITE),
        0
    );

    let many = vec![point(0.0, 0.0); MAX_POLYLINE_POINTS + 1];
    assert_eq!(
        stroke_line_string(&mut sink, &mut scratch, &Polyline::open(&many), &options, Color::WHITE),
        0
    );

    assert_eq!(sink.requests, 0);
}

#[test]
fn longest_line_string() {
    // A shallow zigzag: no point is dropped and no corner gets a bevel.
    let points: Vec<Point> = (0..MAX_POLYLINE_POINTS)
        .map(|i| point(i as f32 * 10.0, (i % 2) as f32))
        .collect();

    let mut buffers = VertexBuffers::new();
    let mut scratch = ScratchBuffer::new();
    let count = stroke_line_string(
        &mut buffers,
        &mut scratch,
        &Polyline::open(&points),
        &StrokeOptions::thickness(2.0),
        Color::WHITE,
    );

    assert_eq!(count as usize, (MAX_POLYLINE_POINTS - 1) * 6);
    assert_eq!(buffers.vertices.len(), MAX_POLYLINE_POINTS * 2);
}
