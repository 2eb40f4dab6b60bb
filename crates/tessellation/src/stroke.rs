//! Single segment strokes.
//!
//! A segment is a quad of the stroke thickness. [`LineCap::Square`] extends it by half of
//! the thickness at both ends, [`LineCap::Flat`] stops at the extremities and
//! [`LineCap::Round`] adds a half circle on each end, allocated together with the quad.
//!
//! Dotted strokes keep the flat quad and leave the pattern to the shader: `u` runs along the
//! segment in thicknesses, with a period of three thicknesses for square dots and two for
//! round dots.

use crate::basic_shapes::write_pie;
use crate::geom::{Circle, Color};
use crate::geometry_builder::{allocate, BufferSink, IndexWriter};
use crate::math::*;
use crate::math_utils::{fraction, perp};
use crate::quality::circle_pie_quality;
use crate::vertex::Vertex2D;
use crate::{LineCap, StrokeOptions};

use std::f32::consts::PI;

/// Four corners and their texture coordinates, in the order of `RECT_INDICES`: the two
/// vertices at the start of the segment, then the two at its end.
pub(crate) struct SegmentQuad {
    pub positions: [Point; 4],
    pub tex: [Point; 4],
}

impl SegmentQuad {
    /// The segment `from -> to` widened by `normal` on both sides and extended by `extension`
    /// at both ends.
    pub fn new(from: Point, to: Point, normal: Vector, extension: Vector) -> Self {
        SegmentQuad {
            positions: [
                from + normal - extension,
                from - normal - extension,
                to + normal + extension,
                to - normal + extension,
            ],
            tex: [Point::origin(); 4],
        }
    }

    /// Sets the texture coordinates of the start and end vertices.
    ///
    /// `v` is given for the positive side and its opposite is used for the negative side when
    /// `mirror_v` is set.
    pub fn with_tex(mut self, u0: f32, u1: f32, v: f32, mirror_v: bool) -> Self {
        let v1 = if mirror_v { -v } else { v };
        self.tex = [point(u0, v), point(u0, v1), point(u1, v), point(u1, v1)];
        self
    }

    pub fn write(&self, vertices: &mut [Vertex2D], start_color: Color, end_color: Color) {
        for (i, vertex) in vertices.iter_mut().enumerate().take(4) {
            let color = if i < 2 { start_color } else { end_color };
            *vertex = Vertex2D::with_tex(self.positions[i], self.tex[i], color);
        }
    }
}

/// Phase of a square dot pattern (period of three thicknesses).
pub(crate) fn square_dot_phase(dot_offset: f32, thickness: f32) -> f32 {
    (1.0 - fraction(dot_offset / 3.0 / thickness)) * 3.0
}

/// Anti-aliasing hint of square dots.
pub(crate) fn square_dot_v(thickness: f32, scale: f32) -> f32 {
    (1.0 / (thickness * scale)).min(1.0)
}

/// Phase of a round dot pattern (period of two thicknesses).
pub(crate) fn round_dot_phase(dot_offset: f32, thickness: f32) -> f32 {
    (1.0 - fraction(dot_offset / 2.0 / thickness)) * 2.0
}

/// Stretches a length expressed in thicknesses so that both extremities land on a dot.
pub(crate) fn aligned_dot_length(length: f32) -> f32 {
    length + 2.0 - (length - 1.0).rem_euclid(2.0)
}

/// Clockwise angle from the up direction of a vector, as used by the pie builder.
#[inline]
pub(crate) fn direction_angle(v: Vector) -> f32 {
    v.x.atan2(-v.y)
}

/// One end of a round-capped stroke.
pub(crate) struct RoundCap {
    pub center: Point,
    pub start_angle: f32,
    pub color: Color,
}

/// The two half circles of a round-capped stroke, written in the same view as its body.
pub(crate) struct RoundCaps {
    caps: [RoundCap; 2],
    radius: f32,
    quality: u32,
}

impl RoundCaps {
    pub fn new(caps: [RoundCap; 2], radius: f32, scale: f32) -> Self {
        RoundCaps {
            caps,
            radius,
            quality: circle_pie_quality(radius * scale, PI) as u32,
        }
    }

    pub fn vertex_count(&self) -> u32 {
        2 * (self.quality + 1)
    }

    pub fn index_count(&self) -> u32 {
        2 * (self.quality - 1) * 3
    }

    /// Writes both caps into `vertices`, which starts at vertex `first` of the view.
    pub fn write(&self, vertices: &mut [Vertex2D], indices: &mut IndexWriter, first: u32) {
        let per_cap = self.quality + 1;
        for (k, (cap, pie)) in self
            .caps
            .iter()
            .zip(vertices.chunks_exact_mut(per_cap as usize))
            .enumerate()
        {
            write_pie(
                pie,
                indices,
                first + k as u32 * per_cap,
                &Circle::new(cap.center, self.radius),
                cap.start_angle,
                PI,
                cap.color,
            );
        }
    }
}

/// Writes a single quad.
pub(crate) fn emit_quad(
    sink: &mut dyn BufferSink,
    quad: &SegmentQuad,
    start_color: Color,
    end_color: Color,
) -> u32 {
    let view = match allocate(sink, 4, 6) {
        Some(view) => view,
        None => return 0,
    };

    quad.write(view.vertices, start_color, end_color);

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    indices.quad(0);

    indices.finish()
}

/// Tessellate a single line segment.
///
/// `colors` are the colors at `from` and at `to`. The thickness, cap, dot pattern, offset and
/// scale are read from the options.
///
/// Dotted styles produce the same quad as the flat style. Their texture coordinates
/// encode the position along the segment in thicknesses in `u`, plus the pattern phase.
/// Square dots store an anti-aliasing hint in `v` while round dots store `1` and `-1` on
/// each side of the segment.
///
/// ```
/// use tessera_tessellation::{stroke_line, StrokeOptions, LineCap, VertexBuffers};
/// use tessera_tessellation::geom::Color;
/// use tessera_tessellation::math::point;
///
/// let mut buffers = VertexBuffers::new();
/// let options = StrokeOptions::thickness(2.0).with_line_cap(LineCap::Flat);
///
/// let count = stroke_line(
///     &mut buffers,
///     point(0.0, 0.0),
///     point(10.0, 0.0),
///     &options,
///     &[Color::WHITE; 2],
/// );
///
/// assert_eq!(count, 6);
/// assert_eq!(buffers.vertices[0].position(), point(0.0, 1.0));
/// assert_eq!(buffers.vertices[3].position(), point(10.0, -1.0));
/// ```
pub fn stroke_line(
    sink: &mut dyn BufferSink,
    from: Point,
    to: Point,
    options: &StrokeOptions,
    colors: &[Color; 2],
) -> u32 {
    let thickness = options.thickness;
    if !(thickness > 0.0) {
        log::trace!("stroke_line: non-positive thickness {}", thickness);
        return 0;
    }

    let offset = options.offset.unwrap_or_else(Vector::zero);
    let (from, to) = (from + offset, to + offset);

    let v = to - from;
    let length = v.length();
    if !(length > 0.0) || !length.is_finite() {
        log::trace!("stroke_line: zero length segment at {:?}", from);
        return 0;
    }

    let half = thickness * 0.5;
    let direction = v / length;
    let normal = perp(direction) * half;
    let length_n = length / thickness;
    let style = &options.style;

    let quad = match style.cap {
        LineCap::Square => SegmentQuad::new(from, to, normal, direction * half),
        LineCap::Flat | LineCap::Round => SegmentQuad::new(from, to, normal, Vector::zero()),
        LineCap::SquareDot => {
            let u = square_dot_phase(style.dot_offset, thickness);
            let v = square_dot_v(thickness, options.scale);
            SegmentQuad::new(from, to, normal, Vector::zero()).with_tex(u, u + length_n, v, false)
        }
        LineCap::RoundDot => {
            let (u, length_n) = if style.aligned_dot {
                (0.5, aligned_dot_length(length_n))
            } else {
                (round_dot_phase(style.dot_offset, thickness), length_n)
            };
            SegmentQuad::new(from, to, normal, Vector::zero()).with_tex(u, u + length_n, 1.0, true)
        }
    };

    if style.cap != LineCap::Round {
        return emit_quad(sink, &quad, colors[0], colors[1]);
    }

    let start_angle = direction_angle(normal);
    let caps = RoundCaps::new(
        [
            RoundCap {
                center: from,
                start_angle,
                color: colors[0],
            },
            RoundCap {
                center: to,
                start_angle: start_angle + PI,
                color: colors[1],
            },
        ],
        half,
        options.scale,
    );

    let view = match allocate(sink, 4 + caps.vertex_count(), 6 + caps.index_count()) {
        Some(view) => view,
        None => return 0,
    };

    let (body, cap_vertices) = view.vertices.split_at_mut(4);
    quad.write(body, colors[0], colors[1]);

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    indices.quad(0);
    caps.write(cap_vertices, &mut indices, 4);

    indices.finish()
}

#[cfg(test)]
use crate::{LineStyle, NoOutput, VertexBuffers};

#[cfg(test)]
fn stroke(options: &StrokeOptions) -> VertexBuffers {
    let mut buffers = VertexBuffers::new();
    stroke_line(
        &mut buffers,
        point(0.0, 0.0),
        point(10.0, 0.0),
        options,
        &[Color::WHITE, Color::BLACK],
    );

    buffers
}

#[test]
fn square_cap() {
    let buffers = stroke(&StrokeOptions::thickness(2.0));
    let positions: Vec<Point> = buffers.vertices.iter().map(|v| v.position()).collect();
    assert_eq!(
        positions,
        vec![
            point(-1.0, 1.0),
            point(-1.0, -1.0),
            point(11.0, 1.0),
            point(11.0, -1.0)
        ]
    );
    assert_eq!(buffers.indices, vec![0, 1, 2, 2, 1, 3]);
    assert_eq!(buffers.vertices[0].color(), Color::WHITE);
    assert_eq!(buffers.vertices[3].color(), Color::BLACK);
}

#[test]
fn round_cap() {
    let options = StrokeOptions::thickness(4.0).with_line_cap(LineCap::Round);
    let mut buffers = VertexBuffers::new();
    let count = stroke_line(
        &mut buffers,
        point(0.0, 0.0),
        point(10.0, 0.0),
        &options,
        &[Color::WHITE, Color::BLACK],
    );

    let pie_quality = crate::quality::circle_pie_quality(2.0, PI) as u32;
    assert_eq!(count, 6 + 2 * (pie_quality - 1) * 3);
    assert_eq!(buffers.vertices.len() as u32, 4 + 2 * (pie_quality + 1));

    // The first cap is behind the start of the segment, the second one past its end.
    let first_pie = &buffers.vertices[4..4 + pie_quality as usize + 1];
    let second_pie = &buffers.vertices[4 + pie_quality as usize + 1..];
    for v in first_pie {
        assert!(v.position().x <= 1e-4, "{:?}", v.position());
        assert_eq!(v.color(), Color::WHITE);
    }
    for v in second_pie {
        assert!(v.position().x >= 10.0 - 1e-4, "{:?}", v.position());
        assert_eq!(v.color(), Color::BLACK);
    }
}

#[test]
fn square_dots() {
    let options = StrokeOptions::thickness(2.0)
        .with_style(LineStyle::SQUARE_DOT)
        .with_scale(0.25);
    let buffers = stroke(&options);

    // Same geometry as the flat cap.
    assert_eq!(buffers.vertices[0].position(), point(0.0, 1.0));
    assert_eq!(buffers.vertices[2].position(), point(10.0, 1.0));

    // No phase: the pattern starts a full period in.
    assert_eq!(buffers.vertices[0].tex(), point(3.0, 1.0));
    assert_eq!(buffers.vertices[3].tex(), point(8.0, 1.0));
}

#[test]
fn round_dots() {
    let options = StrokeOptions::thickness(2.0).with_style(LineStyle::ROUND_DOT);
    let buffers = stroke(&options);

    // 5 thicknesses long, stretched to 7 so that the segment ends on a dot.
    assert_eq!(buffers.vertices[0].tex(), point(0.5, 1.0));
    assert_eq!(buffers.vertices[1].tex(), point(0.5, -1.0));
    assert_eq!(buffers.vertices[2].tex(), point(7.5, 1.0));
    assert_eq!(buffers.vertices[3].tex(), point(7.5, -1.0));

    let options =
        StrokeOptions::thickness(2.0).with_style(LineStyle::ROUND_DOT.with_dot_offset(1.0));
    let buffers = stroke(&options);
    assert_eq!(buffers.vertices[0].tex(), point(1.5, 1.0));
    assert_eq!(buffers.vertices[2].tex(), point(6.5, 1.0));
}

#[test]
fn line_offset() {
    let options = StrokeOptions::thickness(2.0)
        .with_line_cap(LineCap::Flat)
        .with_offset(vector(5.0, 5.0));
    let buffers = stroke(&options);
    assert_eq!(buffers.vertices[0].position(), point(5.0, 6.0));
}

#[test]
fn degenerate_lines() {
    let mut sink = NoOutput::new();
    let colors = [Color::WHITE; 2];
    let a = point(1.0, 1.0);

    let zero_thickness = StrokeOptions::thickness(0.0);
    assert_eq!(stroke_line(&mut sink, a, point(5.0, 1.0), &zero_thickness, &colors), 0);

    let round = StrokeOptions::thickness(2.0).with_line_cap(LineCap::Round);
    assert_eq!(stroke_line(&mut sink, a, a, &round, &colors), 0);

    assert_eq!(sink.requests, 0);

    // Exhausted sink: the quad and the caps are requested at once.
    assert_eq!(stroke_line(&mut sink, a, point(5.0, 1.0), &round, &colors), 0);
    assert_eq!(sink.requests, 1);
}

#[test]
fn round_cap_needs_room_for_both_ends() {
    let options = StrokeOptions::thickness(4.0).with_line_cap(LineCap::Round);
    let pie_quality = crate::quality::circle_pie_quality(2.0, PI) as usize;
    let colors = [Color::WHITE; 2];
    let (from, to) = (point(0.0, 0.0), point(10.0, 0.0));

    // Enough for the quad and a single cap.
    let one_cap = (4 + pie_quality + 1, 6 + (pie_quality - 1) * 3);
    let quad_only = (4, 6);
    for &(max_vertices, max_indices) in &[one_cap, quad_only] {
        let mut buffers = VertexBuffers::with_limits(max_vertices, max_indices);
        assert_eq!(stroke_line(&mut buffers, from, to, &options, &colors), 0);
        assert!(buffers.is_empty());
    }

    let mut buffers =
        VertexBuffers::with_limits(4 + 2 * (pie_quality + 1), 6 + 2 * (pie_quality - 1) * 3);
    let count = stroke_line(&mut buffers, from, to, &options, &colors);
    assert_eq!(count as usize, buffers.indices.len());
    assert_eq!(buffers.vertices.len(), 4 + 2 * (pie_quality + 1));
}

#[test]
fn aligned_lengths() {
    assert_eq!(aligned_dot_length(5.0), 7.0);
    assert_eq!(aligned_dot_length(4.0), 5.0);
    assert_eq!(aligned_dot_length(0.5), 1.0);
}
