use crate::geom::*;
use crate::geometry_builder::*;
use crate::math::*;
use crate::*;

use std::f32::consts::PI;

type Builder = fn(&mut dyn BufferSink, &mut ScratchBuffer) -> u32;

const ZIGZAG: [Point; 5] = [
    Point::new(0.0, 0.0),
    Point::new(30.0, 10.0),
    Point::new(0.0, 20.0),
    Point::new(30.0, 30.0),
    Point::new(35.0, 30.0),
];

const ZIGZAG_COLORS: [Color; 5] = [
    Color::WHITE,
    Color::BLACK,
    Color::WHITE,
    Color::BLACK,
    Color::TRANSPARENT,
];

fn rect() -> FloatRect {
    FloatRect::new(10.0, 20.0, 110.0, 80.0)
}

fn round_rect() -> RoundRect {
    RoundRect::new(rect(), 12.0)
}

fn circle() -> Circle {
    Circle::new(point(50.0, 50.0), 25.0)
}

fn case(name: &'static str, builder: Builder) -> (&'static str, Builder) {
    (name, builder)
}

fn builders() -> Vec<(&'static str, Builder)> {
    vec![
        case("triangle", |sink, _| {
            let tri = Triangle::new(point(0.0, 0.0), point(10.0, 5.0), point(0.0, 10.0));
            fill_triangle(sink, &tri, Color::WHITE)
        }),
        case("rect", |sink, _| fill_rect(sink, &rect(), Color::WHITE)),
        case("rect frame", |sink, _| {
            stroke_rect_frame(sink, &rect(), 4.0, Color::WHITE, Color::BLACK)
        }),
        case("quad", |sink, _| {
            fill_quad_gradient(sink, &FloatQuad::from(rect()), &[Color::BLACK; 4])
        }),
        case("circle", |sink, _| {
            fill_circle(sink, &circle(), Color::WHITE, Color::BLACK, 2.0)
        }),
        case("circle frame", |sink, _| {
            stroke_circle_frame(sink, &circle(), 3.0, Color::WHITE, Color::BLACK, 1.0)
        }),
        case("ellipse", |sink, _| {
            let ellipse = Ellipse::new(point(0.0, 0.0), 40.0, 10.0);
            fill_ellipse(sink, &ellipse, Color::WHITE, Color::BLACK, 1.0)
        }),
        case("ellipse frame", |sink, _| {
            let ellipse = Ellipse::new(point(0.0, 0.0), 40.0, 10.0);
            stroke_ellipse_frame(sink, &ellipse, 2.0, Color::WHITE, Color::BLACK, 1.0)
        }),
        case("pie", |sink, _| {
            fill_circle_pie(sink, &circle(), 0.3, 2.0, Color::WHITE, 1.0)
        }),
        case("arc", |sink, _| {
            stroke_circle_arc(sink, &circle(), -1.0, -PI, 5.0, Color::WHITE, 1.0)
        }),
        case("segment", |sink, _| {
            fill_circle_segment(sink, &circle(), 0.5, 4.0, Color::WHITE, 1.0)
        }),
        case("round rect", |sink, _| {
            fill_round_rect(sink, &round_rect(), Color::WHITE, 1.0)
        }),
        case("round rect frame", |sink, _| {
            stroke_round_rect_frame(sink, &round_rect(), 2.0, Color::WHITE, Color::BLACK, 3.0)
        }),
        case("line", |sink, _| {
            let options = StrokeOptions::thickness(3.0).with_line_cap(LineCap::Round);
            stroke_line(sink, point(0.0, 0.0), point(20.0, 15.0), &options, &[Color::WHITE; 2])
        }),
        case("dotted line", |sink, _| {
            let options = StrokeOptions::thickness(3.0).with_style(LineStyle::SQUARE_DOT);
            stroke_line(sink, point(0.0, 0.0), point(20.0, 15.0), &options, &[Color::WHITE; 2])
        }),
        case("open line string", |sink, scratch| {
            let options = StrokeOptions::thickness(4.0);
            stroke_line_string(sink, scratch, &Polyline::open(&ZIGZAG), &options, Color::WHITE)
        }),
        case("closed line string", |sink, scratch| {
            let options = StrokeOptions::thickness(4.0).with_inner(true);
            stroke_line_string(sink, scratch, &Polyline::closed(&ZIGZAG), &options, Color::WHITE)
        }),
        case("round line string", |sink, scratch| {
            let options = StrokeOptions::thickness(4.0).with_line_cap(LineCap::Round);
            stroke_line_string(sink, scratch, &Polyline::open(&ZIGZAG), &options, Color::WHITE)
        }),
        case("gradient line string", |sink, scratch| {
            let options = StrokeOptions::thickness(2.0).with_offset(vector(1.0, 1.0));
            stroke_line_string_gradient(
                sink,
                scratch,
                &Polyline::closed(&ZIGZAG),
                &options,
                &ZIGZAG_COLORS,
            )
        }),
        case("dotted line string", |sink, scratch| {
            let options = StrokeOptions::thickness(2.0).with_style(LineStyle::ROUND_DOT);
            stroke_line_string(sink, scratch, &Polyline::closed(&ZIGZAG), &options, Color::WHITE)
        }),
        case("polygon frame", |sink, scratch| {
            let options = StrokeOptions::thickness(1.5);
            stroke_polygon_frame(sink, scratch, &ZIGZAG, &options, Color::WHITE)
        }),
        case("polygon", |sink, _| {
            let triangles = [TriangleIndex::new(0, 1, 2), TriangleIndex::new(2, 3, 4)];
            fill_polygon(sink, &ZIGZAG, &triangles, None, Color::WHITE)
        }),
        case("rect shadow", |sink, _| {
            fill_rect_shadow(sink, &rect(), &ShadowOptions::blur(6.0), Color::BLACK)
        }),
        case("circle shadow", |sink, _| {
            let options = ShadowOptions::blur(6.0).with_fill(false);
            fill_circle_shadow(sink, &circle(), &options, Color::BLACK)
        }),
        case("round rect shadow", |sink, _| {
            fill_round_rect_shadow(sink, &round_rect(), &ShadowOptions::blur(6.0), Color::BLACK)
        }),
        case("textured circle", |sink, _| {
            let uv = FloatRect::new(0.0, 0.0, 1.0, 1.0);
            fill_textured_circle(sink, &circle(), &uv, Color::WHITE, 1.0)
        }),
        case("textured round rect", |sink, _| {
            let uv = FloatRect::new(0.0, 0.0, 1.0, 1.0);
            fill_textured_round_rect(sink, &round_rect(), &uv, Color::WHITE, 1.0)
        }),
    ]
}

/// Keeps track of every request, to check what the builders wrote.
struct Recorder {
    buffers: VertexBuffers,
    // (first vertex, vertex count, first index, index count)
    requests: Vec<(usize, usize, usize, usize)>,
}

impl Recorder {
    fn new() -> Self {
        Recorder {
            buffers: VertexBuffers::new(),
            requests: Vec::new(),
        }
    }
}

impl BufferSink for Recorder {
    fn request(
        &mut self,
        vertex_count: u32,
        index_count: u32,
    ) -> Result<BufferView<'_>, GeometryBuilderError> {
        self.requests.push((
            self.buffers.vertices.len(),
            vertex_count as usize,
            self.buffers.indices.len(),
            index_count as usize,
        ));

        self.buffers.request(vertex_count, index_count)
    }
}

fn record(builder: Builder, preamble: bool) -> (u32, Recorder) {
    let mut recorder = Recorder::new();
    if preamble {
        fill_rect(&mut recorder, &FloatRect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
    }

    let mut scratch = ScratchBuffer::new();
    let count = builder(&mut recorder, &mut scratch);

    (count, recorder)
}

#[test]
fn indices_stay_in_requested_range() {
    for (name, builder) in builders() {
        let (count, recorder) = record(builder, true);
        assert!(count > 0, "{} produced nothing", name);
        assert_eq!(
            count as usize + 6,
            recorder.buffers.indices.len(),
            "{}: returned count doesn't match the written indices",
            name
        );
        assert_eq!(count % 3, 0, "{}", name);
        // One request for the preamble, one for the builder.
        assert_eq!(recorder.requests.len(), 2, "{}: {:?}", name, recorder.requests);

        for &(first_vertex, vertex_count, first_index, index_count) in &recorder.requests {
            let range = first_vertex..first_vertex + vertex_count;
            for &i in &recorder.buffers.indices[first_index..first_index + index_count] {
                assert!(range.contains(&(i as usize)), "{}: {} not in {:?}", name, i, range);
            }
        }
    }
}

#[test]
fn every_vertex_is_referenced() {
    for (name, builder) in builders() {
        let (_, recorder) = record(builder, false);
        let buffers = &recorder.buffers;
        let mut used = vec![false; buffers.vertices.len()];
        for &i in &buffers.indices {
            used[i as usize] = true;
        }

        assert!(used.iter().all(|&u| u), "{}: unused vertices", name);
        for v in &buffers.vertices {
            assert!(v.position[0].is_finite() && v.position[1].is_finite(), "{}: {:?}", name, v);
        }
    }
}

#[test]
fn identical_output_on_independent_sinks() {
    for (name, builder) in builders() {
        let (_, a) = record(builder, false);
        let (_, b) = record(builder, false);

        let bytes_a: &[u8] = bytemuck::cast_slice(&a.buffers.vertices);
        let bytes_b: &[u8] = bytemuck::cast_slice(&b.buffers.vertices);
        assert_eq!(bytes_a, bytes_b, "{}", name);
        assert_eq!(a.buffers.indices, b.buffers.indices, "{}", name);
    }
}

#[test]
fn base_index_is_applied() {
    for (name, builder) in builders() {
        let (_, fresh) = record(builder, false);
        let (_, shifted) = record(builder, true);

        assert_eq!(&shifted.buffers.vertices[4..], &fresh.buffers.vertices[..], "{}", name);
        for (a, b) in shifted.buffers.indices[6..].iter().zip(&fresh.buffers.indices) {
            assert_eq!(*a, *b + 4, "{}", name);
        }
    }
}

#[test]
fn fixed_buffers_match_vertex_buffers() {
    let mut vertices = vec![Vertex2D::default(); 4096];
    let mut indices = vec![0; 8192];

    for (name, builder) in builders() {
        let (count, recorder) = record(builder, false);

        let mut sink = FixedBuffers::new(&mut vertices, &mut indices);
        let mut scratch = ScratchBuffer::new();
        assert_eq!(builder(&mut sink, &mut scratch), count, "{}", name);

        let (vertex_count, index_count) = (sink.vertex_count(), sink.index_count());
        assert_eq!(&vertices[..vertex_count], &recorder.buffers.vertices[..], "{}", name);
        assert_eq!(&indices[..index_count], &recorder.buffers.indices[..], "{}", name);
    }
}

#[test]
fn exhausted_sinks_are_left_untouched() {
    for (name, builder) in builders() {
        let mut scratch = ScratchBuffer::new();

        let mut sink = NoOutput::new();
        assert_eq!(builder(&mut sink, &mut scratch), 0, "{}", name);
        // Bodies and caps are requested together.
        assert_eq!(sink.requests, 1, "{}", name);

        let mut buffers = VertexBuffers::with_limits(2, 2);
        assert_eq!(builder(&mut buffers, &mut scratch), 0, "{}", name);
        assert!(buffers.is_empty(), "{}", name);
    }
}

#[test]
fn batch_vertex_limit() {
    let mut buffers = VertexBuffers::with_capacity(0, 0);
    buffers
        .vertices
        .resize(MAX_VERTICES as usize - 10, Vertex2D::default());

    assert_eq!(fill_rect(&mut buffers, &rect(), Color::WHITE), 6);
    assert_eq!(fill_circle(&mut buffers, &circle(), Color::WHITE, Color::WHITE, 1.0), 0);
    assert_eq!(buffers.vertices.len(), MAX_VERTICES as usize - 6);
    assert_eq!(buffers.indices.len(), 6);
}
