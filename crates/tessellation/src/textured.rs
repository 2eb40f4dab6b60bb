//! Textured variants of the basic shapes, and particles.
//!
//! Texture coordinates are interpolated linearly from a UV rectangle over the bounding box of
//! the shape.

use crate::basic_shapes::RoundRectOutline;
use crate::geom::{Circle, Color, FloatQuad, FloatRect, RoundRect};
use crate::geometry_builder::{allocate, BufferSink, IndexWriter};
use crate::math::*;
use crate::quality::{ellipse_quality, fan_quality, unit_circle};
use crate::vertex::Vertex2D;

/// A single particle of a particle system.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Particle {
    pub position: Point,
    /// Rotation in radians.
    pub rotation: f32,
    pub start_size: f32,
    pub start_color: Color,
    pub start_lifetime: f32,
    pub remaining_lifetime: f32,
}

/// Tessellate a rectangle showing the `uv` region of a texture.
pub fn fill_texture_region(
    sink: &mut dyn BufferSink,
    rect: &FloatRect,
    uv: &FloatRect,
    color: Color,
) -> u32 {
    fill_texture_region_gradient(sink, rect, uv, &[color; 4])
}

/// Tessellate a textured rectangle with one color per corner, clockwise from the top-left one.
pub fn fill_texture_region_gradient(
    sink: &mut dyn BufferSink,
    rect: &FloatRect,
    uv: &FloatRect,
    colors: &[Color; 4],
) -> u32 {
    let view = match allocate(sink, 4, 6) {
        Some(view) => view,
        None => return 0,
    };

    view.vertices[0] = Vertex2D::with_tex(rect.top_left(), uv.top_left(), colors[0]);
    view.vertices[1] = Vertex2D::with_tex(rect.top_right(), uv.top_right(), colors[1]);
    view.vertices[2] = Vertex2D::with_tex(rect.bottom_left(), uv.bottom_left(), colors[3]);
    view.vertices[3] = Vertex2D::with_tex(rect.bottom_right(), uv.bottom_right(), colors[2]);

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    indices.quad(0);

    indices.finish()
}

/// Tessellate a quad showing the `uv` region of a texture.
///
/// The texture's top-left corner is mapped to the first point of the quad, then clockwise.
pub fn fill_textured_quad(
    sink: &mut dyn BufferSink,
    quad: &FloatQuad,
    uv: &FloatRect,
    color: Color,
) -> u32 {
    let view = match allocate(sink, 4, 6) {
        Some(view) => view,
        None => return 0,
    };

    let p = &quad.points;
    view.vertices[0] = Vertex2D::with_tex(p[0], uv.top_left(), color);
    view.vertices[1] = Vertex2D::with_tex(p[1], uv.top_right(), color);
    view.vertices[2] = Vertex2D::with_tex(p[3], uv.bottom_left(), color);
    view.vertices[3] = Vertex2D::with_tex(p[2], uv.bottom_right(), color);

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    indices.quad(0);

    indices.finish()
}

/// Tessellate a circle showing the ellipse inscribed in the `uv` region of a texture.
pub fn fill_textured_circle(
    sink: &mut dyn BufferSink,
    circle: &Circle,
    uv: &FloatRect,
    color: Color,
    scale: f32,
) -> u32 {
    if circle.r == 0.0 {
        log::trace!("fill_textured_circle: zero radius");
        return 0;
    }

    let quality = ellipse_quality(circle.r.abs() * scale);
    let q = quality as u32;
    let view = match allocate(sink, q + 1, q * 3) {
        Some(view) => view,
        None => return 0,
    };

    let uv_center = uv.center();
    let uv_radius = vector(uv.width() * 0.5, uv.height() * 0.5);

    view.vertices[0] = Vertex2D::with_tex(circle.center, uv_center, color);
    for (vertex, dir) in view.vertices[1..].iter_mut().zip(unit_circle(quality)) {
        let tex = point(
            uv_center.x + uv_radius.x * dir.x,
            uv_center.y + uv_radius.y * dir.y,
        );
        *vertex = Vertex2D::with_tex(circle.center + dir * circle.r, tex, color);
    }

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    for i in 0..q {
        indices.triangle(i + 1, 0, (i + 1) % q + 1);
    }

    indices.finish()
}

/// Tessellate a rounded rectangle showing the `uv` region of a texture.
pub fn fill_textured_round_rect(
    sink: &mut dyn BufferSink,
    round_rect: &RoundRect,
    uv: &FloatRect,
    color: Color,
    scale: f32,
) -> u32 {
    let rect = &round_rect.rect;
    if !(rect.width() > 0.0) || !(rect.height() > 0.0) {
        log::trace!("fill_textured_round_rect: empty {:?}", rect);
        return 0;
    }

    let radius = round_rect.clamped_radius();
    if radius <= 0.0 {
        return fill_texture_region(sink, rect, uv, color);
    }

    let outline = RoundRectOutline::new(rect, radius, fan_quality(radius * scale), true);
    let n = outline.len() as u32;
    let view = match allocate(sink, n, (n - 2) * 3) {
        Some(view) => view,
        None => return 0,
    };

    let origin = rect.top_left();
    let sx = uv.width() / rect.width();
    let sy = uv.height() / rect.height();
    for (vertex, p) in view.vertices.iter_mut().zip(outline.points()) {
        let tex = point(uv.left + (p.x - origin.x) * sx, uv.top + (p.y - origin.y) * sy);
        *vertex = Vertex2D::with_tex(p, tex, color);
    }

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    for i in 0..n - 2 {
        indices.triangle(0, i + 1, i + 2);
    }

    indices.finish()
}

/// Tessellate one textured quad per particle.
///
/// The size and color of each particle are evaluated from its start values and its
/// lifetime by the provided functions, which receive `(start, start_lifetime,
/// remaining_lifetime)`. The whole texture is mapped on each quad.
pub fn build_particles<S, C>(
    sink: &mut dyn BufferSink,
    particles: &[Particle],
    size_over_lifetime: S,
    color_over_lifetime: C,
) -> u32
where
    S: Fn(f32, f32, f32) -> f32,
    C: Fn(Color, f32, f32) -> Color,
{
    if particles.is_empty() {
        return 0;
    }

    let count = particles.len() as u32;
    let view = match allocate(sink, count * 4, count * 6) {
        Some(view) => view,
        None => return 0,
    };

    const UVS: [Point; 4] = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
    ];

    for (quad, particle) in view.vertices.chunks_exact_mut(4).zip(particles) {
        let size = size_over_lifetime(
            particle.start_size,
            particle.start_lifetime,
            particle.remaining_lifetime,
        );
        let color = color_over_lifetime(
            particle.start_color,
            particle.start_lifetime,
            particle.remaining_lifetime,
        );

        let half = size * 0.5;
        let (s, c) = particle.rotation.sin_cos();
        let (xc, xs) = (half * c, half * s);
        let corners = [
            vector(-xc + xs, -xs - xc),
            vector(xc + xs, xs - xc),
            vector(-xc - xs, -xs + xc),
            vector(xc - xs, xs + xc),
        ];

        for ((vertex, corner), tex) in quad.iter_mut().zip(&corners).zip(&UVS) {
            *vertex = Vertex2D::with_tex(particle.position + *corner, *tex, color);
        }
    }

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    for i in 0..count {
        indices.quad(i * 4);
    }

    indices.finish()
}

#[cfg(test)]
use crate::VertexBuffers;

#[test]
fn texture_region() {
    let mut buffers = VertexBuffers::new();
    let rect = FloatRect::new(10.0, 10.0, 20.0, 30.0);
    let uv = FloatRect::new(0.0, 0.5, 0.5, 1.0);

    let colors = [Color::WHITE, Color::BLACK, Color::TRANSPARENT, Color::WHITE.with_alpha(0.5)];
    assert_eq!(fill_texture_region_gradient(&mut buffers, &rect, &uv, &colors), 6);
    assert_eq!(buffers.vertices[1].position(), point(20.0, 10.0));
    assert_eq!(buffers.vertices[1].tex(), point(0.5, 0.5));
    assert_eq!(buffers.vertices[2].tex(), point(0.0, 1.0));
    assert_eq!(buffers.vertices[2].color(), colors[3]);
    assert_eq!(buffers.vertices[3].color(), colors[2]);
    assert_eq!(buffers.indices, vec![0, 1, 2, 2, 1, 3]);
}

#[test]
fn textured_quad() {
    let mut buffers = VertexBuffers::new();
    let quad = FloatQuad::from(FloatRect::new(0.0, 0.0, 2.0, 2.0));
    let uv = FloatRect::new(0.0, 0.0, 1.0, 1.0);

    assert_eq!(fill_textured_quad(&mut buffers, &quad, &uv, Color::WHITE), 6);
    assert_eq!(buffers.vertices[2].position(), point(0.0, 2.0));
    assert_eq!(buffers.vertices[2].tex(), point(0.0, 1.0));
    assert_eq!(buffers.vertices[3].position(), point(2.0, 2.0));
}

#[test]
fn textured_circle() {
    let mut buffers = VertexBuffers::new();
    let circle = Circle::new(point(0.0, 0.0), 10.0);
    let uv = FloatRect::new(0.0, 0.0, 1.0, 1.0);

    let q = ellipse_quality(10.0) as u32;
    assert_eq!(fill_textured_circle(&mut buffers, &circle, &uv, Color::WHITE, 1.0), q * 3);
    assert_eq!(buffers.vertices.len() as u32, q + 1);
    assert_eq!(buffers.vertices[0].tex(), point(0.5, 0.5));
    assert!((buffers.vertices[1].tex() - point(1.0, 0.5)).length() < 1e-5);
    assert!((buffers.vertices[1].position() - point(10.0, 0.0)).length() < 1e-5);
    assert_eq!(&buffers.indices[buffers.indices.len() - 3..], &[q as u16, 0, 1]);
}

#[test]
fn textured_round_rect() {
    let mut buffers = VertexBuffers::new();
    let round_rect = RoundRect::new(FloatRect::new(0.0, 0.0, 100.0, 50.0), 10.0);
    let uv = FloatRect::new(0.0, 0.0, 1.0, 1.0);

    let count = fill_textured_round_rect(&mut buffers, &round_rect, &uv, Color::WHITE, 1.0);
    let n = buffers.vertices.len() as u32;
    assert_eq!(count, (n - 2) * 3);
    for v in &buffers.vertices {
        let p = v.position();
        let expected = point(p.x / 100.0, p.y / 50.0);
        assert!((v.tex() - expected).length() < 1e-5, "{:?}", v);
    }

    buffers.clear();
    let square = RoundRect::new(FloatRect::new(0.0, 0.0, 10.0, 10.0), 0.0);
    assert_eq!(fill_textured_round_rect(&mut buffers, &square, &uv, Color::WHITE, 1.0), 6);
    assert_eq!(buffers.vertices[3].tex(), point(1.0, 1.0));
}

#[test]
fn particles() {
    let particles = [
        Particle {
            position: point(10.0, 10.0),
            rotation: 0.0,
            start_size: 4.0,
            start_color: Color::WHITE,
            start_lifetime: 2.0,
            remaining_lifetime: 1.0,
        },
        Particle {
            position: point(0.0, 0.0),
            rotation: std::f32::consts::FRAC_PI_2,
            start_size: 2.0,
            start_color: Color::BLACK,
            start_lifetime: 2.0,
            remaining_lifetime: 2.0,
        },
    ];

    let mut buffers = VertexBuffers::new();
    let count = build_particles(
        &mut buffers,
        &particles,
        |size, start, remaining| size * remaining / start,
        |color, _, remaining| color.with_alpha(remaining * 0.5),
    );

    assert_eq!(count, 12);
    assert_eq!(buffers.vertices.len(), 8);

    // Half of the start size, not rotated.
    assert_eq!(buffers.vertices[0].position(), point(9.0, 9.0));
    assert_eq!(buffers.vertices[3].position(), point(11.0, 11.0));
    assert_eq!(buffers.vertices[3].tex(), point(1.0, 1.0));
    assert_eq!(buffers.vertices[0].color(), Color::WHITE.with_alpha(0.5));

    // A quarter turn: the first corner moves from the top-left to the top-right.
    assert!((buffers.vertices[4].position() - point(1.0, -1.0)).length() < 1e-5);
    assert_eq!(&buffers.indices[6..], &[4, 5, 6, 6, 5, 7]);

    assert_eq!(build_particles(&mut buffers, &[], |s, _, _| s, |c, _, _| c), 0);
}
