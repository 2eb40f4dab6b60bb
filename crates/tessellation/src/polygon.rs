//! Filled polygons, meshes and sprites.
//!
//! These builders don't triangulate anything: they copy a triangle list computed upstream and
//! shift its indices to the position of the geometry in the sink.

use crate::geom::Color;
use crate::geometry_builder::{allocate, BufferSink, IndexWriter};
use crate::math::*;
use crate::vertex::Vertex2D;
use crate::{Index, TriangleIndex};

/// A pre-built mesh with its own vertices and a flat index list.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Sprite {
    pub vertices: Vec<Vertex2D>,
    pub indices: Vec<Index>,
}

impl Sprite {
    pub fn new() -> Self {
        Sprite::default()
    }
}

fn check_triangles(vertex_count: usize, triangles: &[TriangleIndex]) -> bool {
    if vertex_count == 0 || triangles.is_empty() {
        log::trace!("empty polygon");
        return false;
    }

    match triangles.iter().find(|t| t.max() as usize >= vertex_count) {
        Some(t) => {
            log::trace!("triangle {:?} is out of {} vertices", t, vertex_count);
            false
        }
        None => true,
    }
}

/// Copies a triangulated polygon, moving every vertex by `offset` if any.
pub fn fill_polygon(
    sink: &mut dyn BufferSink,
    vertices: &[Point],
    triangles: &[TriangleIndex],
    offset: Option<Vector>,
    color: Color,
) -> u32 {
    let offset = offset.unwrap_or_else(Vector::zero);
    fill_polygon_with(sink, vertices, triangles, color, |p| p + offset)
}

/// Copies a triangulated polygon rotated by `angle` radians around the origin, then moved
/// by `offset`.
pub fn fill_polygon_transformed(
    sink: &mut dyn BufferSink,
    vertices: &[Point],
    triangles: &[TriangleIndex],
    angle: f32,
    offset: Vector,
    color: Color,
) -> u32 {
    let (s, c) = angle.sin_cos();
    fill_polygon_with(sink, vertices, triangles, color, |p| {
        point(
            p.x * c - p.y * s + offset.x,
            p.x * s + p.y * c + offset.y,
        )
    })
}

fn fill_polygon_with(
    sink: &mut dyn BufferSink,
    vertices: &[Point],
    triangles: &[TriangleIndex],
    color: Color,
    transform: impl Fn(Point) -> Point,
) -> u32 {
    if !check_triangles(vertices.len(), triangles) {
        return 0;
    }

    let view = match allocate(sink, vertices.len() as u32, triangles.len() as u32 * 3) {
        Some(view) => view,
        None => return 0,
    };

    for (vertex, p) in view.vertices.iter_mut().zip(vertices) {
        *vertex = Vertex2D::new(transform(*p), color);
    }

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    for t in triangles {
        indices.triangle(t.i0 as u32, t.i1 as u32, t.i2 as u32);
    }

    indices.finish()
}

/// Copies vertices made by the caller, for example a textured mesh.
pub fn fill_vertices(
    sink: &mut dyn BufferSink,
    vertices: &[Vertex2D],
    triangles: &[TriangleIndex],
) -> u32 {
    if !check_triangles(vertices.len(), triangles) {
        return 0;
    }

    let view = match allocate(sink, vertices.len() as u32, triangles.len() as u32 * 3) {
        Some(view) => view,
        None => return 0,
    };

    view.vertices.copy_from_slice(vertices);

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    for t in triangles {
        indices.triangle(t.i0 as u32, t.i1 as u32, t.i2 as u32);
    }

    indices.finish()
}

/// Copies all the vertices of a sprite and `index_count` of its indices starting at
/// `start_index`.
///
/// The range is clamped to the indices of the sprite and shortened to whole triangles.
pub fn fill_sprite(
    sink: &mut dyn BufferSink,
    sprite: &Sprite,
    start_index: usize,
    index_count: usize,
) -> u32 {
    let available = sprite.indices.len().saturating_sub(start_index);
    let index_count = index_count.min(available);
    let index_count = index_count - index_count % 3;

    if sprite.vertices.is_empty() || index_count == 0 {
        log::trace!("fill_sprite: nothing to draw from index {}", start_index);
        return 0;
    }

    let range = &sprite.indices[start_index..start_index + index_count];
    let vertex_count = sprite.vertices.len();
    if range.iter().any(|&i| i as usize >= vertex_count) {
        log::trace!("fill_sprite: index out of {} vertices", vertex_count);
        return 0;
    }

    let view = match allocate(sink, vertex_count as u32, index_count as u32) {
        Some(view) => view,
        None => return 0,
    };

    view.vertices.copy_from_slice(&sprite.vertices);

    let mut indices = IndexWriter::new(view.indices, view.base_index);
    indices.extend(range);

    indices.finish()
}

#[cfg(test)]
use crate::VertexBuffers;

#[cfg(test)]
fn square() -> (Vec<Point>, Vec<TriangleIndex>) {
    (
        vec![
            point(0.0, 0.0),
            point(1.0, 0.0),
            point(1.0, 1.0),
            point(0.0, 1.0),
        ],
        vec![TriangleIndex::new(0, 1, 2), TriangleIndex::new(0, 2, 3)],
    )
}

#[test]
fn polygon_indices_are_shifted() {
    let (points, triangles) = square();
    let mut buffers = VertexBuffers::new();

    crate::fill_triangle(
        &mut buffers,
        &crate::geom::Triangle::new(point(0.0, 0.0), point(1.0, 0.0), point(0.0, 1.0)),
        Color::WHITE,
    );
    let count = fill_polygon(
        &mut buffers,
        &points,
        &triangles,
        Some(vector(10.0, 0.0)),
        Color::BLACK,
    );

    assert_eq!(count, 6);
    assert_eq!(&buffers.indices[3..], &[3, 4, 5, 3, 5, 6]);
    assert_eq!(buffers.vertices[5].position(), point(11.0, 1.0));
    assert_eq!(buffers.vertices[5].color(), Color::BLACK);
}

#[test]
fn polygon_transformed() {
    let (points, triangles) = square();
    let mut buffers = VertexBuffers::new();

    let count = fill_polygon_transformed(
        &mut buffers,
        &points,
        &triangles,
        std::f32::consts::FRAC_PI_2,
        vector(5.0, 5.0),
        Color::WHITE,
    );

    assert_eq!(count, 6);
    let p = buffers.vertices[1].position();
    assert!((p - point(5.0, 6.0)).length() < 1e-5, "{:?}", p);
    let p = buffers.vertices[3].position();
    assert!((p - point(4.0, 5.0)).length() < 1e-5, "{:?}", p);
}

#[test]
fn invalid_polygons() {
    let (points, _) = square();
    let mut sink = crate::NoOutput::new();

    assert_eq!(fill_polygon(&mut sink, &points, &[], None, Color::WHITE), 0);
    assert_eq!(
        fill_polygon(&mut sink, &[], &[TriangleIndex::new(0, 0, 0)], None, Color::WHITE),
        0
    );
    assert_eq!(
        fill_polygon(&mut sink, &points, &[TriangleIndex::new(0, 1, 4)], None, Color::WHITE),
        0
    );
    assert_eq!(sink.requests, 0);
}

#[test]
fn mesh_vertices_are_copied() {
    let vertices = [
        Vertex2D::with_tex(point(0.0, 0.0), point(0.0, 0.0), Color::WHITE),
        Vertex2D::with_tex(point(4.0, 0.0), point(1.0, 0.0), Color::WHITE),
        Vertex2D::with_tex(point(0.0, 4.0), point(0.0, 1.0), Color::WHITE),
    ];
    let mut buffers = VertexBuffers::new();

    assert_eq!(fill_vertices(&mut buffers, &vertices, &[TriangleIndex::new(2, 1, 0)]), 3);
    assert_eq!(&buffers.vertices[..], &vertices[..]);
    assert_eq!(buffers.indices, vec![2, 1, 0]);
}

#[test]
fn sprite_ranges() {
    let mut sprite = Sprite::new();
    for i in 0..4 {
        let p = point((i % 2) as f32, (i / 2) as f32);
        sprite.vertices.push(Vertex2D::with_tex(p, p, Color::WHITE));
    }
    sprite.indices.extend_from_slice(&[0, 1, 2, 2, 1, 3]);

    let mut buffers = VertexBuffers::new();
    assert_eq!(fill_sprite(&mut buffers, &sprite, 0, 6), 6);
    assert_eq!(buffers.vertices.len(), 4);

    // Clamped to the end of the index list, then to whole triangles.
    buffers.clear();
    assert_eq!(fill_sprite(&mut buffers, &sprite, 2, 100), 3);
    assert_eq!(buffers.indices, vec![2, 2, 1]);

    buffers.clear();
    assert_eq!(fill_sprite(&mut buffers, &sprite, 0, 5), 3);
    assert_eq!(fill_sprite(&mut buffers, &sprite, 6, 3), 0);
    assert_eq!(fill_sprite(&mut buffers, &sprite, 4, 2), 0);
}
