//! Tools to help with writing the output of the builders into memory.
//!
//! ## Overview
//!
//! Builders don't own any vertex or index storage. Once they know how much geometry they
//! are about to produce, they ask a [`BufferSink`] for a [`BufferView`]: two mutable slices of
//! exactly the requested lengths plus the index of the first vertex of the view. The builder
//! then fills both slices entirely.
//!
//! This crate provides three sinks:
//!
//! - [`VertexBuffers`] appends to growable `Vec`s, optionally with capacity limits.
//! - [`FixedBuffers`] writes into slices provided by the caller, for example mapped GPU memory.
//! - [`NoOutput`] refuses every request, and counts them.
//!
//! Implementing `BufferSink` makes it possible to write directly into any other storage.
//!
//! ## Examples
//!
//! ```
//! use tessera_tessellation::{fill_triangle, FixedBuffers, Vertex2D};
//! use tessera_tessellation::geom::{Color, Triangle};
//! use tessera_tessellation::math::point;
//!
//! let mut vertices = [Vertex2D::default(); 8];
//! let mut indices = [0u16; 8];
//! let mut sink = FixedBuffers::new(&mut vertices, &mut indices);
//!
//! let tri = Triangle::new(point(0.0, 0.0), point(1.0, 0.0), point(0.0, 1.0));
//! assert_eq!(fill_triangle(&mut sink, &tri, Color::WHITE), 3);
//! assert_eq!(fill_triangle(&mut sink, &tri, Color::WHITE), 3);
//! // Only two vertices and two indices left.
//! assert_eq!(fill_triangle(&mut sink, &tri, Color::WHITE), 0);
//!
//! assert_eq!(sink.vertex_count(), 6);
//! assert_eq!(&indices[..6], &[0, 1, 2, 3, 4, 5]);
//! ```

use crate::error::GeometryBuilderError;
use crate::vertex::Vertex2D;
use crate::{Index, MAX_VERTICES};

/// Slices of a vertex and an index buffer handed out to a builder.
///
/// `vertices` and `indices` have exactly the lengths that were requested. Indices written
/// by the builder are relative to the whole buffer, which is why the index of the first vertex
/// of the view is provided.
pub struct BufferView<'l> {
    pub vertices: &'l mut [Vertex2D],
    pub indices: &'l mut [Index],
    pub base_index: Index,
}

/// Provides memory to the builders.
pub trait BufferSink {
    /// Reserves `vertex_count` vertices and `index_count` indices.
    ///
    /// On success the returned slices have exactly the requested lengths and the caller is
    /// expected to write all of them.
    fn request(
        &mut self,
        vertex_count: u32,
        index_count: u32,
    ) -> Result<BufferView<'_>, GeometryBuilderError>;
}

impl<T: BufferSink + ?Sized> BufferSink for &mut T {
    fn request(
        &mut self,
        vertex_count: u32,
        index_count: u32,
    ) -> Result<BufferView<'_>, GeometryBuilderError> {
        (**self).request(vertex_count, index_count)
    }
}

fn check_vertex_range(base: usize, vertex_count: u32) -> Result<(), GeometryBuilderError> {
    let end = base as u64 + vertex_count as u64;
    if end > MAX_VERTICES as u64 {
        return Err(GeometryBuilderError::TooManyVertices(
            end.min(u32::MAX as u64) as u32,
        ));
    }

    Ok(())
}

/// Growable vertex and index buffers.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct VertexBuffers {
    pub vertices: Vec<Vertex2D>,
    pub indices: Vec<Index>,
    max_vertices: usize,
    max_indices: usize,
}

impl VertexBuffers {
    /// Constructor
    pub fn new() -> Self {
        VertexBuffers::with_capacity(512, 1024)
    }

    /// Constructor
    pub fn with_capacity(num_vertices: usize, num_indices: usize) -> Self {
        VertexBuffers {
            vertices: Vec::with_capacity(num_vertices),
            indices: Vec::with_capacity(num_indices),
            max_vertices: usize::MAX,
            max_indices: usize::MAX,
        }
    }

    /// Buffers that refuse to grow past the given sizes.
    pub fn with_limits(max_vertices: usize, max_indices: usize) -> Self {
        VertexBuffers {
            vertices: Vec::new(),
            indices: Vec::new(),
            max_vertices,
            max_indices,
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl Default for VertexBuffers {
    fn default() -> Self {
        VertexBuffers::new()
    }
}

impl BufferSink for VertexBuffers {
    fn request(
        &mut self,
        vertex_count: u32,
        index_count: u32,
    ) -> Result<BufferView<'_>, GeometryBuilderError> {
        let vertex_base = self.vertices.len();
        let index_base = self.indices.len();
        check_vertex_range(vertex_base, vertex_count)?;

        let vertex_end = vertex_base + vertex_count as usize;
        let index_end = index_base + index_count as usize;
        if vertex_end > self.max_vertices || index_end > self.max_indices {
            return Err(GeometryBuilderError::Exhausted {
                vertices: vertex_count,
                indices: index_count,
            });
        }

        self.vertices.resize(vertex_end, Vertex2D::default());
        self.indices.resize(index_end, 0);

        Ok(BufferView {
            vertices: &mut self.vertices[vertex_base..],
            indices: &mut self.indices[index_base..],
            base_index: vertex_base as Index,
        })
    }
}

/// A sink writing into caller-provided slices.
///
/// Consecutive requests are packed one after the other.
pub struct FixedBuffers<'l> {
    vertices: &'l mut [Vertex2D],
    indices: &'l mut [Index],
    vertex_count: usize,
    index_count: usize,
}

impl<'l> FixedBuffers<'l> {
    pub fn new(vertices: &'l mut [Vertex2D], indices: &'l mut [Index]) -> Self {
        FixedBuffers {
            vertices,
            indices,
            vertex_count: 0,
            index_count: 0,
        }
    }

    /// Number of vertices written so far.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of indices written so far.
    pub fn index_count(&self) -> usize {
        self.index_count
    }

    /// Start writing from the beginning of the slices again.
    pub fn reset(&mut self) {
        self.vertex_count = 0;
        self.index_count = 0;
    }
}

impl<'l> BufferSink for FixedBuffers<'l> {
    fn request(
        &mut self,
        vertex_count: u32,
        index_count: u32,
    ) -> Result<BufferView<'_>, GeometryBuilderError> {
        check_vertex_range(self.vertex_count, vertex_count)?;

        let vertex_end = self.vertex_count + vertex_count as usize;
        let index_end = self.index_count + index_count as usize;
        if vertex_end > self.vertices.len() || index_end > self.indices.len() {
            return Err(GeometryBuilderError::Exhausted {
                vertices: vertex_count,
                indices: index_count,
            });
        }

        let base_index = self.vertex_count as Index;
        let vertices = &mut self.vertices[self.vertex_count..vertex_end];
        let indices = &mut self.indices[self.index_count..index_end];
        self.vertex_count = vertex_end;
        self.index_count = index_end;

        Ok(BufferView {
            vertices,
            indices,
            base_index,
        })
    }
}

/// A sink that doesn't provide any memory.
///
/// Mostly useful for testing: it counts the requests it receives, which makes it possible to
/// check that degenerate inputs are rejected before asking for memory.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoOutput {
    pub requests: u32,
}

impl NoOutput {
    pub fn new() -> Self {
        NoOutput { requests: 0 }
    }
}

impl BufferSink for NoOutput {
    fn request(
        &mut self,
        vertex_count: u32,
        index_count: u32,
    ) -> Result<BufferView<'_>, GeometryBuilderError> {
        self.requests += 1;
        Err(GeometryBuilderError::Exhausted {
            vertices: vertex_count,
            indices: index_count,
        })
    }
}

/// Asks the sink for memory, logging the failure if any.
pub(crate) fn allocate<'l>(
    sink: &'l mut dyn BufferSink,
    vertex_count: u32,
    index_count: u32,
) -> Option<BufferView<'l>> {
    match sink.request(vertex_count, index_count) {
        Ok(view) => {
            debug_assert_eq!(view.vertices.len(), vertex_count as usize);
            debug_assert_eq!(view.indices.len(), index_count as usize);
            Some(view)
        }
        Err(e) => {
            log::debug!(
                "{} (vertices: {}, indices: {})",
                e,
                vertex_count,
                index_count
            );
            None
        }
    }
}

/// Two triangles over four vertices, in the order every quad-based builder uses.
pub(crate) const RECT_INDICES: [Index; 6] = [0, 1, 2, 2, 1, 3];

/// Writes indices relative to the first vertex of a view.
pub(crate) struct IndexWriter<'l> {
    indices: &'l mut [Index],
    base: Index,
    len: usize,
}

impl<'l> IndexWriter<'l> {
    #[inline]
    pub fn new(indices: &'l mut [Index], base: Index) -> Self {
        IndexWriter {
            indices,
            base,
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, local: u32) {
        self.indices[self.len] = self.base + local as Index;
        self.len += 1;
    }

    #[inline]
    pub fn triangle(&mut self, a: u32, b: u32, c: u32) {
        self.push(a);
        self.push(b);
        self.push(c);
    }

    /// The two triangles of `RECT_INDICES`, shifted by `first`.
    #[inline]
    pub fn quad(&mut self, first: u32) {
        for &i in &RECT_INDICES {
            self.push(first + i as u32);
        }
    }

    /// Two triangles `(a, b, c)` and `(c, b, d)`.
    #[inline]
    pub fn quad_of(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.triangle(a, b, c);
        self.triangle(c, b, d);
    }

    pub fn extend(&mut self, local: &[Index]) {
        for &i in local {
            self.push(i as u32);
        }
    }

    /// Returns the number of written indices.
    #[inline]
    pub fn finish(self) -> u32 {
        debug_assert_eq!(self.len, self.indices.len());
        self.len as u32
    }
}

#[test]
fn vertex_buffers_requests() {
    let mut buffers = VertexBuffers::new();
    {
        let view = buffers.request(3, 3).unwrap();
        assert_eq!(view.vertices.len(), 3);
        assert_eq!(view.indices.len(), 3);
        assert_eq!(view.base_index, 0);
    }
    {
        let view = buffers.request(4, 6).unwrap();
        assert_eq!(view.vertices.len(), 4);
        assert_eq!(view.indices.len(), 6);
        assert_eq!(view.base_index, 3);
    }
    assert_eq!(buffers.vertices.len(), 7);
    assert_eq!(buffers.indices.len(), 9);
}

#[test]
fn vertex_buffers_limits() {
    let mut buffers = VertexBuffers::with_limits(4, 6);
    assert!(buffers.request(4, 6).is_ok());
    assert_eq!(
        buffers.request(1, 3).err(),
        Some(GeometryBuilderError::Exhausted {
            vertices: 1,
            indices: 3
        })
    );
    assert_eq!(buffers.vertices.len(), 4);
}

#[test]
fn too_many_vertices() {
    let mut buffers = VertexBuffers::new();
    assert!(buffers.request(65536, 3).is_ok());
    assert_eq!(
        buffers.request(1, 3).err(),
        Some(GeometryBuilderError::TooManyVertices(65537))
    );

    let mut buffers = VertexBuffers::new();
    assert!(buffers.request(70000, 3).is_err());
    assert!(buffers.vertices.is_empty());
}

#[test]
fn fixed_buffers_packing() {
    let mut vertices = [Vertex2D::default(); 10];
    let mut indices = [0; 12];
    let mut sink = FixedBuffers::new(&mut vertices, &mut indices);

    assert_eq!(sink.request(4, 6).unwrap().base_index, 0);
    assert_eq!(sink.request(4, 6).unwrap().base_index, 4);
    assert!(sink.request(2, 1).is_err());
    assert_eq!(sink.vertex_count(), 8);
    assert_eq!(sink.index_count(), 12);

    sink.reset();
    assert_eq!(sink.request(10, 12).unwrap().vertices.len(), 10);
}

#[test]
fn index_writer() {
    let mut indices = [0; 9];
    let mut writer = IndexWriter::new(&mut indices, 10);
    writer.quad(2);
    writer.triangle(0, 1, 2);
    assert_eq!(writer.finish(), 9);
    assert_eq!(indices, [12, 13, 14, 14, 13, 15, 10, 11, 12]);
}
