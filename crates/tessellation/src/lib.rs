#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]
#![allow(clippy::too_many_arguments)]

//! Tessellation of basic 2D shapes into vertex and index buffers.
//!
//! This crate is reexported in [tessera](https://docs.rs/tessera/).
//!
//! ## Overview
//!
//! The functions of this crate turn simple shape descriptions (rectangles, circles, arcs,
//! rounded rectangles, line strings, polygons, shadows, particles) into triangles, written
//! directly into memory owned by the caller.
//!
//! Every builder follows the same steps:
//!
//! 1. Reject degenerate input (zero thickness, zero angle, too few points, ...).
//! 2. Compute the exact number of vertices and indices it is going to produce. For curved
//!    shapes this depends on the on-screen size of the shape (see the [`quality`] module).
//! 3. Ask the [`BufferSink`] for a [`BufferView`] of exactly that size.
//! 4. Write the vertices and the indices, and return the number of indices written.
//!
//! A return value of `0` means "nothing to draw": either the input was degenerate or the
//! sink could not provide the memory. In both cases nothing was written.
//!
//! ## Level of detail
//!
//! Builders that approximate curves take a `scale` parameter: the scale factor of the
//! transform the geometry is going to be rendered with. It is only used to pick the number of
//! segments and never modifies the coordinates.
//!
//! ## Examples
//!
//! ```
//! use tessera_tessellation::{fill_circle, fill_rect, VertexBuffers};
//! use tessera_tessellation::geom::{Circle, Color, FloatRect};
//! use tessera_tessellation::math::point;
//!
//! let mut buffers = VertexBuffers::new();
//!
//! let count = fill_rect(&mut buffers, &FloatRect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
//! assert_eq!(count, 6);
//!
//! let circle = Circle::new(point(20.0, 20.0), 5.0);
//! let count = fill_circle(&mut buffers, &circle, Color::WHITE, Color::WHITE, 1.0);
//! assert_eq!(count, 48);
//!
//! assert_eq!(buffers.vertices.len(), 4 + 17);
//! ```

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub use tessera_geom as geom;
pub use tessera_geom::math;

mod basic_shapes;
mod error;
pub mod geometry_builder;
pub mod math_utils;
mod polygon;
mod polyline;
pub mod quality;
mod shadow;
mod stroke;
mod textured;
mod vertex;

#[cfg(test)]
mod shape_tests;

#[doc(inline)]
pub use crate::basic_shapes::*;

#[doc(inline)]
pub use crate::polygon::*;

#[doc(inline)]
pub use crate::polyline::*;

#[doc(inline)]
pub use crate::shadow::*;

#[doc(inline)]
pub use crate::stroke::*;

#[doc(inline)]
pub use crate::textured::*;

#[doc(inline)]
pub use crate::error::*;

#[doc(inline)]
pub use crate::geometry_builder::{BufferSink, BufferView, FixedBuffers, NoOutput, VertexBuffers};

#[doc(inline)]
pub use crate::vertex::Vertex2D;

use crate::math::Vector;

/// The index type of the generated triangles.
///
/// A single batch of geometry can't address more than `u16::MAX + 1` vertices.
pub type Index = u16;

/// Maximum number of vertices a batch can address with [`Index`].
pub const MAX_VERTICES: u32 = Index::MAX as u32 + 1;

/// Line strings and polygon frames with more points than this are rejected.
pub const MAX_POLYLINE_POINTS: usize = 32760;

/// Three indices into a vertex list forming a triangle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct TriangleIndex {
    pub i0: Index,
    pub i1: Index,
    pub i2: Index,
}

impl TriangleIndex {
    #[inline]
    pub const fn new(i0: Index, i1: Index, i2: Index) -> Self {
        TriangleIndex { i0, i1, i2 }
    }

    #[inline]
    pub fn max(&self) -> Index {
        self.i0.max(self.i1).max(self.i2)
    }
}

/// How the extremities of a stroke look, and whether it is dotted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum LineCap {
    /// The stroke extends half a thickness past each endpoint.
    Square,
    /// The stroke stops exactly at the endpoints.
    Flat,
    /// Half discs are added at each endpoint.
    Round,
    /// Dashes encoded in the texture coordinates, rendered as squares by the shader.
    SquareDot,
    /// Dots encoded in the texture coordinates, rendered as discs by the shader.
    RoundDot,
}

/// The cap and dot policy of a stroke.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineStyle {
    pub cap: LineCap,

    /// Phase of the dot pattern along the stroke, in the same unit as the coordinates.
    pub dot_offset: f32,

    /// Stretch round dots so that both extremities of a segment land on a dot.
    ///
    /// Only used with `LineCap::RoundDot`.
    pub aligned_dot: bool,
}

impl LineStyle {
    pub const SQUARE_CAP: Self = LineStyle::new(LineCap::Square);
    pub const FLAT: Self = LineStyle::new(LineCap::Flat);
    pub const ROUND_CAP: Self = LineStyle::new(LineCap::Round);
    pub const SQUARE_DOT: Self = LineStyle::new(LineCap::SquareDot);
    pub const ROUND_DOT: Self = LineStyle::new(LineCap::RoundDot);

    #[inline]
    pub const fn new(cap: LineCap) -> Self {
        LineStyle {
            cap,
            dot_offset: 0.0,
            aligned_dot: true,
        }
    }

    /// Sets the dot phase. An explicit phase disables dot alignment.
    #[inline]
    pub const fn with_dot_offset(mut self, offset: f32) -> Self {
        self.dot_offset = offset;
        self.aligned_dot = false;
        self
    }

    #[inline]
    pub fn is_dotted(&self) -> bool {
        matches!(self.cap, LineCap::SquareDot | LineCap::RoundDot)
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle::SQUARE_CAP
    }
}

/// Parameters for the stroke and line string builders.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct StrokeOptions {
    /// Width of the stroke.
    ///
    /// Default value: `StrokeOptions::DEFAULT_THICKNESS`.
    pub thickness: f32,

    /// Cap and dot policy.
    ///
    /// Default value: `LineStyle::SQUARE_CAP`.
    pub style: LineStyle,

    /// Scale factor of the current transform, used for level of detail and to derive
    /// the point coincidence threshold.
    ///
    /// Default value: `1.0`.
    pub scale: f32,

    /// Disables the insertion of bevel points at sharp corners.
    ///
    /// Default value: `false`.
    pub inner: bool,

    /// Translation applied to every generated vertex.
    ///
    /// Default value: `None`.
    pub offset: Option<Vector>,

    /// Corners where the dot product of the two unit edge directions (both pointing away from
    /// the corner) exceeds this value get an extra bevel point.
    ///
    /// Default value: `StrokeOptions::DEFAULT_BEVEL_THRESHOLD`.
    pub bevel_threshold: f32,

    /// Distance under which two points are considered coincident, before dividing by `scale`.
    /// Also the distance of bevel points from their corner.
    ///
    /// Default value: `StrokeOptions::DEFAULT_JOIN_EPSILON`.
    pub join_epsilon: f32,
}

impl StrokeOptions {
    pub const DEFAULT_THICKNESS: f32 = 1.0;
    pub const DEFAULT_BEVEL_THRESHOLD: f32 = 0.55;
    pub const DEFAULT_JOIN_EPSILON: f32 = 0.01;

    pub const DEFAULT: Self = StrokeOptions {
        thickness: Self::DEFAULT_THICKNESS,
        style: LineStyle::SQUARE_CAP,
        scale: 1.0,
        inner: false,
        offset: None,
        bevel_threshold: Self::DEFAULT_BEVEL_THRESHOLD,
        join_epsilon: Self::DEFAULT_JOIN_EPSILON,
    };

    #[inline]
    pub fn thickness(thickness: f32) -> Self {
        Self::DEFAULT.with_thickness(thickness)
    }

    #[inline]
    pub const fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    #[inline]
    pub const fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub const fn with_line_cap(mut self, cap: LineCap) -> Self {
        self.style.cap = cap;
        self
    }

    #[inline]
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    #[inline]
    pub const fn with_inner(mut self, inner: bool) -> Self {
        self.inner = inner;
        self
    }

    #[inline]
    pub const fn with_offset(mut self, offset: Vector) -> Self {
        self.offset = Some(offset);
        self
    }

    #[inline]
    pub const fn with_bevel_threshold(mut self, threshold: f32) -> Self {
        self.bevel_threshold = threshold;
        self
    }

    #[inline]
    pub const fn with_join_epsilon(mut self, epsilon: f32) -> Self {
        self.join_epsilon = epsilon;
        self
    }

    /// The coincidence threshold in the coordinate space of the points.
    #[inline]
    pub fn epsilon(&self) -> f32 {
        self.join_epsilon / self.scale
    }
}

impl Default for StrokeOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parameters for the shadow builders.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct ShadowOptions {
    /// Width of the blurred band, centered on the edge of the shape.
    ///
    /// Default value: `ShadowOptions::DEFAULT_BLUR`.
    pub blur: f32,

    /// Whether the interior of the shadow is generated. When `false` only the blurred band
    /// around the edge is produced.
    ///
    /// Default value: `true`.
    pub fill: bool,

    /// Scale factor of the current transform, for level of detail.
    ///
    /// Default value: `1.0`.
    pub scale: f32,
}

impl ShadowOptions {
    pub const DEFAULT_BLUR: f32 = 8.0;

    pub const DEFAULT: Self = ShadowOptions {
        blur: Self::DEFAULT_BLUR,
        fill: true,
        scale: 1.0,
    };

    #[inline]
    pub fn blur(blur: f32) -> Self {
        Self::DEFAULT.with_blur(blur)
    }

    #[inline]
    pub const fn with_blur(mut self, blur: f32) -> Self {
        self.blur = blur;
        self
    }

    #[inline]
    pub const fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    #[inline]
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for ShadowOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn options_builders() {
    let options = StrokeOptions::thickness(4.0)
        .with_line_cap(LineCap::Round)
        .with_scale(2.0)
        .with_inner(true);

    assert_eq!(options.thickness, 4.0);
    assert_eq!(options.style.cap, LineCap::Round);
    assert!(options.inner);
    assert_eq!(options.epsilon(), 0.005);
    assert_eq!(options.bevel_threshold, 0.55);

    let style = LineStyle::ROUND_DOT.with_dot_offset(3.0);
    assert!(style.is_dotted());
    assert!(!style.aligned_dot);
    assert!(LineStyle::ROUND_DOT.aligned_dot);

    assert!(ShadowOptions::default().fill);
    assert!(!ShadowOptions::blur(2.0).with_fill(false).fill);
}
