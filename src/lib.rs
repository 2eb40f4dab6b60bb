#![deny(bare_trait_objects)]

//! Tessellation of basic 2D shapes into vertex and index buffers ready for the GPU.
//!
//! # Crates
//!
//! This meta-crate (`tessera`) reexports the following sub-crates for convenience:
//!
//! * **tessera_tessellation** - The shape builders, the buffer sinks and the level of detail
//!   heuristics.
//! * **tessera_geom** - The shape descriptors (rectangles, circles, line strings, colors)
//!   and the euclid aliases used everywhere.
//!
//! Each `tessera_<name>` crate is reexported as a `<name>` module in `tessera`. For example:
//!
//! ```ignore
//! extern crate tessera_tessellation;
//! use tessera_tessellation::fill_rect;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate tessera;
//! use tessera::tessellation::fill_rect;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ## Tessellating a rounded rectangle and its shadow
//!
//! ```
//! use tessera::geom::{Color, FloatRect, RoundRect};
//! use tessera::tessellation::{fill_round_rect, fill_round_rect_shadow};
//! use tessera::tessellation::{ShadowOptions, VertexBuffers};
//!
//! let mut geometry = VertexBuffers::new();
//! let shape = RoundRect::new(FloatRect::new(0.0, 0.0, 100.0, 50.0), 10.0);
//! let shadow_color = Color::BLACK.with_alpha(0.5);
//!
//! // Draw the shadow first so that the shape covers it.
//! fill_round_rect_shadow(&mut geometry, &shape, &ShadowOptions::blur(6.0), shadow_color);
//! fill_round_rect(&mut geometry, &shape, Color::WHITE, 1.0);
//!
//! // The tessellated geometry is ready to be uploaded to the GPU.
//! println!(
//!     " -- {} vertices {} indices",
//!     geometry.vertices.len(),
//!     geometry.indices.len()
//! );
//! ```
//!
//! ## Stroking a line string
//!
//! ```
//! use tessera::geom::{Color, Polyline};
//! use tessera::math::point;
//! use tessera::tessellation::*;
//!
//! let points = [
//!     point(0.0, 0.0),
//!     point(50.0, 10.0),
//!     point(0.0, 20.0),
//! ];
//!
//! let mut geometry = VertexBuffers::new();
//! // Can be kept around and reused for every line string.
//! let mut scratch = ScratchBuffer::new();
//! let options = StrokeOptions::thickness(4.0).with_line_cap(LineCap::Round);
//!
//! let count = stroke_line_string(
//!     &mut geometry,
//!     &mut scratch,
//!     &Polyline::open(&points),
//!     &options,
//!     Color::WHITE,
//! );
//!
//! assert!(count > 0);
//! assert_eq!(count as usize, geometry.indices.len());
//! ```
//!
//! ## Rendering the tessellated geometry
//!
//! tessera does not provide with any GPU abstraction or rendering backend.
//! [`Vertex2D`](tessellation::Vertex2D) is `Pod`, so vertex buffers can be uploaded as bytes
//! with `bytemuck::cast_slice` using any graphics API.

pub extern crate tessera_geom;
pub extern crate tessera_tessellation;

pub use tessera_geom as geom;
pub use tessera_tessellation as tessellation;

pub use geom::math;
