#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]

//! Plain 2D shape descriptors on top of euclid.
//!
//! This crate is reexported in [tessera](https://docs.rs/tessera/).
//!
//! # Overview.
//!
//! The types in this crate describe the inputs of the tessera tessellators:
//!
//! - axis-aligned rectangles ([`FloatRect`]) and rounded rectangles ([`RoundRect`]),
//! - arbitrary quadrilaterals ([`FloatQuad`]) and triangles ([`Triangle`]),
//! - circles and ellipses ([`Circle`], [`Ellipse`]),
//! - sequences of points forming open or closed line strings ([`Polyline`]),
//! - RGBA colors with floating point channels ([`Color`]).
//!
//! They are immutable value types: the tessellators read them and never keep them around.
//!
//! # Coordinate system
//!
//! All shapes live in a y-down screen space. Angles are in radians, measured clockwise
//! starting from the up direction `(0, -1)`.

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

// Reexport dependencies.
pub use euclid;

mod circle;
mod color;
mod polyline;
mod quad;
mod rect;
mod round_rect;
mod triangle;

#[doc(inline)]
pub use crate::circle::{Circle, Ellipse};
#[doc(inline)]
pub use crate::color::Color;
#[doc(inline)]
pub use crate::polyline::Polyline;
#[doc(inline)]
pub use crate::quad::FloatQuad;
#[doc(inline)]
pub use crate::rect::FloatRect;
#[doc(inline)]
pub use crate::round_rect::RoundRect;
#[doc(inline)]
pub use crate::triangle::Triangle;

pub mod math {
    //! f32 version of the euclid types used everywhere. The other tessera crates
    //! reexport them.

    use crate::euclid;

    /// Alias for ```euclid::default::Point2D<f32>```.
    pub type Point = euclid::default::Point2D<f32>;

    /// Alias for ```euclid::default::Vector2D<f32>```.
    pub type Vector = euclid::default::Vector2D<f32>;

    /// Alias for ```euclid::default::Size2D<f32>```.
    pub type Size = euclid::default::Size2D<f32>;

    /// Alias for ```euclid::default::Box2D<f32>```
    pub type Box2D = euclid::default::Box2D<f32>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f32, y: f32) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `Size::new(x, y)`.
    #[inline]
    pub fn size(w: f32, h: f32) -> Size {
        Size::new(w, h)
    }
}
