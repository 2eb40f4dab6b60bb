use crate::math::Point;

/// A circle defined by its center and radius.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Circle {
    pub center: Point,
    pub r: f32,
}

impl Circle {
    #[inline]
    pub const fn new(center: Point, r: f32) -> Self {
        Circle { center, r }
    }
}

/// An axis-aligned ellipse defined by its center and its horizontal (`a`)
/// and vertical (`b`) semi-axes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Ellipse {
    pub center: Point,
    pub a: f32,
    pub b: f32,
}

impl Ellipse {
    #[inline]
    pub const fn new(center: Point, a: f32, b: f32) -> Self {
        Ellipse { center, a, b }
    }

    /// The largest of the two semi-axes.
    #[inline]
    pub fn major_axis(&self) -> f32 {
        self.a.abs().max(self.b.abs())
    }
}

impl From<Circle> for Ellipse {
    fn from(c: Circle) -> Self {
        Ellipse::new(c.center, c.r, c.r)
    }
}
