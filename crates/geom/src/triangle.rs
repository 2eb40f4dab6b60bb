use crate::math::Point;

/// A 2D triangle defined by three points `a`, `b` and `c`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    #[inline]
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Triangle { a, b, c }
    }

    #[inline]
    pub fn points(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Twice the signed area. Positive when the points are clockwise on screen (y-down).
    #[inline]
    pub fn signed_area2(&self) -> f32 {
        (self.b - self.a).cross(self.c - self.a)
    }
}

#[test]
fn triangle_area() {
    use crate::math::point;

    let t = Triangle::new(point(0.0, 0.0), point(1.0, 0.0), point(0.0, 1.0));
    assert_eq!(t.signed_area2(), 1.0);
    let t = Triangle::new(point(0.0, 0.0), point(0.0, 1.0), point(1.0, 0.0));
    assert_eq!(t.signed_area2(), -1.0);
}
