use crate::math::Point;
use crate::FloatRect;

/// A quadrilateral defined by four corners in clockwise order.
///
/// For an axis-aligned quad the corners are top-left, top-right, bottom-right
/// and bottom-left.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct FloatQuad {
    pub points: [Point; 4],
}

impl FloatQuad {
    #[inline]
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        FloatQuad {
            points: [p0, p1, p2, p3],
        }
    }
}

impl From<FloatRect> for FloatQuad {
    fn from(rect: FloatRect) -> Self {
        FloatQuad::new(
            rect.top_left(),
            rect.top_right(),
            rect.bottom_right(),
            rect.bottom_left(),
        )
    }
}
