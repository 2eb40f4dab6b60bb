use crate::math::{point, Box2D, Point, Size};

/// An axis-aligned rectangle stored as its four edges.
///
/// `left <= right` and `top <= bottom` for well-formed rectangles (y grows downwards).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct FloatRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl FloatRect {
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        FloatRect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a rectangle from its top-left corner and its size.
    #[inline]
    pub fn from_origin_and_size(origin: Point, size: Size) -> Self {
        FloatRect {
            left: origin.x,
            top: origin.y,
            right: origin.x + size.width,
            bottom: origin.y + size.height,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        point(self.left, self.top)
    }

    #[inline]
    pub fn top_right(&self) -> Point {
        point(self.right, self.top)
    }

    #[inline]
    pub fn bottom_left(&self) -> Point {
        point(self.left, self.bottom)
    }

    #[inline]
    pub fn bottom_right(&self) -> Point {
        point(self.right, self.bottom)
    }

    #[inline]
    pub fn center(&self) -> Point {
        point(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    /// Returns this rectangle grown by `amount` on each side.
    #[inline]
    pub fn inflate(&self, amount: f32) -> Self {
        FloatRect {
            left: self.left - amount,
            top: self.top - amount,
            right: self.right + amount,
            bottom: self.bottom + amount,
        }
    }

    #[inline]
    pub fn to_box2d(&self) -> Box2D {
        Box2D {
            min: self.top_left(),
            max: self.bottom_right(),
        }
    }
}

impl From<Box2D> for FloatRect {
    fn from(b: Box2D) -> Self {
        FloatRect::new(b.min.x, b.min.y, b.max.x, b.max.y)
    }
}

#[test]
fn rect_accessors() {
    let r = FloatRect::from_origin_and_size(point(1.0, 2.0), Size::new(10.0, 20.0));
    assert_eq!(r, FloatRect::new(1.0, 2.0, 11.0, 22.0));
    assert_eq!(r.width(), 10.0);
    assert_eq!(r.height(), 20.0);
    assert_eq!(r.size(), Size::new(10.0, 20.0));
    assert_eq!(r.center(), point(6.0, 12.0));
    assert_eq!(r.inflate(1.0), FloatRect::new(0.0, 1.0, 12.0, 23.0));
    assert_eq!(FloatRect::from(r.to_box2d()), r);
}
