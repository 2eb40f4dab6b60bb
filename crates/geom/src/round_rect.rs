use crate::FloatRect;

/// A rectangle with circular corners of radius `r`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct RoundRect {
    pub rect: FloatRect,
    pub r: f32,
}

impl RoundRect {
    #[inline]
    pub const fn new(rect: FloatRect, r: f32) -> Self {
        RoundRect { rect, r }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.rect.width()
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.rect.height()
    }

    /// The corner radius, clamped so that two corners never overlap and never negative.
    #[inline]
    pub fn clamped_radius(&self) -> f32 {
        (self.width() * 0.5)
            .min(self.height() * 0.5)
            .min(self.r.max(0.0))
    }
}

#[test]
fn clamped_radius() {
    let rect = FloatRect::new(0.0, 0.0, 40.0, 10.0);
    assert_eq!(RoundRect::new(rect, 3.0).clamped_radius(), 3.0);
    assert_eq!(RoundRect::new(rect, 30.0).clamped_radius(), 5.0);
    assert_eq!(RoundRect::new(rect, -1.0).clamped_radius(), 0.0);
}
