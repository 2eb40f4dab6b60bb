//! Specific point sequence type for line strings.

use crate::math::Point;

/// A view over a sequence of points forming a line string.
///
/// When `closed` is true, the last point is implicitly connected back to the first one.
///
/// ## Example
///
/// ```
/// use tessera_geom::Polyline;
/// use tessera_geom::math::point;
///
/// let ring = Polyline {
///     points: &[
///         point(0.0, 0.0),
///         point(10.0, 10.0),
///         point(0.0, 10.0),
///     ],
///     closed: true,
/// };
///
/// assert_eq!(ring.len(), 3);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Polyline<'l> {
    pub points: &'l [Point],
    pub closed: bool,
}

impl<'l> Polyline<'l> {
    #[inline]
    pub fn open(points: &'l [Point]) -> Self {
        Polyline {
            points,
            closed: false,
        }
    }

    #[inline]
    pub fn closed(points: &'l [Point]) -> Self {
        Polyline {
            points,
            closed: true,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
