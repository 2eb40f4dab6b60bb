//! Level of detail.
//!
//! The number of segments used to approximate curved shapes depends on their size on screen,
//! that is the size of the shape multiplied by the scale factor of the transform it is rendered
//! with. All functions of this module take that effective size.
//!
//! Unit circle points for the most common qualities are read from a table computed once per
//! process. Higher qualities evaluate a fast polynomial approximation of sine and cosine.

use crate::math::{vector, Vector};
use crate::math_utils::fast_sin_cos;

use once_cell::sync::Lazy;

use std::f32::consts::TAU;

/// Smallest quality stored in the unit circle table.
pub const MIN_TABLE_QUALITY: u16 = 6;

/// Largest quality stored in the unit circle table.
pub const MAX_TABLE_QUALITY: u16 = 40;

/// Upper bound of [`fan_quality`].
pub const MAX_FAN_QUALITY: usize = 64;

const TABLE_LEN: usize = table_offset(MAX_TABLE_QUALITY + 1);

const fn table_offset(quality: u16) -> usize {
    let q = quality as usize;
    ((q - 6) * (q + 5)) / 2
}

// Points (cos, -sin) of every quality in MIN_TABLE_QUALITY..=MAX_TABLE_QUALITY, one after
// the other.
static UNIT_CIRCLE_TABLE: Lazy<Vec<Vector>> = Lazy::new(|| {
    let mut table = Vec::with_capacity(TABLE_LEN);
    for quality in MIN_TABLE_QUALITY..=MAX_TABLE_QUALITY {
        let step = TAU / quality as f32;
        for i in 0..quality {
            let (s, c) = (step * i as f32).sin_cos();
            table.push(vector(c, -s));
        }
    }
    debug_assert_eq!(table.len(), TABLE_LEN);

    table
});

/// The precomputed points of the unit circle for a given quality, if it is in the table.
///
/// Point `i` is at angle `2π × i / quality`, counter-clockwise on screen starting from
/// `(1, 0)`.
pub fn unit_circle_table(quality: u16) -> Option<&'static [Vector]> {
    if !(MIN_TABLE_QUALITY..=MAX_TABLE_QUALITY).contains(&quality) {
        return None;
    }

    let start = table_offset(quality);
    Some(&UNIT_CIRCLE_TABLE[start..start + quality as usize])
}

/// Iterates over `quality` evenly spaced points of the unit circle.
///
/// Uses the table when possible.
pub fn unit_circle(quality: u16) -> UnitCircle {
    UnitCircle {
        table: unit_circle_table(quality),
        step: TAU / quality as f32,
        quality,
        next: 0,
    }
}

/// See [`unit_circle`].
#[derive(Clone)]
pub struct UnitCircle {
    table: Option<&'static [Vector]>,
    step: f32,
    quality: u16,
    next: u16,
}

impl Iterator for UnitCircle {
    type Item = Vector;

    fn next(&mut self) -> Option<Vector> {
        if self.next >= self.quality {
            return None;
        }

        let i = self.next;
        self.next += 1;

        Some(match self.table {
            Some(table) => table[i as usize],
            None => {
                let (s, c) = fast_sin_cos(self.step * i as f32);
                vector(c, -s)
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.quality - self.next) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for UnitCircle {}

/// Number of rim vertices of a filled circle.
pub fn circle_quality(size: f32) -> u16 {
    let size = size.max(0.0);
    if size <= 5.0 {
        (size + 3.0) as u16 * 2
    } else {
        (18.0 + (size - 5.0) / 2.2).min(255.0) as u16
    }
}

/// Number of vertices of each ring of a circle frame.
pub fn circle_frame_quality(size: f32) -> u16 {
    let size = size.max(0.0);
    if size <= 1.0 {
        6
    } else if size <= 8.0 {
        ((2.0 * size) as u16).max(8)
    } else {
        (16.0 + (size - 8.0) / 2.2).min(255.0) as u16
    }
}

/// Number of rim vertices of a pie or an arc spanning `angle` radians.
pub fn circle_pie_quality(size: f32, angle: f32) -> u16 {
    let size = size.max(0.0);
    let rate = (angle.abs() / TAU * 2.0).min(1.0);
    let quality = if size <= 1.0 {
        4.0
    } else if size <= 6.0 {
        7.0
    } else if size <= 8.0 {
        11.0
    } else {
        (size * 0.225 + 18.0).min(255.0).floor()
    };

    (quality * rate).max(3.0) as u16
}

/// Number of points of each quarter circle of a rounded rectangle.
pub fn fan_quality(size: f32) -> u16 {
    let size = size.max(0.0);
    if size <= 1.0 {
        3
    } else if size <= 6.0 {
        5
    } else if size <= 12.0 {
        8
    } else {
        ((size * 0.2 + 6.0) as u16).min(MAX_FAN_QUALITY as u16)
    }
}

/// Number of rim vertices of ellipses and textured circles.
pub fn ellipse_quality(size: f32) -> u16 {
    (size * 0.225 + 18.0).max(6.0).min(255.0) as u16
}

#[test]
fn table_matches_fast_sin_cos() {
    for quality in MIN_TABLE_QUALITY..=MAX_TABLE_QUALITY {
        let table = unit_circle_table(quality).unwrap();
        assert_eq!(table.len(), quality as usize);
        for (i, p) in table.iter().enumerate() {
            let (s, c) = fast_sin_cos(TAU * i as f32 / quality as f32);
            assert!((p.x - c).abs() < 1e-5, "q={} i={}: {} != {}", quality, i, p.x, c);
            assert!((p.y + s).abs() < 1e-5, "q={} i={}: {} != {}", quality, i, p.y, -s);
        }
    }

    assert!(unit_circle_table(5).is_none());
    assert!(unit_circle_table(41).is_none());
    assert_eq!(UNIT_CIRCLE_TABLE.len(), 805);
}

#[test]
fn unit_circle_beyond_table() {
    let points: Vec<Vector> = unit_circle(64).collect();
    assert_eq!(points.len(), 64);
    assert!((points[0] - vector(1.0, 0.0)).length() < 1e-5);
    assert!((points[16] - vector(0.0, -1.0)).length() < 1e-5);
    assert!((points[32] - vector(-1.0, 0.0)).length() < 1e-5);
    for p in &points {
        assert!((p.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn quality_values() {
    assert_eq!(circle_quality(0.0), 6);
    assert_eq!(circle_quality(5.0), 16);
    assert_eq!(circle_quality(50.0), 38);
    assert_eq!(circle_quality(10000.0), 255);
    assert_eq!(circle_quality(-3.0), 6);

    assert_eq!(circle_frame_quality(0.5), 6);
    assert_eq!(circle_frame_quality(3.0), 8);
    assert_eq!(circle_frame_quality(7.0), 14);
    assert_eq!(circle_frame_quality(40.0), 30);

    assert_eq!(circle_pie_quality(100.0, TAU), 40);
    assert_eq!(circle_pie_quality(100.0, TAU / 4.0), 20);
    assert_eq!(circle_pie_quality(0.5, 0.01), 3);

    assert_eq!(fan_quality(0.0), 3);
    assert_eq!(fan_quality(5.0), 5);
    assert_eq!(fan_quality(10.0), 8);
    assert_eq!(fan_quality(50.0), 16);
    assert_eq!(fan_quality(1000.0), 64);

    assert_eq!(ellipse_quality(0.0), 18);
    assert_eq!(ellipse_quality(100.0), 40);
    assert_eq!(ellipse_quality(1e6), 255);
}
