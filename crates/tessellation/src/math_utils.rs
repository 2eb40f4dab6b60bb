//! Various math tools that are mostly useful for the builders.

use crate::math::*;

use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Sine and cosine of an angle in radians, using polynomial approximations.
///
/// The maximum error is in the order of `1e-7` over the whole `f32` range of
/// reasonable angles.
pub fn fast_sin_cos(angle: f32) -> (f32, f32) {
    // Map the angle to y in [-pi, pi].
    let quotient = angle * (1.0 / TAU);
    let quotient = if angle >= 0.0 {
        (quotient + 0.5) as i32 as f32
    } else {
        (quotient - 0.5) as i32 as f32
    };
    let mut y = angle - TAU * quotient;

    // Map y to [-pi/2, pi/2] with sin(y) = sin(angle).
    let sign = if y > FRAC_PI_2 {
        y = PI - y;
        -1.0
    } else if y < -FRAC_PI_2 {
        y = -PI - y;
        -1.0
    } else {
        1.0
    };

    let y2 = y * y;

    // 11-degree minimax approximation
    let sin = (((((-2.388_985_9e-8 * y2 + 2.752_556_2e-6) * y2 - 1.984_087_4e-4) * y2
        + 8.333_331e-3)
        * y2
        - 1.666_666_7e-1)
        * y2
        + 1.0)
        * y;

    // 10-degree minimax approximation
    let cos = (((((-2.605_161_5e-7 * y2 + 2.476_049_5e-5) * y2 - 1.388_837_8e-3) * y2
        + 4.166_663_8e-2)
        * y2
        - 0.5)
        * y2
        + 1.0)
        * sign;

    (sin, cos)
}

/// `v` rotated by a quarter turn, pointing to its right on screen (y axis down).
#[inline]
pub fn perp(v: Vector) -> Vector {
    vector(-v.y, v.x)
}

/// Normalizes `v`, or returns `None` if it is too short to have a direction.
#[inline]
pub fn try_normalize(v: Vector) -> Option<Vector> {
    let len = v.length();
    if len > 1e-6 {
        Some(v / len)
    } else {
        None
    }
}

/// Compute the miter normal at `p1` such that `p0 ---> p1 ---> p2`.
///
/// The resulting vector is not normalized. Its length is such that extruding the shape by it
/// yields edges parallel to the two segments and exactly one unit away from them.
/// The normal points towards the positive side of `p0 -> p1`.
///
/// When the two segments fold onto each other the tangent is taken from `p2 - p0`, and when
/// that doesn't help either the normal of the first segment is returned.
pub fn compute_normal(p0: Point, p1: Point, p2: Point) -> Vector {
    let epsilon = 1e-4;

    let v1 = try_normalize(p1 - p0).unwrap_or_else(Vector::zero);
    let v2 = try_normalize(p2 - p1).unwrap_or_else(Vector::zero);
    let n1 = perp(v1);

    let v12 = v1 + v2;
    let tangent = if v12.square_length() >= epsilon {
        v12.normalize()
    } else {
        match try_normalize(p2 - p0) {
            Some(t) => t,
            None => return n1,
        }
    };

    let n = perp(tangent);
    let inv_len = n.dot(n1);

    if inv_len.abs() < epsilon {
        return n1;
    }

    n / inv_len
}

/// `x - floor(x)`
#[inline]
pub fn fraction(x: f32) -> f32 {
    x - x.floor()
}

#[cfg(test)]
fn assert_almost_eq(a: Vector, b: Vector) {
    if (a - b).square_length() > 0.00001 {
        panic!("assert almost equal: {:?} != {:?}", a, b);
    }
}

#[test]
fn test_compute_normal() {
    let o = point(0.0, 0.0);

    assert_almost_eq(
        compute_normal(o, point(1.0, 0.0), point(1.0, 1.0)),
        vector(-1.0, 1.0),
    );
    assert_almost_eq(
        compute_normal(o, point(1.0, 0.0), point(1.0, -1.0)),
        vector(1.0, 1.0),
    );
    assert_almost_eq(
        compute_normal(o, point(1.0, 0.0), point(2.0, 0.0)),
        vector(0.0, 1.0),
    );
}

#[test]
fn compute_normal_fallbacks() {
    // Folding back onto the first segment, with a shorter second segment.
    assert_almost_eq(
        compute_normal(point(0.0, 0.0), point(2.0, 0.0), point(1.0, 0.0)),
        vector(0.0, 1.0),
    );

    // Back to the start.
    assert_almost_eq(
        compute_normal(point(0.0, 0.0), point(2.0, 0.0), point(0.0, 0.0)),
        vector(0.0, 1.0),
    );
}

#[test]
fn fast_sin_cos_accuracy() {
    let mut angle = -20.0f32;
    while angle < 20.0 {
        let (s, c) = fast_sin_cos(angle);
        assert!((s - angle.sin()).abs() < 1e-5, "sin({})", angle);
        assert!((c - angle.cos()).abs() < 1e-5, "cos({})", angle);
        angle += 0.037;
    }
}

#[test]
fn fraction_of_negative_values() {
    assert_eq!(fraction(1.25), 0.25);
    assert_eq!(fraction(-0.25), 0.75);
}
