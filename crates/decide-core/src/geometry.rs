// ─────────────────────────────────────────────────────────────────────
// Launch Interceptor — Planar Geometry Primitives
// ─────────────────────────────────────────────────────────────────────
//! Distance, containment, angle and area tests shared by the LICs.
//!
//! All functions follow IEEE-754 semantics without special-casing:
//! a degenerate angle (0/0) or a rounding-negative Heron radicand
//! yields NaN, and every comparison against NaN is false.

use std::f64::consts::PI;

use decide_types::{Point, PredicateMode};

/// Euclidean distance.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    ((p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)).sqrt()
}

/// True iff the two points differ on either axis.
#[inline]
pub fn disjoint(p1: Point, p2: Point) -> bool {
    p1.x != p2.x || p1.y != p2.y
}

/// True iff both `p2` and `p3` lie farther than one diameter from `p1`.
///
/// Not the complement of [`in_circle`]: when one chord is short and the
/// other long, both return false.
pub fn not_in_circle(p1: Point, p2: Point, p3: Point, radius: f64) -> bool {
    let diameter = radius * 2.0;
    distance(p1, p2) > diameter && distance(p1, p3) > diameter
}

/// True iff both `p2` and `p3` lie within one diameter of `p1`.
pub fn in_circle(p1: Point, p2: Point, p3: Point, radius: f64) -> bool {
    let diameter = radius * 2.0;
    distance(p1, p2) <= diameter && distance(p1, p3) <= diameter
}

/// True iff the angle `p1`-`c`-`p2` deviates from a straight line by
/// more than `epsilon`.
///
/// The vertex must differ from `p1`. In `Corrected` mode it must also
/// differ from `p2`; in `Reference` mode that case falls through to the
/// law of cosines, which yields NaN and so false as well.
pub fn valid_angle(p1: Point, c: Point, p2: Point, epsilon: f64, mode: PredicateMode) -> bool {
    let guarded = match mode {
        PredicateMode::Reference => disjoint(p1, c),
        PredicateMode::Corrected => disjoint(p1, c) && disjoint(c, p2),
    };
    if !guarded {
        return false;
    }

    let c1 = distance(c, p1);
    let c2 = distance(c, p2);
    let d = distance(p1, p2);
    let angle = ((c1 * c1 + c2 * c2 - d * d) / (2.0 * c1 * c2)).acos();

    angle < PI - epsilon || angle > PI + epsilon
}

/// Triangle area from side lengths (Heron's formula).
pub fn heron(p1: Point, p2: Point, p3: Point) -> f64 {
    let a = distance(p1, p2);
    let b = distance(p2, p3);
    let c = distance(p1, p3);
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).sqrt()
}

/// Distance-like value of `p` from the line through `first` and `last`.
///
/// `Corrected` computes the point-to-line distance
/// `|a·x + b·y + c| / sqrt(a² + b²)`. `Reference` leaves `a` and `b` off
/// the point's coordinates: `|x + y + c| / sqrt(a² + b²)`.
/// Undefined (NaN) when `first` and `last` coincide.
pub fn chord_distance(p: Point, first: Point, last: Point, mode: PredicateMode) -> f64 {
    let a = last.y - first.y;
    let b = -(last.x - first.x);
    let c = -(a * last.x + b * last.y);
    let norm = (a * a + b * b).sqrt();

    let numerator = match mode {
        PredicateMode::Reference => p.x + p.y + c,
        PredicateMode::Corrected => a * p.x + b * p.y + c,
    };
    numerator.abs() / norm
}

/// Quadrant assignment used by LIC4.
///
/// Points on an axis go to the lower-numbered candidate, so the origin
/// and the positive half-axes belong to `First`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// x ≥ 0, y ≥ 0
    First,
    /// x < 0, y ≥ 0
    Second,
    /// x ≥ 0, y < 0
    Third,
    /// x < 0, y < 0
    Fourth,
}

impl Quadrant {
    pub fn of(p: Point) -> Self {
        match (p.x >= 0.0, p.y >= 0.0) {
            (true, true) => Quadrant::First,
            (false, true) => Quadrant::Second,
            (true, false) => Quadrant::Third,
            (false, false) => Quadrant::Fourth,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}
