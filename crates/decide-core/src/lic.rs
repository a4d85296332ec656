// ─────────────────────────────────────────────────────────────────────
// Launch Interceptor — Condition Bank (LIC0–LIC14)
// ─────────────────────────────────────────────────────────────────────
//! The fifteen Launch Interceptor Conditions.
//!
//! Each `licN` takes only the thresholds it reads plus the point
//! sequence and answers "does some window satisfy condition N". A
//! threshold outside the LIC's validity range makes it false; nothing
//! here fails or panics.
//!
//! [`LIC_TABLE`] is the only place that maps a LIC index to its
//! parameter subset. The decision engine and [`all_conditions_met`]
//! both read it.

use decide_types::{Cmv, Parameters, Point, PredicateMode, LIC_COUNT};

use crate::geometry::{
    chord_distance, disjoint, distance, heron, in_circle, not_in_circle, valid_angle, Quadrant,
};
use crate::window::{any_window, span};

/// Evaluate one LIC against a point sequence.
pub type LicEvaluator = fn(&[Point], &Parameters, PredicateMode) -> bool;

/// Index → evaluator, with each entry selecting its parameter subset.
pub const LIC_TABLE: [LicEvaluator; LIC_COUNT] = [
    |pts, p, _| lic0(p.length1, pts),
    |pts, p, _| lic1(p.radius1, pts),
    |pts, p, mode| lic2(p.epsilon, pts, mode),
    |pts, p, _| lic3(p.area1, pts),
    |pts, p, _| lic4(p.q_pts, p.quads, pts),
    |pts, _, mode| lic5(pts, mode),
    |pts, p, mode| lic6(p.n_pts, p.dist, pts, mode),
    |pts, p, _| lic7(p.k_pts, p.length1, pts),
    |pts, p, _| lic8(p.a_pts, p.b_pts, p.radius1, pts),
    |pts, p, mode| lic9(p.c_pts, p.d_pts, p.epsilon, pts, mode),
    |pts, p, _| lic10(p.e_pts, p.f_pts, p.area1, pts),
    |pts, p, _| lic11(p.g_pts, pts),
    |pts, p, _| lic12(p.k_pts, p.length1, p.length2, pts),
    |pts, p, _| lic13(p.a_pts, p.b_pts, p.radius1, p.radius2, pts),
    |pts, p, _| lic14(p.e_pts, p.f_pts, p.area1, p.area2, pts),
];

/// Condition-Met Vector, one LIC after another.
pub fn condition_met_vector(points: &[Point], params: &Parameters, mode: PredicateMode) -> Cmv {
    let mut cmv = [false; LIC_COUNT];
    for (slot, lic) in cmv.iter_mut().zip(LIC_TABLE.iter()) {
        *slot = lic(points, params, mode);
    }
    cmv
}

/// True iff every LIC holds. Stops at the first failing LIC.
pub fn all_conditions_met(points: &[Point], params: &Parameters, mode: PredicateMode) -> bool {
    LIC_TABLE.iter().all(|lic| lic(points, params, mode))
}

/// Some consecutive pair is farther apart than `length1`.
pub fn lic0(length1: f64, points: &[Point]) -> bool {
    if length1 < 0.0 {
        return false;
    }
    any_window(points, 2, |w| distance(w[0], w[1]) > length1)
}

/// Some consecutive triple cannot be contained in a circle of `radius1`.
pub fn lic1(radius1: f64, points: &[Point]) -> bool {
    if radius1 < 0.0 {
        return false;
    }
    any_window(points, 3, |w| not_in_circle(w[0], w[1], w[2], radius1))
}

/// Some consecutive triple forms an angle more than `epsilon` from π.
pub fn lic2(epsilon: f64, points: &[Point], mode: PredicateMode) -> bool {
    if !(0.0..std::f64::consts::PI).contains(&epsilon) {
        return false;
    }
    any_window(points, 3, |w| valid_angle(w[0], w[1], w[2], epsilon, mode))
}

/// Some consecutive triple spans an area greater than `area1`.
pub fn lic3(area1: f64, points: &[Point]) -> bool {
    if area1 < 0.0 {
        return false;
    }
    any_window(points, 3, |w| heron(w[0], w[1], w[2]) > area1)
}

/// Some run of `q_pts` consecutive points touches more than `quads`
/// quadrants.
pub fn lic4(q_pts: i64, quads: i64, points: &[Point]) -> bool {
    if q_pts < 2 || !(1..=3).contains(&quads) {
        return false;
    }
    let Some(len) = span(&[q_pts], 0) else {
        return false;
    };
    any_window(points, len, |w| {
        let mut touched = [false; 4];
        for &pt in w {
            touched[Quadrant::of(pt).index()] = true;
        }
        let count = touched.iter().filter(|&&t| t).count() as i64;
        count > quads
    })
}

/// Some consecutive pair changes x.
///
/// `Reference` accepts any nonzero change; `Corrected` only a decrease.
pub fn lic5(points: &[Point], mode: PredicateMode) -> bool {
    any_window(points, 2, |w| {
        let dx = w[1].x - w[0].x;
        match mode {
            PredicateMode::Reference => dx < 0.0 || dx > 0.0,
            PredicateMode::Corrected => dx < 0.0,
        }
    })
}

/// Some run of `n_pts` points has an interior point farther than `dist`
/// from the line through its endpoints, or from the shared endpoint
/// when they coincide.
pub fn lic6(n_pts: i64, dist: f64, points: &[Point], mode: PredicateMode) -> bool {
    if n_pts < 3 || dist < 0.0 {
        return false;
    }
    let Some(len) = span(&[n_pts], 0) else {
        return false;
    };
    any_window(points, len, |w| {
        let first = w[0];
        let last = w[w.len() - 1];
        let interior = &w[1..w.len() - 1];
        if disjoint(first, last) {
            interior
                .iter()
                .any(|&pt| chord_distance(pt, first, last, mode) > dist)
        } else {
            interior.iter().any(|&pt| distance(pt, first) > dist)
        }
    })
}

/// Some pair `k_pts` apart is farther apart than `length1`.
///
/// `length1` is not range-checked here.
pub fn lic7(k_pts: i64, length1: f64, points: &[Point]) -> bool {
    if k_pts < 1 {
        return false;
    }
    let Some(len) = span(&[k_pts], 2) else {
        return false;
    };
    any_window(points, len, |w| distance(w[0], w[len - 1]) > length1)
}

/// Some triple separated by `a_pts` and `b_pts` cannot be contained in
/// a circle of `radius1`.
pub fn lic8(a_pts: i64, b_pts: i64, radius1: f64, points: &[Point]) -> bool {
    if a_pts < 1 || b_pts < 1 {
        return false;
    }
    let Some(len) = span(&[a_pts, b_pts], 3) else {
        return false;
    };
    let mid = a_pts as usize + 1;
    any_window(points, len, |w| not_in_circle(w[0], w[mid], w[len - 1], radius1))
}

/// Some triple separated by `c_pts` and `d_pts` forms an angle more
/// than `epsilon` from π.
pub fn lic9(c_pts: i64, d_pts: i64, epsilon: f64, points: &[Point], mode: PredicateMode) -> bool {
    if c_pts < 1 || d_pts < 1 {
        return false;
    }
    let Some(len) = span(&[c_pts, d_pts], 3) else {
        return false;
    };
    let vertex = c_pts as usize + 1;
    any_window(points, len, |w| {
        valid_angle(w[0], w[vertex], w[len - 1], epsilon, mode)
    })
}

/// Some triple separated by `e_pts` and `f_pts` spans an area greater
/// than `area1`.
pub fn lic10(e_pts: i64, f_pts: i64, area1: f64, points: &[Point]) -> bool {
    if e_pts < 1 || f_pts < 1 || area1 < 0.0 {
        return false;
    }
    let Some(len) = span(&[e_pts, f_pts], 3) else {
        return false;
    };
    let mid = e_pts as usize + 1;
    any_window(points, len, |w| heron(w[0], w[mid], w[len - 1]) > area1)
}

/// Some pair `g_pts` apart has the later point at smaller x.
pub fn lic11(g_pts: i64, points: &[Point]) -> bool {
    if g_pts < 1 {
        return false;
    }
    let Some(len) = span(&[g_pts], 2) else {
        return false;
    };
    any_window(points, len, |w| w[len - 1].x - w[0].x < 0.0)
}

/// Some pair `k_pts` apart is farther than `length1` and nearer than
/// `length2`.
pub fn lic12(k_pts: i64, length1: f64, length2: f64, points: &[Point]) -> bool {
    if k_pts < 1 || length1 < 0.0 || length2 < 0.0 {
        return false;
    }
    let Some(len) = span(&[k_pts], 2) else {
        return false;
    };
    any_window(points, len, |w| {
        let d = distance(w[0], w[len - 1]);
        d > length1 && d < length2
    })
}

/// Some triple separated by `a_pts` and `b_pts` escapes a circle of
/// `radius1` yet fits in a circle of `radius2`.
pub fn lic13(a_pts: i64, b_pts: i64, radius1: f64, radius2: f64, points: &[Point]) -> bool {
    if a_pts < 1 || b_pts < 1 || radius1 < 0.0 || radius2 < 0.0 {
        return false;
    }
    let Some(len) = span(&[a_pts, b_pts], 3) else {
        return false;
    };
    let mid = a_pts as usize + 1;
    any_window(points, len, |w| {
        let (p1, p2, p3) = (w[0], w[mid], w[len - 1]);
        not_in_circle(p1, p2, p3, radius1) && in_circle(p1, p2, p3, radius2)
    })
}

/// Some triple separated by `e_pts` and `f_pts` spans an area strictly
/// between `area1` and `area2`.
pub fn lic14(e_pts: i64, f_pts: i64, area1: f64, area2: f64, points: &[Point]) -> bool {
    if e_pts < 1 || f_pts < 1 || area1 < 0.0 || area2 < 0.0 {
        return false;
    }
    let Some(len) = span(&[e_pts, f_pts], 3) else {
        return false;
    };
    let mid = e_pts as usize + 1;
    any_window(points, len, |w| {
        let area = heron(w[0], w[mid], w[len - 1]);
        area > area1 && area < area2
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const REF: PredicateMode = PredicateMode::Reference;
    const FIX: PredicateMode = PredicateMode::Corrected;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    /// Thresholds loose enough that every LIC holds on `square()`.
    fn loose() -> Parameters {
        Parameters {
            length1: 1.0,
            length2: 100.0,
            radius1: 0.5,
            radius2: 100.0,
            epsilon: 0.1,
            area1: 0.5,
            area2: 1000.0,
            dist: 0.1,
            q_pts: 3,
            quads: 1,
            n_pts: 3,
            k_pts: 1,
            a_pts: 1,
            b_pts: 1,
            c_pts: 1,
            d_pts: 1,
            e_pts: 1,
            f_pts: 1,
            g_pts: 1,
        }
    }

    fn square() -> Vec<Point> {
        pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (-4.0, 2.0)])
    }

    /// p0=(0,0), p2=(3,0), p4=(0,4) with filler at the gaps.
    fn spaced_triple() -> Vec<Point> {
        pts(&[(0.0, 0.0), (9.0, 9.0), (3.0, 0.0), (9.0, 9.0), (0.0, 4.0)])
    }

    // ── Table ─────────────────────────────────────────────────────

    #[test]
    fn test_all_lics_hold_on_square() {
        let cmv = condition_met_vector(&square(), &loose(), REF);
        assert_eq!(cmv, [true; LIC_COUNT]);
        assert!(all_conditions_met(&square(), &loose(), REF));
    }

    #[test]
    fn test_all_conditions_met_fails_on_one() {
        let params = Parameters {
            area2: 1.0,
            ..loose()
        };
        let cmv = condition_met_vector(&square(), &params, REF);
        let unmet: Vec<usize> = (0..LIC_COUNT).filter(|&i| !cmv[i]).collect();
        assert_eq!(unmet, vec![14]);
        assert!(!all_conditions_met(&square(), &params, REF));
    }

    #[test]
    fn test_too_few_points_all_false() {
        // Every window needs at least two points
        for n in 0..2 {
            let cmv = condition_met_vector(&square()[..n], &loose(), REF);
            assert_eq!(cmv, [false; LIC_COUNT], "n = {n}");
        }
    }

    #[test]
    fn test_short_sequence_only_short_windows() {
        // Three points: LIC0–3 and LIC5–7, 11, 12 have windows ≤ 3
        let three = &square()[..3];
        let cmv = condition_met_vector(three, &loose(), REF);
        for i in [8, 9, 10, 13, 14] {
            assert!(!cmv[i], "LIC{i} needs five points");
        }
        assert!(cmv[0] && cmv[1] && cmv[7]);
    }

    // ── LIC0 ──────────────────────────────────────────────────────

    #[test]
    fn test_lic0() {
        let p = pts(&[(0.0, 0.0), (3.0, 4.0)]);
        assert!(lic0(4.9, &p));
        assert!(!lic0(5.0, &p));
        assert!(!lic0(-1.0, &p));
        assert!(!lic0(0.0, &p[..1]));
    }

    #[test]
    fn test_lic0_monotonic_in_length() {
        let p = square();
        let results: Vec<bool> = (0..12).map(|l| lic0(l as f64, &p)).collect();
        let first_false = results.iter().position(|&r| !r).unwrap();
        assert!(results[first_false..].iter().all(|&r| !r));
        // Longest consecutive hop is (0,4)→(-4,2), √20 ≈ 4.47
        assert_eq!(first_false, 5);
    }

    // ── LIC1 ──────────────────────────────────────────────────────

    #[test]
    fn test_lic1() {
        let p = pts(&[(0.0, 0.0), (3.0, 0.0), (0.0, 4.0)]);
        assert!(lic1(1.0, &p));
        assert!(!lic1(1.5, &p));
        assert!(!lic1(-1.0, &p));
    }

    // ── LIC2 ──────────────────────────────────────────────────────

    #[test]
    fn test_lic2() {
        let right = pts(&[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0)]);
        let straight = pts(&[(-1.0, 0.0), (0.0, 0.0), (1.0, 0.0)]);
        assert!(lic2(0.1, &right, REF));
        assert!(!lic2(0.1, &straight, REF));
    }

    #[test]
    fn test_lic2_epsilon_range() {
        let right = pts(&[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0)]);
        assert!(lic2(0.0, &right, REF));
        assert!(!lic2(-0.1, &right, REF));
        assert!(!lic2(std::f64::consts::PI, &right, REF));
    }

    #[test]
    fn test_lic2_vertex_coincides() {
        let p = pts(&[(0.0, 0.0), (0.0, 0.0), (0.0, 1.0)]);
        assert!(!lic2(0.1, &p, REF));
        assert!(!lic2(0.1, &p, FIX));
    }

    // ── LIC3 ──────────────────────────────────────────────────────

    #[test]
    fn test_lic3() {
        let p = pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
        assert!(lic3(5.9, &p));
        assert!(!lic3(6.0, &p));
        assert!(!lic3(-1.0, &p));
    }

    // ── LIC4 ──────────────────────────────────────────────────────

    #[test]
    fn test_lic4_four_quadrants() {
        let p = pts(&[(0.0, 0.0), (-1.0, 1.0), (1.0, -1.0), (-1.0, -1.0)]);
        assert!(lic4(4, 3, &p));
        // QUADS must be at most 3
        assert!(!lic4(4, 4, &p));
    }

    #[test]
    fn test_lic4_counts_each_quadrant_once() {
        let same = pts(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        assert!(!lic4(3, 1, &same));
        let mixed = pts(&[(1.0, 1.0), (2.0, 2.0), (-1.0, 1.0)]);
        assert!(lic4(3, 1, &mixed));
    }

    #[test]
    fn test_lic4_axis_points() {
        let p = pts(&[(-1.0, 0.0), (0.0, -1.0)]);
        assert!(lic4(2, 1, &p));
        let origin_and_axis = pts(&[(0.0, 0.0), (0.0, 7.0)]);
        assert!(!lic4(2, 1, &origin_and_axis));
    }

    #[test]
    fn test_lic4_invalid() {
        let p = pts(&[(0.0, 0.0), (-1.0, 1.0), (1.0, -1.0)]);
        assert!(!lic4(1, 1, &p));
        assert!(!lic4(2, 0, &p));
        assert!(!lic4(4, 1, &p));
    }

    // ── LIC5 ──────────────────────────────────────────────────────

    #[test]
    fn test_lic5_reference_accepts_increase() {
        let inc = pts(&[(1.0, 0.0), (2.0, 0.0)]);
        assert!(lic5(&inc, REF));
        assert!(!lic5(&inc, FIX));
    }

    #[test]
    fn test_lic5_decrease() {
        let dec = pts(&[(2.0, 0.0), (1.0, 0.0)]);
        assert!(lic5(&dec, REF));
        assert!(lic5(&dec, FIX));
    }

    #[test]
    fn test_lic5_unchanged_x() {
        let same = pts(&[(1.0, 0.0), (1.0, 5.0), (1.0, -3.0)]);
        assert!(!lic5(&same, REF));
        assert!(!lic5(&same, FIX));
    }

    // ── LIC6 ──────────────────────────────────────────────────────

    #[test]
    fn test_lic6_coincident_endpoints() {
        let p = pts(&[(0.0, 0.0), (3.0, 4.0), (0.0, 0.0)]);
        assert!(lic6(3, 4.9, &p, REF));
        assert!(!lic6(3, 5.0, &p, REF));
    }

    #[test]
    fn test_lic6_chord_reference_vs_corrected() {
        // Apex (1,5) over chord (0,0)–(2,0): reference value 3, true distance 5
        let p = pts(&[(0.0, 0.0), (1.0, 5.0), (2.0, 0.0)]);
        assert!(!lic6(3, 4.0, &p, REF));
        assert!(lic6(3, 4.0, &p, FIX));
        assert!(lic6(3, 2.9, &p, REF));
    }

    #[test]
    fn test_lic6_invalid() {
        let p = pts(&[(0.0, 0.0), (1.0, 5.0), (2.0, 0.0)]);
        assert!(!lic6(2, 0.0, &p, REF));
        assert!(!lic6(3, -1.0, &p, REF));
        assert!(!lic6(4, 0.0, &p, REF));
    }

    // ── LIC7 ──────────────────────────────────────────────────────

    #[test]
    fn test_lic7() {
        let p = pts(&[(0.0, 0.0), (9.0, 9.0), (3.0, 4.0)]);
        assert!(lic7(1, 4.9, &p));
        assert!(!lic7(1, 5.0, &p));
        assert!(!lic7(0, 0.0, &p));
        assert!(!lic7(2, 0.0, &p));
    }

    #[test]
    fn test_lic7_negative_length_unchecked() {
        let p = pts(&[(0.0, 0.0), (0.0, 0.0), (0.0, 0.0)]);
        assert!(lic7(1, -1.0, &p));
    }

    // ── LIC8 ──────────────────────────────────────────────────────

    #[test]
    fn test_lic8() {
        let p = spaced_triple();
        assert!(lic8(1, 1, 1.0, &p));
        assert!(!lic8(1, 1, 1.5, &p));
        assert!(!lic8(0, 1, 1.0, &p));
        assert!(!lic8(1, 2, 1.0, &p));
    }

    #[test]
    fn test_lic8_negative_radius_unchecked() {
        let p = pts(&[(0.0, 0.0); 5]);
        assert!(lic8(1, 1, -1.0, &p));
    }

    // ── LIC9 ──────────────────────────────────────────────────────

    #[test]
    fn test_lic9() {
        let right = pts(&[(1.0, 0.0), (9.0, 9.0), (0.0, 0.0), (9.0, 9.0), (0.0, 1.0)]);
        let straight = pts(&[(-1.0, 0.0), (9.0, 9.0), (0.0, 0.0), (9.0, 9.0), (1.0, 0.0)]);
        assert!(lic9(1, 1, 0.1, &right, REF));
        assert!(!lic9(1, 1, 0.1, &straight, REF));
        assert!(!lic9(1, 0, 0.1, &right, REF));
    }

    // ── LIC10 ─────────────────────────────────────────────────────

    #[test]
    fn test_lic10() {
        let p = pts(&[(0.0, 0.0), (9.0, 9.0), (4.0, 0.0), (9.0, 9.0), (0.0, 3.0)]);
        assert!(lic10(1, 1, 5.9, &p));
        assert!(!lic10(1, 1, 6.0, &p));
        assert!(!lic10(1, 1, -1.0, &p));
        assert!(!lic10(1, 0, 0.0, &p));
    }

    // ── LIC11 ─────────────────────────────────────────────────────

    #[test]
    fn test_lic11_single_window() {
        // One window of three points: x goes 0 → 3, no decrease
        let p = pts(&[(0.0, 0.0), (5.0, 5.0), (3.0, 5.0)]);
        assert!(!lic11(1, &p));
    }

    #[test]
    fn test_lic11_second_window() {
        // Window (5,5)…(1,0) decreases
        let p = pts(&[(0.0, 0.0), (5.0, 5.0), (3.0, 5.0), (1.0, 0.0)]);
        assert!(lic11(1, &p));
        assert!(!lic11(0, &p));
        assert!(!lic11(3, &p));
    }

    // ── LIC12 ─────────────────────────────────────────────────────

    #[test]
    fn test_lic12() {
        let p = pts(&[(0.0, 0.0), (9.0, 9.0), (3.0, 4.0)]);
        assert!(lic12(1, 4.0, 6.0, &p));
        assert!(!lic12(1, 4.0, 5.0, &p));
        assert!(!lic12(1, -1.0, 6.0, &p));
        assert!(!lic12(1, 4.0, -6.0, &p));
    }

    // ── LIC13 ─────────────────────────────────────────────────────

    #[test]
    fn test_lic13() {
        let p = spaced_triple();
        assert!(lic13(1, 1, 1.0, 2.0, &p));
        assert!(!lic13(1, 1, 1.0, 1.9, &p));
        assert!(!lic13(1, 1, -1.0, 2.0, &p));
    }

    // ── LIC14 ─────────────────────────────────────────────────────

    #[test]
    fn test_lic14() {
        let p = pts(&[(0.0, 0.0), (9.0, 9.0), (4.0, 0.0), (9.0, 9.0), (0.0, 3.0)]);
        assert!(lic14(1, 1, 5.0, 7.0, &p));
        assert!(!lic14(1, 1, 5.0, 6.0, &p));
        assert!(!lic14(1, 1, 5.0, -7.0, &p));
    }

    #[test]
    fn test_huge_counts_are_false() {
        let p = square();
        assert!(!lic8(i64::MAX, i64::MAX, 0.0, &p));
        assert!(!lic11(i64::MAX, &p));
    }
}
