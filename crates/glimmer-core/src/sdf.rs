//! Signed distance functions for the analytic shapes the scenes draw.
//!
//! All primitives are centered at the origin; callers position them by
//! offsetting the sample point. Distances are negative inside, zero on the
//! boundary, positive outside.

use crate::types::Vec2;

/// Distance to a circle of radius `r`
pub fn sd_circle(p: Vec2, r: f32) -> f32 {
    p.length() - r
}

/// Unsigned distance to the segment from `a` to `b`
pub fn sd_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let pa = p - a;
    let ba = b - a;
    let len_sq = ba.length_squared();
    if len_sq == 0.0 {
        return pa.length();
    }
    let h = (pa.dot(&ba) / len_sq).clamp(0.0, 1.0);
    (pa - ba * h).length()
}

/// Distance to an axis-aligned box with half extents `b`
pub fn sd_box(p: Vec2, b: Vec2) -> f32 {
    let d = p.abs() - b;
    d.max(&Vec2::ZERO).length() + d.x.max(d.y).min(0.0)
}

/// Distance to a box with per-corner rounding radii.
/// `radii` order: [top-right, bottom-right, top-left, bottom-left].
pub fn sd_rounded_box(p: Vec2, b: Vec2, radii: [f32; 4]) -> f32 {
    let mut r = if p.x > 0.0 {
        (radii[0], radii[1])
    } else {
        (radii[2], radii[3])
    };
    if p.y < 0.0 {
        r.0 = r.1;
    }
    let q = p.abs() - b + Vec2::splat(r.0);
    q.x.max(q.y).min(0.0) + q.max(&Vec2::ZERO).length() - r.0
}

/// Distance to an isosceles trapezoid: half base `r1`, half top `r2`,
/// half height `he`
pub fn sd_trapezoid(p: Vec2, r1: f32, r2: f32, he: f32) -> f32 {
    let k1 = Vec2::new(r2, he);
    let k2 = Vec2::new(r2 - r1, 2.0 * he);
    let pp = Vec2::new(p.x.abs(), p.y);
    let base = if pp.y < 0.0 { r1 } else { r2 };
    let ca = Vec2::new(pp.x - pp.x.min(base), pp.y.abs() - he);
    let cb = pp - k1 + k2 * ((k1 - pp).dot(&k2) / k2.length_squared()).clamp(0.0, 1.0);
    let s = if cb.x < 0.0 && ca.y < 0.0 { -1.0 } else { 1.0 };
    s * ca.length_squared().min(cb.length_squared()).sqrt()
}

/// Distance to an annulus of radius `r` and half thickness `thickness`
pub fn sd_ring(p: Vec2, r: f32, thickness: f32) -> f32 {
    (p.length() - r).abs() - thickness
}

/// Distance to a circular arc. `sc` is (sin, cos) of the aperture half-angle,
/// `ra` the arc radius, `rb` its half thickness.
pub fn sd_arc(p: Vec2, sc: Vec2, ra: f32, rb: f32) -> f32 {
    let px = p.x.abs();
    let d = if sc.y * px > sc.x * p.y {
        (Vec2::new(px, p.y) - sc * ra).length()
    } else {
        (Vec2::new(px, p.y).length() - ra).abs()
    };
    d - rb
}
