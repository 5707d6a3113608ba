//! Smooth interpolation operators shared by scenes and the simulation

/// Clamp to [0, 1]
pub fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Fractional part, GLSL convention: `x - floor(x)`, always in [0, 1)
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Linear blend from `a` to `b` by `t` (unclamped)
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// 0 below `edge`, 1 at or above
pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge {
        0.0
    } else {
        1.0
    }
}

/// Cubic Hermite ramp from 0 at `edge0` to 1 at `edge1`.
/// Degenerate edges fall back to a hard step instead of dividing by zero.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return step(edge0, x);
    }
    let t = clamp01((x - edge0) / (edge1 - edge0));
    t * t * (3.0 - 2.0 * t)
}

/// Quintic ramp from 0 at `edge0` to 1 at `edge1`, flatter at both ends
/// than `smoothstep`
pub fn smootherstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return step(edge0, x);
    }
    let t = clamp01((x - edge0) / (edge1 - edge0));
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Polynomial smooth union of two distances. `k` controls the blend width;
/// non-positive `k` degrades to a plain minimum.
pub fn smooth_min(a: f32, b: f32, k: f32) -> f32 {
    if k <= 0.0 {
        return a.min(b);
    }
    let h = (k - (a - b).abs()).max(0.0) / k;
    a.min(b) - h * h * k * 0.25
}
