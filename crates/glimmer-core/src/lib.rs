//! Glimmer Core - Foundational math for the Glimmer toolkit
//!
//! This crate provides the pure building blocks that all other Glimmer
//! crates depend on:
//! - `Vec2`, `Rgb` - 2D vector and color types
//! - Smooth interpolation operators (`mix`, `smoothstep`, `smooth_min`, ...)
//! - Signed distance functions for analytic shapes
//! - Gradient palettes and lattice hashing for pseudo-randomization
//! - Error types and Result alias

mod ease;
mod error;
mod gradient;
mod hash;
mod sdf;
mod types;

pub use ease::{clamp01, fract, mix, smooth_min, smoothstep, smootherstep, step};
pub use error::{GlimmerError, Result};
pub use gradient::GradientKind;
pub use hash::{hash21, hash22};
pub use sdf::{sd_arc, sd_box, sd_circle, sd_ring, sd_rounded_box, sd_segment, sd_trapezoid};
pub use types::{Rgb, Vec2};
