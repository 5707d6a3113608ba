//! Glimmer Swarm - flocking simulation with persistent light trails
//!
//! Provides:
//! - Pairwise attraction/repulsion flocking over a unit square
//! - Deterministic xorshift32 seeding and per-step jitter
//! - Pulsing soft-disc splatting into a decaying trail buffer
//! - TOML-tunable parameters with startup validation

pub mod params;
pub mod rng;
pub mod splat;
pub mod swarm;

pub use params::SwarmParams;
pub use rng::SwarmRng;
pub use splat::splat;
pub use swarm::{Firefly, Swarm};
