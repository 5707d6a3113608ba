//! Additive soft-disc deposit into a persistent trail buffer

use crate::params::SwarmParams;
use crate::swarm::Firefly;
use glimmer_core::{mix, smoothstep, Rgb};
use glimmer_shade::{FrameBuffer, SurfaceConfig};

/// Fade the whole trail, then stamp every firefly as a pulsing soft disc.
///
/// Decay runs before any new light lands, so a pixel no firefly touches this
/// frame is exactly `previous * decay`. Deposits are additive and therefore
/// independent of flock order. `buffer` must match `config` in dimensions.
pub fn splat(
    flies: &[Firefly],
    params: &SwarmParams,
    buffer: &mut FrameBuffer,
    config: &SurfaceConfig,
    time: f32,
) {
    buffer.decay(params.decay);

    let reach = splat_reach(params, config);
    let short = config.short_axis();
    let width = buffer.width() as i64;
    let height = buffer.height() as i64;

    for fly in flies {
        let pulse = 0.5 + 0.5 * (time * params.pulse_speed + fly.phase).sin();
        let radius =
            params.entity_radius * mix(params.min_pulse_factor, params.max_pulse_factor, pulse);
        let color = fly.color.lerp(&Rgb::WHITE, pulse * 0.7);

        let cx = fly.position.x * width as f32;
        let cy = fly.position.y * height as f32;
        let min_x = (cx as i64 - reach).max(0);
        let max_x = (cx as i64 + reach).min(width - 1);
        let min_y = (cy as i64 - reach).max(0);
        let max_y = (cy as i64 + reach).min(height - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = (x as f32 - cx) / short;
                let dy = (y as f32 - cy) / short;
                let d = (dx * dx + dy * dy).sqrt() - radius;
                let alpha = 1.0 - smoothstep(0.0, radius * 0.5, d);
                if alpha > 0.0 {
                    buffer.add(x as u32, y as u32, color * (alpha * params.brightness));
                }
            }
        }
    }
}

/// Bounding half-extent in pixels that covers the widest possible pulse.
/// The soft edge ends at 1.5x the disc radius.
fn splat_reach(params: &SwarmParams, config: &SurfaceConfig) -> i64 {
    (params.entity_radius * params.max_pulse_factor * config.short_axis() * 1.5) as i64 + 2
}
