//! Headless scene-to-PNG render command

use anyhow::{Context, Result};
use glimmer_shade::{FrameBuffer, Renderer, SurfaceConfig};

pub struct RenderArgs {
    pub scene: String,
    pub output: String,
    pub frames: u32,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let bundle = glimmer_scenes::resolve(&args.scene).context("Failed to load scene")?;
    let mut scene = bundle.scene;

    // CLI resolution overrides
    let mut config = bundle.config;
    if args.width.is_some() || args.height.is_some() {
        config = SurfaceConfig::new(
            args.width.unwrap_or(config.width),
            args.height.unwrap_or(config.height),
            config.gamma,
        )?;
    }

    println!("Rendering scene: {}", scene.name());

    let mut renderer = Renderer::new(config.clone(), scene.pass_mode())?;
    let mut frame = FrameBuffer::new(config.width, config.height);

    // Step at a fixed 60 Hz so stateful scenes accumulate before the capture
    let frames = args.frames.max(1);
    for index in 0..frames {
        let time = index as f32 / 60.0;
        renderer.render_frame(scene.as_mut(), &mut frame, time);
    }

    // Encode as PNG
    let img = image::RgbaImage::from_raw(config.width, config.height, frame.to_rgba8())
        .context("Failed to create image from pixel data")?;
    img.save(&args.output)
        .context(format!("Failed to save image to {}", args.output))?;

    println!(
        "Rendered {}x{} image to {} ({} frames simulated)",
        config.width, config.height, args.output, frames
    );

    Ok(())
}
