//! Play command - launches the windowed player for a scene

use anyhow::{Context, Result};
use winit::event_loop::{ControlFlow, EventLoop};

pub struct PlayArgs {
    pub scene: String,
    pub fullscreen: bool,
}

pub fn run(args: PlayArgs) -> Result<()> {
    let bundle = glimmer_scenes::resolve(&args.scene).context("Failed to load scene")?;

    println!("Playing scene: {}", bundle.scene.name());
    println!(
        "Surface: {}x{}, gamma {}",
        bundle.config.width, bundle.config.height, bundle.config.gamma
    );
    println!();
    println!("Controls:");
    println!("  Escape   - Exit");
    println!("  Enter    - Toggle block/full resolution view (mosaic scenes)");
    println!("  F11      - Toggle fullscreen");

    // Create and run the event loop
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = glimmer_player::PlayerApp::new(bundle, args.fullscreen)?;
    event_loop.run_app(&mut app)?;

    Ok(())
}
