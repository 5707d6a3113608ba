//! Glimmer Player - Standalone scene player binary
//!
//! Opens a window and plays a built-in scene or a scene file.
//!
//! Usage:
//!   glimmer-player <scene> [--fullscreen]

use anyhow::{Context, Result};
use clap::Parser;
use glimmer_player::PlayerApp;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "glimmer-player")]
#[command(about = "Glimmer scene player - animate a scene in a window")]
struct Args {
    /// Built-in scene name or path to a scene file
    scene: String,

    /// Launch in fullscreen mode
    #[arg(long)]
    fullscreen: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

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

    let mut app = PlayerApp::new(bundle, args.fullscreen)?;
    event_loop.run_app(&mut app)?;

    Ok(())
}
