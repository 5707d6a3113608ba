//! Glimmer CLI - Command-line interface for Glimmer scenes

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{play, render, scenes};

#[derive(Parser)]
#[command(name = "glimmer")]
#[command(about = "Animated procedural scene toolkit", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a scene in a window
    Play {
        /// Built-in scene name or path to a scene file
        scene: String,

        /// Launch in fullscreen mode
        #[arg(long)]
        fullscreen: bool,
    },

    /// Render a scene to a PNG image (headless)
    Render {
        /// Built-in scene name or path to a scene file
        scene: String,

        /// Output image path
        #[arg(short, long, default_value = "render.png")]
        output: String,

        /// Number of 60 Hz frames to simulate before the capture
        #[arg(long, default_value = "1")]
        frames: u32,

        /// Override image width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Override image height in pixels
        #[arg(long)]
        height: Option<u32>,
    },

    /// List the built-in scenes
    Scenes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { scene, fullscreen } => play::run(play::PlayArgs { scene, fullscreen }),
        Commands::Render {
            scene,
            output,
            frames,
            width,
            height,
        } => render::run(render::RenderArgs {
            scene,
            output,
            frames,
            width,
            height,
        }),
        Commands::Scenes => scenes::run(),
    }
}
