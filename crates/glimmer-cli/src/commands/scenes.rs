//! List the built-in scenes

use anyhow::Result;

pub fn run() -> Result<()> {
    println!("Built-in scenes:");
    for (name, blurb) in glimmer_scenes::BUILT_IN {
        println!("  {:<12} {}", name, blurb);
    }
    println!();
    println!("Play one with `glimmer play <name>`, or save a frame with `glimmer render <name>`.");
    Ok(())
}
