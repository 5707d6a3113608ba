//! Glimmer Scenes - the built-in animated scene collection
//!
//! Provides:
//! - Procedural scenes implementing the shade/advance pipeline contract
//! - A registry mapping scene names to ready-to-run bundles
//! - TOML scene files with resolution, gamma, and parameter overrides

pub mod fireflies;
pub mod format;
pub mod mosaic;
pub mod orbits;
pub mod palette;
pub mod rings;
mod tuning;
pub mod uv;

pub use fireflies::FirefliesScene;
pub use format::{SceneFile, SceneMetadata};
pub use mosaic::MosaicScene;
pub use orbits::{OrbitsParams, OrbitsScene};
pub use palette::PaletteScene;
pub use rings::{RingsParams, RingsScene};
pub use uv::UvScene;

use glimmer_core::{GlimmerError, Result};
use glimmer_shade::{Scene, SurfaceConfig};
use glimmer_swarm::SwarmParams;
use std::path::Path;

/// Built-in scene names, each with a one-line description.
pub const BUILT_IN: &[(&str, &str)] = &[
    ("rings", "scrolling grid of pulsing neon rings"),
    ("fireflies", "flocking lights that leave fading trails"),
    ("orbits", "planets and orbit paths in warped space"),
    ("palette", "every color gradient as a horizontal strip"),
    ("uv", "the raw surface coordinate ramp"),
    ("mosaic", "the coordinate ramp resolved through pixel blocks"),
];

/// A scene ready to run: the animated content plus the surface it draws on.
pub struct SceneBundle {
    pub scene: Box<dyn Scene>,
    pub config: SurfaceConfig,
}

impl std::fmt::Debug for SceneBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneBundle")
            .field("scene", &self.scene.name())
            .field("config", &self.config)
            .finish()
    }
}

/// Build a built-in scene by name, applying parameter overrides from `params`.
/// Each scene starts from its preferred surface.
pub fn build(name: &str, params: &toml::value::Table) -> Result<SceneBundle> {
    match name {
        "rings" => Ok(SceneBundle {
            scene: Box::new(RingsScene::new(RingsParams::from_toml(params)?)),
            config: SurfaceConfig::new(800, 800, 2.2)?,
        }),
        "fireflies" => {
            let seed = params
                .get("seed")
                .and_then(|v| v.as_integer())
                .unwrap_or(0xDEAD_BEEF) as u32;
            Ok(SceneBundle {
                scene: Box::new(FirefliesScene::new(SwarmParams::from_toml(params)?, seed)),
                config: SurfaceConfig::new(1280, 1280, 0.0)?,
            })
        }
        "orbits" => Ok(SceneBundle {
            scene: Box::new(OrbitsScene::new(OrbitsParams::from_toml(params)?)),
            config: SurfaceConfig::new(800, 600, 0.0)?,
        }),
        "palette" => Ok(SceneBundle {
            scene: Box::new(PaletteScene::new()),
            config: SurfaceConfig::new(1066, 600, 2.2)?,
        }),
        "uv" => Ok(SceneBundle {
            scene: Box::new(UvScene),
            config: SurfaceConfig::new(1000, 563, 2.2)?,
        }),
        "mosaic" => Ok(SceneBundle {
            scene: Box::new(MosaicScene::from_toml(params)?),
            config: SurfaceConfig::new(1000, 563, 2.2)?,
        }),
        other => Err(GlimmerError::SceneNotFound(other.to_string())),
    }
}

/// Build the bundle a scene file describes, applying its surface overrides.
pub fn from_file(file: &SceneFile) -> Result<SceneBundle> {
    let mut bundle = build(&file.scene.name, &file.params)?;
    let [mut width, mut height] = [bundle.config.width, bundle.config.height];
    if let Some([w, h]) = file.scene.resolution {
        width = w;
        height = h;
    }
    let gamma = file.scene.gamma.unwrap_or(bundle.config.gamma);
    bundle.config = SurfaceConfig::new(width, height, gamma)?;
    Ok(bundle)
}

/// Load a scene TOML file from disk and build its bundle.
pub fn load_file(path: &Path) -> Result<SceneBundle> {
    let file = SceneFile::load(path)?;
    from_file(&file)
}

/// Resolve a command-line scene argument: a built-in name, or a path to a
/// scene TOML file.
pub fn resolve(arg: &str) -> Result<SceneBundle> {
    if BUILT_IN.iter().any(|(name, _)| *name == arg) {
        build(arg, &toml::value::Table::new())
    } else if Path::new(arg).exists() {
        load_file(Path::new(arg))
    } else {
        Err(GlimmerError::SceneNotFound(arg.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_built_in_builds() {
        for (name, _) in BUILT_IN {
            let bundle = build(name, &toml::value::Table::new()).unwrap();
            assert_eq!(bundle.scene.name(), *name);
            assert!(bundle.config.width > 0 && bundle.config.height > 0);
        }
    }

    #[test]
    fn unknown_scene_is_an_error() {
        let err = build("aurora", &toml::value::Table::new()).unwrap_err();
        assert!(matches!(err, GlimmerError::SceneNotFound(_)));
    }

    #[test]
    fn scene_file_overrides_the_surface() {
        let file = SceneFile::parse(
            r#"
[scene]
name = "rings"
resolution = [320, 200]
gamma = 1.0

[params]
speed = 0.5
"#,
        )
        .unwrap();
        let bundle = from_file(&file).unwrap();
        assert_eq!(bundle.config.width, 320);
        assert_eq!(bundle.config.height, 200);
        assert!((bundle.config.gamma - 1.0).abs() < 1e-6);
    }

    #[test]
    fn scene_file_keeps_scene_defaults_when_silent() {
        let file = SceneFile::parse("[scene]\nname = \"fireflies\"").unwrap();
        let bundle = from_file(&file).unwrap();
        assert_eq!(bundle.config.width, 1280);
        assert_eq!(bundle.config.height, 1280);
        assert!((bundle.config.gamma - 0.0).abs() < 1e-6);
    }

    #[test]
    fn bad_params_fail_at_build_time() {
        let table: toml::value::Table = toml::from_str("decay = 2.0").unwrap();
        assert!(build("fireflies", &table).is_err());
    }

    #[test]
    fn resolve_prefers_built_in_names() {
        assert!(resolve("uv").is_ok());
        let err = resolve("definitely-not-a-scene").unwrap_err();
        assert!(matches!(err, GlimmerError::SceneNotFound(_)));
    }
}
