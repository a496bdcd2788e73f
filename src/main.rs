use std::path::Path;

use anyhow::{bail, Result};
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;

use gravity_drop::app::assets::ensure_ball_sprite;
use gravity_drop::{ConfigReport, GameConfig, GamePlugin};

const CONFIG_LAYERS: [&str; 2] = ["assets/config/game.ron", "assets/config/game.local.ron"];
const ASSET_DIR: &str = "assets";

fn main() -> Result<()> {
    // Layered config: base file, then optional local overrides. Falls back to defaults.
    let (cfg, used, mut issues) = GameConfig::load_layered(CONFIG_LAYERS);
    issues.extend(cfg.validate());

    // The window is useless without the ball; fail before it opens.
    ensure_ball_sprite(Path::new(ASSET_DIR), &cfg.ball.sprite)?;

    let level = cfg.log.level.parse::<Level>().unwrap_or(Level::INFO);
    let exit = App::new()
        .insert_resource(cfg.clone())
        .insert_resource(ConfigReport { used, issues })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: cfg.window.title.clone(),
                        resolution: (cfg.window.width, cfg.window.height).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level,
                    filter: cfg.log.filter.clone(),
                    ..default()
                }),
        )
        .add_plugins(GamePlugin)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("app exited with error code {code}"),
    }
}
