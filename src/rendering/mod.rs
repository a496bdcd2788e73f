pub mod ball;
pub mod hud;
pub mod layout;
pub mod palette;
pub mod scenery;

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::rendering::layout::SceneLayout;

/// Camera, scenery, ball sprite and HUD.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        let (layout, planet) = match app.world().get_resource::<GameConfig>() {
            Some(cfg) => (SceneLayout::from_config(cfg), cfg.simulation.planet()),
            None => (SceneLayout::default(), Default::default()),
        };
        app.insert_resource(layout)
            .insert_resource(ClearColor(palette::palette::sky_color(planet)))
            .add_plugins((
                scenery::scenery::SceneryPlugin,
                ball::ball::BallSpritePlugin,
                hud::hud::HudPlugin,
            ))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("DropCamera")));
}
