use bevy::prelude::*;

use crate::core::config::{BallConfig, GameConfig};
use crate::core::system::system_order::PresentationSet;
use crate::physics::drop::DropSimulator;
use crate::rendering::layout::SceneLayout;

const Z_BALL: f32 = 5.0;

/// The football sprite. Its bottom edge sits `altitude` metres above the ground band.
#[derive(Component)]
pub struct BallSprite;

pub struct BallSpritePlugin;

impl Plugin for BallSpritePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_ball)
            .add_systems(Update, sync_ball_sprite.in_set(PresentationSet));
    }
}

pub fn ball_translation(layout: &SceneLayout, altitude: f32) -> Vec3 {
    layout
        .to_world(layout.ball_screen_center(altitude))
        .extend(Z_BALL)
}

fn spawn_ball(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    cfg: Option<Res<GameConfig>>,
    layout: Res<SceneLayout>,
    sim: Res<DropSimulator>,
) {
    let path = cfg
        .map(|c| c.ball.sprite.clone())
        .unwrap_or_else(|| BallConfig::default().sprite);
    info!("Ball sprite: assets/{path}");
    commands.spawn((
        Sprite {
            image: asset_server.load(path),
            custom_size: Some(Vec2::splat(layout.ball_size)),
            ..default()
        },
        Transform::from_translation(ball_translation(&layout, sim.state().altitude)),
        BallSprite,
    ));
}

pub fn sync_ball_sprite(
    sim: Res<DropSimulator>,
    layout: Res<SceneLayout>,
    mut q: Query<&mut Transform, With<BallSprite>>,
) {
    if !sim.is_changed() && !layout.is_changed() {
        return;
    }
    let target = ball_translation(&layout, sim.state().altitude);
    for mut tf in &mut q {
        tf.translation = target;
    }
}
