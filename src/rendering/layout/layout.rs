//! Screen geometry. Drawing constants are given in screen space (origin top-left, y down)
//! and converted to Bevy world space (origin centre, y up) here.

use bevy::prelude::*;

use crate::core::config::GameConfig;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    pub size: Vec2,
    pub ground_height: f32,
    pub pixels_per_meter: f32,
    pub ball_size: f32,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl SceneLayout {
    pub fn from_config(cfg: &GameConfig) -> Self {
        Self {
            size: Vec2::new(cfg.window.width, cfg.window.height),
            ground_height: cfg.scene.ground_height,
            pixels_per_meter: cfg.simulation.pixels_per_meter,
            ball_size: cfg.ball.size,
        }
    }

    /// Screen y of the ground band's upper edge.
    pub fn ground_top(&self) -> f32 {
        self.size.y - self.ground_height
    }

    /// Screen position of the ball centre when its bottom is `altitude` metres above ground.
    pub fn ball_screen_center(&self, altitude: f32) -> Vec2 {
        Vec2::new(
            self.size.x / 2.0,
            self.ground_top() - self.ball_size / 2.0 - altitude * self.pixels_per_meter,
        )
    }

    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x - self.size.x / 2.0, self.size.y / 2.0 - screen.y)
    }

    /// World-space centre of the screen rectangle at `top_left` with `size`.
    pub fn rect_center_world(&self, top_left: Vec2, size: Vec2) -> Vec2 {
        self.to_world(top_left + size / 2.0)
    }

    pub fn ground_band_size(&self) -> Vec2 {
        Vec2::new(self.size.x, self.ground_height)
    }

    pub fn ground_band_center_world(&self) -> Vec2 {
        self.rect_center_world(Vec2::new(0.0, self.ground_top()), self.ground_band_size())
    }
}
