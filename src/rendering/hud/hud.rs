//! Text overlay: two instruction lines, the planet line and, while the ball is in the
//! air, live height and velocity readouts.

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::PresentationSet;
use crate::core::variant::SimulationVariant;
use crate::physics::drop::{DropSimulator, DropState};
use crate::rendering::palette::palette::text_color;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudLine {
    HeightControl,
    PlanetControl,
    Planet,
    Altitude,
    Velocity,
}

impl HudLine {
    pub const ALL: [HudLine; 5] = [
        HudLine::HeightControl,
        HudLine::PlanetControl,
        HudLine::Planet,
        HudLine::Altitude,
        HudLine::Velocity,
    ];

    /// Pixels from the top of the window.
    pub fn top(&self) -> f32 {
        match self {
            HudLine::HeightControl => 10.0,
            HudLine::PlanetControl => 30.0,
            HudLine::Planet => 60.0,
            HudLine::Altitude => 90.0,
            HudLine::Velocity => 110.0,
        }
    }
}

pub fn hud_text(line: HudLine, variant: SimulationVariant, state: &DropState) -> String {
    let profile = state.selected_planet.profile();
    let classic = variant == SimulationVariant::Classic;
    match line {
        HudLine::HeightControl if classic => format!(
            "Press UP/DOWN to change height (h = {:.1}m).",
            state.height_meters
        ),
        HudLine::HeightControl => {
            format!("UP/DOWN: Change height (h = {:.1}m)", state.height_meters)
        }
        HudLine::PlanetControl if classic => {
            "Press LEFT/RIGHT to select planet. SPACE to drop ball.".to_string()
        }
        HudLine::PlanetControl => "LEFT/RIGHT: Change planet | SPACE: Drop ball".to_string(),
        HudLine::Planet if classic => format!(
            "Selected Planet: {} (g = {} m/s^2)",
            profile.name, profile.gravity
        ),
        HudLine::Planet => format!("Planet: {} (g = {} m/s²)", profile.name, profile.gravity),
        HudLine::Altitude if state.is_falling => {
            format!("Height above ground: {:.2} m", state.altitude.max(0.0))
        }
        HudLine::Velocity if state.is_falling => format!("Velocity: {:.2} m/s", state.velocity),
        HudLine::Altitude | HudLine::Velocity => String::new(),
    }
}

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud)
            .add_systems(Update, update_hud.in_set(PresentationSet));
    }
}

fn variant_of(cfg: Option<&GameConfig>) -> SimulationVariant {
    cfg.map(|c| c.simulation.variant()).unwrap_or_default()
}

fn spawn_hud(mut commands: Commands, cfg: Option<Res<GameConfig>>, sim: Res<DropSimulator>) {
    let font_size = cfg.as_ref().map(|c| c.scene.font_size).unwrap_or(20.0);
    let variant = variant_of(cfg.as_deref());
    let color = text_color(sim.planet());
    for line in HudLine::ALL {
        commands.spawn((
            Text::new(hud_text(line, variant, sim.state())),
            TextFont {
                font_size,
                ..default()
            },
            TextColor(color),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(line.top()),
                left: Val::Px(10.0),
                ..default()
            },
            line,
        ));
    }
}

pub fn update_hud(
    sim: Res<DropSimulator>,
    cfg: Option<Res<GameConfig>>,
    mut q: Query<(&HudLine, &mut Text, &mut TextColor)>,
) {
    if !sim.is_changed() {
        return;
    }
    let variant = variant_of(cfg.as_deref());
    let color = text_color(sim.planet());
    for (line, mut text, mut text_color) in &mut q {
        let s = hud_text(*line, variant, sim.state());
        if text.0 != s {
            text.0 = s;
        }
        if text_color.0 != color {
            text_color.0 = color;
        }
    }
}
