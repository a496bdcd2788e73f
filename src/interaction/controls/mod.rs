use bevy::prelude::*;

use crate::core::system::system_order::DropInputSet;
use crate::physics::drop::{DropEvent, DropSimulator, HEIGHT_STEP};

/// What a key press asks the simulator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropCommand {
    Raise,
    Lower,
    NextPlanet,
    PreviousPlanet,
    Release,
}

/// Key → command table. Arrows and Space, as on the demo's instruction line.
#[derive(Resource, Debug, Clone)]
pub struct DropKeyBindings(pub Vec<(KeyCode, DropCommand)>);

impl Default for DropKeyBindings {
    fn default() -> Self {
        Self(vec![
            (KeyCode::ArrowUp, DropCommand::Raise),
            (KeyCode::ArrowDown, DropCommand::Lower),
            (KeyCode::ArrowRight, DropCommand::NextPlanet),
            (KeyCode::ArrowLeft, DropCommand::PreviousPlanet),
            (KeyCode::Space, DropCommand::Release),
        ])
    }
}

pub struct DropControlsPlugin;

impl Plugin for DropControlsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DropKeyBindings>()
            .add_systems(Update, drop_key_input_system.in_set(DropInputSet));
    }
}

pub fn apply_command(sim: &mut DropSimulator, command: DropCommand) -> Option<DropEvent> {
    match command {
        DropCommand::Raise => sim.set_height(HEIGHT_STEP),
        DropCommand::Lower => sim.set_height(-HEIGHT_STEP),
        DropCommand::NextPlanet => Some(sim.cycle_planet(1)),
        DropCommand::PreviousPlanet => Some(sim.cycle_planet(-1)),
        DropCommand::Release => Some(sim.release()),
    }
}

pub fn drop_key_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<DropKeyBindings>,
    mut sim: ResMut<DropSimulator>,
    mut events: EventWriter<DropEvent>,
) {
    for &(key, command) in &bindings.0 {
        if !keys.just_pressed(key) {
            continue;
        }
        if let Some(ev) = apply_command(&mut sim, command) {
            events.write(ev);
        }
    }
}
