use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::physics::drop::{DropEvent, DropSimulator};

/// Installs the simulator resource, the 60 Hz fixed clock and the advance system.
pub struct DropPhysicsPlugin;

impl Plugin for DropPhysicsPlugin {
    fn build(&self, app: &mut App) {
        let (sim, hz) = match app.world().get_resource::<GameConfig>() {
            Some(cfg) => (simulator_from_config(cfg), cfg.simulation.tick_hz),
            None => (DropSimulator::default(), 60.0),
        };
        app.insert_resource(sim)
            .insert_resource(Time::<Fixed>::from_hz(hz.clamp(1.0, 1000.0)))
            .add_event::<DropEvent>()
            .add_systems(FixedUpdate, advance_drop)
            .add_systems(Update, log_drop_events);
    }
}

pub fn simulator_from_config(cfg: &GameConfig) -> DropSimulator {
    DropSimulator::new(
        cfg.simulation.variant(),
        cfg.simulation.planet(),
        cfg.simulation.initial_height,
    )
}

/// One simulator step per fixed tick. Skipped at rest so the resource only reads as
/// changed when something moved.
pub fn advance_drop(
    time: Res<Time<Fixed>>,
    mut sim: ResMut<DropSimulator>,
    mut events: EventWriter<DropEvent>,
) {
    if !sim.is_falling() {
        return;
    }
    if let Some(ev) = sim.advance(time.delta_secs()) {
        events.write(ev);
    }
}

fn log_drop_events(mut events: EventReader<DropEvent>) {
    for ev in events.read() {
        match *ev {
            DropEvent::Released { altitude, planet } => {
                info!("DROP released from {altitude:.2} m on {planet}");
            }
            DropEvent::Bounced {
                impact_velocity,
                rebound_velocity,
            } => {
                debug!("DROP bounce impact={impact_velocity:.2} m/s rebound={rebound_velocity:.2} m/s");
            }
            DropEvent::Settled {
                impact_velocity,
                airborne_secs,
            } => {
                info!("DROP settled after {airborne_secs:.2}s (last impact {impact_velocity:.2} m/s)");
            }
            DropEvent::PlanetChanged { from, to } => {
                info!(
                    "PLANET {from} -> {to} (g = {} m/s²)",
                    to.profile().gravity
                );
            }
            DropEvent::HeightChanged { height } => {
                debug!("HEIGHT set to {height:.1} m");
            }
        }
    }
}
