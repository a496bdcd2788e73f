// Exits the app after `window.autoClose` seconds (0 or negative = never).
// Used for unattended smoke runs; the final simulator state is logged on the way out.

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::physics::drop::DropSimulator;

#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_auto_close)
            .add_systems(Update, tick_auto_close);
    }
}

fn arm_auto_close(mut commands: Commands, cfg: Option<Res<GameConfig>>) {
    let secs = cfg.map(|c| c.window.auto_close).unwrap_or(0.0);
    if secs > 0.0 {
        info!(seconds = secs, "AutoClose: will exit after {secs} seconds");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn tick_auto_close(
    time: Res<Time>,
    timer: Option<ResMut<AutoCloseTimer>>,
    sim: Option<Res<DropSimulator>>,
    mut exit: EventWriter<AppExit>,
) {
    let Some(mut timer) = timer else {
        return;
    };
    if !timer.tick(time.delta()).just_finished() {
        return;
    }
    if let Some(sim) = sim {
        let s = sim.state();
        info!(
            "AutoClose: exiting on {} phase={:?} altitude={:.2} m",
            s.selected_planet,
            s.phase(),
            s.altitude
        );
    }
    exit.write(AppExit::Success);
}
