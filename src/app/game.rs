use bevy::prelude::*;

use crate::core::system::system_order::{DropInputSet, PresentationSet};
use crate::debug::DebugPlugin;
use crate::interaction::controls::DropControlsPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::physics::plugin::DropPhysicsPlugin;
use crate::rendering::RenderingPlugin;

/// Where the config came from and what was wrong with it. Logged once at startup.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigReport {
    pub used: Vec<String>,
    pub issues: Vec<String>,
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (DropInputSet, PresentationSet.after(DropInputSet)),
        )
        .init_resource::<ConfigReport>()
        .add_plugins((
            DropPhysicsPlugin,
            DropControlsPlugin,
            RenderingPlugin,
            DebugPlugin,
            AutoClosePlugin,
        ))
        .add_systems(Startup, log_config_report);
    }
}

fn log_config_report(report: Res<ConfigReport>) {
    if report.used.is_empty() {
        info!("Config: no files applied, using defaults");
    } else {
        info!("Config layers applied: {}", report.used.join(", "));
    }
    for issue in &report.issues {
        warn!("Config: {issue}");
    }
}
