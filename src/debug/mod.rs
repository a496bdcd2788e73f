//! Debug module: feature gated drop telemetry logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
pub mod stats;

#[cfg(feature = "debug")]
pub use stats::DropStats;

use bevy::prelude::*;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    #[cfg(feature = "debug")]
    fn build(&self, app: &mut App) {
        use crate::core::system::system_order::PresentationSet;
        use logging::{debug_logging_system, DebugLogState};
        use stats::collect_drop_stats;

        app.init_resource::<DropStats>()
            .init_resource::<DebugLogState>()
            .add_systems(
                Update,
                (collect_drop_stats, debug_logging_system)
                    .chain()
                    .in_set(PresentationSet),
            );
    }

    #[cfg(not(feature = "debug"))]
    fn build(&self, _app: &mut App) {}
}
