use bevy::prelude::*;

use super::stats::DropStats;
use crate::physics::drop::DropSimulator;

#[derive(Resource, Debug)]
pub struct DebugLogState {
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

impl Default for DebugLogState {
    fn default() -> Self {
        Self {
            log_interval: 0.25,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

/// Periodic state line while the ball is in the air.
pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugLogState>,
    sim: Res<DropSimulator>,
    stats: Res<DropStats>,
) {
    state.frame_counter += 1;
    state.time_accum += time.delta_secs();
    if state.time_accum < state.log_interval {
        return;
    }
    state.time_accum = 0.0;
    if !sim.is_falling() {
        return;
    }
    let s = sim.state();
    info!(
        "SIM frame={} t={:.3}s planet={} alt={:.3} v={:.3} airborne={:.2}s bounces={} peak_impact={:.2}",
        state.frame_counter,
        time.elapsed_secs(),
        s.selected_planet,
        s.altitude,
        s.velocity,
        s.airborne_secs,
        stats.bounces_this_drop,
        stats.peak_impact
    );
}
