use bevy::prelude::*;

use crate::physics::drop::DropEvent;

/// Running tallies of the current drop, rebuilt from the event stream.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct DropStats {
    pub drops: u32,
    pub bounces_this_drop: u32,
    pub last_impact: f32,
    pub peak_impact: f32,
    pub last_airborne_secs: f32,
}

impl DropStats {
    pub fn record(&mut self, ev: &DropEvent) {
        match *ev {
            DropEvent::Released { .. } => {
                self.drops += 1;
                self.bounces_this_drop = 0;
                self.peak_impact = 0.0;
            }
            DropEvent::Bounced {
                impact_velocity, ..
            } => {
                self.bounces_this_drop += 1;
                self.last_impact = impact_velocity;
                self.peak_impact = self.peak_impact.max(impact_velocity);
            }
            DropEvent::Settled {
                impact_velocity,
                airborne_secs,
            } => {
                self.last_impact = impact_velocity;
                self.peak_impact = self.peak_impact.max(impact_velocity);
                self.last_airborne_secs = airborne_secs;
            }
            DropEvent::PlanetChanged { .. } | DropEvent::HeightChanged { .. } => {}
        }
    }
}

pub fn collect_drop_stats(mut events: EventReader<DropEvent>, mut stats: ResMut<DropStats>) {
    for ev in events.read() {
        stats.record(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::planet::PlanetId;

    #[test]
    fn release_resets_per_drop_tallies() {
        let mut stats = DropStats::default();
        stats.record(&DropEvent::Released {
            altitude: 2.0,
            planet: PlanetId::EARTH,
        });
        stats.record(&DropEvent::Bounced {
            impact_velocity: 6.2,
            rebound_velocity: -4.3,
        });
        stats.record(&DropEvent::Bounced {
            impact_velocity: 4.3,
            rebound_velocity: -3.0,
        });
        assert_eq!(stats.bounces_this_drop, 2);
        assert_eq!(stats.peak_impact, 6.2);
        assert_eq!(stats.last_impact, 4.3);

        stats.record(&DropEvent::Released {
            altitude: 1.0,
            planet: PlanetId::MOON,
        });
        assert_eq!(stats.drops, 2);
        assert_eq!(stats.bounces_this_drop, 0);
        assert_eq!(stats.peak_impact, 0.0);
    }
}
