//! Drop simulator: one ball, one axis, one planet at a time.
//!
//! Velocity is positive downward. `altitude` is the height of the ball's bottom above the
//! ground plane in metres. The simulator is stepped once per fixed tick and reports what
//! happened during the step as a [`DropEvent`].

use bevy::prelude::*;

use crate::core::planet::PlanetId;
use crate::core::variant::SimulationVariant;

/// Fraction of impact speed kept on every bounce.
pub const RESTITUTION: f32 = 0.7;
/// Extra damping applied to a rebound that does not come to rest (extended variant).
pub const GROUND_FRICTION: f32 = 0.85;
pub const MIN_DROP_HEIGHT: f32 = 0.1;
pub const MAX_DROP_HEIGHT: f32 = 10.0;
/// Height change per Up/Down key press.
pub const HEIGHT_STEP: f32 = 0.1;
pub const DEFAULT_DROP_HEIGHT: f32 = 2.0;

/// How the ground answers an impact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceModel {
    pub restitution: f32,
    /// Rebound speeds below this end the drop.
    pub rest_speed: f32,
    /// Multiplier applied to rebounds that keep bouncing.
    pub ground_friction: Option<f32>,
}

impl BounceModel {
    pub const CLASSIC: Self = Self {
        restitution: RESTITUTION,
        rest_speed: 1.0,
        ground_friction: None,
    };

    pub const EXTENDED: Self = Self {
        restitution: RESTITUTION,
        rest_speed: 0.5,
        ground_friction: Some(GROUND_FRICTION),
    };

    pub fn for_variant(variant: SimulationVariant) -> Self {
        match variant {
            SimulationVariant::Classic => Self::CLASSIC,
            SimulationVariant::Extended => Self::EXTENDED,
        }
    }

    /// A rebound slower than one step of gravity cannot leave the ground, so it rests too.
    pub fn rest_threshold(&self, gravity: f32, dt: f32) -> f32 {
        self.rest_speed.max(gravity * dt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPhase {
    /// Ball held at the configured height, waiting for release.
    Resting,
    /// Free fall or bouncing.
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropState {
    /// Configured release height. Clamped to [MIN_DROP_HEIGHT, MAX_DROP_HEIGHT] when set by
    /// the user, zero after the ball has come to rest on the ground.
    pub height_meters: f32,
    pub velocity: f32,
    pub is_falling: bool,
    pub selected_planet: PlanetId,
    pub altitude: f32,
    /// Seconds since the last release.
    pub airborne_secs: f32,
}

impl DropState {
    pub fn new(planet: PlanetId, height: f32) -> Self {
        let height = height.clamp(MIN_DROP_HEIGHT, MAX_DROP_HEIGHT);
        Self {
            height_meters: height,
            velocity: 0.0,
            is_falling: false,
            selected_planet: planet,
            altitude: height,
            airborne_secs: 0.0,
        }
    }

    pub fn phase(&self) -> DropPhase {
        if self.is_falling {
            DropPhase::Falling
        } else {
            DropPhase::Resting
        }
    }
}

/// Something that happened to the drop, reported by the simulator operations.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum DropEvent {
    Released { altitude: f32, planet: PlanetId },
    /// Ground contact that keeps bouncing. Velocities in m/s, positive downward.
    Bounced {
        impact_velocity: f32,
        rebound_velocity: f32,
    },
    /// Ground contact that ended the drop.
    Settled {
        impact_velocity: f32,
        airborne_secs: f32,
    },
    PlanetChanged { from: PlanetId, to: PlanetId },
    HeightChanged { height: f32 },
}

#[derive(Resource, Debug, Clone)]
pub struct DropSimulator {
    state: DropState,
    bounce: BounceModel,
}

impl Default for DropSimulator {
    fn default() -> Self {
        Self::new(
            SimulationVariant::default(),
            PlanetId::EARTH,
            DEFAULT_DROP_HEIGHT,
        )
    }
}

impl DropSimulator {
    pub fn new(variant: SimulationVariant, planet: PlanetId, height: f32) -> Self {
        Self::with_bounce_model(BounceModel::for_variant(variant), planet, height)
    }

    pub fn with_bounce_model(bounce: BounceModel, planet: PlanetId, height: f32) -> Self {
        Self {
            state: DropState::new(planet, height),
            bounce,
        }
    }

    pub fn state(&self) -> &DropState {
        &self.state
    }

    pub fn bounce_model(&self) -> BounceModel {
        self.bounce
    }

    pub fn planet(&self) -> PlanetId {
        self.state.selected_planet
    }

    pub fn gravity(&self) -> f32 {
        self.state.selected_planet.profile().gravity
    }

    pub fn is_falling(&self) -> bool {
        self.state.is_falling
    }

    pub fn phase(&self) -> DropPhase {
        self.state.phase()
    }

    /// Advance one fixed step of `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> Option<DropEvent> {
        let gravity = self.gravity();
        let s = &mut self.state;
        if !s.is_falling {
            s.altitude = s.height_meters;
            return None;
        }

        s.airborne_secs += dt;
        s.velocity += gravity * dt;
        s.altitude -= s.velocity * dt;
        if s.altitude > 0.0 {
            return None;
        }

        s.altitude = 0.0;
        let impact_velocity = s.velocity;
        s.velocity = -impact_velocity * self.bounce.restitution;

        if s.velocity.abs() < self.bounce.rest_threshold(gravity, dt) {
            s.is_falling = false;
            s.velocity = 0.0;
            s.height_meters = 0.0;
            return Some(DropEvent::Settled {
                impact_velocity,
                airborne_secs: s.airborne_secs,
            });
        }

        if let Some(friction) = self.bounce.ground_friction {
            s.velocity *= friction;
        }
        Some(DropEvent::Bounced {
            impact_velocity,
            rebound_velocity: s.velocity,
        })
    }

    /// Nudge the release height. Ignored while the ball is in the air.
    pub fn set_height(&mut self, delta: f32) -> Option<DropEvent> {
        if self.state.is_falling {
            return None;
        }
        // Kept on whole tenths so repeated steps do not drift.
        let height = ((self.state.height_meters + delta) * 10.0).round() / 10.0;
        let height = height.clamp(MIN_DROP_HEIGHT, MAX_DROP_HEIGHT);
        self.state.height_meters = height;
        self.state.altitude = height;
        Some(DropEvent::HeightChanged { height })
    }

    /// Select the planet `step` places away in the table. Takes effect mid-flight too.
    pub fn cycle_planet(&mut self, step: isize) -> DropEvent {
        let from = self.state.selected_planet;
        let to = from.cycled(step);
        self.state.selected_planet = to;
        DropEvent::PlanetChanged { from, to }
    }

    /// Start (or restart) free fall from the current altitude with zero velocity.
    pub fn release(&mut self) -> DropEvent {
        let s = &mut self.state;
        if !s.is_falling {
            s.altitude = s.height_meters;
        }
        s.is_falling = true;
        s.velocity = 0.0;
        s.airborne_secs = 0.0;
        DropEvent::Released {
            altitude: s.altitude,
            planet: s.selected_planet,
        }
    }

    /// Step until the drop comes to rest. Returns the number of steps taken, or `None` if
    /// still falling after `max_steps`.
    pub fn run_until_rest(&mut self, dt: f32, max_steps: usize) -> Option<usize> {
        for step in 1..=max_steps {
            if !self.state.is_falling {
                return Some(step - 1);
            }
            self.advance(dt);
        }
        (!self.state.is_falling).then_some(max_steps)
    }
}
