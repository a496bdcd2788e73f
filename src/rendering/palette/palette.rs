use bevy::prelude::*;

use crate::core::planet::PlanetId;
use crate::core::variant::SimulationVariant;

pub const SUN_DISC: [u8; 3] = [255, 223, 0];
pub const SUN_RAY: [u8; 3] = [255, 200, 0];
pub const CLOUD: [u8; 3] = [240, 240, 240];
pub const CRATER: [u8; 3] = [80, 80, 80];

/// Ground colours of the classic variant, in planet table order.
const CLASSIC_GROUND: [[u8; 3]; 5] = [
    [0, 128, 0],
    [192, 192, 192],
    [188, 39, 50],
    [210, 105, 30],
    [255, 200, 0],
];

#[inline]
pub fn rgb(c: [u8; 3]) -> Color {
    Color::srgb_u8(c[0], c[1], c[2])
}

pub fn sky_color(planet: PlanetId) -> Color {
    planet.profile().sky_color()
}

pub fn ground_color(variant: SimulationVariant, planet: PlanetId) -> Color {
    match variant {
        SimulationVariant::Classic => rgb(CLASSIC_GROUND[planet.index()]),
        SimulationVariant::Extended => planet.profile().ground_color(),
    }
}

/// HUD text colour: white against the dark lunar sky, black elsewhere.
pub fn text_color(planet: PlanetId) -> Color {
    if planet == PlanetId::MOON {
        Color::WHITE
    } else {
        Color::BLACK
    }
}
