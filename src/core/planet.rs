//! Planet table: the ordered list of gravity sources the drop can be run under.
//!
//! The table is immutable and indexed by position; cycling wraps modulo its length.

use bevy::prelude::*;

/// Gravity source and its rendering metadata.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetProfile {
    pub name: &'static str,
    /// Surface gravity in m/s².
    pub gravity: f32,
    /// kg/m³. Metadata only; the integrator never applies drag.
    pub air_density: f32,
    pub sky: [u8; 3],
    pub ground: [u8; 3],
}

impl PlanetProfile {
    pub fn sky_color(&self) -> Color {
        Color::srgb_u8(self.sky[0], self.sky[1], self.sky[2])
    }

    pub fn ground_color(&self) -> Color {
        Color::srgb_u8(self.ground[0], self.ground[1], self.ground[2])
    }
}

pub const PLANETS: [PlanetProfile; 5] = [
    PlanetProfile {
        name: "Earth",
        gravity: 9.8,
        air_density: 1.225,
        sky: [135, 206, 250],
        ground: [0, 128, 0],
    },
    PlanetProfile {
        name: "Moon",
        gravity: 1.62,
        air_density: 0.0,
        sky: [25, 25, 112],
        ground: [105, 105, 105],
    },
    PlanetProfile {
        name: "Mars",
        gravity: 3.71,
        air_density: 0.02,
        sky: [250, 128, 114],
        ground: [139, 69, 19],
    },
    PlanetProfile {
        name: "Jupiter",
        gravity: 24.79,
        air_density: 0.16,
        sky: [255, 228, 196],
        ground: [210, 105, 30],
    },
    PlanetProfile {
        name: "Sun",
        gravity: 274.0,
        air_density: 0.0,
        sky: [255, 140, 0],
        ground: [255, 223, 0],
    },
];

/// Position in [`PLANETS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlanetId(usize);

impl PlanetId {
    pub const EARTH: Self = Self(0);
    pub const MOON: Self = Self(1);
    pub const MARS: Self = Self(2);
    pub const JUPITER: Self = Self(3);
    pub const SUN: Self = Self(4);

    /// Case-insensitive lookup by planet name.
    pub fn by_name(name: &str) -> Option<Self> {
        PLANETS
            .iter()
            .position(|p| p.name.eq_ignore_ascii_case(name.trim()))
            .map(Self)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn profile(self) -> &'static PlanetProfile {
        &PLANETS[self.0]
    }

    /// Move `step` places through the table, wrapping in both directions.
    pub fn cycled(self, step: isize) -> Self {
        let len = PLANETS.len() as isize;
        Self((self.0 as isize + step).rem_euclid(len) as usize)
    }

    pub fn all() -> impl Iterator<Item = PlanetId> {
        (0..PLANETS.len()).map(Self)
    }
}

impl std::fmt::Display for PlanetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.profile().name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_and_gravity() {
        let names: Vec<_> = PLANETS.iter().map(|p| p.name).collect();
        assert_eq!(names, ["Earth", "Moon", "Mars", "Jupiter", "Sun"]);
        assert_eq!(PlanetId::EARTH.profile().gravity, 9.8);
        assert_eq!(PlanetId::MOON.profile().gravity, 1.62);
        assert_eq!(PlanetId::MARS.profile().gravity, 3.71);
        assert_eq!(PlanetId::JUPITER.profile().gravity, 24.79);
        assert_eq!(PlanetId::SUN.profile().gravity, 274.0);
    }

    #[test]
    fn cycling_wraps_both_ways() {
        assert_eq!(PlanetId::SUN.cycled(1), PlanetId::EARTH);
        assert_eq!(PlanetId::EARTH.cycled(-1), PlanetId::SUN);
        assert_eq!(PlanetId::MARS.cycled(5), PlanetId::MARS);
        assert_eq!(PlanetId::MOON.cycled(-7), PlanetId::SUN);
        for id in PlanetId::all() {
            assert_eq!(id.cycled(1).cycled(-1), id);
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(PlanetId::by_name("jupiter"), Some(PlanetId::JUPITER));
        assert_eq!(PlanetId::by_name(" Moon "), Some(PlanetId::MOON));
        assert_eq!(PlanetId::by_name("Pluto"), None);
        assert_eq!(PlanetId::SUN.to_string(), "Sun");
    }
}
