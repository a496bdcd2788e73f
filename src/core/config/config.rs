use bevy::log::Level;
use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::core::planet::PlanetId;
use crate::core::variant::SimulationVariant;
use crate::physics::drop::{MAX_DROP_HEIGHT, MIN_DROP_HEIGHT};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Realistic Gravity Simulation".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// "extended" or "classic".
    pub variant: String,
    pub tick_hz: f64,
    pub pixels_per_meter: f32,
    pub initial_height: f32,
    pub initial_planet: String,
}
impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            variant: SimulationVariant::Extended.as_str().into(),
            tick_hz: 60.0,
            pixels_per_meter: 50.0,
            initial_height: 2.0,
            initial_planet: "Earth".into(),
        }
    }
}
impl SimulationConfig {
    /// Unknown names fall back to the default variant (reported by `validate`).
    pub fn variant(&self) -> SimulationVariant {
        SimulationVariant::parse(&self.variant).unwrap_or_default()
    }

    pub fn planet(&self) -> PlanetId {
        PlanetId::by_name(&self.initial_planet).unwrap_or(PlanetId::EARTH)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    /// Image path relative to the `assets/` directory.
    pub sprite: String,
    /// Drawn width and height in pixels.
    pub size: f32,
}
impl Default for BallConfig {
    fn default() -> Self {
        Self {
            sprite: "football.png".into(),
            size: 40.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub ground_height: f32,
    pub font_size: f32,
}
impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ground_height: 50.0,
            font_size: 20.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// tracing env-filter directives appended to the level.
    pub filter: String,
    pub level: String,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "wgpu=error,naga=warn".into(),
            level: "info".into(),
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub simulation: SimulationConfig,
    pub ball: BallConfig,
    pub scene: SceneConfig,
    pub log: LogConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Merge every readable file in order (later keys win) and deserialize the result.
    /// Returns the config, the paths that were applied and any read/parse errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let existing = bm.iter_mut().find(|(ek, _)| **ek == k).map(|(_, ev)| ev);
                        if let Some(ev) = existing {
                            merge_value(ev, v);
                        } else {
                            bm.insert(k, v);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        match &mut merged {
                            Some(cur) => merge_value(cur, val),
                            None => merged = Some(val),
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        }
        if SimulationVariant::parse(&self.simulation.variant).is_none() {
            w.push(format!(
                "simulation.variant '{}' unknown (expected 'extended' or 'classic'); using '{}'",
                self.simulation.variant,
                SimulationVariant::default().as_str()
            ));
        }
        if PlanetId::by_name(&self.simulation.initial_planet).is_none() {
            w.push(format!(
                "simulation.initial_planet '{}' not in the planet table; starting on Earth",
                self.simulation.initial_planet
            ));
        }
        if !(1.0..=1000.0).contains(&self.simulation.tick_hz) {
            w.push(format!(
                "simulation.tick_hz {} outside 1..=1000",
                self.simulation.tick_hz
            ));
        }
        if self.simulation.pixels_per_meter <= 0.0 {
            w.push("simulation.pixels_per_meter must be > 0".into());
        }
        if !(MIN_DROP_HEIGHT..=MAX_DROP_HEIGHT).contains(&self.simulation.initial_height) {
            w.push(format!(
                "simulation.initial_height {} outside {MIN_DROP_HEIGHT}..={MAX_DROP_HEIGHT}; clamped",
                self.simulation.initial_height
            ));
        }
        let top_of_drop = self.scene.ground_height
            + self.ball.size
            + MAX_DROP_HEIGHT * self.simulation.pixels_per_meter;
        if top_of_drop > self.window.height {
            w.push(format!(
                "a {MAX_DROP_HEIGHT} m drop needs {top_of_drop} px but the window is {} px tall",
                self.window.height
            ));
        }
        if self.scene.ground_height < 0.0 || self.scene.ground_height >= self.window.height {
            w.push(format!(
                "scene.ground_height {} must be within 0..window.height",
                self.scene.ground_height
            ));
        }
        if self.ball.size <= 0.0 {
            w.push("ball.size must be > 0".into());
        }
        if self.ball.sprite.trim().is_empty() {
            w.push("ball.sprite is empty".into());
        }
        if self.scene.font_size <= 0.0 {
            w.push("scene.font_size must be > 0".into());
        }
        if self.log.level.parse::<Level>().is_err() {
            w.push(format!(
                "log.level '{}' unknown (expected trace, debug, info, warn or error); using info",
                self.log.level
            ));
        }
        w
    }
}
