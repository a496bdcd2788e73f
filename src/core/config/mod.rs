pub mod config;

pub use config::{BallConfig, GameConfig, LogConfig, SceneConfig, SimulationConfig, WindowConfig};
