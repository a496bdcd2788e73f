pub mod app;
pub mod core;
pub mod debug;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use app::game::{ConfigReport, GamePlugin};
pub use crate::core::config::{config::GameConfig, config::WindowConfig};
pub use crate::core::planet::{PlanetId, PlanetProfile, PLANETS};
pub use crate::core::variant::SimulationVariant;
pub use physics::drop::{BounceModel, DropEvent, DropPhase, DropSimulator, DropState};
