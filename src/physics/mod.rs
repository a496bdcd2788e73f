pub mod drop;
pub mod plugin;

pub use drop::{BounceModel, DropEvent, DropPhase, DropSimulator, DropState};
pub use plugin::DropPhysicsPlugin;
