pub mod config;
pub mod planet;
pub mod system;
pub mod variant;
