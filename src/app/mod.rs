pub mod assets;
pub mod game;
