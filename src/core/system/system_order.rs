//! Central system ordering labels to make the frame sequence explicit.
//! 1. DropInputSet (Update): keyboard -> simulator operations
//! 2. FixedUpdate: simulator advance (60 Hz)
//! 3. PresentationSet (Update): scenery, sprite and HUD read the simulator
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct DropInputSet; // discrete control events applied to the simulator

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PresentationSet; // everything that only reads simulator state
