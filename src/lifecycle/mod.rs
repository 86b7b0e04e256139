//! Orchestration layer: spawns the session actors, wires their collaborators and shuts
//! them down.

pub mod food_system;
pub mod screen;
pub mod tracing;

pub use food_system::*;
pub use screen::*;
