//! Classic grid snake: a tick-driven state machine with thin terminal
//! rendering and input around it.
//!
//! The [`game::GameState`] owns all mutable game data. The renderer reads
//! only [`game::Snapshot`]s and the input mapper only produces requests,
//! so every rule about movement, growth, and collisions lives in one place.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
