//! Core game engine: board model, enemy progression, combat systems, and
//! the turn resolver, plus a terminal demo shell.

pub mod demo;
pub mod enemies;
pub mod game_loop;
pub mod grid;
pub mod state;
pub mod systems;
pub mod types;
