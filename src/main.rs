//! Main entry point for the match-3 battle demo.
//!
//! Initializes logging and hands control to the interactive terminal loop.
//! The engine itself lives under `game` and is presentation-agnostic.

pub mod config;
mod game;

fn main() {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    game::demo::game_loop::run_game_loop();
}
