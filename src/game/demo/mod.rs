// Demo module for the game. Provides the interactive terminal loop and the
// board/state rendering it uses.
pub mod game_loop;
pub mod render;
