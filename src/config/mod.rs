/// Main configuration module.
///
/// Re-exports the gameplay tuning constants.
pub mod game;
