//! Game systems: effect calculation and combat bookkeeping.

pub mod combat;
pub mod effects;

pub use combat::*;
pub use effects::*;
