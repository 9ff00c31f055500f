/// Game configuration constants.
///
/// This module defines the main gameplay parameters: board dimensions,
/// player resource caps, skill costs, and combat tuning values.

/// Side length of the square tile board.
pub const GRID_SIZE: usize = 6;

/// Maximum (and starting) player hit points.
pub const PLAYER_MAX_HP: i32 = 150;

/// Maximum player mana.
pub const PLAYER_MAX_MANA: i32 = 100;

/// Mana the player starts a run with.
pub const PLAYER_START_MANA: i32 = 20;

/// Number of enemies fought before the wave counter advances.
pub const ENEMIES_PER_WAVE: usize = 5;

/// Per-wave compounding multiplier applied to enemy HP and damage.
pub const WAVE_SCALING: f64 = 1.25;

/// Base probability that a matched kind crits.
pub const BASE_CRIT_CHANCE: f64 = 0.15;

/// Damage multiplier applied on a critical hit.
pub const CRIT_MULTIPLIER: f64 = 2.0;

/// Each cascade step within one move adds this much to the damage multiplier.
pub const COMBO_STEP: f64 = 0.3;

/// Mana cost of the Heal skill.
pub const HEAL_COST: i32 = 30;

/// HP restored by the Heal skill.
pub const HEAL_AMOUNT: i32 = 30;

/// Mana cost of the Critical Strike skill.
pub const CRIT_SKILL_COST: i32 = 40;
