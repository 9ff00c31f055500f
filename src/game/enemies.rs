//! Enemy roster and wave scaling.

use serde::{Serialize, Deserialize};

use crate::config::game::{ENEMIES_PER_WAVE, WAVE_SCALING};

/// Static enemy archetype, before wave scaling.
#[derive(Debug, Clone, Copy)]
pub struct EnemyDef {
    pub name: &'static str,
    pub title: &'static str,
    pub base_hp: i32,
    pub base_damage: i32,
}

/// The fixed roster, fought in order within each wave.
pub const ENEMY_ROSTER: [EnemyDef; ENEMIES_PER_WAVE] = [
    EnemyDef { name: "Goblin Scout", title: "Weakling", base_hp: 80, base_damage: 12 },
    EnemyDef { name: "Orc Warrior", title: "Berserker", base_hp: 130, base_damage: 18 },
    EnemyDef { name: "Dark Mage", title: "Sorcerer", base_hp: 100, base_damage: 28 },
    EnemyDef { name: "Undead Knight", title: "Revenant", base_hp: 200, base_damage: 22 },
    EnemyDef { name: "Shadow Dragon", title: "Boss", base_hp: 280, base_damage: 35 },
];

/// A live enemy: wave-scaled stats plus its own HP pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub title: String,
    pub max_hp: i32,
    pub hp: i32,
    pub damage: i32,
    /// Cosmetic display level.
    pub level: u32,
}

/// Build the enemy for the given roster slot and wave.
///
/// HP and damage scale by `WAVE_SCALING^(wave-1)`, compounding per wave and
/// floored to integers. The slot index wraps on the roster length.
pub fn enemy_at(index: usize, wave: u32) -> Enemy {
    let def = &ENEMY_ROSTER[index % ENEMY_ROSTER.len()];
    let scale = WAVE_SCALING.powi(wave as i32 - 1);
    let max_hp = (f64::from(def.base_hp) * scale).floor() as i32;

    Enemy {
        name: def.name.to_string(),
        title: def.title.to_string(),
        max_hp,
        hp: max_hp,
        damage: (f64::from(def.base_damage) * scale).floor() as i32,
        level: (wave - 1) * ENEMIES_PER_WAVE as u32 + index as u32 + 1,
    }
}
