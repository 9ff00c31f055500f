use serde::{Serialize, Deserialize};

use crate::config::game::{PLAYER_MAX_HP, PLAYER_START_MANA};

/// The six tile kinds. Each kind has its own payout when matched: attack,
/// heal, defense, mana, dual damage/mana, and guaranteed-crit attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Sword,
    Heart,
    Shield,
    Star,
    Moon,
    Diamond,
}

/// All kinds, in the order the effect calculator iterates them.
pub const TILE_KINDS: [TileKind; 6] = [
    TileKind::Sword,
    TileKind::Heart,
    TileKind::Shield,
    TileKind::Star,
    TileKind::Moon,
    TileKind::Diamond,
];

impl TileKind {
    /// Short role label used by the terminal renderer.
    pub fn label(self) -> &'static str {
        match self {
            TileKind::Sword => "ATK",
            TileKind::Heart => "HEAL",
            TileKind::Shield => "DEF",
            TileKind::Star => "MANA",
            TileKind::Moon => "SPEC",
            TileKind::Diamond => "CRIT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// A single board tile. The id is assigned once at spawn time and never
/// reused; it survives swaps and drops, so match sets track ids rather
/// than positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: u64,
    pub kind: TileKind,
    /// Marked for removal by the current resolution step.
    pub matched: bool,
    /// Spawned by the most recent refill. Presentation only.
    pub is_new: bool,
}

/// Row-major grid of tiles; row 0 is the top.
pub type Board = Vec<Vec<Tile>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Accepting player input.
    Playing,
    /// Mid-resolution, input locked.
    Processing,
    /// Terminal. Only a restart exits it.
    GameOver,
}

/// Semantic color category for a floating feedback event. The presentation
/// layer maps these to actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloatColor {
    Damage,
    CritDamage,
    EnemyHit,
    Heal,
    Shield,
    Mana,
}

/// Transient numeric/text feedback event with a normalized screen position.
/// Drained and expired by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatText {
    pub id: u64,
    pub text: String,
    pub color: FloatColor,
    pub x: f32,
    pub y: f32,
}

/// Player resource pools. Defense is an uncapped absorption pool consumed
/// by the next enemy attack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub hp: i32,
    pub mana: i32,
    pub defense: i32,
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            hp: PLAYER_MAX_HP,
            mana: PLAYER_START_MANA,
            defense: 0,
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}
