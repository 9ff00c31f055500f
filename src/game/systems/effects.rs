//! Match payout calculation.
//!
//! One match pass produces one `MatchEffect` per tile kind present in the
//! match set. The per-kind formulas are decoupled so a single pass can
//! simultaneously damage the enemy, heal the player, and grant mana/shield.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::config::game::{BASE_CRIT_CHANCE, COMBO_STEP, CRIT_MULTIPLIER};
use crate::game::types::{Board, TileKind, TILE_KINDS};

/// Aggregated payout for one tile kind within a single match pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEffect {
    pub kind: TileKind,
    pub match_count: u32,
    pub damage: i32,
    pub heal: i32,
    pub mana: i32,
    pub shield: i32,
    pub is_crit: bool,
}

/// Convert a match set into per-kind combat effects.
///
/// `combo` is the cascade depth before this step resolves: the first match
/// of a move uses a multiplier of 1.0. A kind crits when it is Diamond, when
/// the one-shot `crit_active` flag is set, or on a `BASE_CRIT_CHANCE` roll.
/// Kinds are visited in declaration order so a seeded RNG replays the same
/// rolls.
pub fn calculate_effects(
    board: &Board,
    matched: &HashSet<u64>,
    combo: u32,
    crit_active: bool,
    rng: &mut impl Rng,
) -> Vec<MatchEffect> {
    let mut by_kind: HashMap<TileKind, u32> = HashMap::new();
    for row in board {
        for tile in row {
            if matched.contains(&tile.id) {
                *by_kind.entry(tile.kind).or_insert(0) += 1;
            }
        }
    }

    let combo_mult = 1.0 + f64::from(combo) * COMBO_STEP;
    let mut effects = Vec::with_capacity(by_kind.len());

    for kind in TILE_KINDS {
        let Some(&count) = by_kind.get(&kind) else {
            continue;
        };

        let is_crit =
            kind == TileKind::Diamond || crit_active || rng.random::<f64>() < BASE_CRIT_CHANCE;
        let crit_mult = if is_crit { CRIT_MULTIPLIER } else { 1.0 };
        let n = f64::from(count);

        let mut eff = MatchEffect {
            kind,
            match_count: count,
            damage: 0,
            heal: 0,
            mana: 0,
            shield: 0,
            is_crit,
        };

        match kind {
            TileKind::Sword => {
                eff.damage = (15.0 * n * combo_mult * crit_mult).floor() as i32;
            }
            TileKind::Heart => {
                // Healing is neither combo nor crit scaled.
                eff.heal = (12.0 * n).floor() as i32;
            }
            TileKind::Shield => {
                eff.shield = (8.0 * n).floor() as i32;
                eff.mana = (3.0 * n).floor() as i32;
            }
            TileKind::Star => {
                eff.mana = (12.0 * n).floor() as i32;
            }
            TileKind::Moon => {
                eff.damage = (8.0 * n * combo_mult * crit_mult).floor() as i32;
                eff.mana = (6.0 * n).floor() as i32;
            }
            TileKind::Diamond => {
                // Always critical, multiplier fixed regardless of the roll.
                eff.damage = (20.0 * n * combo_mult * CRIT_MULTIPLIER).floor() as i32;
            }
        }

        effects.push(eff);
    }

    effects
}
