//! Combat bookkeeping: applying match payouts to the resource pools,
//! enemy counter-attacks, and enemy/wave progression.

use log::{debug, info};

use crate::config::game::{ENEMIES_PER_WAVE, PLAYER_MAX_HP, PLAYER_MAX_MANA, WAVE_SCALING};
use crate::game::enemies::enemy_at;
use crate::game::grid::generate_board;
use crate::game::state::GameState;
use crate::game::systems::effects::MatchEffect;
use crate::game::types::FloatColor;

/// Totals of one match pass across every kind present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectTotals {
    pub damage: i32,
    pub heal: i32,
    pub mana: i32,
    pub shield: i32,
    pub any_crit: bool,
}

pub fn sum_effects(effects: &[MatchEffect]) -> EffectTotals {
    let mut totals = EffectTotals {
        damage: 0,
        heal: 0,
        mana: 0,
        shield: 0,
        any_crit: false,
    };
    for eff in effects {
        totals.damage += eff.damage;
        totals.heal += eff.heal;
        totals.mana += eff.mana;
        totals.shield += eff.shield;
        totals.any_crit |= eff.is_crit;
    }
    totals
}

/// Apply one match pass worth of effects: damage the enemy, credit the
/// player pools (clamped to their caps, shield uncapped), bump the combo,
/// and emit the floating feedback plus a status message.
pub fn apply_match_effects(state: &mut GameState, effects: &[MatchEffect]) -> EffectTotals {
    let totals = sum_effects(effects);

    state.enemy.hp = (state.enemy.hp - totals.damage).max(0);
    state.player.hp = (state.player.hp + totals.heal).min(PLAYER_MAX_HP);
    state.player.mana = (state.player.mana + totals.mana).min(PLAYER_MAX_MANA);
    state.player.defense += totals.shield;
    state.combo += 1;

    if totals.damage > 0 {
        let (text, color) = if totals.any_crit {
            (format!("CRIT! -{}", totals.damage), FloatColor::CritDamage)
        } else {
            (format!("-{}", totals.damage), FloatColor::Damage)
        };
        state.push_float(text, color, 0.5, 0.2);
    }
    if totals.heal > 0 {
        state.push_float(format!("+{} HP", totals.heal), FloatColor::Heal, 0.15, 0.8);
    }
    if totals.shield > 0 {
        state.push_float(format!("+{} DEF", totals.shield), FloatColor::Shield, 0.85, 0.8);
    }
    if totals.mana > 0 {
        state.push_float(format!("+{} MP", totals.mana), FloatColor::Mana, 0.85, 0.7);
    }

    let mut parts: Vec<String> = Vec::new();
    if totals.any_crit && state.combo > 1 {
        parts.push(format!("CRITICAL x{} COMBO!", state.combo));
    } else if totals.any_crit {
        parts.push("CRITICAL HIT!".to_string());
    } else if state.combo > 1 {
        parts.push(format!("x{} COMBO!", state.combo));
    }
    if totals.heal > 0 {
        parts.push(format!("Healed {} HP", totals.heal));
    }
    if totals.shield > 0 {
        parts.push(format!("+{} Defense", totals.shield));
    }
    state.message = if parts.is_empty() {
        "Match!".to_string()
    } else {
        parts.join(" \u{2022} ")
    };

    debug!(
        "[Combat] match pass: damage={} heal={} mana={} shield={} crit={} combo={}",
        totals.damage, totals.heal, totals.mana, totals.shield, totals.any_crit, state.combo
    );

    totals
}

/// Enemy counter-attack at the end of a move that produced no further
/// matches. Defense absorbs damage first and is consumed either way; the
/// combo resets with the move.
///
/// The wave factor applies a second time here, on top of the scaling
/// already baked into the enemy's damage stat. The original client does
/// the same at attack time, so from wave 2 on, strikes hit harder than
/// the displayed stat.
pub fn enemy_attack(state: &mut GameState) {
    let scaled = (f64::from(state.enemy.damage) * WAVE_SCALING.powi(state.wave as i32 - 1))
        .floor() as i32;
    let actual = (scaled - state.player.defense).max(0);
    state.player.hp = (state.player.hp - actual).max(0);
    state.player.defense = 0;
    state.combo = 0;

    if actual > 0 {
        state.push_float(format!("-{actual}"), FloatColor::EnemyHit, 0.2, 0.75);
        state.message = format!("{} strikes for {} damage!", state.enemy.name, actual);
    } else {
        state.message = format!("{} attacks \u{2014} BLOCKED by your shield!", state.enemy.name);
    }

    debug!(
        "[Combat] {} attacks: actual={} player_hp={}",
        state.enemy.name, actual, state.player.hp
    );
}

/// Enemy-defeated transition: advance to the next roster slot, or to the
/// next wave when the roster is exhausted. The board is rebuilt from
/// scratch; combo and defense reset, HP and mana carry over.
pub fn advance_enemy(state: &mut GameState) {
    let next = state.enemy_index + 1;

    if next >= ENEMIES_PER_WAVE {
        state.wave += 1;
        state.enemy_index = 0;
        state.enemy = enemy_at(0, state.wave);
        state.message = format!("Wave {} begins!", state.wave);
        info!("[Combat] wave {} begins", state.wave);
    } else {
        state.enemy_index = next;
        state.enemy = enemy_at(next, state.wave);
        state.message = format!("{} appears!", state.enemy.name);
        info!("[Combat] {} appears (wave {})", state.enemy.name, state.wave);
    }

    state.board = generate_board(&mut state.spawner, &mut state.rng);
    state.combo = 0;
    state.player.defense = 0;
}
