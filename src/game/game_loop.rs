//! Cascade resolution: the loop that runs a committed move to completion.
//!
//! A single swap may resolve zero, one, or many match passes. The loop
//! re-detects matches after every refill, so the combo multiplier strictly
//! increases within one move. Once started, resolution always reaches a
//! terminal sub-state (enemy turn, enemy defeated, or game over); partial
//! cascades are never abandoned.

use log::{debug, info};

use crate::game::grid::{drop_and_refill, find_matches, mark_matches};
use crate::game::state::GameState;
use crate::game::systems::combat::{advance_enemy, apply_match_effects, enemy_attack};
use crate::game::systems::effects::calculate_effects;
use crate::game::types::GamePhase;

/// Points during resolution where a presentation layer may want to show the
/// intermediate state before the loop continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacePoint {
    MatchResolved,
    BoardRefilled,
    EnemyDefeated,
    EnemyAttacked,
}

/// Pacing hook between cascade steps. Purely presentational: whether and how
/// long an implementation pauses must not change any computed outcome.
pub trait Pacer {
    fn pause(&mut self, state: &GameState, point: PacePoint);
}

/// Zero-delay pacer for headless runs and tests.
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&mut self, _state: &GameState, _point: PacePoint) {}
}

/// Resolve the board until it stabilizes, then hand the turn back.
///
/// Precondition: the caller has committed a swap and set the phase to
/// `Processing`. The one-shot crit flag is consumed by the first match pass
/// only.
pub fn run_cascade(state: &mut GameState, pacer: &mut dyn Pacer) {
    let mut crit_active = state.crit_active;
    state.crit_active = false;

    loop {
        let matches = find_matches(&state.board);

        if matches.is_empty() {
            enemy_attack(state);
            pacer.pause(state, PacePoint::EnemyAttacked);

            if state.player.hp <= 0 {
                state.phase = GamePhase::GameOver;
                info!("[Resolver] game over on wave {}", state.wave);
            } else {
                state.phase = GamePhase::Playing;
                state.message = "Your turn...".to_string();
            }
            return;
        }

        let effects =
            calculate_effects(&state.board, &matches, state.combo, crit_active, &mut state.rng);
        crit_active = false;

        state.board = mark_matches(&state.board, &matches);
        let totals = apply_match_effects(state, &effects);
        debug!(
            "[Resolver] cascade step {}: {} tiles matched, {} damage",
            state.combo,
            matches.len(),
            totals.damage
        );
        pacer.pause(state, PacePoint::MatchResolved);

        if state.enemy.hp <= 0 {
            state.message = format!("{} defeated!", state.enemy.name);
            info!("[Resolver] {} defeated", state.enemy.name);
            pacer.pause(state, PacePoint::EnemyDefeated);

            advance_enemy(state);
            state.phase = GamePhase::Playing;
            return;
        }

        state.board = drop_and_refill(&state.board, &mut state.spawner, &mut state.rng);
        pacer.pause(state, PacePoint::BoardRefilled);
    }
}
