//! Authoritative game state and the player-facing command surface.
//!
//! All mutation flows through the command methods here and the cascade
//! resolver in `game_loop`; queries read the fields (or a serialized
//! snapshot) directly. Single-threaded by design: the `Processing` phase
//! acts as the input lock while a move resolves.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::game::{CRIT_SKILL_COST, HEAL_AMOUNT, HEAL_COST, PLAYER_MAX_HP};
use crate::game::enemies::{enemy_at, Enemy};
use crate::game::game_loop::{run_cascade, Pacer};
use crate::game::grid::{
    assert_in_bounds, find_matches, generate_board, is_adjacent, swap_tiles, TileSpawner,
};
use crate::game::types::{Board, FloatColor, FloatText, GamePhase, PlayerState, Position};

const START_MESSAGE: &str = "The battle begins...";

/// The single owned aggregate holding everything the game knows.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub board: Board,
    pub player: PlayerState,
    pub enemy: Enemy,
    pub wave: u32,
    /// 0-indexed slot within the current wave's roster.
    pub enemy_index: usize,
    /// Cascade depth within the current move.
    pub combo: u32,
    /// One-shot flag set by Critical Strike, consumed by the next move's
    /// first match pass.
    pub crit_active: bool,
    pub phase: GamePhase,
    pub selected: Option<Position>,
    /// Short human-readable status line.
    pub message: String,
    /// Pending floating feedback events, drained by the presentation layer.
    pub floats: Vec<FloatText>,
    #[serde(skip)]
    pub(crate) spawner: TileSpawner,
    #[serde(skip)]
    pub(crate) rng: StdRng,
    #[serde(skip)]
    next_float_id: u64,
}

impl GameState {
    /// New game seeded from the thread RNG.
    pub fn new() -> Self {
        Self::from_seed(rand::rng().random())
    }

    /// New game with a deterministic RNG stream. Equal seeds produce equal
    /// boards and equal crit rolls.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut spawner = TileSpawner::new();
        let board = generate_board(&mut spawner, &mut rng);

        Self {
            board,
            player: PlayerState::new(),
            enemy: enemy_at(0, 1),
            wave: 1,
            enemy_index: 0,
            combo: 0,
            crit_active: false,
            phase: GamePhase::Playing,
            selected: None,
            message: START_MESSAGE.to_string(),
            floats: Vec::new(),
            spawner,
            rng,
            next_float_id: 0,
        }
    }

    /// Reset to a fresh run. Callable from any phase; the RNG stream
    /// continues rather than re-seeding.
    pub fn restart(&mut self) {
        self.board = generate_board(&mut self.spawner, &mut self.rng);
        self.player = PlayerState::new();
        self.enemy = enemy_at(0, 1);
        self.wave = 1;
        self.enemy_index = 0;
        self.combo = 0;
        self.crit_active = false;
        self.phase = GamePhase::Playing;
        self.selected = None;
        self.message = START_MESSAGE.to_string();
        self.floats.clear();
        info!("[Resolver] game restarted");
    }

    /// Handle a tap on a board position.
    ///
    /// First tap selects; tapping the selection deselects; a non-adjacent
    /// tap moves the selection. An adjacent tap tries the swap on a copy:
    /// with no resulting match the swap is never applied and the move costs
    /// nothing, otherwise the swap commits and the cascade runs to
    /// completion before this returns.
    pub fn select_or_swap(&mut self, pos: Position, pacer: &mut dyn Pacer) {
        assert_in_bounds(pos);

        if self.phase != GamePhase::Playing {
            return;
        }

        let Some(selected) = self.selected else {
            self.selected = Some(pos);
            return;
        };

        if selected == pos {
            self.selected = None;
            return;
        }

        if !is_adjacent(selected, pos) {
            self.selected = Some(pos);
            return;
        }

        let swapped = swap_tiles(&self.board, selected, pos);
        if find_matches(&swapped).is_empty() {
            self.selected = None;
            self.message = "No match \u{2014} try again!".to_string();
            return;
        }

        debug!(
            "[Resolver] move committed: ({},{}) <-> ({},{})",
            selected.row, selected.col, pos.row, pos.col
        );
        self.selected = None;
        self.board = swapped;
        self.combo = 0;
        self.phase = GamePhase::Processing;
        run_cascade(self, pacer);
    }

    /// Heal skill: 30 mana for 30 HP. Silently rejected when mana is short
    /// or the game is not accepting input.
    pub fn use_heal_skill(&mut self) {
        if self.player.mana < HEAL_COST || self.phase != GamePhase::Playing {
            return;
        }
        self.player.mana -= HEAL_COST;
        self.player.hp = (self.player.hp + HEAL_AMOUNT).min(PLAYER_MAX_HP);
        self.push_float(format!("+{HEAL_AMOUNT} HP"), FloatColor::Heal, 0.15, 0.8);
        self.message = format!("Used Heal \u{2014} restored {HEAL_AMOUNT} HP!");
    }

    /// Critical Strike skill: 40 mana to make the next match pass critical.
    /// Same silent-rejection preconditions as the heal.
    pub fn use_crit_skill(&mut self) {
        if self.player.mana < CRIT_SKILL_COST || self.phase != GamePhase::Playing {
            return;
        }
        self.player.mana -= CRIT_SKILL_COST;
        self.crit_active = true;
        self.message = "Critical Strike ready \u{2014} next match is CRITICAL!".to_string();
    }

    pub(crate) fn push_float(&mut self, text: String, color: FloatColor, x: f32, y: f32) {
        self.next_float_id += 1;
        self.floats.push(FloatText {
            id: self.next_float_id,
            text,
            color,
            x,
            y,
        });
    }

    /// Hand the pending floating feedback events to the presentation layer.
    pub fn drain_floats(&mut self) -> Vec<FloatText> {
        std::mem::take(&mut self.floats)
    }
}
