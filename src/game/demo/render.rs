//! Terminal rendering for the demo shell.
//!
//! Prints the board grid and the player/enemy status lines.

use crate::game::state::GameState;
use crate::game::types::{GamePhase, TileKind, TILE_KINDS};

fn tile_symbol(kind: TileKind) -> &'static str {
    match kind {
        TileKind::Sword => "Sw",
        TileKind::Heart => "He",
        TileKind::Shield => "Sh",
        TileKind::Star => "St",
        TileKind::Moon => "Mo",
        TileKind::Diamond => "Di",
    }
}

/// Print the board. The selected tile is bracketed, freshly spawned tiles
/// are marked with a trailing `*`.
pub fn print_board(state: &GameState) {
    println!("     0   1   2   3   4   5");
    for (r, row) in state.board.iter().enumerate() {
        print!("  {r} ");
        for (c, tile) in row.iter().enumerate() {
            let selected = state
                .selected
                .is_some_and(|sel| sel.row == r && sel.col == c);
            let symbol = tile_symbol(tile.kind);
            if selected {
                print!("[{symbol}]");
            } else if tile.is_new {
                print!(" {symbol}*");
            } else {
                print!(" {symbol} ");
            }
        }
        println!();
    }
    print!("    ");
    for kind in TILE_KINDS {
        print!(" {}={}", tile_symbol(kind), kind.label());
    }
    println!("\n");
}

/// Print the player and enemy status lines plus the current message.
pub fn print_status(state: &GameState) {
    println!(
        "  You: {} HP | {} MP | {} DEF{}",
        state.player.hp,
        state.player.mana,
        state.player.defense,
        if state.crit_active { " | CRIT READY" } else { "" },
    );
    println!(
        "  {} the {} (Lv {}): {}/{} HP | Wave {}",
        state.enemy.name,
        state.enemy.title,
        state.enemy.level,
        state.enemy.hp,
        state.enemy.max_hp,
        state.wave,
    );
    if state.combo > 0 {
        println!("  Combo x{}", state.combo);
    }
    println!("  > {}", state.message);
    if state.phase == GamePhase::GameOver {
        println!("  *** GAME OVER ***");
    }
    println!();
}
