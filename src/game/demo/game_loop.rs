//! Interactive terminal shell for playing the game.
//!
//! This is the presentation layer the core is built to sit under: it taps
//! tiles, fires skills, and renders the state snapshots the engine exposes.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::config::game::GRID_SIZE;
use crate::game::demo::render::{print_board, print_status};
use crate::game::game_loop::{PacePoint, Pacer};
use crate::game::state::GameState;
use crate::game::types::{GamePhase, Position};

/// Pacer that redraws the board and sleeps between cascade steps so the
/// chain of matches is visible in the terminal. The delays mirror the
/// animation timings of the original client.
struct TerminalPacer;

impl Pacer for TerminalPacer {
    fn pause(&mut self, state: &GameState, point: PacePoint) {
        print_status(state);
        print_board(state);
        let ms = match point {
            PacePoint::MatchResolved => 380,
            PacePoint::BoardRefilled => 280,
            PacePoint::EnemyDefeated => 700,
            PacePoint::EnemyAttacked => 600,
        };
        thread::sleep(Duration::from_millis(ms));
    }
}

enum Command {
    Tap(Position),
    Heal,
    Crit,
    Restart,
    Dump,
    Quit,
    Invalid,
}

/// Prompt the user for the next command.
fn read_command() -> Command {
    print!("Enter `row col` to tap, h=heal, c=crit, r=restart, d=dump, q=quit: ");
    io::stdout().flush().unwrap();

    let mut input = String::new();
    io::stdin().read_line(&mut input).unwrap();

    match input.trim() {
        "h" => Command::Heal,
        "c" => Command::Crit,
        "r" => Command::Restart,
        "d" => Command::Dump,
        "q" => Command::Quit,
        line => {
            let mut parts = line.split_whitespace();
            match (
                parts.next().and_then(|s| s.parse::<usize>().ok()),
                parts.next().and_then(|s| s.parse::<usize>().ok()),
            ) {
                (Some(row), Some(col)) if row < GRID_SIZE && col < GRID_SIZE => {
                    Command::Tap(Position { row, col })
                }
                _ => Command::Invalid,
            }
        }
    }
}

/// Run the interactive game loop until the player quits.
pub fn run_game_loop() {
    let mut state = GameState::new();
    let mut pacer = TerminalPacer;

    println!("Game start!");

    loop {
        print_status(&state);
        print_board(&state);

        match read_command() {
            Command::Tap(pos) => state.select_or_swap(pos, &mut pacer),
            Command::Heal => state.use_heal_skill(),
            Command::Crit => state.use_crit_skill(),
            Command::Restart => state.restart(),
            Command::Dump => match serde_json::to_string_pretty(&state) {
                Ok(json) => println!("{json}"),
                Err(err) => println!("snapshot failed: {err}"),
            },
            Command::Quit => break,
            Command::Invalid => println!("Unrecognized command."),
        }

        for float in state.drain_floats() {
            println!("  ~ {} ({:?})", float.text, float.color);
        }

        if state.phase == GamePhase::GameOver {
            println!("You fell on wave {}. Press r to try again.", state.wave);
        }
    }
}
