//! Board operations: generation, adjacency, swapping, match detection,
//! and the drop-and-refill step.
//!
//! All functions are copy-on-write over well-formed boards. Out-of-range
//! positions are contract violations and fail fast.

use std::collections::HashSet;

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::config::game::GRID_SIZE;
use crate::game::types::{Board, Position, Tile, TileKind, TILE_KINDS};

/// Hands out stable tile ids. Ids are unique for the lifetime of a game
/// and travel with their tile across swaps and drops.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileSpawner {
    next_id: u64,
}

impl TileSpawner {
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    pub fn spawn(&mut self, rng: &mut impl Rng, is_new: bool) -> Tile {
        self.next_id += 1;
        Tile {
            id: self.next_id,
            kind: random_tile_kind(rng),
            matched: false,
            is_new,
        }
    }
}

impl Default for TileSpawner {
    fn default() -> Self {
        Self::new()
    }
}

pub fn random_tile_kind(rng: &mut impl Rng) -> TileKind {
    TILE_KINDS[rng.random_range(0..TILE_KINDS.len())]
}

/// Fill a fresh board with uniformly random tiles.
///
/// No attempt is made to re-roll pre-existing matches; those are swept up
/// by the first resolution pass.
pub fn generate_board(spawner: &mut TileSpawner, rng: &mut impl Rng) -> Board {
    (0..GRID_SIZE)
        .map(|_| (0..GRID_SIZE).map(|_| spawner.spawn(rng, false)).collect())
        .collect()
}

/// True iff the two positions are orthogonal neighbors.
pub fn is_adjacent(a: Position, b: Position) -> bool {
    let dr = a.row.abs_diff(b.row);
    let dc = a.col.abs_diff(b.col);
    (dr == 1 && dc == 0) || (dr == 0 && dc == 1)
}

pub(crate) fn assert_in_bounds(pos: Position) {
    assert!(
        pos.row < GRID_SIZE && pos.col < GRID_SIZE,
        "position out of bounds: ({}, {})",
        pos.row,
        pos.col
    );
}

/// Return a copy of the board with the tiles at `a` and `b` exchanged.
///
/// Whole tiles move, ids included, so the caller can discard the copy when
/// the swap produces no match without the original ever having changed.
pub fn swap_tiles(board: &Board, a: Position, b: Position) -> Board {
    assert_in_bounds(a);
    assert_in_bounds(b);

    let mut next = board.clone();
    let tmp = next[a.row][a.col].clone();
    next[a.row][a.col] = next[b.row][b.col].clone();
    next[b.row][b.col] = tmp;
    next
}

/// Collect the ids of every tile sitting in a horizontal or vertical run of
/// three or more same-kind tiles.
///
/// Rows and columns are scanned independently; runs extend maximally and the
/// scan resumes just past each run. A tile marked by both a row run and a
/// column run appears once, the set is a union of ids.
pub fn find_matches(board: &Board) -> HashSet<u64> {
    let mut matched = HashSet::new();

    for r in 0..GRID_SIZE {
        let mut c = 0;
        while c + 2 < GRID_SIZE {
            let kind = board[r][c].kind;
            if board[r][c + 1].kind == kind && board[r][c + 2].kind == kind {
                let mut end = c + 2;
                while end + 1 < GRID_SIZE && board[r][end + 1].kind == kind {
                    end += 1;
                }
                for i in c..=end {
                    matched.insert(board[r][i].id);
                }
                c = end + 1;
            } else {
                c += 1;
            }
        }
    }

    for c in 0..GRID_SIZE {
        let mut r = 0;
        while r + 2 < GRID_SIZE {
            let kind = board[r][c].kind;
            if board[r + 1][c].kind == kind && board[r + 2][c].kind == kind {
                let mut end = r + 2;
                while end + 1 < GRID_SIZE && board[end + 1][c].kind == kind {
                    end += 1;
                }
                for i in r..=end {
                    matched.insert(board[i][c].id);
                }
                r = end + 1;
            } else {
                r += 1;
            }
        }
    }

    matched
}

/// Return a copy of the board with `matched` set on every tile in the set.
pub fn mark_matches(board: &Board, matched: &HashSet<u64>) -> Board {
    board
        .iter()
        .map(|row| {
            row.iter()
                .map(|tile| {
                    let mut t = tile.clone();
                    if matched.contains(&t.id) {
                        t.matched = true;
                    }
                    t
                })
                .collect()
        })
        .collect()
}

/// Let unmatched tiles fall to the bottom of their column and refill the
/// vacated cells on top with fresh random tiles.
///
/// Each column is compacted independently: survivors keep their relative
/// top-to-bottom order and their ids, with `is_new` cleared; spawned tiles
/// carry `is_new = true`.
pub fn drop_and_refill(board: &Board, spawner: &mut TileSpawner, rng: &mut impl Rng) -> Board {
    // columns[c][i] is the tile i cells up from the bottom of column c.
    let mut columns: Vec<Vec<Tile>> = Vec::with_capacity(GRID_SIZE);

    for c in 0..GRID_SIZE {
        let mut stack: Vec<Tile> = Vec::with_capacity(GRID_SIZE);
        for r in (0..GRID_SIZE).rev() {
            let tile = &board[r][c];
            if !tile.matched {
                let mut t = tile.clone();
                t.is_new = false;
                stack.push(t);
            }
        }
        while stack.len() < GRID_SIZE {
            stack.push(spawner.spawn(rng, true));
        }
        columns.push(stack);
    }

    (0..GRID_SIZE)
        .map(|r| {
            (0..GRID_SIZE)
                .map(|c| columns[c][GRID_SIZE - 1 - r].clone())
                .collect()
        })
        .collect()
}
