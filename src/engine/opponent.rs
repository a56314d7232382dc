//! Computer opponent for solo mode.

use crate::core::{Board, GameRng};

/// Uniform random opponent.
///
/// Filters the board down to its empty cells, then picks one uniformly.
/// With a seeded `GameRng` the sequence of picks is reproducible.
#[derive(Clone, Debug, Default)]
pub struct RandomOpponent;

impl RandomOpponent {
    /// Pick an empty cell, or `None` if the board is full.
    pub fn choose_cell(&self, board: &Board, rng: &mut GameRng) -> Option<usize> {
        rng.choose(&board.empty_indices()).copied()
    }
}
