//! Table generation
//!
//! Builds the ordered cell list for one game. Generation always replaces
//! the whole table; progress highlighting after a reshuffle is restored
//! separately by the session (see `session.rs`).

use rand::seq::SliceRandom;
use rand::Rng;

use super::symbol;
use crate::error::Result;
use crate::settings::Settings;
use crate::types::OrderMode;

/// One cell of the table.
///
/// Position is the cell's index in the generated vector, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// 1-based rank in the completion order
    pub rank: u32,
    /// Display label derived from the rank
    pub symbol: String,
    /// The unique fixation cell (odd table sizes only)
    pub is_center: bool,
}

/// Generate a fresh table for the given settings.
///
/// Ranks 1..=size² are laid out in order, then Fisher–Yates shuffled
/// when the order mode is `Random`. Exactly one cell is the center iff
/// the size is odd; whether the fixation dot is drawn on it is a
/// rendering decision (`show_center_dot`).
pub fn generate(settings: &Settings, rng: &mut impl Rng) -> Result<Vec<Cell>> {
    settings.validate()?;

    let total = settings.cell_count();
    let mut ranks: Vec<u32> = (1..=total).collect();
    if settings.order == OrderMode::Random {
        ranks.shuffle(rng);
    }

    let center_index = center_index(settings.size);

    let cells = ranks
        .into_iter()
        .enumerate()
        .map(|(position, rank)| Cell {
            rank,
            symbol: symbol::rank_to_symbol(rank, settings.symbol_type),
            is_center: Some(position) == center_index,
        })
        .collect();

    Ok(cells)
}

/// Center position for odd sizes, `None` for even ones
pub fn center_index(size: u16) -> Option<usize> {
    if size % 2 == 1 {
        Some((usize::from(size) * usize::from(size)) / 2)
    } else {
        None
    }
}
