//! Precomputed winning-line tables.
//!
//! A winning line is a set of `size` coordinates that ends the game
//! when uniformly occupied. Tables are generated once per board size
//! and leaked into static storage, so every board of the same size
//! shares one immutable copy.

use crate::types::Coord;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

/// One winning line, `size` coordinates long.
pub type Line = Box<[Coord]>;

/// Returns the winning-line table for `size`: all rows, then all
/// columns, then the main diagonal, then the anti-diagonal. Scan order
/// is fixed; the bot's tie-breaks depend on it.
pub fn for_size(size: usize) -> &'static [Line] {
    static TABLES: OnceLock<Mutex<HashMap<usize, &'static [Line]>>> = OnceLock::new();
    let tables = TABLES.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = tables.lock().expect("line table lock");
    *guard
        .entry(size)
        .or_insert_with(|| Box::leak(generate(size).into_boxed_slice()))
}

fn generate(size: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(2 * size + 2);
    for row in 0..size {
        lines.push((0..size).map(|col| Coord::new(row, col)).collect());
    }
    for col in 0..size {
        lines.push((0..size).map(|row| Coord::new(row, col)).collect());
    }
    lines.push((0..size).map(|i| Coord::new(i, i)).collect());
    lines.push((0..size).map(|i| Coord::new(i, size - 1 - i)).collect());
    lines
}
