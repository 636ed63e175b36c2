#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Puzzle text loader.
//!
//! The first line carries `N M`; the next `N` lines describe the board. Rows
//! are trimmed, padded with `.` and truncated to `N` symbols, and rows missing
//! from the input read as empty.

use std::collections::BTreeSet;

use dohyo_core::{ConfigurationError, PuzzleLayout, Tile, EMPTY_SYMBOL};
use tracing::debug;

/// Largest board dimension accepted by the loader.
///
/// Puzzle text places no upper bound on `N`; this caps the `N × N` board
/// allocation so a typo in the header cannot exhaust memory.
pub const MAX_DIMENSION: u32 = 4096;

/// Parses puzzle text into a validated layout.
pub fn parse_puzzle(text: &str) -> Result<PuzzleLayout, ConfigurationError> {
    let lines: Vec<&str> = text.split('\n').map(str::trim).collect();
    if lines.len() < 2 {
        return Err(ConfigurationError::InsufficientInput { lines: lines.len() });
    }

    let (dimension, ore_kinds) = parse_header(lines[0])?;
    let width = dimension as usize;
    let mut tiles = Vec::with_capacity(width.saturating_mul(width));
    for row in 0..width {
        let line = lines.get(row + 1).copied().unwrap_or("");
        let symbols = line.chars().chain(std::iter::repeat(EMPTY_SYMBOL));
        tiles.extend(symbols.take(width).map(Tile::from_symbol));
    }

    let letters: BTreeSet<char> = tiles
        .iter()
        .filter_map(|tile| match tile {
            Tile::Ore(letter) => Some(letter.get()),
            _ => None,
        })
        .collect();
    if letters.len() != ore_kinds as usize {
        debug!(
            declared = ore_kinds,
            found = letters.len(),
            "ore kind count differs from board contents"
        );
    }

    PuzzleLayout::new(dimension, ore_kinds, tiles)
}

fn parse_header(header: &str) -> Result<(u32, u32), ConfigurationError> {
    let mut tokens = header.split_whitespace();
    let dimension_token = tokens.next().unwrap_or("");
    let ore_kinds_token = tokens.next().unwrap_or("");

    let dimension = dimension_token
        .parse::<u32>()
        .ok()
        .filter(|dimension| (1..=MAX_DIMENSION).contains(dimension))
        .ok_or_else(|| ConfigurationError::InvalidDimension {
            value: dimension_token.to_owned(),
        })?;
    let ore_kinds =
        ore_kinds_token
            .parse::<u32>()
            .map_err(|_| ConfigurationError::InvalidOreKinds {
                value: ore_kinds_token.to_owned(),
            })?;

    Ok((dimension, ore_kinds))
}
