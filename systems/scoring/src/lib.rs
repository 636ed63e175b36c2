#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Efficiency scoring for a finished or in-progress session.
//!
//! Partial clears earn a share of [`FULL_SCORE`] proportional to the ore
//! placed. A full clear earns `FULL_SCORE × (1 + log2(PAR_COMMANDS / T))`,
//! which rewards short scripts and turns negative past `2 × PAR_COMMANDS`
//! commands. Values are rounded half away from zero.

use dohyo_core::ScoreReport;
use dohyo_world::{query, World};

/// Score awarded for clearing every ore with no command count bonus.
pub const FULL_SCORE: i64 = 1_000_000;

/// Command count at which a full clear earns exactly [`FULL_SCORE`].
pub const PAR_COMMANDS: f64 = 10_000.0;

/// Computes the score from `K` (`total_ore`), `A` (`placed_ore`) and `T` (`command_count`).
#[must_use]
pub fn score(total_ore: u32, placed_ore: u32, command_count: usize) -> i64 {
    if total_ore == 0 {
        return 0;
    }

    let base = FULL_SCORE as f64;
    if placed_ore == total_ore {
        if command_count == 0 {
            return FULL_SCORE;
        }
        let efficiency = (PAR_COMMANDS / command_count as f64).log2();
        return (base * (1.0 + efficiency)).round() as i64;
    }

    (base * f64::from(placed_ore) / f64::from(total_ore)).round() as i64
}

/// Builds the score report for the world's current state.
#[must_use]
pub fn report(world: &World, command_count: usize) -> ScoreReport {
    let total_ore = query::total_ore(world);
    let placed_ore = query::placed_ore(world);

    ScoreReport {
        score: score(total_ore, placed_ore, command_count),
        dimension: query::dimension(world),
        ore_kinds: query::ore_kinds(world),
        total_ore,
        placed_ore,
        command_count,
    }
}
