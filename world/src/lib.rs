#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative board state for Dohyo.
//!
//! The world owns the grid, the player and the tally of placed ore. It is
//! mutated exclusively through [`apply`], which executes a single command to
//! completion and reports what happened as [`Event`] values. Adapters and
//! systems read it through the [`query`] module.

mod board;
mod fall;
mod movement;

use dohyo_core::{CellCoord, Command, Event, MoveKind, Object, PuzzleLayout};

pub use board::{Board, Cell, OutOfBounds};
pub use fall::{resolve_fall, FallenCounts};

/// Represents the authoritative Dohyo world state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct World {
    board: Board,
    player: CellCoord,
    fallen: FallenCounts,
    ore_kinds: u32,
    initial_ore: u32,
}

impl World {
    /// Creates the world described by a parsed puzzle layout.
    #[must_use]
    pub fn from_layout(layout: &PuzzleLayout) -> Self {
        let board = Board::from_layout(layout);
        let letters = board.rows().flatten().filter_map(|cell| match cell.object() {
            Some(Object::Ore { letter }) => Some(letter),
            Some(Object::Rock) | None => None,
        });
        let fallen = FallenCounts::seeded(letters);

        Self {
            player: layout.player_start(),
            ore_kinds: layout.ore_kinds(),
            initial_ore: layout.ore_count(),
            fallen,
            board,
        }
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command.kind {
        MoveKind::Step => movement::step(world, command, out_events),
        MoveKind::Carry => movement::carry(world, command, out_events),
        MoveKind::Roll => movement::roll(world, command, out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use dohyo_core::CellCoord;

    use super::{Board, FallenCounts, World};

    /// Provides read-only access to the board.
    #[must_use]
    pub fn board(world: &World) -> &Board {
        &world.board
    }

    /// Cell currently occupied by the player.
    #[must_use]
    pub fn player(world: &World) -> CellCoord {
        world.player
    }

    /// Per-letter tally of correctly placed ore.
    #[must_use]
    pub fn fallen_counts(world: &World) -> &FallenCounts {
        &world.fallen
    }

    /// Number of cells along each side of the board (`N`).
    #[must_use]
    pub fn dimension(world: &World) -> u32 {
        world.board.dimension()
    }

    /// Ore kind count declared by the puzzle header (`M`).
    #[must_use]
    pub fn ore_kinds(world: &World) -> u32 {
        world.ore_kinds
    }

    /// Ore present when the world was created (`K`).
    #[must_use]
    pub fn total_ore(world: &World) -> u32 {
        world.initial_ore
    }

    /// Ore dropped into matching holes so far (`A`).
    #[must_use]
    pub fn placed_ore(world: &World) -> u32 {
        world.fallen.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dohyo_core::{Direction, OreLetter, Tile};

    fn world(rows: &[&str]) -> World {
        let tiles = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(Tile::from_symbol)
            .collect();
        let layout = PuzzleLayout::new(rows.len() as u32, 2, tiles).expect("valid layout");
        World::from_layout(&layout)
    }

    #[test]
    fn world_starts_on_start_hole_with_seeded_counts() {
        let world = world(&["..b", ".A.", "a.a"]);

        assert_eq!(query::player(&world), CellCoord::new(1, 1));
        assert_eq!(query::total_ore(&world), 3);
        assert_eq!(query::placed_ore(&world), 0);
        assert_eq!(query::ore_kinds(&world), 2);
        let letters: Vec<char> = query::fallen_counts(&world)
            .iter()
            .map(|(letter, _)| letter.get())
            .collect();
        assert_eq!(letters, vec!['a', 'b']);
    }

    #[test]
    fn apply_dispatches_on_move_kind() {
        let mut world = world(&["Aa.", "...", "..."]);
        let mut events = Vec::new();

        apply(&mut world, Command::step(Direction::Right), &mut events);
        apply(&mut world, Command::carry(Direction::Left), &mut events);

        assert_eq!(query::player(&world), CellCoord::new(0, 0));
        assert_eq!(
            query::fallen_counts(&world).get(OreLetter::new('a').expect("letter")),
            1
        );
        assert_eq!(
            events.last(),
            Some(&Event::PlayerMoved {
                from: CellCoord::new(0, 1),
                to: CellCoord::new(0, 0),
            })
        );
    }
}
