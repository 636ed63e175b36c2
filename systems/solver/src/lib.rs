#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Heuristic solver that writes a command script for a puzzle.
//!
//! The solver plays the puzzle on its own [`World`] through
//! [`dohyo_world::apply`], so every command it records has exactly the effect
//! a replay of the script will have. It runs in two phases:
//!
//! 1. For each ore letter, in order of first appearance, the player walks out
//!    from the matching hole in all four directions and rolls every object it
//!    stands on back toward the hole.
//! 2. Around the start hole, each diagonal quadrant is swept: the player
//!    closes in on the hole, carrying whatever it stands on a cell closer and
//!    rolling it the rest of the way, then retreats to the far corner.

use std::{collections::BTreeSet, fmt, ops::Range};

use dohyo_core::{
    CellCoord, Command, CommandScript, Direction, Event, HoleLabel, PuzzleLayout, ScoreReport,
    Tile,
};
use dohyo_system_scoring as scoring;
use dohyo_world::{self as world, query, World};
use tracing::debug;

/// Quadrants swept around the start hole, as `(vertical, horizontal)` headings.
const QUADRANTS: [(Direction, Direction); 4] = [
    (Direction::Down, Direction::Right),
    (Direction::Down, Direction::Left),
    (Direction::Up, Direction::Right),
    (Direction::Up, Direction::Left),
];

/// Walk order used when sweeping outward from a hole.
const SWEEPS: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Up,
];

/// Commands produced by the solver together with the score they earn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    commands: Vec<Command>,
    report: ScoreReport,
}

impl Solution {
    /// Commands in execution order.
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Score reached after executing every command.
    #[must_use]
    pub const fn report(&self) -> ScoreReport {
        self.report
    }

    /// Commands as a script ready for a session.
    #[must_use]
    pub fn script(&self) -> CommandScript {
        self.commands.iter().copied().collect()
    }
}

/// Writes the commands one `<opcode> <direction>` line each.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            writeln!(f, "{command}")?;
        }
        Ok(())
    }
}

/// Plans a command script for `layout`.
#[must_use]
pub fn solve(layout: &PuzzleLayout) -> Solution {
    let mut planner = Planner::new(layout);

    for letter in ore_letters(layout) {
        let target = last_hole(layout, letter).unwrap_or(CellCoord::new(0, 0));
        planner.sweep_from(target);
    }
    let after_sweeps = planner.commands.len();

    let anchor = layout.player_start();
    for (vertical, horizontal) in QUADRANTS {
        planner.clean_quadrant(anchor, vertical, horizontal);
    }
    debug!(
        sweeps = after_sweeps,
        cleaning = planner.commands.len() - after_sweeps,
        "solver finished"
    );

    planner.finish()
}

/// Distinct ore letters in order of first appearance, row by row.
fn ore_letters(layout: &PuzzleLayout) -> Vec<HoleLabel> {
    let mut seen = BTreeSet::new();
    layout
        .tiles()
        .iter()
        .filter_map(|tile| match tile {
            Tile::Ore(letter) => Some(letter.matching_hole()),
            _ => None,
        })
        .filter(|label| seen.insert(*label))
        .collect()
}

/// Last hole labelled `label` in row-major order.
fn last_hole(layout: &PuzzleLayout, label: HoleLabel) -> Option<CellCoord> {
    let dimension = layout.dimension();
    (0..dimension)
        .flat_map(|row| (0..dimension).map(move |column| CellCoord::new(row, column)))
        .filter(|cell| layout.tile(*cell) == Some(Tile::Hole(label)))
        .last()
}

/// Rows or columns of the cleaning window on one side of `anchor`.
fn window(anchor: u32, heading_forward: bool, size: u32, dimension: u32) -> Range<u32> {
    if heading_forward {
        anchor..dimension.min(anchor + size)
    } else {
        anchor.saturating_sub(size - 1)..anchor + 1
    }
}

/// Direction that moves `from` one step closer to `to` along one axis.
fn toward(from: u32, to: u32, backward: Direction, forward: Direction) -> Option<Direction> {
    match from.cmp(&to) {
        std::cmp::Ordering::Less => Some(forward),
        std::cmp::Ordering::Greater => Some(backward),
        std::cmp::Ordering::Equal => None,
    }
}

struct Planner {
    world: World,
    commands: Vec<Command>,
    events: Vec<Event>,
}

impl Planner {
    fn new(layout: &PuzzleLayout) -> Self {
        Self {
            world: World::from_layout(layout),
            commands: Vec::new(),
            events: Vec::new(),
        }
    }

    fn finish(self) -> Solution {
        let report = scoring::report(&self.world, self.commands.len());
        Solution {
            commands: self.commands,
            report,
        }
    }

    fn issue(&mut self, command: Command) {
        self.events.clear();
        world::apply(&mut self.world, command, &mut self.events);
        self.commands.push(command);
    }

    fn player(&self) -> CellCoord {
        query::player(&self.world)
    }

    fn destination(&self, direction: Direction) -> Option<CellCoord> {
        query::board(&self.world).neighbor(self.player(), direction)
    }

    fn holding_object(&self) -> bool {
        query::board(&self.world).is_occupied(self.player())
    }

    /// Destination of a carry or roll out of the player's cell, if one can start.
    fn free_destination(&self, direction: Direction) -> Option<CellCoord> {
        if !self.holding_object() {
            return None;
        }
        self.destination(direction)
            .filter(|cell| !query::board(&self.world).is_occupied(*cell))
    }

    fn step(&mut self, direction: Direction) -> bool {
        if self.destination(direction).is_none() {
            return false;
        }
        self.issue(Command::step(direction));
        true
    }

    fn carry(&mut self, direction: Direction) {
        if self.free_destination(direction).is_some() {
            self.issue(Command::carry(direction));
        }
    }

    fn roll(&mut self, direction: Direction) {
        if self.free_destination(direction).is_some() {
            self.issue(Command::roll(direction));
        }
    }

    fn walk_to(&mut self, target: CellCoord) {
        while let Some(direction) = toward(
            self.player().row(),
            target.row(),
            Direction::Up,
            Direction::Down,
        ) {
            if !self.step(direction) {
                break;
            }
        }
        while let Some(direction) = toward(
            self.player().column(),
            target.column(),
            Direction::Left,
            Direction::Right,
        ) {
            if !self.step(direction) {
                break;
            }
        }
    }

    fn sweep_from(&mut self, target: CellCoord) {
        for heading in SWEEPS {
            self.walk_to(target);
            while self.step(heading) {
                if self.holding_object() {
                    self.roll(heading.opposite());
                }
            }
        }
    }

    fn clean_quadrant(&mut self, anchor: CellCoord, vertical: Direction, horizontal: Direction) {
        let dimension = query::dimension(&self.world);
        let last = dimension - 1;
        let on_edge = anchor.row() == 0
            || anchor.row() == last
            || anchor.column() == 0
            || anchor.column() == last;
        let size = if on_edge { 2 } else { 3 };
        let rows = window(anchor.row(), vertical == Direction::Down, size, dimension);
        let columns = window(
            anchor.column(),
            horizontal == Direction::Right,
            size,
            dimension,
        );

        while self.window_has_object(&rows, &columns) {
            let before = self.world.clone();
            self.approach(anchor);
            if self.world == before {
                debug!(?vertical, ?horizontal, "cleaning window cannot be cleared");
                break;
            }
        }

        loop {
            let moved_vertically = self.step(vertical);
            let moved_horizontally = self.step(horizontal);
            if !moved_vertically && !moved_horizontally {
                break;
            }
        }
    }

    fn window_has_object(&self, rows: &Range<u32>, columns: &Range<u32>) -> bool {
        let board = query::board(&self.world);
        rows.clone().any(|row| {
            columns
                .clone()
                .any(|column| board.is_occupied(CellCoord::new(row, column)))
        })
    }

    /// One approach toward `anchor`: a step on each axis, a carry, then a roll.
    fn approach(&mut self, anchor: CellCoord) {
        let vertical =
            |from: CellCoord| toward(from.row(), anchor.row(), Direction::Up, Direction::Down);
        let horizontal = |from: CellCoord| {
            toward(from.column(), anchor.column(), Direction::Left, Direction::Right)
        };

        if let Some(direction) = vertical(self.player()) {
            let _ = self.step(direction);
        }
        if let Some(direction) = horizontal(self.player()) {
            let _ = self.step(direction);
        }

        let player = self.player();
        let carry = vertical(player)
            .or_else(|| horizontal(player))
            .unwrap_or(Direction::Right);
        self.carry(carry);

        let player = self.player();
        let row_gap = anchor.row().abs_diff(player.row());
        let column_gap = anchor.column().abs_diff(player.column());
        let roll = if row_gap >= column_gap {
            vertical(player).unwrap_or(Direction::Down)
        } else {
            horizontal(player).unwrap_or(Direction::Right)
        };
        self.roll(roll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(rows: &[&str]) -> PuzzleLayout {
        let tiles = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(Tile::from_symbol)
            .collect();
        PuzzleLayout::new(rows.len() as u32, 1, tiles).expect("valid layout")
    }

    #[test]
    fn ore_letters_follow_first_appearance() {
        let letters = ore_letters(&layout(&["b.a", "..b", "a.c"]));
        let labels: String = letters.iter().map(HoleLabel::get).collect();

        assert_eq!(labels, "BAC");
    }

    #[test]
    fn last_hole_prefers_later_rows() {
        let layout = layout(&["A..", "...", ".A."]);
        let label = HoleLabel::new('A').expect("label");

        assert_eq!(last_hole(&layout, label), Some(CellCoord::new(2, 1)));
        assert_eq!(last_hole(&layout, HoleLabel::new('B').expect("label")), None);
    }

    #[test]
    fn window_is_clamped_to_the_board() {
        assert_eq!(window(0, true, 2, 5), 0..2);
        assert_eq!(window(4, true, 3, 5), 4..5);
        assert_eq!(window(0, false, 3, 5), 0..1);
        assert_eq!(window(2, false, 3, 5), 0..3);
    }

    #[test]
    fn blocked_moves_are_never_recorded() {
        let solution = solve(&layout(&["A@", "@@"]));
        let mut world = World::from_layout(&layout(&["A@", "@@"]));
        let mut events = Vec::new();

        for command in solution.commands() {
            events.clear();
            world::apply(&mut world, *command, &mut events);
            assert!(
                !events
                    .iter()
                    .any(|event| matches!(event, Event::MoveBlocked { .. })),
                "{command} was blocked"
            );
        }
    }

    #[test]
    fn display_lists_one_command_per_line() {
        let solution = solve(&layout(&["a.", "A."]));
        let text = solution.to_string();

        assert_eq!(text.lines().count(), solution.commands().len());
        assert!(text.lines().all(|line| line.len() == 3));
    }
}
