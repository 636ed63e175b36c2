#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Undo history built from full-state snapshots.
//!
//! A snapshot is taken before every forward command and popped on undo, so
//! the stack depth always equals the number of commands executed since the
//! last reset.

use dohyo_world::World;

/// Deep copy of the simulation state at a command boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    world: World,
    cursor: usize,
}

impl Snapshot {
    /// Captures the world together with the script cursor.
    #[must_use]
    pub fn capture(world: &World, cursor: usize) -> Self {
        Self {
            world: world.clone(),
            cursor,
        }
    }

    /// World state held by the snapshot.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Script cursor held by the snapshot.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Consumes the snapshot, yielding the world and cursor.
    #[must_use]
    pub fn into_parts(self) -> (World, usize) {
        (self.world, self.cursor)
    }
}

/// Stack of snapshots supporting single-step undo.
#[derive(Clone, Debug, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a snapshot of the state about to be mutated.
    pub fn record(&mut self, world: &World, cursor: usize) {
        self.snapshots.push(Snapshot::capture(world, cursor));
    }

    /// Pops the most recent snapshot. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Snapshot> {
        self.snapshots.pop()
    }

    /// Most recent snapshot without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Number of snapshots held.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    /// Reports whether there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Discards every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
