#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Playback session that drives the world through a loaded command script.
//!
//! The session is the single owner of the simulation state. Each call to
//! [`Session::step_forward`] snapshots the world, executes exactly one script
//! entry to completion, and advances the cursor; [`Session::step_back`] pops
//! the latest snapshot. Nothing here sleeps or spawns: pacing and
//! cancellation belong to the caller.

use dohyo_core::{CommandScript, ConfigurationError, Event, PuzzleLayout, ScoreReport};
use dohyo_system_history::History;
use dohyo_system_interpreter::{parse_script, Interpreter};
use dohyo_system_loader::parse_puzzle;
use dohyo_system_scoring as scoring;
use dohyo_world::World;
use tracing::{debug, info};

/// Result of attempting to advance the session by one entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// An entry was consumed from the script.
    Executed {
        /// Zero-based index of the consumed entry.
        index: usize,
        /// Whether the entry was malformed and therefore had no effect.
        skipped: bool,
    },
    /// The script was already exhausted; nothing changed.
    Finished,
}

/// Owns the world, the script, the cursor and the undo history.
#[derive(Clone, Debug)]
pub struct Session {
    layout: PuzzleLayout,
    world: World,
    script: CommandScript,
    cursor: usize,
    history: History,
    interpreter: Interpreter,
}

impl Session {
    /// Starts a session for a parsed puzzle and command script.
    #[must_use]
    pub fn new(layout: PuzzleLayout, script: CommandScript) -> Self {
        let world = World::from_layout(&layout);
        Self {
            layout,
            world,
            script,
            cursor: 0,
            history: History::new(),
            interpreter: Interpreter::new(),
        }
    }

    /// Parses puzzle and command text and starts a session.
    pub fn from_text(puzzle: &str, commands: &str) -> Result<Self, ConfigurationError> {
        let layout = parse_puzzle(puzzle)?;
        Ok(Self::new(layout, parse_script(commands)))
    }

    /// Replaces the puzzle and script, discarding all history.
    pub fn reset(&mut self, layout: PuzzleLayout, script: CommandScript) {
        info!(
            dimension = layout.dimension(),
            ore = layout.ore_count(),
            commands = script.len(),
            "session reset"
        );
        self.world = World::from_layout(&layout);
        self.layout = layout;
        self.script = script;
        self.cursor = 0;
        self.history.clear();
    }

    /// Parses new input and resets; on error the current session is kept as is.
    pub fn reset_from_text(
        &mut self,
        puzzle: &str,
        commands: &str,
    ) -> Result<(), ConfigurationError> {
        let layout = parse_puzzle(puzzle)?;
        self.reset(layout, parse_script(commands));
        Ok(())
    }

    /// Rewinds to the initial state of the currently loaded puzzle and script.
    pub fn restart(&mut self) {
        let layout = self.layout.clone();
        let script = std::mem::take(&mut self.script);
        self.reset(layout, script);
    }

    /// Executes the next script entry.
    pub fn step_forward(&mut self, out_events: &mut Vec<Event>) -> StepOutcome {
        let index = self.cursor;
        let Some(entry) = self.script.get(index) else {
            return StepOutcome::Finished;
        };

        self.history.record(&self.world, index);
        let executed = self.interpreter.execute(&mut self.world, entry, out_events);
        self.cursor = index + 1;
        if executed {
            debug!(index, ?entry, "command executed");
        }

        StepOutcome::Executed {
            index,
            skipped: !executed,
        }
    }

    /// Restores the state preceding the last executed entry.
    ///
    /// Returns `false` without changing anything when there is no history.
    pub fn step_back(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            debug!("nothing to undo");
            return false;
        };

        let (world, cursor) = snapshot.into_parts();
        self.world = world;
        self.cursor = cursor;
        debug!(cursor, "undid command");
        true
    }

    /// Executes every remaining entry and scores the result.
    pub fn run_to_completion(&mut self, out_events: &mut Vec<Event>) -> ScoreReport {
        while let StepOutcome::Executed { .. } = self.step_forward(out_events) {}
        self.compute_score()
    }

    /// Scores the current state against the full script length.
    #[must_use]
    pub fn compute_score(&self) -> ScoreReport {
        scoring::report(&self.world, self.script.len())
    }

    /// Current world state.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Loaded puzzle layout.
    #[must_use]
    pub fn layout(&self) -> &PuzzleLayout {
        &self.layout
    }

    /// Loaded command script.
    #[must_use]
    pub fn script(&self) -> &CommandScript {
        &self.script
    }

    /// Index of the next entry to execute.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of entries not yet executed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len().saturating_sub(self.cursor)
    }

    /// Reports whether every entry has been executed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }

    /// Number of steps that can currently be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.depth()
    }
}
