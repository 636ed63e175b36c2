#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command interpreter that turns script lines into world mutations.
//!
//! Lines are parsed once when a script is loaded. Lines that fail to parse stay
//! in the script as [`ScriptEntry::Malformed`] so they still occupy a cursor
//! position and count toward the command total; executing them is a no-op.

use dohyo_core::{
    Command, CommandScript, Direction, Event, MalformedCommand, MoveKind, ScriptEntry,
};
use dohyo_world::{self as world, World};
use tracing::debug;

/// Parses a single `<opcode> <direction>` line.
///
/// Tokens are separated by any run of whitespace. The arity is checked first,
/// then the direction (case-insensitive), then the opcode.
pub fn parse_command(line: &str) -> Result<Command, MalformedCommand> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [opcode, direction] = tokens.as_slice() else {
        return Err(MalformedCommand::WrongArity {
            found: tokens.len(),
        });
    };

    let direction = Direction::from_token(direction)
        .ok_or_else(|| MalformedCommand::UnknownDirection((*direction).to_owned()))?;
    let kind = MoveKind::from_opcode(opcode)
        .ok_or_else(|| MalformedCommand::UnknownOpcode((*opcode).to_owned()))?;

    Ok(Command::new(kind, direction))
}

/// Parses a command stream, one entry per non-blank line.
#[must_use]
pub fn parse_script(text: &str) -> CommandScript {
    let entries = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match parse_command(line) {
            Ok(command) => ScriptEntry::Command(command),
            Err(reason) => ScriptEntry::Malformed {
                line: line.to_owned(),
                reason,
            },
        })
        .collect();
    CommandScript::new(entries)
}

/// Dispatches script entries to the world's movement primitives.
#[derive(Clone, Copy, Debug, Default)]
pub struct Interpreter;

impl Interpreter {
    /// Creates a new interpreter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Executes one script entry against the world.
    ///
    /// Returns `false` when the entry was malformed and therefore skipped.
    pub fn execute(
        &self,
        world: &mut World,
        entry: &ScriptEntry,
        out_events: &mut Vec<Event>,
    ) -> bool {
        match entry {
            ScriptEntry::Command(command) => {
                world::apply(world, *command, out_events);
                true
            }
            ScriptEntry::Malformed { line, reason } => {
                debug!(line = line.as_str(), %reason, "skipping malformed command");
                false
            }
        }
    }
}
