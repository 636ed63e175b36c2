#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Dohyo puzzle engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Loaders produce a [`PuzzleLayout`]
//! and a [`CommandScript`], the session feeds each [`Command`] to the world's
//! `apply` entry point, and the world reports what happened through [`Event`]
//! values. Scoring results travel back to adapters as a [`ScoreReport`].

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label of the hole the player starts on.
pub const START_HOLE: HoleLabel = HoleLabel('A');

/// Cardinal directions available to the player and rolling objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing column indices.
    Right,
}

impl Direction {
    /// All directions in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset of the direction expressed as `(row_delta, column_delta)`.
    #[must_use]
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Parses a direction token such as `"U"` or `"r"`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "U" => Some(Self::Up),
            "D" => Some(Self::Down),
            "L" => Some(Self::Left),
            "R" => Some(Self::Right),
            _ => None,
        }
    }

    /// Direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Canonical single-letter token for the direction.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }
}

/// Location of a single board cell expressed as row and column indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    row: u32,
    column: u32,
}

impl CellCoord {
    /// Creates a new cell coordinate.
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Reports whether the cell lies inside a square board of `dimension` cells per side.
    #[must_use]
    pub const fn is_within(&self, dimension: u32) -> bool {
        self.row < dimension && self.column < dimension
    }

    /// Returns the adjacent cell in `direction`, or `None` when it would leave the board.
    #[must_use]
    pub fn neighbor(self, direction: Direction, dimension: u32) -> Option<CellCoord> {
        let (row_delta, column_delta) = direction.offset();
        let row = i64::from(self.row) + row_delta;
        let column = i64::from(self.column) + column_delta;
        let bound = i64::from(dimension);
        if row < 0 || row >= bound || column < 0 || column >= bound {
            return None;
        }

        Some(CellCoord::new(
            u32::try_from(row).ok()?,
            u32::try_from(column).ok()?,
        ))
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}

/// Rejected board symbol when constructing a letter or label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid symbol for this position")]
pub struct InvalidSymbol(pub char);

/// Lowercase letter identifying a kind of ore.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct OreLetter(char);

impl OreLetter {
    /// Wraps an ASCII lowercase letter.
    #[must_use]
    pub const fn new(letter: char) -> Option<Self> {
        if letter.is_ascii_lowercase() {
            Some(Self(letter))
        } else {
            None
        }
    }

    /// Retrieves the underlying character.
    #[must_use]
    pub const fn get(&self) -> char {
        self.0
    }

    /// Hole label that accepts this ore.
    #[must_use]
    pub const fn matching_hole(&self) -> HoleLabel {
        HoleLabel(self.0.to_ascii_uppercase())
    }
}

impl TryFrom<char> for OreLetter {
    type Error = InvalidSymbol;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidSymbol(value))
    }
}

impl From<OreLetter> for char {
    fn from(value: OreLetter) -> Self {
        value.0
    }
}

impl fmt::Display for OreLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Uppercase label carved into a hole cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct HoleLabel(char);

impl HoleLabel {
    /// Wraps an ASCII uppercase letter.
    #[must_use]
    pub const fn new(label: char) -> Option<Self> {
        if label.is_ascii_uppercase() {
            Some(Self(label))
        } else {
            None
        }
    }

    /// Retrieves the underlying character.
    #[must_use]
    pub const fn get(&self) -> char {
        self.0
    }

    /// Reports whether ore of `letter` counts as placed when it drops into this hole.
    #[must_use]
    pub const fn accepts(&self, letter: OreLetter) -> bool {
        letter.0.to_ascii_uppercase() == self.0
    }
}

impl TryFrom<char> for HoleLabel {
    type Error = InvalidSymbol;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidSymbol(value))
    }
}

impl From<HoleLabel> for char {
    fn from(value: HoleLabel) -> Self {
        value.0
    }
}

impl fmt::Display for HoleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Movable object resting on a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Object {
    /// Inert object that is never scored.
    Rock,
    /// Collectible ore tagged with its letter.
    Ore {
        /// Letter identifying the ore kind.
        letter: OreLetter,
    },
}

impl Object {
    /// Symbol used for the object in puzzle text.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Rock => ROCK_SYMBOL,
            Self::Ore { letter } => letter.get(),
        }
    }
}

/// Puzzle text symbol for an empty cell.
pub const EMPTY_SYMBOL: char = '.';
/// Puzzle text symbol for a rock.
pub const ROCK_SYMBOL: char = '@';

/// Initial content of a single cell as described by puzzle text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Nothing on the cell.
    Empty,
    /// A rock rests on the cell.
    Rock,
    /// Ore of the given letter rests on the cell.
    Ore(OreLetter),
    /// The cell is a hole with the given label.
    Hole(HoleLabel),
}

impl Tile {
    /// Interprets a puzzle text symbol. Unrecognised symbols read as empty.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Self {
        if symbol == ROCK_SYMBOL {
            return Self::Rock;
        }
        if let Some(letter) = OreLetter::new(symbol) {
            return Self::Ore(letter);
        }
        if let Some(label) = HoleLabel::new(symbol) {
            return Self::Hole(label);
        }
        Self::Empty
    }

    /// Puzzle text symbol for the tile.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Empty => EMPTY_SYMBOL,
            Self::Rock => ROCK_SYMBOL,
            Self::Ore(letter) => letter.get(),
            Self::Hole(label) => label.get(),
        }
    }

    /// Object initially resting on the tile, if any.
    #[must_use]
    pub const fn object(&self) -> Option<Object> {
        match self {
            Self::Rock => Some(Object::Rock),
            Self::Ore(letter) => Some(Object::Ore { letter: *letter }),
            Self::Empty | Self::Hole(_) => None,
        }
    }
}

/// Errors that reject a puzzle before it reaches the world.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The puzzle text lacked the `N M` header or the board that follows it.
    #[error("puzzle input is incomplete: expected a header and board rows, found {lines} line(s)")]
    InsufficientInput {
        /// Number of lines that were supplied.
        lines: usize,
    },
    /// The board dimension was missing, not an integer, or not positive.
    #[error("board dimension `{value}` is not a positive integer")]
    InvalidDimension {
        /// Raw header token.
        value: String,
    },
    /// The ore kind count was missing or not a non-negative integer.
    #[error("ore kind count `{value}` is not a non-negative integer")]
    InvalidOreKinds {
        /// Raw header token.
        value: String,
    },
    /// The number of tiles does not form an N×N board.
    #[error("board of dimension {dimension} needs {expected} tiles, found {found}")]
    LayoutSizeMismatch {
        /// Requested board dimension.
        dimension: u32,
        /// Tile count implied by the dimension.
        expected: usize,
        /// Tile count supplied.
        found: usize,
    },
}

/// Parsed puzzle board handed to the session on reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleLayout {
    dimension: u32,
    ore_kinds: u32,
    tiles: Vec<Tile>,
    player_start: CellCoord,
}

impl PuzzleLayout {
    /// Validates `tiles` as a row-major board of `dimension` × `dimension` cells.
    ///
    /// The player starts on the hole labelled [`START_HOLE`]; when several exist
    /// the last one in row-major order wins, and without one the player starts
    /// at the origin.
    pub fn new(
        dimension: u32,
        ore_kinds: u32,
        tiles: Vec<Tile>,
    ) -> Result<Self, ConfigurationError> {
        if dimension == 0 {
            return Err(ConfigurationError::InvalidDimension {
                value: dimension.to_string(),
            });
        }
        let side = usize::try_from(dimension).map_err(|_| ConfigurationError::InvalidDimension {
            value: dimension.to_string(),
        })?;
        let expected = side.saturating_mul(side);
        if tiles.len() != expected {
            return Err(ConfigurationError::LayoutSizeMismatch {
                dimension,
                expected,
                found: tiles.len(),
            });
        }

        let player_start = tiles
            .iter()
            .rposition(|tile| *tile == Tile::Hole(START_HOLE))
            .map_or(CellCoord::new(0, 0), |index| {
                CellCoord::new((index / side) as u32, (index % side) as u32)
            });

        Ok(Self {
            dimension,
            ore_kinds,
            tiles,
            player_start,
        })
    }

    /// Number of cells along each side of the board.
    #[must_use]
    pub const fn dimension(&self) -> u32 {
        self.dimension
    }

    /// Ore kind count declared by the puzzle header. Informational only.
    #[must_use]
    pub const fn ore_kinds(&self) -> u32 {
        self.ore_kinds
    }

    /// Cell the player occupies after a reset.
    #[must_use]
    pub const fn player_start(&self) -> CellCoord {
        self.player_start
    }

    /// Row-major tiles of the board.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at the provided cell, or `None` outside the board.
    #[must_use]
    pub fn tile(&self, cell: CellCoord) -> Option<Tile> {
        if !cell.is_within(self.dimension) {
            return None;
        }
        let index = cell.row() as usize * self.dimension as usize + cell.column() as usize;
        self.tiles.get(index).copied()
    }

    /// Total number of ore objects on the board.
    #[must_use]
    pub fn ore_count(&self) -> u32 {
        self.tiles
            .iter()
            .filter(|tile| matches!(tile, Tile::Ore(_)))
            .count() as u32
    }
}

/// Movement primitive requested by a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// The player alone moves one cell.
    Step,
    /// The player and the object under them move one cell together.
    Carry,
    /// The object under the player rolls until blocked or swallowed.
    Roll,
}

impl MoveKind {
    /// Parses the numeric opcode used by command scripts.
    #[must_use]
    pub fn from_opcode(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Self::Step),
            "2" => Some(Self::Carry),
            "3" => Some(Self::Roll),
            _ => None,
        }
    }

    /// Numeric opcode used by command scripts.
    #[must_use]
    pub const fn opcode(self) -> u8 {
        match self {
            Self::Step => 1,
            Self::Carry => 2,
            Self::Roll => 3,
        }
    }
}

/// Single player action: a movement primitive applied in a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Command {
    /// Movement primitive to perform.
    pub kind: MoveKind,
    /// Direction of travel.
    pub direction: Direction,
}

impl Command {
    /// Creates a command from its parts.
    #[must_use]
    pub const fn new(kind: MoveKind, direction: Direction) -> Self {
        Self { kind, direction }
    }

    /// Shorthand for a step command.
    #[must_use]
    pub const fn step(direction: Direction) -> Self {
        Self::new(MoveKind::Step, direction)
    }

    /// Shorthand for a carry command.
    #[must_use]
    pub const fn carry(direction: Direction) -> Self {
        Self::new(MoveKind::Carry, direction)
    }

    /// Shorthand for a roll command.
    #[must_use]
    pub const fn roll(direction: Direction) -> Self {
        Self::new(MoveKind::Roll, direction)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.opcode(), self.direction.token())
    }
}

/// Reasons a command line could not be understood.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MalformedCommand {
    /// The line did not contain exactly two tokens.
    #[error("expected `<opcode> <direction>`, found {found} token(s)")]
    WrongArity {
        /// Number of whitespace separated tokens found.
        found: usize,
    },
    /// The opcode token was not `1`, `2` or `3`.
    #[error("unknown opcode `{0}`")]
    UnknownOpcode(String),
    /// The direction token was not one of `U`, `D`, `L`, `R`.
    #[error("unknown direction `{0}`")]
    UnknownDirection(String),
}

/// One non-empty line of a command script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptEntry {
    /// A line that parsed into a command.
    Command(Command),
    /// A line that is consumed as a no-op.
    Malformed {
        /// Original trimmed line.
        line: String,
        /// Why the line was rejected.
        reason: MalformedCommand,
    },
}

impl ScriptEntry {
    /// Parsed command, if the line was well formed.
    #[must_use]
    pub const fn command(&self) -> Option<Command> {
        match self {
            Self::Command(command) => Some(*command),
            Self::Malformed { .. } => None,
        }
    }
}

/// Ordered command queue loaded alongside a puzzle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandScript {
    entries: Vec<ScriptEntry>,
}

impl CommandScript {
    /// Wraps the provided entries.
    #[must_use]
    pub fn new(entries: Vec<ScriptEntry>) -> Self {
        Self { entries }
    }

    /// Number of entries, malformed ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the script holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ScriptEntry> {
        self.entries.get(index)
    }

    /// Iterator over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &ScriptEntry> {
        self.entries.iter()
    }

    /// Number of entries that were rejected as malformed.
    #[must_use]
    pub fn malformed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.command().is_none())
            .count()
    }
}

impl FromIterator<Command> for CommandScript {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(ScriptEntry::Command).collect())
    }
}

/// Reasons a command left the board untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockReason {
    /// The target cell lies outside the board.
    OutOfBounds,
    /// The target cell already holds an object.
    Occupied,
    /// The player's cell holds no object to move.
    NoObject,
}

/// Events reported by the world after processing a command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Confirms that the player moved between two cells.
    PlayerMoved {
        /// Cell the player occupied before moving.
        from: CellCoord,
        /// Cell the player occupies afterwards.
        to: CellCoord,
    },
    /// Confirms that an object came to rest on a new cell.
    ObjectMoved {
        /// Object that moved.
        object: Object,
        /// Cell the object occupied before moving.
        from: CellCoord,
        /// Cell the object rests on afterwards.
        to: CellCoord,
    },
    /// Reports that an object dropped into a hole and left play.
    ObjectFell {
        /// Object that was swallowed.
        object: Object,
        /// Label of the swallowing hole.
        hole: HoleLabel,
        /// Location of the hole.
        cell: CellCoord,
        /// Whether the drop counted as a correct placement.
        scored: bool,
    },
    /// Reports that a command had no effect on the board or the player.
    MoveBlocked {
        /// Command that was blocked.
        command: Command,
        /// Specific reason nothing moved.
        reason: BlockReason,
    },
}

/// Score summary computed against the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Final score.
    pub score: i64,
    /// Board dimension `N`.
    pub dimension: u32,
    /// Declared ore kind count `M`.
    pub ore_kinds: u32,
    /// Ore present in the initial board `K`.
    pub total_ore: u32,
    /// Ore dropped into matching holes `A`.
    pub placed_ore: u32,
    /// Commands in the loaded script `T`.
    pub command_count: usize,
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: {}  (N={}, M={}, K={}, A={}, T={})",
            self.score,
            self.dimension,
            self.ore_kinds,
            self.total_ore,
            self.placed_ore,
            self.command_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CellCoord, Command, ConfigurationError, Direction, HoleLabel, MalformedCommand,
        OreLetter, PuzzleLayout, ScoreReport, ScriptEntry, Tile,
    };
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn opposite_directions_pair_up() {
        for direction in Direction::ALL {
            assert_ne!(direction.opposite(), direction);
            assert_eq!(direction.opposite().opposite(), direction);
        }
        assert_eq!(Direction::Up.opposite(), Direction::Down);
    }

    #[test]
    fn neighbor_stays_within_board() {
        let corner = CellCoord::new(0, 0);
        assert_eq!(corner.neighbor(Direction::Up, 3), None);
        assert_eq!(corner.neighbor(Direction::Left, 3), None);
        assert_eq!(
            corner.neighbor(Direction::Right, 3),
            Some(CellCoord::new(0, 1))
        );
        assert_eq!(
            CellCoord::new(2, 2).neighbor(Direction::Down, 3),
            None,
            "bottom edge must not wrap"
        );
    }

    #[test]
    fn direction_tokens_are_case_insensitive() {
        assert_eq!(Direction::from_token("u"), Some(Direction::Up));
        assert_eq!(Direction::from_token("R"), Some(Direction::Right));
        assert_eq!(Direction::from_token("X"), None);
        assert_eq!(Direction::from_token("UP"), None);
    }

    #[test]
    fn ore_matches_only_uppercase_hole() {
        let ore = OreLetter::new('b').expect("lowercase letter");
        assert_eq!(ore.matching_hole(), HoleLabel::new('B').expect("label"));
        assert!(HoleLabel::new('B').expect("label").accepts(ore));
        assert!(!HoleLabel::new('A').expect("label").accepts(ore));
        assert_eq!(OreLetter::new('B'), None);
        assert_eq!(HoleLabel::new('b'), None);
    }

    #[test]
    fn tile_symbols_cover_board_alphabet() {
        assert_eq!(Tile::from_symbol('.'), Tile::Empty);
        assert_eq!(Tile::from_symbol('@'), Tile::Rock);
        assert!(matches!(Tile::from_symbol('c'), Tile::Ore(_)));
        assert!(matches!(Tile::from_symbol('C'), Tile::Hole(_)));
        assert_eq!(Tile::from_symbol('#'), Tile::Empty);
    }

    #[test]
    fn layout_places_player_on_last_start_hole() {
        let tiles = "A.A."
            .chars()
            .map(Tile::from_symbol)
            .collect::<Vec<_>>();
        let layout = PuzzleLayout::new(2, 0, tiles).expect("valid layout");
        assert_eq!(layout.player_start(), CellCoord::new(1, 0));
    }

    #[test]
    fn layout_without_start_hole_starts_at_origin() {
        let layout = PuzzleLayout::new(1, 1, vec![Tile::Empty]).expect("valid layout");
        assert_eq!(layout.player_start(), CellCoord::new(0, 0));
    }

    #[test]
    fn layout_rejects_wrong_tile_count() {
        let error = PuzzleLayout::new(2, 0, vec![Tile::Empty; 3]).expect_err("size mismatch");
        assert_eq!(
            error,
            ConfigurationError::LayoutSizeMismatch {
                dimension: 2,
                expected: 4,
                found: 3,
            }
        );
    }

    #[test]
    fn layout_rejects_zero_dimension() {
        assert!(matches!(
            PuzzleLayout::new(0, 0, Vec::new()),
            Err(ConfigurationError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn score_report_formats_summary_line() {
        let report = ScoreReport {
            score: 500_000,
            dimension: 3,
            ore_kinds: 1,
            total_ore: 2,
            placed_ore: 1,
            command_count: 4,
        };
        assert_eq!(
            report.to_string(),
            "Score: 500000  (N=3, M=1, K=2, A=1, T=4)"
        );
    }

    #[test]
    fn script_entry_round_trips_through_bincode() {
        assert_round_trip(&ScriptEntry::Command(Command::roll(Direction::Left)));
        assert_round_trip(&ScriptEntry::Malformed {
            line: "9 Q".to_owned(),
            reason: MalformedCommand::UnknownDirection("Q".to_owned()),
        });
    }

    #[test]
    fn ore_letter_rejects_invalid_symbol_on_deserialize() {
        let bytes = bincode::serialize(&'Z').expect("serialize");
        assert!(bincode::deserialize::<OreLetter>(&bytes).is_err());
    }
}
