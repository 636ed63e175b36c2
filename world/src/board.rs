//! Dense storage for the N×N board.

use dohyo_core::{CellCoord, Direction, HoleLabel, Object, PuzzleLayout, Tile};
use thiserror::Error;

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    hole: Option<HoleLabel>,
    object: Option<Object>,
}

impl Cell {
    /// Label of the hole carved into the cell, if any.
    #[must_use]
    pub const fn hole(&self) -> Option<HoleLabel> {
        self.hole
    }

    /// Object resting on the cell, if any.
    #[must_use]
    pub const fn object(&self) -> Option<Object> {
        self.object
    }
}

/// Raised when a query addresses a cell outside the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("cell {cell} lies outside the {dimension}x{dimension} board")]
pub struct OutOfBounds {
    /// Requested cell.
    pub cell: CellCoord,
    /// Board dimension at the time of the query.
    pub dimension: u32,
}

/// Square grid of cells stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    dimension: u32,
    cells: Vec<Cell>,
}

impl Board {
    /// Builds the board described by a parsed puzzle layout.
    #[must_use]
    pub fn from_layout(layout: &PuzzleLayout) -> Self {
        let dimension = layout.dimension();
        let capacity_u64 = u64::from(dimension) * u64::from(dimension);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        let mut board = Self {
            dimension,
            cells: vec![Cell::default(); capacity],
        };

        for (index, tile) in layout.tiles().iter().enumerate() {
            let Some(slot) = board.cells.get_mut(index) else {
                break;
            };
            match tile {
                Tile::Empty => {}
                Tile::Hole(label) => slot.hole = Some(*label),
                Tile::Rock | Tile::Ore(_) => slot.object = tile.object(),
            }
        }

        board
    }

    /// Number of cells along each side.
    #[must_use]
    pub const fn dimension(&self) -> u32 {
        self.dimension
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if !cell.is_within(self.dimension) {
            return None;
        }
        let row = usize::try_from(cell.row()).ok()?;
        let column = usize::try_from(cell.column()).ok()?;
        let width = usize::try_from(self.dimension).ok()?;
        Some(row * width + column)
    }

    /// Returns the cell at `cell`.
    pub fn cell_at(&self, cell: CellCoord) -> Result<&Cell, OutOfBounds> {
        self.index(cell)
            .and_then(|index| self.cells.get(index))
            .ok_or(OutOfBounds {
                cell,
                dimension: self.dimension,
            })
    }

    /// Reports whether an object rests on the cell. Cells off the board are never occupied.
    #[must_use]
    pub fn is_occupied(&self, cell: CellCoord) -> bool {
        self.object_at(cell).is_some()
    }

    /// Reports whether the cell is a hole.
    #[must_use]
    pub fn is_hole(&self, cell: CellCoord) -> bool {
        self.hole_label(cell).is_some()
    }

    /// Label of the hole at `cell`, if the cell is a hole.
    #[must_use]
    pub fn hole_label(&self, cell: CellCoord) -> Option<HoleLabel> {
        self.cell_at(cell).ok().and_then(Cell::hole)
    }

    /// Object resting on `cell`, if any.
    #[must_use]
    pub fn object_at(&self, cell: CellCoord) -> Option<Object> {
        self.cell_at(cell).ok().and_then(Cell::object)
    }

    /// Adjacent cell in `direction`, or `None` at the board edge.
    #[must_use]
    pub fn neighbor(&self, cell: CellCoord, direction: Direction) -> Option<CellCoord> {
        cell.neighbor(direction, self.dimension)
    }

    /// Iterator over the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        let width = usize::try_from(self.dimension).unwrap_or(0).max(1);
        self.cells.chunks(width)
    }

    /// Number of objects currently on the board.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.object.is_some()).count()
    }

    pub(crate) fn place_object(&mut self, cell: CellCoord, object: Object) {
        if let Some(index) = self.index(cell) {
            if let Some(slot) = self.cells.get_mut(index) {
                slot.object = Some(object);
            }
        }
    }

    pub(crate) fn clear_object(&mut self, cell: CellCoord) -> Option<Object> {
        let index = self.index(cell)?;
        self.cells.get_mut(index).and_then(|slot| slot.object.take())
    }
}
