#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Text rendering contracts for Dohyo adapters.
//!
//! A [`Scene`] is an immutable picture of the board taken from the world; a
//! [`Presenter`] turns scenes into output. The bundled [`TextPresenter`]
//! writes one character cell per board cell, bracketing the player's cell.

use std::{fmt, io::Write};

use anyhow::{Context, Result as AnyResult};
use dohyo_core::{CellCoord, EMPTY_SYMBOL};
use dohyo_world::{query, World};

/// Snapshot of the board prepared for presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scene {
    dimension: u32,
    symbols: Vec<char>,
    player: CellCoord,
    status: Option<String>,
}

impl Scene {
    /// Captures the board and player position from the world.
    #[must_use]
    pub fn from_world(world: &World) -> Self {
        let board = query::board(world);
        let symbols = board
            .rows()
            .flatten()
            .map(|cell| match (cell.object(), cell.hole()) {
                (Some(object), _) => object.symbol(),
                (None, Some(hole)) => hole.get(),
                (None, None) => EMPTY_SYMBOL,
            })
            .collect();

        Self {
            dimension: board.dimension(),
            symbols,
            player: query::player(world),
            status: None,
        }
    }

    /// Attaches a status line printed beneath the board.
    #[must_use]
    pub fn with_status<T>(mut self, status: T) -> Self
    where
        T: Into<String>,
    {
        self.status = Some(status.into());
        self
    }

    /// Status line, if one was attached.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Symbol shown for `cell`, or `None` outside the board.
    #[must_use]
    pub fn symbol_at(&self, cell: CellCoord) -> Option<char> {
        if !cell.is_within(self.dimension) {
            return None;
        }
        let index = cell.row() as usize * self.dimension as usize + cell.column() as usize;
        self.symbols.get(index).copied()
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dimension {
            for column in 0..self.dimension {
                let cell = CellCoord::new(row, column);
                let symbol = self.symbol_at(cell).unwrap_or(EMPTY_SYMBOL);
                if cell == self.player {
                    write!(f, "[{symbol}]")?;
                } else {
                    write!(f, " {symbol} ")?;
                }
            }
            writeln!(f)?;
        }
        if let Some(status) = &self.status {
            writeln!(f, "{status}")?;
        }
        Ok(())
    }
}

/// Output surface capable of presenting scenes.
pub trait Presenter {
    /// Presents a single frame.
    fn present(&mut self, scene: &Scene) -> AnyResult<()>;
}

/// Presenter that writes each scene as text to an [`io::Write`](std::io::Write) sink.
#[derive(Debug)]
pub struct TextPresenter<W> {
    writer: W,
    frames: usize,
}

impl<W: Write> TextPresenter<W> {
    /// Wraps the provided writer.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer, frames: 0 }
    }

}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present(&mut self, scene: &Scene) -> AnyResult<()> {
        if self.frames > 0 {
            writeln!(self.writer).context("failed to write frame separator")?;
        }
        write!(self.writer, "{scene}").context("failed to write frame")?;
        self.writer.flush().context("failed to flush frame")?;
        self.frames += 1;
        Ok(())
    }
}
