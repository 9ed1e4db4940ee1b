//! This module defines the `Tape`, a fixed-length buffer of symbols with a cursor
//! that is clamped to the tape's ends.

use crate::types::{Direction, LocatorError, Symbol, SEPARATOR};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// A fixed-length, mutable sequence of symbols with a cursor.
///
/// The length never changes after construction and the cursor always satisfies
/// `0 <= head < len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Box<[Symbol]>,
    head: usize,
}

impl Tape {
    /// Creates a tape from `cells` with the cursor at `head`.
    ///
    /// # Returns
    ///
    /// * `Err(LocatorError::ValidationError)` if `cells` is empty.
    /// * `Err(LocatorError::TapeBoundary)` if `head` is not a valid index.
    pub fn new(cells: Vec<Symbol>, head: usize) -> Result<Self, LocatorError> {
        if cells.is_empty() {
            return Err(LocatorError::ValidationError("Empty tape".to_string()));
        }

        if head >= cells.len() {
            return Err(LocatorError::TapeBoundary {
                index: head,
                len: cells.len(),
            });
        }

        Ok(Self {
            cells: cells.into_boxed_slice(),
            head,
        })
    }

    /// Returns the symbol at `index`.
    pub fn at(&self, index: usize) -> Result<Symbol, LocatorError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(LocatorError::TapeBoundary {
                index,
                len: self.cells.len(),
            })
    }

    /// Overwrites the symbol at `index`.
    pub fn set(&mut self, index: usize, symbol: Symbol) -> Result<(), LocatorError> {
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(LocatorError::TapeBoundary { index, len })?;
        *cell = symbol;
        Ok(())
    }

    /// Moves the cursor one cell in `direction` and returns the new position.
    ///
    /// Movement is clamped: moving left from `0` stays at `0`, moving right from the
    /// last cell stays on the last cell.
    pub fn shift(&mut self, direction: Direction) -> usize {
        self.head = match direction {
            Direction::Left => self.head.saturating_sub(1),
            Direction::Right => (self.head + 1).min(self.cells.len() - 1),
        };
        trace!(head = self.head, ?direction, "cursor moved");
        self.head
    }

    /// Returns the symbol under the cursor.
    pub fn current(&self) -> Result<Symbol, LocatorError> {
        self.at(self.head)
    }

    /// Returns the cursor position.
    pub fn head(&self) -> usize {
        self.head
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a tape holds at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.cells
    }
}

impl FromStr for Tape {
    type Err = LocatorError;

    /// Builds a tape from raw symbols with the cursor on the first `X` (or at `0`
    /// if there is none). No input-contract checks are applied; see
    /// [`crate::parser::parse`] for that.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .map(Symbol::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let head = cells
            .iter()
            .position(|&symbol| symbol == SEPARATOR)
            .unwrap_or(0);

        Tape::new(cells, head)
    }
}

impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.cells.iter() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
