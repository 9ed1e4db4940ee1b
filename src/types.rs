//! This module defines the core data structures and types used throughout the locator,
//! including tape symbols, scan directions, state identifiers, transition rules,
//! execution results, and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::Rule;

/// The delimiter marking both ends of a tape.
pub const DELIMITER: Symbol = Symbol::Y;
/// The separator between the target and each candidate block.
pub const SEPARATOR: Symbol = Symbol::X;

/// A single cell value on the locator's tape.
///
/// `Zero`/`One` are the raw bits, `A`/`B` are the markers a bit is relabelled to
/// while it is being compared, `X` separates blocks and `Y` delimits the tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Symbol {
    Zero,
    One,
    A,
    B,
    X,
    Y,
}

impl TryFrom<char> for Symbol {
    type Error = LocatorError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0' => Ok(Symbol::Zero),
            '1' => Ok(Symbol::One),
            'A' => Ok(Symbol::A),
            'B' => Ok(Symbol::B),
            'X' => Ok(Symbol::X),
            'Y' => Ok(Symbol::Y),
            other => Err(LocatorError::InvalidSymbol(other)),
        }
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::Zero => '0',
            Symbol::One => '1',
            Symbol::A => 'A',
            Symbol::B => 'B',
            Symbol::X => 'X',
            Symbol::Y => 'Y',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// Represents the direction a state moves the cursor while searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the cursor one position to the left.
    Left,
    /// Move the cursor one position to the right.
    Right,
}

/// The two terminal verdicts. They end a run and are not states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The target matched a candidate block.
    Copy,
    /// Every candidate block was scanned without a match.
    Halt,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Copy => write!(f, "Copy"),
            Verdict::Halt => write!(f, "Halt"),
        }
    }
}

/// Identifies one of the six fixed states of the locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateId {
    Left1,
    Left2,
    Right1,
    Right2,
    Right3,
    Right4,
}

impl StateId {
    /// Every state, in table order.
    pub const ALL: [StateId; 6] = [
        StateId::Left1,
        StateId::Left2,
        StateId::Right1,
        StateId::Right2,
        StateId::Right3,
        StateId::Right4,
    ];

    /// The direction this state scans in.
    pub fn direction(self) -> Direction {
        match self {
            StateId::Left1 | StateId::Left2 => Direction::Left,
            StateId::Right1 | StateId::Right2 | StateId::Right3 | StateId::Right4 => {
                Direction::Right
            }
        }
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Where the machine goes after a rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Next {
    /// Remain in the current state.
    Stay,
    /// Transition to another state.
    Goto(StateId),
    /// End the run with a verdict.
    Terminal(Verdict),
}

/// A single transition rule: when `read` is found, optionally write `write`
/// under the cursor and continue according to `next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub read: Symbol,
    pub write: Option<Symbol>,
    pub next: Next,
}

/// Represents the outcome of a single `process` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A rule fired and the run continues.
    Continue,
    /// The run produced a terminal verdict.
    Halt(Verdict),
}

/// The result handed back to the caller once a run terminates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// The final tape contents. Same length as the input tape.
    pub tape: String,
    /// The terminal verdict.
    pub verdict: Verdict,
    /// How many rules fired before the verdict.
    pub steps: usize,
}

/// Represents various errors that can occur while loading or running the locator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocatorError {
    /// Indicates a syntax error in a tape string.
    #[error("Tape parsing error: {0}")]
    ParseError(#[from] Box<pest::error::Error<Rule>>),
    /// Indicates a tape that is syntactically fine but breaks the input contract.
    #[error("Invalid input: {0}")]
    ValidationError(String),
    /// Indicates a character outside the tape alphabet.
    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(char),
    /// Indicates an access outside the tape. Unreachable unless the engine is broken.
    #[error("Tape index {index} is out of bounds (tape length {len})")]
    TapeBoundary { index: usize, len: usize },
    /// Indicates that a state has no rule for a symbol it accepted.
    #[error("No rule defined for state {state} and symbol {symbol}")]
    UndefinedTransition { state: StateId, symbol: Symbol },
    /// Indicates an error reading tape files.
    #[error("File error: {0}")]
    FileError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_char_conversion() {
        for c in ['0', '1', 'A', 'B', 'X', 'Y'] {
            let symbol = Symbol::try_from(c).unwrap();
            assert_eq!(char::from(symbol), c);
        }

        assert_eq!(Symbol::try_from('2'), Err(LocatorError::InvalidSymbol('2')));
    }

    #[test]
    fn test_symbol_serialization() {
        let json = serde_json::to_string(&Symbol::One).unwrap();
        assert_eq!(json, "\"1\"");

        let symbol: Symbol = serde_json::from_str("\"Y\"").unwrap();
        assert_eq!(symbol, Symbol::Y);
        assert!(serde_json::from_str::<Symbol>("\"Z\"").is_err());
    }

    #[test]
    fn test_state_direction() {
        assert_eq!(StateId::Left1.direction(), Direction::Left);
        assert_eq!(StateId::Left2.direction(), Direction::Left);

        for id in [
            StateId::Right1,
            StateId::Right2,
            StateId::Right3,
            StateId::Right4,
        ] {
            assert_eq!(id.direction(), Direction::Right);
        }
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Copy.to_string(), "Copy");
        assert_eq!(Verdict::Halt.to_string(), "Halt");
        assert_eq!(serde_json::to_string(&Verdict::Halt).unwrap(), "\"Halt\"");
    }

    #[test]
    fn test_error_display() {
        let error = LocatorError::TapeBoundary { index: 7, len: 3 };

        let error_msg = format!("{}", error);
        assert!(error_msg.contains("out of bounds"));
        assert!(error_msg.contains('7'));
    }
}
