//! This module checks parsed tapes against the locator's input contract before they
//! reach the engine. The engine itself performs no validation.
//!
//! Passing these checks is not a termination guarantee. Only the first candidate's
//! length is checked, so a later candidate shorter than the target (e.g. `Y11X011XY`)
//! is accepted and leaves the machine scanning forever against the closing delimiter.
//! Callers must not hand such tapes to the engine.

use crate::parser::Layout;
use crate::types::{LocatorError, DELIMITER};

/// Represents the ways a parsed tape can break the input contract.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AnalysisError {
    /// The tape does not start and end with the delimiter `Y`.
    ImproperDelimiters,
    /// There is no separator `X`, or the target before it is empty.
    MissingTarget,
    /// The target is not strictly shorter than the first candidate block.
    LengthMismatch { target: usize, candidate: usize },
}

impl From<AnalysisError> for LocatorError {
    /// Converts an `AnalysisError` into a `LocatorError::ValidationError`.
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::ImproperDelimiters => {
                LocatorError::ValidationError("Improper delimiters".to_string())
            }
            AnalysisError::MissingTarget => {
                LocatorError::ValidationError("No target--location pair".to_string())
            }
            AnalysisError::LengthMismatch { target, candidate } => {
                LocatorError::ValidationError(format!(
                    "Target--location lengths don't match: target has {} symbols, \
                     first candidate block has {}",
                    target, candidate
                ))
            }
        }
    }
}

/// Analyzes a parsed `Layout` against the input contract.
///
/// The checks run in order and the first failure is reported.
///
/// # Returns
///
/// * `Ok(())` if the tape passes every check.
/// * `Err(LocatorError::ValidationError)` describing the first violated rule.
pub fn analyze(layout: &Layout) -> Result<(), LocatorError> {
    let errors = [check_delimiters, check_target, check_lengths]
        .iter()
        .filter_map(|f| f(layout).err())
        .collect::<Vec<_>>();

    if let Some(first_error) = errors.first() {
        return Err(first_error.clone().into());
    }

    Ok(())
}

/// Checks that the tape opens and closes with the delimiter.
fn check_delimiters(layout: &Layout) -> Result<(), AnalysisError> {
    let symbols = layout.symbols();
    match (symbols.first(), symbols.last()) {
        (Some(&first), Some(&last)) if first == DELIMITER && last == DELIMITER => Ok(()),
        _ => Err(AnalysisError::ImproperDelimiters),
    }
}

/// Checks that a separator exists and that the target before it holds at least one symbol.
fn check_target(layout: &Layout) -> Result<(), AnalysisError> {
    if layout.segments().len() < 2 || layout.target().is_empty() {
        return Err(AnalysisError::MissingTarget);
    }

    Ok(())
}

/// Checks that the target is strictly shorter than the first candidate block.
///
/// The block is measured raw, up to the next separator or the end of the tape, so a
/// lone candidate counts its closing delimiter.
fn check_lengths(layout: &Layout) -> Result<(), AnalysisError> {
    let Some(candidate) = layout.segments().get(1) else {
        // Reported by `check_target`.
        return Ok(());
    };

    let target = layout.target().len();
    let candidate = candidate.len();
    if target == 0 || target >= candidate {
        return Err(AnalysisError::LengthMismatch { target, candidate });
    }

    Ok(())
}
