//! This module provides the parser for locator tapes, utilizing the `pest` crate.
//! It defines the grammar for tape strings and turns a string into a validated `Layout`
//! that the engine can run on.

use crate::{
    analyzer::analyze,
    tape::Tape,
    types::{LocatorError, Symbol, DELIMITER},
};
use pest::{iterators::Pair, Parser as PestParser};
use pest_derive::Parser as PestParser;
use std::fmt;
use std::ops::Range;

/// Derives a `PestParser` for the tape grammar defined in `grammar.pest`.
#[derive(PestParser)]
#[grammar = "grammar.pest"]
pub struct TapeParser;

/// A parsed tape together with the target/candidate boundaries.
///
/// `segments` are the raw ranges between separators, exactly as written: the first
/// one still carries the opening delimiter and the last one the closing delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    symbols: Vec<Symbol>,
    segments: Vec<Range<usize>>,
}

impl Layout {
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The raw segments between separators.
    pub fn segments(&self) -> &[Range<usize>] {
        &self.segments
    }

    /// The target bits: the first segment without its delimiters.
    pub fn target(&self) -> Range<usize> {
        let first = self.segments.first().cloned().unwrap_or_default();
        trim_delimiters(&self.symbols, first)
    }

    /// The candidate blocks, with the closing delimiter excluded from the last one.
    pub fn candidates(&self) -> Vec<Range<usize>> {
        let count = self.segments.len();
        self.segments
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, segment)| {
                let mut segment = segment.clone();
                let closing =
                    segment.end > segment.start && self.symbols[segment.end - 1] == DELIMITER;
                if i + 1 == count && closing {
                    segment.end -= 1;
                }
                segment
            })
            .collect()
    }

    /// The position of the first separator, where the engine's cursor starts.
    pub fn head(&self) -> usize {
        self.segments.first().map_or(0, |segment| segment.end)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Builds the tape the engine runs on, with the cursor on the first separator.
    pub fn tape(&self) -> Result<Tape, LocatorError> {
        Tape::new(self.symbols.clone(), self.head())
    }

    #[cfg(test)]
    pub(crate) fn segment_symbols(&self, range: Range<usize>) -> &[Symbol] {
        &self.symbols[range]
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl TryFrom<&Layout> for Tape {
    type Error = LocatorError;

    fn try_from(layout: &Layout) -> Result<Self, Self::Error> {
        layout.tape()
    }
}

fn trim_delimiters(symbols: &[Symbol], mut range: Range<usize>) -> Range<usize> {
    while range.start < range.end && symbols[range.start] == DELIMITER {
        range.start += 1;
    }
    while range.end > range.start && symbols[range.end - 1] == DELIMITER {
        range.end -= 1;
    }
    range
}

/// Parses the given tape string into a validated `Layout`.
///
/// This is the main entry point for turning user input into engine input. It trims
/// the input, parses it using the `TapeParser`, and then checks the result against
/// the locator's input contract.
///
/// # Arguments
///
/// * `input` - A string slice containing the tape, e.g. `"Y11X00Y"`.
///
/// # Returns
///
/// * `Ok(Layout)` if the input is successfully parsed and validated.
/// * `Err(LocatorError::ParseError)` if the input contains symbols outside the alphabet.
/// * `Err(LocatorError::ValidationError)` if the tape breaks the input contract.
pub fn parse(input: &str) -> Result<Layout, LocatorError> {
    let layout = parse_unchecked(input)?;

    analyze(&layout)?;

    Ok(layout)
}

/// Parses a tape string into a `Layout` without applying the input-contract checks.
pub fn parse_unchecked(input: &str) -> Result<Layout, LocatorError> {
    let input = input.trim();
    let root = TapeParser::parse(Rule::tape, input)
        .map_err(|e| LocatorError::ParseError(Box::new(e)))?
        .next()
        .ok_or_else(|| LocatorError::ValidationError("Empty tape".to_string()))?;

    parse_layout(input, root)
}

/// Collects the symbols and segment boundaries from a `Pair<Rule::tape>`.
fn parse_layout(input: &str, pair: Pair<Rule>) -> Result<Layout, LocatorError> {
    let symbols = input
        .chars()
        .map(Symbol::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    // Rule: tape > [segment]
    let segments = pair
        .into_inner()
        .filter(|p| p.as_rule() == Rule::segment)
        .map(|p| {
            let span = p.as_span();
            span.start()..span.end()
        })
        .collect();

    Ok(Layout { symbols, segments })
}
