//! This crate simulates the locator sub-machine of Minsky's universal copier: a fixed
//! six-state Turing machine that compares a target bit-pattern against one or more
//! candidate blocks on a single tape and ends with a `Copy` or `Halt` verdict.
//! It includes modules for parsing and validating tapes, the tape itself, the state
//! table, the run loop, and a collection of built-in sample tapes.

pub mod analyzer;
pub mod loader;
pub mod machine;
pub mod parser;
pub mod samples;
pub mod states;
pub mod tape;
pub mod types;

/// Re-exports the `Rule` enum from the parser module, used by the `pest` grammar.
pub use crate::parser::Rule;
/// Re-exports the `analyze` function and `AnalysisError` enum from the analyzer module.
pub use analyzer::{analyze, AnalysisError};
/// Re-exports the `TapeLoader` struct from the loader module.
pub use loader::TapeLoader;
/// Re-exports the `Locator` run context and the `run` entry point from the machine module.
pub use machine::{run, Locator};
/// Re-exports the parsing entry points and `Layout` from the parser module.
pub use parser::{parse, parse_unchecked, Layout};
/// Re-exports `Sample`, `SampleManager`, and `SAMPLES` from the samples module.
pub use samples::{Sample, SampleManager, SAMPLES};
/// Re-exports the `State` constants from the states module.
pub use states::{State, STATES};
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports the types that describe symbols, states, rules and results.
pub use types::{
    Direction, LocatorError, Next, Outcome, StateId, Step, Symbol, Transition, Verdict,
};
