//! This module defines the `Locator`, which drives the six-state machine over a tape
//! until it produces a terminal verdict.

use crate::states::State;
use crate::tape::Tape;
use crate::types::{LocatorError, Next, Outcome, StateId, Step, Verdict};
use tracing::info;

/// The state the locator starts in.
pub const INITIAL_STATE: StateId = StateId::Left1;

/// The run context of a single locator invocation.
///
/// Owns its tape exclusively; the states it walks through are shared constants.
pub struct Locator {
    tape: Tape,
    state: StateId,
    verdict: Option<Verdict>,
    step_count: usize,
}

impl Locator {
    /// Creates a locator over `tape`, seeded in [`INITIAL_STATE`].
    pub fn new(tape: Tape) -> Self {
        Self {
            tape,
            state: INITIAL_STATE,
            verdict: None,
            step_count: 0,
        }
    }

    /// Executes a single `process` of the current state.
    ///
    /// Once a verdict has been produced, further calls return it again without
    /// touching the tape.
    pub fn step(&mut self) -> Result<Step, LocatorError> {
        if let Some(verdict) = self.verdict {
            return Ok(Step::Halt(verdict));
        }

        let transition = self.current().process(&mut self.tape)?;
        self.step_count += 1;

        match transition.next {
            Next::Stay => Ok(Step::Continue),
            Next::Goto(next) => {
                self.state = next;
                Ok(Step::Continue)
            }
            Next::Terminal(verdict) => {
                info!(%verdict, steps = self.step_count, "locator finished");
                self.verdict = Some(verdict);
                Ok(Step::Halt(verdict))
            }
        }
    }

    /// Runs until a verdict is produced.
    ///
    /// There is no step limit. A tape whose later candidate is shorter than the
    /// target keeps the machine scanning forever, even though it passes `parse`.
    pub fn run(&mut self) -> Result<Verdict, LocatorError> {
        loop {
            if let Step::Halt(verdict) = self.step()? {
                return Ok(verdict);
            }
        }
    }

    /// Returns the identifier of the current state.
    pub fn state(&self) -> StateId {
        self.state
    }

    fn current(&self) -> &'static State {
        self.state.state()
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Returns the verdict, if the run has terminated.
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// Returns the number of rules fired so far.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Consumes the locator and returns the tape it was running on.
    pub fn into_tape(self) -> Tape {
        self.tape
    }
}

/// Runs the locator over `tape` and returns the final tape with its verdict.
pub fn run(tape: Tape) -> Result<Outcome, LocatorError> {
    let mut locator = Locator::new(tape);
    let verdict = locator.run()?;

    Ok(Outcome {
        tape: locator.tape.to_string(),
        verdict,
        steps: locator.step_count,
    })
}
