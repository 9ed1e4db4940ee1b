//! This module holds the locator's six states and their fixed transition tables.
//!
//! Each state scans in a single direction, skipping every symbol it does not
//! accept, and reacts only to the first accepted symbol it finds.

use crate::tape::Tape;
use crate::types::{Direction, LocatorError, Next, StateId, Symbol, Transition, Verdict};
use tracing::debug;

/// One node of the transition table.
#[derive(Debug, PartialEq, Eq)]
pub struct State {
    id: StateId,
    transitions: &'static [Transition],
}

const fn rule(read: Symbol, write: Option<Symbol>, next: Next) -> Transition {
    Transition { read, write, next }
}

// Relabels target bits to markers until the opening delimiter.
const LEFT1: &[Transition] = &[
    rule(Symbol::Zero, Some(Symbol::A), Next::Stay),
    rule(Symbol::One, Some(Symbol::B), Next::Stay),
    rule(Symbol::Y, None, Next::Goto(StateId::Right1)),
];

const LEFT2: &[Transition] = &[rule(Symbol::Y, None, Next::Goto(StateId::Right1))];

// Restores the next marked target bit, or declares a match at the separator.
const RIGHT1: &[Transition] = &[
    rule(Symbol::A, Some(Symbol::Zero), Next::Goto(StateId::Right2)),
    rule(Symbol::B, Some(Symbol::One), Next::Goto(StateId::Right3)),
    rule(Symbol::X, None, Next::Terminal(Verdict::Copy)),
];

// Expects a 0 in the candidate.
const RIGHT2: &[Transition] = &[
    rule(Symbol::Zero, Some(Symbol::A), Next::Goto(StateId::Left2)),
    rule(Symbol::One, Some(Symbol::B), Next::Goto(StateId::Right4)),
];

// Expects a 1 in the candidate.
const RIGHT3: &[Transition] = &[
    rule(Symbol::Zero, Some(Symbol::A), Next::Goto(StateId::Right4)),
    rule(Symbol::One, Some(Symbol::B), Next::Goto(StateId::Left2)),
];

// Mismatch: skip to the next candidate, or give up at the closing delimiter.
const RIGHT4: &[Transition] = &[
    rule(Symbol::X, None, Next::Goto(StateId::Left1)),
    rule(Symbol::Y, None, Next::Terminal(Verdict::Halt)),
];

/// The process-wide state table, indexed in `StateId::ALL` order.
pub static STATES: [State; 6] = [
    State {
        id: StateId::Left1,
        transitions: LEFT1,
    },
    State {
        id: StateId::Left2,
        transitions: LEFT2,
    },
    State {
        id: StateId::Right1,
        transitions: RIGHT1,
    },
    State {
        id: StateId::Right2,
        transitions: RIGHT2,
    },
    State {
        id: StateId::Right3,
        transitions: RIGHT3,
    },
    State {
        id: StateId::Right4,
        transitions: RIGHT4,
    },
];

impl StateId {
    /// Returns the constant `State` this identifier names.
    pub fn state(self) -> &'static State {
        &STATES[self as usize]
    }
}

impl State {
    pub fn id(&self) -> StateId {
        self.id
    }

    pub fn direction(&self) -> Direction {
        self.id.direction()
    }

    pub fn transitions(&self) -> &'static [Transition] {
        self.transitions
    }

    /// Returns the rule for `symbol`, if this state accepts it.
    pub fn transition(&self, symbol: Symbol) -> Option<&'static Transition> {
        self.transitions.iter().find(|t| t.read == symbol)
    }

    pub fn accepts(&self, symbol: Symbol) -> bool {
        self.transition(symbol).is_some()
    }

    /// Moves the cursor one cell in this state's direction.
    pub fn shift(&self, tape: &mut Tape) -> usize {
        tape.shift(self.direction())
    }

    /// Shifts, then inspects, until an accepted symbol is under the cursor.
    ///
    /// The symbol under the cursor on entry is never inspected. If no accepted
    /// symbol lies ahead, the cursor clamps at the tape end and this never returns.
    /// [`crate::parser::parse`] does not rule that out for a later candidate shorter
    /// than the target.
    pub fn read(&self, tape: &mut Tape) -> Result<Symbol, LocatorError> {
        loop {
            self.shift(tape);
            let symbol = tape.current()?;
            if self.accepts(symbol) {
                return Ok(symbol);
            }
        }
    }

    /// Reads the next accepted symbol and applies its write.
    ///
    /// Returns the rule that fired so the caller can follow its `next`.
    pub fn process(&self, tape: &mut Tape) -> Result<&'static Transition, LocatorError> {
        let symbol = self.read(tape)?;
        let transition = self
            .transition(symbol)
            .ok_or(LocatorError::UndefinedTransition {
                state: self.id,
                symbol,
            })?;

        if let Some(write) = transition.write {
            tape.set(tape.head(), write)?;
        }

        debug!(
            state = %self.id,
            head = tape.head(),
            read = %symbol,
            write = ?transition.write,
            next = ?transition.next,
            "rule fired"
        );

        Ok(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_id() {
        for id in StateId::ALL {
            assert_eq!(id.state().id(), id);
        }
    }

    #[test]
    fn test_transition_table() {
        use Next::*;
        use StateId::*;
        use Symbol::*;

        let expected: [(StateId, Symbol, Option<Symbol>, Next); 13] = [
            (Left1, Zero, Some(A), Stay),
            (Left1, One, Some(B), Stay),
            (Left1, Y, None, Goto(Right1)),
            (Left2, Y, None, Goto(Right1)),
            (Right1, A, Some(Zero), Goto(Right2)),
            (Right1, B, Some(One), Goto(Right3)),
            (Right1, X, None, Terminal(Verdict::Copy)),
            (Right2, Zero, Some(A), Goto(Left2)),
            (Right2, One, Some(B), Goto(Right4)),
            (Right3, Zero, Some(A), Goto(Right4)),
            (Right3, One, Some(B), Goto(Left2)),
            (Right4, X, None, Goto(Left1)),
            (Right4, Y, None, Terminal(Verdict::Halt)),
        ];

        for (id, read, write, next) in expected {
            let transition = id.state().transition(read).unwrap();
            assert_eq!(transition.write, write, "{id} on {read}");
            assert_eq!(transition.next, next, "{id} on {read}");
        }

        let total: usize = STATES.iter().map(|s| s.transitions().len()).sum();
        assert_eq!(total, expected.len());
    }

    #[test]
    fn test_read_moves_before_inspecting() {
        // The cursor starts on a `0` that Left1 accepts, but it is skipped.
        let mut tape = Tape::new(vec![Symbol::Y, Symbol::Zero, Symbol::X], 1).unwrap();

        let symbol = StateId::Left1.state().read(&mut tape).unwrap();
        assert_eq!(symbol, Symbol::Y);
        assert_eq!(tape.head(), 0);
    }

    #[test]
    fn test_read_skips_unaccepted_symbols() {
        let mut tape: Tape = "Y1ABX0Y".parse().unwrap();
        tape.shift(Direction::Left);
        tape.shift(Direction::Left);
        tape.shift(Direction::Left);
        assert_eq!(tape.head(), 1);

        // Right2 accepts only digits, so markers and the separator are skipped.
        let symbol = StateId::Right2.state().read(&mut tape).unwrap();
        assert_eq!(symbol, Symbol::Zero);
        assert_eq!(tape.head(), 5);
    }

    #[test]
    fn test_read_accepts_boundary_symbol_after_clamp() {
        // Left2 bumps into position 0 and finds the delimiter there.
        let mut tape = Tape::new(vec![Symbol::Y, Symbol::One, Symbol::A], 2).unwrap();

        assert_eq!(StateId::Left2.state().read(&mut tape).unwrap(), Symbol::Y);
        assert_eq!(tape.head(), 0);
    }

    #[test]
    fn test_process_writes_under_cursor() {
        let mut tape: Tape = "Y10X".parse().unwrap();

        let transition = StateId::Left1.state().process(&mut tape).unwrap();
        assert_eq!(transition.next, Next::Stay);
        assert_eq!(tape.head(), 2);
        assert_eq!(tape.to_string(), "Y1AX");
    }

    #[test]
    fn test_process_without_write() {
        let mut tape: Tape = "YBAX".parse().unwrap();

        let transition = StateId::Left1.state().process(&mut tape).unwrap();
        assert_eq!(transition.next, Next::Goto(StateId::Right1));
        assert_eq!(tape.head(), 0);
        assert_eq!(tape.to_string(), "YBAX");
    }

    #[test]
    fn test_terminal_rules_do_not_write() {
        let mut tape = Tape::new(vec![Symbol::Y, Symbol::Zero, Symbol::X], 0).unwrap();

        let transition = StateId::Right1.state().process(&mut tape).unwrap();
        assert_eq!(transition.next, Next::Terminal(Verdict::Copy));
        assert_eq!(tape.to_string(), "Y0X");
    }
}
