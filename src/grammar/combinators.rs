//! # Grammar Combinators
//!
//! This module implements the grammar expressions that form the building
//! blocks of the engine. A grammar is a tree of [`Expr`] values composed
//! from four expression types:
//!
//! * **Terminal**: matches a fixed literal at the start of the remaining input
//! * **Epsilon**: matches nothing, always succeeds
//! * **Sequence**: ordered composition, every component must match in order
//! * **OrderedChoice**: ordered alternation, the first matching alternative
//!   wins and later ones are never tried
//!
//! Evaluation is depth-first and synchronous. Failure carries no side
//! effects: a child is always evaluated at an explicit position and a failed
//! attempt simply leaves that position unused, which is all the rollback an
//! ordered choice needs before trying the next alternative.

use std::fmt;

use tracing::{debug, trace};

use super::core::{EvalResult, Expression, GrammarError, MatchError};
use crate::ast::SyntaxNode;

/// Terminal: matches a fixed literal string.
///
/// The literal must be non-empty; a zero-length match is expressed with
/// [`Epsilon`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    literal: String,
}

impl Terminal {
    /// Creates a terminal expression for the given literal.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::InvalidTerminal`] if the literal is empty.
    pub fn new(literal: impl Into<String>) -> Result<Self, GrammarError> {
        let literal = literal.into();
        if literal.is_empty() {
            return Err(GrammarError::InvalidTerminal);
        }
        Ok(Self { literal })
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl Expression for Terminal {
    fn evaluate(&self, input: &str, pos: usize) -> EvalResult {
        let rest = input.get(pos..).unwrap_or("");
        if rest.starts_with(&self.literal) {
            trace!(
                target: "grammar::terminal",
                literal = %self.literal,
                position = pos,
                "consumed terminal"
            );
            Ok((pos + self.literal.len(), SyntaxNode::terminal(&self.literal)))
        } else {
            let found: String = rest.chars().take(self.literal.chars().count()).collect();
            trace!(
                target: "grammar::terminal",
                expected = %self.literal,
                found = %found,
                position = pos,
                "terminal mismatch"
            );
            Err(MatchError::TerminalMismatch {
                expected: self.literal.clone(),
                found,
                position: pos,
            })
        }
    }
}

/// Epsilon: the dedicated zero-length match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Epsilon;

impl Epsilon {
    pub fn new() -> Self {
        Self
    }
}

impl Expression for Epsilon {
    fn evaluate(&self, _input: &str, pos: usize) -> EvalResult {
        trace!(target: "grammar::epsilon", position = pos, "matched epsilon");
        Ok((pos, SyntaxNode::Epsilon))
    }
}

/// Sequence: ordered composition of expressions.
///
/// Every component must match, in declared order, against the progressively
/// advanced input. The first component failure aborts the whole sequence and
/// the component's error propagates to the caller unchanged; no partial
/// match is ever returned and the caller's position is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    children: Vec<Expr>,
}

impl Sequence {
    /// Creates a sequence from the given components, in order.
    ///
    /// The child list is taken as-is; composition that splices nested
    /// sequences flat goes through
    /// [`sequence_of`](super::prelude::sequence_of).
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::SequenceArity`] for fewer than two components.
    pub fn new(children: Vec<Expr>) -> Result<Self, GrammarError> {
        if children.len() < 2 {
            return Err(GrammarError::SequenceArity {
                got: children.len(),
            });
        }
        Ok(Self { children })
    }

    pub fn children(&self) -> &[Expr] {
        &self.children
    }

    pub(crate) fn into_children(self) -> Vec<Expr> {
        self.children
    }
}

impl Expression for Sequence {
    fn evaluate(&self, input: &str, pos: usize) -> EvalResult {
        let mut current_pos = pos;
        let mut consumed = String::new();
        let mut nodes = Vec::with_capacity(self.children.len());

        for child in &self.children {
            match child.evaluate(input, current_pos) {
                Ok((new_pos, node)) => {
                    // The consumed text is read off the child's result, not
                    // re-derived from the input.
                    consumed.push_str(node.text());
                    nodes.push(node);
                    current_pos = new_pos;
                }
                Err(e) => {
                    trace!(
                        target: "grammar::sequence",
                        error = %e,
                        position = current_pos,
                        matched = nodes.len(),
                        "sequence aborted by component failure"
                    );
                    return Err(e);
                }
            }
        }

        debug!(
            target: "grammar::sequence",
            consumed = %consumed,
            position = pos,
            "sequence matched"
        );
        Ok((current_pos, SyntaxNode::sequence(consumed, nodes)))
    }
}

/// OrderedChoice: ordered alternation.
///
/// Alternatives are tried strictly in declared order, each at the original
/// position; the first success short-circuits the remaining alternatives
/// even if they would also match. If every alternative fails, the failure
/// aggregates each alternative's own error in attempt order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedChoice {
    alternatives: Vec<Expr>,
}

impl OrderedChoice {
    /// Creates an ordered choice over the given alternatives, in order.
    ///
    /// The alternative list is taken as-is; flattening composition goes
    /// through [`ordered_choice_of`](super::prelude::ordered_choice_of).
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::ChoiceArity`] for fewer than two alternatives.
    pub fn new(alternatives: Vec<Expr>) -> Result<Self, GrammarError> {
        if alternatives.len() < 2 {
            return Err(GrammarError::ChoiceArity {
                got: alternatives.len(),
            });
        }
        Ok(Self { alternatives })
    }

    pub fn alternatives(&self) -> &[Expr] {
        &self.alternatives
    }

    pub(crate) fn into_alternatives(self) -> Vec<Expr> {
        self.alternatives
    }
}

impl Expression for OrderedChoice {
    fn evaluate(&self, input: &str, pos: usize) -> EvalResult {
        let mut attempts = Vec::with_capacity(self.alternatives.len());

        for (index, alternative) in self.alternatives.iter().enumerate() {
            match alternative.evaluate(input, pos) {
                Ok((new_pos, node)) => {
                    debug!(
                        target: "grammar::ordered_choice",
                        alternative = index,
                        consumed = %node.text(),
                        position = pos,
                        "alternative matched"
                    );
                    return Ok((new_pos, SyntaxNode::choice(index, node)));
                }
                Err(e) => {
                    trace!(
                        target: "grammar::ordered_choice",
                        alternative = index,
                        error = %e,
                        position = pos,
                        "alternative failed"
                    );
                    attempts.push(e);
                }
            }
        }

        Err(MatchError::NoAlternativeMatched {
            position: pos,
            attempts,
        })
    }
}

/// A grammar expression.
///
/// The composition type over the four expression structs. A grammar is
/// immutable once constructed: a terminal's literal and a composite's child
/// list never change, and evaluation threads all transient state through
/// result values, so one `Expr` can be shared between any number of parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Terminal(Terminal),
    Epsilon(Epsilon),
    Sequence(Sequence),
    OrderedChoice(OrderedChoice),
}

impl Expression for Expr {
    fn evaluate(&self, input: &str, pos: usize) -> EvalResult {
        match self {
            Expr::Terminal(terminal) => terminal.evaluate(input, pos),
            Expr::Epsilon(epsilon) => epsilon.evaluate(input, pos),
            Expr::Sequence(sequence) => sequence.evaluate(input, pos),
            Expr::OrderedChoice(choice) => choice.evaluate(input, pos),
        }
    }
}

impl From<Terminal> for Expr {
    fn from(terminal: Terminal) -> Self {
        Expr::Terminal(terminal)
    }
}

impl From<Epsilon> for Expr {
    fn from(epsilon: Epsilon) -> Self {
        Expr::Epsilon(epsilon)
    }
}

impl From<Sequence> for Expr {
    fn from(sequence: Sequence) -> Self {
        Expr::Sequence(sequence)
    }
}

impl From<OrderedChoice> for Expr {
    fn from(choice: OrderedChoice) -> Self {
        Expr::OrderedChoice(choice)
    }
}

impl fmt::Display for Expr {
    /// Renders the grammar in a compact notation: literals quoted, sequences
    /// joined with `,`, alternatives joined with `|`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Terminal(terminal) => write!(f, "{:?}", terminal.literal()),
            Expr::Epsilon(_) => write!(f, "ε"),
            Expr::Sequence(sequence) => {
                write!(f, "(")?;
                for (i, child) in sequence.children().iter().enumerate() {
                    if i > 0 {
                        write!(f, " , ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
            Expr::OrderedChoice(choice) => {
                write!(f, "(")?;
                for (i, alternative) in choice.alternatives().iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{}", alternative)?;
                }
                write!(f, ")")
            }
        }
    }
}
