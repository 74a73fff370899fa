//! # Core Grammar Definitions
//!
//! This module defines the fundamental expression interface and error types
//! that form the foundation of the combinator engine.

use thiserror::Error;

use crate::ast::SyntaxNode;

/// Expression trait defines the core evaluation interface.
///
/// Every grammar expression implements this trait, which takes the full
/// input and a byte position, and returns either a success result with the
/// advanced position and the syntax node describing the match, or a
/// [`MatchError`].
///
/// The consumed text travels in the result: `input[pos..new_pos]` is exactly
/// the matched prefix and equals the returned node's
/// [`text()`](SyntaxNode::text). A failed evaluation cannot move any
/// caller-visible cursor, so backtracking in composite expressions is simply
/// re-evaluating at the original position.
pub trait Expression {
    /// Attempts to match the input starting at the given position.
    ///
    /// # Arguments
    ///
    /// * `input` - The full input string
    /// * `pos` - The byte position to start matching from
    ///
    /// # Returns
    ///
    /// * `Ok((new_pos, node))` - If the match succeeds, the position one past
    ///   the consumed prefix and the node describing the match
    /// * `Err(error)` - If the match fails, a [`MatchError`]
    fn evaluate(&self, input: &str, pos: usize) -> EvalResult;
}

/// Result type for grammar evaluation.
///
/// On success, returns a tuple of the advanced position and the syntax node.
/// On failure, returns a [`MatchError`].
pub type EvalResult = Result<(usize, SyntaxNode), MatchError>;

/// Error type for a failed match.
///
/// A mismatch is a routine outcome during backtracking, not an exceptional
/// condition, so failures are ordinary values. A failing child's error is
/// the authoritative reason: sequences propagate it unchanged, ordered
/// choices aggregate every alternative's error in attempt order. Nothing is
/// swallowed or retried internally; recovery is the caller's responsibility.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The input does not start with the expected terminal literal.
    #[error("terminal mismatch at position {position}: expected {expected:?}, found {found:?}")]
    TerminalMismatch {
        expected: String,
        found: String,
        position: usize,
    },
    /// Every alternative of an ordered choice failed. `attempts` holds each
    /// alternative's own error, in attempt order.
    #[error("no alternative matched at position {position}: {}", render_attempts(.attempts))]
    NoAlternativeMatched {
        position: usize,
        attempts: Vec<MatchError>,
    },
}

impl MatchError {
    /// Byte position at which the match failed.
    pub fn position(&self) -> usize {
        match self {
            MatchError::TerminalMismatch { position, .. } => *position,
            MatchError::NoAlternativeMatched { position, .. } => *position,
        }
    }
}

fn render_attempts(attempts: &[MatchError]) -> String {
    attempts
        .iter()
        .enumerate()
        .map(|(i, e)| format!("[alternative {}] {}", i + 1, e))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error type for invalid grammar construction.
///
/// Arity and literal validation happen when an expression is built, so an
/// evaluation never encounters a structurally invalid grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// Empty terminal literals are not permitted; use epsilon for a
    /// zero-length match.
    #[error("empty terminal literal is not permitted, use epsilon instead")]
    InvalidTerminal,
    /// A sequence needs at least two component expressions.
    #[error("sequence requires at least 2 expressions, got {got}")]
    SequenceArity { got: usize },
    /// An ordered choice needs at least two alternatives.
    #[error("ordered choice requires at least 2 alternatives, got {got}")]
    ChoiceArity { got: usize },
}
