//! Builder functions for grammar construction.
//!
//! Grammars are composed through these lowercase builders rather than the
//! expression constructors. The composite builders flatten: an operand that
//! is already a sequence (resp. ordered choice) contributes its children to
//! the new expression instead of nesting, so repeated composition yields a
//! flat N-ary expression with a stable node shape and stable error-message
//! parenthesization. Callers that want explicit nesting use
//! [`Sequence::new`] / [`OrderedChoice::new`] directly.

use super::combinators::{Epsilon, Expr, OrderedChoice, Sequence, Terminal};
use super::core::GrammarError;

/// Builds a terminal expression matching the given literal.
///
/// # Errors
///
/// Returns [`GrammarError::InvalidTerminal`] if the literal is empty.
pub fn terminal(literal: impl Into<String>) -> Result<Expr, GrammarError> {
    Terminal::new(literal).map(Expr::from)
}

/// Builds the zero-length-match expression.
pub fn epsilon() -> Expr {
    Epsilon::new().into()
}

/// Builds a sequence from the given parts, splicing the children of any
/// part that is itself a sequence into the new child list.
///
/// # Errors
///
/// Returns [`GrammarError::SequenceArity`] if the flattened list has fewer
/// than two expressions.
pub fn sequence_of(parts: Vec<Expr>) -> Result<Expr, GrammarError> {
    let mut children = Vec::with_capacity(parts.len());
    for part in parts {
        match part {
            Expr::Sequence(sequence) => children.extend(sequence.into_children()),
            other => children.push(other),
        }
    }
    Sequence::new(children).map(Expr::from)
}

/// Builds an ordered choice from the given alternatives, splicing the
/// alternatives of any operand that is itself an ordered choice into the new
/// list.
///
/// # Errors
///
/// Returns [`GrammarError::ChoiceArity`] if the flattened list has fewer
/// than two alternatives.
pub fn ordered_choice_of(alternatives: Vec<Expr>) -> Result<Expr, GrammarError> {
    let mut flattened = Vec::with_capacity(alternatives.len());
    for alternative in alternatives {
        match alternative {
            Expr::OrderedChoice(choice) => flattened.extend(choice.into_alternatives()),
            other => flattened.push(other),
        }
    }
    OrderedChoice::new(flattened).map(Expr::from)
}
