//! # Grammar Engine
//!
//! The grammar module implements a backtracking parser-combinator engine:
//! small composable expressions that evaluate against an input string,
//! consume a prefix on success, and materialize a [`SyntaxNode`] describing
//! the match.
//!
//! ## Core Components
//!
//! * **Expression Trait**: the evaluation contract shared by every combinator
//! * **Combinators**: [`Terminal`], [`Epsilon`], [`Sequence`], [`OrderedChoice`]
//! * **Builders**: flattening composition functions in [`prelude`]
//! * **Error Handling**: structured match and construction errors
//!
//! ## Evaluation Protocol
//!
//! Evaluation is single-threaded, depth-first recursion. An expression is
//! evaluated at an explicit position in the input; success returns the
//! advanced position together with the node (whose text is the consumed
//! prefix), failure returns a [`MatchError`] and leaves nothing to roll
//! back. An ordered choice backtracks by re-evaluating the next alternative
//! at the original position; a sequence aborts on the first component
//! failure and propagates that component's error unchanged.
//!
//! Matching emits trace-level events through the [`tracing`] facade
//! (targets `grammar::terminal`, `grammar::sequence`,
//! `grammar::ordered_choice`). This is a write-only side channel: with no
//! subscriber installed, evaluation behaves identically.
//!
//! ## Usage Example
//!
//! ```
//! use kombu::grammar::prelude::*;
//! use kombu::parse;
//!
//! let grammar = sequence_of(vec![
//!     terminal("if").unwrap(),
//!     terminal("(").unwrap(),
//! ])
//! .unwrap();
//!
//! let mut input = "if(x)".to_string();
//! let node = parse(&grammar, &mut input).unwrap();
//! assert_eq!(node.text(), "if(");
//! assert_eq!(input, "x)");
//! ```

pub mod combinators;
pub mod core;
pub mod prelude;

pub use self::core::{EvalResult, Expression, GrammarError, MatchError};
pub use combinators::{Epsilon, Expr, OrderedChoice, Sequence, Terminal};

use crate::ast::SyntaxNode;

/// Parses a prefix of `input` with the given grammar.
///
/// Evaluates the grammar root at the start of the input. On success the
/// consumed prefix is drained from `input`, so the caller's string holds
/// the unconsumed remainder, and the root [`SyntaxNode`] is returned. On
/// failure `input` is untouched.
pub fn parse<E: Expression>(grammar: &E, input: &mut String) -> Result<SyntaxNode, MatchError> {
    let (end, node) = grammar.evaluate(input, 0)?;
    input.drain(..end);
    Ok(node)
}
