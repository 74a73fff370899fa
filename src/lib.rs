//! # Kombu: Backtracking Parser-Combinator Engine
//!
//! Kombu provides small composable grammar expressions that evaluate
//! against an input string, consume a prefix on success, and materialize a
//! syntax tree mirroring the grammar's shape.
//!
//! ## Components
//!
//! * Grammar expressions and the evaluation protocol ([`grammar`])
//! * Syntax tree produced by successful matches ([`ast`])
//!
//! ## Expression Types
//!
//! A grammar is a tree of four expression types:
//!
//! * [`Terminal`](grammar::Terminal): matches a fixed literal string
//! * [`Epsilon`](grammar::Epsilon): the zero-length match
//! * [`Sequence`](grammar::Sequence): ordered composition; every component
//!   must match in order
//! * [`OrderedChoice`](grammar::OrderedChoice): ordered alternation; the
//!   first matching alternative wins
//!
//! ## Processing Model
//!
//! ```text
//! Builder functions → Grammar tree → evaluate/backtrack → SyntaxNode tree
//! ```
//!
//! Construction validates structure (non-empty literals, minimum arity) and
//! returns [`GrammarError`](grammar::GrammarError) values; evaluation treats
//! a mismatch as a routine branch outcome and returns
//! [`MatchError`](grammar::MatchError) values, never panicking and never
//! consuming input on failure.
//!
//! ## Usage Example
//!
//! ```
//! use kombu::grammar::prelude::*;
//! use kombu::parse;
//!
//! let boolean = ordered_choice_of(vec![
//!     terminal("true").unwrap(),
//!     terminal("false").unwrap(),
//! ])
//! .unwrap();
//!
//! let mut input = "false".to_string();
//! let node = parse(&boolean, &mut input).unwrap();
//! assert_eq!(node.text(), "false");
//! assert_eq!(input, "");
//! ```

pub mod ast;
pub mod grammar;

pub use ast::{NodeKind, SyntaxNode};
pub use grammar::{parse, EvalResult, Expression, GrammarError, MatchError};
