//! # Syntax Tree Definitions
//!
//! The syntax tree produced by a successful grammar evaluation. Each node is
//! an immutable snapshot of one match: it carries the exact text that the
//! matching expression consumed and, for composite expressions, one child
//! node per component, so the tree mirrors the grammar's static shape 1:1.

use std::fmt;
use std::slice;

use serde::{Deserialize, Serialize};

/// A node of the syntax tree produced by a successful match.
///
/// The variants mirror the grammar expressions that produce them:
///
/// - a terminal match produces a [`SyntaxNode::Terminal`] leaf holding the
///   matched literal,
/// - an epsilon match produces a zero-length [`SyntaxNode::Epsilon`] leaf,
/// - a sequence produces a [`SyntaxNode::Sequence`] with exactly one child
///   per component expression, in declared order,
/// - an ordered choice produces a [`SyntaxNode::Choice`] holding the single
///   winning alternative's node; failed alternatives leave no trace.
///
/// Nodes are created at the moment an evaluation succeeds and are never
/// mutated afterwards.
///
/// # Examples
/// ```text
/// grammar:  sequence_of([terminal("if"), terminal("(")])
/// input:    "if(x)"
/// tree:     Sequence "if("
///           ├── Terminal "if"
///           └── Terminal "("
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyntaxNode {
    Terminal {
        text: String,
    },
    Epsilon,
    Sequence {
        text: String,
        children: Vec<SyntaxNode>,
    },
    Choice {
        /// Index of the winning alternative within the choice.
        index: usize,
        chosen: Box<SyntaxNode>,
    },
}

impl SyntaxNode {
    pub(crate) fn terminal(text: impl Into<String>) -> Self {
        SyntaxNode::Terminal { text: text.into() }
    }

    pub(crate) fn sequence(text: String, children: Vec<SyntaxNode>) -> Self {
        SyntaxNode::Sequence { text, children }
    }

    pub(crate) fn choice(index: usize, chosen: SyntaxNode) -> Self {
        SyntaxNode::Choice {
            index,
            chosen: Box::new(chosen),
        }
    }

    /// The exact substring this node's expression consumed.
    ///
    /// For a sequence this is the concatenation of its children's text in
    /// order; for a choice it is the winning alternative's text; for epsilon
    /// it is empty.
    pub fn text(&self) -> &str {
        match self {
            SyntaxNode::Terminal { text } => text,
            SyntaxNode::Epsilon => "",
            SyntaxNode::Sequence { text, .. } => text,
            SyntaxNode::Choice { chosen, .. } => chosen.text(),
        }
    }

    /// Child nodes in declared order. Empty for leaves; a choice exposes its
    /// single winning node.
    pub fn children(&self) -> &[SyntaxNode] {
        match self {
            SyntaxNode::Terminal { .. } | SyntaxNode::Epsilon => &[],
            SyntaxNode::Sequence { children, .. } => children,
            SyntaxNode::Choice { chosen, .. } => slice::from_ref(chosen),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            SyntaxNode::Terminal { .. } => NodeKind::Terminal,
            SyntaxNode::Epsilon => NodeKind::Epsilon,
            SyntaxNode::Sequence { .. } => NodeKind::Sequence,
            SyntaxNode::Choice { .. } => NodeKind::Choice,
        }
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {:?}", self.kind(), self.text())
    }
}

/// Discriminant of a [`SyntaxNode`], usable in diagnostics without borrowing
/// the node's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, Serialize, Deserialize)]
pub enum NodeKind {
    Terminal,
    Epsilon,
    Sequence,
    Choice,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_text_concatenation() {
        let node = SyntaxNode::sequence(
            "if(".to_string(),
            vec![SyntaxNode::terminal("if"), SyntaxNode::terminal("(")],
        );
        assert_eq!(node.text(), "if(");
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.children()[0].text(), "if");
    }

    #[test]
    fn test_choice_delegates_to_winner() {
        let node = SyntaxNode::choice(1, SyntaxNode::terminal("false"));
        assert_eq!(node.text(), "false");
        assert_eq!(node.children(), &[SyntaxNode::terminal("false")]);
        assert_eq!(node.kind(), NodeKind::Choice);
    }

    #[test]
    fn test_epsilon_is_empty() {
        assert_eq!(SyntaxNode::Epsilon.text(), "");
        assert!(SyntaxNode::Epsilon.children().is_empty());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NodeKind::Sequence.to_string(), "Sequence");
        assert_eq!(SyntaxNode::terminal("if").to_string(), "Terminal \"if\"");
    }
}
