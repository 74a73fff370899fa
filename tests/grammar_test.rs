use kombu::grammar::prelude::*;
use kombu::{parse, Expression, MatchError, NodeKind, SyntaxNode};

use pretty_assertions::assert_eq;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

#[test]
fn it_parses_a_keyword_sequence() {
    let grammar = sequence_of(vec![terminal("if").unwrap(), terminal("(").unwrap()]).unwrap();

    let mut input = "if(x)".to_string();
    let node = parse(&grammar, &mut input).unwrap();

    assert_eq!(node.text(), "if(");
    assert_eq!(input, "x)");
    assert_eq!(node.kind(), NodeKind::Sequence);
    assert_eq!(
        node.children(),
        &[
            SyntaxNode::Terminal {
                text: "if".to_string()
            },
            SyntaxNode::Terminal {
                text: "(".to_string()
            },
        ]
    );
}

#[test]
fn it_falls_through_to_the_second_alternative() {
    let grammar =
        ordered_choice_of(vec![terminal("true").unwrap(), terminal("false").unwrap()]).unwrap();

    let mut input = "false".to_string();
    let node = parse(&grammar, &mut input).unwrap();

    assert_eq!(node.text(), "false");
    assert_eq!(input, "");
    match node {
        SyntaxNode::Choice { index, chosen } => {
            assert_eq!(index, 1);
            assert_eq!(chosen.text(), "false");
        }
        other => panic!("expected a choice node, got {}", other),
    }
}

#[test]
fn it_backtracks_a_partially_consuming_alternative() {
    // The first alternative consumes "ab" before failing on "c"; the second
    // must still see the input from the start.
    let prefix_then_c =
        sequence_of(vec![terminal("ab").unwrap(), terminal("c").unwrap()]).unwrap();
    let grammar = ordered_choice_of(vec![prefix_then_c, terminal("abd").unwrap()]).unwrap();

    let mut input = "abd".to_string();
    let node = parse(&grammar, &mut input).unwrap();

    assert_eq!(node.text(), "abd");
    assert_eq!(input, "");
}

#[test]
fn it_reports_every_failed_alternative() {
    let grammar =
        ordered_choice_of(vec![terminal("true").unwrap(), terminal("false").unwrap()]).unwrap();

    let mut input = "null".to_string();
    let err = parse(&grammar, &mut input).unwrap_err();

    // The input is untouched and the failure carries both attempts in order.
    assert_eq!(input, "null");
    match &err {
        MatchError::NoAlternativeMatched { position, attempts } => {
            assert_eq!(*position, 0);
            assert_eq!(attempts.len(), 2);
        }
        other => panic!("expected an aggregate failure, got {}", other),
    }
    let message = err.to_string();
    assert!(message.contains("expected \"true\""));
    assert!(message.contains("expected \"false\""));
}

#[test]
fn it_propagates_a_sequence_component_error_unchanged() {
    let grammar = sequence_of(vec![terminal("if").unwrap(), terminal("(").unwrap()]).unwrap();

    let mut input = "if[x]".to_string();
    let err = parse(&grammar, &mut input).unwrap_err();

    assert_eq!(input, "if[x]");
    assert_eq!(
        err,
        MatchError::TerminalMismatch {
            expected: "(".to_string(),
            found: "[".to_string(),
            position: 2,
        }
    );
}

#[test]
fn it_flattens_repeated_choice_composition() {
    let keywords = ordered_choice_of(vec![terminal("if").unwrap(), terminal("while").unwrap()])
        .unwrap();
    let grammar = ordered_choice_of(vec![keywords, terminal("for").unwrap()]).unwrap();

    // A flat three-way choice: the spliced-in alternatives keep their order
    // and the appended one takes the next index.
    let mut input = "for".to_string();
    let node = parse(&grammar, &mut input).unwrap();
    match node {
        SyntaxNode::Choice { index, .. } => assert_eq!(index, 2),
        other => panic!("expected a choice node, got {}", other),
    }
}

#[test]
fn it_accepts_epsilon_as_a_sequence_component() {
    let grammar = sequence_of(vec![terminal("a").unwrap(), epsilon()]).unwrap();

    let mut input = "a".to_string();
    let node = parse(&grammar, &mut input).unwrap();

    assert_eq!(node.text(), "a");
    assert_eq!(input, "");
    assert_eq!(node.children()[1], SyntaxNode::Epsilon);
}

#[test]
fn it_evaluates_mid_input_positions() {
    let grammar = terminal("bc").unwrap();
    let (pos, node) = grammar.evaluate("abcd", 1).unwrap();
    assert_eq!(pos, 3);
    assert_eq!(node.text(), "bc");
}

#[test]
fn it_serializes_the_syntax_tree() {
    let grammar = sequence_of(vec![
        terminal("=").unwrap(),
        ordered_choice_of(vec![terminal("true").unwrap(), terminal("false").unwrap()]).unwrap(),
    ])
    .unwrap();

    let mut input = "=true".to_string();
    let node = parse(&grammar, &mut input).unwrap();

    let json = serde_json::to_string(&node).unwrap();
    let restored: SyntaxNode = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, node);
    assert_eq!(restored.text(), "=true");
}
