//! End-to-end tests for the text -> tokens -> tree -> rendering pipeline

use rstest::rstest;

use lispy::lispy::error::LispyError;
use lispy::lispy::lexer::lex;
use lispy::lispy::parser::parse_source;
use lispy::lispy::tree::{to_parse_tree, ParseTreeElement};

fn render(source: &str) -> String {
    let cst = parse_source(source).expect("source should parse");
    to_parse_tree(&cst).to_multiline_string()
}

fn collect_leaves(element: &ParseTreeElement, out: &mut Vec<String>) {
    match element {
        ParseTreeElement::Leaf { text } => out.push(text.clone()),
        ParseTreeElement::Node { children, .. } => {
            for child in children {
                collect_leaves(child, out);
            }
        }
    }
}

#[test]
fn test_reference_program_renders_exactly() {
    let expected = "\
program
 T[+]
 expression
  T[5]
 expression
  T[(]
  T[*]
  expression
   T[2]
  expression
   T[2]
  T[)]
 T[<EOF>]
";
    assert_eq!(render("+ 5 (* 2 2)"), expected);
}

#[test]
fn test_flat_program_rendering() {
    assert_eq!(
        render("/ 10 2"),
        "program\n T[/]\n expression\n  T[10]\n expression\n  T[2]\n T[<EOF>]\n"
    );
}

#[test]
fn test_nesting_indents_one_space_per_level() {
    let rendered = render("+ (+ (+ 1 2) 3) 4");
    // the innermost numbers sit three expression levels down
    assert!(rendered.contains("\n    T[1]\n"));
    assert!(rendered.contains("\n    T[2]\n"));
}

#[test]
fn test_rendering_is_idempotent() {
    let cst = parse_source("+ 5 (* 2 2)").unwrap();
    let tree = to_parse_tree(&cst);
    assert_eq!(tree.to_multiline_string(), tree.to_multiline_string());
}

#[rstest]
#[case("+ 1 2")]
#[case("+ 5 (* 2 2)")]
#[case("- (+ 1 2) (/ 9 3) 7")]
#[case("* (* (* 2 2) 2) 2")]
fn test_tree_leaves_match_the_token_stream(#[case] source: &str) {
    let cst = parse_source(source).unwrap();
    let tree = to_parse_tree(&cst);

    let mut leaves = Vec::new();
    collect_leaves(&tree, &mut leaves);

    let token_texts: Vec<String> = lex(source)
        .unwrap()
        .iter()
        .map(|token| token.display_text().to_string())
        .collect();

    assert_eq!(leaves, token_texts);
}

#[rstest]
#[case::unbalanced_paren("(+ 1 2")]
#[case::missing_close("+ (+ 1 2")]
#[case::no_operator("5")]
#[case::no_expressions("+")]
#[case::trailing_tokens("+ 1 2 +")]
#[case::stray_close("+ 1 2)")]
#[case::empty_group("+ () 2")]
fn test_malformed_programs_yield_parse_errors(#[case] source: &str) {
    match parse_source(source) {
        Err(LispyError::Parse(_)) => {}
        other => panic!("expected a parse error for {:?}, got {:?}", source, other),
    }
}

#[test]
fn test_illegal_character_yields_lex_error() {
    match parse_source("1 $ 2") {
        Err(LispyError::Lex(e)) => {
            assert_eq!(e.to_string(), "illegal character '$' at position 2");
        }
        other => panic!("expected a lex error, got {:?}", other),
    }
}

#[test]
fn test_failures_carry_no_partial_tree() {
    // an Err result is the entire outcome; nothing else is observable
    assert!(parse_source("+ 1 (").is_err());
}
