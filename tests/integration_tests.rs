//! Integration tests for the end-to-end analysis pipeline.
//!
//! These tests verify that source text flows correctly through
//! tokenization into Halstead metrics, including the error paths.

use std::fs::read_to_string;

use halstead::{
    metrics::metrics::Halstead,
    tokenizer::{tokenizer::tokenize, tokens::TokenKind},
};

#[test]
fn test_analyze_cpp_snippet() {
    let source = "#include <iostream>\n// palindrome helper\nint isPalindrome(int x)".to_string();
    let tokens = tokenize(source, "cpp", None).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Operator);
    assert_eq!(tokens[0].value, "#include <iostream>");
    assert_eq!(tokens[1].kind, TokenKind::Operand);
    assert_eq!(tokens[1].value, "int");
    assert_eq!(tokens[2].kind, TokenKind::Operator);
    assert_eq!(tokens[2].value, "isPalindrome(int x)");

    let metrics = Halstead::from_tokens(&tokens);

    assert_eq!(metrics.distinct_operators, 2);
    assert_eq!(metrics.distinct_operands, 1);
    assert_eq!(metrics.total_operators, 2);
    assert_eq!(metrics.total_operands, 1);
    assert_eq!(metrics.vocabulary, 3);
    assert_eq!(metrics.length, 3);
    assert!((metrics.volume - 3.0 * 3.0_f64.log2()).abs() < 1e-9);
    assert!((metrics.difficulty - 1.0).abs() < 1e-9);
}

#[test]
fn test_fixture_scan_stops_at_unmatched_semicolon() {
    let source = read_to_string("tests/fixtures/palindrome.cpp").unwrap();
    let result = tokenize(source, "cpp", Some("palindrome.cpp".to_string()));

    // The cpp ruleset has no pattern for a bare `;`, so the scan must
    // fail there rather than silently truncate.
    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 39);
    assert_eq!(*error.get_position().1, "palindrome.cpp");
}

#[test]
fn test_unknown_language_fails_before_scanning() {
    let result = tokenize("anything".to_string(), "rust", None);

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "UnsupportedLanguage");
}

#[test]
fn test_metrics_pipeline_java() {
    let source = "x = y + 1;".to_string();
    let tokens = tokenize(source, "java", None).unwrap();
    let metrics = Halstead::from_tokens(&tokens);

    assert_eq!(metrics.distinct_operators, 3);
    assert_eq!(metrics.distinct_operands, 3);
    assert_eq!(metrics.total_operators, 3);
    assert_eq!(metrics.total_operands, 3);
    assert_eq!(metrics.vocabulary, 6);
    assert_eq!(metrics.length, 6);
    assert!((metrics.estimated_length - 4.5).abs() < 1e-9);
    assert!((metrics.volume - 6.0 * 6.0_f64.log2()).abs() < 1e-9);
    assert!((metrics.difficulty - 1.5).abs() < 1e-9);
    assert!((metrics.effort - metrics.difficulty * metrics.volume).abs() < 1e-9);
}

#[test]
fn test_repeated_analysis_is_deterministic() {
    let source = "total = 1 # tally";
    let first = tokenize(source.to_string(), "python", None).unwrap();
    let second = tokenize(source.to_string(), "python", None).unwrap();

    assert_eq!(first, second);
}
