//! Integration tests for the statement dispatcher
//!
//! Tests grammar matching, output, and failure dumps.

use yal_language::{Interpreter, InterpreterConfig};

fn run(source: &str) -> (bool, String, String) {
    run_with(InterpreterConfig::default(), source)
}

fn run_with(config: InterpreterConfig, source: &str) -> (bool, String, String) {
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let ok = Interpreter::with_sinks(&mut out, &mut diag)
        .with_config(config)
        .run(source)
        .unwrap();
    (
        ok,
        String::from_utf8(out).unwrap(),
        String::from_utf8(diag).unwrap(),
    )
}

// =============================================================================
// Valid Programs
// =============================================================================

#[test]
fn valid_instruction_one_valid_instruction() {
    let (ok, out, diag) = run("- describe 42");
    assert!(ok);
    assert_eq!(out, "literal (Integral): eternal 42\n");
    assert!(diag.is_empty());
}

#[test]
fn valid_instruction_two_valid_instructions() {
    let (ok, out, _) = run("- describe 42\n- describe 23");
    assert!(ok);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(
        lines,
        vec!["literal (Integral): eternal 42", "literal (Integral): eternal 23"]
    );
}

#[test]
fn valid_instruction_empty_instruction() {
    assert_eq!(run("-"), (true, String::new(), String::new()));
}

#[test]
fn valid_statement_spread_over_lines() {
    let (ok, out, _) = run("-\ndescribe\n7");
    assert!(ok);
    assert_eq!(out, "literal (Integral): eternal 7\n");
}

#[test]
fn leading_zeros_are_dropped() {
    let (ok, out, _) = run("- describe 007");
    assert!(ok);
    assert_eq!(out, "literal (Integral): eternal 7\n");
}

// =============================================================================
// Invalid Programs
// =============================================================================

#[test]
fn invalid_instruction_describe_eof() {
    assert!(!run("- describe").0);
}

#[test]
fn invalid_instruction_describe_error() {
    assert!(!run("- describe error").0);
}

#[test]
fn invalid_instruction_integral() {
    assert!(!run("- 42").0);
}

#[test]
fn invalid_no_instruction_token_at_start_of_line() {
    assert!(!run("describe 42").0);
}

#[test]
fn bare_instruction_in_the_middle_fails() {
    // The second `-` is taken as the instruction name of the first.
    let (ok, _, diag) = run("-\n- describe 1");
    assert!(!ok);
    assert_eq!(
        diag,
        "[Instruction -]@1:1\n[Instruction -]@2:1\n[Describe describe]@2:3\n[Integral 1]@2:12\n"
    );
}

#[test]
fn each_failure_dumps_only_its_statement() {
    let (ok, out, diag) = run("- 1\n- describe 2\n- x");
    assert!(!ok);
    assert_eq!(out, "literal (Integral): eternal 2\n");
    assert_eq!(
        diag,
        "[Instruction -]@1:1\n[Integral 1]@1:3\n[Instruction -]@3:1\n[Error x]@3:3\n"
    );
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn overflow_is_a_statement_failure_by_default() {
    let (ok, out, diag) = run("- describe 123456789012345678901234567890");
    assert!(!ok);
    assert!(out.is_empty());
    assert!(diag.contains("[Integral 123456789012345678901234567890]@1:12"));
}

#[test]
fn overflow_is_an_error_when_strict() {
    let mut interpreter = Interpreter::with_sinks(Vec::<u8>::new(), Vec::<u8>::new())
        .with_config(InterpreterConfig::strict());
    assert!(interpreter.run("- describe 123456789012345678901234567890").is_err());
}

#[test]
fn token_dump_before_dispatch() {
    let config = InterpreterConfig::default().with_dump_tokens(true);
    let (ok, _, diag) = run_with(config, "- 4");
    assert!(!ok);
    // Once for the dump, once for the failure.
    assert_eq!(diag, "[Instruction -]@1:1\n[Integral 4]@1:3\n".repeat(2));
}
