//! Integration tests for the lexer
//!
//! Tests tokenization of YAL source code.

use yal_language::{Lexer, Span, Token, TokenKind, lex, render};

// =============================================================================
// Basic Tokens
// =============================================================================

#[test]
fn tokenize_instruction() {
    let tokens = Lexer::tokenize_all("-");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is(TokenKind::Instruction));
    assert_eq!(tokens[0].text(), "-");
}

#[test]
fn tokenize_keyword() {
    let tokens = Lexer::tokenize_all("describe");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is(TokenKind::Describe));
}

#[test]
fn tokenize_integers() {
    let tokens = Lexer::tokenize_all("0 42 1000000");
    assert!(tokens.iter().all(|t| t.is(TokenKind::Integral)));
    let texts: Vec<_> = tokens.iter().map(Token::text).collect();
    assert_eq!(texts, vec!["0", "42", "1000000"]);
}

#[test]
fn tokenize_negative_number_is_instruction_then_integral() {
    let tokens = lex("-17");
    assert!(tokens[0].is(TokenKind::Instruction));
    assert!(tokens[1].is(TokenKind::Integral));
    assert_eq!(tokens[1].text(), "17");
}

// =============================================================================
// Error Tokens
// =============================================================================

#[test]
fn error_token_from_unsupported_characters() {
    assert!(lex("Â·")[0].is(TokenKind::Error));
}

#[test]
fn error_token_digit_after_keyword_letter() {
    let tokens = lex("d0");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is(TokenKind::Error));
    assert_eq!(tokens[0].text(), "d0");
}

#[test]
fn error_token_keyword_letter_after_digit() {
    for source in ["0d", "0e", "0s", "0c", "0r", "0i", "0b"] {
        let tokens = lex(source);
        assert_eq!(tokens.len(), 1, "{source}");
        assert!(tokens[0].is(TokenKind::Error), "{source}");
    }
}

#[test]
fn error_token_misspelled_keyword() {
    let tokens = lex("descirbe");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is(TokenKind::Error));
    assert_eq!(tokens[0].text(), "descirbe");
}

#[test]
fn error_token_stops_at_delimiters() {
    let tokens = lex("?? 42\n??");
    let kinds: Vec<_> = tokens.iter().filter_map(Token::kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Error, TokenKind::Integral, TokenKind::Error]
    );
}

#[test]
fn error_token_stops_at_dash() {
    let tokens = lex("x-");
    assert_eq!(tokens.len(), 2);
    assert!(tokens[0].is(TokenKind::Error));
    assert!(tokens[1].is(TokenKind::Instruction));
}

// =============================================================================
// Positions and Rendering
// =============================================================================

#[test]
fn get_tokens() {
    let expected = vec![
        Token::new(Some(TokenKind::Instruction), "-", Span::new(0, 1, 1, 1)),
        Token::new(Some(TokenKind::Describe), "describe", Span::new(2, 10, 1, 3)),
        Token::new(Some(TokenKind::Integral), "42", Span::new(13, 15, 2, 3)),
    ];
    assert_eq!(lex("- describe\n  42"), expected);
}

#[test]
fn render_statement() {
    assert_eq!(
        render(&lex("- describe\n  42")),
        "[Instruction -]@1:1\n[Describe describe]@1:3\n[Integral 42]@2:3\n"
    );
}

#[test]
fn render_empty_input() {
    assert_eq!(render(&lex("")), "");
}

#[test]
fn unclassified_rendering() {
    let token = Token::new(None, "?", Span::new(0, 1, 1, 1));
    assert_eq!(token.to_string(), "[unclassified ?]@1:1");
}
