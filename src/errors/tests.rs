//! Unit tests for error handling.
//!
//! This module contains tests for diagnostic types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::{Token, TokenKind};
use crate::Position;
use std::rc::Rc;

fn position(line: u32, column: u32) -> Position {
    Position {
        line,
        column,
        file: Rc::new("test.mpl".to_string()),
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        position(1, 10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::MalformedNumber {
            token: "1.2.3".to_string(),
        },
        position(4, 2),
    );

    assert_eq!(error.get_position().line, 4);
    assert_eq!(error.get_position().column, 2);
    assert_eq!(*error.get_position().file, "test.mpl");
}

#[test]
fn test_unrecognised_token_has_no_tip() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "#".to_string(),
        },
        position(1, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_malformed_number_tip() {
    let error = Error::new(
        ErrorImpl::MalformedNumber {
            token: "1.2.3".to_string(),
        },
        position(1, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(suggestion) => assert!(suggestion.contains("1.2.3")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_from_illegal_symbol() {
    let token = Token {
        kind: TokenKind::Illegal,
        literal: "@".to_string(),
        position: position(2, 5),
    };

    let error = Error::from_illegal(&token).unwrap();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().line, 2);
}

#[test]
fn test_from_illegal_malformed_number() {
    let token = Token {
        kind: TokenKind::Illegal,
        literal: "1.2.3".to_string(),
        position: position(1, 6),
    };

    let error = Error::from_illegal(&token).unwrap();
    assert_eq!(error.get_error_name(), "MalformedNumber");
}

#[test]
fn test_from_legal_token_is_none() {
    let token = Token {
        kind: TokenKind::Int,
        literal: "5".to_string(),
        position: position(1, 2),
    };

    assert!(Error::from_illegal(&token).is_none());
}
