//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Character-by-character tokenization with one character of lookahead
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking (file, line, column) for error reporting
//! - Whitespace handling

pub mod lexer;
pub mod tokens;
