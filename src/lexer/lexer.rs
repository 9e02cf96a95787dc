use std::rc::Rc;

use crate::{Position, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

pub struct Lexer {
    file: Rc<String>,
    source: Vec<char>,
    position: usize,
    next_position: usize,
    line: u32,
    column: u32,
    ch: Option<char>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            file: file_name,
            source: source.chars().collect(),
            position: 0,
            next_position: 0,
            line: 1,
            column: 0,
            ch: None,
        };

        lexer.read_char();
        lexer
    }

    /// Consumes characters from the front of the remaining input and returns
    /// the next token. Once EOF has been returned, every further call keeps
    /// returning EOF.
    pub fn next_token(&mut self) -> Token {
        self.eat_whitespace();

        let token = match self.ch {
            Some(ch) => match ch {
                '=' => self.make_token(TokenKind::Assign, ch.to_string()),
                '+' => self.make_token(TokenKind::Plus, ch.to_string()),
                '-' => self.make_token(TokenKind::Minus, ch.to_string()),
                '!' => self.make_token(TokenKind::Bang, ch.to_string()),
                '<' => self.make_token(TokenKind::Less, ch.to_string()),
                '>' => self.make_token(TokenKind::Greater, ch.to_string()),
                '*' => self.make_token(TokenKind::Asterisk, ch.to_string()),
                '/' => self.make_token(TokenKind::Slash, ch.to_string()),
                '{' => self.make_token(TokenKind::OpenCurly, ch.to_string()),
                '}' => self.make_token(TokenKind::CloseCurly, ch.to_string()),
                '(' => self.make_token(TokenKind::OpenParen, ch.to_string()),
                ')' => self.make_token(TokenKind::CloseParen, ch.to_string()),
                ',' => self.make_token(TokenKind::Comma, ch.to_string()),
                ';' => self.make_token(TokenKind::Semicolon, ch.to_string()),
                _ if ch.is_alphabetic() => {
                    let literal = self.read_identifier();
                    let kind = lookup_identifier(&literal);
                    return self.make_token(kind, literal);
                }
                _ if ch.is_numeric() => {
                    let (literal, kind) = self.read_number();
                    return self.make_token(kind, literal);
                }
                _ => self.make_token(TokenKind::Illegal, ch.to_string()),
            },
            None => return self.make_token(TokenKind::EOF, String::new()),
        };

        self.read_char();
        token
    }

    // Line/column bookkeeping happens for the character being left behind,
    // so the counters describe the position after consuming it.
    fn read_char(&mut self) {
        if self.ch == Some('\n') {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.ch = self.source.get(self.next_position).copied();
        self.position = self.next_position;
        self.next_position += 1;
    }

    fn eat_whitespace(&mut self) {
        while matches!(self.ch, Some('\t') | Some(' ') | Some('\n')) {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;

        while matches!(self.ch, Some(ch) if ch.is_alphabetic()) {
            self.read_char();
        }

        self.source[start..self.position].iter().collect()
    }

    // A second decimal point turns the whole run into a single Illegal
    // token; the run is still consumed to the end.
    fn read_number(&mut self) -> (String, TokenKind) {
        let start = self.position;
        let mut has_decimal = false;
        let mut kind = TokenKind::Int;

        while matches!(self.ch, Some(ch) if ch.is_numeric() || ch == '.') {
            if self.ch == Some('.') {
                if has_decimal {
                    kind = TokenKind::Illegal;
                } else {
                    has_decimal = true;
                    kind = TokenKind::Float;
                }
            }
            self.read_char();
        }

        (self.source[start..self.position].iter().collect(), kind)
    }

    fn make_token(&self, kind: TokenKind, literal: String) -> Token {
        MK_TOKEN!(
            kind,
            literal,
            Position {
                line: self.line,
                column: self.column,
                file: Rc::clone(&self.file),
            }
        )
    }
}

/// Drives a [`Lexer`] over the whole source and materializes the token
/// stream, EOF token included. Never fails: malformed input shows up as
/// `TokenKind::Illegal` tokens in the stream.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lexer = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
