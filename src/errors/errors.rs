use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::{Token, TokenKind};
use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Mints a diagnostic from an `Illegal` token. The lexer itself never
    /// fails; deciding that an illegal token is worth reporting happens
    /// here, at the consumer boundary.
    pub fn from_illegal(token: &Token) -> Option<Self> {
        if token.kind != TokenKind::Illegal {
            return None;
        }

        // Multi-character illegal runs only come out of the number scanner.
        let internal_error = if token.literal.chars().count() > 1 {
            ErrorImpl::MalformedNumber {
                token: token.literal.clone(),
            }
        } else {
            ErrorImpl::UnrecognisedToken {
                token: token.literal.clone(),
            }
        };

        Some(Error::new(internal_error, token.position.clone()))
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::MalformedNumber { token } => ErrorTip::Suggestion(format!(
                "Malformed number: `{}`, more than one decimal point?",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("malformed number: {token:?}")]
    MalformedNumber { token: String },
}
