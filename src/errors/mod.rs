//! Error types and error handling.
//!
//! This module defines the diagnostic types used by consumers of the token
//! stream. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the illegal-token shapes the lexer emits
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions
//!
//! The lexer itself has no failure path; these errors exist for callers
//! that choose to report illegal tokens.

pub mod errors;

#[cfg(test)]
mod tests;
