//! Lexical scanning module.
//!
//! This module contains the hand-written scanner that converts source text
//! into a flat sequence of classified tokens. It handles:
//!
//! - Reserved words and identifiers (identifiers feed the registry)
//! - Integer and decimal literals
//! - Quoted text literals with pass-through escapes
//! - Operators, delimiters and unrecognized characters
//! - Line and block comments and whitespace elision
//! - Row/column tracking for every token

pub mod cursor;
pub mod lexer;
pub mod tokens;
