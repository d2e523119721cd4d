//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Byte-at-a-time scanning with one byte of lookahead
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Illegal characters, which become `Illegal` tokens instead of errors
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
