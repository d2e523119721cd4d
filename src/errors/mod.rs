//! Error types for the front end.
//!
//! The lexer never fails: unknown characters become `Illegal` tokens. Every
//! diagnostic is therefore a syntax error raised by the parser. This module
//! defines:
//!
//! - The structured `ParseError` variants and their messages
//! - Stable error names and optional suggestions for display

pub mod errors;
