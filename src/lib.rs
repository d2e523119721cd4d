//! Lexer and Pratt parser for a small expression-oriented language.
//!
//! Source text goes through [`lexer::lexer::Lexer`] one token at a time and
//! [`parser::parser::Parser`] turns the stream into an [`ast::ast::Program`]
//! plus a list of [`errors::errors::ParseError`]s.

#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

pub use ast::ast::{Expression, Node, Program, Statement};
pub use errors::errors::ParseError;
pub use lexer::{
    lexer::{tokenize, Lexer},
    tokens::{Token, TokenKind},
};
pub use parser::parser::{parse, Parser};
