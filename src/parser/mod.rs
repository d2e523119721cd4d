//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the lexer's token stream
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements, blocks)
//! - Expression parsing (prefix and infix operators, grouping, `if`,
//!   function literals and calls)
//! - Error collection without aborting the parse
//!
//! Expressions are driven by two dispatch tables keyed on token kind:
//! prefix handlers for tokens that begin an expression and infix handlers
//! for tokens that continue one, with a binding power per infix token.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
