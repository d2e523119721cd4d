//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and its cursor. The parser
//! pulls tokens from a [`Lexer`] one at a time, keeping the current token and
//! one token of lookahead.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - Prefix handlers, for tokens that start an expression
//! - Infix handlers, for tokens that continue one
//! - Binding powers for operator precedence

use std::{collections::HashMap, mem};

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::ParseError,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, InfixHandler, InfixLookup, PrefixHandler,
        PrefixLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// How many expressions may be open at once before the parser gives up on
/// the innermost one.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// Token under the cursor
    current: Token,
    /// One-token lookahead
    peek: Token,
    /// Errors recorded so far, in source order
    errors: Vec<ParseError>,
    /// Expressions currently being parsed
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for prefix expression handlers
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix expression handlers
    infix_lookup: InfixLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser over `lexer`, with `current` and `peek` both filled.
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            current: Token::eof(),
            peek: Token::eof(),
            errors: Vec::new(),
            depth: 0,
            stmt_lookup: HashMap::new(),
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser.advance();
        parser.advance();
        parser
    }

    /// Parses statements until end of input.
    ///
    /// Always returns a program; statements that failed to parse are left
    /// out and their errors are available from [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.advance();
        }

        debug!(
            statements = program.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }

    /// Errors recorded so far. Empty means the parse was clean.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Moves the lookahead into `current` and pulls a new lookahead.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = mem::replace(&mut self.peek, next);
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the lookahead is `kind`, otherwise records an error.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.advance();
            true
        } else {
            self.push_error(ParseError::UnexpectedToken {
                expected: kind,
                found: self.peek.kind,
            });
            false
        }
    }

    pub fn push_error(&mut self, error: ParseError) {
        debug!(%error, "syntax error");
        self.errors.push(error);
    }

    /// Opens one level of expression nesting. Past [`MAX_NESTING_DEPTH`] an
    /// error is recorded and `false` returned; the caller must then not call
    /// [`Parser::leave_nesting`].
    pub fn enter_nesting(&mut self) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            self.push_error(ParseError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            });
            return false;
        }
        self.depth += 1;
        true
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Binding power of the lookahead, `Lowest` when it is not an operator.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power(self.peek.kind)
    }

    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power(self.current.kind)
    }

    fn binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_prefix_handler(&self, kind: TokenKind) -> Option<PrefixHandler> {
        self.prefix_lookup.get(&kind).copied()
    }

    pub fn get_infix_handler(&self, kind: TokenKind) -> Option<InfixHandler> {
        self.infix_lookup.get(&kind).copied()
    }

    /// Registers an infix handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence of this operator
    /// * `infix_fn` - The handler, called with the already-parsed left operand
    pub fn infix(&mut self, kind: TokenKind, binding_power: BindingPower, infix_fn: InfixHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.infix_lookup.insert(kind, infix_fn);
    }

    /// Registers a prefix handler for a token.
    pub fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses `source` into a program.
///
/// This is the main entry point for parsing. The program is always
/// returned; a non-empty error list means the parse failed.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.errors)
}
