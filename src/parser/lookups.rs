use std::collections::HashMap;

use crate::{
    ast::ast::{Expression, Statement},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Option<Statement>;
pub type PrefixHandler = fn(&mut Parser) -> Option<Expression>;
pub type InfixHandler = fn(&mut Parser, Expression) -> Option<Expression>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality and relational
    parser.infix(TokenKind::Equals, BindingPower::Equals, parse_infix_expr);
    parser.infix(TokenKind::NotEquals, BindingPower::Equals, parse_infix_expr);
    parser.infix(TokenKind::Less, BindingPower::LessGreater, parse_infix_expr);
    parser.infix(TokenKind::Greater, BindingPower::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    parser.infix(TokenKind::Plus, BindingPower::Sum, parse_infix_expr);
    parser.infix(TokenKind::Minus, BindingPower::Sum, parse_infix_expr);
    parser.infix(TokenKind::Asterisk, BindingPower::Product, parse_infix_expr);
    parser.infix(TokenKind::Slash, BindingPower::Product, parse_infix_expr);

    parser.infix(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);

    // Literals and symbols
    parser.prefix(TokenKind::Identifier, parse_identifier);
    parser.prefix(TokenKind::Int, parse_integer_literal);
    parser.prefix(TokenKind::True, parse_boolean);
    parser.prefix(TokenKind::False, parse_boolean);
    parser.prefix(TokenKind::Minus, parse_prefix_expr);
    parser.prefix(TokenKind::Bang, parse_prefix_expr);
    parser.prefix(TokenKind::OpenParen, parse_grouped_expr);
    parser.prefix(TokenKind::If, parse_if_expr);
    parser.prefix(TokenKind::Function, parse_function_literal);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
