use crate::{
    ast::{
        ast::Statement,
        statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{current_identifier, parse_expr},
    lookups::BindingPower,
    parser::Parser,
};

pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    match parser.get_stmt_handler(parser.current_token_kind()) {
        Some(handler) => handler(parser),
        None => parse_expression_stmt(parser),
    }
}

/// Consumes a trailing `;` when there is one. Semicolons are optional.
fn eat_semicolon(parser: &mut Parser) {
    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Statement> {
    // let <name> = <value>;
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }
    let name = current_identifier(parser);

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest);
    eat_semicolon(parser);

    Some(Statement::Let(LetStatement { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest);
    eat_semicolon(parser);

    Some(Statement::Return(ReturnStatement { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Lowest);
    eat_semicolon(parser);

    Some(Statement::Expression(ExpressionStatement {
        token,
        expression: expression?,
    }))
}

/// Parses `{ ... }` starting on the `{`, leaving the cursor on the `}`.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStatement {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = Vec::new();
    while !parser.current_is(TokenKind::CloseCurly) && !parser.current_is(TokenKind::EOF) {
        if let Some(stmt) = parse_stmt(parser) {
            statements.push(stmt);
        }
        parser.advance();
    }

    if parser.current_is(TokenKind::EOF) {
        parser.push_error(ParseError::UnexpectedToken {
            expected: TokenKind::CloseCurly,
            found: TokenKind::EOF,
        });
    }

    BlockStatement { token, statements }
}
