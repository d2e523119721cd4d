use crate::{
    ast::{
        ast::Expression,
        expressions::{
            Boolean, CallExpression, FunctionLiteral, Identifier, IfExpression, InfixExpression,
            IntegerLiteral, PrefixExpression,
        },
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

// Handlers start with the cursor on their first token and leave it on their
// last one.

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expression> {
    // Every nested construct comes back through here, so this bounds recursion
    if !parser.enter_nesting() {
        return None;
    }
    let expr = parse_expr_at_depth(parser, bp);
    parser.leave_nesting();

    expr
}

fn parse_expr_at_depth(parser: &mut Parser, bp: BindingPower) -> Option<Expression> {
    // First parse prefix
    let token_kind = parser.current_token_kind();
    let Some(prefix) = parser.get_prefix_handler(token_kind) else {
        parser.push_error(ParseError::NoPrefixParseFn { kind: token_kind });
        return None;
    };

    let mut left = prefix(parser)?;

    // While the lookahead binds tighter than `bp`, fold it into lhs
    while !parser.peek_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let Some(infix) = parser.get_infix_handler(parser.peek_token_kind()) else {
            return Some(left);
        };

        parser.advance();
        left = infix(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Expression> {
    Some(Expression::Identifier(current_identifier(parser)))
}

pub fn current_identifier(parser: &Parser) -> Identifier {
    let token = parser.current_token().clone();
    Identifier {
        name: token.lexeme.clone(),
        token,
    }
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    match token.lexeme.parse::<i64>() {
        Ok(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
        Err(_) => {
            parser.push_error(ParseError::IntegerParse {
                lexeme: token.lexeme,
            });
            None
        }
    }
}

pub fn parse_boolean(parser: &mut Parser) -> Option<Expression> {
    Some(Expression::Boolean(Boolean {
        value: parser.current_is(TokenKind::True),
        token: parser.current_token().clone(),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let operand = parse_expr(parser, BindingPower::Prefix)?;

    Some(Expression::Prefix(PrefixExpression {
        operator: operator_token.lexeme.clone(),
        token: operator_token,
        operand: Box::new(operand),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expression) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    // Parsing the rhs at our own power, not one above it, is what makes
    // same-power operators associate to the left.
    let bp = parser.current_binding_power();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Some(Expression::Infix(InfixExpression {
        operator: operator_token.lexeme.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouped_expr(parser: &mut Parser) -> Option<Expression> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest);

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    expr
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<Expression> {
    // if (<condition>) { ... } else { ... }
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest);

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }
    if !parser.expect_peek(TokenKind::OpenCurly) {
        return None;
    }
    let consequent = parse_block_stmt(parser);

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.advance();
        if !parser.expect_peek(TokenKind::OpenCurly) {
            return None;
        }
        Some(parse_block_stmt(parser))
    } else {
        None
    };

    Some(Expression::If(IfExpression {
        token,
        condition: Box::new(condition?),
        consequent,
        alternative,
    }))
}

pub fn parse_function_literal(parser: &mut Parser) -> Option<Expression> {
    // fn(a, b) { ... }
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }
    let parameters = parse_function_parameters(parser)?;

    if !parser.expect_peek(TokenKind::OpenCurly) {
        return None;
    }
    let body = parse_block_stmt(parser);

    Some(Expression::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

fn parse_function_parameters(parser: &mut Parser) -> Option<Vec<Identifier>> {
    let mut parameters = Vec::new();

    if parser.peek_is(TokenKind::CloseParen) {
        parser.advance();
        return Some(parameters);
    }

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }
    parameters.push(current_identifier(parser));

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        if !parser.expect_peek(TokenKind::Identifier) {
            return None;
        }
        parameters.push(current_identifier(parser));
    }

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(parameters)
}

pub fn parse_call_expr(parser: &mut Parser, function: Expression) -> Option<Expression> {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Some(Expression::Call(CallExpression {
        token,
        function: Box::new(function),
        arguments,
    }))
}

fn parse_call_arguments(parser: &mut Parser) -> Option<Vec<Expression>> {
    let mut arguments = Vec::new();

    if parser.peek_is(TokenKind::CloseParen) {
        parser.advance();
        return Some(arguments);
    }

    parser.advance();
    arguments.push(parse_expr(parser, BindingPower::Lowest)?);

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        arguments.push(parse_expr(parser, BindingPower::Lowest)?);
    }

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(arguments)
}
