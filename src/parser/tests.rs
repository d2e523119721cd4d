//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - `let` and `return` statements
//! - Literals, identifiers, prefix and infix expressions
//! - Operator precedence and associativity
//! - `if` expressions, function literals and calls
//! - Error reporting

use insta::assert_snapshot;

use crate::{
    ast::{
        ast::{Expression, Node, Program, Statement},
        statements::BlockStatement,
    },
    errors::errors::ParseError,
    lexer::{lexer::Lexer, tokens::TokenKind},
};

use super::parser::{parse, Parser, MAX_NESTING_DEPTH};

fn parse_clean(source: &str) -> Program {
    let (program, errors) = parse(source);
    assert!(
        errors.is_empty(),
        "parser had {} errors: {:?}",
        errors.len(),
        errors
    );
    program
}

fn single_expression(source: &str) -> Expression {
    let program = parse_clean(source);
    assert_eq!(program.len(), 1, "expected one statement in {:?}", source);

    match &program.statements[0] {
        Statement::Expression(stmt) => stmt.expression.clone(),
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

fn assert_identifier(expr: &Expression, name: &str) {
    match expr {
        Expression::Identifier(ident) => {
            assert_eq!(ident.name, name);
            assert_eq!(ident.token_literal(), name);
        }
        other => panic!("expected identifier {}, got {:?}", name, other),
    }
}

fn assert_integer(expr: &Expression, value: i64) {
    match expr {
        Expression::Integer(literal) => {
            assert_eq!(literal.value, value);
            assert_eq!(literal.token_literal(), value.to_string());
        }
        other => panic!("expected integer {}, got {:?}", value, other),
    }
}

fn block_source(block: &BlockStatement) -> Vec<String> {
    block.iter().map(|stmt| stmt.to_string()).collect()
}

#[test]
fn test_parse_let_statements() {
    let program = parse_clean("let x = 5;\nlet y = true;\nlet foobar = y;");
    assert_eq!(program.len(), 3);

    let expected = [("x", "5"), ("y", "true"), ("foobar", "y")];
    for (stmt, (name, value)) in program.statements.iter().zip(expected) {
        let Statement::Let(let_stmt) = stmt else {
            panic!("expected a let statement, got {:?}", stmt);
        };
        assert_eq!(let_stmt.token_literal(), "let");
        assert_eq!(let_stmt.name.name, name);
        assert_eq!(let_stmt.name.token_literal(), name);
        assert_eq!(let_stmt.value.as_ref().map(|v| v.to_string()).as_deref(), Some(value));
    }
}

#[test]
fn test_parse_return_statements() {
    let program = parse_clean("return 5;\nreturn 10;\nreturn add(15);");
    assert_eq!(program.len(), 3);

    for stmt in &program.statements {
        let Statement::Return(return_stmt) = stmt else {
            panic!("expected a return statement, got {:?}", stmt);
        };
        assert_eq!(return_stmt.token_literal(), "return");
        assert!(return_stmt.value.is_some());
    }
    assert_eq!(program.statements[2].to_string(), "return add(15)");
}

#[test]
fn test_parse_identifier_expression() {
    assert_identifier(&single_expression("foobar;"), "foobar");
}

#[test]
fn test_parse_integer_literal_expression() {
    assert_integer(&single_expression("5;"), 5);
    assert_integer(&single_expression("9223372036854775807"), i64::MAX);
}

#[test]
fn test_parse_boolean_expression() {
    for (source, value) in [("true;", true), ("false;", false)] {
        match single_expression(source) {
            Expression::Boolean(boolean) => assert_eq!(boolean.value, value),
            other => panic!("expected boolean, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_prefix_expressions() {
    let cases = [("!5;", "!", "5"), ("-15;", "-", "15"), ("!true", "!", "true"), ("-a", "-", "a")];

    for (source, operator, operand) in cases {
        match single_expression(source) {
            Expression::Prefix(prefix) => {
                assert_eq!(prefix.operator, operator);
                assert_eq!(prefix.token_literal(), operator);
                assert_eq!(prefix.operand.to_string(), operand);
            }
            other => panic!("expected prefix expression, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_infix_expressions() {
    for operator in ["+", "-", "*", "/", ">", "<", "==", "!="] {
        let source = format!("5 {} 6;", operator);
        match single_expression(&source) {
            Expression::Infix(infix) => {
                assert_integer(&infix.left, 5);
                assert_eq!(infix.operator, operator);
                assert_integer(&infix.right, 6);
            }
            other => panic!("expected infix expression, got {:?}", other),
        }
    }
}

#[test]
fn test_operator_precedence() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4); ((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
        ),
        ("true", "true"),
        ("false", "false"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("3 < 5 == true", "((3 < 5) == true)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        (
            "add(a + b + c * d / f + g)",
            "add((((a + b) + ((c * d) / f)) + g))",
        ),
        ("-add(x)", "(-add(x))"),
    ];

    for (source, expected) in cases {
        assert_eq!(parse_clean(source).to_string(), expected, "source: {}", source);
    }
}

#[test]
fn test_product_binds_tighter_than_sum() {
    assert_snapshot!(single_expression("1 + 2 * 3;").to_string(), @"(1 + (2 * 3))");
}

#[test]
fn test_prefix_binds_tighter_than_product() {
    assert_snapshot!(single_expression("-a * b").to_string(), @"((-a) * b)");
}

#[test]
fn test_same_power_operators_associate_left() {
    assert_snapshot!(single_expression("a + b + c").to_string(), @"((a + b) + c)");
    assert_snapshot!(single_expression("a == b != c").to_string(), @"((a == b) != c)");
}

#[test]
fn test_parse_if_expression() {
    let expr = single_expression("if (x < y) { x }");
    let Expression::If(if_expr) = expr else {
        panic!("expected if expression, got {:?}", expr);
    };

    assert_eq!(if_expr.token_literal(), "if");
    assert_eq!(if_expr.condition.to_string(), "(x < y)");
    assert_eq!(block_source(&if_expr.consequent), vec!["x"]);
    assert!(if_expr.alternative.is_none());
}

#[test]
fn test_parse_if_else_expression() {
    let expr = single_expression("if (x < y) { x } else { y }");
    let Expression::If(if_expr) = &expr else {
        panic!("expected if expression, got {:?}", expr);
    };

    assert_eq!(block_source(&if_expr.consequent), vec!["x"]);
    let alternative = if_expr.alternative.as_ref().expect("else arm");
    assert_eq!(block_source(alternative), vec!["y"]);
    assert_snapshot!(expr.to_string(), @"if ((x < y)) { x } else { y }");
}

#[test]
fn test_parse_if_with_multiple_statements() {
    let expr = single_expression("if (a) { let b = 1; return b; } else { }");
    let Expression::If(if_expr) = &expr else {
        panic!("expected if expression, got {:?}", expr);
    };

    assert_eq!(block_source(&if_expr.consequent), vec!["let b = 1", "return b"]);
    assert_eq!(if_expr.alternative.as_ref().map(|block| block.statements.len()), Some(0));
    assert_eq!(expr.to_string(), "if (a) { let b = 1; return b } else {}");
}

#[test]
fn test_parse_function_literal() {
    let expr = single_expression("fn(x, y) { x + y; }");
    let Expression::Function(function) = &expr else {
        panic!("expected function literal, got {:?}", expr);
    };

    assert_eq!(function.token_literal(), "fn");
    assert_eq!(function.parameters.len(), 2);
    assert_eq!(function.parameters[0].name, "x");
    assert_eq!(function.parameters[1].name, "y");
    assert_eq!(block_source(&function.body), vec!["(x + y)"]);
    assert_snapshot!(expr.to_string(), @"fn(x, y) { (x + y) }");
}

#[test]
fn test_parse_function_parameters() {
    let cases: [(&str, &[&str]); 3] = [
        ("fn() {};", &[]),
        ("fn(x) {};", &["x"]),
        ("fn(x, y, z) {};", &["x", "y", "z"]),
    ];

    for (source, expected) in cases {
        let Expression::Function(function) = single_expression(source) else {
            panic!("expected function literal for {}", source);
        };
        let names: Vec<&str> = function
            .parameters
            .iter()
            .map(|param| param.name.as_str())
            .collect();
        assert_eq!(names, expected);
    }
}

#[test]
fn test_parse_call_expression() {
    let expr = single_expression("add(1, 2 * 3, 4 + 5);");
    let Expression::Call(call) = &expr else {
        panic!("expected call expression, got {:?}", expr);
    };

    assert_eq!(call.token_literal(), "(");
    assert_identifier(&call.function, "add");
    assert_eq!(call.arguments.len(), 3);
    assert_integer(&call.arguments[0], 1);
    assert_eq!(call.arguments[1].to_string(), "(2 * 3)");
    assert_eq!(call.arguments[2].to_string(), "(4 + 5)");
}

#[test]
fn test_parse_call_without_arguments() {
    let expr = single_expression("f()");
    let Expression::Call(call) = &expr else {
        panic!("expected call expression, got {:?}", expr);
    };
    assert!(call.arguments.is_empty());
    assert_eq!(expr.to_string(), "f()");
}

#[test]
fn test_parse_immediately_invoked_function() {
    assert_eq!(
        parse_clean("fn(x) { x }(5)").to_string(),
        "fn(x) { x }(5)"
    );
}

#[test]
fn test_semicolons_are_optional() {
    let program = parse_clean("let x = 5 let y = x return y x");
    assert_eq!(program.len(), 4);
    assert_eq!(program.to_string(), "let x = 5; let y = x; return y; x");
}

#[test]
fn test_program_token_literal() {
    assert_eq!(parse_clean("let x = 5;").token_literal(), "let");
    assert_eq!(parse_clean("x + 1").token_literal(), "x");
    assert_eq!(parse_clean("").token_literal(), "");
}

#[test]
fn test_empty_program() {
    let program = parse_clean("");
    assert!(program.is_empty());
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_parser_errors_accessor() {
    let mut parser = Parser::new(Lexer::new("let x 5;"));
    let program = parser.parse_program();

    assert_eq!(
        parser.errors(),
        &[ParseError::UnexpectedToken {
            expected: TokenKind::Assign,
            found: TokenKind::Int,
        }]
    );
    assert_eq!(
        parser.errors()[0].to_string(),
        "expected next token to be =, got INT instead"
    );
    // The stray `5;` still becomes an expression statement.
    assert_eq!(program.to_string(), "5");
}

#[test]
fn test_let_without_identifier() {
    let (program, errors) = parse("let = 10;");

    assert_eq!(
        errors,
        vec![
            ParseError::UnexpectedToken {
                expected: TokenKind::Identifier,
                found: TokenKind::Assign,
            },
            ParseError::NoPrefixParseFn {
                kind: TokenKind::Assign,
            },
        ]
    );
    assert_eq!(program.to_string(), "10");
}

#[test]
fn test_errors_do_not_stop_the_parse() {
    let (program, errors) = parse("let = 1; let y 2; let z = 3;");

    assert_eq!(errors.len(), 3);
    let Some(Statement::Let(last)) = program.statements.last() else {
        panic!("expected the last statement to be a let, got {:?}", program);
    };
    assert_eq!(last.to_string(), "let z = 3");
}

#[test]
fn test_illegal_character_surfaces_as_missing_prefix() {
    let (program, errors) = parse("let x = @;");

    assert_eq!(
        errors,
        vec![ParseError::NoPrefixParseFn {
            kind: TokenKind::Illegal,
        }]
    );
    let Statement::Let(let_stmt) = &program.statements[0] else {
        panic!("expected a let statement, got {:?}", program);
    };
    assert!(let_stmt.value.is_none());
}

#[test]
fn test_return_without_value() {
    let (program, errors) = parse("return;");

    assert_eq!(
        errors,
        vec![ParseError::NoPrefixParseFn {
            kind: TokenKind::Semicolon,
        }]
    );
    assert_eq!(program.to_string(), "return");
}

#[test]
fn test_integer_out_of_range() {
    let (program, errors) = parse("9223372036854775808;");

    assert_eq!(
        errors,
        vec![ParseError::IntegerParse {
            lexeme: "9223372036854775808".to_string(),
        }]
    );
    assert!(program.is_empty());
}

#[test]
fn test_unclosed_group() {
    let (_, errors) = parse("(1 + 2");

    assert_eq!(
        errors,
        vec![ParseError::UnexpectedToken {
            expected: TokenKind::CloseParen,
            found: TokenKind::EOF,
        }]
    );
}

#[test]
fn test_unclosed_block() {
    let (program, errors) = parse("if (x) { y");

    assert_eq!(
        errors,
        vec![ParseError::UnexpectedToken {
            expected: TokenKind::CloseCurly,
            found: TokenKind::EOF,
        }]
    );
    assert_eq!(program.to_string(), "if (x) { y }");
}

#[test]
fn test_if_without_parentheses() {
    let (_, errors) = parse("if x { y }");

    assert_eq!(
        errors[0],
        ParseError::UnexpectedToken {
            expected: TokenKind::OpenParen,
            found: TokenKind::Identifier,
        }
    );
}

#[test]
fn test_function_parameters_must_be_identifiers() {
    let (_, errors) = parse("fn(1) { }");

    assert_eq!(
        errors[0],
        ParseError::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Int,
        }
    );
}

#[test]
fn test_missing_operand_after_operator() {
    let (program, errors) = parse("1 +;");

    assert_eq!(
        errors,
        vec![ParseError::NoPrefixParseFn {
            kind: TokenKind::Semicolon,
        }]
    );
    assert!(program.is_empty());
}

#[test]
fn test_deeply_nested_groups_report_an_error() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    let (_, errors) = parse(&source);

    assert_eq!(
        errors.first(),
        Some(&ParseError::NestingTooDeep {
            limit: MAX_NESTING_DEPTH,
        })
    );
}

#[test]
fn test_deeply_nested_prefix_operators_report_an_error() {
    let source = format!("{}1", "-".repeat(5_000));

    let (_, errors) = parse(&source);

    assert!(errors
        .iter()
        .all(|error| *error == ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH }));
    assert!(!errors.is_empty());
}

#[test]
fn test_nesting_below_the_limit_parses() {
    let depth = MAX_NESTING_DEPTH / 2;
    let source = format!("{}x{}; y", "(".repeat(depth), ")".repeat(depth));

    let program = parse_clean(&source);

    assert_snapshot!(program.to_string(), @"x; y");
}

#[test]
fn test_nesting_depth_is_released_between_statements() {
    let depth = MAX_NESTING_DEPTH - 1;
    let nested = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let source = format!("{nested}; {nested}; {nested}");

    let program = parse_clean(&source);

    assert_eq!(program.len(), 3);
}
