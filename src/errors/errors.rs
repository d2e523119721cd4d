use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A syntax error recorded by the parser.
///
/// The `Display` rendering is the diagnostic message handed to users.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("no prefix parse function for {kind}")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {lexeme:?} as integer")]
    IntegerParse { lexeme: String },
    #[error("expressions nested more than {limit} levels deep")]
    NestingTooDeep { limit: usize },
}

impl ParseError {
    pub fn get_error_name(&self) -> &str {
        match self {
            ParseError::UnexpectedToken { .. } => "UnexpectedToken",
            ParseError::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ParseError::IntegerParse { .. } => "IntegerParse",
            ParseError::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            ParseError::UnexpectedToken {
                expected: TokenKind::CloseCurly,
                found: TokenKind::EOF,
            } => ErrorTip::Suggestion(String::from("a block is missing its closing `}`")),
            ParseError::UnexpectedToken { .. } => ErrorTip::None,
            ParseError::NoPrefixParseFn {
                kind: TokenKind::Illegal,
            } => ErrorTip::Suggestion(String::from(
                "the source contains a character the language does not use",
            )),
            ParseError::NoPrefixParseFn { kind } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                kind
            )),
            ParseError::IntegerParse { lexeme } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                lexeme
            )),
            ParseError::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split the expression with `let` bindings",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
