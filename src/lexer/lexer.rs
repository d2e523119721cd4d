use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::MK_TOKEN;

use super::tokens::{lookup_ident, Token, TokenKind};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref INTEGER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// Pull-based scanner over a source string.
///
/// Characters are classified one byte at a time. Once the input is
/// exhausted, [`Lexer::next_token`] keeps returning the end-of-input token.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    /// Index of `ch` in `source`
    position: usize,
    /// Always `position + 1`
    read_position: usize,
    /// Byte under the cursor, `None` past the end
    ch: Option<u8>,
    /// Set once the iterator has yielded EOF
    finished: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let mut lexer = Lexer {
            source: source.to_string(),
            position: 0,
            read_position: 0,
            ch: None,
            finished: false,
        };
        lexer.read_char();
        lexer
    }

    /// Returns the index of the byte under the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the index of the lookahead byte.
    pub fn read_position(&self) -> usize {
        self.read_position
    }

    /// Scans and returns the next token.
    pub fn next_token(&mut self) -> Token {
        let token = self.scan_token();
        trace!(kind = %token.kind, lexeme = %token.lexeme, "token");
        token
    }

    fn scan_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            None => MK_TOKEN!(TokenKind::EOF, ""),
            Some(b'=') => self.pair_token(TokenKind::Equals, TokenKind::Assign),
            Some(b'!') => self.pair_token(TokenKind::NotEquals, TokenKind::Bang),
            Some(b'+') => MK_TOKEN!(TokenKind::Plus, "+"),
            Some(b'-') => MK_TOKEN!(TokenKind::Minus, "-"),
            Some(b'*') => MK_TOKEN!(TokenKind::Asterisk, "*"),
            Some(b'/') => MK_TOKEN!(TokenKind::Slash, "/"),
            Some(b'<') => MK_TOKEN!(TokenKind::Less, "<"),
            Some(b'>') => MK_TOKEN!(TokenKind::Greater, ">"),
            Some(b',') => MK_TOKEN!(TokenKind::Comma, ","),
            Some(b';') => MK_TOKEN!(TokenKind::Semicolon, ";"),
            Some(b'(') => MK_TOKEN!(TokenKind::OpenParen, "("),
            Some(b')') => MK_TOKEN!(TokenKind::CloseParen, ")"),
            Some(b'{') => MK_TOKEN!(TokenKind::OpenCurly, "{"),
            Some(b'}') => MK_TOKEN!(TokenKind::CloseCurly, "}"),
            // Runs leave the cursor on the first byte after them already.
            Some(ch) if is_letter(ch) => return self.read_identifier(),
            Some(ch) if ch.is_ascii_digit() => return self.read_number(),
            Some(_) => return self.read_illegal(),
        };

        self.read_char();
        token
    }

    fn seek(&mut self, position: usize) {
        let position = position.min(self.source.len());
        self.position = position;
        self.read_position = position + 1;
        self.ch = self.source.as_bytes().get(position).copied();
    }

    fn read_char(&mut self) {
        self.seek(self.read_position);
    }

    fn peek_char(&self) -> Option<u8> {
        self.source.as_bytes().get(self.read_position).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.read_char();
        }
    }

    /// Emits `double` when the current byte is followed by `=`, else `single`.
    /// Leaves the cursor on the last byte of the token.
    fn pair_token(&mut self, double: TokenKind, single: TokenKind) -> Token {
        let start = self.position;
        if self.peek_char() == Some(b'=') {
            self.read_char();
            MK_TOKEN!(double, &self.source[start..=self.position])
        } else {
            MK_TOKEN!(single, &self.source[start..self.read_position])
        }
    }

    fn read_identifier(&mut self) -> Token {
        let lexeme = self.read_run(&IDENTIFIER_PATTERN);
        MK_TOKEN!(lookup_ident(&lexeme), lexeme)
    }

    fn read_number(&mut self) -> Token {
        let lexeme = self.read_run(&INTEGER_PATTERN);
        MK_TOKEN!(TokenKind::Int, lexeme)
    }

    /// Consumes the whole character under the cursor, which may span
    /// several bytes.
    fn read_illegal(&mut self) -> Token {
        let start = self.position;
        let end = self.source[start..]
            .chars()
            .next()
            .map_or(start + 1, |ch| start + ch.len_utf8());
        self.seek(end);
        MK_TOKEN!(TokenKind::Illegal, &self.source[start..end])
    }

    /// Consumes the longest match of `pattern` at the cursor.
    fn read_run(&mut self, pattern: &Regex) -> String {
        let start = self.position;
        let end = pattern
            .find(&self.source[start..])
            .map_or(start, |matched| start + matched.end());
        self.seek(end);
        self.source[start..end].to_string()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token up to and including the first EOF, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.kind == TokenKind::EOF;
        Some(token)
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Scans `source` to completion. The last token is always EOF.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
