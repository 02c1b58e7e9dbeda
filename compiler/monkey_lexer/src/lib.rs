//! Lexer for Monkey source text.
//!
//! [`Lexer::next_token`] is called repeatedly until it returns an
//! [`TokenKind::Eof`] token; after that it keeps returning EOF. The lexer
//! never fails: input no rule matches becomes an [`TokenKind::Illegal`]
//! token for the parser to report.
//!
//! Lexical rules:
//! - whitespace (space, tab, newline, carriage return) separates tokens
//! - `==` and `!=` are the only two-character operators
//! - identifiers are `[A-Za-z_]+`, resolved against the keyword table
//! - integers are `[0-9]+`, kept as text
//! - strings run between double quotes with no escapes; an unterminated
//!   string is an `Illegal` token spanning from the quote to end of input

mod cursor;

use cursor::Cursor;
use monkey_ir::{lookup_ident, Span, Token, TokenKind};

/// Streaming tokenizer over a borrowed source string.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            finished: false,
        }
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.cursor.pos();
        let Some(c) = self.cursor.current() else {
            self.finished = true;
            return Token::new(TokenKind::Eof, "", Span::from_offsets(start, start));
        };

        let kind = match c {
            '=' => self.one_or_two(TokenKind::Assign, '=', TokenKind::Eq),
            '!' => self.one_or_two(TokenKind::Bang, '=', TokenKind::NotEq),
            '"' => return self.string(start),
            c if is_letter(c) => {
                self.cursor.eat_while(is_letter);
                lookup_ident(self.cursor.slice_from(start))
            }
            c if c.is_ascii_digit() => {
                self.cursor.eat_while(|c| c.is_ascii_digit());
                TokenKind::Int
            }
            c => {
                self.cursor.advance();
                single_char_kind(c)
            }
        };

        self.token(kind, start)
    }

    /// Collect every remaining token, including the final EOF.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        self.cursor
            .eat_while(|c| matches!(c, ' ' | '\t' | '\n' | '\r'));
    }

    /// Consume the current character, plus `second` if it follows.
    fn one_or_two(&mut self, single: TokenKind, second: char, double: TokenKind) -> TokenKind {
        let paired = self.cursor.peek() == Some(second);
        self.cursor.advance();
        if paired {
            self.cursor.advance();
            double
        } else {
            single
        }
    }

    /// The literal of a string token excludes the quotes; its span covers them.
    fn string(&mut self, start: usize) -> Token {
        self.cursor.advance();
        let body = self.cursor.pos();
        match self.cursor.find('"') {
            Some(close) => {
                self.cursor.set_pos(close);
                let literal = self.cursor.slice_from(body);
                self.cursor.advance();
                Token::new(
                    TokenKind::String,
                    literal,
                    Span::from_offsets(start, self.cursor.pos()),
                )
            }
            None => {
                self.cursor.skip_to_end();
                self.token(TokenKind::Illegal, start)
            }
        }
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(start),
            Span::from_offsets(start, self.cursor.pos()),
        )
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to and including EOF, then stops.
    fn next(&mut self) -> Option<Token> {
        if self.finished && self.cursor.is_eof() {
            return None;
        }
        Some(self.next_token())
    }
}

/// Lex `source` into a token vector ending with EOF.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn single_char_kind(c: char) -> TokenKind {
    match c {
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Asterisk,
        '/' => TokenKind::Slash,
        '<' => TokenKind::Lt,
        '>' => TokenKind::Gt,
        ',' => TokenKind::Comma,
        ';' => TokenKind::Semicolon,
        ':' => TokenKind::Colon,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '{' => TokenKind::LBrace,
        '}' => TokenKind::RBrace,
        '[' => TokenKind::LBracket,
        ']' => TokenKind::RBracket,
        _ => TokenKind::Illegal,
    }
}
