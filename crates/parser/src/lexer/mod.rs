mod token;

pub use self::token::{Token, TokenKind};

use self::token::BUILTINS;

/// Single-pass tokenizer. Each sub-lexer returns `None` when it does not
/// match at the current position, leaving the position untouched.
pub struct Lexer<'a> {
    src: &'a str,
    index: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, index: 0 }
    }

    /// Tokenizes the whole input. A character no sub-lexer recognizes is
    /// dropped silently and scanning continues with the next one.
    pub fn lex(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            if self.index >= self.src.len() {
                break;
            }

            let token = self
                .keyword()
                .or_else(|| self.identifier())
                .or_else(|| self.string())
                .or_else(|| self.integer());

            match token {
                Some(token) => tokens.push(token),
                None => self.index += 1,
            }
        }

        tokens
    }

    fn rest(&self) -> &'a [u8] {
        &self.src.as_bytes()[self.index..]
    }

    fn skip_whitespace(&mut self) {
        while self
            .rest()
            .first()
            .map_or(false, u8::is_ascii_whitespace)
        {
            self.index += 1;
        }
    }

    /// First case-insensitive match against the builtin table. The two
    /// multi-word keywords require exactly one interior space.
    fn keyword(&mut self) -> Option<Token> {
        let rest = self.rest();

        for (name, kind) in BUILTINS {
            if rest.len() >= name.len() && rest[..name.len()].eq_ignore_ascii_case(name.as_bytes())
            {
                self.index += name.len();
                return Some(Token::keyword(kind));
            }
        }

        None
    }

    /// A run of ASCII letters or `*`.
    fn identifier(&mut self) -> Option<Token> {
        let len = self
            .rest()
            .iter()
            .take_while(|&&b| b.is_ascii_alphabetic() || b == b'*')
            .count();
        if len == 0 {
            return None;
        }

        let text = &self.src[self.index..self.index + len];
        self.index += len;

        Some(Token::new(TokenKind::Identifier, text))
    }

    /// `'...'` with no escape handling. Empty and unterminated literals do
    /// not match.
    fn string(&mut self) -> Option<Token> {
        let rest = self.rest();
        if rest.first() != Some(&b'\'') {
            return None;
        }

        let len = rest[1..].iter().position(|&b| b == b'\'')?;
        if len == 0 {
            return None;
        }

        let text = &self.src[self.index + 1..self.index + 1 + len];
        self.index += len + 2;

        Some(Token::new(TokenKind::String, text))
    }

    /// An unsigned run of ASCII digits; signs, exponents, and decimal
    /// points are not recognized.
    fn integer(&mut self) -> Option<Token> {
        let len = self
            .rest()
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if len == 0 {
            return None;
        }

        let text = &self.src[self.index..self.index + len];
        self.index += len;

        Some(Token::new(TokenKind::Integer, text))
    }
}
