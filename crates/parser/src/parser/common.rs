use {
    super::{
        error::{Result, TrailingTokensSnafu, UnexpectedEndSnafu, UnexpectedTokenSnafu},
        Parser,
    },
    crate::lexer::{Token, TokenKind},
    snafu::prelude::*,
};

impl Parser {
    pub(super) fn peek_is(&self, kind: TokenKind) -> bool {
        self.tokens
            .get(self.index)
            .map_or(false, |token| token.kind == kind)
    }

    pub(super) fn must_match(&mut self, kind: TokenKind) -> Result<Token> {
        match self.tokens.get(self.index) {
            Some(token) if token.kind == kind => {
                self.index += 1;
                Ok(token.clone())
            }
            Some(token) => UnexpectedTokenSnafu {
                expected: kind,
                found: describe(token),
            }
            .fail(),
            None => UnexpectedEndSnafu { expected: kind }.fail(),
        }
    }

    pub(super) fn try_match(&mut self, kind: TokenKind) -> Option<Token> {
        if !self.peek_is(kind) {
            return None;
        }

        let token = self.tokens[self.index].clone();
        self.index += 1;
        Some(token)
    }

    /// Statement entry points must consume the whole token stream.
    pub(super) fn expect_end(&self) -> Result<()> {
        ensure!(self.index >= self.tokens.len(), TrailingTokensSnafu);
        Ok(())
    }

    pub(super) fn parse_comma_separated<T, F>(&mut self, mut func: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Parser) -> Result<T>,
    {
        let mut items = vec![func(self)?];

        while self.try_match(TokenKind::Comma).is_some() {
            items.push(func(self)?);
        }

        Ok(items)
    }
}

fn describe(token: &Token) -> String {
    if token.text.is_empty() {
        token.kind.to_string()
    } else {
        token.text.clone()
    }
}
