mod common;
mod ddl;
mod error;
mod expr;
mod insert;
mod query;

pub use self::error::{Error, Result};

use {
    self::error::UnrecognizedStatementSnafu,
    crate::{
        ast::Node,
        lexer::{Token, TokenKind},
    },
    snafu::prelude::*,
};

/// Recursive-descent parser over a lexed token stream. Every statement
/// entry point rewinds to the first token, so each one is independently
/// re-runnable over the same stream and must consume it entirely.
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    /// Dispatches on the leading token's kind.
    pub fn parse(&mut self) -> Result<Node> {
        match self.tokens.first().map(|token| token.kind) {
            Some(TokenKind::Select) => self.parse_select(),
            Some(TokenKind::CreateTable) => self.parse_create_table(),
            Some(TokenKind::Insert) => self.parse_insert(),
            _ => UnrecognizedStatementSnafu.fail(),
        }
    }
}
