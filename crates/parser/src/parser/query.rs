use {
    super::{error::Result, Parser},
    crate::{ast::Node, lexer::TokenKind},
};

impl Parser {
    /// `SELECT expr, ... FROM table [WHERE expr]`
    pub fn parse_select(&mut self) -> Result<Node> {
        self.index = 0;

        self.must_match(TokenKind::Select)?;
        let columns = self.parse_comma_separated(Self::parse_expr)?;

        self.must_match(TokenKind::From)?;
        let from = self.must_match(TokenKind::Identifier)?;

        let filter = match self.try_match(TokenKind::Where) {
            Some(_) => Some(Box::new(self.parse_expr()?)),
            None => None,
        };

        self.expect_end()?;

        Ok(Node::Select {
            columns,
            from,
            filter,
        })
    }
}
