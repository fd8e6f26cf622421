use {
    super::{error::Result, Parser},
    crate::{ast::Node, lexer::TokenKind},
};

impl Parser {
    /// `INSERT INTO table VALUES(expr, ...)`
    pub fn parse_insert(&mut self) -> Result<Node> {
        self.index = 0;

        self.must_match(TokenKind::Insert)?;
        let table = self.must_match(TokenKind::Identifier)?;
        self.must_match(TokenKind::Values)?;

        self.must_match(TokenKind::LParen)?;
        let values = self.parse_comma_separated(Self::parse_expr)?;
        self.must_match(TokenKind::RParen)?;

        self.expect_end()?;

        Ok(Node::Insert { table, values })
    }
}
