use {
    super::{error::Result, Parser},
    crate::{
        ast::{ColumnDef, Node},
        lexer::TokenKind,
    },
};

impl Parser {
    /// `CREATE TABLE table (name kind, ...)`
    pub fn parse_create_table(&mut self) -> Result<Node> {
        self.index = 0;

        self.must_match(TokenKind::CreateTable)?;
        let table = self.must_match(TokenKind::Identifier)?;

        self.must_match(TokenKind::LParen)?;
        let columns = self.parse_comma_separated(|parser| {
            let name = parser.must_match(TokenKind::Identifier)?;
            let kind = parser.must_match(TokenKind::Identifier)?;

            Ok(ColumnDef { name, kind })
        })?;
        self.must_match(TokenKind::RParen)?;

        self.expect_end()?;

        Ok(Node::CreateTable { table, columns })
    }
}
