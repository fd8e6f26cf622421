use {
    super::{
        error::{NoExpressionSnafu, Result},
        Parser,
    },
    crate::{
        ast::Node,
        lexer::{Token, TokenKind},
    },
    snafu::prelude::*,
};

const BINARY_OPS: [TokenKind; 4] = [
    TokenKind::Equal,
    TokenKind::LessThan,
    TokenKind::Plus,
    TokenKind::Concat,
];

impl Parser {
    /// Parses one expression at the current position: a literal, the
    /// call sugar `ident(args...)`, or a binary chain. Operators carry no
    /// precedence and recurse on the right-hand side, so chains are
    /// right-associative: `a = b = c` parses as `a = (b = c)`.
    pub(super) fn parse_expr(&mut self) -> Result<Node> {
        let literal = self
            .try_match(TokenKind::Integer)
            .or_else(|| self.try_match(TokenKind::String))
            .or_else(|| self.try_match(TokenKind::Identifier))
            .context(NoExpressionSnafu)?;

        if literal.kind == TokenKind::Identifier && self.peek_is(TokenKind::LParen) {
            return self.parse_function_call(literal);
        }

        let expr = Node::Literal(literal);

        for op in BINARY_OPS {
            if self.try_match(op).is_some() {
                return Ok(Node::Binop {
                    left: Box::new(expr),
                    op,
                    right: Box::new(self.parse_expr()?),
                });
            }
        }

        Ok(expr)
    }

    fn parse_function_call(&mut self, name: Token) -> Result<Node> {
        self.must_match(TokenKind::LParen)?;

        let mut args = Vec::new();
        while !self.peek_is(TokenKind::RParen) {
            if !args.is_empty() {
                self.must_match(TokenKind::Comma)?;
            }

            args.push(self.parse_expr()?);
        }
        self.must_match(TokenKind::RParen)?;

        Ok(Node::FunctionCall { name, args })
    }
}
