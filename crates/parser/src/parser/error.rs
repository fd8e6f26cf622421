use {crate::lexer::TokenKind, snafu::prelude::*};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("unexpected end of input, expected {}", expected))]
    UnexpectedEnd { expected: TokenKind },

    #[snafu(display("expected {}, found '{}'", expected, found))]
    UnexpectedToken { expected: TokenKind, found: String },

    #[snafu(display("expected an expression"))]
    NoExpression,

    #[snafu(display("statement was not consumed entirely"))]
    TrailingTokens,

    #[snafu(display("unrecognized statement"))]
    UnrecognizedStatement,
}
