mod ast;
mod lexer;
mod parser;

pub use self::{
    ast::{ColumnDef, Node},
    lexer::{Lexer, Token, TokenKind},
    parser::{Error, Parser, Result},
};
