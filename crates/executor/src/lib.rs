mod builtins;
mod expr;
mod stmt;


pub use self::builtins::Evaluate;

use {
    def::{storage::Storage, QueryResponse},
    parser::{Node, TokenKind},
    snafu::prelude::*,
};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("not a statement"))]
    NotAStatement,

    #[snafu(display("not an expression"))]
    NotAnExpression,

    #[snafu(display("no such table '{}'", name))]
    NoSuchTable { name: String },

    #[snafu(display("cannot compare {} and {}", left, right))]
    TypeMismatch {
        left: &'static str,
        right: &'static str,
    },

    #[snafu(display("operator '{}' has no evaluation rule", op))]
    UnsupportedOperator { op: TokenKind },

    #[snafu(display("function '{}' not found", name))]
    UnknownFunction { name: String },

    #[snafu(display("{} takes {} arguments, got: {}", name, expected, actual))]
    FunctionArity {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[snafu(display("storage failure"))]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Tree-walking interpreter bound to one storage collaborator. A
/// statement either runs to completion or aborts on its first error;
/// writes already applied are not rolled back.
pub struct Executor<S: Storage> {
    storage: S,
}

impl<S: Storage> Executor<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn execute(&mut self, stmt: &Node) -> Result<QueryResponse> {
        match stmt {
            Node::Select {
                columns,
                from,
                filter,
            } => self.execute_select(columns, from, filter.as_deref()),
            Node::CreateTable { table, columns } => self.execute_create_table(table, columns),
            Node::Insert { table, values } => self.execute_insert(table, values),
            _ => NotAStatementSnafu.fail(),
        }
    }

    pub(crate) fn storage<T>(result: std::result::Result<T, S::Error>) -> Result<T> {
        result.map_err(|source| Error::Storage {
            source: Box::new(source),
        })
    }
}
