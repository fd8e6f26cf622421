//! Text-in, response-out facade wiring the lexer, parser and executor
//! over a storage backend.

use {
    def::{storage::Storage, QueryResponse},
    executor::Executor,
    parser::{Lexer, Parser},
    snafu::prelude::*,
    storage::{Memory, Store},
};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("parse error"))]
    Parse { source: parser::Error },

    #[snafu(display("execution error"))]
    Execute { source: executor::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

pub struct Database<S: Storage> {
    executor: Executor<S>,
}

impl Database<Store<Memory>> {
    pub fn in_memory() -> Self {
        Self::new(Store::new(Memory::default()))
    }
}

impl<S: Storage> Database<S> {
    pub fn new(storage: S) -> Self {
        Self {
            executor: Executor::new(storage),
        }
    }

    /// Runs one statement end to end. Anything past the statement's last
    /// token is a parse error, so a call carries exactly one statement.
    pub fn execute(&mut self, sql: &str) -> Result<QueryResponse> {
        let tokens = Lexer::new(sql).lex();
        let stmt = Parser::new(tokens).parse().context(ParseSnafu)?;

        self.executor.execute(&stmt).context(ExecuteSnafu)
    }
}
