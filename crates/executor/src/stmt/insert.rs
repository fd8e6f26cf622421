use {
    crate::{builtins::Evaluate, Executor, Result},
    def::{storage::Storage, QueryResponse, Row},
    parser::{Node, Token},
};

impl<S: Storage> Executor<S> {
    /// Value expressions evaluate against an empty row, so identifier
    /// references resolve to Null rather than failing. The accumulated
    /// row is stored as given, without arity or type validation against
    /// the table metadata.
    pub(crate) fn execute_insert(&mut self, table: &Token, values: &[Node]) -> Result<QueryResponse> {
        let mut row = Row::default();
        for value in values {
            let cell = self.evaluate(value, &row)?;
            row.push(cell);
        }

        Self::storage(self.storage.write_row(&table.text, &row))?;

        Ok(QueryResponse::ack())
    }
}
