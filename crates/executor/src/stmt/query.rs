use {
    crate::{builtins::Evaluate, Executor, NoSuchTableSnafu, Result},
    def::{storage::Storage, QueryResponse},
    parser::{Node, Token, TokenKind},
};

impl<S: Storage> Executor<S> {
    /// Bare identifier columns form the field header. Every column
    /// expression still executes per row, so a row can be wider than the
    /// header when other expression kinds appear in the column list.
    pub(crate) fn execute_select(
        &self,
        columns: &[Node],
        from: &Token,
        filter: Option<&Node>,
    ) -> Result<QueryResponse> {
        let name = from.text.as_str();
        if Self::storage(self.storage.table(name))?.is_none() {
            return NoSuchTableSnafu { name }.fail();
        }

        let mut fields = Vec::new();
        for column in columns {
            if let Node::Literal(token) = column {
                if token.kind == TokenKind::Identifier {
                    fields.push(token.text.clone());
                }
            }
        }

        let mut rows = Vec::new();
        for row in Self::storage(self.storage.scan(name))? {
            let row = Self::storage(row)?;

            if let Some(filter) = filter {
                if !self.evaluate(filter, &row)?.as_bool() {
                    continue;
                }
            }

            let mut out = Vec::with_capacity(columns.len());
            for column in columns {
                out.push(self.evaluate(column, &row)?.to_string());
            }
            rows.push(out);
        }

        Ok(QueryResponse::table(fields, rows))
    }
}
