use {
    crate::{Executor, Result},
    def::{storage::Storage, QueryResponse, Table},
    parser::{ColumnDef, Token},
};

impl<S: Storage> Executor<S> {
    /// Redefining a table is not checked; the new metadata simply
    /// replaces the old record.
    pub(crate) fn execute_create_table(
        &mut self,
        table: &Token,
        columns: &[ColumnDef],
    ) -> Result<QueryResponse> {
        let (names, types) = columns
            .iter()
            .map(|column| (column.name.text.clone(), column.kind.text.clone()))
            .unzip();

        let table = Table {
            name: table.text.clone(),
            columns: names,
            types,
        };
        Self::storage(self.storage.write_table(&table))?;

        Ok(QueryResponse::ack())
    }
}
