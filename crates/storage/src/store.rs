use {
    crate::{
        engine::Engine,
        error::{CodecSnafu, Error, Result, UnknownTableSnafu},
    },
    def::{
        storage::{Rows, Storage},
        Row, Table,
    },
    snafu::prelude::*,
};

/// Adapter from the SQL-facing `Storage` contract to an ordered key-value
/// engine: derives keys, frames metadata and rows, and attaches field
/// names from table metadata while scanning.
pub struct Store<E: Engine> {
    engine: E,
}

impl<E: Engine> Store<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }
}

/// One metadata record per table name; last write wins.
fn table_key(name: &str) -> Vec<u8> {
    format!("t_{}", name).into_bytes()
}

fn row_prefix(name: &str) -> Vec<u8> {
    format!("r_{}_", name).into_bytes()
}

/// Row keys end in a 16-byte random identifier. Uniqueness is not
/// enforced; the collision probability is negligible.
fn row_key(name: &str) -> Vec<u8> {
    let mut key = row_prefix(name);
    key.extend_from_slice(&rand::random::<[u8; 16]>());
    key
}

impl<E: Engine> Storage for Store<E> {
    type Error = Error;

    fn table(&self, name: &str) -> Result<Option<Table>> {
        match self.engine.get(&table_key(name))? {
            Some(data) => Ok(Some(Table::decode(name, &data).context(CodecSnafu)?)),
            None => Ok(None),
        }
    }

    fn write_table(&mut self, table: &Table) -> Result<()> {
        let data = table.encode().context(CodecSnafu)?;
        self.engine.put(&table_key(&table.name), &data)
    }

    fn write_row(&mut self, table: &str, row: &Row) -> Result<()> {
        let data = row.encode().context(CodecSnafu)?;
        self.engine.put(&row_key(table), &data)
    }

    fn scan(&self, table: &str) -> Result<Rows<'_, Error>> {
        let fields = self
            .table(table)?
            .context(UnknownTableSnafu { name: table })?
            .columns;

        Ok(Box::new(self.engine.scan_prefix(&row_prefix(table)).map(
            move |item| {
                let (_, data) = item?;
                Row::decode(fields.clone(), &data).context(CodecSnafu)
            },
        )))
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::engine::Memory, def::Value};

    fn users_table() -> Table {
        Table {
            name: "users".to_string(),
            columns: vec!["id".to_string(), "name".to_string(), "age".to_string()],
            types: vec![
                "INTEGER".to_string(),
                "STRING".to_string(),
                "INTEGER".to_string(),
            ],
        }
    }

    fn user_row(id: i64, name: &str, age: i64) -> Row {
        let mut row = Row::new(vec![
            "id".to_string(),
            "name".to_string(),
            "age".to_string(),
        ]);
        row.push(Value::Integer(id));
        row.push(Value::String(name.to_string()));
        row.push(Value::Integer(age));
        row
    }

    #[test]
    fn table_metadata_round_trips() {
        let mut store = Store::new(Memory::new());
        let table = users_table();

        store.write_table(&table).unwrap();
        assert_eq!(store.table("users").unwrap(), Some(table));
        assert_eq!(store.table("missing").unwrap(), None);
    }

    #[test]
    fn table_redefinition_overwrites() {
        let mut store = Store::new(Memory::new());
        store.write_table(&users_table()).unwrap();

        let redefined = Table {
            name: "users".to_string(),
            columns: vec!["only".to_string()],
            types: vec!["STRING".to_string()],
        };
        store.write_table(&redefined).unwrap();

        assert_eq!(store.table("users").unwrap(), Some(redefined));
    }

    #[test]
    fn rows_scan_with_fields_attached() {
        let mut store = Store::new(Memory::new());
        store.write_table(&users_table()).unwrap();

        store.write_row("users", &user_row(1, "Alice", 30)).unwrap();
        store.write_row("users", &user_row(2, "Bob", 25)).unwrap();

        let rows: Vec<_> = store
            .scan("users")
            .unwrap()
            .map(|row| row.unwrap())
            .collect();

        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.fields(), ["id", "name", "age"]);
            assert_eq!(row.get("name"), row.cells()[1].clone());
        }
    }

    #[test]
    fn scan_unknown_table_fails() {
        let store = Store::new(Memory::new());

        assert!(matches!(
            store.scan("missing"),
            Err(Error::UnknownTable { name }) if name == "missing"
        ));
    }

    #[test]
    fn tables_do_not_bleed_into_each_other() {
        let mut store = Store::new(Memory::new());
        for name in ["a", "aa"] {
            store
                .write_table(&Table {
                    name: name.to_string(),
                    columns: vec!["x".to_string()],
                    types: vec!["INTEGER".to_string()],
                })
                .unwrap();
        }

        let mut row = Row::new(vec!["x".to_string()]);
        row.push(Value::Integer(7));
        store.write_row("aa", &row).unwrap();

        assert_eq!(store.scan("a").unwrap().count(), 0);
        assert_eq!(store.scan("aa").unwrap().count(), 1);
    }
}
