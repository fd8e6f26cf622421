use {
    crate::codec::{self, has_remaining, read_chunk, write_chunk},
    std::io::Cursor,
};

/// Table metadata: column names aligned 1:1 with type names, in declared
/// order. Written once by CREATE TABLE and never altered.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub types: Vec<String>,
}

impl Table {
    /// Encodes the column list; the table name is carried by the key.
    pub fn encode(&self) -> codec::Result<Vec<u8>> {
        let mut buf = Vec::new();
        for (column, kind) in self.columns.iter().zip(self.types.iter()) {
            write_chunk(&mut buf, column.as_bytes())?;
            write_chunk(&mut buf, kind.as_bytes())?;
        }

        Ok(buf)
    }

    pub fn decode(name: &str, data: &[u8]) -> codec::Result<Self> {
        let mut cursor = Cursor::new(data);
        let mut columns = Vec::new();
        let mut types = Vec::new();

        while has_remaining(&cursor) {
            columns.push(decode_text(&mut cursor)?);
            types.push(decode_text(&mut cursor)?);
        }

        Ok(Self {
            name: name.to_string(),
            columns,
            types,
        })
    }
}

fn decode_text(cursor: &mut Cursor<&[u8]>) -> codec::Result<String> {
    use snafu::ResultExt;

    String::from_utf8(read_chunk(cursor)?).context(codec::Utf8EncodingSnafu)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let table = Table {
            name: "users".to_string(),
            columns: vec!["id".to_string(), "name".to_string(), "age".to_string()],
            types: vec![
                "INTEGER".to_string(),
                "STRING".to_string(),
                "INTEGER".to_string(),
            ],
        };

        let encoded = table.encode().unwrap();
        assert_eq!(Table::decode("users", &encoded).unwrap(), table);
    }
}
