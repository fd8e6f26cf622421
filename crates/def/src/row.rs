use {
    crate::{
        codec::{self, has_remaining, read_chunk, write_chunk},
        Value,
    },
    std::io::Cursor,
};

/// One stored row: field names shared by every row of a table, paired
/// positionally with the cell values. The two sequences may differ in
/// length since inserts are not validated against table metadata.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    fields: Vec<String>,
    cells: Vec<Value>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self {
            fields,
            cells: Vec::new(),
        }
    }

    pub fn push(&mut self, value: Value) {
        self.cells.push(value);
    }

    /// The value at the first field position matching `name`, or `Null`
    /// when the field is absent or has no cell.
    pub fn get(&self, name: &str) -> Value {
        self.fields
            .iter()
            .position(|field| field == name)
            .and_then(|i| self.cells.get(i).cloned())
            .unwrap_or(Value::Null)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn cells(&self) -> &[Value] {
        &self.cells
    }

    /// Encodes only the cells; field names live in the table metadata.
    pub fn encode(&self) -> codec::Result<Vec<u8>> {
        let mut buf = Vec::new();
        for cell in &self.cells {
            write_chunk(&mut buf, &cell.encode()?)?;
        }

        Ok(buf)
    }

    pub fn decode(fields: Vec<String>, data: &[u8]) -> codec::Result<Self> {
        let mut cursor = Cursor::new(data);
        let mut cells = Vec::new();

        while has_remaining(&cursor) {
            cells.push(Value::decode(&read_chunk(&mut cursor)?)?);
        }

        Ok(Self { fields, cells })
    }
}
