//! The storage collaborator contract consumed by the executor. The engine
//! behind it (an LSM, an embedded KV library, a plain in-memory map) is
//! someone else's problem; only table metadata, row persistence, and
//! forward-only iteration matter here.

use crate::{Row, Table};

/// A single-pass stream of decoded rows. Dropping it releases whatever
/// the engine holds open for the scan.
pub type Rows<'a, E> = Box<dyn Iterator<Item = Result<Row, E>> + 'a>;

pub trait Storage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Table metadata by name; `None` when the table was never created.
    fn table(&self, name: &str) -> Result<Option<Table>, Self::Error>;

    /// Durably writes table metadata. Last write wins.
    fn write_table(&mut self, table: &Table) -> Result<(), Self::Error>;

    fn write_row(&mut self, table: &str, row: &Row) -> Result<(), Self::Error>;

    /// Opens a row iterator over one table. Fails if the table is unknown.
    fn scan(&self, table: &str) -> Result<Rows<'_, Self::Error>, Self::Error>;
}
