pub mod codec;
mod response;
mod row;
pub mod storage;
mod table;
mod value;

pub use self::{response::QueryResponse, row::Row, table::Table, value::Value};
